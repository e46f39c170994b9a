use std::borrow::Cow;
use std::sync::Arc;

use xacml_primitives::{AlgorithmId, CombinerResult, EvalError, Outcome};

use super::Combiner;
use crate::core::{RegistryBuilder, RegistryIndex, RegistrySource};
use crate::error::RegistryError;

/// Mutable registration phase of the Algorithm Registry.
pub struct AlgorithmRegistryBuilder {
	index: RegistryBuilder<AlgorithmId, dyn Combiner>,
}

impl AlgorithmRegistryBuilder {
	pub fn new() -> Self {
		Self {
			index: RegistryBuilder::new("algorithms"),
		}
	}

	pub fn register(
		&mut self,
		id: AlgorithmId,
		combiner: Arc<dyn Combiner>,
		source: RegistrySource,
	) -> Result<Arc<dyn Combiner>, RegistryError> {
		self.index.insert(id, combiner, source)
	}

	pub fn contains(&self, id: &str) -> bool {
		self.index.contains(id)
	}

	pub fn len(&self) -> usize {
		self.index.len()
	}

	pub fn is_empty(&self) -> bool {
		self.index.is_empty()
	}

	pub fn seal(self) -> AlgorithmRegistry {
		AlgorithmRegistry {
			index: self.index.build(),
		}
	}
}

impl Default for AlgorithmRegistryBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Sealed Algorithm Registry.
pub struct AlgorithmRegistry {
	index: RegistryIndex<AlgorithmId, dyn Combiner>,
}

impl AlgorithmRegistry {
	pub fn resolve(&self, id: &str) -> Result<&Arc<dyn Combiner>, EvalError> {
		self.index
			.get(id)
			.ok_or_else(|| EvalError::UnknownAlgorithm(AlgorithmId::new(id)))
	}

	/// Combines `results` with algorithm `id`.
	///
	/// Results are put in ordinal order first; ties keep their input order.
	pub fn combine(&self, id: &str, results: &[CombinerResult]) -> Result<Outcome, EvalError> {
		let combiner = self.resolve(id)?;
		let ordered = if results.is_sorted_by_key(|r| r.ordinal) {
			Cow::Borrowed(results)
		} else {
			let mut sorted = results.to_vec();
			sorted.sort_by_key(|r| r.ordinal);
			Cow::Owned(sorted)
		};
		Ok(combiner.combine(&ordered))
	}

	pub fn source(&self, id: &str) -> Option<RegistrySource> {
		self.index.source(id)
	}

	pub fn contains(&self, id: &str) -> bool {
		self.index.contains(id)
	}

	pub fn len(&self) -> usize {
		self.index.len()
	}

	pub fn is_empty(&self) -> bool {
		self.index.is_empty()
	}

	pub fn ids(&self) -> impl Iterator<Item = &AlgorithmId> {
		self.index.ids()
	}
}

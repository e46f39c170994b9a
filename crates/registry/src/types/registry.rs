use std::sync::Arc;

use xacml_primitives::{DatatypeId, EvalError, ParamKind, TypedValue};

use super::Converter;
use crate::core::{RegistryBuilder, RegistryIndex, RegistrySource};
use crate::error::RegistryError;

/// Mutable registration phase of the Type Registry.
pub struct TypeRegistryBuilder {
	index: RegistryBuilder<DatatypeId, Converter>,
}

impl TypeRegistryBuilder {
	pub fn new() -> Self {
		Self {
			index: RegistryBuilder::new("types"),
		}
	}

	/// Registers `converter` under `id`.
	///
	/// Returns the shared converter so the caller can instantiate its bag
	/// family without a second lookup.
	pub fn register(
		&mut self,
		id: DatatypeId,
		converter: Converter,
		source: RegistrySource,
	) -> Result<Arc<Converter>, RegistryError> {
		if converter.datatype() != &id {
			return Err(RegistryError::IdMismatch {
				declared: id,
				actual: converter.datatype().clone(),
			});
		}
		self.index.insert(id, Arc::new(converter), source)
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

	pub fn seal(self) -> TypeRegistry {
		TypeRegistry {
			index: self.index.build(),
		}
	}
}

impl Default for TypeRegistryBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Sealed Type Registry. Read-only and safe for concurrent callers.
pub struct TypeRegistry {
	index: RegistryIndex<DatatypeId, Converter>,
}

impl TypeRegistry {
	pub fn resolve(&self, id: &str) -> Result<&Arc<Converter>, EvalError> {
		self.index
			.get(id)
			.ok_or_else(|| EvalError::UnknownType(DatatypeId::new(id)))
	}

	/// Parses `text` as a value of datatype `id`.
	pub fn parse(&self, id: &str, text: &str) -> Result<TypedValue, EvalError> {
		self.resolve(id)?.parse(text)
	}

	/// Compares two values under their datatype's equality.
	///
	/// Values of different datatypes are a [`EvalError::TypeMismatch`],
	/// never `false`.
	pub fn values_equal(&self, a: &TypedValue, b: &TypedValue) -> Result<bool, EvalError> {
		if a.datatype() != b.datatype() {
			return Err(EvalError::TypeMismatch {
				expected: ParamKind::Value(a.datatype().clone()),
				found: ParamKind::Value(b.datatype().clone()),
			});
		}
		self.resolve(a.datatype().as_str())?.equals(a, b)
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

	/// Iterates registered datatypes in registration order.
	pub fn iter(&self) -> impl Iterator<Item = (&DatatypeId, &Arc<Converter>)> {
		self.index.iter()
	}
}

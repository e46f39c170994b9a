use std::sync::Arc;

use xacml_primitives::{EvalError, FunctionId, Operand};

use super::FunctionDescriptor;
use crate::core::{RegistryBuilder, RegistryIndex, RegistrySource};
use crate::error::RegistryError;

/// Mutable registration phase of the Function Registry.
pub struct FunctionRegistryBuilder {
	index: RegistryBuilder<FunctionId, FunctionDescriptor>,
}

impl FunctionRegistryBuilder {
	pub fn new() -> Self {
		Self {
			index: RegistryBuilder::new("functions"),
		}
	}

	pub fn register(
		&mut self,
		id: FunctionId,
		descriptor: FunctionDescriptor,
		source: RegistrySource,
	) -> Result<Arc<FunctionDescriptor>, RegistryError> {
		self.index.insert(id, Arc::new(descriptor), source)
	}

	pub fn contains(&self, id: &str) -> bool {
		self.index.contains(id)
	}

	/// Returns the source that registered `id`, if any.
	pub fn source_of(&self, id: &str) -> Option<RegistrySource> {
		self.index.source_of(id)
	}

	pub fn len(&self) -> usize {
		self.index.len()
	}

	pub fn is_empty(&self) -> bool {
		self.index.is_empty()
	}

	/// Iterates registered functions in registration order.
	pub fn iter(&self) -> impl Iterator<Item = (&FunctionId, &Arc<FunctionDescriptor>)> {
		self.index.iter()
	}

	pub fn seal(self) -> FunctionRegistry {
		FunctionRegistry {
			index: self.index.build(),
		}
	}
}

impl Default for FunctionRegistryBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Sealed Function Registry.
pub struct FunctionRegistry {
	index: RegistryIndex<FunctionId, FunctionDescriptor>,
}

impl FunctionRegistry {
	pub fn resolve(&self, id: &str) -> Result<&Arc<FunctionDescriptor>, EvalError> {
		self.index
			.get(id)
			.ok_or_else(|| EvalError::UnknownFunction(FunctionId::new(id)))
	}

	/// Resolves `id` and calls it with `args`.
	///
	/// See the [module docs](super) for the order of checks.
	pub fn invoke(&self, id: &str, args: &[Operand]) -> Result<Operand, EvalError> {
		let (id, descriptor) = self
			.index
			.get_entry(id)
			.ok_or_else(|| EvalError::UnknownFunction(FunctionId::new(id)))?;
		descriptor.call(id, args).inspect_err(|error| {
			tracing::trace!(function = %id, %error, "invocation failed");
		})
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

	pub fn iter(&self) -> impl Iterator<Item = (&FunctionId, &Arc<FunctionDescriptor>)> {
		self.index.iter()
	}
}

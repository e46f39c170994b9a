use std::fmt;
use std::sync::Arc;

use xacml_primitives::{
	AlgorithmId, CombinerResult, DatatypeId, EvalError, FunctionId, Operand, Outcome, TypedValue,
};

use crate::algorithms::{AlgorithmRegistry, AlgorithmRegistryBuilder, Combiner};
use crate::core::RegistrySource;
use crate::error::{CompositionError, RegistryError};
use crate::functions::{FunctionDescriptor, FunctionRegistry, FunctionRegistryBuilder};
use crate::types::{Converter, TypeRegistry, TypeRegistryBuilder};

/// The three registries during composition.
pub struct RegistriesBuilder {
	types: TypeRegistryBuilder,
	functions: FunctionRegistryBuilder,
	algorithms: AlgorithmRegistryBuilder,
}

impl RegistriesBuilder {
	pub fn new() -> Self {
		Self {
			types: TypeRegistryBuilder::new(),
			functions: FunctionRegistryBuilder::new(),
			algorithms: AlgorithmRegistryBuilder::new(),
		}
	}

	/// Registers a datatype and its nine bag functions under `source`.
	///
	/// Nothing is registered if the datatype or any bag function id is taken.
	pub fn register_type(
		&mut self,
		id: DatatypeId,
		converter: Converter,
		source: RegistrySource,
	) -> Result<(), RegistryError> {
		// A taken datatype id is reported by the type index itself.
		if self.types.contains(id.as_str()) {
			return self.types.register(id, converter, source).map(drop);
		}

		let family = converter.bag_functions();
		if let Some((taken, existing)) = family
			.iter()
			.find_map(|(fid, _)| self.functions.source_of(fid.as_str()).map(|s| (fid, s)))
		{
			return Err(RegistryError::DuplicateId {
				registry: "functions",
				id: taken.to_string(),
				existing,
				incoming: source,
			});
		}

		self.types.register(id, converter, source)?;
		for (fid, descriptor) in family {
			self.functions.register(fid, descriptor, source)?;
		}
		Ok(())
	}

	pub fn register_function(
		&mut self,
		id: FunctionId,
		descriptor: FunctionDescriptor,
		source: RegistrySource,
	) -> Result<(), RegistryError> {
		self.functions.register(id, descriptor, source).map(drop)
	}

	pub fn register_algorithm(
		&mut self,
		id: AlgorithmId,
		combiner: Arc<dyn Combiner>,
		source: RegistrySource,
	) -> Result<(), RegistryError> {
		self.algorithms.register(id, combiner, source).map(drop)
	}

	/// Checks every function parameter names a registered datatype, then
	/// freezes all three registries.
	pub fn seal(self) -> Result<Registries, CompositionError> {
		for (function, descriptor) in self.functions.iter() {
			for (position, kind) in descriptor.signature().params().enumerate() {
				if let Some(datatype) = kind.datatype()
					&& !self.types.contains(datatype.as_str())
				{
					return Err(CompositionError::UnknownParamType {
						function: function.clone(),
						position,
						datatype: datatype.clone(),
					});
				}
			}
		}

		Ok(Registries {
			types: self.types.seal(),
			functions: self.functions.seal(),
			algorithms: self.algorithms.seal(),
		})
	}
}

impl Default for RegistriesBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Sealed, shareable registries handed to an evaluator.
pub struct Registries {
	types: TypeRegistry,
	functions: FunctionRegistry,
	algorithms: AlgorithmRegistry,
}

impl Registries {
	pub fn types(&self) -> &TypeRegistry {
		&self.types
	}

	pub fn functions(&self) -> &FunctionRegistry {
		&self.functions
	}

	pub fn algorithms(&self) -> &AlgorithmRegistry {
		&self.algorithms
	}

	pub fn resolve_type(&self, id: &str) -> Result<&Arc<Converter>, EvalError> {
		self.types.resolve(id)
	}

	pub fn parse(&self, datatype: &str, text: &str) -> Result<TypedValue, EvalError> {
		self.types.parse(datatype, text)
	}

	pub fn values_equal(&self, a: &TypedValue, b: &TypedValue) -> Result<bool, EvalError> {
		self.types.values_equal(a, b)
	}

	pub fn resolve_function(&self, id: &str) -> Result<&Arc<FunctionDescriptor>, EvalError> {
		self.functions.resolve(id)
	}

	pub fn invoke(&self, id: &str, args: &[Operand]) -> Result<Operand, EvalError> {
		self.functions.invoke(id, args)
	}

	pub fn resolve_algorithm(&self, id: &str) -> Result<&Arc<dyn Combiner>, EvalError> {
		self.algorithms.resolve(id)
	}

	pub fn combine(&self, id: &str, results: &[CombinerResult]) -> Result<Outcome, EvalError> {
		self.algorithms.combine(id, results)
	}
}

impl fmt::Debug for Registries {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registries")
			.field("types", &self.types.len())
			.field("functions", &self.functions.len())
			.field("algorithms", &self.algorithms.len())
			.finish()
	}
}

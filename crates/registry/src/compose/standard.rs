use std::sync::Arc;

use indexmap::IndexMap;
use xacml_primitives::{AlgorithmId, DatatypeId, FunctionId};

use super::{AlgorithmExtender, Extender, FunctionExtender, TypeExtender};
use crate::algorithms::{self, Combiner};
use crate::core::RegistrySource;
use crate::functions::{self, FunctionDescriptor};
use crate::types::{self, Converter};

/// The XACML core datatypes, functions and combining algorithms.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardLibrary;

impl Extender for StandardLibrary {
	fn name(&self) -> &'static str {
		"standard"
	}

	fn source(&self) -> RegistrySource {
		RegistrySource::Builtin
	}

	fn as_types(&self) -> Option<&dyn TypeExtender> {
		Some(self)
	}

	fn as_functions(&self) -> Option<&dyn FunctionExtender> {
		Some(self)
	}

	fn as_algorithms(&self) -> Option<&dyn AlgorithmExtender> {
		Some(self)
	}
}

impl TypeExtender for StandardLibrary {
	fn types(&self) -> IndexMap<DatatypeId, Converter> {
		types::builtins::converters()
	}
}

impl FunctionExtender for StandardLibrary {
	fn functions(&self) -> IndexMap<FunctionId, FunctionDescriptor> {
		functions::builtins::functions()
	}
}

impl AlgorithmExtender for StandardLibrary {
	fn algorithms(&self) -> IndexMap<AlgorithmId, Arc<dyn Combiner>> {
		algorithms::builtins::algorithms()
	}
}

//! Startup errors. Any of these prevents the registries from sealing.

use xacml_primitives::{DatatypeId, FunctionId};

use crate::config::ConfigError;
use crate::core::RegistrySource;

/// Fatal registration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// Two contributions share one id.
	#[error("duplicate {registry} id {id:?}: registered by {existing}, rejected from {incoming}")]
	DuplicateId {
		registry: &'static str,
		id: String,
		existing: RegistrySource,
		incoming: RegistrySource,
	},

	/// A converter was offered under an id other than its own datatype id.
	#[error("converter for {actual} offered under datatype id {declared}")]
	IdMismatch {
		declared: DatatypeId,
		actual: DatatypeId,
	},
}

/// Failure to compose extenders into sealed registries.
#[derive(Debug, thiserror::Error)]
pub enum CompositionError {
	#[error("extension composition failed: {0}")]
	Registry(#[from] RegistryError),

	#[error("configuration names unknown extension {0:?}")]
	UnknownExtension(String),

	/// A function parameter refers to a datatype no extender registered.
	#[error("{function}: parameter {position} refers to unregistered datatype {datatype}")]
	UnknownParamType {
		function: FunctionId,
		position: usize,
		datatype: DatatypeId,
	},

	#[error(transparent)]
	Config(#[from] ConfigError),
}

impl CompositionError {
	/// Returns the offending id and both contributing sources for a collision.
	pub fn collision(&self) -> Option<(&str, RegistrySource, RegistrySource)> {
		match self {
			Self::Registry(RegistryError::DuplicateId {
				id,
				existing,
				incoming,
				..
			}) => Some((id.as_str(), *existing, *incoming)),
			_ => None,
		}
	}
}

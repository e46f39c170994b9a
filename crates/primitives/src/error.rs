//! Recoverable evaluation errors.
//!
//! Every variant maps to an Indeterminate decision at the evaluator boundary;
//! none of them is allowed to crash the process or default to Permit/Deny.

use std::fmt;

use crate::decision::{Status, StatusCode};
use crate::ids::{AlgorithmId, DatatypeId, FunctionId};
use crate::operand::ParamKind;

/// Number of arguments a function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
	Exact(usize),
	AtLeast(usize),
}

impl Arity {
	pub fn admits(self, count: usize) -> bool {
		match self {
			Self::Exact(n) => count == n,
			Self::AtLeast(n) => count >= n,
		}
	}
}

impl fmt::Display for Arity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Exact(n) => write!(f, "{n}"),
			Self::AtLeast(n) => write!(f, "at least {n}"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
	#[error("unknown datatype: {0}")]
	UnknownType(DatatypeId),

	#[error("unknown function: {0}")]
	UnknownFunction(FunctionId),

	#[error("unknown combining algorithm: {0}")]
	UnknownAlgorithm(AlgorithmId),

	#[error("{function}: expected {expected} argument(s), got {actual}")]
	Arity {
		function: FunctionId,
		expected: Arity,
		actual: usize,
	},

	/// An argument did not match the declared parameter shape.
	#[error("{function}: argument {position} must be {expected}, got {found}")]
	ArgumentType {
		function: FunctionId,
		position: usize,
		expected: ParamKind,
		found: ParamKind,
	},

	/// Two values or bags of different datatypes were compared.
	#[error("type mismatch: expected {expected}, found {found}")]
	TypeMismatch { expected: ParamKind, found: ParamKind },

	/// A value carried the right datatype tag but an unexpected representation.
	#[error("value tagged {datatype} is not stored as {expected}")]
	Representation {
		datatype: DatatypeId,
		expected: &'static str,
	},

	#[error("cannot parse {text:?} as {datatype}: {reason}")]
	Parse {
		datatype: DatatypeId,
		text: String,
		reason: String,
	},

	#[error("expected exactly one {datatype} value, bag has {size}")]
	EmptyOrMultiple { datatype: DatatypeId, size: usize },

	/// A function implementation rejected otherwise well-typed input.
	#[error("{function}: {message}")]
	Function { function: FunctionId, message: String },
}

impl EvalError {
	/// Convenience constructor for [`EvalError::Function`].
	pub fn function(function: &FunctionId, message: impl Into<String>) -> Self {
		Self::Function {
			function: function.clone(),
			message: message.into(),
		}
	}

	/// Status code an evaluator attaches to the resulting Indeterminate.
	pub fn status_code(&self) -> StatusCode {
		match self {
			Self::UnknownType(_)
			| Self::UnknownFunction(_)
			| Self::UnknownAlgorithm(_)
			| Self::Arity { .. }
			| Self::ArgumentType { .. }
			| Self::Parse { .. } => StatusCode::SyntaxError,
			Self::TypeMismatch { .. }
			| Self::Representation { .. }
			| Self::EmptyOrMultiple { .. }
			| Self::Function { .. } => StatusCode::ProcessingError,
		}
	}

	pub fn to_status(&self) -> Status {
		Status::new(self.status_code(), self.to_string())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn arity_admits() {
		assert!(Arity::Exact(2).admits(2));
		assert!(!Arity::Exact(2).admits(3));
		assert!(Arity::AtLeast(0).admits(0));
		assert!(!Arity::AtLeast(2).admits(1));
	}

	#[test]
	fn unknown_ids_are_syntax_errors() {
		let err = EvalError::UnknownFunction(FunctionId::from_static("urn:x:nope"));
		assert_eq!(err.status_code(), StatusCode::SyntaxError);
		assert_eq!(
			err.to_status().message.as_deref(),
			Some("unknown function: urn:x:nope")
		);
	}

	#[test]
	fn bag_cardinality_is_a_processing_error() {
		let err = EvalError::EmptyOrMultiple {
			datatype: DatatypeId::from_static("urn:x:t"),
			size: 0,
		};
		assert_eq!(err.status_code(), StatusCode::ProcessingError);
	}
}

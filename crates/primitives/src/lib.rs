//! Shared value and decision types for the XACML registries.
//!
//! Nothing here knows how a datatype is parsed or how a function behaves;
//! those live behind the registries in `xacml-registry`.

/// Multisets of attribute values.
pub mod bag;
/// Decisions, statuses and combining algorithm inputs/outputs.
pub mod decision;
/// Recoverable evaluation errors.
pub mod error;
/// Datatype, function and algorithm identifiers.
pub mod ids;
/// Function arguments and parameter shapes.
pub mod operand;
/// Type-erased attribute values.
pub mod value;
/// Well-known XACML URIs.
pub mod vocab;

pub use bag::{Bag, BagBuilder};
pub use decision::{
	Advice, CombinerResult, Decision, Effect, Extended, Obligation, Outcome, Status, StatusCode,
};
pub use error::{Arity, EvalError};
pub use ids::{AlgorithmId, DatatypeId, FunctionId};
pub use operand::{Operand, ParamKind};
pub use value::{AttributeValue, TypedValue};

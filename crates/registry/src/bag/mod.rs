//! Generic bag operations.
//!
//! # Mental Model
//!
//! The nine XACML bag functions are written once in [`ops`] over plain slices
//! and an equality predicate. [`family`] binds them to one [`Datatype`] and
//! wraps each in a [`FunctionDescriptor`] whose id follows the
//! `<prefix>:<name>-<suffix>` convention.
//!
//! Instantiation happens when a datatype is registered, never per call.
//!
//! # Invariants
//!
//! - Every binary operation rejects bags of differing datatypes with
//!   [`EvalError::TypeMismatch`] before looking at any member.
//! - Multiplicity is preserved by `intersection` (min count) and `union`
//!   (max count); `subset` and `set-equals` ignore it.
//!
//! [`Datatype`]: crate::types::Datatype
//! [`FunctionDescriptor`]: crate::functions::FunctionDescriptor
//! [`EvalError::TypeMismatch`]: xacml_primitives::EvalError::TypeMismatch

mod family;
pub mod ops;

pub use family::{SUFFIXES, family};

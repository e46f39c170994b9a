//! Function Registry.
//!
//! # Invocation
//!
//! [`FunctionRegistry::invoke`] runs its checks in a fixed order: the id must
//! resolve, the argument count must fit the [`Signature`]'s arity, and every
//! argument must match its declared [`ParamKind`]. Only then is the
//! implementation called. Its result is checked against the declared return
//! shape before it reaches the caller.
//!
//! Implementations may therefore assume well-shaped input, but still return
//! errors instead of panicking when the [`args`] accessors disagree.
//!
//! [`ParamKind`]: xacml_primitives::ParamKind

pub mod args;
pub mod builtins;
mod descriptor;
mod registry;

pub use descriptor::{FunctionDescriptor, FunctionImpl, Signature};
pub use registry::{FunctionRegistry, FunctionRegistryBuilder};

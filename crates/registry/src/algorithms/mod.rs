//! Algorithm Registry.
//!
//! A [`Combiner`] reduces the ordered results of a rule's or policy's
//! children into one [`Outcome`]. Combiners are pure; the registry only
//! guarantees they see the results in document order.
//!
//! [`Outcome`]: xacml_primitives::Outcome

pub mod builtins;
mod combiner;
mod registry;

pub use combiner::Combiner;
pub use registry::{AlgorithmRegistry, AlgorithmRegistryBuilder};

#[cfg(test)]
mod tests;

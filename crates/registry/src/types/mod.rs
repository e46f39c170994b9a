//! Type Registry: datatype ids to converters.
//!
//! A converter knows how to parse the textual form of one datatype, how to
//! compare two of its values, and how to instantiate the generic bag family
//! for it.

pub mod builtins;
mod datatype;
mod registry;

pub use datatype::{Converter, Datatype};
pub use registry::{TypeRegistry, TypeRegistryBuilder};

#[cfg(test)]
mod tests;

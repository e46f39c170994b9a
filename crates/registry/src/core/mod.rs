//! Shared registry infrastructure.

pub mod index;
pub mod source;

pub use index::{RegistryBuilder, RegistryIndex};
pub use source::RegistrySource;

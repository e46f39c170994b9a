//! Datatype, function and combining-algorithm registries for an XACML evaluator.
//!
//! # Modules
//!
//! - [`types`] - Type Registry: datatype URI to parse/equality converter
//! - [`bag`] - The nine bag functions, written once and instantiated per datatype
//! - [`functions`] - Function Registry and the standard function library
//! - [`algorithms`] - Algorithm Registry and the standard combining algorithms
//! - [`compose`] - Extension Composer, extender contracts and discovery
//! - [`config`] - Composer configuration
//!
//! # Lifecycle
//!
//! Registries are built once through [`Composer`] (or [`compose`]) and handed
//! out as `Arc<Registries>`. Every `*Builder` type is consumed by sealing; the
//! sealed types have no registration methods.
//!
//! ```no_run
//! use xacml_registry::Composer;
//!
//! let registries = Composer::new().discover().compose()?;
//! let one = registries.parse("http://www.w3.org/2001/XMLSchema#integer", "1")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod algorithms;
pub mod bag;
pub mod compose;
pub mod config;
pub mod core;
pub mod error;
pub mod functions;
pub mod types;

pub use algorithms::{AlgorithmRegistry, AlgorithmRegistryBuilder, Combiner};
pub use compose::{
	AlgorithmExtender, Composer, Extender, ExtenderReg, FunctionExtender, Registries,
	RegistriesBuilder, StandardLibrary, TypeExtender, compose,
};
pub use config::{ComposerConfig, ConfigError};
pub use crate::core::RegistrySource;
pub use error::{CompositionError, RegistryError};
pub use functions::{FunctionDescriptor, FunctionRegistry, FunctionRegistryBuilder, Signature};
pub use types::{Converter, Datatype, TypeRegistry, TypeRegistryBuilder};

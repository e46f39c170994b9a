//! Extension Composer.
//!
//! # Mental Model
//!
//! An [`Extender`] contributes any subset of datatypes, functions and
//! combining algorithms. [`compose`] feeds every contribution into one
//! [`RegistriesBuilder`] and seals it into [`Registries`]:
//!
//! 1. all datatypes, each followed by its instantiated bag family;
//! 2. all flat functions;
//! 3. all combining algorithms.
//!
//! Within a phase, extenders are visited in the order given.
//!
//! # Invariants
//!
//! - An id collision in any registry aborts composition; the earlier
//!   contribution is never replaced.
//! - A sealed function may only name datatypes that were registered.
//! - Sealed registries expose no registration methods.
//!
//! # Discovery
//!
//! Extenders linked into the binary announce themselves with an
//! [`ExtenderReg`] through `inventory` (see [`extender!`](crate::extender)).
//! [`Composer::discover`] and [`Composer::from_config`] construct them in
//! `(ordinal, name)` order.

use std::sync::Arc;

use indexmap::IndexMap;
use xacml_primitives::{AlgorithmId, DatatypeId, FunctionId};

use crate::algorithms::Combiner;
use crate::core::RegistrySource;
use crate::functions::FunctionDescriptor;
use crate::types::Converter;

mod composer;
mod registries;
mod standard;

pub use composer::{Composer, compose, discovered};
pub use registries::{Registries, RegistriesBuilder};
pub use standard::StandardLibrary;

/// Contributes datatypes.
pub trait TypeExtender {
	fn types(&self) -> IndexMap<DatatypeId, Converter>;
}

/// Contributes functions.
pub trait FunctionExtender {
	fn functions(&self) -> IndexMap<FunctionId, FunctionDescriptor>;
}

/// Contributes combining algorithms.
pub trait AlgorithmExtender {
	fn algorithms(&self) -> IndexMap<AlgorithmId, Arc<dyn Combiner>>;
}

/// A module that extends the registries.
///
/// Each `as_*` accessor returns `Some(self)` for the capabilities the
/// extender implements.
pub trait Extender: Send + Sync {
	fn name(&self) -> &'static str;

	/// Provenance recorded for every contribution.
	fn source(&self) -> RegistrySource {
		RegistrySource::Extension(self.name())
	}

	fn as_types(&self) -> Option<&dyn TypeExtender> {
		None
	}

	fn as_functions(&self) -> Option<&dyn FunctionExtender> {
		None
	}

	fn as_algorithms(&self) -> Option<&dyn AlgorithmExtender> {
		None
	}
}

/// Link-time announcement of an extender.
pub struct ExtenderReg {
	/// Name used by [`ComposerConfig`](crate::config::ComposerConfig).
	pub name: &'static str,
	/// Load order; lower first, ties broken by name.
	pub ordinal: u32,
	pub construct: fn() -> Box<dyn Extender>,
}

inventory::collect!(ExtenderReg);

/// Announces an extender type via `inventory`.
///
/// The type must implement [`Default`] and [`Extender`]. The calling crate
/// needs `inventory` as a dependency.
#[macro_export]
macro_rules! extender {
	($ty:ty, name: $name:expr $(, ordinal: $ordinal:expr)? $(,)?) => {
		inventory::submit! {
			$crate::compose::ExtenderReg {
				name: $name,
				ordinal: $crate::__extender_ordinal!($({$ordinal})?),
				construct: || -> ::std::boxed::Box<dyn $crate::compose::Extender> {
					::std::boxed::Box::new(<$ty as ::core::default::Default>::default())
				},
			}
		}
	};
}

#[macro_export]
#[doc(hidden)]
macro_rules! __extender_ordinal {
	() => {
		100
	};
	({$val:expr}) => {
		$val
	};
}

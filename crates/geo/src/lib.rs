//! GeoXACML support as a registry extension.
//!
//! Two extenders are linked in through `inventory`:
//!
//! - `geoxacml` - the [`GeometryType`] datatype plus topological, transform,
//!   measurement and structural functions
//! - `units` - length and area conversions to SI units
//!
//! The nine bag functions over geometries are not defined here; the composer
//! instantiates them when the datatype is registered.

use indexmap::IndexMap;
use tracing::debug;
use xacml_primitives::{DatatypeId, FunctionId};
use xacml_registry::{Converter, Datatype, Extender, FunctionDescriptor, FunctionExtender, TypeExtender};

pub mod functions;
mod geometry;
pub mod units;

pub use geometry::GeometryType;
pub use units::Units;

/// Datatype URI of GeoXACML geometries.
pub const GEOMETRY: &str = "urn:ogc:def:dataType:geoxacml:1.0:geometry";

/// Namespace of every function this crate registers.
pub const FUNCTION_PREFIX: &str = "urn:ogc:def:function:geoxacml:1.0";

pub(crate) fn function_id(name: &str) -> FunctionId {
	FunctionId::new(format!("{FUNCTION_PREFIX}:{name}"))
}

/// The `geoxacml` extender.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeoXacml;

impl Extender for GeoXacml {
	fn name(&self) -> &'static str {
		"geoxacml"
	}

	fn as_types(&self) -> Option<&dyn TypeExtender> {
		Some(self)
	}

	fn as_functions(&self) -> Option<&dyn FunctionExtender> {
		Some(self)
	}
}

impl TypeExtender for GeoXacml {
	fn types(&self) -> IndexMap<DatatypeId, Converter> {
		IndexMap::from([(GeometryType::id(), Converter::of::<GeometryType>())])
	}
}

impl FunctionExtender for GeoXacml {
	fn functions(&self) -> IndexMap<FunctionId, FunctionDescriptor> {
		let functions: IndexMap<_, _> = functions::all().into_iter().collect();
		debug!(count = functions.len(), "geoxacml functions");
		functions
	}
}

xacml_registry::extender!(GeoXacml, name: "geoxacml", ordinal: 10);
xacml_registry::extender!(Units, name: "units", ordinal: 20);

//! The `units` extender: length and area conversions to SI units.
//!
//! Both functions take `(double, string)`, the value and the name of the
//! unit it is expressed in, and return the value in metres or square metres.

use indexmap::IndexMap;
use xacml_primitives::{EvalError, FunctionId, TypedValue};
use xacml_registry::functions::args;
use xacml_registry::types::builtins::{DoubleType, StringType};
use xacml_registry::{Datatype, Extender, FunctionDescriptor, FunctionExtender, Signature};

use crate::function_id;

/// Metres per unit.
pub const LENGTH_UNITS: &[(&str, f64)] = &[
	("metre", 1.0),
	("kilometre", 1_000.0),
	("centimetre", 0.01),
	("millimetre", 0.001),
	("foot", 0.3048),
	("yard", 0.9144),
	("mile", 1_609.344),
	("nautical-mile", 1_852.0),
];

/// Square metres per unit.
pub const AREA_UNITS: &[(&str, f64)] = &[
	("square-metre", 1.0),
	("square-kilometre", 1_000_000.0),
	("hectare", 10_000.0),
	("are", 100.0),
	("square-foot", 0.092_903_04),
	("acre", 4_046.856_422_4),
];

fn factor(table: &[(&str, f64)], unit: &str) -> Option<f64> {
	table.iter().find(|(name, _)| *name == unit).map(|&(_, f)| f)
}

fn converter(name: &str, table: &'static [(&'static str, f64)]) -> (FunctionId, FunctionDescriptor) {
	let signature = Signature::new(
		[DoubleType::value_kind(), StringType::value_kind()],
		DoubleType::value_kind(),
	);
	let descriptor = FunctionDescriptor::new(signature, move |id, args| {
		let value = *args::of::<DoubleType>(id, args, 0)?;
		let unit = args::of::<StringType>(id, args, 1)?;
		let factor = factor(table, unit.trim())
			.ok_or_else(|| EvalError::function(id, format!("unknown unit {unit:?}")))?;
		Ok(TypedValue::double(value * factor).into())
	});
	(function_id(name), descriptor)
}

/// Unit conversion functions, registered separately from the geometry set.
#[derive(Debug, Default, Clone, Copy)]
pub struct Units;

impl Extender for Units {
	fn name(&self) -> &'static str {
		"units"
	}

	fn as_functions(&self) -> Option<&dyn FunctionExtender> {
		Some(self)
	}
}

impl FunctionExtender for Units {
	fn functions(&self) -> IndexMap<FunctionId, FunctionDescriptor> {
		IndexMap::from([
			converter("convert-to-metre", LENGTH_UNITS),
			converter("convert-to-square-metre", AREA_UNITS),
		])
	}
}

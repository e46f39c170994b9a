//! Spatial functions over [`GeometryType`](crate::GeometryType).
//!
//! Every parameter datatype is fixed, so these are flat registrations; only
//! the bag family is instantiated generically.

use xacml_primitives::{EvalError, FunctionId, Operand};
use xacml_registry::functions::args;
use xacml_registry::{Datatype, FunctionDescriptor, Signature};

use crate::{GeometryType, function_id};

mod measure;
mod structure;
mod topology;
mod transform;

pub(crate) type Geom = geo::Geometry<f64>;

/// Every function of the `geoxacml` extender, in registration order.
pub fn all() -> Vec<(FunctionId, FunctionDescriptor)> {
	topology::functions()
		.into_iter()
		.chain(transform::functions())
		.chain(measure::functions())
		.chain(structure::functions())
		.collect()
}

/// One geometry in, one `R` out.
fn unary<R: Datatype>(
	name: &str,
	op: impl Fn(&FunctionId, &Geom) -> Result<R::Value, EvalError> + Send + Sync + 'static,
) -> (FunctionId, FunctionDescriptor) {
	let signature = Signature::new([GeometryType::value_kind()], R::value_kind());
	let descriptor = FunctionDescriptor::new(signature, move |id, args| {
		let geometry = args::of::<GeometryType>(id, args, 0)?;
		Ok(Operand::Value(R::typed(op(id, geometry)?)))
	});
	(function_id(name), descriptor)
}

/// Two geometries in, one `R` out.
fn binary<R: Datatype>(
	name: &str,
	op: impl Fn(&FunctionId, &Geom, &Geom) -> Result<R::Value, EvalError> + Send + Sync + 'static,
) -> (FunctionId, FunctionDescriptor) {
	let geometry = GeometryType::value_kind();
	let signature = Signature::new([geometry.clone(), geometry], R::value_kind());
	let descriptor = FunctionDescriptor::new(signature, move |id, args| {
		let a = args::of::<GeometryType>(id, args, 0)?;
		let b = args::of::<GeometryType>(id, args, 1)?;
		Ok(Operand::Value(R::typed(op(id, a, b)?)))
	});
	(function_id(name), descriptor)
}

#[cfg(test)]
mod tests;

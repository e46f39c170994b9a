//! Geometry-valued operations.
//!
//! The overlay operations (`union`, `intersection`, `sym-difference`,
//! `difference`) are defined for areal geometries only.

use geo::{BooleanOps, BoundingRect, Centroid, ConvexHull, Geometry, MultiPolygon};
use xacml_primitives::{Bag, EvalError, FunctionId, Operand};
use xacml_registry::functions::args;
use xacml_registry::{Datatype, FunctionDescriptor, Signature};

use super::{Geom, binary, unary};
use crate::{GeometryType, function_id};

/// Views an areal geometry as a multipolygon.
fn areal(id: &FunctionId, geometry: &Geom) -> Result<MultiPolygon<f64>, EvalError> {
	match geometry {
		Geometry::Polygon(p) => Ok(MultiPolygon::new(vec![p.clone()])),
		Geometry::MultiPolygon(mp) => Ok(mp.clone()),
		Geometry::Rect(r) => Ok(MultiPolygon::new(vec![r.to_polygon()])),
		Geometry::Triangle(t) => Ok(MultiPolygon::new(vec![t.to_polygon()])),
		_ => Err(EvalError::function(id, "overlay operations need polygonal operands")),
	}
}

/// Collapses a one-part result to its single polygon.
fn simplest(result: MultiPolygon<f64>) -> Geom {
	match <[_; 1]>::try_from(result.0) {
		Ok([polygon]) => Geometry::Polygon(polygon),
		Err(parts) => Geometry::MultiPolygon(MultiPolygon::new(parts)),
	}
}

fn overlay(
	name: &str,
	op: fn(&MultiPolygon<f64>, &MultiPolygon<f64>) -> MultiPolygon<f64>,
) -> (FunctionId, FunctionDescriptor) {
	binary::<GeometryType>(name, move |id, a, b| {
		Ok(simplest(op(&areal(id, a)?, &areal(id, b)?)))
	})
}

/// `a` minus `b`, one bag member per resulting polygon.
fn difference() -> (FunctionId, FunctionDescriptor) {
	let geometry = GeometryType::value_kind();
	let signature = Signature::new([geometry.clone(), geometry], GeometryType::bag_kind());
	let descriptor = FunctionDescriptor::new(signature, |id, args| {
		let a = areal(id, args::of::<GeometryType>(id, args, 0)?)?;
		let b = areal(id, args::of::<GeometryType>(id, args, 1)?)?;
		let parts = a
			.difference(&b)
			.into_iter()
			.map(|polygon| GeometryType::typed(Geometry::Polygon(polygon)));
		Ok(Operand::Bag(Bag::new(GeometryType::id(), parts)?))
	});
	(function_id("geometry-difference"), descriptor)
}

pub fn functions() -> Vec<(FunctionId, FunctionDescriptor)> {
	vec![
		unary::<GeometryType>("geometry-convex-hull", |_, g| {
			Ok(Geometry::Polygon(g.convex_hull()))
		}),
		unary::<GeometryType>("geometry-centroid", |id, g| {
			g.centroid()
				.map(Geometry::Point)
				.ok_or_else(|| EvalError::function(id, "empty geometry has no centroid"))
		}),
		unary::<GeometryType>("geometry-envelope", |id, g| {
			g.bounding_rect()
				.map(|rect| Geometry::Polygon(rect.to_polygon()))
				.ok_or_else(|| EvalError::function(id, "empty geometry has no envelope"))
		}),
		overlay("geometry-union", |a, b| a.union(b)),
		overlay("geometry-intersection", |a, b| a.intersection(b)),
		overlay("geometry-sym-difference", |a, b| a.xor(b)),
		difference(),
	]
}

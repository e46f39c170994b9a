use geo::{Area, EuclideanDistance, EuclideanLength, Geometry, Polygon};
use xacml_primitives::{EvalError, FunctionId, TypedValue};
use xacml_registry::functions::args;
use xacml_registry::types::builtins::{BooleanType, DoubleType};
use xacml_registry::{Datatype, FunctionDescriptor, Signature};

use super::{Geom, binary, unary};
use crate::{GeometryType, function_id};

fn perimeter(polygon: &Polygon<f64>) -> f64 {
	polygon.exterior().euclidean_length()
		+ polygon
			.interiors()
			.iter()
			.map(|ring| ring.euclidean_length())
			.sum::<f64>()
}

/// Total length of the linework; polygons contribute their ring perimeters.
fn length(geometry: &Geom) -> f64 {
	match geometry {
		Geometry::Point(_) | Geometry::MultiPoint(_) => 0.0,
		Geometry::Line(line) => line.euclidean_length(),
		Geometry::LineString(ls) => ls.euclidean_length(),
		Geometry::MultiLineString(mls) => mls.euclidean_length(),
		Geometry::Polygon(p) => perimeter(p),
		Geometry::MultiPolygon(mp) => mp.iter().map(perimeter).sum(),
		Geometry::Rect(r) => 2.0 * (r.width() + r.height()),
		Geometry::Triangle(t) => perimeter(&t.to_polygon()),
		Geometry::GeometryCollection(gc) => gc.iter().map(length).sum(),
	}
}

fn is_within_distance() -> (FunctionId, FunctionDescriptor) {
	let geometry = GeometryType::value_kind();
	let signature = Signature::new(
		[geometry.clone(), geometry, DoubleType::value_kind()],
		BooleanType::value_kind(),
	);
	let descriptor = FunctionDescriptor::new(signature, |id, args| {
		let a = args::of::<GeometryType>(id, args, 0)?;
		let b = args::of::<GeometryType>(id, args, 1)?;
		let limit = *args::of::<DoubleType>(id, args, 2)?;
		if limit.is_nan() || limit < 0.0 {
			return Err(EvalError::function(id, format!("invalid distance {limit}")));
		}
		Ok(TypedValue::boolean(a.euclidean_distance(b) <= limit).into())
	});
	(function_id("geometry-is-within-distance"), descriptor)
}

pub fn functions() -> Vec<(FunctionId, FunctionDescriptor)> {
	vec![
		unary::<DoubleType>("geometry-area", |_, g| Ok(g.unsigned_area())),
		unary::<DoubleType>("geometry-length", |_, g| Ok(length(g))),
		binary::<DoubleType>("geometry-distance", |_, a, b| Ok(a.euclidean_distance(b))),
		is_within_distance(),
	]
}

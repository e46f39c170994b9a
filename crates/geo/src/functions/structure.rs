use geo::{Area, Geometry, HasDimensions, Polygon};
use xacml_primitives::FunctionId;
use xacml_registry::FunctionDescriptor;
use xacml_registry::types::builtins::BooleanType;

use super::{Geom, unary};

/// An axis-aligned rectangle with nonzero area and no holes.
fn is_rectangle(geometry: &Geom) -> bool {
	match geometry {
		Geometry::Rect(r) => r.width() > 0.0 && r.height() > 0.0,
		Geometry::Polygon(p) => is_rectangular_polygon(p),
		_ => false,
	}
}

fn is_rectangular_polygon(polygon: &Polygon<f64>) -> bool {
	let ring = &polygon.exterior().0;
	if !polygon.interiors().is_empty() || ring.len() != 5 || ring.first() != ring.last() {
		return false;
	}
	let axis_aligned = ring.windows(2).all(|edge| {
		let (a, b) = (edge[0], edge[1]);
		(a.x == b.x) != (a.y == b.y)
	});
	axis_aligned && polygon.unsigned_area() > 0.0
}

pub fn functions() -> Vec<(FunctionId, FunctionDescriptor)> {
	vec![
		unary::<BooleanType>("geometry-is-empty", |_, g| Ok(g.is_empty())),
		unary::<BooleanType>("geometry-is-rectangle", |_, g| Ok(is_rectangle(g))),
		// Same test as is-rectangle.
		unary::<BooleanType>("geometry-is-closed", |_, g| Ok(is_rectangle(g))),
	]
}

use geo::{Geometry, Relate};
use wkt::TryFromWkt;
use xacml_primitives::FunctionId;
use xacml_registry::Datatype;

use crate::{FUNCTION_PREFIX, GEOMETRY};

/// GeoXACML `geometry`, written as WKT.
pub struct GeometryType;

impl Datatype for GeometryType {
	type Value = Geometry<f64>;
	const ID: &'static str = GEOMETRY;
	const NAME: &'static str = "geometry";
	const FUNCTION_PREFIX: &'static str = FUNCTION_PREFIX;

	fn parse(text: &str) -> Result<Geometry<f64>, String> {
		Geometry::try_from_wkt_str(text.trim()).map_err(|e| e.to_string())
	}

	/// Topological equality: same point set, whatever the vertex order.
	fn equals(a: &Geometry<f64>, b: &Geometry<f64>) -> bool {
		a.relate(b).is_equal_topo()
	}

	/// `geometry-union` and friends name the spatial operations, so the bag
	/// set operations carry a `bag-` infix.
	fn bag_function_id(suffix: &str) -> FunctionId {
		match suffix {
			"intersection" | "union" | "subset" => Self::function_id(&format!("bag-{suffix}")),
			_ => Self::function_id(suffix),
		}
	}
}

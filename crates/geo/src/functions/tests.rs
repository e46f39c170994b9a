use geo::{Geometry, HasDimensions};
use pretty_assertions::assert_eq;
use rstest::rstest;
use xacml_primitives::{EvalError, Operand, TypedValue};
use xacml_registry::Datatype;

use super::*;
use crate::FUNCTION_PREFIX;

fn geom(wkt: &str) -> Operand {
	Operand::Value(GeometryType::typed(GeometryType::parse(wkt).unwrap()))
}

fn call(name: &str, args: &[Operand]) -> Result<Operand, EvalError> {
	let id = FunctionId::new(format!("{FUNCTION_PREFIX}:{name}"));
	let (_, descriptor) = all().into_iter().find(|(fid, _)| fid == &id).unwrap();
	descriptor.call(&id, args)
}

fn as_bool(op: Operand) -> bool {
	*op.as_value().unwrap().downcast_ref::<bool>().unwrap()
}

fn as_f64(op: Operand) -> f64 {
	*op.as_value().unwrap().downcast_ref::<f64>().unwrap()
}

fn as_geom(op: Operand) -> Geom {
	GeometryType::value_of(op.as_value().unwrap()).unwrap().clone()
}

fn close(a: f64, b: f64) -> bool {
	(a - b).abs() < 1e-9
}

const SQUARE: &str = "POLYGON((0 0,4 0,4 4,0 4,0 0))";
const INNER: &str = "POLYGON((1 1,2 1,2 2,1 2,1 1))";
const SHIFTED: &str = "POLYGON((2 2,6 2,6 6,2 6,2 2))";
const FAR: &str = "POLYGON((10 10,11 10,11 11,10 11,10 10))";

#[rstest]
#[case("geometry-contains", SQUARE, INNER, true)]
#[case("geometry-contains", INNER, SQUARE, false)]
#[case("geometry-within", INNER, SQUARE, true)]
#[case("geometry-intersects", SQUARE, SHIFTED, true)]
#[case("geometry-overlaps", SQUARE, SHIFTED, true)]
#[case("geometry-overlaps", SQUARE, INNER, false)]
#[case("geometry-disjoint", SQUARE, FAR, true)]
#[case("geometry-disjoint", SQUARE, SHIFTED, false)]
#[case("geometry-touches", SQUARE, "POLYGON((4 0,8 0,8 4,4 4,4 0))", true)]
#[case("geometry-crosses", "LINESTRING(-1 2,5 2)", SQUARE, true)]
#[case("geometry-equals", SQUARE, "POLYGON((4 4,0 4,0 0,4 0,4 4))", true)]
#[case("geometry-equals", SQUARE, SHIFTED, false)]
fn topological_predicates(#[case] name: &str, #[case] a: &str, #[case] b: &str, #[case] expected: bool) {
	assert_eq!(as_bool(call(name, &[geom(a), geom(b)]).unwrap()), expected);
}

#[test]
fn predicates_reject_non_geometry_arguments() {
	let err = call("geometry-contains", &[geom(SQUARE), TypedValue::string("x").into()]).unwrap_err();
	assert!(matches!(err, EvalError::ArgumentType { position: 1, .. }));
}

#[test]
fn measurements() {
	assert_eq!(as_f64(call("geometry-area", &[geom(SQUARE)]).unwrap()), 16.0);
	assert_eq!(as_f64(call("geometry-length", &[geom(SQUARE)]).unwrap()), 16.0);
	assert_eq!(as_f64(call("geometry-length", &[geom("LINESTRING(0 0,3 4)")]).unwrap()), 5.0);
	assert_eq!(as_f64(call("geometry-length", &[geom("POINT(1 1)")]).unwrap()), 0.0);
	assert_eq!(
		as_f64(call("geometry-distance", &[geom("POINT(0 0)"), geom("POINT(3 4)")]).unwrap()),
		5.0
	);
}

#[test]
fn is_within_distance() {
	let near = [geom("POINT(0 0)"), geom("POINT(3 4)"), TypedValue::double(5.0).into()];
	assert!(as_bool(call("geometry-is-within-distance", &near).unwrap()));
	let short = [geom("POINT(0 0)"), geom("POINT(3 4)"), TypedValue::double(4.9).into()];
	assert!(!as_bool(call("geometry-is-within-distance", &short).unwrap()));
	let negative = [geom("POINT(0 0)"), geom("POINT(3 4)"), TypedValue::double(-1.0).into()];
	assert!(matches!(
		call("geometry-is-within-distance", &negative),
		Err(EvalError::Function { .. })
	));
}

#[test]
fn centroid_and_envelope() {
	let Geometry::Point(centroid) = as_geom(call("geometry-centroid", &[geom(SQUARE)]).unwrap()) else {
		panic!("centroid is not a point");
	};
	assert!(close(centroid.x(), 2.0) && close(centroid.y(), 2.0));

	let envelope = as_geom(call("geometry-envelope", &[geom("LINESTRING(0 0,3 1,1 5)")]).unwrap());
	assert!(GeometryType::equals(
		&envelope,
		&GeometryType::parse("POLYGON((0 0,3 0,3 5,0 5,0 0))").unwrap()
	));
}

#[test]
fn centroid_of_empty_geometry_fails() {
	let err = call("geometry-centroid", &[geom("GEOMETRYCOLLECTION EMPTY")]).unwrap_err();
	assert!(matches!(err, EvalError::Function { .. }));
}

#[test]
fn convex_hull_of_points() {
	let hull = as_geom(call("geometry-convex-hull", &[geom("MULTIPOINT((0 0),(4 0),(4 4),(0 4),(2 2))")]).unwrap());
	assert!(GeometryType::equals(&hull, &GeometryType::parse(SQUARE).unwrap()));
}

#[test]
fn overlays() {
	let union = as_geom(call("geometry-union", &[geom(SQUARE), geom(SHIFTED)]).unwrap());
	assert!(close(geo::Area::unsigned_area(&union), 28.0));

	let intersection = as_geom(call("geometry-intersection", &[geom(SQUARE), geom(SHIFTED)]).unwrap());
	assert!(GeometryType::equals(
		&intersection,
		&GeometryType::parse("POLYGON((2 2,4 2,4 4,2 4,2 2))").unwrap()
	));

	let xor = as_geom(call("geometry-sym-difference", &[geom(SQUARE), geom(SHIFTED)]).unwrap());
	assert!(close(geo::Area::unsigned_area(&xor), 24.0));

	let empty = as_geom(call("geometry-intersection", &[geom(SQUARE), geom(FAR)]).unwrap());
	assert!(empty.is_empty());
}

#[test]
fn overlays_need_polygons() {
	let err = call("geometry-union", &[geom("LINESTRING(0 0,1 1)"), geom(SQUARE)]).unwrap_err();
	assert!(matches!(err, EvalError::Function { .. }));
}

#[test]
fn difference_yields_a_bag_of_parts() {
	let strip = "POLYGON((1 -1,2 -1,2 5,1 5,1 -1))";
	let result = call("geometry-difference", &[geom(SQUARE), geom(strip)]).unwrap();
	let bag = result.as_bag().unwrap();
	assert_eq!(bag.datatype(), &GeometryType::id());
	assert_eq!(bag.len(), 2);

	let none = call("geometry-difference", &[geom(INNER), geom(SQUARE)]).unwrap();
	assert!(none.as_bag().unwrap().is_empty());
}

#[rstest]
#[case(SQUARE, true)]
#[case("POLYGON((0 0,4 0,4 2,0 4,0 0))", false)]
#[case("POLYGON((0 0,4 0,4 0,0 0,0 0))", false)]
#[case("POLYGON((0 0,4 0,4 4,0 4,0 0),(1 1,2 1,2 2,1 2,1 1))", false)]
#[case("LINESTRING(0 0,4 0,4 4,0 4,0 0)", false)]
#[case("POINT(1 1)", false)]
fn rectangles(#[case] wkt: &str, #[case] expected: bool) {
	assert_eq!(as_bool(call("geometry-is-rectangle", &[geom(wkt)]).unwrap()), expected);
	assert_eq!(as_bool(call("geometry-is-closed", &[geom(wkt)]).unwrap()), expected);
}

#[test]
fn is_empty() {
	assert!(as_bool(call("geometry-is-empty", &[geom("GEOMETRYCOLLECTION EMPTY")]).unwrap()));
	assert!(!as_bool(call("geometry-is-empty", &[geom("POINT(1 1)")]).unwrap()));
}

#[test]
fn every_id_is_unique() {
	let functions = all();
	let mut ids: Vec<_> = functions.iter().map(|(id, _)| id.as_str().to_owned()).collect();
	ids.sort();
	ids.dedup();
	assert_eq!(ids.len(), functions.len());
	assert_eq!(functions.len(), 22);
}

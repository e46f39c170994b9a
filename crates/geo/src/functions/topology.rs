//! DE-9IM predicates.

use geo::Relate;
use geo::relate::IntersectionMatrix;
use xacml_primitives::FunctionId;
use xacml_registry::FunctionDescriptor;
use xacml_registry::types::builtins::BooleanType;

use super::binary;

type Test = fn(&IntersectionMatrix) -> bool;

const PREDICATES: [(&str, Test); 8] = [
	("geometry-equals", IntersectionMatrix::is_equal_topo),
	("geometry-disjoint", IntersectionMatrix::is_disjoint),
	("geometry-touches", IntersectionMatrix::is_touches),
	("geometry-crosses", IntersectionMatrix::is_crosses),
	("geometry-within", IntersectionMatrix::is_within),
	("geometry-contains", IntersectionMatrix::is_contains),
	("geometry-overlaps", IntersectionMatrix::is_overlaps),
	("geometry-intersects", IntersectionMatrix::is_intersects),
];

pub fn functions() -> Vec<(FunctionId, FunctionDescriptor)> {
	PREDICATES
		.into_iter()
		.map(|(name, test)| binary::<BooleanType>(name, move |_, a, b| Ok(test(&a.relate(b)))))
		.collect()
}

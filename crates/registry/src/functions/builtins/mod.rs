//! Functions every deployment registers.
//!
//! Each family is a flat list of `(id, descriptor)` pairs; the datatype of
//! every parameter is fixed, so nothing here is instantiated per datatype
//! except `<type>-equal`.

use indexmap::IndexMap;
use xacml_primitives::FunctionId;

use super::FunctionDescriptor;

mod arithmetic;
mod comparison;
mod equality;
mod logical;
mod string;

pub type Entry = (FunctionId, FunctionDescriptor);

/// Standard functions in registration order.
pub fn functions() -> IndexMap<FunctionId, FunctionDescriptor> {
	equality::functions()
		.into_iter()
		.chain(comparison::functions())
		.chain(arithmetic::functions())
		.chain(logical::functions())
		.chain(string::functions())
		.collect()
}

fn id(prefix: &str, name: &str) -> FunctionId {
	FunctionId::new(format!("{prefix}:{name}"))
}

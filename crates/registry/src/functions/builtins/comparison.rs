use std::cmp::Ordering;

use xacml_primitives::TypedValue;

use super::Entry;
use crate::functions::{FunctionDescriptor, Signature, args};
use crate::types::Datatype;
use crate::types::builtins::{
	BooleanType, DateTimeType, DateType, DoubleType, IntegerType, StringType, TimeType,
};

const OPS: [(&str, fn(Ordering) -> bool); 4] = [
	("greater-than", Ordering::is_gt),
	("greater-than-or-equal", Ordering::is_ge),
	("less-than", Ordering::is_lt),
	("less-than-or-equal", Ordering::is_le),
];

/// The four ordering predicates for `D`.
fn ordered<D>() -> impl Iterator<Item = Entry>
where
	D: Datatype,
	D::Value: PartialOrd,
{
	OPS.into_iter().map(|(suffix, test)| {
		let signature = Signature::new([D::value_kind(), D::value_kind()], BooleanType::value_kind());
		let descriptor = FunctionDescriptor::new(signature, move |id, args| {
			let a = args::of::<D>(id, args, 0)?;
			let b = args::of::<D>(id, args, 1)?;
			let ordering = a
				.partial_cmp(b)
				.ok_or_else(|| xacml_primitives::EvalError::function(id, "operands are unordered"))?;
			Ok(TypedValue::boolean(test(ordering)).into())
		});
		(D::function_id(suffix), descriptor)
	})
}

pub fn functions() -> Vec<Entry> {
	ordered::<IntegerType>()
		.chain(ordered::<DoubleType>())
		.chain(ordered::<StringType>())
		.chain(ordered::<DateType>())
		.chain(ordered::<TimeType>())
		.chain(ordered::<DateTimeType>())
		.collect()
}

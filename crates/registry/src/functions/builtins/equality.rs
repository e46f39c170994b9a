use xacml_primitives::TypedValue;

use super::Entry;
use crate::functions::{FunctionDescriptor, Signature, args};
use crate::types::Datatype;
use crate::types::builtins::{
	AnyUriType, Base64BinaryType, BooleanType, DateTimeType, DateType, DoubleType, HexBinaryType,
	IntegerType, Rfc822NameType, StringType, TimeType,
};

/// `<type>-equal` for one datatype, using its own equality.
pub fn equal<D: Datatype>() -> Entry {
	let signature = Signature::new([D::value_kind(), D::value_kind()], BooleanType::value_kind());
	let descriptor = FunctionDescriptor::new(signature, |id, args| {
		let a = args::of::<D>(id, args, 0)?;
		let b = args::of::<D>(id, args, 1)?;
		Ok(TypedValue::boolean(D::equals(a, b)).into())
	});
	(D::function_id("equal"), descriptor)
}

pub fn functions() -> Vec<Entry> {
	vec![
		equal::<StringType>(),
		equal::<BooleanType>(),
		equal::<IntegerType>(),
		equal::<DoubleType>(),
		equal::<AnyUriType>(),
		equal::<DateType>(),
		equal::<DateTimeType>(),
		equal::<TimeType>(),
		equal::<HexBinaryType>(),
		equal::<Base64BinaryType>(),
		equal::<Rfc822NameType>(),
	]
}

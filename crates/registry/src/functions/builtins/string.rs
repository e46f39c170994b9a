use regex::Regex;
use xacml_primitives::vocab::function::{XACML_1_0, XACML_2_0, XACML_3_0};
use xacml_primitives::{EvalError, FunctionId, TypedValue};

use super::{Entry, id};
use crate::functions::{FunctionDescriptor, Signature, args};
use crate::types::Datatype;
use crate::types::builtins::{BooleanType, StringType};

fn concatenate() -> Entry {
	let string = StringType::value_kind();
	let signature = Signature::new([string.clone(), string.clone()], string.clone()).with_rest(string, 0);
	let descriptor = FunctionDescriptor::new(signature, |id, args| {
		let parts = args::rest::<StringType>(id, args, 0)?;
		let joined: String = parts.iter().map(|s| s.as_str()).collect();
		Ok(TypedValue::string(joined).into())
	});
	(id(XACML_2_0, "string-concatenate"), descriptor)
}

fn map(prefix: &str, name: &str, op: fn(&str) -> String) -> Entry {
	let signature = Signature::new([StringType::value_kind()], StringType::value_kind());
	let descriptor = FunctionDescriptor::new(signature, move |id, args| {
		let value = args::of::<StringType>(id, args, 0)?;
		Ok(TypedValue::string(op(value)).into())
	});
	(id(prefix, name), descriptor)
}

/// Binary string predicate. Arguments are passed through in declaration order.
fn test(
	prefix: &str,
	name: &str,
	op: fn(&FunctionId, &str, &str) -> Result<bool, EvalError>,
) -> Entry {
	let string = StringType::value_kind();
	let signature = Signature::new([string.clone(), string], BooleanType::value_kind());
	let descriptor = FunctionDescriptor::new(signature, move |id, args| {
		let a = args::of::<StringType>(id, args, 0)?;
		let b = args::of::<StringType>(id, args, 1)?;
		Ok(TypedValue::boolean(op(id, a, b)?).into())
	});
	(id(prefix, name), descriptor)
}

/// Unanchored unless the pattern anchors itself.
fn regexp_match(id: &FunctionId, pattern: &str, text: &str) -> Result<bool, EvalError> {
	let re = Regex::new(pattern)
		.map_err(|e| EvalError::function(id, format!("invalid regular expression: {e}")))?;
	Ok(re.is_match(text))
}

pub fn functions() -> Vec<Entry> {
	vec![
		concatenate(),
		map(XACML_1_0, "string-normalize-space", |s| s.trim().to_owned()),
		map(XACML_1_0, "string-normalize-to-lower-case", str::to_lowercase),
		test(XACML_3_0, "string-equal-ignore-case", |_, a, b| {
			Ok(a.to_lowercase() == b.to_lowercase())
		}),
		// The second argument is searched for the first.
		test(XACML_3_0, "string-starts-with", |_, prefix, s| Ok(s.starts_with(prefix))),
		test(XACML_3_0, "string-ends-with", |_, suffix, s| Ok(s.ends_with(suffix))),
		test(XACML_3_0, "string-contains", |_, needle, s| Ok(s.contains(needle))),
		test(XACML_1_0, "string-regexp-match", regexp_match),
	]
}

use xacml_primitives::vocab::function::XACML_1_0;
use xacml_primitives::{EvalError, TypedValue};

use super::{Entry, id};
use crate::functions::{FunctionDescriptor, Signature, args};
use crate::types::Datatype;
use crate::types::builtins::{BooleanType, IntegerType};

/// `and`/`or`: zero or more booleans, short-circuiting on `stop`.
fn junction(name: &str, stop: bool) -> Entry {
	let signature = Signature::new([], BooleanType::value_kind()).with_rest(BooleanType::value_kind(), 0);
	let descriptor = FunctionDescriptor::new(signature, move |id, args| {
		let values = args::rest::<BooleanType>(id, args, 0)?;
		let hit = values.iter().any(|&&v| v == stop);
		Ok(TypedValue::boolean(if hit { stop } else { !stop }).into())
	});
	(id(XACML_1_0, name), descriptor)
}

fn not() -> Entry {
	let signature = Signature::new([BooleanType::value_kind()], BooleanType::value_kind());
	let descriptor = FunctionDescriptor::new(signature, |id, args| {
		let value = *args::of::<BooleanType>(id, args, 0)?;
		Ok(TypedValue::boolean(!value).into())
	});
	(id(XACML_1_0, "not"), descriptor)
}

/// True if at least `n` of the remaining arguments are true.
fn n_of() -> Entry {
	let signature = Signature::new([IntegerType::value_kind()], BooleanType::value_kind())
		.with_rest(BooleanType::value_kind(), 0);
	let descriptor = FunctionDescriptor::new(signature, |id, args| {
		let n = *args::of::<IntegerType>(id, args, 0)?;
		let values = args::rest::<BooleanType>(id, args, 1)?;
		let n = usize::try_from(n).map_err(|_| EvalError::function(id, "n must not be negative"))?;
		if n > values.len() {
			return Err(EvalError::function(
				id,
				format!("needs {n} boolean arguments, got {}", values.len()),
			));
		}
		let count = values.iter().filter(|&&&v| v).count();
		Ok(TypedValue::boolean(count >= n).into())
	});
	(id(XACML_1_0, "n-of"), descriptor)
}

pub fn functions() -> Vec<Entry> {
	vec![junction("and", false), junction("or", true), not(), n_of()]
}

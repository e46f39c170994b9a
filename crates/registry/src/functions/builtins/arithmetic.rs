use xacml_primitives::vocab::function::XACML_1_0;
use xacml_primitives::{EvalError, FunctionId, Operand, TypedValue};

use super::{Entry, id};
use crate::functions::{FunctionDescriptor, Signature, args};
use crate::types::Datatype;
use crate::types::builtins::{DoubleType, IntegerType};

type Checked = fn(i64, i64) -> Option<i64>;

fn integer_fold(name: &str, op: Checked) -> Entry {
	let int = IntegerType::value_kind();
	let signature = Signature::new([int.clone(), int.clone()], int.clone()).with_rest(int, 0);
	let descriptor = FunctionDescriptor::new(signature, move |id, args| {
		let values = args::rest::<IntegerType>(id, args, 0)?;
		let (first, rest) = values
			.split_first()
			.ok_or_else(|| EvalError::function(id, "no operands"))?;
		let total = rest.iter().try_fold(**first, |acc, &&v| {
			op(acc, v).ok_or_else(|| EvalError::function(id, "integer overflow"))
		})?;
		Ok(TypedValue::integer(total).into())
	});
	(id(XACML_1_0, name), descriptor)
}

fn double_fold(name: &str, op: fn(f64, f64) -> f64) -> Entry {
	let dbl = DoubleType::value_kind();
	let signature = Signature::new([dbl.clone(), dbl.clone()], dbl.clone()).with_rest(dbl, 0);
	let descriptor = FunctionDescriptor::new(signature, move |id, args| {
		let values = args::rest::<DoubleType>(id, args, 0)?;
		let (first, rest) = values
			.split_first()
			.ok_or_else(|| EvalError::function(id, "no operands"))?;
		let total = rest.iter().fold(**first, |acc, &&v| op(acc, v));
		Ok(TypedValue::double(total).into())
	});
	(id(XACML_1_0, name), descriptor)
}

fn integer_binary(name: &str, op: Checked, failure: &'static str) -> Entry {
	let int = IntegerType::value_kind();
	let signature = Signature::new([int.clone(), int.clone()], int);
	let descriptor = FunctionDescriptor::new(signature, move |id, args| {
		let a = *args::of::<IntegerType>(id, args, 0)?;
		let b = *args::of::<IntegerType>(id, args, 1)?;
		let out = op(a, b).ok_or_else(|| EvalError::function(id, failure))?;
		Ok(TypedValue::integer(out).into())
	});
	(id(XACML_1_0, name), descriptor)
}

fn double_binary(name: &str, op: fn(&FunctionId, f64, f64) -> Result<f64, EvalError>) -> Entry {
	let dbl = DoubleType::value_kind();
	let signature = Signature::new([dbl.clone(), dbl.clone()], dbl);
	let descriptor = FunctionDescriptor::new(signature, move |id, args| {
		let a = *args::of::<DoubleType>(id, args, 0)?;
		let b = *args::of::<DoubleType>(id, args, 1)?;
		Ok(TypedValue::double(op(id, a, b)?).into())
	});
	(id(XACML_1_0, name), descriptor)
}

fn unary<A, R>(
	name: &str,
	op: fn(&FunctionId, &A::Value) -> Result<R::Value, EvalError>,
) -> Entry
where
	A: Datatype,
	R: Datatype,
{
	let signature = Signature::new([A::value_kind()], R::value_kind());
	let descriptor = FunctionDescriptor::new(signature, move |id, args| {
		let value = args::of::<A>(id, args, 0)?;
		Ok(Operand::Value(R::typed(op(id, value)?)))
	});
	(id(XACML_1_0, name), descriptor)
}

fn divide(id: &FunctionId, a: f64, b: f64) -> Result<f64, EvalError> {
	if b == 0.0 {
		return Err(EvalError::function(id, "division by zero"));
	}
	Ok(a / b)
}

fn double_to_integer(id: &FunctionId, value: &f64) -> Result<i64, EvalError> {
	let truncated = value.trunc();
	// 2^63 is the first value past i64::MAX that f64 represents exactly.
	if !truncated.is_finite()
		|| truncated < -9_223_372_036_854_775_808.0
		|| truncated >= 9_223_372_036_854_775_808.0
	{
		return Err(EvalError::function(id, format!("{value} is outside the integer range")));
	}
	Ok(truncated as i64)
}

pub fn functions() -> Vec<Entry> {
	vec![
		integer_fold("integer-add", i64::checked_add),
		double_fold("double-add", |a, b| a + b),
		integer_fold("integer-multiply", i64::checked_mul),
		double_fold("double-multiply", |a, b| a * b),
		integer_binary("integer-subtract", i64::checked_sub, "integer overflow"),
		double_binary("double-subtract", |_, a, b| Ok(a - b)),
		integer_binary("integer-divide", i64::checked_div, "division by zero or overflow"),
		double_binary("double-divide", divide),
		integer_binary("integer-mod", i64::checked_rem, "division by zero or overflow"),
		unary::<IntegerType, IntegerType>("integer-abs", |id, v| {
			v.checked_abs().ok_or_else(|| EvalError::function(id, "integer overflow"))
		}),
		unary::<DoubleType, DoubleType>("double-abs", |_, v| Ok(v.abs())),
		unary::<DoubleType, DoubleType>("round", |_, v| Ok(v.round_ties_even())),
		unary::<DoubleType, DoubleType>("floor", |_, v| Ok(v.floor())),
		unary::<IntegerType, DoubleType>("integer-to-double", |_, v| Ok(*v as f64)),
		unary::<DoubleType, IntegerType>("double-to-integer", double_to_integer),
	]
}

//! Positional argument accessors for function implementations.
//!
//! A missing argument is reported as an arity failure rather than a panic.

use xacml_primitives::{Arity, Bag, EvalError, FunctionId, Operand, TypedValue};

use crate::types::Datatype;

fn get<'a>(id: &FunctionId, args: &'a [Operand], position: usize) -> Result<&'a Operand, EvalError> {
	args.get(position).ok_or_else(|| EvalError::Arity {
		function: id.clone(),
		expected: Arity::AtLeast(position + 1),
		actual: args.len(),
	})
}

pub fn value<'a>(id: &FunctionId, args: &'a [Operand], position: usize) -> Result<&'a TypedValue, EvalError> {
	get(id, args, position)?.as_value()
}

pub fn bag<'a>(id: &FunctionId, args: &'a [Operand], position: usize) -> Result<&'a Bag, EvalError> {
	get(id, args, position)?.as_bag()
}

/// Borrows the representation of a scalar argument of datatype `D`.
pub fn of<'a, D: Datatype>(
	id: &FunctionId,
	args: &'a [Operand],
	position: usize,
) -> Result<&'a D::Value, EvalError> {
	D::value_of(value(id, args, position)?)
}

/// Borrows every argument from `from` onwards as datatype `D`.
pub fn rest<'a, D: Datatype>(
	id: &FunctionId,
	args: &'a [Operand],
	from: usize,
) -> Result<Vec<&'a D::Value>, EvalError> {
	(from..args.len()).map(|position| of::<D>(id, args, position)).collect()
}

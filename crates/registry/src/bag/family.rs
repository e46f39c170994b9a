//! Binds the bag algorithms to one datatype.

use xacml_primitives::vocab::datatype;
use xacml_primitives::{Bag, BagBuilder, DatatypeId, EvalError, FunctionId, Operand, ParamKind, TypedValue};

use super::ops;
use crate::functions::{FunctionDescriptor, Signature, args};
use crate::types::Datatype;

/// Id suffixes of the instantiated family, in registration order.
pub const SUFFIXES: [&str; 9] = [
	"one-and-only",
	"bag-size",
	"is-in",
	"bag",
	"intersection",
	"at-least-one-member-of",
	"union",
	"subset",
	"set-equals",
];

/// Instantiates the nine bag functions for `D`.
pub fn family<D: Datatype>() -> Vec<(FunctionId, FunctionDescriptor)> {
	let value = D::value_kind();
	let bag = D::bag_kind();
	let boolean = ParamKind::Value(DatatypeId::from_static(datatype::BOOLEAN));
	let integer = ParamKind::Value(DatatypeId::from_static(datatype::INTEGER));
	// Second operands take any bag; the members report a datatype mismatch.
	let other = ParamKind::AnyBag;
	let pair = || [bag.clone(), other.clone()];

	let descriptors = [
		FunctionDescriptor::new(Signature::new([bag.clone()], value.clone()), one_and_only::<D>),
		FunctionDescriptor::new(Signature::new([bag.clone()], integer), bag_size::<D>),
		FunctionDescriptor::new(Signature::new([value.clone(), other.clone()], boolean.clone()), is_in::<D>),
		FunctionDescriptor::new(Signature::new([], bag.clone()).with_rest(value, 0), create::<D>),
		FunctionDescriptor::new(Signature::new(pair(), bag.clone()), intersection::<D>),
		FunctionDescriptor::new(Signature::new(pair(), boolean.clone()), at_least_one_member_of::<D>),
		FunctionDescriptor::new(Signature::new(pair(), bag.clone()), union::<D>),
		FunctionDescriptor::new(Signature::new(pair(), boolean.clone()), subset::<D>),
		FunctionDescriptor::new(Signature::new(pair(), boolean), set_equals::<D>),
	];

	SUFFIXES
		.iter()
		.map(|suffix| D::bag_function_id(suffix))
		.zip(descriptors)
		.collect()
}

/// A bag member decoded to its datatype's representation.
struct Member<'a, V> {
	typed: &'a TypedValue,
	value: &'a V,
}

fn members<D: Datatype>(bag: &Bag) -> Result<Vec<Member<'_, D::Value>>, EvalError> {
	bag.iter()
		.map(|typed| {
			Ok(Member {
				typed,
				value: D::value_of(typed)?,
			})
		})
		.collect()
}

fn member_eq<D: Datatype>(a: &Member<'_, D::Value>, b: &Member<'_, D::Value>) -> bool {
	D::equals(a.value, b.value)
}

/// Decodes both bag arguments after checking they share `D`.
fn decode_pair<'a, D: Datatype>(
	id: &FunctionId,
	args: &'a [Operand],
) -> Result<(Vec<Member<'a, D::Value>>, Vec<Member<'a, D::Value>>), EvalError> {
	let a = args::bag(id, args, 0)?;
	let b = args::bag(id, args, 1)?;
	a.ensure_same_type(b)?;
	Ok((members::<D>(a)?, members::<D>(b)?))
}

fn rebuild<D: Datatype>(selected: Vec<(&Member<'_, D::Value>, usize)>) -> Result<Operand, EvalError> {
	let mut builder = BagBuilder::new(D::id());
	for (member, n) in selected {
		builder.push_n(member.typed, n)?;
	}
	Ok(Operand::Bag(builder.build()))
}

fn one_and_only<D: Datatype>(id: &FunctionId, args: &[Operand]) -> Result<Operand, EvalError> {
	let bag = args::bag(id, args, 0)?;
	ops::one_and_only(bag.values())
		.map(|value| Operand::Value(value.clone()))
		.map_err(|size| EvalError::EmptyOrMultiple {
			datatype: D::id(),
			size,
		})
}

fn bag_size<D: Datatype>(id: &FunctionId, args: &[Operand]) -> Result<Operand, EvalError> {
	let bag = args::bag(id, args, 0)?;
	let size = i64::try_from(ops::bag_size(bag.values()))
		.map_err(|_| EvalError::function(id, "bag size exceeds integer range"))?;
	Ok(TypedValue::integer(size).into())
}

fn is_in<D: Datatype>(id: &FunctionId, args: &[Operand]) -> Result<Operand, EvalError> {
	let probe = args::value(id, args, 0)?;
	let bag = args::bag(id, args, 1)?;
	if probe.datatype() != bag.datatype() {
		return Err(EvalError::TypeMismatch {
			expected: ParamKind::Bag(probe.datatype().clone()),
			found: ParamKind::Bag(bag.datatype().clone()),
		});
	}
	let probe = Member {
		typed: probe,
		value: D::value_of(probe)?,
	};
	let found = ops::is_in(&probe, &members::<D>(bag)?, member_eq::<D>);
	Ok(TypedValue::boolean(found).into())
}

fn create<D: Datatype>(id: &FunctionId, args: &[Operand]) -> Result<Operand, EvalError> {
	let values = (0..args.len())
		.map(|position| args::value(id, args, position).cloned())
		.collect::<Result<Vec<_>, _>>()?;
	Ok(Bag::new(D::id(), values)?.into())
}

fn intersection<D: Datatype>(id: &FunctionId, args: &[Operand]) -> Result<Operand, EvalError> {
	let (a, b) = decode_pair::<D>(id, args)?;
	rebuild::<D>(ops::intersection(&a, &b, member_eq::<D>))
}

fn union<D: Datatype>(id: &FunctionId, args: &[Operand]) -> Result<Operand, EvalError> {
	let (a, b) = decode_pair::<D>(id, args)?;
	rebuild::<D>(ops::union(&a, &b, member_eq::<D>))
}

fn at_least_one_member_of<D: Datatype>(id: &FunctionId, args: &[Operand]) -> Result<Operand, EvalError> {
	let (a, b) = decode_pair::<D>(id, args)?;
	Ok(TypedValue::boolean(ops::at_least_one_member_of(&a, &b, member_eq::<D>)).into())
}

fn subset<D: Datatype>(id: &FunctionId, args: &[Operand]) -> Result<Operand, EvalError> {
	let (a, b) = decode_pair::<D>(id, args)?;
	Ok(TypedValue::boolean(ops::subset(&a, &b, member_eq::<D>)).into())
}

fn set_equals<D: Datatype>(id: &FunctionId, args: &[Operand]) -> Result<Operand, EvalError> {
	let (a, b) = decode_pair::<D>(id, args)?;
	Ok(TypedValue::boolean(ops::set_equals(&a, &b, member_eq::<D>)).into())
}

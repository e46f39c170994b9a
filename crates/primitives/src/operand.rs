//! Function arguments and results, and the parameter shapes that describe them.

use std::fmt;

use crate::bag::Bag;
use crate::error::EvalError;
use crate::ids::DatatypeId;
use crate::value::TypedValue;

/// A single function argument or result: a scalar value or a bag.
#[derive(Debug, Clone)]
pub enum Operand {
	Value(TypedValue),
	Bag(Bag),
}

impl Operand {
	pub fn datatype(&self) -> &DatatypeId {
		match self {
			Self::Value(v) => v.datatype(),
			Self::Bag(b) => b.datatype(),
		}
	}

	pub fn is_bag(&self) -> bool {
		matches!(self, Self::Bag(_))
	}

	/// Describes this operand as the most specific [`ParamKind`].
	pub fn kind(&self) -> ParamKind {
		match self {
			Self::Value(v) => ParamKind::Value(v.datatype().clone()),
			Self::Bag(b) => ParamKind::Bag(b.datatype().clone()),
		}
	}

	pub fn as_value(&self) -> Result<&TypedValue, EvalError> {
		match self {
			Self::Value(v) => Ok(v),
			Self::Bag(b) => Err(EvalError::TypeMismatch {
				expected: ParamKind::AnyValue,
				found: ParamKind::Bag(b.datatype().clone()),
			}),
		}
	}

	pub fn as_bag(&self) -> Result<&Bag, EvalError> {
		match self {
			Self::Bag(b) => Ok(b),
			Self::Value(v) => Err(EvalError::TypeMismatch {
				expected: ParamKind::AnyBag,
				found: ParamKind::Value(v.datatype().clone()),
			}),
		}
	}
}

impl From<TypedValue> for Operand {
	fn from(value: TypedValue) -> Self {
		Self::Value(value)
	}
}

impl From<Bag> for Operand {
	fn from(bag: Bag) -> Self {
		Self::Bag(bag)
	}
}

/// Declared shape of a function parameter or return value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamKind {
	/// A single value of the given datatype.
	Value(DatatypeId),
	/// A bag of the given datatype.
	Bag(DatatypeId),
	/// A single value of any datatype.
	AnyValue,
	/// A bag of any datatype.
	AnyBag,
	/// Anything.
	Any,
}

impl ParamKind {
	/// Returns true if `operand` fits this shape.
	pub fn accepts(&self, operand: &Operand) -> bool {
		match (self, operand) {
			(Self::Any, _) => true,
			(Self::AnyValue, Operand::Value(_)) | (Self::AnyBag, Operand::Bag(_)) => true,
			(Self::Value(dt), Operand::Value(v)) => v.datatype() == dt,
			(Self::Bag(dt), Operand::Bag(b)) => b.datatype() == dt,
			_ => false,
		}
	}

	/// Returns the concrete datatype this shape is bound to, if any.
	pub fn datatype(&self) -> Option<&DatatypeId> {
		match self {
			Self::Value(dt) | Self::Bag(dt) => Some(dt),
			Self::AnyValue | Self::AnyBag | Self::Any => None,
		}
	}
}

impl fmt::Display for ParamKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Value(dt) => write!(f, "{dt}"),
			Self::Bag(dt) => write!(f, "bag<{dt}>"),
			Self::AnyValue => f.write_str("any value"),
			Self::AnyBag => f.write_str("any bag"),
			Self::Any => f.write_str("any"),
		}
	}
}

//! Multisets of same-typed attribute values.

use crate::error::EvalError;
use crate::ids::DatatypeId;
use crate::operand::ParamKind;
use crate::value::TypedValue;

/// An unordered multiset of values that all share one datatype.
///
/// Duplicates are preserved. An empty bag still knows its datatype, which
/// keeps it distinct from an absent attribute.
#[derive(Debug, Clone)]
pub struct Bag {
	datatype: DatatypeId,
	values: Vec<TypedValue>,
}

impl Bag {
	/// Creates a bag, rejecting any member of a different datatype.
	pub fn new(
		datatype: DatatypeId,
		values: impl IntoIterator<Item = TypedValue>,
	) -> Result<Self, EvalError> {
		let values: Vec<TypedValue> = values.into_iter().collect();
		if let Some(stray) = values.iter().find(|v| v.datatype() != &datatype) {
			return Err(EvalError::TypeMismatch {
				expected: ParamKind::Value(datatype),
				found: ParamKind::Value(stray.datatype().clone()),
			});
		}
		Ok(Self { datatype, values })
	}

	pub fn empty(datatype: DatatypeId) -> Self {
		Self {
			datatype,
			values: Vec::new(),
		}
	}

	/// Builds a bag from values already known to carry `datatype`.
	///
	/// Used by bag algorithms whose output is a selection of their inputs.
	pub(crate) fn from_checked(datatype: DatatypeId, values: Vec<TypedValue>) -> Self {
		debug_assert!(values.iter().all(|v| v.datatype() == &datatype));
		Self { datatype, values }
	}

	#[inline]
	pub fn datatype(&self) -> &DatatypeId {
		&self.datatype
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.values.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	pub fn values(&self) -> &[TypedValue] {
		&self.values
	}

	pub fn iter(&self) -> std::slice::Iter<'_, TypedValue> {
		self.values.iter()
	}

	/// Fails with [`EvalError::TypeMismatch`] unless `other` shares this bag's datatype.
	pub fn ensure_same_type(&self, other: &Bag) -> Result<(), EvalError> {
		if self.datatype == other.datatype {
			Ok(())
		} else {
			Err(EvalError::TypeMismatch {
				expected: ParamKind::Bag(self.datatype.clone()),
				found: ParamKind::Bag(other.datatype.clone()),
			})
		}
	}
}

impl<'a> IntoIterator for &'a Bag {
	type Item = &'a TypedValue;
	type IntoIter = std::slice::Iter<'a, TypedValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.values.iter()
	}
}

/// Assembles a bag from selected members of other bags of the same datatype.
#[derive(Debug)]
pub struct BagBuilder {
	datatype: DatatypeId,
	values: Vec<TypedValue>,
}

impl BagBuilder {
	pub fn new(datatype: DatatypeId) -> Self {
		Self {
			datatype,
			values: Vec::new(),
		}
	}

	/// Appends `count` copies of `value`, which must already carry this builder's datatype.
	pub fn push_n(&mut self, value: &TypedValue, count: usize) -> Result<(), EvalError> {
		if value.datatype() != &self.datatype {
			return Err(EvalError::TypeMismatch {
				expected: ParamKind::Value(self.datatype.clone()),
				found: ParamKind::Value(value.datatype().clone()),
			});
		}
		self.values
			.extend(std::iter::repeat_n(value, count).cloned());
		Ok(())
	}

	pub fn build(self) -> Bag {
		Bag::from_checked(self.datatype, self.values)
	}
}

//! Type-erased attribute values tagged with their datatype.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::error::EvalError;
use crate::ids::DatatypeId;
use crate::operand::ParamKind;
use crate::vocab::datatype;

/// Runtime representation of a single attribute value.
///
/// Implemented for every `Any + Debug + Send + Sync` type, so datatypes
/// contributed by extensions pick any Rust type they like.
pub trait AttributeValue: Any + fmt::Debug + Send + Sync {
	fn as_any(&self) -> &dyn Any;
}

impl<T: Any + fmt::Debug + Send + Sync> AttributeValue for T {
	fn as_any(&self) -> &dyn Any {
		self
	}
}

/// An attribute value together with the datatype it was produced for.
///
/// Cloning shares the underlying value.
#[derive(Clone)]
pub struct TypedValue {
	datatype: DatatypeId,
	value: Arc<dyn AttributeValue>,
}

impl TypedValue {
	pub fn new<V: AttributeValue>(datatype: DatatypeId, value: V) -> Self {
		Self {
			datatype,
			value: Arc::new(value),
		}
	}

	pub fn string(value: impl Into<String>) -> Self {
		Self::new(DatatypeId::from_static(datatype::STRING), value.into())
	}

	pub fn boolean(value: bool) -> Self {
		Self::new(DatatypeId::from_static(datatype::BOOLEAN), value)
	}

	pub fn integer(value: i64) -> Self {
		Self::new(DatatypeId::from_static(datatype::INTEGER), value)
	}

	pub fn double(value: f64) -> Self {
		Self::new(DatatypeId::from_static(datatype::DOUBLE), value)
	}

	#[inline]
	pub fn datatype(&self) -> &DatatypeId {
		&self.datatype
	}

	/// Returns the inner value if it is stored as `V`.
	pub fn downcast_ref<V: AttributeValue>(&self) -> Option<&V> {
		// Dispatch through the trait object, not the blanket impl on `Arc`.
		<dyn AttributeValue as AttributeValue>::as_any(&*self.value).downcast_ref::<V>()
	}

	/// Returns the inner value as `V` after checking the datatype tag.
	///
	/// A tag mismatch is a [`EvalError::TypeMismatch`]; a representation
	/// mismatch under the right tag means a converter lied about its value
	/// type and is reported as a processing failure.
	pub fn expect<V: AttributeValue>(&self, expected: &DatatypeId) -> Result<&V, EvalError> {
		if &self.datatype != expected {
			return Err(EvalError::TypeMismatch {
				expected: ParamKind::Value(expected.clone()),
				found: ParamKind::Value(self.datatype.clone()),
			});
		}
		self.downcast_ref::<V>()
			.ok_or_else(|| EvalError::Representation {
				datatype: self.datatype.clone(),
				expected: std::any::type_name::<V>(),
			})
	}

	/// Returns true if both handles point at the same stored value.
	pub fn ptr_eq(a: &Self, b: &Self) -> bool {
		Arc::ptr_eq(&a.value, &b.value)
	}
}

impl fmt::Debug for TypedValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}<{}>", self.value, self.datatype)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn expect_checks_tag_before_representation() {
		let v = TypedValue::integer(7);
		let string = DatatypeId::from_static(datatype::STRING);
		assert!(matches!(
			v.expect::<i64>(&string),
			Err(EvalError::TypeMismatch { .. })
		));
		assert_eq!(v.expect::<i64>(v.datatype()).copied(), Ok(7));
	}

	#[test]
	fn wrong_representation_is_reported() {
		let v = TypedValue::new(DatatypeId::from_static(datatype::INTEGER), "seven");
		assert!(matches!(
			v.expect::<i64>(v.datatype()),
			Err(EvalError::Representation { .. })
		));
	}
}

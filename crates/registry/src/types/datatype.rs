use std::any::TypeId;
use std::fmt;

use xacml_primitives::vocab::function;
use xacml_primitives::{AttributeValue, DatatypeId, EvalError, FunctionId, ParamKind, TypedValue};

use crate::bag;
use crate::functions::FunctionDescriptor;

/// A concrete attribute datatype.
///
/// Implementations are zero-sized markers; everything is resolved through
/// associated items so [`Converter::of`] can bind them into plain function
/// pointers once, at registration time.
pub trait Datatype: Send + Sync + 'static {
	/// Rust representation of one value.
	type Value: AttributeValue + Clone;

	/// Datatype URI.
	const ID: &'static str;

	/// Short name used to derive bag function ids, e.g. `string` in
	/// `...:function:string-bag-size`.
	const NAME: &'static str;

	/// Namespace the bag family is registered under.
	const FUNCTION_PREFIX: &'static str = function::XACML_1_0;

	/// Parses the canonical text form of a value.
	fn parse(text: &str) -> Result<Self::Value, String>;

	/// Datatype-specific equality.
	fn equals(a: &Self::Value, b: &Self::Value) -> bool;

	fn id() -> DatatypeId {
		DatatypeId::from_static(Self::ID)
	}

	fn typed(value: Self::Value) -> TypedValue {
		TypedValue::new(Self::id(), value)
	}

	/// Borrows the representation out of a value tagged with this datatype.
	fn value_of(value: &TypedValue) -> Result<&Self::Value, EvalError> {
		value.expect::<Self::Value>(&Self::id())
	}

	/// Id of a function named `<prefix>:<NAME>-<suffix>`.
	fn function_id(suffix: &str) -> FunctionId {
		FunctionId::new(format!("{}:{}-{}", Self::FUNCTION_PREFIX, Self::NAME, suffix))
	}

	/// Id of the bag function with `suffix`, one of [`SUFFIXES`].
	///
	/// Override when a vocabulary renames members of the family, e.g. to keep
	/// them apart from same-named scalar functions.
	///
	/// [`SUFFIXES`]: crate::bag::SUFFIXES
	fn bag_function_id(suffix: &str) -> FunctionId {
		Self::function_id(suffix)
	}

	fn value_kind() -> ParamKind {
		ParamKind::Value(Self::id())
	}

	fn bag_kind() -> ParamKind {
		ParamKind::Bag(Self::id())
	}
}

/// Type-erased parse and equality logic for one datatype.
///
/// Built by [`Converter::of`]; immutable afterwards.
pub struct Converter {
	datatype: DatatypeId,
	name: &'static str,
	value_type: TypeId,
	value_type_name: &'static str,
	parse: fn(&str) -> Result<TypedValue, EvalError>,
	equals: fn(&TypedValue, &TypedValue) -> Result<bool, EvalError>,
	bag_family: fn() -> Vec<(FunctionId, FunctionDescriptor)>,
}

impl Converter {
	pub fn of<D: Datatype>() -> Self {
		Self {
			datatype: D::id(),
			name: D::NAME,
			value_type: TypeId::of::<D::Value>(),
			value_type_name: std::any::type_name::<D::Value>(),
			parse: parse_as::<D>,
			equals: equals_as::<D>,
			bag_family: bag::family::<D>,
		}
	}

	pub fn datatype(&self) -> &DatatypeId {
		&self.datatype
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Concrete Rust type of this datatype's values.
	pub fn value_type(&self) -> TypeId {
		self.value_type
	}

	pub fn parse(&self, text: &str) -> Result<TypedValue, EvalError> {
		(self.parse)(text)
	}

	/// Compares two values of this datatype.
	///
	/// Fails with [`EvalError::TypeMismatch`] when the tags differ from each
	/// other or from this converter's datatype.
	pub fn equals(&self, a: &TypedValue, b: &TypedValue) -> Result<bool, EvalError> {
		(self.equals)(a, b)
	}

	/// Closed instantiations of the nine bag functions for this datatype.
	pub fn bag_functions(&self) -> Vec<(FunctionId, FunctionDescriptor)> {
		(self.bag_family)()
	}
}

impl fmt::Debug for Converter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Converter")
			.field("datatype", &self.datatype)
			.field("name", &self.name)
			.field("value_type", &self.value_type_name)
			.finish()
	}
}

fn parse_as<D: Datatype>(text: &str) -> Result<TypedValue, EvalError> {
	D::parse(text)
		.map(D::typed)
		.map_err(|reason| EvalError::Parse {
			datatype: D::id(),
			text: text.to_owned(),
			reason,
		})
}

fn equals_as<D: Datatype>(a: &TypedValue, b: &TypedValue) -> Result<bool, EvalError> {
	if a.datatype() != b.datatype() {
		return Err(EvalError::TypeMismatch {
			expected: ParamKind::Value(a.datatype().clone()),
			found: ParamKind::Value(b.datatype().clone()),
		});
	}
	Ok(D::equals(D::value_of(a)?, D::value_of(b)?))
}

use pretty_assertions::assert_eq;
use rstest::rstest;
use xacml_primitives::vocab::datatype;
use xacml_primitives::{DatatypeId, EvalError, TypedValue};

use super::builtins::{self, DateTimeType, IntegerType, Rfc822Name, StringType};
use super::*;
use crate::core::RegistrySource;
use crate::error::RegistryError;

fn standard() -> TypeRegistry {
	let mut builder = TypeRegistryBuilder::new();
	for (id, converter) in builtins::converters() {
		builder.register(id, converter, RegistrySource::Builtin).unwrap();
	}
	builder.seal()
}

#[test]
fn duplicate_datatype_is_rejected() {
	let mut builder = TypeRegistryBuilder::new();
	builder
		.register(StringType::id(), Converter::of::<StringType>(), RegistrySource::Builtin)
		.unwrap();
	let err = builder
		.register(
			StringType::id(),
			Converter::of::<StringType>(),
			RegistrySource::Extension("dup"),
		)
		.unwrap_err();
	assert!(matches!(err, RegistryError::DuplicateId { registry: "types", .. }));
	assert_eq!(builder.len(), 1);
}

#[test]
fn converter_must_match_declared_id() {
	let mut builder = TypeRegistryBuilder::new();
	let err = builder
		.register(StringType::id(), Converter::of::<IntegerType>(), RegistrySource::Builtin)
		.unwrap_err();
	assert_eq!(
		err,
		RegistryError::IdMismatch {
			declared: StringType::id(),
			actual: IntegerType::id(),
		}
	);
	assert!(builder.is_empty());
}

#[test]
fn unknown_type() {
	let registry = standard();
	let err = registry.parse("urn:x:nothing", "1").unwrap_err();
	assert_eq!(err, EvalError::UnknownType(DatatypeId::from_static("urn:x:nothing")));
}

#[rstest]
#[case(datatype::BOOLEAN, "1")]
#[case(datatype::INTEGER, "-42")]
#[case(datatype::DOUBLE, "INF")]
#[case(datatype::DOUBLE, "1.5e3")]
#[case(datatype::ANY_URI, "urn:example:a")]
#[case(datatype::DATE, "2002-09-24Z")]
#[case(datatype::TIME, "09:30:15.25")]
#[case(datatype::DATE_TIME, "2002-05-30T09:30:10+06:00")]
#[case(datatype::DATE_TIME, "2002-05-30T09:30:10")]
#[case(datatype::HEX_BINARY, "0FB7")]
#[case(datatype::BASE64_BINARY, "aGVs bG8=")]
#[case(datatype::RFC822_NAME, "Anderson@sun.com")]
fn parses(#[case] id: &str, #[case] text: &str) {
	let value = standard().parse(id, text).unwrap();
	assert_eq!(value.datatype().as_str(), id);
}

#[rstest]
#[case(datatype::BOOLEAN, "yes")]
#[case(datatype::INTEGER, "1.0")]
#[case(datatype::DOUBLE, "infinity")]
#[case(datatype::ANY_URI, "a b")]
#[case(datatype::DATE, "2002-13-01")]
#[case(datatype::DATE_TIME, "yesterday")]
#[case(datatype::HEX_BINARY, "0FB")]
#[case(datatype::BASE64_BINARY, "***")]
#[case(datatype::RFC822_NAME, "no-at-sign")]
fn rejects(#[case] id: &str, #[case] text: &str) {
	let err = standard().parse(id, text).unwrap_err();
	assert!(matches!(err, EvalError::Parse { .. }), "{err:?}");
}

#[test]
fn equality_is_datatype_specific() {
	let registry = standard();
	let a = registry.parse(datatype::RFC822_NAME, "alice@EXAMPLE.com").unwrap();
	let b = registry.parse(datatype::RFC822_NAME, "alice@example.COM").unwrap();
	let c = registry.parse(datatype::RFC822_NAME, "Alice@example.com").unwrap();
	assert!(registry.values_equal(&a, &b).unwrap());
	assert!(!registry.values_equal(&a, &c).unwrap());
	assert_eq!(
		a.downcast_ref::<Rfc822Name>().map(|n| n.local.as_str()),
		Some("alice")
	);

	let utc = registry.parse(datatype::DATE_TIME, "2002-05-30T03:30:10Z").unwrap();
	let plus6 = registry.parse(datatype::DATE_TIME, "2002-05-30T09:30:10+06:00").unwrap();
	assert!(registry.values_equal(&utc, &plus6).unwrap());
	assert!(DateTimeType::value_of(&utc).is_ok());
}

#[test]
fn cross_type_comparison_is_an_error() {
	let registry = standard();
	let err = registry
		.values_equal(&TypedValue::string("1"), &TypedValue::integer(1))
		.unwrap_err();
	assert!(matches!(err, EvalError::TypeMismatch { .. }));
}

#[test]
fn tags_are_compared_before_resolving() {
	let registry = standard();
	let stray = TypedValue::new(DatatypeId::from_static("urn:x:unregistered"), 1_i64);
	let err = registry.values_equal(&stray, &TypedValue::integer(1)).unwrap_err();
	assert!(matches!(err, EvalError::TypeMismatch { .. }), "{err:?}");

	let err = registry.values_equal(&stray, &stray).unwrap_err();
	assert!(matches!(err, EvalError::UnknownType(_)), "{err:?}");
}

#[test]
fn resolve_returns_the_same_converter() {
	let registry = standard();
	let a = registry.resolve(datatype::STRING).unwrap();
	let b = registry.resolve(datatype::STRING).unwrap();
	assert!(std::sync::Arc::ptr_eq(a, b));
	assert_eq!(a.name(), "string");
	assert_eq!(a.value_type(), std::any::TypeId::of::<String>());
	assert_eq!(registry.source(datatype::STRING), Some(RegistrySource::Builtin));
}

#[test]
fn every_standard_type_has_a_bag_family() {
	for (_, converter) in standard().iter() {
		assert_eq!(converter.bag_functions().len(), 9, "{}", converter.datatype());
	}
}

use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::{RegistryBuilder, RegistryIndex};
use crate::core::RegistrySource;
use crate::error::RegistryError;

fn build(entries: &[(&'static str, u32, RegistrySource)]) -> Result<RegistryIndex<String, u32>, RegistryError> {
	let mut builder = RegistryBuilder::<String, u32>::new("test");
	for &(id, value, source) in entries {
		builder.insert(id.to_string(), Arc::new(value), source)?;
	}
	Ok(builder.build())
}

#[test]
fn duplicate_is_rejected_in_either_order() {
	let a = RegistrySource::Builtin;
	let b = RegistrySource::Extension("plugin");

	for (first, second) in [(a, b), (b, a)] {
		let err = build(&[("X", 1, first), ("X", 2, second)])
			.err()
			.expect("second registration must fail");
		assert_eq!(
			err,
			RegistryError::DuplicateId {
				registry: "test",
				id: "X".to_string(),
				existing: first,
				incoming: second,
			}
		);
	}
}

#[test]
fn lookups_share_one_allocation() {
	let index = build(&[("alpha", 10, RegistrySource::Builtin)]).unwrap();
	let first = index.get("alpha").unwrap();
	let second = index.get("alpha").unwrap();
	assert!(Arc::ptr_eq(first, second));
	assert!(index.get("beta").is_none());
}

#[test]
fn iteration_follows_registration_order() {
	let index = build(&[
		("c", 3, RegistrySource::Builtin),
		("a", 1, RegistrySource::Builtin),
		("b", 2, RegistrySource::Extension("x")),
	])
	.unwrap();

	let ids: Vec<&str> = index.ids().map(String::as_str).collect();
	assert_eq!(ids, ["c", "a", "b"]);
	let values: Vec<u32> = index.iter().map(|(_, v)| **v).collect();
	assert_eq!(values, [3, 1, 2]);
	assert_eq!(index.source("b"), Some(RegistrySource::Extension("x")));
	assert_eq!(index.slot("b").map(|s| s.ordinal), Some(2));
}

#[test]
fn failed_insert_leaves_builder_unchanged() {
	let mut builder = RegistryBuilder::<String, u32>::new("test");
	builder
		.insert("X".to_string(), Arc::new(1), RegistrySource::Builtin)
		.unwrap();
	assert!(builder
		.insert("X".to_string(), Arc::new(2), RegistrySource::Builtin)
		.is_err());
	assert_eq!(builder.len(), 1);
	let index = builder.build();
	assert_eq!(index.get("X").map(|v| **v), Some(1));
}

#[test]
fn builder_iterates_before_sealing() {
	let mut builder = RegistryBuilder::<String, u32>::new("test");
	builder.insert("b".to_string(), Arc::new(2), RegistrySource::Builtin).unwrap();
	builder.insert("a".to_string(), Arc::new(1), RegistrySource::Builtin).unwrap();
	let seen: Vec<(&str, u32)> = builder.iter().map(|(id, v)| (id.as_str(), **v)).collect();
	assert_eq!(seen, [("b", 2), ("a", 1)]);
}

#[test]
fn sealed_index_is_shareable_across_threads() {
	fn assert_send_sync<T: Send + Sync>() {}
	assert_send_sync::<RegistryIndex<String, u32>>();
}

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;

use crate::core::RegistrySource;

/// A registered entry with its provenance.
pub struct Slot<V: ?Sized> {
	pub value: Arc<V>,
	pub source: RegistrySource,
	/// Stable ingest ordinal.
	pub ordinal: u32,
}

/// Immutable, indexed storage produced by [`super::RegistryBuilder::build`].
pub struct RegistryIndex<Id, V: ?Sized> {
	pub(super) label: &'static str,
	pub(super) by_id: HashMap<Id, Slot<V>>,
	pub(super) order: Vec<Id>,
}

impl<Id, V> RegistryIndex<Id, V>
where
	Id: Borrow<str> + Eq + Hash,
	V: ?Sized,
{
	pub fn label(&self) -> &'static str {
		self.label
	}

	#[inline]
	pub fn get(&self, id: &str) -> Option<&Arc<V>> {
		self.by_id.get(id).map(|slot| &slot.value)
	}

	/// Looks up an entry together with its canonical id.
	#[inline]
	pub fn get_entry(&self, id: &str) -> Option<(&Id, &Arc<V>)> {
		self.by_id
			.get_key_value(id)
			.map(|(key, slot)| (key, &slot.value))
	}

	pub fn slot(&self, id: &str) -> Option<&Slot<V>> {
		self.by_id.get(id)
	}

	pub fn source(&self, id: &str) -> Option<RegistrySource> {
		self.by_id.get(id).map(|slot| slot.source)
	}

	pub fn contains(&self, id: &str) -> bool {
		self.by_id.contains_key(id)
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	/// Iterates all entries in registration order.
	pub fn iter(&self) -> impl Iterator<Item = (&Id, &Arc<V>)> {
		self.order
			.iter()
			.filter_map(|id| self.by_id.get(Borrow::<str>::borrow(id)).map(|slot| (id, &slot.value)))
	}

	/// Iterates all ids in registration order.
	pub fn ids(&self) -> impl Iterator<Item = &Id> {
		self.order.iter()
	}
}

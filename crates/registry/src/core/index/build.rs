use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use rustc_hash::FxHashMap as HashMap;

use super::types::{RegistryIndex, Slot};
use crate::core::RegistrySource;
use crate::error::RegistryError;

/// Builder for constructing a [`RegistryIndex`].
pub struct RegistryBuilder<Id, V: ?Sized> {
	label: &'static str,
	by_id: HashMap<Id, Slot<V>>,
	order: Vec<Id>,
}

impl<Id, V> RegistryBuilder<Id, V>
where
	Id: Borrow<str> + Clone + Eq + Hash + fmt::Display,
	V: ?Sized,
{
	/// Creates a new builder with the given label for error messages.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			by_id: HashMap::default(),
			order: Vec::new(),
		}
	}

	pub fn label(&self) -> &'static str {
		self.label
	}

	/// Returns the number of entries registered so far.
	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	pub fn contains(&self, id: &str) -> bool {
		self.by_id.contains_key(id)
	}

	/// Returns the source that registered `id`, if any.
	pub fn source_of(&self, id: &str) -> Option<RegistrySource> {
		self.by_id.get(id).map(|slot| slot.source)
	}

	/// Adds an entry, failing if `id` is already taken.
	///
	/// Later contributions never replace earlier ones, whatever their source.
	pub fn insert(
		&mut self,
		id: Id,
		value: Arc<V>,
		source: RegistrySource,
	) -> Result<Arc<V>, RegistryError> {
		if let Some(existing) = self.by_id.get(Borrow::<str>::borrow(&id)) {
			return Err(RegistryError::DuplicateId {
				registry: self.label,
				id: id.to_string(),
				existing: existing.source,
				incoming: source,
			});
		}

		tracing::debug!(registry = self.label, %id, %source, "registered");
		let ordinal = u32::try_from(self.order.len()).unwrap_or(u32::MAX);
		self.order.push(id.clone());
		self.by_id.insert(
			id,
			Slot {
				value: Arc::clone(&value),
				source,
				ordinal,
			},
		);
		Ok(value)
	}

	/// Iterates entries registered so far, in registration order.
	pub fn iter(&self) -> impl Iterator<Item = (&Id, &Arc<V>)> {
		self.order
			.iter()
			.filter_map(|id| self.by_id.get(Borrow::<str>::borrow(id)).map(|slot| (id, &slot.value)))
	}

	/// Seals the builder into an immutable index.
	pub fn build(self) -> RegistryIndex<Id, V> {
		RegistryIndex {
			label: self.label,
			by_id: self.by_id,
			order: self.order,
		}
	}
}

//! URI identifiers for datatypes, functions and combining algorithms.
//!
//! Identifiers are opaque, case-sensitive strings. Nothing in the registries
//! interprets the URN structure; only string equality matters.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Clone)]
enum IdRepr {
	Static(&'static str),
	Shared(Arc<str>),
}

impl IdRepr {
	#[inline]
	fn as_str(&self) -> &str {
		match self {
			Self::Static(s) => s,
			Self::Shared(s) => s,
		}
	}
}

macro_rules! define_id {
	($(#[$attr:meta])* $name:ident) => {
		$(#[$attr])*
		#[derive(Clone)]
		pub struct $name(IdRepr);

		impl $name {
			/// Creates an identifier borrowing a static string.
			pub const fn from_static(id: &'static str) -> Self {
				Self(IdRepr::Static(id))
			}

			/// Creates an identifier owning a shared copy of `id`.
			pub fn new(id: impl Into<Arc<str>>) -> Self {
				Self(IdRepr::Shared(id.into()))
			}

			#[inline]
			pub fn as_str(&self) -> &str {
				self.0.as_str()
			}
		}

		impl PartialEq for $name {
			fn eq(&self, other: &Self) -> bool {
				self.as_str() == other.as_str()
			}
		}

		impl Eq for $name {}

		impl PartialOrd for $name {
			fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
				Some(self.cmp(other))
			}
		}

		impl Ord for $name {
			fn cmp(&self, other: &Self) -> std::cmp::Ordering {
				self.as_str().cmp(other.as_str())
			}
		}

		// Must hash exactly like `str` for `Borrow<str>` lookups.
		impl Hash for $name {
			fn hash<H: Hasher>(&self, state: &mut H) {
				self.as_str().hash(state)
			}
		}

		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				self.as_str()
			}
		}

		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				self.as_str()
			}
		}

		impl From<&'static str> for $name {
			fn from(id: &'static str) -> Self {
				Self::from_static(id)
			}
		}

		impl From<String> for $name {
			fn from(id: String) -> Self {
				Self::new(id)
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl fmt::Debug for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				write!(f, "{}({:?})", stringify!($name), self.as_str())
			}
		}
	};
}

define_id!(
	/// Identifies an attribute datatype, e.g. `http://www.w3.org/2001/XMLSchema#string`.
	DatatypeId
);

define_id!(
	/// Identifies a function, e.g. `urn:oasis:names:tc:xacml:1.0:function:string-equal`.
	FunctionId
);

define_id!(
	/// Identifies a rule- or policy-combining algorithm.
	AlgorithmId
);

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use super::*;

	#[test]
	fn static_and_shared_ids_are_equal() {
		let a = DatatypeId::from_static("urn:test:type");
		let b = DatatypeId::new(String::from("urn:test:type"));
		assert_eq!(a, b);
	}

	#[test]
	fn ids_are_case_sensitive() {
		assert_ne!(
			FunctionId::from_static("urn:test:Fn"),
			FunctionId::from_static("urn:test:fn")
		);
	}

	#[test]
	fn lookup_by_str_through_borrow() {
		let mut map = HashMap::new();
		map.insert(AlgorithmId::new("urn:test:alg"), 1);
		assert_eq!(map.get("urn:test:alg"), Some(&1));
	}
}

use std::fmt;

/// Represents where a registry item was contributed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegistrySource {
	/// Part of the standard library shipped with this crate.
	Builtin,
	/// Contributed by the named extender.
	Extension(&'static str),
}

impl RegistrySource {
	/// Returns the extender name, if any.
	pub const fn extension(self) -> Option<&'static str> {
		match self {
			Self::Builtin => None,
			Self::Extension(name) => Some(name),
		}
	}
}

impl fmt::Display for RegistrySource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Builtin => write!(f, "builtin"),
			Self::Extension(name) => write!(f, "extension:{name}"),
		}
	}
}

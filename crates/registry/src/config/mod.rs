//! Composer configuration.
//!
//! Selects which discovered extenders take part in composition:
//!
//! ```toml
//! include-standard = true
//!
//! [extensions]
//! enabled = ["geoxacml"]
//! disabled = ["units"]
//! ```
//!
//! An absent `enabled` list admits every discovered extender; `disabled` is
//! applied afterwards. Names are checked against the discovered set by the
//! composer, not here.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("invalid composer configuration: {0}")]
	Toml(#[from] toml::de::Error),

	#[error("cannot read {}: {error}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		error: std::io::Error,
	},
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ComposerConfig {
	/// Register the standard datatypes, functions and algorithms.
	#[serde(default = "default_true")]
	pub include_standard: bool,
	#[serde(default)]
	pub extensions: ExtensionSelection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ExtensionSelection {
	/// Allow-list of extender names. `None` admits all.
	#[serde(default)]
	pub enabled: Option<Vec<String>>,
	#[serde(default)]
	pub disabled: Vec<String>,
}

fn default_true() -> bool {
	true
}

impl Default for ComposerConfig {
	fn default() -> Self {
		Self {
			include_standard: true,
			extensions: ExtensionSelection::default(),
		}
	}
}

impl ComposerConfig {
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(text)?)
	}

	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&text)
	}

	/// Every extender name the configuration mentions.
	pub fn named_extensions(&self) -> impl Iterator<Item = &str> {
		self.extensions
			.enabled
			.iter()
			.flatten()
			.chain(&self.extensions.disabled)
			.map(String::as_str)
	}

	/// Returns true if the extender called `name` should be composed.
	pub fn admits(&self, name: &str) -> bool {
		let enabled = self
			.extensions
			.enabled
			.as_ref()
			.is_none_or(|list| list.iter().any(|n| n == name));
		enabled && !self.extensions.disabled.iter().any(|n| n == name)
	}
}

#[cfg(test)]
mod tests;

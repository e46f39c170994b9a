use std::io::Write as _;

use pretty_assertions::assert_eq;

use super::*;

#[test]
fn empty_document_uses_defaults() {
	let config = ComposerConfig::from_toml_str("").unwrap();
	assert_eq!(config, ComposerConfig::default());
	assert!(config.include_standard);
	assert!(config.admits("anything"));
}

#[test]
fn allow_list_then_deny_list() {
	let config = ComposerConfig::from_toml_str(
		r#"
		include-standard = false

		[extensions]
		enabled = ["geoxacml", "units"]
		disabled = ["units"]
		"#,
	)
	.unwrap();
	assert!(!config.include_standard);
	assert!(config.admits("geoxacml"));
	assert!(!config.admits("units"));
	assert!(!config.admits("other"));
	assert_eq!(
		config.named_extensions().collect::<Vec<_>>(),
		["geoxacml", "units", "units"]
	);
}

#[test]
fn unknown_keys_are_rejected() {
	let err = ComposerConfig::from_toml_str("include-standrad = true").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn load_from_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "[extensions]\ndisabled = [\"units\"]").unwrap();
	let config = ComposerConfig::load(file.path()).unwrap();
	assert!(!config.admits("units"));
	assert!(config.admits("geoxacml"));
}

#[test]
fn missing_file_reports_path() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("absent.toml");
	let err = ComposerConfig::load(&path).unwrap_err();
	assert!(matches!(err, ConfigError::Io { path: p, .. } if p == path));
}

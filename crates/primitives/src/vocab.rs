//! Well-known XACML vocabulary URIs.

/// Datatype URIs from XML Schema and the XACML core standard.
pub mod datatype {
	pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
	pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
	pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
	pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";
	pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";
	pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";
	pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
	pub const TIME: &str = "http://www.w3.org/2001/XMLSchema#time";
	pub const HEX_BINARY: &str = "http://www.w3.org/2001/XMLSchema#hexBinary";
	pub const BASE64_BINARY: &str = "http://www.w3.org/2001/XMLSchema#base64Binary";
	pub const RFC822_NAME: &str = "urn:oasis:names:tc:xacml:1.0:data-type:rfc822Name";
}

/// Function namespace prefixes. Function ids are `<prefix>:<name>`.
pub mod function {
	pub const XACML_1_0: &str = "urn:oasis:names:tc:xacml:1.0:function";
	pub const XACML_2_0: &str = "urn:oasis:names:tc:xacml:2.0:function";
	pub const XACML_3_0: &str = "urn:oasis:names:tc:xacml:3.0:function";
}

/// Combining algorithm namespace prefixes.
pub mod algorithm {
	pub const RULE_1_0: &str = "urn:oasis:names:tc:xacml:1.0:rule-combining-algorithm";
	pub const POLICY_1_0: &str = "urn:oasis:names:tc:xacml:1.0:policy-combining-algorithm";
	pub const RULE_1_1: &str = "urn:oasis:names:tc:xacml:1.1:rule-combining-algorithm";
	pub const POLICY_1_1: &str = "urn:oasis:names:tc:xacml:1.1:policy-combining-algorithm";
	pub const RULE_3_0: &str = "urn:oasis:names:tc:xacml:3.0:rule-combining-algorithm";
	pub const POLICY_3_0: &str = "urn:oasis:names:tc:xacml:3.0:policy-combining-algorithm";
}

/// Status code URIs attached to Indeterminate decisions.
pub mod status {
	pub const OK: &str = "urn:oasis:names:tc:xacml:1.0:status:ok";
	pub const MISSING_ATTRIBUTE: &str = "urn:oasis:names:tc:xacml:1.0:status:missing-attribute";
	pub const SYNTAX_ERROR: &str = "urn:oasis:names:tc:xacml:1.0:status:syntax-error";
	pub const PROCESSING_ERROR: &str = "urn:oasis:names:tc:xacml:1.0:status:processing-error";
}

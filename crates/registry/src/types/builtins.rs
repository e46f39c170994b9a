//! Datatypes every deployment registers.

use base64::Engine as _;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use indexmap::IndexMap;
use xacml_primitives::DatatypeId;
use xacml_primitives::vocab::datatype;

use super::{Converter, Datatype};

pub struct StringType;

impl Datatype for StringType {
	type Value = String;
	const ID: &'static str = datatype::STRING;
	const NAME: &'static str = "string";

	fn parse(text: &str) -> Result<String, String> {
		Ok(text.to_owned())
	}

	fn equals(a: &String, b: &String) -> bool {
		a == b
	}
}

pub struct BooleanType;

impl Datatype for BooleanType {
	type Value = bool;
	const ID: &'static str = datatype::BOOLEAN;
	const NAME: &'static str = "boolean";

	fn parse(text: &str) -> Result<bool, String> {
		match text.trim() {
			"true" | "1" => Ok(true),
			"false" | "0" => Ok(false),
			other => Err(format!("{other:?} is not a boolean literal")),
		}
	}

	fn equals(a: &bool, b: &bool) -> bool {
		a == b
	}
}

pub struct IntegerType;

impl Datatype for IntegerType {
	type Value = i64;
	const ID: &'static str = datatype::INTEGER;
	const NAME: &'static str = "integer";

	fn parse(text: &str) -> Result<i64, String> {
		text.trim().parse::<i64>().map_err(|e| e.to_string())
	}

	fn equals(a: &i64, b: &i64) -> bool {
		a == b
	}
}

pub struct DoubleType;

impl Datatype for DoubleType {
	type Value = f64;
	const ID: &'static str = datatype::DOUBLE;
	const NAME: &'static str = "double";

	fn parse(text: &str) -> Result<f64, String> {
		match text.trim() {
			"INF" => Ok(f64::INFINITY),
			"-INF" => Ok(f64::NEG_INFINITY),
			"NaN" => Ok(f64::NAN),
			// Rust also accepts "inf" and "infinity", which XML Schema does not.
			t if t.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') => {
				Err(format!("{t:?} is not a double literal"))
			}
			t => t.parse::<f64>().map_err(|e| e.to_string()),
		}
	}

	fn equals(a: &f64, b: &f64) -> bool {
		a == b
	}
}

pub struct AnyUriType;

impl Datatype for AnyUriType {
	type Value = String;
	const ID: &'static str = datatype::ANY_URI;
	const NAME: &'static str = "anyURI";

	fn parse(text: &str) -> Result<String, String> {
		let text = text.trim();
		if text.chars().any(char::is_whitespace) {
			return Err("URI contains whitespace".to_owned());
		}
		Ok(text.to_owned())
	}

	fn equals(a: &String, b: &String) -> bool {
		a == b
	}
}

pub struct DateType;

impl Datatype for DateType {
	type Value = NaiveDate;
	const ID: &'static str = datatype::DATE;
	const NAME: &'static str = "date";

	fn parse(text: &str) -> Result<NaiveDate, String> {
		let text = text.trim();
		NaiveDate::parse_from_str(text.strip_suffix('Z').unwrap_or(text), "%Y-%m-%d")
			.map_err(|e| e.to_string())
	}

	fn equals(a: &NaiveDate, b: &NaiveDate) -> bool {
		a == b
	}
}

pub struct TimeType;

impl Datatype for TimeType {
	type Value = NaiveTime;
	const ID: &'static str = datatype::TIME;
	const NAME: &'static str = "time";

	fn parse(text: &str) -> Result<NaiveTime, String> {
		let text = text.trim();
		NaiveTime::parse_from_str(text.strip_suffix('Z').unwrap_or(text), "%H:%M:%S%.f")
			.map_err(|e| e.to_string())
	}

	fn equals(a: &NaiveTime, b: &NaiveTime) -> bool {
		a == b
	}
}

pub struct DateTimeType;

impl Datatype for DateTimeType {
	type Value = DateTime<FixedOffset>;
	const ID: &'static str = datatype::DATE_TIME;
	const NAME: &'static str = "dateTime";

	/// Values without an offset are read as UTC.
	fn parse(text: &str) -> Result<DateTime<FixedOffset>, String> {
		let text = text.trim();
		if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
			return Ok(dt);
		}
		NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
			.map(|naive| naive.and_utc().fixed_offset())
			.map_err(|e| e.to_string())
	}

	/// Instants compare equal regardless of the offset they were written in.
	fn equals(a: &DateTime<FixedOffset>, b: &DateTime<FixedOffset>) -> bool {
		a == b
	}
}

pub struct HexBinaryType;

impl Datatype for HexBinaryType {
	type Value = Vec<u8>;
	const ID: &'static str = datatype::HEX_BINARY;
	const NAME: &'static str = "hexBinary";

	fn parse(text: &str) -> Result<Vec<u8>, String> {
		hex::decode(text.trim()).map_err(|e| e.to_string())
	}

	fn equals(a: &Vec<u8>, b: &Vec<u8>) -> bool {
		a == b
	}
}

pub struct Base64BinaryType;

impl Datatype for Base64BinaryType {
	type Value = Vec<u8>;
	const ID: &'static str = datatype::BASE64_BINARY;
	const NAME: &'static str = "base64Binary";

	fn parse(text: &str) -> Result<Vec<u8>, String> {
		let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
		base64::engine::general_purpose::STANDARD
			.decode(compact)
			.map_err(|e| e.to_string())
	}

	fn equals(a: &Vec<u8>, b: &Vec<u8>) -> bool {
		a == b
	}
}

/// An `rfc822Name` value: `local@domain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rfc822Name {
	pub local: String,
	pub domain: String,
}

pub struct Rfc822NameType;

impl Datatype for Rfc822NameType {
	type Value = Rfc822Name;
	const ID: &'static str = datatype::RFC822_NAME;
	const NAME: &'static str = "rfc822Name";

	fn parse(text: &str) -> Result<Rfc822Name, String> {
		let (local, domain) = text
			.trim()
			.rsplit_once('@')
			.ok_or_else(|| "missing '@'".to_owned())?;
		if local.is_empty() || domain.is_empty() {
			return Err("empty local part or domain".to_owned());
		}
		Ok(Rfc822Name {
			local: local.to_owned(),
			domain: domain.to_owned(),
		})
	}

	/// The local part is case-sensitive, the domain is not.
	fn equals(a: &Rfc822Name, b: &Rfc822Name) -> bool {
		a.local == b.local && a.domain.eq_ignore_ascii_case(&b.domain)
	}
}

/// Converters for the standard datatypes, in registration order.
pub fn converters() -> IndexMap<DatatypeId, Converter> {
	[
		Converter::of::<StringType>(),
		Converter::of::<BooleanType>(),
		Converter::of::<IntegerType>(),
		Converter::of::<DoubleType>(),
		Converter::of::<AnyUriType>(),
		Converter::of::<DateType>(),
		Converter::of::<DateTimeType>(),
		Converter::of::<TimeType>(),
		Converter::of::<HexBinaryType>(),
		Converter::of::<Base64BinaryType>(),
		Converter::of::<Rfc822NameType>(),
	]
	.into_iter()
	.map(|c| (c.datatype().clone(), c))
	.collect()
}

//! Authorization decisions and the inputs/outputs of combining algorithms.

use std::fmt;
use std::sync::Arc;

use crate::vocab::status;

/// Rule effect, and the effect an obligation or advice applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Effect {
	Permit,
	Deny,
}

impl Effect {
	pub fn opposite(self) -> Self {
		match self {
			Self::Permit => Self::Deny,
			Self::Deny => Self::Permit,
		}
	}
}

impl From<Effect> for Extended {
	fn from(effect: Effect) -> Self {
		match effect {
			Effect::Permit => Self::Permit,
			Effect::Deny => Self::Deny,
		}
	}
}

/// Which effects an Indeterminate result could have produced (XACML 3.0 7.11).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extended {
	/// Indeterminate{D}
	Deny,
	/// Indeterminate{P}
	Permit,
	/// Indeterminate{DP}
	DenyPermit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
	Permit,
	Deny,
	NotApplicable,
	Indeterminate(Extended),
}

impl Decision {
	/// Returns the effect of a Permit or Deny decision.
	pub fn effect(self) -> Option<Effect> {
		match self {
			Self::Permit => Some(Effect::Permit),
			Self::Deny => Some(Effect::Deny),
			Self::NotApplicable | Self::Indeterminate(_) => None,
		}
	}

	pub fn is_applicable(self) -> bool {
		!matches!(self, Self::NotApplicable)
	}

	pub fn is_indeterminate(self) -> bool {
		matches!(self, Self::Indeterminate(_))
	}
}

impl From<Effect> for Decision {
	fn from(effect: Effect) -> Self {
		match effect {
			Effect::Permit => Self::Permit,
			Effect::Deny => Self::Deny,
		}
	}
}

impl fmt::Display for Decision {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Permit => f.write_str("Permit"),
			Self::Deny => f.write_str("Deny"),
			Self::NotApplicable => f.write_str("NotApplicable"),
			Self::Indeterminate(Extended::Deny) => f.write_str("Indeterminate{D}"),
			Self::Indeterminate(Extended::Permit) => f.write_str("Indeterminate{P}"),
			Self::Indeterminate(Extended::DenyPermit) => f.write_str("Indeterminate{DP}"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
	Ok,
	MissingAttribute,
	SyntaxError,
	ProcessingError,
}

impl StatusCode {
	pub const fn uri(self) -> &'static str {
		match self {
			Self::Ok => status::OK,
			Self::MissingAttribute => status::MISSING_ATTRIBUTE,
			Self::SyntaxError => status::SYNTAX_ERROR,
			Self::ProcessingError => status::PROCESSING_ERROR,
		}
	}
}

/// Explanation attached to a decision, typically an Indeterminate one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
	pub code: StatusCode,
	pub message: Option<String>,
}

impl Status {
	pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
		Self {
			code,
			message: Some(message.into()),
		}
	}

	pub fn ok() -> Self {
		Self {
			code: StatusCode::Ok,
			message: None,
		}
	}
}

/// An obligation the PEP must discharge when the decision matches `fulfill_on`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obligation {
	pub id: Arc<str>,
	pub fulfill_on: Effect,
}

/// Advice the PEP may act on when the decision matches `applies_to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advice {
	pub id: Arc<str>,
	pub applies_to: Effect,
}

/// Outcome of evaluating one child of a rule or policy combination.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinerResult {
	pub decision: Decision,
	/// Position of the child in its enclosing document.
	pub ordinal: u32,
	pub status: Option<Status>,
	pub obligations: Vec<Obligation>,
	pub advice: Vec<Advice>,
}

impl CombinerResult {
	pub fn new(ordinal: u32, decision: Decision) -> Self {
		Self {
			decision,
			ordinal,
			status: None,
			obligations: Vec::new(),
			advice: Vec::new(),
		}
	}

	pub fn with_status(mut self, status: Status) -> Self {
		self.status = Some(status);
		self
	}

	pub fn with_obligation(mut self, obligation: Obligation) -> Self {
		self.obligations.push(obligation);
		self
	}

	pub fn with_advice(mut self, advice: Advice) -> Self {
		self.advice.push(advice);
		self
	}
}

/// Result of reducing a sequence of [`CombinerResult`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
	pub decision: Decision,
	pub status: Option<Status>,
	pub obligations: Vec<Obligation>,
	pub advice: Vec<Advice>,
}

impl Outcome {
	pub fn not_applicable() -> Self {
		Self::bare(Decision::NotApplicable)
	}

	pub fn bare(decision: Decision) -> Self {
		Self {
			decision,
			status: None,
			obligations: Vec::new(),
			advice: Vec::new(),
		}
	}

	pub fn indeterminate(extended: Extended, status: Status) -> Self {
		Self {
			decision: Decision::Indeterminate(extended),
			status: Some(status),
			obligations: Vec::new(),
			advice: Vec::new(),
		}
	}

	/// Passes a single child's result through unchanged.
	pub fn from_result(result: &CombinerResult) -> Self {
		Self {
			decision: result.decision,
			status: result.status.clone(),
			obligations: result.obligations.clone(),
			advice: result.advice.clone(),
		}
	}
}

//! Standard combining algorithms.
//!
//! The XACML 3.0 overrides family follows the extended Indeterminate table:
//! an Indeterminate child only blocks the winning effect when it could have
//! produced it. The legacy 1.0/1.1 variants predate extended Indeterminate
//! and are kept for policies that still name them.

use std::slice;
use std::sync::Arc;

use indexmap::IndexMap;
use xacml_primitives::vocab::algorithm::{
	POLICY_1_0, POLICY_1_1, POLICY_3_0, RULE_1_0, RULE_1_1, RULE_3_0,
};
use xacml_primitives::{
	AlgorithmId, CombinerResult, Decision, Effect, Extended, Outcome, Status, StatusCode,
};

use super::Combiner;

/// Outcome `effect`, carrying the obligations and advice of every child that
/// decided `effect`.
fn decided(results: &[CombinerResult], effect: Effect) -> Outcome {
	let decision = Decision::from(effect);
	let mut outcome = Outcome::bare(decision);
	for result in results.iter().filter(|r| r.decision == decision) {
		outcome.obligations.extend(
			result
				.obligations
				.iter()
				.filter(|o| o.fulfill_on == effect)
				.cloned(),
		);
		outcome
			.advice
			.extend(result.advice.iter().filter(|a| a.applies_to == effect).cloned());
	}
	outcome
}

/// Indeterminate outcome carrying the first status an Indeterminate child reported.
fn indeterminate(results: &[CombinerResult], extended: Extended) -> Outcome {
	let status = results
		.iter()
		.filter(|r| r.decision.is_indeterminate())
		.find_map(|r| r.status.clone())
		.unwrap_or_else(|| Status::new(StatusCode::ProcessingError, "child evaluation was indeterminate"));
	Outcome::indeterminate(extended, status)
}

/// XACML 3.0 deny-overrides and permit-overrides, ordered or not.
#[derive(Debug, Clone, Copy)]
pub struct Overrides {
	pub winner: Effect,
}

impl Combiner for Overrides {
	fn combine(&self, results: &[CombinerResult]) -> Outcome {
		let winner = self.winner;
		let loser = winner.opposite();
		let mut could_win = false;
		let mut could_lose = false;
		let mut could_either = false;
		let mut lost = false;

		for result in results {
			match result.decision {
				Decision::NotApplicable => {}
				Decision::Indeterminate(Extended::DenyPermit) => could_either = true,
				Decision::Indeterminate(ext) if ext == Extended::from(winner) => could_win = true,
				Decision::Indeterminate(_) => could_lose = true,
				d if d == Decision::from(winner) => return decided(results, winner),
				_ => lost = true,
			}
		}

		if could_either || (could_win && (could_lose || lost)) {
			indeterminate(results, Extended::DenyPermit)
		} else if could_win {
			indeterminate(results, winner.into())
		} else if lost {
			decided(results, loser)
		} else if could_lose {
			indeterminate(results, loser.into())
		} else {
			Outcome::not_applicable()
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
	Rule,
	Policy,
}

/// XACML 1.0 deny-overrides and permit-overrides, and their 1.1 ordered forms.
#[derive(Debug, Clone, Copy)]
pub struct LegacyOverrides {
	pub winner: Effect,
	pub level: Level,
}

impl Combiner for LegacyOverrides {
	fn combine(&self, results: &[CombinerResult]) -> Outcome {
		let winner = self.winner;
		let loser = winner.opposite();
		// Rule level: an Indeterminate rule whose effect is the winner.
		let mut potential = false;
		let mut error = false;
		let mut lost = false;

		for result in results {
			match result.decision {
				Decision::NotApplicable => {}
				Decision::Indeterminate(ext) => match self.level {
					Level::Rule if ext != Extended::from(loser) => potential = true,
					_ => error = true,
				},
				d if d == Decision::from(winner) => return decided(results, winner),
				_ => lost = true,
			}
		}

		match self.level {
			Level::Rule if potential => indeterminate(results, winner.into()),
			// A policy-level deny-overrides treats any Indeterminate child as Deny.
			Level::Policy if error && winner == Effect::Deny => decided(results, winner),
			_ if lost => decided(results, loser),
			_ if error => indeterminate(results, Extended::DenyPermit),
			_ => Outcome::not_applicable(),
		}
	}
}

/// Result of the first child that is not NotApplicable.
#[derive(Debug, Clone, Copy)]
pub struct FirstApplicable;

impl Combiner for FirstApplicable {
	fn combine(&self, results: &[CombinerResult]) -> Outcome {
		match results.iter().find(|r| r.decision.is_applicable()) {
			None => Outcome::not_applicable(),
			Some(result) => match result.decision.effect() {
				Some(effect) => decided(slice::from_ref(result), effect),
				None => Outcome::from_result(result),
			},
		}
	}
}

/// At most one child may apply. An Indeterminate child makes the whole
/// combination Indeterminate, as does a second applicable child.
#[derive(Debug, Clone, Copy)]
pub struct OnlyOneApplicable;

impl Combiner for OnlyOneApplicable {
	fn combine(&self, results: &[CombinerResult]) -> Outcome {
		if results.iter().any(|r| r.decision.is_indeterminate()) {
			return indeterminate(results, Extended::DenyPermit);
		}
		let mut applicable = results.iter().filter(|r| r.decision.is_applicable());
		match (applicable.next(), applicable.next()) {
			(None, _) => Outcome::not_applicable(),
			(Some(only), None) => match only.decision.effect() {
				Some(effect) => decided(slice::from_ref(only), effect),
				None => Outcome::from_result(only),
			},
			(Some(_), Some(_)) => Outcome::indeterminate(
				Extended::DenyPermit,
				Status::new(StatusCode::ProcessingError, "more than one child is applicable"),
			),
		}
	}
}

/// deny-unless-permit and permit-unless-deny. Never NotApplicable or Indeterminate.
#[derive(Debug, Clone, Copy)]
pub struct Unless {
	pub winner: Effect,
}

impl Combiner for Unless {
	fn combine(&self, results: &[CombinerResult]) -> Outcome {
		let winner = Decision::from(self.winner);
		if results.iter().any(|r| r.decision == winner) {
			decided(results, self.winner)
		} else {
			decided(results, self.winner.opposite())
		}
	}
}

/// Standard algorithms in registration order.
pub fn algorithms() -> IndexMap<AlgorithmId, Arc<dyn Combiner>> {
	let deny = Overrides { winner: Effect::Deny };
	let permit = Overrides { winner: Effect::Permit };
	let legacy = |winner, level| LegacyOverrides { winner, level };

	[
		entry(RULE_3_0, "deny-overrides", deny),
		entry(RULE_3_0, "permit-overrides", permit),
		entry(RULE_3_0, "ordered-deny-overrides", deny),
		entry(RULE_3_0, "ordered-permit-overrides", permit),
		entry(RULE_3_0, "deny-unless-permit", Unless { winner: Effect::Permit }),
		entry(RULE_3_0, "permit-unless-deny", Unless { winner: Effect::Deny }),
		entry(POLICY_3_0, "deny-overrides", deny),
		entry(POLICY_3_0, "permit-overrides", permit),
		entry(POLICY_3_0, "ordered-deny-overrides", deny),
		entry(POLICY_3_0, "ordered-permit-overrides", permit),
		entry(POLICY_3_0, "deny-unless-permit", Unless { winner: Effect::Permit }),
		entry(POLICY_3_0, "permit-unless-deny", Unless { winner: Effect::Deny }),
		entry(RULE_1_0, "deny-overrides", legacy(Effect::Deny, Level::Rule)),
		entry(RULE_1_0, "permit-overrides", legacy(Effect::Permit, Level::Rule)),
		entry(RULE_1_0, "first-applicable", FirstApplicable),
		entry(POLICY_1_0, "deny-overrides", legacy(Effect::Deny, Level::Policy)),
		entry(POLICY_1_0, "permit-overrides", legacy(Effect::Permit, Level::Policy)),
		entry(POLICY_1_0, "first-applicable", FirstApplicable),
		entry(POLICY_1_0, "only-one-applicable", OnlyOneApplicable),
		entry(RULE_1_1, "ordered-deny-overrides", legacy(Effect::Deny, Level::Rule)),
		entry(RULE_1_1, "ordered-permit-overrides", legacy(Effect::Permit, Level::Rule)),
		entry(POLICY_1_1, "ordered-deny-overrides", legacy(Effect::Deny, Level::Policy)),
		entry(POLICY_1_1, "ordered-permit-overrides", legacy(Effect::Permit, Level::Policy)),
	]
	.into_iter()
	.collect()
}

fn entry(prefix: &str, name: &str, combiner: impl Combiner) -> (AlgorithmId, Arc<dyn Combiner>) {
	(AlgorithmId::new(format!("{prefix}:{name}")), Arc::new(combiner))
}

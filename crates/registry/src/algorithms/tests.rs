use std::sync::Arc;

use pretty_assertions::assert_eq;
use rstest::rstest;
use xacml_primitives::vocab::algorithm::{POLICY_1_0, POLICY_3_0, RULE_1_0, RULE_3_0};
use xacml_primitives::{
	AlgorithmId, CombinerResult, Decision, Effect, EvalError, Extended, Obligation, Outcome, Status,
	StatusCode,
};

use super::*;
use crate::core::RegistrySource;

const P: Decision = Decision::Permit;
const D: Decision = Decision::Deny;
const NA: Decision = Decision::NotApplicable;
const IND_D: Decision = Decision::Indeterminate(Extended::Deny);
const IND_P: Decision = Decision::Indeterminate(Extended::Permit);
const IND_DP: Decision = Decision::Indeterminate(Extended::DenyPermit);

fn standard() -> AlgorithmRegistry {
	let mut builder = AlgorithmRegistryBuilder::new();
	for (id, combiner) in builtins::algorithms() {
		builder.register(id, combiner, RegistrySource::Builtin).unwrap();
	}
	builder.seal()
}

fn results(decisions: &[Decision]) -> Vec<CombinerResult> {
	decisions
		.iter()
		.zip(0..)
		.map(|(&decision, ordinal)| CombinerResult::new(ordinal, decision))
		.collect()
}

fn decide(prefix: &str, name: &str, decisions: &[Decision]) -> Decision {
	standard()
		.combine(&format!("{prefix}:{name}"), &results(decisions))
		.unwrap()
		.decision
}

#[rstest]
#[case("deny-overrides", &[P, D], D)]
#[case("permit-overrides", &[P, D], P)]
#[case("first-applicable", &[NA, NA], NA)]
#[case("only-one-applicable", &[P, P], IND_DP)]
#[case("only-one-applicable", &[NA, D], D)]
#[case("only-one-applicable", &[NA, IND_P], IND_DP)]
#[case("first-applicable", &[NA, IND_D, P], IND_D)]
#[case("first-applicable", &[NA, D, P], D)]
fn policy_scenarios(#[case] name: &str, #[case] decisions: &[Decision], #[case] expected: Decision) {
	let prefix = if name == "deny-overrides" || name == "permit-overrides" {
		POLICY_3_0
	} else {
		POLICY_1_0
	};
	assert_eq!(decide(prefix, name, decisions), expected);
}

#[rstest]
#[case(&[], NA)]
#[case(&[NA, NA], NA)]
#[case(&[P, NA], P)]
#[case(&[P, D, P], D)]
#[case(&[IND_D], IND_D)]
#[case(&[IND_P], IND_P)]
#[case(&[IND_P, P], P)]
#[case(&[IND_D, P], IND_DP)]
#[case(&[IND_D, IND_P], IND_DP)]
#[case(&[IND_DP, P], IND_DP)]
#[case(&[IND_DP, D], D)]
fn deny_overrides_table(#[case] decisions: &[Decision], #[case] expected: Decision) {
	assert_eq!(decide(RULE_3_0, "deny-overrides", decisions), expected);
}

#[rstest]
#[case(&[D, P], P)]
#[case(&[IND_P, D], IND_DP)]
#[case(&[IND_D, D], D)]
#[case(&[IND_D], IND_D)]
#[case(&[IND_P, NA], IND_P)]
fn permit_overrides_table(#[case] decisions: &[Decision], #[case] expected: Decision) {
	assert_eq!(decide(RULE_3_0, "ordered-permit-overrides", decisions), expected);
}

#[rstest]
#[case("deny-unless-permit", &[], D)]
#[case("deny-unless-permit", &[IND_DP, P], P)]
#[case("permit-unless-deny", &[NA, IND_D], P)]
#[case("permit-unless-deny", &[P, D], D)]
fn unless_never_yields_na_or_indeterminate(
	#[case] name: &str,
	#[case] decisions: &[Decision],
	#[case] expected: Decision,
) {
	assert_eq!(decide(POLICY_3_0, name, decisions), expected);
}

#[rstest]
#[case(RULE_1_0, &[IND_D, P], IND_D)]
#[case(RULE_1_0, &[IND_P, P], P)]
#[case(RULE_1_0, &[IND_P], IND_DP)]
#[case(POLICY_1_0, &[IND_P, P], D)]
#[case(POLICY_1_0, &[NA, P], P)]
fn legacy_deny_overrides(#[case] prefix: &str, #[case] decisions: &[Decision], #[case] expected: Decision) {
	assert_eq!(decide(prefix, "deny-overrides", decisions), expected);
}

#[test]
fn legacy_policy_permit_overrides() {
	assert_eq!(decide(POLICY_1_0, "permit-overrides", &[IND_D, D]), D);
	assert_eq!(decide(POLICY_1_0, "permit-overrides", &[IND_D, NA]), IND_DP);
	assert_eq!(decide(POLICY_1_0, "permit-overrides", &[D, P]), P);
}

#[test]
fn results_are_combined_in_ordinal_order() {
	let registry = standard();
	let shuffled = vec![CombinerResult::new(2, P), CombinerResult::new(1, D), CombinerResult::new(0, NA)];
	let outcome = registry
		.combine(&format!("{RULE_1_0}:first-applicable"), &shuffled)
		.unwrap();
	assert_eq!(outcome.decision, D);
}

#[test]
fn obligations_follow_the_winning_effect() {
	let registry = standard();
	let ob = |id: &str, fulfill_on| Obligation {
		id: Arc::from(id),
		fulfill_on,
	};
	let children = vec![
		CombinerResult::new(0, P).with_obligation(ob("log-permit", Effect::Permit)),
		CombinerResult::new(1, D)
			.with_obligation(ob("notify", Effect::Deny))
			.with_obligation(ob("ignored", Effect::Permit)),
		CombinerResult::new(2, D).with_obligation(ob("audit", Effect::Deny)),
	];
	let outcome = registry
		.combine(&format!("{POLICY_3_0}:deny-overrides"), &children)
		.unwrap();
	let ids: Vec<&str> = outcome.obligations.iter().map(|o| &*o.id).collect();
	assert_eq!(ids, ["notify", "audit"]);
}

#[test]
fn indeterminate_keeps_child_status() {
	let registry = standard();
	let status = Status::new(StatusCode::MissingAttribute, "subject-id");
	let children = vec![CombinerResult::new(0, IND_D).with_status(status.clone())];
	let outcome = registry
		.combine(&format!("{RULE_3_0}:deny-overrides"), &children)
		.unwrap();
	assert_eq!(outcome, Outcome::indeterminate(Extended::Deny, status));
}

#[test]
fn ambiguity_reports_processing_error() {
	let outcome = standard()
		.combine(&format!("{POLICY_1_0}:only-one-applicable"), &results(&[P, P]))
		.unwrap();
	assert_eq!(outcome.status.map(|s| s.code), Some(StatusCode::ProcessingError));
}

#[test]
fn unknown_algorithm() {
	let err = standard().combine("urn:x:none", &[]).unwrap_err();
	assert_eq!(err, EvalError::UnknownAlgorithm(AlgorithmId::from_static("urn:x:none")));
}

#[test]
fn closures_are_combiners() {
	let mut builder = AlgorithmRegistryBuilder::new();
	let always_deny = |_: &[CombinerResult]| Outcome::bare(Decision::Deny);
	builder
		.register(AlgorithmId::from_static("urn:x:deny"), Arc::new(always_deny), RegistrySource::Extension("test"))
		.unwrap();
	let Err(err) = builder.register(
		AlgorithmId::from_static("urn:x:deny"),
		Arc::new(builtins::FirstApplicable),
		RegistrySource::Builtin,
	) else {
		panic!("second registration of urn:x:deny must fail");
	};
	assert!(matches!(err, crate::error::RegistryError::DuplicateId { .. }));
	let registry = builder.seal();
	assert_eq!(registry.combine("urn:x:deny", &[]).unwrap().decision, Decision::Deny);
	assert!(Arc::ptr_eq(
		registry.resolve("urn:x:deny").unwrap(),
		registry.resolve("urn:x:deny").unwrap()
	));
}

#[test]
fn standard_set_is_complete() {
	let registry = standard();
	assert_eq!(registry.len(), 23);
	assert!(registry.contains(&format!("{POLICY_1_0}:only-one-applicable")));
	assert!(!registry.contains(&format!("{RULE_1_0}:only-one-applicable")));
}

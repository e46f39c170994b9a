use xacml_primitives::{CombinerResult, Outcome};

/// Reduces child results, ordered by ordinal, into one outcome.
pub trait Combiner: Send + Sync + 'static {
	fn combine(&self, results: &[CombinerResult]) -> Outcome;
}

impl<F> Combiner for F
where
	F: Fn(&[CombinerResult]) -> Outcome + Send + Sync + 'static,
{
	fn combine(&self, results: &[CombinerResult]) -> Outcome {
		self(results)
	}
}

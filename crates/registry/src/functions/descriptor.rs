use std::fmt;
use std::sync::Arc;

use xacml_primitives::{Arity, EvalError, FunctionId, Operand, ParamKind};

/// Callable behind a [`FunctionDescriptor`].
///
/// Receives the id it was invoked under so errors can name it.
pub type FunctionImpl = dyn Fn(&FunctionId, &[Operand]) -> Result<Operand, EvalError> + Send + Sync;

/// Declared parameter and return shapes of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
	params: Vec<ParamKind>,
	/// Repeating trailing parameter and its minimum repeat count.
	rest: Option<(ParamKind, usize)>,
	returns: ParamKind,
}

impl Signature {
	pub fn new(params: impl IntoIterator<Item = ParamKind>, returns: ParamKind) -> Self {
		Self {
			params: params.into_iter().collect(),
			rest: None,
			returns,
		}
	}

	/// Accepts `min` or more trailing arguments of shape `kind` after the fixed ones.
	pub fn with_rest(mut self, kind: ParamKind, min: usize) -> Self {
		self.rest = Some((kind, min));
		self
	}

	pub fn arity(&self) -> Arity {
		match &self.rest {
			None => Arity::Exact(self.params.len()),
			Some((_, min)) => Arity::AtLeast(self.params.len() + min),
		}
	}

	/// Shape expected at argument `position`, if the arity admits one there.
	pub fn param(&self, position: usize) -> Option<&ParamKind> {
		self.params
			.get(position)
			.or_else(|| self.rest.as_ref().map(|(kind, _)| kind))
	}

	/// Every declared parameter shape, the repeating one last.
	pub fn params(&self) -> impl Iterator<Item = &ParamKind> {
		self.params.iter().chain(self.rest.as_ref().map(|(kind, _)| kind))
	}

	pub fn returns(&self) -> &ParamKind {
		&self.returns
	}

	pub fn is_variadic(&self) -> bool {
		self.rest.is_some()
	}
}

/// A function's signature bound to its implementation. Cheap to clone.
#[derive(Clone)]
pub struct FunctionDescriptor {
	signature: Signature,
	implementation: Arc<FunctionImpl>,
}

impl FunctionDescriptor {
	pub fn new<F>(signature: Signature, implementation: F) -> Self
	where
		F: Fn(&FunctionId, &[Operand]) -> Result<Operand, EvalError> + Send + Sync + 'static,
	{
		Self {
			signature,
			implementation: Arc::new(implementation),
		}
	}

	pub fn signature(&self) -> &Signature {
		&self.signature
	}

	/// Checks arity and argument shapes, invokes, then checks the result shape.
	pub fn call(&self, id: &FunctionId, args: &[Operand]) -> Result<Operand, EvalError> {
		let arity = self.signature.arity();
		if !arity.admits(args.len()) {
			return Err(EvalError::Arity {
				function: id.clone(),
				expected: arity,
				actual: args.len(),
			});
		}

		for (position, arg) in args.iter().enumerate() {
			match self.signature.param(position) {
				Some(kind) if kind.accepts(arg) => {}
				Some(kind) => {
					return Err(EvalError::ArgumentType {
						function: id.clone(),
						position,
						expected: kind.clone(),
						found: arg.kind(),
					});
				}
				None => {
					return Err(EvalError::Arity {
						function: id.clone(),
						expected: arity,
						actual: args.len(),
					});
				}
			}
		}

		let result = (self.implementation)(id, args)?;
		if !self.signature.returns.accepts(&result) {
			return Err(EvalError::function(
				id,
				format!("returned {} where {} was declared", result.kind(), self.signature.returns),
			));
		}
		Ok(result)
	}
}

impl fmt::Debug for FunctionDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FunctionDescriptor")
			.field("signature", &self.signature)
			.finish_non_exhaustive()
	}
}

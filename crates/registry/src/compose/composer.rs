use std::sync::Arc;

use super::{Extender, ExtenderReg, Registries, RegistriesBuilder, StandardLibrary};
use crate::config::ComposerConfig;
use crate::error::CompositionError;

/// Every linked [`ExtenderReg`], sorted by `(ordinal, name)`.
pub fn discovered() -> Vec<&'static ExtenderReg> {
	let mut regs: Vec<&'static ExtenderReg> = inventory::iter::<ExtenderReg>.into_iter().collect();
	regs.sort_by_key(|reg| (reg.ordinal, reg.name));
	regs
}

/// Collects extenders and composes them into sealed [`Registries`].
pub struct Composer {
	include_standard: bool,
	extenders: Vec<Box<dyn Extender>>,
}

impl Composer {
	/// A composer that includes the [`StandardLibrary`] and nothing else.
	pub fn new() -> Self {
		Self {
			include_standard: true,
			extenders: Vec::new(),
		}
	}

	pub fn without_standard(mut self) -> Self {
		self.include_standard = false;
		self
	}

	pub fn with_extender(mut self, extender: impl Extender + 'static) -> Self {
		self.extenders.push(Box::new(extender));
		self
	}

	/// Adds every linked extender.
	pub fn discover(mut self) -> Self {
		self.extenders
			.extend(discovered().into_iter().map(|reg| (reg.construct)()));
		self
	}

	/// Builds a composer from the linked extenders `config` admits.
	pub fn from_config(config: &ComposerConfig) -> Result<Self, CompositionError> {
		let regs = discovered();
		if let Some(unknown) = config
			.named_extensions()
			.find(|name| !regs.iter().any(|reg| reg.name == *name))
		{
			return Err(CompositionError::UnknownExtension(unknown.to_owned()));
		}

		let mut composer = Self::new();
		composer.include_standard = config.include_standard;
		for reg in regs {
			if config.admits(reg.name) {
				composer.extenders.push((reg.construct)());
			} else {
				tracing::debug!(extender = reg.name, "skipped by configuration");
			}
		}
		Ok(composer)
	}

	pub fn compose(self) -> Result<Arc<Registries>, CompositionError> {
		let mut extenders = self.extenders;
		if self.include_standard {
			extenders.insert(0, Box::new(StandardLibrary));
		}
		compose(&extenders)
	}
}

impl Default for Composer {
	fn default() -> Self {
		Self::new()
	}
}

/// Registers every contribution of `extenders` and seals the result.
///
/// See the [module docs](super) for the registration order.
pub fn compose(extenders: &[Box<dyn Extender>]) -> Result<Arc<Registries>, CompositionError> {
	compose_into(RegistriesBuilder::new(), extenders)
		.inspect_err(|error| tracing::warn!(%error, "composition aborted"))
}

fn compose_into(
	mut builder: RegistriesBuilder,
	extenders: &[Box<dyn Extender>],
) -> Result<Arc<Registries>, CompositionError> {
	for extender in extenders {
		if let Some(types) = extender.as_types() {
			for (id, converter) in types.types() {
				builder.register_type(id, converter, extender.source())?;
			}
		}
	}

	for extender in extenders {
		if let Some(functions) = extender.as_functions() {
			for (id, descriptor) in functions.functions() {
				builder.register_function(id, descriptor, extender.source())?;
			}
		}
	}

	for extender in extenders {
		if let Some(algorithms) = extender.as_algorithms() {
			for (id, combiner) in algorithms.algorithms() {
				builder.register_algorithm(id, combiner, extender.source())?;
			}
		}
	}

	let registries = builder.seal()?;
	tracing::info!(
		types = registries.types().len(),
		functions = registries.functions().len(),
		algorithms = registries.algorithms().len(),
		extenders = ?extenders.iter().map(|e| e.name()).collect::<Vec<_>>(),
		"registries sealed"
	);
	Ok(Arc::new(registries))
}

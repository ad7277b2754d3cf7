use std::{fs::read_to_string, path::Path};

use anyhow::Context;
use tracing::{debug, info_span};

use crate::{FooError, codegen, optimizer::{Optimizer, OptimizerConfig}, parser, scanner};

/// Compiler runs the whole Foolang to JavaScript pipeline.
///
/// Each stage consumes the previous one's complete output, and the first
/// failing stage aborts the compilation. A `Compiler` holds no state between
/// calls, so one value can compile any number of sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct Compiler {
	config: OptimizerConfig,
}

impl Compiler {
	/// Create a compiler that runs the optimization passes `config` enables.
	pub fn new(config: OptimizerConfig) -> Self { Self { config } }

	/// Read a source file and compile it.
	pub fn compile_file<P: AsRef<Path>>(&self, path: P) -> Result<String, FooError> {
		let path = path.as_ref();
		let source = read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
		debug!(path = %path.display(), bytes = source.len(), "loaded source file");
		self.compile(&source)
	}

	/// Compile source text to JavaScript.
	pub fn compile(&self, source: &str) -> Result<String, FooError> {
		let tokens = info_span!("pipeline.lex").in_scope(|| scanner::tokenize(source))?;
		let program = info_span!("pipeline.parse").in_scope(|| parser::parse(tokens))?;
		let program = info_span!("pipeline.optimize").in_scope(|| {
			let mut optimizer = Optimizer::new(self.config);
			debug!(passes = ?optimizer.pass_names(), "optimizing");
			optimizer.optimize(&program)
		});
		Ok(info_span!("pipeline.codegen").in_scope(|| codegen::generate(&program)))
	}
}

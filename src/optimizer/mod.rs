//! AST-to-AST optimization passes.
//!
//! Each pass reads a [`Program`] and builds a new one, leaving its input
//! untouched, so passes compose in any order and the original tree stays
//! around for comparison. The [`Optimizer`] always runs constant folding
//! before dead-code elimination: folding turns `if (1 < 2)` into a plain
//! block, which can leave declarations unreferenced for the second pass to
//! remove.
//!
//! Optimization never fails. Whatever a pass cannot transform safely it
//! rebuilds unchanged.

pub mod constant_folding;
pub mod dead_code;

pub use constant_folding::ConstantFolder;
pub use dead_code::{DeadCodeEliminator, UsageInfo};
use tracing::debug;

use crate::ast::Program;

/// A single rewrite over a whole program.
pub trait Pass {
	/// Short name used in logs.
	fn name(&self) -> &'static str;

	/// Build the rewritten program.
	fn run(&mut self, program: &Program) -> Program;
}

/// Which passes to run. Both are on by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizerConfig {
	pub constant_folding:      bool,
	pub dead_code_elimination: bool,
}

impl Default for OptimizerConfig {
	fn default() -> Self { Self { constant_folding: true, dead_code_elimination: true } }
}

impl OptimizerConfig {
	/// A configuration that runs no pass at all.
	pub fn disabled() -> Self { Self { constant_folding: false, dead_code_elimination: false } }
}

/// Runs the enabled passes in their fixed order.
pub struct Optimizer {
	passes: Vec<Box<dyn Pass>>,
}

impl Optimizer {
	pub fn new(config: OptimizerConfig) -> Self {
		let mut passes: Vec<Box<dyn Pass>> = Vec::new();
		if config.constant_folding {
			passes.push(Box::new(ConstantFolder));
		}
		if config.dead_code_elimination {
			passes.push(Box::new(DeadCodeEliminator::default()));
		}
		Self { passes }
	}

	/// Names of the passes that will run, in order.
	pub fn pass_names(&self) -> Vec<&'static str> { self.passes.iter().map(|pass| pass.name()).collect() }

	pub fn optimize(&mut self, program: &Program) -> Program {
		let mut result = program.clone();
		for pass in &mut self.passes {
			let before = result.statements.len();
			result = pass.run(&result);
			debug!(pass = pass.name(), before, after = result.statements.len(), "ran optimization pass");
		}
		result
	}
}

impl Default for Optimizer {
	fn default() -> Self { Self::new(OptimizerConfig::default()) }
}

/// Run the passes `config` enables over `program`.
pub fn optimize(program: &Program, config: OptimizerConfig) -> Program { Optimizer::new(config).optimize(program) }

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{parser::parse, scanner::tokenize};

	fn program(input: &str) -> Program { parse(tokenize(input).unwrap()).unwrap() }

	#[test]
	fn pass_order_is_fixed() {
		assert_eq!(Optimizer::default().pass_names(), vec!["constant-folding", "dead-code-elimination"]);
		let only_dead_code = OptimizerConfig { constant_folding: false, dead_code_elimination: true };
		assert_eq!(Optimizer::new(only_dead_code).pass_names(), vec!["dead-code-elimination"]);
		assert!(Optimizer::new(OptimizerConfig::disabled()).pass_names().is_empty());
	}

	#[test]
	fn full_optimization() {
		let result = optimize(&program("let unused = 100\nlet result = 1 + 2\nprint(result)"), OptimizerConfig::default());
		assert_eq!(result.to_string(), "(let result 3)\n(call print result)");
	}

	#[test]
	fn folding_exposes_dead_code() {
		// The only reader of `x` sits in a branch that folding drops.
		let source = "let x = 1\nif (false) { print(x) }";
		assert_eq!(optimize(&program(source), OptimizerConfig::default()).to_string(), "(block)");
		let without_folding = OptimizerConfig { constant_folding: false, dead_code_elimination: true };
		assert_eq!(
			optimize(&program(source), without_folding).to_string(),
			"(let x 1)\n(if false (block (call print x)))"
		);
	}

	#[test]
	fn disabled_passes() {
		let input = program("let x = 1 + 2");
		assert_eq!(optimize(&input, OptimizerConfig::disabled()), input);

		let folding_only = OptimizerConfig { constant_folding: true, dead_code_elimination: false };
		assert_eq!(optimize(&input, folding_only).to_string(), "(let x 3)");
	}

	#[test]
	fn optimize_keeps_input_tree() {
		let input = program("let x = 1 + 2\nlet y = 3");
		let before = input.clone();
		let _ = optimize(&input, OptimizerConfig::default());
		assert_eq!(input, before);
	}
}

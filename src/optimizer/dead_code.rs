//! Removal of `let` bindings and functions whose names are never read.
//!
//! The pass walks the same tree twice. The first walk records, per name,
//! whether it is declared and whether it is ever referenced as an identifier
//! or callee. The second walk rebuilds the tree without the declarations that
//! were never referenced, and prunes the bodies of the functions that survive.
//!
//! Usage is pooled by name across the whole program. There is no notion of
//! scope, so a local in one function keeps alive a same-named binding
//! anywhere else, and the other way around.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::Pass;
use crate::ast::{Block, Expression, Function, Program, Statement};

/// Names that are always treated as used.
pub const BUILTINS: [&str; 2] = ["print", "console"];

/// What the collection walk learned about a name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct UsageInfo {
	pub defined: bool,
	pub used:    bool,
}

#[derive(Debug, Default)]
pub struct DeadCodeEliminator {
	usages: HashMap<String, UsageInfo>,
}

impl Pass for DeadCodeEliminator {
	fn name(&self) -> &'static str { "dead-code-elimination" }

	fn run(&mut self, program: &Program) -> Program {
		self.usages.clear();
		self.collect_statements(&program.statements);
		debug!(names = self.usages.len(), "collected name usage");

		Program::new(self.eliminate_statements(&program.statements))
	}
}

impl DeadCodeEliminator {
	/// Usage facts from the last run.
	pub fn usage(&self, name: &str) -> Option<UsageInfo> { self.usages.get(name).copied() }

	fn mark_defined(&mut self, name: &str) { self.usages.entry(name.to_owned()).or_default().defined = true; }

	fn mark_used(&mut self, name: &str) { self.usages.entry(name.to_owned()).or_default().used = true; }

	fn is_used(&self, name: &str) -> bool {
		BUILTINS.contains(&name) || self.usages.get(name).is_some_and(|info| info.used)
	}

	fn collect_statements(&mut self, statements: &[Statement]) {
		for statement in statements {
			self.collect_statement(statement);
		}
	}

	fn collect_statement(&mut self, statement: &Statement) {
		match statement {
			Statement::Let { name, value } => {
				self.mark_defined(name);
				self.collect_expression(value);
			}
			Statement::Return(value) => {
				if let Some(value) = value {
					self.collect_expression(value);
				}
			}
			Statement::Expression(expression) => self.collect_expression(expression),
			Statement::Block(block) => self.collect_statements(&block.statements),
			Statement::If { condition, then_branch, else_branch } => {
				self.collect_expression(condition);
				self.collect_statements(&then_branch.statements);
				if let Some(else_branch) = else_branch {
					self.collect_statements(&else_branch.statements);
				}
			}
			Statement::FnDeclaration(function) => {
				self.mark_defined(&function.name);
				// Arity is never checked against call sites, so parameters are
				// kept whether or not the body reads them.
				for parameter in &function.parameters {
					self.mark_defined(parameter);
					self.mark_used(parameter);
				}
				self.collect_statements(&function.body.statements);
			}
		}
	}

	fn collect_expression(&mut self, expression: &Expression) {
		match expression {
			Expression::Literal(_) => {}
			Expression::Identifier(name) => self.mark_used(name),
			Expression::Unary { operand, .. } => self.collect_expression(operand),
			Expression::Binary { left, right, .. } => {
				self.collect_expression(left);
				self.collect_expression(right);
			}
			Expression::Call { callee, arguments } => {
				self.collect_expression(callee);
				for argument in arguments {
					self.collect_expression(argument);
				}
			}
		}
	}

	fn eliminate_statements(&self, statements: &[Statement]) -> Vec<Statement> {
		statements.iter().filter_map(|statement| self.eliminate_statement(statement)).collect()
	}

	fn eliminate_block(&self, block: &Block) -> Block { Block::new(self.eliminate_statements(&block.statements)) }

	/// Rebuild one statement, or `None` when it declares an unused name.
	fn eliminate_statement(&self, statement: &Statement) -> Option<Statement> {
		if let Some(name) = statement.declared_name()
			&& !self.is_used(name)
		{
			trace!(name, "eliminated unused declaration");
			return None;
		}

		Some(match statement {
			Statement::Block(block) => Statement::Block(self.eliminate_block(block)),
			Statement::If { condition, then_branch, else_branch } => Statement::If {
				condition:   condition.clone(),
				then_branch: self.eliminate_block(then_branch),
				else_branch: else_branch.as_ref().map(|block| self.eliminate_block(block)),
			},
			Statement::FnDeclaration(function) => Statement::FnDeclaration(Function {
				name:       function.name.clone(),
				parameters: function.parameters.clone(),
				body:       self.eliminate_block(&function.body),
			}),
			Statement::Let { .. } | Statement::Return(_) | Statement::Expression(_) => statement.clone(),
		})
	}
}

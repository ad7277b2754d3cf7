//! Compile-time evaluation of operations whose operands are already literals.
//!
//! `1 + 2 * 3` => `7`, `"hello" + " world"` => `"hello world"`, `true == false`
//! => `false`.
//!
//! Operands are folded first, so folding works bottom-up in a single walk.
//! Anything that cannot be evaluated safely is rebuilt unchanged, notably
//! division by zero, which is left for the runtime to deal with.

use tracing::trace;

use super::Pass;
use crate::ast::{BinaryOperator, Block, Expression, Function, LiteralValue, Program, Statement, UnaryOperator};

/// Folds constant expressions and `if` statements with a literal condition.
#[derive(Debug, Default)]
pub struct ConstantFolder;

impl Pass for ConstantFolder {
	fn name(&self) -> &'static str { "constant-folding" }

	fn run(&mut self, program: &Program) -> Program {
		Program::new(program.statements.iter().map(|statement| self.fold_statement(statement)).collect())
	}
}

impl ConstantFolder {
	fn fold_statement(&self, statement: &Statement) -> Statement {
		match statement {
			Statement::Let { name, value } => Statement::Let { name: name.clone(), value: self.fold_expression(value) },
			Statement::Return(value) => Statement::Return(value.as_ref().map(|value| self.fold_expression(value))),
			Statement::Expression(expression) => Statement::Expression(self.fold_expression(expression)),
			Statement::Block(block) => Statement::Block(self.fold_block(block)),
			Statement::If { condition, then_branch, else_branch } => {
				let condition = self.fold_expression(condition);
				let then_branch = self.fold_block(then_branch);
				let else_branch = else_branch.as_ref().map(|block| self.fold_block(block));

				match condition {
					Expression::Literal(LiteralValue::Bool(value)) => {
						trace!(value, "folded if with constant condition");
						match (value, else_branch) {
							(true, _) => Statement::Block(then_branch),
							(false, Some(else_branch)) => Statement::Block(else_branch),
							(false, None) => Statement::Block(Block::default()),
						}
					}
					condition => Statement::If { condition, then_branch, else_branch },
				}
			}
			Statement::FnDeclaration(function) => Statement::FnDeclaration(Function {
				name:       function.name.clone(),
				parameters: function.parameters.clone(),
				body:       self.fold_block(&function.body),
			}),
		}
	}

	fn fold_block(&self, block: &Block) -> Block {
		Block::new(block.statements.iter().map(|statement| self.fold_statement(statement)).collect())
	}

	fn fold_expression(&self, expression: &Expression) -> Expression {
		match expression {
			Expression::Literal(_) | Expression::Identifier(_) => expression.clone(),
			Expression::Unary { operator, operand } => {
				let operand = self.fold_expression(operand);
				match (operator, operand) {
					(UnaryOperator::Negate, Expression::Literal(LiteralValue::Number(value))) => Expression::number(-value),
					(operator, operand) => Expression::unary(*operator, operand),
				}
			}
			Expression::Binary { left, operator, right } => {
				let left = self.fold_expression(left);
				let right = self.fold_expression(right);
				match fold_binary(&left, *operator, &right) {
					Some(folded) => {
						trace!(%left, operator = operator.symbol(), %right, %folded, "folded binary expression");
						folded
					}
					None => Expression::binary(left, *operator, right),
				}
			}
			Expression::Call { callee, arguments } => Expression::call(
				self.fold_expression(callee),
				arguments.iter().map(|argument| self.fold_expression(argument)).collect(),
			),
		}
	}
}

/// Evaluate `left operator right` when both sides are literals of a foldable
/// kind. `None` leaves the expression as it is.
fn fold_binary(left: &Expression, operator: BinaryOperator, right: &Expression) -> Option<Expression> {
	use BinaryOperator::*;

	match (left.as_literal()?, right.as_literal()?) {
		(LiteralValue::Number(left), LiteralValue::Number(right)) => {
			let (left, right) = (*left, *right);
			Some(match operator {
				Add => Expression::number(left + right),
				Subtract => Expression::number(left - right),
				Multiply => Expression::number(left * right),
				Divide if right != 0.0 => Expression::number(left / right),
				Divide => return None,
				Equal => Expression::bool(left == right),
				NotEqual => Expression::bool(left != right),
				Less => Expression::bool(left < right),
				Greater => Expression::bool(left > right),
				LessEqual => Expression::bool(left <= right),
				GreaterEqual => Expression::bool(left >= right),
			})
		}
		(LiteralValue::String(left), LiteralValue::String(right)) if operator == Add => {
			Some(Expression::string(format!("{left}{right}")))
		}
		(LiteralValue::Bool(left), LiteralValue::Bool(right)) => match operator {
			Equal => Some(Expression::bool(left == right)),
			NotEqual => Some(Expression::bool(left != right)),
			_ => None,
		},
		_ => None,
	}
}

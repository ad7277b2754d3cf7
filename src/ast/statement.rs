//! There is no place in the grammar where both an expression and a statement
//! are allowed. The operands of, say, `+` are always expressions, never
//! statements. The body of a function is always a block.

use super::Expression;

/// A statement in Foolang.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
	/// `let name = value`
	Let { name: String, value: Expression },
	/// `return` with an optional value.
	Return(Option<Expression>),
	/// An expression used as a statement.
	Expression(Expression),
	/// A bare `{ ... }` block.
	Block(Block),
	If { condition: Expression, then_branch: Block, else_branch: Option<Block> },
	FnDeclaration(Function),
}

impl Statement {
	/// The name a `let` or `fn` introduces, if this statement declares one.
	pub fn declared_name(&self) -> Option<&str> {
		match self {
			Statement::Let { name, .. } => Some(name.as_str()),
			Statement::FnDeclaration(function) => Some(function.name.as_str()),
			_ => None,
		}
	}
}

/// A brace-delimited list of statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Block {
	pub statements: Vec<Statement>,
}

impl Block {
	pub fn new(statements: Vec<Statement>) -> Self { Self { statements } }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
	pub name:       String,
	pub parameters: Vec<String>,
	pub body:       Block,
}

impl std::fmt::Display for Statement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Statement::Let { name, value } => write!(f, "(let {name} {value})"),
			Statement::Return(Some(value)) => write!(f, "(return {value})"),
			Statement::Return(None) => write!(f, "(return)"),
			Statement::Expression(expression) => write!(f, "{expression}"),
			Statement::Block(block) => write!(f, "{block}"),
			Statement::If { condition, then_branch, else_branch: Some(else_branch) } => {
				write!(f, "(if {condition} {then_branch} {else_branch})")
			}
			Statement::If { condition, then_branch, else_branch: None } => write!(f, "(if {condition} {then_branch})"),
			Statement::FnDeclaration(Function { name, parameters, body }) => {
				write!(f, "(fn {name} ({}) {body})", parameters.join(" "))
			}
		}
	}
}

impl std::fmt::Display for Block {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "(block")?;
		for statement in &self.statements {
			write!(f, " {statement}")?;
		}
		write!(f, ")")
	}
}

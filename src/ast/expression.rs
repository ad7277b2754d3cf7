//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `-123 * (45.67)`
//! as nested nodes. Every node owns its children outright.

use Expression::*;

/// Expression AST nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
	Literal(LiteralValue),
	Identifier(String),
	Unary { operator: UnaryOperator, operand: Box<Expression> },
	Binary { left: Box<Expression>, operator: BinaryOperator, right: Box<Expression> },
	Call { callee: Box<Expression>, arguments: Vec<Expression> },
}

impl Expression {
	pub fn number(value: f64) -> Self { Literal(LiteralValue::Number(value)) }

	pub fn string(value: impl Into<String>) -> Self { Literal(LiteralValue::String(value.into())) }

	pub fn bool(value: bool) -> Self { Literal(LiteralValue::Bool(value)) }

	pub fn identifier(name: impl Into<String>) -> Self { Identifier(name.into()) }

	pub fn unary(operator: UnaryOperator, operand: Self) -> Self { Unary { operator, operand: Box::new(operand) } }

	pub fn binary(left: Self, operator: BinaryOperator, right: Self) -> Self {
		Binary { left: Box::new(left), operator, right: Box::new(right) }
	}

	pub fn call(callee: Self, arguments: Vec<Self>) -> Self { Call { callee: Box::new(callee), arguments } }

	pub fn as_literal(&self) -> Option<&LiteralValue> {
		match self {
			Literal(literal) => Some(literal),
			_ => None,
		}
	}
}

/// Literal values in the AST. Strings hold their text without escapes.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
	Number(f64),
	String(String),
	Bool(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
	Negate,
}

impl UnaryOperator {
	pub fn symbol(self) -> &'static str {
		match self {
			UnaryOperator::Negate => "-",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
	Add,
	Subtract,
	Multiply,
	Divide,
	Equal,
	NotEqual,
	Less,
	Greater,
	LessEqual,
	GreaterEqual,
}

impl BinaryOperator {
	/// The operator as written, shared by Foolang and the JavaScript output.
	pub fn symbol(self) -> &'static str {
		use BinaryOperator::*;
		match self {
			Add => "+",
			Subtract => "-",
			Multiply => "*",
			Divide => "/",
			Equal => "==",
			NotEqual => "!=",
			Less => "<",
			Greater => ">",
			LessEqual => "<=",
			GreaterEqual => ">=",
		}
	}
}

impl std::fmt::Display for Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Literal(literal) => write!(f, "{literal}"),
			Identifier(name) => write!(f, "{name}"),
			Unary { operator, operand } => write!(f, "({} {operand})", operator.symbol()),
			Binary { left, operator, right } => write!(f, "({} {left} {right})", operator.symbol()),
			Call { callee, arguments } => {
				write!(f, "(call {callee}")?;
				for argument in arguments {
					write!(f, " {argument}")?;
				}
				write!(f, ")")
			}
		}
	}
}

impl std::fmt::Display for LiteralValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			LiteralValue::Number(n) => write!(f, "{n}"),
			LiteralValue::String(s) => write!(f, "\"{s}\""),
			LiteralValue::Bool(b) => write!(f, "{b}"),
		}
	}
}

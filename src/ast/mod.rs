//! The abstract syntax tree shared by the parser, the optimizer passes and the
//! code generator.
//!
//! ``` markdown
//! result (Statement::Let)
//! └── + (Expression::Binary)
//!     ├── 1 (Expression::Literal)
//!     └── * (Expression::Binary)
//!         ├── 2 (Expression::Literal)
//!         └── 3 (Expression::Literal)
//! ```
//!
//! Both node families are closed enums and every stage is an exhaustive
//! `match` over them. Nodes own their children, there are no back references,
//! and passes build a new tree instead of editing one in place.
//!
//! `Display` renders a tree as an S-expression, e.g. `(let result (+ 1 (* 2
//! 3)))`, which is what the tests compare against.

mod expression;
mod statement;

pub use expression::*;
pub use statement::*;

/// The root of the tree: the top-level statements in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
	pub statements: Vec<Statement>,
}

impl Program {
	pub fn new(statements: Vec<Statement>) -> Self { Self { statements } }
}

impl std::fmt::Display for Program {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let lines = self.statements.iter().map(|statement| statement.to_string()).collect::<Vec<String>>();
		write!(f, "{}", lines.join("\n"))
	}
}

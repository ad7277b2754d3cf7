//! JavaScript generation from the AST.
//!
//! A single depth-first walk that returns text for every node. Each statement
//! becomes one line at the current indentation, function bodies and `if`
//! branches are wrapped in braces one level deeper. Binary and unary
//! expressions are always parenthesised, so precedence in the output never
//! depends on JavaScript's own rules.
//!
//! Calls to `print` become `console.log`. This is a plain comparison on the
//! callee's generated text, it does not look at bindings: a user function
//! named `print` is rewritten the same way.

use tracing::debug;

use crate::ast::{Block, Expression, Function, LiteralValue, Program, Statement};

/// The Foolang name rewritten to [`CONSOLE_OUTPUT`].
pub const PRINT_BUILTIN: &str = "print";
/// The JavaScript call `print` maps to.
pub const CONSOLE_OUTPUT: &str = "console.log";

const INDENT_UNIT: &str = "  ";

/// Generate JavaScript for a whole program.
pub fn generate(program: &Program) -> String { CodeGenerator::new().generate(program) }

#[derive(Debug, Default)]
pub struct CodeGenerator {
	indent_level: usize,
}

impl CodeGenerator {
	pub fn new() -> Self { Self::default() }

	pub fn generate(&mut self, program: &Program) -> String {
		let output = self.statements(&program.statements);
		debug!(bytes = output.len(), "generated javascript");
		output
	}

	fn indent(&self) -> String { INDENT_UNIT.repeat(self.indent_level) }

	/// Generate each statement on its own line, dropping the ones with no
	/// output such as empty blocks.
	fn statements(&mut self, statements: &[Statement]) -> String {
		statements
			.iter()
			.map(|statement| self.statement(statement))
			.filter(|code| !code.is_empty())
			.collect::<Vec<String>>()
			.join("\n")
	}

	fn statement(&mut self, statement: &Statement) -> String {
		let indent = self.indent();
		match statement {
			Statement::Let { name, value } => format!("{indent}let {name} = {};", expression(value)),
			Statement::Return(Some(value)) => format!("{indent}return {};", expression(value)),
			Statement::Return(None) => format!("{indent}return;"),
			Statement::Expression(value) => format!("{indent}{};", expression(value)),
			// A bare block has no braces of its own, its statements are emitted in
			// place.
			Statement::Block(block) => self.statements(&block.statements),
			Statement::If { condition, then_branch, else_branch } => {
				let mut code = format!("{indent}if ({}) {}", expression(condition), self.braced(then_branch));
				if let Some(else_branch) = else_branch {
					code.push_str(&format!(" else {}", self.braced(else_branch)));
				}
				code
			}
			Statement::FnDeclaration(Function { name, parameters, body }) => {
				format!("{indent}function {name}({}) {}", parameters.join(", "), self.braced(body))
			}
		}
	}

	/// `{`, the block one level deeper, then `}` on its own line at the current
	/// level.
	fn braced(&mut self, block: &Block) -> String {
		let indent = self.indent();
		self.indent_level += 1;
		let body = self.statements(&block.statements);
		self.indent_level -= 1;

		if body.is_empty() { format!("{{\n{indent}}}") } else { format!("{{\n{body}\n{indent}}}") }
	}
}

fn expression(expression: &Expression) -> String {
	match expression {
		Expression::Literal(literal) => literal_value(literal),
		Expression::Identifier(name) => name.clone(),
		Expression::Unary { operator, operand } => format!("({}{})", operator.symbol(), self::expression(operand)),
		Expression::Binary { left, operator, right } => {
			format!("({} {} {})", self::expression(left), operator.symbol(), self::expression(right))
		}
		Expression::Call { callee, arguments } => {
			let mut callee = self::expression(callee);
			if callee == PRINT_BUILTIN {
				callee = CONSOLE_OUTPUT.to_string();
			}
			let arguments = arguments.iter().map(self::expression).collect::<Vec<String>>().join(", ");
			format!("{callee}({arguments})")
		}
	}
}

fn literal_value(literal: &LiteralValue) -> String {
	match literal {
		LiteralValue::Number(value) => number(*value),
		LiteralValue::String(value) => format!("\"{}\"", escape(value)),
		LiteralValue::Bool(value) => value.to_string(),
	}
}

/// Whole numbers print without a decimal point, everything else in its
/// shortest round-trip form.
fn number(value: f64) -> String {
	if value.is_nan() {
		"NaN".to_string()
	} else if value.is_infinite() {
		if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
	} else if value == 0.0 {
		// Also catches -0.
		"0".to_string()
	} else {
		value.to_string()
	}
}

/// Escape backslashes first so the backslashes added for quotes and newlines
/// are not escaped again.
fn escape(value: &str) -> String { value.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n") }

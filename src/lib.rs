//! # Foolang
//!
//! A small scripting language that compiles to JavaScript.
//!
//! User's source code: `let average = (min + max) / 2`

//! ## Scanning
//!
//! Also known as `lexing` or `lexical analysis`, takes in the characters and
//! converts them into tokens. Single characters `(`, `,`, numbers `123`,
//! string literals `"hi!"`, identifiers `min` are all tokens.
//!
//! Whitespaces and comments are ignored. So the tokens are
//! `["let", "average", "=", "(", "min", "+", "max", ")", "/", "2"]`.

//! ## Parsing
//!
//! A `parser` builds an `abstract syntax tree` out of the tokens and reports
//! the first `syntax error` it meets.
//!
//! ``` markdown
//! average (Statement::Let)
//! └── / (Expression::Binary)
//!     ├── + (Expression::Binary)
//!     │   ├── min (Expression::Identifier)
//!     │   └── max (Expression::Identifier)
//!     └── 2 (Expression::Literal)
//! ```

//! ## Optimization
//!
//! Passes that rewrite the tree into a new tree. Constant folding evaluates
//! what is already known, `1 + 2 * 3` => `7`, and dead-code elimination drops
//! bindings and functions nobody refers to.

//! ## Code generation
//!
//! A transpiler: instead of lowering the semantics to machine code we produce
//! a string of source code for another high-level language, here JavaScript.

pub mod ast;
pub mod cli;
pub mod codegen;
mod compiler;
pub mod error;
pub mod optimizer;
pub mod parser;
pub mod scanner;

pub use codegen::generate;
pub use compiler::Compiler;
pub use error::{FooError, LexError, ParseError};
pub use optimizer::{OptimizerConfig, optimize};
pub use parser::parse;
pub use scanner::tokenize;

/// Compile Foolang source to JavaScript, running every optimization pass when
/// `optimize` is set.
pub fn compile_source(source: &str, optimize: bool) -> Result<String, FooError> {
	let config = if optimize { OptimizerConfig::default() } else { OptimizerConfig::disabled() };
	Compiler::new(config).compile(source)
}

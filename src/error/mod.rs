pub mod parser;
pub mod scanner;

pub use parser::{ParseError, ParseErrorType};
pub use scanner::{LexError, LexErrorType};

/// FooError is the top-level error type for the Foolang compiler.
#[derive(thiserror::Error, Debug)]
pub enum FooError {
	/// Failures outside the pipeline stages, such as reading the source file
	#[error("Error: {0:#}")]
	InternalError(#[from] anyhow::Error),
	/// The scanner hit an unexpected character or an unterminated string
	#[error("Lexer error: {0}")]
	Lex(#[from] LexError),
	/// The parser hit a grammar mismatch
	#[error("Parse error: {0}")]
	Parse(#[from] ParseError),
}

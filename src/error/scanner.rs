/// A scanning error with the position of the offending character.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{type} at line {line}, column {column}")]
pub struct LexError {
	/// The line number where the error occurred.
	pub line:   usize,
	/// The column number where the error occurred.
	pub column: usize,
	/// The type of scanning error.
	pub r#type: LexErrorType,
}

impl LexError {
	pub fn new(line: usize, column: usize, r#type: LexErrorType) -> Self { Self { line, column, r#type } }
}

/// Types of scanning errors.
#[derive(Debug, Clone, PartialEq)]
pub enum LexErrorType {
	/// A character that starts no token, including a `!` without `=`.
	UnexpectedCharacter(char),
	/// A string that hits a newline or the end of input before its closing
	/// quote.
	UnterminatedString,
}

impl std::fmt::Display for LexErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use LexErrorType::*;
		match self {
			UnexpectedCharacter(c) => {
				write!(f, "Unexpected character: {c}")
			}
			UnterminatedString => {
				write!(f, "Unterminated string")
			}
		}
	}
}

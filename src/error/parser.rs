use crate::scanner::Token;

/// A syntax error anchored at the token where parsing stopped.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{type} at line {}, column {}", .token.line, .token.column)]
pub struct ParseError {
	/// The unexpected token, or the one standing where a missing token should
	/// be.
	pub token:  Token,
	pub r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(token: Token, r#type: ParseErrorType) -> Self { Self { token, r#type } }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorType {
	/// A specific token was required, the message names it.
	Expected(&'static str),
	ExpectedExpression,
	/// A number token whose text is not a valid number, such as `1.2.3`.
	InvalidNumber(String),
	/// Nesting went past the given limit.
	NestingTooDeep(usize),
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			Expected(what) => {
				write!(f, "Expected {what}")
			}
			ExpectedExpression => {
				write!(f, "Expected expression")
			}
			InvalidNumber(text) => {
				write!(f, "Invalid number literal '{text}'")
			}
			NestingTooDeep(limit) => {
				write!(f, "Nesting deeper than {limit} levels")
			}
		}
	}
}

//! Turns Foolang source text into a flat list of tokens.
//!
//! The scanner walks the characters once, left to right. It needs one
//! character of lookahead for the two-character operators (`==`, `!=`, `<=`,
//! `>=`) and to tell a `//` comment from a slash, and nothing more.
//!
//! Whitespace and comments never produce tokens. Every other lexeme becomes
//! a [`Token`] carrying its 1-based line and column, and the list always ends
//! with exactly one [`TokenType::Eof`].
//!
//! Number literals are munched greedily as a run of digits and dots, so
//! `1.2.3` is a single token and deciding whether it is a number is left to
//! the parser. A leading `.` is not a number start and is rejected.
//!
//! We can't easily detect a reserved word until we've reached the end of what
//! might instead be an identifier, this is `maximal munch`.
mod token;

use std::{iter::Peekable, str::CharIndices};

use TokenType::*;
pub use token::*;
use tracing::{debug, trace};

use crate::error::{LexError, LexErrorType};

/// Scan `source` into tokens terminated by a single `Eof` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> { Scanner::new(source).scan_tokens() }

/// A scanner for Foolang source code
pub struct Scanner<'a> {
	/// User input source code
	source:      &'a str,
	/// User input source code iterator
	source_iter: Peekable<CharIndices<'a>>,
	/// Points at the beginning of the current lexeme
	start:       usize,
	/// Points just past the character last consumed
	cursor:      usize,
	/// Line of the next character to consume
	line:        usize,
	/// Column of the next character to consume
	column:      usize,
}

impl<'a> Scanner<'a> {
	pub fn new(source: &'a str) -> Self {
		let source_iter = source.char_indices().peekable();

		Self { source, source_iter, start: 0, cursor: 0, line: 1, column: 1 }
	}

	/// Scan all tokens from the source code, stopping at the first error.
	pub fn scan_tokens(mut self) -> Result<Vec<Token>, LexError> {
		let mut tokens = Vec::new();
		loop {
			self.skip_whitespace_and_comments();
			if self.peek().is_none() {
				break;
			}
			let token = self.scan_token()?;
			trace!(kind = %token.r#type, text = %token.text, line = token.line, column = token.column, "scanned token");
			tokens.push(token);
		}
		tokens.push(Token::new(Eof, "", self.line, self.column));
		debug!(count = tokens.len(), "scanned source");
		Ok(tokens)
	}

	/// Scan a single token, the next character is known to exist and not to be
	/// whitespace.
	fn scan_token(&mut self) -> Result<Token, LexError> {
		let (line, column) = (self.line, self.column);
		self.start = self.cursor;
		let unexpected = |c| LexError::new(line, column, LexErrorType::UnexpectedCharacter(c));
		let Some(next_char) = self.advance() else {
			return Ok(Token::new(Eof, "", line, column));
		};

		#[rustfmt::skip]
		let r#type = match next_char {
			'(' => LeftParen,
			')' => RightParen,
			'{' => LeftBrace,
			'}' => RightBrace,
			',' => Comma,
			'+' => Plus,
			'-' => Minus,
			'*' => Star,
			'/' => Slash,
			'=' => if self.match_next('=') { EqualEqual } else { Equal },
			'<' => if self.match_next('=') { LessEqual } else { Less },
			'>' => if self.match_next('=') { GreaterEqual } else { Greater },
			'!' => if self.match_next('=') { BangEqual } else { return Err(unexpected('!')) },
			'"' => return self.string(line, column),
			c if c.is_ascii_digit() => self.number(),
			c if c.is_alphabetic() || c == '_' => self.identifier(),
			c => return Err(unexpected(c)),
		};

		Ok(Token::new(r#type, &self.source[self.start..self.cursor], line, column))
	}

	/// Skip spaces, tabs, newlines and `//` comments.
	fn skip_whitespace_and_comments(&mut self) {
		while let Some(c) = self.peek() {
			match c {
				' ' | '\t' | '\r' | '\n' => {
					self.advance();
				}
				'/' if self.peek_second() == Some('/') => {
					while self.peek().is_some_and(|c| c != '\n') {
						self.advance();
					}
				}
				_ => break,
			}
		}
	}

	/// Match the next character if it is the expected one
	fn match_next(&mut self, expected: char) -> bool {
		matches!(self.peek(), Some(c) if c == expected && { self.advance(); true })
	}

	/// Advance to the next character, keeping line and column in step
	fn advance(&mut self) -> Option<char> {
		let (i, c) = self.source_iter.next()?;
		self.cursor = i + c.len_utf8();
		if c == '\n' {
			self.line += 1;
			self.column = 1;
		} else {
			self.column += 1;
		}
		Some(c)
	}

	/// Peek the current character
	fn peek(&mut self) -> Option<char> { self.source_iter.peek().map(|&(_, c)| c) }

	/// Peek the second character ahead
	fn peek_second(&mut self) -> Option<char> {
		let mut it = self.source_iter.clone();
		it.next()?;
		it.peek().map(|&(_, c)| c)
	}

	/// Scan a string literal. The opening quote is already consumed and the
	/// token is positioned at it.
	fn string(&mut self, line: usize, column: usize) -> Result<Token, LexError> {
		let unterminated = || LexError::new(line, column, LexErrorType::UnterminatedString);
		loop {
			match self.peek() {
				Some('"') => break,
				Some('\n') | None => return Err(unterminated()),
				Some(_) => {
					self.advance();
				}
			}
		}
		let value = self.source[self.start + 1..self.cursor].to_owned();
		self.advance(); // The closing "
		Ok(Token::new(String, value, line, column))
	}

	/// Scan a number literal as a run of digits and dots.
	fn number(&mut self) -> TokenType {
		while self.peek().is_some_and(|c| c.is_ascii_digit() || c == '.') {
			self.advance();
		}
		Number
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> TokenType {
		while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
			self.advance();
		}
		TokenType::keyword_or_identifier(&self.source[self.start..self.cursor])
	}
}

/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
	pub r#type: TokenType,
	/// The source slice this token was scanned from. String literals keep only
	/// the characters between the quotes.
	pub text:   String,
	pub line:   usize,
	pub column: usize,
}

impl Token {
	pub fn new(r#type: TokenType, text: impl Into<String>, line: usize, column: usize) -> Self {
		Self { r#type, text: text.into(), line, column }
	}
}

/// The different types of tokens in Foolang
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
	/// Number literal, e.g. `123.45`. The text is not validated, `1.2.3` is one
	/// token.
	Number,
	/// String literal, e.g. `"hello"`.
	String,
	/// Identifier, e.g. variable or function name.
	Identifier,
	/// Binding keyword `let`.
	Let,
	/// Function keyword `fn`.
	Fn,
	/// Return keyword.
	Return,
	/// If statement keyword.
	If,
	/// Else keyword.
	Else,
	/// Boolean literal `true`.
	True,
	/// Boolean literal `false`.
	False,
	/// Plus `+`.
	Plus,
	/// Minus `-`.
	Minus,
	/// Asterisk `*`.
	Star,
	/// Slash `/`.
	Slash,
	/// Equal `=`.
	Equal,
	/// Equal equal `==`.
	EqualEqual,
	/// Bang equal `!=`.
	BangEqual,
	/// Less than `<`.
	Less,
	/// Greater than `>`.
	Greater,
	/// Less than or equal `<=`.
	LessEqual,
	/// Greater than or equal `>=`.
	GreaterEqual,
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Left brace `{`.
	LeftBrace,
	/// Right brace `}`.
	RightBrace,
	/// Comma `,`.
	Comma,
	/// End of input.
	Eof,
}

impl TokenType {
	pub fn keyword_or_identifier(value: &str) -> Self {
		match value {
			"let" => TokenType::Let,
			"fn" => TokenType::Fn,
			"return" => TokenType::Return,
			"if" => TokenType::If,
			"else" => TokenType::Else,
			"true" => TokenType::True,
			"false" => TokenType::False,
			_ => TokenType::Identifier,
		}
	}
}

impl std::fmt::Display for TokenType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use TokenType::*;
		let text = match self {
			Number => "number",
			String => "string",
			Identifier => "identifier",
			Let => "let",
			Fn => "fn",
			Return => "return",
			If => "if",
			Else => "else",
			True => "true",
			False => "false",
			Plus => "+",
			Minus => "-",
			Star => "*",
			Slash => "/",
			Equal => "=",
			EqualEqual => "==",
			BangEqual => "!=",
			Less => "<",
			Greater => ">",
			LessEqual => "<=",
			GreaterEqual => ">=",
			LeftParen => "(",
			RightParen => ")",
			LeftBrace => "{",
			RightBrace => "}",
			Comma => ",",
			Eof => "end of input",
		};
		write!(f, "{text}")
	}
}

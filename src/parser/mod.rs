//! The `Scanner` use `Lexical grammar`, implement `alphabet` as `Characters`,
//! `string` as `Lexeme` or `Token`.
//! The `Parser` use `Syntactic grammar`, implement `alphabet` as `Tokens`,
//! `string` as `Statement` and `Expression`.
//!
//! |Name|Operators|Associates
//! --|--|--
//! Equality|== !=|Left
//! Comparison|< > <= >=|Left
//! Term|+ -|Left
//! Factor|* /|Left
//! Unary|-|Right
//! Call|()|Left
//!
//! Grammar:
//!
//! ``` BNF
//! program        → declaration* EOF ;
//! declaration    → fnDecl | letDecl | statement ;
//! fnDecl         → "fn" IDENT "(" parameters? ")" block ;
//! parameters     → IDENT ( "," IDENT )* ;
//! letDecl        → "let" IDENT "=" expression ;
//! statement      → returnStmt | ifStmt | block | expression ;
//! returnStmt     → "return" expression? ;
//! ifStmt         → "if" "(" expression ")" block ( "else" block )? ;
//! block          → "{" declaration* "}" ;
//!
//! expression     → equality ;
//! equality       → comparison ( ( "!=" | "==" ) comparison )* ;
//! comparison     → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
//! term           → factor ( ( "-" | "+" ) factor )* ;
//! factor         → unary ( ( "/" | "*" ) unary )* ;
//! unary          → "-" unary | call ;
//! call           → primary ( "(" arguments? ")" )* ;
//! arguments      → expression ( "," expression )* ;
//! primary        → NUMBER | STRING | "true" | "false" | IDENT | "(" expression ")" ;
//! ```
//!
//! There are no statement terminators: a `return` without a value is one
//! followed directly by `}` or the end of input. The first mismatch aborts
//! the parse, there is no error recovery.

use std::{iter::Peekable, vec::IntoIter};

use TokenType::*;
use tracing::debug;

use crate::{ast::{BinaryOperator, Block, Expression, Function, Program, Statement, UnaryOperator}, error::{ParseError, ParseErrorType}, scanner::{Token, TokenType}};

/// How deep the tree may nest before the parse is rejected. Parentheses,
/// unary prefixes, argument lists and blocks each add a level, and so does
/// every link of a binary operator chain or a call chain. Parsing and every
/// later pass recurse once per level.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parse a token list ending in `Eof` into a program.
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> { Parser::new(tokens).program() }

/// A recursive-descent parser over the scanner's tokens.
pub struct Parser {
	/// The tokens to parse.
	tokens: Peekable<IntoIter<Token>>,
	/// Stands in for every position at or past the end of input.
	eof:    Token,
	/// Current nesting depth, see [`MAX_NESTING_DEPTH`].
	depth:  usize,
}

impl Parser {
	pub fn new(tokens: Vec<Token>) -> Self {
		let eof = match tokens.last() {
			Some(last) if last.r#type == Eof => last.clone(),
			Some(last) => Token::new(Eof, "", last.line, last.column + last.text.chars().count()),
			None => Token::new(Eof, "", 1, 1),
		};
		Self { tokens: tokens.into_iter().peekable(), eof, depth: 0 }
	}

	/// Parse every top-level declaration up to the end of input.
	pub fn program(mut self) -> Result<Program, ParseError> {
		let mut statements = Vec::new();
		while !self.is_at_end() {
			statements.push(self.declaration()?);
		}
		debug!(statements = statements.len(), "parsed program");
		Ok(Program::new(statements))
	}

	fn declaration(&mut self) -> Result<Statement, ParseError> {
		if self.match_type(Fn) {
			return self.fn_declaration();
		}
		if self.match_type(Let) {
			return self.let_statement();
		}
		self.statement()
	}

	fn fn_declaration(&mut self) -> Result<Statement, ParseError> {
		let name = self.consume(Identifier, "function name")?.text;
		self.consume(LeftParen, "'(' after function name")?;

		let mut parameters = Vec::new();
		if !self.check(RightParen) {
			parameters.push(self.consume(Identifier, "parameter name")?.text);
			while self.match_type(Comma) {
				parameters.push(self.consume(Identifier, "parameter name")?.text);
			}
		}

		self.consume(RightParen, "')' after parameters")?;
		self.consume(LeftBrace, "'{' before function body")?;
		let body = self.block()?;

		Ok(Statement::FnDeclaration(Function { name, parameters, body }))
	}

	fn let_statement(&mut self) -> Result<Statement, ParseError> {
		let name = self.consume(Identifier, "variable name")?.text;
		self.consume(Equal, "'=' after variable name")?;
		let value = self.expression()?;
		Ok(Statement::Let { name, value })
	}

	fn statement(&mut self) -> Result<Statement, ParseError> {
		if self.match_type(Return) {
			return self.return_statement();
		}
		if self.match_type(If) {
			return self.if_statement();
		}
		if self.match_type(LeftBrace) {
			return Ok(Statement::Block(self.block()?));
		}
		Ok(Statement::Expression(self.expression()?))
	}

	fn return_statement(&mut self) -> Result<Statement, ParseError> {
		if self.check(RightBrace) || self.is_at_end() {
			return Ok(Statement::Return(None));
		}
		Ok(Statement::Return(Some(self.expression()?)))
	}

	fn if_statement(&mut self) -> Result<Statement, ParseError> {
		self.consume(LeftParen, "'(' after 'if'")?;
		let condition = self.expression()?;
		self.consume(RightParen, "')' after condition")?;

		self.consume(LeftBrace, "'{' after if condition")?;
		let then_branch = self.block()?;

		let else_branch = if self.match_type(Else) {
			self.consume(LeftBrace, "'{' after 'else'")?;
			Some(self.block()?)
		} else {
			None
		};

		Ok(Statement::If { condition, then_branch, else_branch })
	}

	/// Parse the rest of a block, the opening brace is already consumed.
	fn block(&mut self) -> Result<Block, ParseError> {
		self.nested(|parser| {
			let mut statements = Vec::new();
			while !parser.check(RightBrace) && !parser.is_at_end() {
				statements.push(parser.declaration()?);
			}
			parser.consume(RightBrace, "'}' after block")?;
			Ok(Block::new(statements))
		})
	}

	fn expression(&mut self) -> Result<Expression, ParseError> { self.nested(Self::equality) }

	/// Parse equality expressions.
	fn equality(&mut self) -> Result<Expression, ParseError> {
		let depth = self.depth;
		let mut expression = self.comparison()?;
		while let Some(operator) = self.match_operator(&[EqualEqual, BangEqual]) {
			self.deepen()?;
			expression = Expression::binary(expression, operator, self.comparison()?);
		}
		self.depth = depth;
		Ok(expression)
	}

	/// Parse comparison expressions.
	fn comparison(&mut self) -> Result<Expression, ParseError> {
		let depth = self.depth;
		let mut expression = self.term()?;
		while let Some(operator) = self.match_operator(&[Less, Greater, LessEqual, GreaterEqual]) {
			self.deepen()?;
			expression = Expression::binary(expression, operator, self.term()?);
		}
		self.depth = depth;
		Ok(expression)
	}

	/// Parse term expressions.
	fn term(&mut self) -> Result<Expression, ParseError> {
		let depth = self.depth;
		let mut expression = self.factor()?;
		while let Some(operator) = self.match_operator(&[Plus, Minus]) {
			self.deepen()?;
			expression = Expression::binary(expression, operator, self.factor()?);
		}
		self.depth = depth;
		Ok(expression)
	}

	/// Parse factor expressions.
	fn factor(&mut self) -> Result<Expression, ParseError> {
		let depth = self.depth;
		let mut expression = self.unary()?;
		while let Some(operator) = self.match_operator(&[Star, Slash]) {
			self.deepen()?;
			expression = Expression::binary(expression, operator, self.unary()?);
		}
		self.depth = depth;
		Ok(expression)
	}

	/// Parse unary expressions, `---5` is three nested negations.
	fn unary(&mut self) -> Result<Expression, ParseError> {
		if self.match_type(Minus) {
			let operand = self.nested(Self::unary)?;
			return Ok(Expression::unary(UnaryOperator::Negate, operand));
		}
		self.call()
	}

	/// Parse a primary followed by any number of argument lists, so the result
	/// of a call can be called again.
	fn call(&mut self) -> Result<Expression, ParseError> {
		let depth = self.depth;
		let mut expression = self.primary()?;
		while self.match_type(LeftParen) {
			self.deepen()?;
			expression = self.finish_call(expression)?;
		}
		self.depth = depth;
		Ok(expression)
	}

	fn finish_call(&mut self, callee: Expression) -> Result<Expression, ParseError> {
		let mut arguments = Vec::new();
		if !self.check(RightParen) {
			arguments.push(self.expression()?);
			while self.match_type(Comma) {
				arguments.push(self.expression()?);
			}
		}
		self.consume(RightParen, "')' after arguments")?;
		Ok(Expression::call(callee, arguments))
	}

	/// Parse primary expressions.
	fn primary(&mut self) -> Result<Expression, ParseError> {
		let token = self.peek().clone();
		let expression = match token.r#type {
			True => Expression::bool(true),
			False => Expression::bool(false),
			Number => match token.text.parse::<f64>() {
				Ok(value) => Expression::number(value),
				Err(_) => {
					let text = token.text.clone();
					return Err(ParseError::new(token, ParseErrorType::InvalidNumber(text)));
				}
			},
			String => Expression::string(token.text),
			Identifier => Expression::identifier(token.text),
			LeftParen => {
				self.advance(); // consume '('
				let expression = self.expression()?;
				self.consume(RightParen, "')' after expression")?;
				return Ok(expression);
			}
			_ => return Err(ParseError::new(token, ParseErrorType::ExpectedExpression)),
		};
		self.advance();
		Ok(expression)
	}

	/// Run `parse` one nesting level deeper, failing once the limit is passed.
	fn nested<T>(&mut self, parse: impl FnOnce(&mut Self) -> Result<T, ParseError>) -> Result<T, ParseError> {
		self.deepen()?;
		let result = parse(self);
		self.depth -= 1;
		result
	}

	/// Take one more nesting level, failing once the limit is passed. Operator
	/// and call loops take a level per node they wrap around the left operand
	/// and give them back when the loop ends.
	fn deepen(&mut self) -> Result<(), ParseError> {
		if self.depth >= MAX_NESTING_DEPTH {
			let token = self.peek().clone();
			return Err(ParseError::new(token, ParseErrorType::NestingTooDeep(MAX_NESTING_DEPTH)));
		}
		self.depth += 1;
		Ok(())
	}

	/// Consume the next token if its type is one of `types` and maps to a
	/// binary operator.
	fn match_operator(&mut self, types: &[TokenType]) -> Option<BinaryOperator> {
		let r#type = self.peek().r#type;
		if !types.contains(&r#type) {
			return None;
		}
		let operator = binary_operator(r#type)?;
		self.advance();
		Some(operator)
	}

	/// Consume the next token if it has the given type.
	fn match_type(&mut self, r#type: TokenType) -> bool {
		if self.check(r#type) {
			self.advance();
			return true;
		}
		false
	}

	/// Whether the next token has the given type. Always false at the end of
	/// input.
	fn check(&mut self, r#type: TokenType) -> bool { !self.is_at_end() && self.peek().r#type == r#type }

	/// Consume a token of the given type or fail naming what was expected.
	fn consume(&mut self, r#type: TokenType, expected: &'static str) -> Result<Token, ParseError> {
		if self.check(r#type) {
			return Ok(self.advance());
		}
		Err(ParseError::new(self.peek().clone(), ParseErrorType::Expected(expected)))
	}

	/// Advance to the next token. The end of input is never consumed.
	fn advance(&mut self) -> Token {
		if self.is_at_end() {
			return self.eof.clone();
		}
		self.tokens.next().unwrap_or_else(|| self.eof.clone())
	}

	/// Peek at the current token.
	fn peek(&mut self) -> &Token { self.tokens.peek().unwrap_or(&self.eof) }

	fn is_at_end(&mut self) -> bool { self.peek().r#type == Eof }
}

fn binary_operator(r#type: TokenType) -> Option<BinaryOperator> {
	Some(match r#type {
		Plus => BinaryOperator::Add,
		Minus => BinaryOperator::Subtract,
		Star => BinaryOperator::Multiply,
		Slash => BinaryOperator::Divide,
		EqualEqual => BinaryOperator::Equal,
		BangEqual => BinaryOperator::NotEqual,
		Less => BinaryOperator::Less,
		Greater => BinaryOperator::Greater,
		LessEqual => BinaryOperator::LessEqual,
		GreaterEqual => BinaryOperator::GreaterEqual,
		_ => return None,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::scanner::tokenize;

	fn program(input: &str) -> Program { parse(tokenize(input).unwrap()).unwrap() }

	fn parse_to(input: &str, equals: &str) { assert_eq!(program(input).to_string(), equals); }

	fn error(input: &str) -> ParseError { parse(tokenize(input).unwrap()).unwrap_err() }

	#[test]
	fn parse_expressions() {
		parse_to("1 + 2 * 3", "(+ 1 (* 2 3))");
		parse_to("3 + 4 * (-2 - 1)", "(+ 3 (* 4 (- (- 2) 1)))");
		parse_to("1 + 2 * 3 / 4 - 5", "(- (+ 1 (/ (* 2 3) 4)) 5)");
		parse_to("(1 + 2) * 3", "(* (+ 1 2) 3)");
		parse_to("((1))", "1");
	}

	#[test]
	fn parse_precedence_tree_shape() {
		let program = program("1 + 2 * 3");
		let Statement::Expression(Expression::Binary { operator, right, .. }) = &program.statements[0] else {
			panic!("expected a binary expression statement");
		};
		assert_eq!(*operator, BinaryOperator::Add);
		assert!(matches!(**right, Expression::Binary { operator: BinaryOperator::Multiply, .. }));
	}

	#[test]
	fn parse_comparison() {
		parse_to("1 < 2", "(< 1 2)");
		parse_to("1 <= 2", "(<= 1 2)");
		parse_to("1 > 2", "(> 1 2)");
		parse_to("1 >= 2", "(>= 1 2)");
		parse_to("1 < 2 < 3", "(< (< 1 2) 3)");
	}

	#[test]
	fn parse_equality() {
		parse_to("1 == 2", "(== 1 2)");
		parse_to("1 != 2", "(!= 1 2)");
		parse_to("1 == 2 == 3", "(== (== 1 2) 3)");
		parse_to("a < b == c > d", "(== (< a b) (> c d))");
	}

	#[test]
	fn parse_unary() {
		parse_to("-123", "(- 123)");
		parse_to("---5", "(- (- (- 5)))");
		parse_to("-(-123)", "(- (- 123))");
		parse_to("-1 + 2", "(+ (- 1) 2)");
		parse_to("-f(1)", "(- (call f 1))");
	}

	#[test]
	fn parse_literals() {
		parse_to("42", "42");
		parse_to("3.14", "3.14");
		parse_to("\"hello\"", "\"hello\"");
		parse_to("true", "true");
		parse_to("false", "false");
		parse_to("name", "name");
	}

	#[test]
	fn parse_calls() {
		parse_to("f()", "(call f)");
		parse_to("add(1, 2 + 3)", "(call add 1 (+ 2 3))");
		parse_to("foo()()()", "(call (call (call foo)))");
		parse_to("(1 + 2)(3)", "(call (+ 1 2) 3)");

		let program = program("foo()()()");
		let Statement::Expression(mut expression) = program.statements[0].clone() else {
			panic!("expected an expression statement");
		};
		let mut calls = 0;
		while let Expression::Call { callee, .. } = expression {
			calls += 1;
			expression = *callee;
		}
		assert_eq!(calls, 3);
		assert_eq!(expression, Expression::identifier("foo"));
	}

	#[test]
	fn parse_statements() {
		parse_to("let x = 1 + 2", "(let x (+ 1 2))");
		parse_to("let x = 1\nlet y = x", "(let x 1)\n(let y x)");
		parse_to("fn add(a, b) { return a + b }", "(fn add (a b) (block (return (+ a b))))");
		parse_to("fn nothing() { }", "(fn nothing () (block))");
		parse_to("fn f() { return }", "(fn f () (block (return)))");
		parse_to("return", "(return)");
		parse_to("{ let x = 1 x }", "(block (let x 1) x)");
		parse_to("if (x > 0) { return x }", "(if (> x 0) (block (return x)))");
		parse_to("if (x) { 1 } else { 2 }", "(if x (block 1) (block 2))");
		parse_to("", "");
	}

	#[test]
	fn parse_nested_declarations() {
		parse_to(
			"fn outer() { fn inner(a) { return a } let y = inner(1) if (y) { print(y) } }",
			"(fn outer () (block (fn inner (a) (block (return a))) (let y (call inner 1)) (if y (block (call print y)))))",
		);
	}

	#[test]
	fn parse_errors() {
		let error = self::error("let = 5");
		assert_eq!(error.r#type, ParseErrorType::Expected("variable name"));
		assert_eq!((error.token.line, error.token.column), (1, 5));

		let error = self::error("fn add(a, b { }");
		assert_eq!(error.r#type, ParseErrorType::Expected("')' after parameters"));

		let error = self::error("add(1, 2");
		assert_eq!(error.r#type, ParseErrorType::Expected("')' after arguments"));
		assert_eq!(error.token.r#type, Eof);

		let error = self::error("fn f() { return 1");
		assert_eq!(error.r#type, ParseErrorType::Expected("'}' after block"));

		let error = self::error("if x > 0 { }");
		assert_eq!(error.r#type, ParseErrorType::Expected("'(' after 'if'"));

		let error = self::error("1 + )");
		assert_eq!(error.r#type, ParseErrorType::ExpectedExpression);
		assert_eq!(error.token.r#type, RightParen);
		assert_eq!(error.to_string(), "Expected expression at line 1, column 5");

		assert_eq!(self::error("f(1,)").r#type, ParseErrorType::ExpectedExpression);
		assert_eq!(self::error("fn f(a,) { }").r#type, ParseErrorType::Expected("parameter name"));
		assert_eq!(self::error("}").r#type, ParseErrorType::ExpectedExpression);
	}

	#[test]
	fn parse_invalid_number() {
		let error = self::error("1.2.3");
		assert_eq!(error.r#type, ParseErrorType::InvalidNumber("1.2.3".to_string()));
	}

	#[test]
	fn parse_nesting_limit() {
		let deep = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH + 10), ")".repeat(MAX_NESTING_DEPTH + 10));
		assert_eq!(self::error(&deep).r#type, ParseErrorType::NestingTooDeep(MAX_NESTING_DEPTH));

		let negations = format!("{}1", "-".repeat(MAX_NESTING_DEPTH + 10));
		assert_eq!(self::error(&negations).r#type, ParseErrorType::NestingTooDeep(MAX_NESTING_DEPTH));

		let shallow = format!("{}1{}", "(".repeat(32), ")".repeat(32));
		parse_to(&shallow, "1");
	}

	#[test]
	fn parse_long_chains_hit_nesting_limit() {
		let sum = format!("x{}", " + x".repeat(MAX_NESTING_DEPTH + 10));
		assert_eq!(self::error(&sum).r#type, ParseErrorType::NestingTooDeep(MAX_NESTING_DEPTH));

		let product = format!("x{}", " * x".repeat(MAX_NESTING_DEPTH + 10));
		assert_eq!(self::error(&product).r#type, ParseErrorType::NestingTooDeep(MAX_NESTING_DEPTH));

		let calls = format!("f{}", "()".repeat(MAX_NESTING_DEPTH + 10));
		assert_eq!(self::error(&calls).r#type, ParseErrorType::NestingTooDeep(MAX_NESTING_DEPTH));

		let short = format!("x{}", " + x".repeat(64));
		assert!(program(&short).to_string().starts_with("(+ (+ "));
		let chained = format!("f{}", "()".repeat(64));
		assert!(program(&chained).to_string().starts_with("(call (call "));
	}

	#[test]
	fn parse_separate_chains_do_not_accumulate() {
		let line = format!("let a = x{}\n", " + x".repeat(64));
		let program = program(&line.repeat(4));
		assert_eq!(program.statements.len(), 4);
	}

	#[test]
	fn parse_without_eof_token() {
		let mut tokens = tokenize("1 + 2").unwrap();
		tokens.pop();
		assert_eq!(parse(tokens).unwrap().to_string(), "(+ 1 2)");
		assert_eq!(parse(Vec::new()).unwrap(), Program::default());
	}
}

use std::path::PathBuf;

use foolang::{
	Compiler, FooError, OptimizerConfig,
	ast::{Expression, Statement},
	compile_source,
	error::{LexErrorType, ParseErrorType},
	generate, optimize, parse,
	parser::MAX_NESTING_DEPTH,
	scanner::TokenType,
	tokenize,
};

fn fixture(name: &str) -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name) }

#[test]
fn compile_sample_file() {
	let js = Compiler::default().compile_file(fixture("sample.foo")).unwrap();
	let expected = [
		"function add(a, b) {",
		"  return (a + b);",
		"}",
		"let debug = false;",
		"let base = 42;",
		"let greeting = \"Hello, world\";",
		"if (debug) {",
		"  console.log(\"debugging\");",
		"} else {",
		"  console.log(greeting);",
		"}",
		"let total = add(base, 1);",
		"console.log(\"total: \", total);",
	]
	.join("\n");
	assert_eq!(js, expected);
}

#[test]
fn compile_sample_file_unoptimized() {
	let js = Compiler::new(OptimizerConfig::disabled()).compile_file(fixture("sample.foo")).unwrap();
	assert!(js.contains("function unused_helper(x) {\n  return (x * 2);\n}"));
	assert!(js.contains("let base = ((10 * 4) + 2);"));
	assert!(js.contains("let greeting = (\"Hello, \" + \"world\");"));
	assert!(js.contains("let total = add(base, (-(-1)));"));
}

#[test]
fn unused_binding_is_dropped_end_to_end() {
	let js = compile_source("let unused = 100\nlet result = 1 + 2\nprint(result)", true).unwrap();
	assert!(!js.contains("unused"));
	assert!(js.contains("let result = 3;"));
	assert!(js.contains("console.log(result)"));
}

#[test]
fn stages_compose_through_the_public_api() {
	let tokens = tokenize("let x = 2 * 21\nprint(x)").unwrap();
	assert_eq!(tokens.last().map(|token| token.r#type), Some(TokenType::Eof));

	let program = parse(tokens).unwrap();
	let optimized = optimize(&program, OptimizerConfig::default());
	assert!(matches!(&optimized.statements[0], Statement::Let { value: Expression::Literal(_), .. }));
	assert_eq!(generate(&optimized), "let x = 42;\nconsole.log(x);");
	assert_eq!(generate(&program), "let x = (2 * 21);\nconsole.log(x);");
}

#[test]
fn malformed_number_scans_as_one_token() {
	let tokens = tokenize("1.2.3").unwrap();
	assert_eq!(tokens.len(), 2);
	assert_eq!(tokens[0].r#type, TokenType::Number);
	assert_eq!(tokens[0].text, "1.2.3");
	assert!(matches!(compile_source("1.2.3", true), Err(FooError::Parse(_))));
}

#[test]
fn leading_dot_fails_to_scan() {
	let error = tokenize(".5").unwrap_err();
	assert_eq!(error.r#type, LexErrorType::UnexpectedCharacter('.'));
	assert!(matches!(compile_source(".5", true), Err(FooError::Lex(_))));
}

/// Read back a JavaScript string literal that only uses the `\\`, `\"` and
/// `\n` escapes.
fn unescape(literal: &str) -> String {
	let inner = literal.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')).unwrap();
	let mut value = String::new();
	let mut chars = inner.chars();
	while let Some(c) = chars.next() {
		if c != '\\' {
			assert_ne!(c, '"', "unescaped quote in {literal}");
			value.push(c);
			continue;
		}
		match chars.next() {
			Some('\\') => value.push('\\'),
			Some('"') => value.push('"'),
			Some('n') => value.push('\n'),
			other => panic!("unexpected escape {other:?} in {literal}"),
		}
	}
	value
}

#[test]
fn escaped_string_output() {
	let source = "back\\slash \"quoted\"\nline";
	let program = foolang::ast::Program::new(vec![Statement::Expression(Expression::string(source))]);
	let js = generate(&program);
	assert_eq!(js, r#""back\\slash \"quoted\"\nline";"#);
	assert!(js.contains(r"\\") && js.contains(r#"\""#) && js.contains(r"\n"));
	assert_eq!(js.lines().count(), 1);

	let literal = js.strip_suffix(';').unwrap();
	assert_eq!(unescape(literal), source);

	for value in ["", "\\", "\"", "\n", "\\n", "\\\"\n", "say \"hi\"\\"] {
		let js = generate(&foolang::ast::Program::new(vec![Statement::Expression(Expression::string(value))]));
		assert_eq!(unescape(js.strip_suffix(';').unwrap()), value);
	}
}

#[test]
fn long_chains_fail_instead_of_overflowing() {
	for source in [format!("x{}", " + x".repeat(100_000)), format!("f{}", "()".repeat(100_000))] {
		let error = compile_source(&source, true).unwrap_err();
		assert!(matches!(&error, FooError::Parse(e) if e.r#type == ParseErrorType::NestingTooDeep(MAX_NESTING_DEPTH)));
	}

	let within = format!("let total = 1{}\nprint(total)", " + 1".repeat(64));
	assert_eq!(compile_source(&within, true).unwrap(), "let total = 65;\nconsole.log(total);");
}

#[test]
fn optimized_output_is_stable() {
	let source = "fn square(n) { return n * n }\nlet side = 3 + 1\nif (side > 2 * 1) { print(square(side)) }";
	let once = parse(tokenize(source).unwrap()).unwrap();
	let optimized = optimize(&once, OptimizerConfig::default());
	assert_eq!(optimize(&optimized, OptimizerConfig::default()), optimized);
}

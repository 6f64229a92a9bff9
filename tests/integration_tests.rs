//! Integration tests for the full analysis pipeline.
//!
//! These drive the public entry points the way an embedding application
//! would: scan source text, inspect the unified result, and check the
//! rendered diagnostics.

use golite::errors::errors::{LexErrorKind, ParseError};
use golite::lexer::lexer::tokenize;
use golite::lexer::tokens::{Token, TokenKind, TokenValue};
use golite::parser::SyntaxAnalyzer;
use golite::pipeline::Pipeline;

/// Minimal stand-in for the external syntax analyzer: records how many
/// tokens it saw and flags nothing.
struct AcceptingAnalyzer;

impl SyntaxAnalyzer for AcceptingAnalyzer {
    type Ast = usize;

    fn parse(&mut self, tokens: &[Token]) -> (usize, Vec<ParseError>) {
        (tokens.len(), vec![])
    }
}

#[test]
fn test_process_simple_assignment() {
    let mut pipeline = Pipeline::new(AcceptingAnalyzer);
    let result = pipeline.process("x := 5;");

    assert!(result.lex_errors.is_empty());
    assert!(result.parse_errors.is_empty());
    assert!(result.fault.is_none());

    let kinds: Vec<TokenKind> = result.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Ident,
            TokenKind::AssignVar,
            TokenKind::Number,
            TokenKind::Semi,
        ]
    );
    assert_eq!(result.tokens[0].value, TokenValue::Text("x".to_string()));
    assert_eq!(result.tokens[2].value, TokenValue::Int(5));
    assert_eq!(result.ast, Some(4));
}

#[test]
fn test_process_collects_all_lexical_errors_in_one_pass() {
    let source = "var a = @;\nvar b = \"open\nvar c = `raw";
    let mut pipeline = Pipeline::new(AcceptingAnalyzer);
    let result = pipeline.process(source);

    assert_eq!(result.lex_errors.len(), 3);
    assert_eq!(
        result.lex_errors[0].kind,
        LexErrorKind::IllegalCharacter { character: '@' }
    );
    assert_eq!(result.lex_errors[1].kind, LexErrorKind::UnclosedString);
    assert_eq!(
        result.lex_errors[2].kind,
        LexErrorKind::UnterminatedRawString
    );

    // Errors are ordered by source position.
    assert_eq!(result.lex_errors[0].line, 1);
    assert_eq!(result.lex_errors[1].line, 2);
    assert_eq!(result.lex_errors[2].line, 3);
}

#[test]
fn test_error_rendering_matches_presentation_contract() {
    let (_, errors) = tokenize("x = @");

    assert_eq!(errors.len(), 1);
    let rendered = errors[0].to_string();

    assert!(rendered.starts_with("Line 1, Col 5: Illegal character: '@'\n"));
    assert!(rendered.contains(">>> 1: x = @"));
    assert!(rendered.trim_end().ends_with('^'));
}

#[test]
fn test_tokenize_realistic_program() {
    let source = "\
package main

# entry point
func main() {
    x := 10;
    for x > 0 {
        print(x);
        x = x - 1; /* count
                      down */
    }
}
";
    let (tokens, errors) = tokenize(source);

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::Package);
    assert_eq!(tokens[0].line, 1);

    let closing = tokens.last().unwrap();
    assert_eq!(closing.kind, TokenKind::RBrace);
    assert_eq!(closing.line, 11);

    // The block comment spanning two lines left no token behind.
    assert!(!tokens
        .iter()
        .any(|t| t.text().contains("count") || t.text().contains("down")));
}

#[test]
fn test_scan_recovers_and_keeps_later_tokens() {
    let (tokens, errors) = tokenize("a $ b % c");

    assert_eq!(errors.len(), 2);
    let idents: Vec<String> = tokens.iter().map(|t| t.text()).collect();
    assert_eq!(idents, vec!["a", "b", "c"]);
}

#[test]
fn test_separate_pipelines_do_not_interfere() {
    // One pipeline per caller; results depend only on the input.
    let mut first = Pipeline::new(AcceptingAnalyzer);
    let mut second = Pipeline::new(AcceptingAnalyzer);

    let bad = first.process("@@@");
    let good = second.process("x := 1;");

    assert_eq!(bad.lex_errors.len(), 3);
    assert!(good.lex_errors.is_empty());
    assert_eq!(good.tokens.len(), 4);
}

//! Pipeline facade orchestrating one analysis pass.
//!
//! Runs the lexer to completion, drains its errors, then hands the token
//! stream to the external syntax analyzer and drains that stage's errors
//! separately. A panic inside either phase is caught here and reported as
//! a pipeline fault instead of propagating to the caller.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::errors::errors::{LexError, ParseError, PipelineFault};
use crate::lexer::lexer::Lexer;
use crate::lexer::tokens::Token;
use crate::parser::SyntaxAnalyzer;

/// The unified result of one `process` call.
///
/// Always well-formed: when a phase faulted, the fields that phase could
/// not produce are empty and `fault` names the failure.
#[derive(Debug)]
pub struct Analysis<A> {
    pub tokens: Vec<Token>,
    pub ast: Option<A>,
    pub lex_errors: Vec<LexError>,
    pub parse_errors: Vec<ParseError>,
    pub fault: Option<PipelineFault>,
}

pub struct Pipeline<P> {
    lexer: Lexer,
    analyzer: P,
}

impl<P: SyntaxAnalyzer> Pipeline<P> {
    pub fn new(analyzer: P) -> Pipeline<P> {
        Pipeline {
            lexer: Lexer::new(),
            analyzer,
        }
    }

    /// Runs both analysis phases over `source`.
    ///
    /// The phases run independently: the syntax analyzer receives the token
    /// stream even when the scan produced errors. Each call owns the lexer
    /// state exclusively and is idempotent given the same input.
    pub fn process(&mut self, source: &str) -> Analysis<P::Ast> {
        let scanned = catch_unwind(AssertUnwindSafe(|| self.lexer.scan(source)));
        let tokens = match scanned {
            Ok(tokens) => tokens,
            Err(payload) => {
                return Analysis {
                    tokens: vec![],
                    ast: None,
                    lex_errors: self.lexer.drain_errors(),
                    parse_errors: vec![],
                    fault: Some(PipelineFault::LexPhase {
                        detail: panic_detail(payload),
                    }),
                };
            }
        };
        let lex_errors = self.lexer.drain_errors();

        let parsed = catch_unwind(AssertUnwindSafe(|| self.analyzer.parse(&tokens)));
        match parsed {
            Ok((ast, parse_errors)) => Analysis {
                tokens,
                ast: Some(ast),
                lex_errors,
                parse_errors,
                fault: None,
            },
            Err(payload) => Analysis {
                tokens,
                ast: None,
                lex_errors,
                parse_errors: vec![],
                fault: Some(PipelineFault::ParsePhase {
                    detail: panic_detail(payload),
                }),
            },
        }
    }
}

fn panic_detail(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::from("unknown panic payload")
    }
}

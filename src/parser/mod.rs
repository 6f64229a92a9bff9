//! Contract boundary with the syntax analyzer.
//!
//! The syntax analyzer itself is an external collaborator; this module
//! only declares the interface it must satisfy. Its declared input is the
//! lexer's token sequence (not the raw source text).

use crate::errors::errors::ParseError;
use crate::lexer::tokens::Token;

/// The external syntax analysis stage.
///
/// Implementations consume the scanned token stream and return an AST
/// together with the syntax errors found. The token stream may be
/// structurally irregular when the scan itself had errors; implementations
/// must tolerate any finite stream and report malformed input through the
/// error list rather than panicking. A panic is treated as a contract
/// breach and converted to a pipeline fault at the facade boundary.
pub trait SyntaxAnalyzer {
    type Ast;

    fn parse(&mut self, tokens: &[Token]) -> (Self::Ast, Vec<ParseError>);
}

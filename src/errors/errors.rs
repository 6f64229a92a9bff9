use std::fmt::Display;

use thiserror::Error;

use crate::{calculate_column, position_context, CONTEXT_RADIUS};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("Illegal character: {character:?}")]
    IllegalCharacter { character: char },
    #[error("Illegal character in string: {character:?}")]
    IllegalCharacterInString { character: char },
    #[error("Unclosed string literal")]
    UnclosedString,
    #[error("EOF reached before closing multiline comment")]
    UnterminatedComment,
    #[error("EOF in raw string")]
    UnterminatedRawString,
    #[error("error parsing number: {token:?}")]
    NumberParse { token: String },
}

/// An error found during lexical analysis.
///
/// Carries the 1-based line and column where the problem was seen, plus a
/// pre-rendered context snippet when the source text was available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub line: u32,
    pub col: u32,
    pub kind: LexErrorKind,
    pub context: Option<String>,
}

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}, Col {}: {}", self.line, self.col, self.kind)?;
        if let Some(context) = &self.context {
            write!(f, "\n{}", context)?;
        }
        Ok(())
    }
}

/// An error reported by the external syntax analyzer.
///
/// Same shape as `LexError` with an optional offending value, rendered as
/// `" at {value:?}"` before the context block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: u32,
    pub col: u32,
    pub message: String,
    pub value: Option<String>,
    pub context: Option<String>,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}, Col {}: {}", self.line, self.col, self.message)?;
        if let Some(value) = &self.value {
            write!(f, " at {:?}", value)?;
        }
        if let Some(context) = &self.context {
            write!(f, "\n{}", context)?;
        }
        Ok(())
    }
}

/// An unexpected failure inside an analysis phase.
///
/// Not a diagnostic: these represent a panic caught at the facade boundary
/// rather than a reported malformed-input condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PipelineFault {
    #[error("lexical analysis failed unexpectedly: {detail}")]
    LexPhase { detail: String },
    #[error("syntax analysis failed unexpectedly: {detail}")]
    ParsePhase { detail: String },
}

/// Ordered, append-only log of lexical errors.
///
/// Recording order matches the order problems were encountered in the
/// source. The pipeline drains the log between phases so each phase's
/// errors stay attributable.
#[derive(Debug, Clone, Default)]
pub struct ErrorLog {
    errors: Vec<LexError>,
}

impl ErrorLog {
    pub fn new() -> Self {
        ErrorLog { errors: vec![] }
    }

    /// Appends an error, deriving its column and context snippet from the
    /// source text and absolute byte offset.
    pub fn record(&mut self, text: &str, line: u32, offset: usize, kind: LexErrorKind) {
        let col = calculate_column(text, offset);
        let context = position_context(text, offset, CONTEXT_RADIUS);
        self.errors.push(LexError {
            line,
            col,
            kind,
            context: Some(context),
        });
    }

    /// Returns the collected errors and clears the log.
    pub fn drain(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors)
    }

    /// Peeks at the collected errors without clearing them.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

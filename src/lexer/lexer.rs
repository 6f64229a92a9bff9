use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::errors::{ErrorLog, LexError, LexErrorKind};

use super::tokens::{Token, TokenKind, TokenValue, IGNORE, RESERVED_LOOKUP, SYMBOLS};

lazy_static! {
    static ref IDENT_RE: Regex = Regex::new(r"\A[A-Za-z_][A-Za-z0-9_]*").unwrap();
    static ref NUMBER_RE: Regex = Regex::new(r"\A(?:0|[1-9][0-9]*)").unwrap();
}

/// The exclusive scanning context. Exactly one mode is active at any point
/// of a scan; each mode has its own rule set and transition logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Initial,
    InString,
    InRawString,
    InComment,
}

/// Scan-local mutable state, created fresh for every `scan` call and
/// discarded when it returns.
struct ScanState {
    mode: Mode,
    /// Accumulated content of the in-progress string or raw string literal.
    buf: String,
    /// The quote character that opened the current string literal.
    quote: char,
    /// Block comment nesting depth. Zero only in `Initial` mode.
    depth: u32,
    /// Current 1-based line.
    line: u32,
    /// Line of the opening delimiter of the in-progress literal.
    start_line: u32,
    /// Byte offset of the opening delimiter of the in-progress literal.
    start_offset: usize,
}

impl ScanState {
    fn new() -> Self {
        ScanState {
            mode: Mode::Initial,
            buf: String::new(),
            quote: '"',
            depth: 0,
            line: 1,
            start_line: 1,
            start_offset: 0,
        }
    }
}

/// The scanning engine. Owns the error log it populates; everything else
/// lives in a per-scan `ScanState`.
pub struct Lexer {
    errors: ErrorLog,
}

impl Lexer {
    pub fn new() -> Lexer {
        Lexer {
            errors: ErrorLog::new(),
        }
    }

    /// Scans `text` into a token sequence, recording recoverable errors in
    /// the log. The log is cleared at the start of every scan.
    ///
    /// Every iteration consumes at least one input character, including the
    /// error paths, so the scan always terminates. End-of-input while a
    /// string, raw string, or comment is still open is itself an error.
    pub fn scan(&mut self, text: &str) -> Vec<Token> {
        self.errors.clear();

        let mut state = ScanState::new();
        let mut tokens = vec![];
        let mut pos = 0;

        while pos < text.len() {
            pos = match state.mode {
                Mode::Initial => self.step_initial(text, pos, &mut state, &mut tokens),
                Mode::InString => self.step_string(text, pos, &mut state, &mut tokens),
                Mode::InRawString => self.step_raw_string(text, pos, &mut state, &mut tokens),
                Mode::InComment => self.step_comment(text, pos, &mut state),
            };
        }

        match state.mode {
            Mode::Initial => {}
            Mode::InString => {
                self.errors
                    .record(text, state.line, text.len(), LexErrorKind::UnclosedString);
            }
            Mode::InRawString => {
                self.errors.record(
                    text,
                    state.line,
                    text.len(),
                    LexErrorKind::UnterminatedRawString,
                );
            }
            Mode::InComment => {
                self.errors.record(
                    text,
                    state.line,
                    text.len(),
                    LexErrorKind::UnterminatedComment,
                );
            }
        }

        tokens
    }

    pub fn errors(&self) -> &[LexError] {
        self.errors.errors()
    }

    pub fn drain_errors(&mut self) -> Vec<LexError> {
        self.errors.drain()
    }

    fn step_initial(
        &mut self,
        text: &str,
        pos: usize,
        state: &mut ScanState,
        tokens: &mut Vec<Token>,
    ) -> usize {
        let rest = &text[pos..];
        let ch = rest.chars().next().unwrap();

        if IGNORE.contains(&ch) {
            return pos + 1;
        }

        if ch == '\n' {
            state.line += 1;
            return pos + 1;
        }

        if rest.starts_with("/*") {
            state.mode = Mode::InComment;
            state.depth = 1;
            return pos + 2;
        }

        // Line comments run to the end of the line; the newline itself is
        // left for the next step so the line counter advances there.
        if ch == '#' || rest.starts_with("//") {
            return match rest.find('\n') {
                Some(i) => pos + i,
                None => text.len(),
            };
        }

        if ch == '"' || ch == '\'' {
            state.mode = Mode::InString;
            state.buf.clear();
            state.quote = ch;
            state.start_line = state.line;
            state.start_offset = pos;
            return pos + 1;
        }

        if ch == '`' {
            state.mode = Mode::InRawString;
            state.buf.clear();
            state.start_line = state.line;
            state.start_offset = pos;
            return pos + 1;
        }

        if let Some(m) = IDENT_RE.find(rest) {
            let lexeme = m.as_str();
            let kind = RESERVED_LOOKUP
                .get(lexeme)
                .copied()
                .unwrap_or(TokenKind::Ident);
            tokens.push(Token::new(
                kind,
                TokenValue::Text(lexeme.to_string()),
                state.line,
                pos,
            ));
            return pos + m.end();
        }

        if let Some(m) = NUMBER_RE.find(rest) {
            let lexeme = m.as_str();
            match lexeme.parse::<i64>() {
                Ok(number) => {
                    tokens.push(Token::new(
                        TokenKind::Number,
                        TokenValue::Int(number),
                        state.line,
                        pos,
                    ));
                }
                Err(_) => {
                    self.errors.record(
                        text,
                        state.line,
                        pos,
                        LexErrorKind::NumberParse {
                            token: lexeme.to_string(),
                        },
                    );
                }
            }
            return pos + m.end();
        }

        for (lexeme, kind) in SYMBOLS {
            if rest.starts_with(lexeme) {
                tokens.push(Token::new(
                    *kind,
                    TokenValue::Text(lexeme.to_string()),
                    state.line,
                    pos,
                ));
                return pos + lexeme.len();
            }
        }

        self.errors.record(
            text,
            state.line,
            pos,
            LexErrorKind::IllegalCharacter { character: ch },
        );
        pos + ch.len_utf8()
    }

    fn step_string(
        &mut self,
        text: &str,
        pos: usize,
        state: &mut ScanState,
        tokens: &mut Vec<Token>,
    ) -> usize {
        let rest = &text[pos..];
        let ch = rest.chars().next().unwrap();

        if ch == '\\' {
            // Only quote escapes are recognized; the quote is appended
            // without closing the literal.
            match rest.chars().nth(1) {
                Some(next) if next == '"' || next == '\'' => {
                    state.buf.push(next);
                    return pos + 2;
                }
                _ => {
                    self.errors.record(
                        text,
                        state.line,
                        pos,
                        LexErrorKind::IllegalCharacterInString { character: '\\' },
                    );
                    return pos + 1;
                }
            }
        }

        if ch == '"' || ch == '\'' {
            if ch == state.quote {
                tokens.push(Token::new(
                    TokenKind::Str,
                    TokenValue::Text(std::mem::take(&mut state.buf)),
                    state.start_line,
                    state.start_offset,
                ));
                state.mode = Mode::Initial;
            } else {
                // A quote of the other flavor is ordinary content.
                state.buf.push(ch);
            }
            return pos + 1;
        }

        if ch == '\n' {
            self.errors
                .record(text, state.line, pos, LexErrorKind::UnclosedString);
            state.buf.clear();
            state.line += 1;
            state.mode = Mode::Initial;
            return pos + 1;
        }

        let end = rest.find(&['"', '\'', '\\', '\n'][..]).unwrap_or(rest.len());
        state.buf.push_str(&rest[..end]);
        pos + end
    }

    fn step_raw_string(
        &mut self,
        text: &str,
        pos: usize,
        state: &mut ScanState,
        tokens: &mut Vec<Token>,
    ) -> usize {
        let rest = &text[pos..];

        if rest.starts_with('`') {
            tokens.push(Token::new(
                TokenKind::RawStr,
                TokenValue::Text(std::mem::take(&mut state.buf)),
                state.start_line,
                state.start_offset,
            ));
            state.mode = Mode::Initial;
            return pos + 1;
        }

        // Everything up to the closing backtick is taken verbatim, with no
        // escape processing.
        let end = rest.find('`').unwrap_or(rest.len());
        let content = &rest[..end];
        state.line += content.matches('\n').count() as u32;
        state.buf.push_str(content);
        pos + end
    }

    fn step_comment(&mut self, text: &str, pos: usize, state: &mut ScanState) -> usize {
        let rest = &text[pos..];

        if rest.starts_with("/*") {
            state.depth += 1;
            return pos + 2;
        }

        if rest.starts_with("*/") {
            state.depth -= 1;
            if state.depth == 0 {
                state.mode = Mode::Initial;
            }
            return pos + 2;
        }

        let ch = rest.chars().next().unwrap();

        if ch == '\n' {
            state.line += 1;
            return pos + 1;
        }

        // A lone marker character that is not part of an opener or closer.
        if ch == '*' || ch == '/' {
            return pos + 1;
        }

        let end = rest.find(&['*', '/', '\n'][..]).unwrap_or(rest.len());
        pos + end
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new()
    }
}

/// One-shot scan with a fresh `Lexer`, returning the tokens and the lexical
/// errors together. Safe for concurrent callers since nothing is shared.
pub fn tokenize(text: &str) -> (Vec<Token>, Vec<LexError>) {
    let mut lexer = Lexer::new();
    let tokens = lexer.scan(text);
    (tokens, lexer.drain_errors())
}

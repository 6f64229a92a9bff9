use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("package", TokenKind::Package);
        map.insert("import", TokenKind::Import);
        map.insert("func", TokenKind::Func);
        map.insert("var", TokenKind::Var);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("return", TokenKind::Return);
        map.insert("int", TokenKind::Int);
        map.insert("bool", TokenKind::Bool);
        map.insert("print", TokenKind::Print);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map
    };
}

/// Symbol lexemes in match order. Longer lexemes sharing a prefix with a
/// shorter one come first, so `:=` wins over `:` and `>=` over `>`.
pub static SYMBOLS: &[(&str, TokenKind)] = &[
    (">=", TokenKind::Gte),
    ("<=", TokenKind::Lte),
    ("==", TokenKind::Eq),
    ("!=", TokenKind::Neq),
    (":=", TokenKind::AssignVar),
    ("&&", TokenKind::And),
    ("+", TokenKind::Plus),
    ("-", TokenKind::Minus),
    ("*", TokenKind::Mult),
    ("/", TokenKind::Div),
    ("=", TokenKind::Assign),
    (";", TokenKind::Semi),
    (">", TokenKind::Gt),
    ("<", TokenKind::Lt),
    ("(", TokenKind::LParen),
    (")", TokenKind::RParen),
    ("{", TokenKind::LBrace),
    ("}", TokenKind::RBrace),
    ("[", TokenKind::LBrack),
    ("]", TokenKind::RBrack),
    ("!", TokenKind::Not),
    (":", TokenKind::Colon),
    (",", TokenKind::Comma),
    (".", TokenKind::Dot),
];

/// Characters skipped without emission in the initial scanning mode.
pub const IGNORE: &[char] = &[' ', '\t'];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Ident,
    Number,
    Str,
    RawStr,

    Plus,
    Minus,
    Mult,
    Div,

    Assign,    // =
    AssignVar, // :=

    Gt,
    Lt,
    Gte,
    Lte,
    Eq,
    Neq,

    And, // &&
    Not, // !

    LParen,
    RParen,
    LBrace,
    RBrace,
    LBrack,
    RBrack,

    Semi,
    Colon,
    Comma,
    Dot,

    // Reserved
    Package,
    Import,
    Func,
    Var,
    If,
    Else,
    For,
    Return,
    Int,
    Bool,
    Print,
    True,
    False,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The decoded payload of a token.
///
/// Numbers are converted to `i64` at emission time; everything else keeps
/// its text, already unescaped for string literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    Text(String),
    Int(i64),
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Text(text) => write!(f, "{}", text),
            TokenValue::Int(n) => write!(f, "{}", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    /// 1-based source line of the first character of the lexeme.
    pub line: u32,
    /// 0-based byte offset of the first character of the lexeme.
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: TokenValue, line: u32, offset: usize) -> Self {
        Token {
            kind,
            value,
            line,
            offset,
        }
    }

    pub fn text(&self) -> String {
        self.value.to_string()
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Ident | TokenKind::Number | TokenKind::Str | TokenKind::RawStr => {
                write!(f, "{} ({})", self.kind, self.value)
            }
            _ => write!(f, "{}", self.kind),
        }
    }
}

use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    /// Reserved identifier spellings, keyed by their ASCII-lowercased form.
    ///
    /// `and`, `or` and `not` resolve to the logical operator kinds instead
    /// of dedicated keyword kinds.
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("begin", TokenKind::Begin);
        map.insert("class", TokenKind::Class);
        map.insert("ensure", TokenKind::Ensure);
        map.insert("nil", TokenKind::Nil);
        map.insert("self", TokenKind::SelfKw);
        map.insert("when", TokenKind::When);
        map.insert("end", TokenKind::End);
        map.insert("def", TokenKind::Def);
        map.insert("false", TokenKind::False);
        map.insert("not", TokenKind::Not);
        map.insert("super", TokenKind::Super);
        map.insert("while", TokenKind::While);
        map.insert("alias", TokenKind::Alias);
        map.insert("defined", TokenKind::Defined);
        map.insert("for", TokenKind::For);
        map.insert("or", TokenKind::Or);
        map.insert("then", TokenKind::Then);
        map.insert("yield", TokenKind::Yield);
        map.insert("and", TokenKind::And);
        map.insert("do", TokenKind::Do);
        map.insert("if", TokenKind::If);
        map.insert("redo", TokenKind::Redo);
        map.insert("true", TokenKind::True);
        map.insert("__line__", TokenKind::Line);
        map.insert("else", TokenKind::Else);
        map.insert("in", TokenKind::In);
        map.insert("rescue", TokenKind::Rescue);
        map.insert("undef", TokenKind::Undef);
        map.insert("__file__", TokenKind::File);
        map.insert("break", TokenKind::Break);
        map.insert("elsif", TokenKind::Elsif);
        map.insert("module", TokenKind::Module);
        map.insert("retry", TokenKind::Retry);
        map.insert("unless", TokenKind::Unless);
        map.insert("__encoding__", TokenKind::Encoding);
        map.insert("case", TokenKind::Case);
        map.insert("next", TokenKind::Next);
        map.insert("return", TokenKind::Return);
        map.insert("until", TokenKind::Until);
        map
    };

    /// Every operator and punctuation spelling, single- and multi-character.
    pub static ref SYMBOL_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("(", TokenKind::OpenParen);
        map.insert(")", TokenKind::CloseParen);
        map.insert("[", TokenKind::OpenBracket);
        map.insert("]", TokenKind::CloseBracket);
        map.insert("{", TokenKind::OpenCurly);
        map.insert("}", TokenKind::CloseCurly);
        map.insert(".", TokenKind::Dot);
        map.insert(",", TokenKind::Comma);
        map.insert(":", TokenKind::Colon);
        map.insert(";", TokenKind::Semicolon);
        map.insert("@", TokenKind::At);

        map.insert("+", TokenKind::Add);
        map.insert("-", TokenKind::Sub);
        map.insert("*", TokenKind::Mul);
        map.insert("/", TokenKind::Div);
        map.insert("%", TokenKind::Mod);
        map.insert("**", TokenKind::Exp);

        map.insert("==", TokenKind::Eq);
        map.insert("!=", TokenKind::Ne);
        map.insert(">", TokenKind::Gt);
        map.insert("<", TokenKind::Lt);
        map.insert(">=", TokenKind::Ge);
        map.insert("<=", TokenKind::Le);

        map.insert("=", TokenKind::Assign);
        map.insert("+=", TokenKind::AddAssign);
        map.insert("-=", TokenKind::SubAssign);
        map.insert("*=", TokenKind::MulAssign);
        map.insert("/=", TokenKind::DivAssign);
        map.insert("%=", TokenKind::ModAssign);
        map.insert("**=", TokenKind::ExpAssign);

        map.insert("&&", TokenKind::And);
        map.insert("||", TokenKind::Or);
        map.insert("!", TokenKind::Not);

        map.insert("..", TokenKind::InclusiveRange);
        map.insert("...", TokenKind::ExclusiveRange);
        map
    };
}

/// Multi-character operator spellings, tried as exact prefixes in order.
///
/// The 3-character spellings come first so that `**=` never lexes as `**`
/// `=` and `...` never as `..` `.`.
pub const COMPOSITE_OP_SYMBOLS: &[&str] = &[
    "**=", "...", "**", "==", "!=", ">=", "<=", "+=", "-=", "*=", "/=", "%=", "&&", "||", "..",
];

/// Single-character symbols, tried only after every composite spelling.
pub const SINGLE_OP_SYMBOLS: &[&str] = &[
    "(", ")", "[", "]", "{", "}", ".", ",", ":", ";", "@", "+", "-", "*", "/", "%", ">", "<", "=",
    "!",
];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    NewLine,
    Whitespace,
    Comment,

    Ident,
    String,
    Int,
    Float,

    OpenParen,    // (
    CloseParen,   // )
    OpenBracket,  // [
    CloseBracket, // ]
    OpenCurly,    // {
    CloseCurly,   // }
    Dot,          // .
    Comma,        // ,
    Colon,        // :
    Semicolon,    // ;
    At,           // @

    Add, // +
    Sub, // -
    Mul, // *
    Div, // /
    Mod, // %
    Exp, // **

    Eq, // ==
    Ne, // !=
    Gt, // >
    Lt, // <
    Ge, // >=
    Le, // <=

    Assign,    // =
    AddAssign, // +=
    SubAssign, // -=
    MulAssign, // *=
    DivAssign, // /=
    ModAssign, // %=
    ExpAssign, // **=

    And, // && / and
    Or,  // || / or
    Not, // ! / not

    InclusiveRange, // ..
    ExclusiveRange, // ...

    // Reserved
    Begin,
    Class,
    Ensure,
    Nil,
    SelfKw,
    When,
    End,
    Def,
    False,
    Super,
    While,
    Alias,
    Defined,
    For,
    Then,
    Yield,
    Do,
    If,
    Redo,
    True,
    Line, // __LINE__
    Else,
    In,
    Rescue,
    Undef,
    File, // __FILE__
    Break,
    Elsif,
    Module,
    Retry,
    Unless,
    Encoding, // __ENCODING__
    Case,
    Next,
    Return,
    Until,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Kind-dependent payload carried by literal tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    Str { double_quoted: bool },
    Int(i64),
    Float(f64),
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub raw: String,
    pub position: Position,
    pub value: TokenValue,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::String | TokenKind::Ident | TokenKind::Int | TokenKind::Float
            | TokenKind::Comment => write!(f, "{} ({})", self.kind, self.raw),
            _ => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    pub fn new(kind: TokenKind, raw: String, position: Position) -> Token {
        Token {
            kind,
            raw,
            position,
            value: TokenValue::None,
        }
    }

    pub fn eof(position: Position) -> Token {
        Token::new(TokenKind::Eof, String::new(), position)
    }

    /// Builds an operator or punctuation token from its exact spelling.
    pub fn op_symbol(raw: &str, position: Position) -> Token {
        let kind = match SYMBOL_LOOKUP.get(raw) {
            Some(kind) => *kind,
            None => TokenKind::Illegal,
        };
        Token::new(kind, String::from(raw), position)
    }

    /// Builds an identifier token, promoted to a keyword kind when its
    /// lowercased spelling is reserved. The raw text keeps its original case.
    pub fn ident(raw: String, position: Position) -> Token {
        let kind = match RESERVED_LOOKUP.get(raw.to_ascii_lowercase().as_str()) {
            Some(kind) => *kind,
            None => TokenKind::Ident,
        };
        Token::new(kind, raw, position)
    }

    /// Builds a string token; `raw` is the body without the quotes.
    pub fn string(raw: String, position: Position, double_quoted: bool) -> Token {
        Token {
            kind: TokenKind::String,
            raw,
            position,
            value: TokenValue::Str { double_quoted },
        }
    }

    pub fn int(raw: String, position: Position, value: i64) -> Token {
        Token {
            kind: TokenKind::Int,
            raw,
            position,
            value: TokenValue::Int(value),
        }
    }

    pub fn float(raw: String, position: Position, value: f64) -> Token {
        Token {
            kind: TokenKind::Float,
            raw,
            position,
            value: TokenValue::Float(value),
        }
    }

    /// The exact source slice this token was lexed from. Identical to `raw`
    /// except for strings, whose quotes are restored; concatenating it over
    /// a whole token stream reproduces the input.
    pub fn source_text(&self) -> String {
        match self.value {
            TokenValue::Str { double_quoted } => {
                let quote = if double_quoted { '"' } else { '\'' };
                format!("{}{}{}", quote, self.raw, quote)
            }
            _ => self.raw.clone(),
        }
    }
}

use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A fatal lexing failure, positioned at the code point that caused it.
///
/// No partial token stream accompanies an `Error`; the caller must treat
/// the whole input as unlexable.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::NumericLiteral { .. } => "NumericLiteral",
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::NumericLiteral { raw } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                raw
            )),
            ErrorImpl::IllegalCharacter { character } => {
                ErrorTip::Suggestion(format!("Unexpected character: `{}`", character))
            }
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literal is missing its closing quote",
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("cannot parse numeric literal: {raw:?}")]
    NumericLiteral { raw: String },
    #[error("unexpected character: {character:?}")]
    IllegalCharacter { character: char },
    #[error("unterminated string literal")]
    UnterminatedString,
}

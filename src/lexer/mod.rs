//! Lexical analysis for a Ruby-like scripting language.
//!
//! This module converts source text into a stream of classified tokens for
//! a downstream parser. It handles:
//!
//! - Maximal-munch matching of overlapping operator spellings
//! - Case-insensitive reserved-word recognition
//! - Quoted strings with escaped-quote handling
//! - Integer/float boundary detection around `.`
//! - Token position tracking for error reporting
//! - Whitespace, newline and comment tokens

pub mod lexer;
pub mod tokens;

#![allow(clippy::module_inception)]

use std::fmt::Display;

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;

/// Source location of a token or error, counted in code points.
///
/// `line` is 1-based; `column` restarts at 0 after every newline; `offset`
/// counts from the start of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Position {
            line,
            column,
            offset,
        }
    }

    pub fn null() -> Self {
        Position {
            line: 1,
            column: 0,
            offset: 0,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Returns the 1-based `line` of `source`, without its trailing newline.
pub fn line_at(source: &str, line: usize) -> Option<&str> {
    source.split('\n').nth(line.checked_sub(1)?)
}

pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: IllegalCharacter (unexpected character `$`)
        -> 1:8
           |
         1 | let a = $
           | --------^
    */

    let position = error.get_position();
    let line_text = line_at(source, position.line).unwrap_or("");

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = position.column.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
    out
}

pub fn display_error(error: &Error, source: &str) {
    print!("{}", render_error(error, source));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

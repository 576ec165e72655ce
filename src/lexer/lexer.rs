use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::tokens::{Token, COMPOSITE_OP_SYMBOLS, SINGLE_OP_SYMBOLS, TokenKind};

/// Cursor state for one tokenization pass.
///
/// All counters live on the struct, so independent `tokenize` calls never
/// interfere with each other.
pub struct Lexer {
    input: Vec<char>,
    tokens: Vec<Token>,
    line: usize,
    column: usize,
    offset: usize,
}

impl Lexer {
    fn new(input: &str) -> Lexer {
        Lexer {
            input: input.chars().collect(),
            tokens: vec![],
            line: 1,
            column: 0,
            offset: 0,
        }
    }

    fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    fn at(&self) -> char {
        self.input[self.offset]
    }

    fn peek(&self, ahead: usize) -> Option<char> {
        self.input.get(self.offset + ahead).copied()
    }

    fn at_eof(&self) -> bool {
        self.offset >= self.input.len()
    }

    fn advance(&mut self, n: usize) {
        self.offset += n;
        self.column += n;
    }

    fn advance_line(&mut self) {
        self.offset += 1;
        self.line += 1;
        self.column = 0;
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn starts_with(&self, symbol: &str) -> bool {
        for (i, ch) in symbol.chars().enumerate() {
            if self.peek(i) != Some(ch) {
                return false;
            }
        }
        true
    }

    /// Maximal run of spaces and tabs.
    fn consume_white(&mut self) -> String {
        let mut s = String::new();
        while !self.at_eof() {
            let ch = self.at();
            if ch == ' ' || ch == '\t' {
                s.push(ch);
                self.advance(1);
            } else {
                break;
            }
        }
        s
    }

    /// From `#` to end of line, the terminating newline excluded.
    fn consume_comment(&mut self) -> String {
        let mut s = String::new();
        while !self.at_eof() {
            let ch = self.at();
            if ch == '\n' {
                break;
            }
            s.push(ch);
            self.advance(1);
        }
        s
    }

    /// Maximal run of letters, digits and underscores.
    fn consume_ident(&mut self) -> String {
        let mut s = String::new();
        while !self.at_eof() {
            let ch = self.at();
            if !is_ident_char(ch) {
                break;
            }
            s.push(ch);
            self.advance(1);
        }
        s
    }

    /// Body of a quoted literal, both quote characters excluded.
    ///
    /// A backslash-escaped quote of either style is copied through verbatim,
    /// so the returned body is the exact source slice between the quotes.
    fn consume_string(&mut self) -> Result<(String, bool), Error> {
        let start = self.position();
        let quote = self.at();
        let double_quoted = quote == '"';
        self.advance(1);

        let mut s = String::new();
        loop {
            if self.at_eof() {
                return Err(Error::new(ErrorImpl::UnterminatedString, start));
            }

            let ch = self.at();
            if ch == quote {
                break;
            }

            if ch == '\\' {
                if let Some(escaped @ ('\'' | '"')) = self.peek(1) {
                    s.push('\\');
                    s.push(escaped);
                    self.advance(2);
                    continue;
                }
            }

            s.push(ch);
            self.advance(1);
        }
        self.advance(1);

        Ok((s, double_quoted))
    }

    /// Maximal digit run, crossing a `.` only when a digit follows it. A
    /// trailing `.` with no digit after it is left for the symbol matcher,
    /// so `3.times` stays an integer plus a method call.
    fn consume_number(&mut self) -> (String, bool) {
        let mut s = String::new();
        let mut is_float = false;
        while !self.at_eof() {
            let ch = self.at();
            if ch.is_ascii_digit() {
                s.push(ch);
                self.advance(1);
            } else if ch == '.' {
                match self.peek(1) {
                    Some(next) if next.is_ascii_digit() => {
                        s.push(ch);
                        self.advance(1);
                        is_float = true;
                    }
                    _ => break,
                }
            } else {
                break;
            }
        }
        (s, is_float)
    }
}

fn is_ident_char(r: char) -> bool {
    r.is_ascii_alphanumeric() || r == '_'
}

/// Turns `input` into a stream of classified tokens, terminated by a single
/// `Eof` token whose offset is the code-point length of the input.
///
/// Each step classifies the code point at the cursor and hands off to one
/// consumption routine; any code point that matches no rule aborts the pass
/// with an `IllegalCharacter` error and no token stream.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(input);

    'input: while !lex.at_eof() {
        let ch = lex.at();

        // white
        if ch == ' ' || ch == '\t' {
            let pos = lex.position();
            let s = lex.consume_white();
            lex.push(Token::new(TokenKind::Whitespace, s, pos));
            continue;
        }
        // newline
        if ch == '\n' {
            let pos = lex.position();
            lex.push(Token::new(TokenKind::NewLine, String::from("\n"), pos));
            lex.advance_line();
            continue;
        }
        // comment
        if ch == '#' {
            let pos = lex.position();
            let comment = lex.consume_comment();
            lex.push(Token::new(TokenKind::Comment, comment, pos));
            continue;
        }
        // op symbols, longest spellings first
        for symbol in COMPOSITE_OP_SYMBOLS.iter().chain(SINGLE_OP_SYMBOLS) {
            if lex.starts_with(symbol) {
                let pos = lex.position();
                lex.push(Token::op_symbol(symbol, pos));
                lex.advance(symbol.chars().count());
                continue 'input;
            }
        }
        // ident
        if is_ident_char(ch) && !ch.is_ascii_digit() {
            let pos = lex.position();
            let id = lex.consume_ident();
            lex.push(Token::ident(id, pos));
            continue;
        }
        // string
        if ch == '\'' || ch == '"' {
            let pos = lex.position();
            let (s, double_quoted) = lex.consume_string()?;
            lex.push(Token::string(s, pos, double_quoted));
            continue;
        }
        // number
        if ch.is_ascii_digit() {
            let pos = lex.position();
            let (num_str, is_float) = lex.consume_number();
            if is_float {
                let n: f64 = num_str.parse().map_err(|_| {
                    Error::new(
                        ErrorImpl::NumericLiteral {
                            raw: num_str.clone(),
                        },
                        pos,
                    )
                })?;
                lex.push(Token::float(num_str, pos, n));
            } else {
                let n: i64 = num_str.parse().map_err(|_| {
                    Error::new(
                        ErrorImpl::NumericLiteral {
                            raw: num_str.clone(),
                        },
                        pos,
                    )
                })?;
                lex.push(Token::int(num_str, pos, n));
            }
            continue;
        }

        return Err(Error::new(
            ErrorImpl::IllegalCharacter { character: ch },
            lex.position(),
        ));
    }

    lex.push(Token::eof(lex.position()));
    Ok(lex.tokens)
}

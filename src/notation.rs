//! Bracket notation for range sets.
//!
//! # Format
//!
//! ```text
//! Sequence := Pair*
//! Pair     := ("(" | "[") Number "," Number (")" | "]")
//! Number   := Integer | "infinity" | "+infinity" | "-infinity"
//! ```
//!
//! Parentheses mark open bounds, square brackets closed ones. The infinity
//! tokens are case-insensitive and whitespace anywhere is ignored. The
//! canonical output has no whitespace and spells the sentinels `Infinity`
//! and `-Infinity`:
//!
//! ```text
//! (-Infinity,1](23,45)[67,89][100,Infinity)
//! ```

use std::fmt;

use log::debug;

use crate::bound::Bound;
use crate::endpoint::Endpoint;

/// Error type for parsing.
///
/// Offsets are byte offsets into the original input, whitespace included.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum ParseError {
    /// A bracket or comma where it does not belong, or text outside a pair.
    UnexpectedChar { ch: char, offset: usize },
    /// A bound that is neither an integer nor an infinity token.
    InvalidNumber { token: String, offset: usize },
    /// The input stops in the middle of a pair.
    UnexpectedEnd,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedChar { ch, offset } => {
                write!(f, "Parse error: unexpected character '{}' at offset {}", ch, offset)
            }
            ParseError::InvalidNumber { token, offset } => {
                write!(f, "Parse error: \"{}\" at offset {} is not a number", token, offset)
            }
            ParseError::UnexpectedEnd => write!(f, "Parse error: unterminated pair at end of input"),
        }
    }
}

impl std::error::Error for ParseError {}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum State {
    /// Between pairs, expecting `(` or `[`.
    Between,
    /// Reading the left bound.
    Left { closed: bool },
    /// Reading the right bound.
    Right,
}

fn parse_number(token: &str) -> Option<Bound> {
    match token.to_ascii_lowercase().as_str() {
        "infinity" | "+infinity" => Some(Bound::PosInf),
        "-infinity" => Some(Bound::NegInf),
        other => other.parse::<i64>().ok().map(Bound::Finite),
    }
}

/// Accumulates the characters of one bound, remembering where it started.
struct Token {
    text: String,
    offset: Option<usize>,
}

impl Token {
    fn new() -> Self {
        Self {
            text: String::new(),
            offset: None,
        }
    }

    fn push(&mut self, offset: usize, ch: char) {
        self.offset.get_or_insert(offset);
        self.text.push(ch);
    }

    /// Parses and resets the token. `end` is the offset of the delimiter.
    fn take(&mut self, end: usize) -> Result<Bound, ParseError> {
        let offset = self.offset.take().unwrap_or(end);
        let text = std::mem::take(&mut self.text);
        parse_number(&text).ok_or(ParseError::InvalidNumber { token: text, offset })
    }
}

/// Parses bracket notation into a flat endpoint sequence.
pub fn parse(text: &str) -> Result<Vec<Endpoint>, ParseError> {
    debug!("parse({:?})", text);

    let mut endpoints = Vec::new();
    let mut state = State::Between;
    let mut token = Token::new();

    for (offset, ch) in text.char_indices() {
        if ch.is_whitespace() {
            continue;
        }
        state = match (state, ch) {
            (State::Between, '(') => State::Left { closed: false },
            (State::Between, '[') => State::Left { closed: true },
            (State::Left { closed }, ',') => {
                endpoints.push(Endpoint::new(token.take(offset)?, closed));
                State::Right
            }
            (State::Right, ')' | ']') => {
                endpoints.push(Endpoint::new(token.take(offset)?, ch == ']'));
                State::Between
            }
            (State::Left { .. } | State::Right, c) if !matches!(c, '(' | '[' | ')' | ']' | ',') => {
                token.push(offset, c);
                state
            }
            (_, c) => return Err(ParseError::UnexpectedChar { ch: c, offset }),
        };
    }

    if state != State::Between {
        return Err(ParseError::UnexpectedEnd);
    }
    Ok(endpoints)
}

/// Renders an endpoint sequence in canonical bracket notation.
///
/// A dangling start (odd-length sequence) is rendered as `[a,`.
pub fn stringify(endpoints: &[Endpoint]) -> String {
    let mut s = String::new();
    write_endpoints(&mut s, endpoints).expect("writing to a String cannot fail");
    s
}

pub(crate) fn write_endpoints<W: fmt::Write>(w: &mut W, endpoints: &[Endpoint]) -> fmt::Result {
    for (i, e) in endpoints.iter().enumerate() {
        if i % 2 == 0 {
            w.write_char(if e.closed { '[' } else { '(' })?;
            write!(w, "{},", e.value)?;
        } else {
            write!(w, "{}", e.value)?;
            w.write_char(if e.closed { ']' } else { ')' })?;
        }
    }
    Ok(())
}

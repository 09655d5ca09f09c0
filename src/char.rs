//! `char`-level convenience parsers and predicates.
//!
//! This module is intended for inputs where `I::Item = char` (e.g. `&str`).
//!
//! The building blocks are:
//!
//! - predicates like [`SPACE`], [`ASCII_ALPHA`], ... (usable anywhere an
//!   [`crate::parser::item::set::ItemSet`] is expected)
//! - single-character parsers like [`space`], [`ascii_digit`], ...
//! - run parsers [`ws`] / [`ws1`] / [`digits`]
//!
//! The single-character parsers are built on [`first_where`], so a mismatch leaves the
//! character in the input.

use crate::{
    input::Input,
    parser::{
        item::{first_where, FirstWhere},
        prefix::{prefix_while, PrefixWhile},
    },
};

/// A plain predicate over `char`.
pub type CharPredicate = fn(&char) -> bool;

/// `char::is_whitespace`.
pub const SPACE: CharPredicate = |c| c.is_whitespace();
/// `char::is_ascii`.
pub const ASCII: CharPredicate = char::is_ascii;
/// `char::is_ascii_alphabetic`.
pub const ASCII_ALPHA: CharPredicate = char::is_ascii_alphabetic;
/// `char::is_ascii_digit`.
pub const ASCII_DIGIT: CharPredicate = char::is_ascii_digit;
/// `char::is_ascii_alphanumeric`.
pub const ASCII_ALPHANUM: CharPredicate = char::is_ascii_alphanumeric;
/// `char::is_ascii_hexdigit`.
pub const ASCII_HEXDIGIT: CharPredicate = char::is_ascii_hexdigit;

/// Parse one whitespace character.
///
/// ## Examples
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = " \t";
/// assert_eq!(space().parse(&mut input), Ok(' '));
/// assert_eq!(input, "\t");
/// ```
pub fn space<I: Input<Item = char>>() -> FirstWhere<I, CharPredicate> {
    first_where(SPACE).label("whitespace")
}

/// Parse one ASCII character.
pub fn ascii<I: Input<Item = char>>() -> FirstWhere<I, CharPredicate> {
    first_where(ASCII).label("ASCII character")
}

/// Parse one ASCII alphabetic character.
///
/// ## Examples
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = "Z9";
/// assert_eq!(ascii_alpha().parse(&mut input), Ok('Z'));
/// assert_eq!(input, "9");
/// ```
pub fn ascii_alpha<I: Input<Item = char>>() -> FirstWhere<I, CharPredicate> {
    first_where(ASCII_ALPHA).label("ASCII letter")
}

/// Parse one ASCII digit.
///
/// ## Examples
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = "7a";
/// assert_eq!(ascii_digit().parse(&mut input), Ok('7'));
///
/// let err = ascii_digit().parse(&mut input).unwrap_err();
/// assert_eq!(err.to_string(), "expected ASCII digit, found 'a' at position 0");
/// ```
pub fn ascii_digit<I: Input<Item = char>>() -> FirstWhere<I, CharPredicate> {
    first_where(ASCII_DIGIT).label("ASCII digit")
}

/// Parse one ASCII alphanumeric character.
pub fn ascii_alphanumeric<I: Input<Item = char>>() -> FirstWhere<I, CharPredicate> {
    first_where(ASCII_ALPHANUM).label("ASCII letter or digit")
}

/// Parse one ASCII hexadecimal digit.
pub fn ascii_hexdigit<I: Input<Item = char>>() -> FirstWhere<I, CharPredicate> {
    first_where(ASCII_HEXDIGIT).label("hexadecimal digit")
}

/// Consume zero or more whitespace characters.
///
/// ## Examples
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = " \t\na";
/// assert_eq!(ws().parse(&mut input), Ok(" \t\n"));
/// assert_eq!(input, "a");
/// ```
pub fn ws<I: Input<Item = char>>() -> PrefixWhile<I, CharPredicate> {
    prefix_while(SPACE)
}

/// Consume one or more whitespace characters.
pub fn ws1<I: Input<Item = char>>() -> PrefixWhile<I, CharPredicate> {
    prefix_while(SPACE).min(1)
}

/// Consume one or more ASCII digits.
///
/// ```
/// use recto::prelude::*;
///
/// let number = digits().try_map(|s: &str| s.parse::<u32>());
///
/// let mut input = "1024 bytes";
/// assert_eq!(number.parse(&mut input), Ok(1024));
/// assert_eq!(input, " bytes");
/// ```
pub fn digits<I: Input<Item = char>>() -> PrefixWhile<I, CharPredicate> {
    prefix_while(ASCII_DIGIT).min(1)
}

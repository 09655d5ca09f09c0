//! Literal parsers (exact sequence matching).
//!
//! [`literal`] matches a fixed sequence of input items. The argument can be:
//!
//! - a string (`&str`) or a single `char` for `char` inputs, or
//! - a slice/array of expected items (`&[T]` / `&[T; N]`).

use std::{fmt, marker::PhantomData};

use crate::{
    error::{Failure, Never},
    input::{Input, Printable},
    parser::{Parser, Printer},
};

/// An exact sequence of expected items.
///
/// The iterator is double-ended so that printers can prepend the sequence back to front.
pub trait ItemSeq<Item>: fmt::Debug {
    type Iter: DoubleEndedIterator<Item = Item>;

    fn items(&self) -> Self::Iter;
}

impl<'a> ItemSeq<char> for &'a str {
    type Iter = std::str::Chars<'a>;

    fn items(&self) -> Self::Iter {
        let s: &'a str = self;
        s.chars()
    }
}

impl ItemSeq<char> for char {
    type Iter = std::iter::Once<char>;

    fn items(&self) -> Self::Iter {
        std::iter::once(*self)
    }
}

impl<'a, T> ItemSeq<T> for &'a [T]
where
    T: Clone + fmt::Debug,
{
    type Iter = std::iter::Cloned<std::slice::Iter<'a, T>>;

    fn items(&self) -> Self::Iter {
        let s: &'a [T] = self;
        s.iter().cloned()
    }
}

impl<'a, T, const N: usize> ItemSeq<T> for &'a [T; N]
where
    T: Clone + fmt::Debug,
{
    type Iter = std::iter::Cloned<std::slice::Iter<'a, T>>;

    fn items(&self) -> Self::Iter {
        let s: &'a [T; N] = self;
        s.iter().cloned()
    }
}

/// Match an exact sequence.
///
/// - On success: consumes the whole sequence and returns `()`.
/// - Input exhausted before the sequence is: [`Failure::EndOfInput`].
/// - First differing item: [`Failure::Mismatch`] with its index inside the literal.
///
/// The mismatching item is left in the input, but the items matched before it are not given back.
/// Wrap the parser in a backtracking combinator if that matters.
///
/// ## Examples
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = "hello!";
/// assert_eq!(literal("hello").parse(&mut input), Ok(()));
/// assert_eq!(input, "!");
///
/// let mut input = "help";
/// let err = literal("hello").parse(&mut input).unwrap_err();
/// assert_eq!(err, Failure::mismatch("\"hello\"", 'p', 3));
/// assert_eq!(input, "p");
/// ```
pub fn literal<I, S>(expected: S) -> Literal<I, S>
where
    I: Input,
    S: ItemSeq<I::Item>,
{
    Literal { expected, _input: PhantomData }
}

/// Parser that matches a fixed sequence of items.
#[derive(Clone, Copy, Debug)]
pub struct Literal<I, S> {
    expected: S,
    _input: PhantomData<fn() -> I>,
}

impl<I, S> Literal<I, S> {
    /// The sequence this parser matches.
    pub fn expected(&self) -> &S {
        &self.expected
    }
}

impl<I, S> Parser for Literal<I, S>
where
    I: Input,
    I::Item: PartialEq,
    S: ItemSeq<I::Item>,
{
    type Input = I;
    type Output = ();
    type Error = Failure<I::Item>;

    fn parse(&self, input: &mut I) -> Result<(), Self::Error> {
        for (position, expected) in self.expected.items().enumerate() {
            match input.peek() {
                None => return Err(Failure::end_of_input(format!("{:?}", self.expected))),
                Some(found) if found == expected => {
                    input.next();
                }
                Some(found) => return Err(Failure::mismatch(format!("{:?}", self.expected), found, position)),
            }
        }
        Ok(())
    }
}

impl<I, S> Printer for Literal<I, S>
where
    I: Printable,
    I::Item: PartialEq,
    S: ItemSeq<I::Item>,
{
    type PrintError = Never;

    fn print(&self, (): (), buffer: &mut I::Buffer) -> Result<(), Never> {
        for item in self.expected.items().rev() {
            I::prepend_item(buffer, item);
        }
        Ok(())
    }
}

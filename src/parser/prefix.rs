//! Prefix parsers.
//!
//! These return a slice of the input rather than individual items:
//!
//! - [`prefix_while`]: the longest run of items in a set.
//! - [`prefix_up_to`]: everything before a delimiter.
//! - [`prefix_through`]: everything up to and including a delimiter.

use std::{fmt, marker::PhantomData};

use crate::{
    error::{Constraint, Failure, Validation},
    input::{Input, Printable},
    parser::{item::set::ItemSet, token::ItemSeq, Parser, Printer},
};

/// Consume the longest prefix whose items all belong to `set`.
///
/// Bounds are set with [`PrefixWhile::min`] and [`PrefixWhile::max`]. Scanning stops at `max`
/// items; fewer than `min` fails with [`Constraint`]. There is no internal backtracking.
///
/// ## Examples
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = "123abc";
/// let digits = prefix_while(|c: &char| c.is_ascii_digit());
/// assert_eq!(digits.parse(&mut input), Ok("123"));
/// assert_eq!(input, "abc");
///
/// let err = digits.min(1).parse(&mut input).unwrap_err();
/// assert_eq!(err, Constraint::at_least(1, 0));
/// ```
pub fn prefix_while<I, S>(set: S) -> PrefixWhile<I, S>
where
    I: Input,
    S: ItemSet<I::Item>,
{
    PrefixWhile { set, min: 0, max: usize::MAX, _input: PhantomData }
}

/// Parser returned by [`prefix_while`].
pub struct PrefixWhile<I, S> {
    set: S,
    min: usize,
    max: usize,
    _input: PhantomData<fn() -> I>,
}

impl<I, S: Clone> Clone for PrefixWhile<I, S> {
    fn clone(&self) -> Self {
        PrefixWhile { set: self.set.clone(), min: self.min, max: self.max, _input: PhantomData }
    }
}

impl<I, S: Copy> Copy for PrefixWhile<I, S> {}

impl<I, S> fmt::Debug for PrefixWhile<I, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixWhile").field("min", &self.min).field("max", &self.max).finish_non_exhaustive()
    }
}

impl<I, S> PrefixWhile<I, S> {
    /// Require at least `min` items.
    pub fn min(self, min: usize) -> Self {
        PrefixWhile { min, ..self }
    }
    /// Stop after `max` items.
    pub fn max(self, max: usize) -> Self {
        PrefixWhile { max, ..self }
    }
}

impl<I, S> Parser for PrefixWhile<I, S>
where
    I: Input,
    S: ItemSet<I::Item>,
{
    type Input = I;
    type Output = I::Slice;
    type Error = Constraint;

    fn parse(&self, input: &mut I) -> Result<I::Slice, Constraint> {
        let start = input.checkpoint();
        let mut count = 0;
        while count < self.max {
            match input.peek() {
                Some(item) if self.set.has(&item) => {
                    input.next();
                    count += 1;
                }
                _ => break,
            }
        }
        if count < self.min {
            return Err(Constraint::at_least(self.min, count));
        }
        let end = input.checkpoint();
        Ok(I::slice(start, end))
    }
}

/// Prints the slice unchanged after checking every item and the length.
///
/// Whatever is printed after this must not start with an item of the set, or parsing it back
/// would consume more than was printed.
impl<I, S> Printer for PrefixWhile<I, S>
where
    I: Printable,
    I::Item: fmt::Debug,
    I::Slice: Input<Item = I::Item> + Clone,
    S: ItemSet<I::Item>,
{
    type PrintError = Failure<I::Item>;

    fn print(&self, slice: I::Slice, buffer: &mut I::Buffer) -> Result<(), Self::PrintError> {
        let mut cursor = slice.clone();
        let mut count = 0;
        while let Some(item) = cursor.next() {
            if !self.set.has(&item) {
                return Err(Validation::new(&item, "outside the accepted set").into());
            }
            count += 1;
        }
        if count < self.min {
            return Err(Constraint::at_least(self.min, count).into());
        }
        if count > self.max {
            return Err(Constraint::at_most(self.max, count).into());
        }
        I::prepend_slice(buffer, slice);
        Ok(())
    }
}

/// What [`prefix_up_to`] and [`prefix_through`] do when the delimiter never occurs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Missing {
    /// Fail with [`Failure::EndOfInput`], leaving the input untouched.
    #[default]
    Fail,
    /// Succeed with the rest of the input.
    ConsumeRest,
}

/// Move `input` to the first occurrence of `delimiter`, without consuming it.
///
/// Returns `false`, with the input exhausted, when there is none. This is a naive O(n·m) scan.
fn scan<I, S>(input: &mut I, delimiter: &S) -> bool
where
    I: Input,
    I::Item: PartialEq,
    S: ItemSeq<I::Item>,
{
    loop {
        let here = input.checkpoint();
        let matched = delimiter.items().all(|expected| input.next().is_some_and(|found| found == expected));
        input.rollback(here);
        if matched {
            return true;
        }
        if input.next().is_none() {
            return false;
        }
    }
}

/// Consume everything before the first occurrence of `delimiter`.
///
/// The delimiter itself stays in the input.
///
/// ## Examples
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = "key=value";
/// assert_eq!(prefix_up_to("=").parse(&mut input), Ok("key"));
/// assert_eq!(input, "=value");
///
/// let mut input = "no delimiter";
/// assert!(prefix_up_to(";").parse(&mut input).is_err());
/// assert_eq!(prefix_up_to(";").or_rest().parse(&mut input), Ok("no delimiter"));
/// ```
pub fn prefix_up_to<I, S>(delimiter: S) -> PrefixUpTo<I, S>
where
    I: Input,
    S: ItemSeq<I::Item>,
{
    PrefixUpTo { delimiter, missing: Missing::Fail, _input: PhantomData }
}

/// Parser returned by [`prefix_up_to`].
#[derive(Clone, Copy, Debug)]
pub struct PrefixUpTo<I, S> {
    delimiter: S,
    missing: Missing,
    _input: PhantomData<fn() -> I>,
}

impl<I, S> PrefixUpTo<I, S> {
    /// Accept the rest of the input when the delimiter is missing.
    pub fn or_rest(self) -> Self {
        self.missing(Missing::ConsumeRest)
    }
    pub fn missing(self, missing: Missing) -> Self {
        PrefixUpTo { missing, ..self }
    }
}

impl<I, S> Parser for PrefixUpTo<I, S>
where
    I: Input,
    I::Item: PartialEq,
    S: ItemSeq<I::Item>,
{
    type Input = I;
    type Output = I::Slice;
    type Error = Failure<I::Item>;

    fn parse(&self, input: &mut I) -> Result<I::Slice, Self::Error> {
        let start = input.checkpoint();
        if !scan(input, &self.delimiter) && self.missing == Missing::Fail {
            input.rollback(start);
            return Err(Failure::end_of_input(format!("{:?}", self.delimiter)));
        }
        let end = input.checkpoint();
        Ok(I::slice(start, end))
    }
}

impl<I, S> Printer for PrefixUpTo<I, S>
where
    I: Printable,
    I::Item: PartialEq,
    I::Slice: Input<Item = I::Item> + Clone + fmt::Debug,
    S: ItemSeq<I::Item>,
{
    type PrintError = Validation;

    fn print(&self, slice: I::Slice, buffer: &mut I::Buffer) -> Result<(), Validation> {
        if scan(&mut slice.clone(), &self.delimiter) {
            return Err(Validation::new(&slice, format!("contains the delimiter {:?}", self.delimiter)));
        }
        I::prepend_slice(buffer, slice);
        Ok(())
    }
}

/// Consume everything up to and including the first occurrence of `delimiter`.
///
/// ## Examples
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = "line one\nline two";
/// assert_eq!(prefix_through('\n').parse(&mut input), Ok("line one\n"));
/// assert_eq!(input, "line two");
/// ```
pub fn prefix_through<I, S>(delimiter: S) -> PrefixThrough<I, S>
where
    I: Input,
    S: ItemSeq<I::Item>,
{
    PrefixThrough { delimiter, missing: Missing::Fail, _input: PhantomData }
}

/// Parser returned by [`prefix_through`].
#[derive(Clone, Copy, Debug)]
pub struct PrefixThrough<I, S> {
    delimiter: S,
    missing: Missing,
    _input: PhantomData<fn() -> I>,
}

impl<I, S> PrefixThrough<I, S> {
    /// Accept the rest of the input when the delimiter is missing.
    pub fn or_rest(self) -> Self {
        self.missing(Missing::ConsumeRest)
    }
    pub fn missing(self, missing: Missing) -> Self {
        PrefixThrough { missing, ..self }
    }
}

impl<I, S> Parser for PrefixThrough<I, S>
where
    I: Input,
    I::Item: PartialEq,
    S: ItemSeq<I::Item>,
{
    type Input = I;
    type Output = I::Slice;
    type Error = Failure<I::Item>;

    fn parse(&self, input: &mut I) -> Result<I::Slice, Self::Error> {
        let start = input.checkpoint();
        if scan(input, &self.delimiter) {
            for _ in self.delimiter.items() {
                input.next();
            }
        } else if self.missing == Missing::Fail {
            input.rollback(start);
            return Err(Failure::end_of_input(format!("{:?}", self.delimiter)));
        }
        let end = input.checkpoint();
        Ok(I::slice(start, end))
    }
}

/// With [`Missing::ConsumeRest`], a value without the delimiter is accepted as well.
impl<I, S> Printer for PrefixThrough<I, S>
where
    I: Printable,
    I::Item: PartialEq,
    I::Slice: Input<Item = I::Item> + Clone + fmt::Debug,
    S: ItemSeq<I::Item>,
{
    type PrintError = Validation;

    fn print(&self, slice: I::Slice, buffer: &mut I::Buffer) -> Result<(), Validation> {
        let mut cursor = slice.clone();
        if scan(&mut cursor, &self.delimiter) {
            for _ in self.delimiter.items() {
                cursor.next();
            }
            if !cursor.is_empty() {
                return Err(Validation::new(&slice, format!("continues past the delimiter {:?}", self.delimiter)));
            }
        } else if self.missing == Missing::Fail {
            return Err(Validation::new(&slice, format!("does not end with the delimiter {:?}", self.delimiter)));
        }
        I::prepend_slice(buffer, slice);
        Ok(())
    }
}

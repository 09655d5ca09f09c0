//! Item-level parsers.
//!
//! These consume exactly one item from the input and are the usual building blocks for
//! higher-level grammars.
//!
//! - On **success**, they return the consumed item.
//! - On **mismatch**, they fail with [`Failure::Mismatch`] and leave the item in the input,
//!   so alternatives can be tried without an explicit rollback.
//! - On **end-of-input**, they fail with [`Failure::EndOfInput`].

use std::{borrow::Cow, fmt, marker::PhantomData};

use crate::{
    error::{Failure, Never, Validation},
    input::{Input, Printable},
    parser::{Parser, Printer},
};

pub mod set;
use set::ItemSet;

/// Consume any single item.
///
/// ## Examples
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = "ab";
/// assert_eq!(first().parse(&mut input), Ok('a'));
/// assert_eq!(input, "b");
///
/// let mut input = "";
/// assert_eq!(first().parse(&mut input), Err(Failure::end_of_input("any item")));
/// ```
pub fn first<I: Input>() -> First<I> {
    First(PhantomData)
}

/// Parser returned by [`first`].
#[derive(Clone, Copy, Debug)]
pub struct First<I>(PhantomData<fn() -> I>);

impl<I: Input> Parser for First<I> {
    type Input = I;
    type Output = I::Item;
    type Error = Failure<I::Item>;

    fn parse(&self, input: &mut I) -> Result<I::Item, Self::Error> {
        input.next().ok_or_else(|| Failure::end_of_input("any item"))
    }
}

impl<I: Printable> Printer for First<I> {
    type PrintError = Never;

    fn print(&self, item: I::Item, buffer: &mut I::Buffer) -> Result<(), Never> {
        I::prepend_item(buffer, item);
        Ok(())
    }
}

/// Consume one item if it belongs to `set`.
///
/// `set` can be any [`ItemSet`]: a predicate, a `char`, a `&str` of candidates, a range, or a
/// combination of them. The label names what was expected in error messages.
///
/// ## Examples
///
/// ```
/// use recto::prelude::*;
///
/// let vowel = first_where("aeiou").label("vowel");
///
/// let mut input = "ab";
/// assert_eq!(vowel.parse(&mut input), Ok('a'));
///
/// let err = vowel.parse(&mut input).unwrap_err();
/// assert_eq!(err, Failure::mismatch("vowel", 'b', 0));
/// assert_eq!(input, "b");
/// ```
pub fn first_where<I, S>(set: S) -> FirstWhere<I, S>
where
    I: Input,
    S: ItemSet<I::Item>,
{
    FirstWhere { set, label: Cow::Borrowed("matching item"), _input: PhantomData }
}

/// Parser returned by [`first_where`].
#[derive(Clone)]
pub struct FirstWhere<I, S> {
    set: S,
    label: Cow<'static, str>,
    _input: PhantomData<fn() -> I>,
}

impl<I, S> FirstWhere<I, S> {
    /// Name what this parser expects.
    pub fn label(self, label: impl Into<Cow<'static, str>>) -> Self {
        FirstWhere { label: label.into(), ..self }
    }
}

impl<I, S> fmt::Debug for FirstWhere<I, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirstWhere").field("label", &self.label).finish_non_exhaustive()
    }
}

impl<I, S> Parser for FirstWhere<I, S>
where
    I: Input,
    S: ItemSet<I::Item>,
{
    type Input = I;
    type Output = I::Item;
    type Error = Failure<I::Item>;

    fn parse(&self, input: &mut I) -> Result<I::Item, Self::Error> {
        match input.peek() {
            None => Err(Failure::end_of_input(self.label.clone())),
            Some(item) if self.set.has(&item) => {
                input.next();
                Ok(item)
            }
            Some(item) => Err(Failure::mismatch(self.label.clone(), item, 0)),
        }
    }
}

impl<I, S> Printer for FirstWhere<I, S>
where
    I: Printable,
    I::Item: fmt::Debug,
    S: ItemSet<I::Item>,
{
    type PrintError = Validation;

    fn print(&self, item: I::Item, buffer: &mut I::Buffer) -> Result<(), Validation> {
        if !self.set.has(&item) {
            return Err(Validation::new(&item, format!("expected {}", self.label)));
        }
        I::prepend_item(buffer, item);
        Ok(())
    }
}

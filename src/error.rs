//! Failure types.
//!
//! Every parser has a closed error type ([`crate::parser::Parser::Error`]). Leaf parsers fail with
//! one of a small set of kinds:
//!
//! - [`Failure::EndOfInput`]: more input was required than available.
//! - [`Failure::Mismatch`]: a literal or predicate did not match.
//! - [`Constraint`]: a count fell outside its bounds.
//! - [`Validation`]: an otherwise successful output was rejected.
//!
//! Combinators compose errors instead of flattening them:
//!
//! - [`Either`] tags exactly two heterogeneous sources (`Left` = upstream, `Right` = downstream).
//! - [`Aggregate`] keeps one failure per alternative tried, in order.
//! - [`Iteration`] records which step of a loop failed.
//!
//! Infallible parsers use [`Never`].

use std::{borrow::Cow, fmt};

pub use either::Either;

/// The error type of parsers that cannot fail.
pub type Never = std::convert::Infallible;

/// Collapse `Either<Never, R>` into `R`.
pub fn never_left<R>(error: Either<Never, R>) -> R {
    match error {
        Either::Left(never) => match never {},
        Either::Right(error) => error,
    }
}

/// Collapse `Either<L, Never>` into `L`.
pub fn never_right<L>(error: Either<L, Never>) -> L {
    match error {
        Either::Left(error) => error,
        Either::Right(never) => match never {},
    }
}

/// What was found where something else was expected.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Found<Item> {
    /// A concrete item.
    Item(Item),
    /// Input that should not be there, by count.
    Remaining(usize),
}

impl<Item: fmt::Debug> fmt::Display for Found<Item> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Item(item) => write!(f, "{item:?}"),
            Found::Remaining(1) => f.write_str("1 remaining item"),
            Found::Remaining(count) => write!(f, "{count} remaining items"),
        }
    }
}

/// Which side of a count a [`Constraint`] checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bound {
    AtLeast,
    AtMost,
    Exactly,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Bound::AtLeast => "at least",
            Bound::AtMost => "at most",
            Bound::Exactly => "exactly",
        })
    }
}

pub(crate) fn items(count: &usize) -> &'static str {
    if *count == 1 {
        "item"
    } else {
        "items"
    }
}

/// A count fell outside its bounds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("expected {bound} {expected} {}, got {actual}", items(.expected))]
pub struct Constraint {
    pub bound: Bound,
    pub expected: usize,
    pub actual: usize,
}

impl Constraint {
    pub fn at_least(expected: usize, actual: usize) -> Self {
        Constraint { bound: Bound::AtLeast, expected, actual }
    }
    pub fn at_most(expected: usize, actual: usize) -> Self {
        Constraint { bound: Bound::AtMost, expected, actual }
    }
    pub fn exactly(expected: usize, actual: usize) -> Self {
        Constraint { bound: Bound::Exactly, expected, actual }
    }
}

/// An otherwise successful output was rejected by a predicate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("rejected {value}: {reason}")]
pub struct Validation {
    /// `Debug` rendering of the rejected value.
    pub value: String,
    pub reason: Cow<'static, str>,
}

impl Validation {
    pub fn new(value: &impl fmt::Debug, reason: impl Into<Cow<'static, str>>) -> Self {
        Validation { value: format!("{value:?}"), reason: reason.into() }
    }
}

/// Leaf parser failure.
///
/// `position` in [`Failure::Mismatch`] counts the items the failing parser had already matched,
/// so a literal `"ab"` failing on `"ac"` reports position `1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Failure<Item> {
    #[error("unexpected end of input, expected {expected}")]
    EndOfInput { expected: Cow<'static, str> },
    #[error("expected {expected}, found {found} at position {position}")]
    Mismatch { expected: Cow<'static, str>, found: Found<Item>, position: usize },
    #[error(transparent)]
    Constraint(#[from] Constraint),
    #[error(transparent)]
    Validation(#[from] Validation),
}

impl<Item> Failure<Item> {
    pub fn end_of_input(expected: impl Into<Cow<'static, str>>) -> Self {
        Failure::EndOfInput { expected: expected.into() }
    }

    pub fn mismatch(expected: impl Into<Cow<'static, str>>, found: Item, position: usize) -> Self {
        Failure::Mismatch { expected: expected.into(), found: Found::Item(found), position }
    }
}

/// Error types that a [`Validation`] rejection can be added to.
///
/// Used by [`crate::parser::Parser::filter`]:
///
/// - [`Never`] becomes [`Validation`], so filtering an infallible parser fails only by rejection.
/// - [`Failure`] and [`Validation`] absorb the rejection as they are.
/// - [`Constraint`] becomes `Either<Constraint, Validation>`.
/// - `Either<L, R>` adds the rejection on the right, the side of the last failure source.
pub trait Reject {
    type Error;

    /// Carry an upstream error over unchanged.
    fn lift(self) -> Self::Error;
    /// Turn a rejection into the combined error.
    fn reject(validation: Validation) -> Self::Error;
}

impl Reject for Never {
    type Error = Validation;

    fn lift(self) -> Validation {
        match self {}
    }
    fn reject(validation: Validation) -> Validation {
        validation
    }
}

impl Reject for Validation {
    type Error = Validation;

    fn lift(self) -> Validation {
        self
    }
    fn reject(validation: Validation) -> Validation {
        validation
    }
}

impl<Item> Reject for Failure<Item> {
    type Error = Failure<Item>;

    fn lift(self) -> Failure<Item> {
        self
    }
    fn reject(validation: Validation) -> Failure<Item> {
        Failure::Validation(validation)
    }
}

impl Reject for Constraint {
    type Error = Either<Constraint, Validation>;

    fn lift(self) -> Self::Error {
        Either::Left(self)
    }
    fn reject(validation: Validation) -> Self::Error {
        Either::Right(validation)
    }
}

impl<L, R: Reject> Reject for Either<L, R> {
    type Error = Either<L, R::Error>;

    fn lift(self) -> Self::Error {
        match self {
            Either::Left(error) => Either::Left(error),
            Either::Right(error) => Either::Right(error.lift()),
        }
    }
    fn reject(validation: Validation) -> Self::Error {
        Either::Right(R::reject(validation))
    }
}

/// One failure per alternative tried, in order.
///
/// `T` is a tuple for fixed-arity alternation and a `Vec` for the dynamic variant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Aggregate<T>(pub T);

impl<T> Aggregate<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<E: fmt::Display> fmt::Display for Aggregate<Vec<E>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("no alternative matched")?;
        for (index, error) in self.0.iter().enumerate() {
            write!(f, "; [{index}] {error}")?;
        }
        Ok(())
    }
}

macro_rules! aggregate_display {
    ($($idx:tt : $E:ident),+) => {
        impl<$($E: fmt::Display,)+> fmt::Display for Aggregate<($($E,)+)> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("no alternative matched")?;
                $( write!(f, "; [{}] {}", $idx, (self.0).$idx)?; )+
                Ok(())
            }
        }
    };
}

aggregate_display!(0: E0, 1: E1);
aggregate_display!(0: E0, 1: E1, 2: E2);
aggregate_display!(0: E0, 1: E1, 2: E2, 3: E3);
aggregate_display!(0: E0, 1: E1, 2: E2, 3: E3, 4: E4);
aggregate_display!(0: E0, 1: E1, 2: E2, 3: E3, 4: E4, 5: E5);
aggregate_display!(0: E0, 1: E1, 2: E2, 3: E3, 4: E4, 5: E5, 6: E6);
aggregate_display!(0: E0, 1: E1, 2: E2, 3: E3, 4: E4, 5: E5, 6: E6, 7: E7);

impl<T: fmt::Debug> std::error::Error for Aggregate<T> where Aggregate<T>: fmt::Display {}

/// A loop step failed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Iteration<E> {
    pub index: usize,
    pub error: E,
}

impl<E: fmt::Display> fmt::Display for Iteration<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "iteration {}: {}", self.index, self.error)
    }
}

impl<E: std::error::Error + 'static> std::error::Error for Iteration<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

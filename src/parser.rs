pub mod choice;
pub mod flow;
pub mod item;
pub mod many;
pub mod option;
pub mod prefix;
pub mod prim;
pub mod seq;
pub mod then;
pub mod token;

use std::borrow::Cow;

use crate::input::{Input, Printable};

/// Parser trait.
///
/// A parser is an immutable description: it is built once and run through `&self` against any
/// number of inputs. `parse` advances `input` past what it consumed.
///
/// Rollback is **not automatic**. On failure the input is left wherever the parser stopped;
/// combinators that backtrack (`one_of`, `many`, `optionally`) restore it themselves.
pub trait Parser {
    type Input: Input;
    type Output;
    type Error;

    fn parse(&self, input: &mut Self::Input) -> Result<Self::Output, Self::Error>;

    /// Transform the output with a pure function.
    ///
    /// ```
    /// use recto::prelude::*;
    ///
    /// let mut input = "ab";
    /// let out = literal("a").map(|()| 1).parse(&mut input).unwrap();
    /// assert_eq!(out, 1);
    /// assert_eq!(input, "b");
    /// ```
    fn map<F, O>(self, f: F) -> then::Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> O,
    {
        then::map(self, f)
    }
    /// Transform the output with a function and its inverse, keeping the parser printable.
    fn bimap<F, G, O>(self, apply: F, unapply: G) -> then::Bimap<Self, F, G>
    where
        Self: Sized,
        F: Fn(Self::Output) -> O,
        G: Fn(O) -> Self::Output,
    {
        then::bimap(self, apply, unapply)
    }
    /// Transform the output with a function that may fail.
    ///
    /// Upstream failures are tagged `Left`, failures of `f` are tagged `Right`.
    fn try_map<F, O, E>(self, f: F) -> then::TryMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Result<O, E>,
    {
        then::try_map(self, f)
    }
    /// Reject outputs that do not satisfy `pred` with a [`crate::error::Validation`].
    fn filter<F>(self, pred: F, reason: impl Into<Cow<'static, str>>) -> then::Filter<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        then::filter(self, pred, reason)
    }
    /// Use the output to choose the parser that runs next.
    fn flat_map<F, Q>(self, f: F) -> then::FlatMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> Q,
        Q: Parser<Input = Self::Input>,
    {
        then::flat_map(self, f)
    }
    /// Transform the error.
    fn map_err<F, E>(self, f: F) -> then::MapErr<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Error) -> E,
    {
        then::map_err(self, f)
    }
    /// Replace the output of a parser with a constant value.
    ///
    /// ```
    /// use recto::prelude::*;
    ///
    /// let mut input = "true";
    /// assert_eq!(literal("true").to(true).parse(&mut input), Ok(true));
    /// ```
    fn to<O: Clone>(self, value: O) -> then::To<Self, O>
    where
        Self: Sized,
    {
        then::to(self, value)
    }
    /// Parse `self` then `right`, returning both outputs as a pair.
    fn then<Q>(self, right: Q) -> then::Then<Self, Q>
    where
        Self: Sized,
        Q: Parser<Input = Self::Input>,
    {
        then::then(self, right)
    }
    /// Parse `self` then `right`, returning the output of `self`.
    fn left<Q>(self, right: Q) -> then::Left<Self, Q>
    where
        Self: Sized,
        Q: Parser<Input = Self::Input>,
    {
        then::left(self, right)
    }
    /// Parse `self` then `right`, returning the output of `right`.
    fn right<Q>(self, right: Q) -> then::Right<Self, Q>
    where
        Self: Sized,
        Q: Parser<Input = Self::Input>,
    {
        then::right(self, right)
    }
    /// Parse `open`, then `self`, then `close`, returning the output of `self`.
    ///
    /// ```
    /// use recto::prelude::*;
    ///
    /// let mut input = "(a)";
    /// let out = first().between(literal('('), literal(')')).parse(&mut input);
    /// assert_eq!(out.ok(), Some('a'));
    /// assert_eq!(input, "");
    /// ```
    fn between<L, R>(self, open: L, close: R) -> then::Between<L, Self, R>
    where
        Self: Sized,
        L: Parser<Input = Self::Input>,
        R: Parser<Input = Self::Input>,
    {
        then::between(open, self, close)
    }
    /// Choice: try `self`, then `other` from the same starting point.
    fn or<Q>(self, other: Q) -> choice::OneOf<(Self, Q)>
    where
        Self: Sized,
        Q: Parser<Input = Self::Input, Output = Self::Output>,
    {
        choice::one_of((self, other))
    }
    /// Try `self`; on failure restore the input and produce `None`.
    fn or_not(self) -> option::Optionally<Self>
    where
        Self: Sized,
    {
        option::optionally(self)
    }
    /// Repeat `self` and collect the outputs into a `Vec`.
    fn many(self) -> many::Many<Self, Vec<Self::Output>>
    where
        Self: Sized,
    {
        many::many(self)
    }
    /// Erase the concrete parser type.
    fn boxed<'a>(self) -> BoxedParser<'a, Self::Input, Self::Output, Self::Error>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

/// The dual of [`Parser`]: turn an output back into input.
///
/// `print` **prepends** to the buffer. Composite printers therefore run their parts in reverse
/// order, so that the first part ends up at the front.
///
/// For a printer `p` and an output `v`, parsing what `p.print(v, ..)` produced yields `v` again.
pub trait Printer: Parser<Input: Printable> {
    type PrintError;

    fn print(&self, output: Self::Output, buffer: &mut <Self::Input as Printable>::Buffer) -> Result<(), Self::PrintError>;
}

/// The buffer type a printer writes into.
pub type Buffer<P> = <<P as Parser>::Input as Printable>::Buffer;

/// A type-erased parser.
pub type BoxedParser<'a, I, O, E> = Box<dyn Parser<Input = I, Output = O, Error = E> + 'a>;

/// Shorthand for a parser's output type.
pub type OutputOf<P> = <P as Parser>::Output;
/// Shorthand for a parser's error type.
pub type ErrorOf<P> = <P as Parser>::Error;

impl<P: Parser + ?Sized> Parser for &P {
    type Input = P::Input;
    type Output = P::Output;
    type Error = P::Error;
    fn parse(&self, input: &mut P::Input) -> Result<P::Output, P::Error> {
        (**self).parse(input)
    }
}

impl<P: Printer + ?Sized> Printer for &P {
    type PrintError = P::PrintError;
    fn print(&self, output: P::Output, buffer: &mut <P::Input as Printable>::Buffer) -> Result<(), P::PrintError> {
        (**self).print(output, buffer)
    }
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    type Input = P::Input;
    type Output = P::Output;
    type Error = P::Error;
    fn parse(&self, input: &mut P::Input) -> Result<P::Output, P::Error> {
        (**self).parse(input)
    }
}

impl<P: Printer + ?Sized> Printer for Box<P> {
    type PrintError = P::PrintError;
    fn print(&self, output: P::Output, buffer: &mut <P::Input as Printable>::Buffer) -> Result<(), P::PrintError> {
        (**self).print(output, buffer)
    }
}

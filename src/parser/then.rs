//! Transform and pairwise sequencing combinators.
//!
//! These compose parsers *in order* on the same input. They do **not** roll back by themselves:
//! when the second parser fails, whatever the first consumed stays consumed.
//!
//! Two-way failures are tagged with [`Either`]: `Left` for the upstream (or left-hand) parser,
//! `Right` for the downstream one.
//!
//! Printers run the parts in reverse order, since printing prepends.

use std::{borrow::Cow, fmt};

use crate::{
    error::{Either, Reject, Validation},
    parser::{Buffer, Parser, Printer},
};

/// Parser returned by [`Parser::map`].
#[derive(Clone, Copy, Debug)]
pub struct Map<P, F> {
    parser: P,
    f: F,
}

pub fn map<P, F>(parser: P, f: F) -> Map<P, F> {
    Map { parser, f }
}

impl<P, F, O> Parser for Map<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> O,
{
    type Input = P::Input;
    type Output = O;
    type Error = P::Error;

    fn parse(&self, input: &mut P::Input) -> Result<O, P::Error> {
        self.parser.parse(input).map(&self.f)
    }
}

/// Parser returned by [`Parser::bimap`].
#[derive(Clone, Copy, Debug)]
pub struct Bimap<P, F, G> {
    parser: P,
    apply: F,
    unapply: G,
}

pub fn bimap<P, F, G>(parser: P, apply: F, unapply: G) -> Bimap<P, F, G> {
    Bimap { parser, apply, unapply }
}

impl<P, F, G, O> Parser for Bimap<P, F, G>
where
    P: Parser,
    F: Fn(P::Output) -> O,
    G: Fn(O) -> P::Output,
{
    type Input = P::Input;
    type Output = O;
    type Error = P::Error;

    fn parse(&self, input: &mut P::Input) -> Result<O, P::Error> {
        self.parser.parse(input).map(&self.apply)
    }
}

impl<P, F, G, O> Printer for Bimap<P, F, G>
where
    P: Printer,
    F: Fn(P::Output) -> O,
    G: Fn(O) -> P::Output,
{
    type PrintError = P::PrintError;

    fn print(&self, output: O, buffer: &mut Buffer<P>) -> Result<(), P::PrintError> {
        self.parser.print((self.unapply)(output), buffer)
    }
}

/// Parser returned by [`Parser::try_map`].
#[derive(Clone, Copy, Debug)]
pub struct TryMap<P, F> {
    parser: P,
    f: F,
}

pub fn try_map<P, F>(parser: P, f: F) -> TryMap<P, F> {
    TryMap { parser, f }
}

impl<P, F, O, E> Parser for TryMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Result<O, E>,
{
    type Input = P::Input;
    type Output = O;
    type Error = Either<P::Error, E>;

    fn parse(&self, input: &mut P::Input) -> Result<O, Self::Error> {
        let output = self.parser.parse(input).map_err(Either::Left)?;
        (self.f)(output).map_err(Either::Right)
    }
}

/// Parser returned by [`Parser::filter`].
///
/// A rejected output becomes a [`Validation`], added to the upstream error through [`Reject`].
/// Leaf failures absorb it, and an infallible upstream fails with the bare `Validation`:
///
/// ```
/// use recto::prelude::*;
///
/// let even = first_where(|c: &char| c.is_ascii_digit())
///     .filter(|c: &char| c.to_digit(10).is_some_and(|d| d % 2 == 0), "odd digit");
///
/// let mut input = "47";
/// assert_eq!(even.parse(&mut input), Ok('4'));
/// let err = even.parse(&mut input).unwrap_err();
/// assert_eq!(err, Failure::Validation(Validation::new(&'7', "odd digit")));
///
/// let non_empty = rest::<&str>().filter(|s: &&str| !s.is_empty(), "empty");
/// assert_eq!(non_empty.parse(&mut ""), Err(Validation::new(&"", "empty")));
/// ```
#[derive(Clone)]
pub struct Filter<P, F> {
    parser: P,
    pred: F,
    reason: Cow<'static, str>,
}

pub fn filter<P, F>(parser: P, pred: F, reason: impl Into<Cow<'static, str>>) -> Filter<P, F> {
    Filter { parser, pred, reason: reason.into() }
}

impl<P: fmt::Debug, F> fmt::Debug for Filter<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("parser", &self.parser).field("reason", &self.reason).finish_non_exhaustive()
    }
}

impl<P, F> Parser for Filter<P, F>
where
    P: Parser<Output: fmt::Debug, Error: Reject>,
    F: Fn(&P::Output) -> bool,
{
    type Input = P::Input;
    type Output = P::Output;
    type Error = <P::Error as Reject>::Error;

    fn parse(&self, input: &mut P::Input) -> Result<P::Output, Self::Error> {
        let output = self.parser.parse(input).map_err(Reject::lift)?;
        if (self.pred)(&output) {
            Ok(output)
        } else {
            Err(P::Error::reject(Validation::new(&output, self.reason.clone())))
        }
    }
}

impl<P, F> Printer for Filter<P, F>
where
    P: Printer<Output: fmt::Debug, Error: Reject, PrintError: Reject>,
    F: Fn(&P::Output) -> bool,
{
    type PrintError = <P::PrintError as Reject>::Error;

    fn print(&self, output: P::Output, buffer: &mut Buffer<P>) -> Result<(), Self::PrintError> {
        if !(self.pred)(&output) {
            return Err(P::PrintError::reject(Validation::new(&output, self.reason.clone())));
        }
        self.parser.print(output, buffer).map_err(Reject::lift)
    }
}

/// Parser returned by [`Parser::flat_map`].
#[derive(Clone, Copy, Debug)]
pub struct FlatMap<P, F> {
    parser: P,
    f: F,
}

pub fn flat_map<P, F>(parser: P, f: F) -> FlatMap<P, F> {
    FlatMap { parser, f }
}

impl<P, F, Q> Parser for FlatMap<P, F>
where
    P: Parser,
    F: Fn(P::Output) -> Q,
    Q: Parser<Input = P::Input>,
{
    type Input = P::Input;
    type Output = Q::Output;
    type Error = Either<P::Error, Q::Error>;

    fn parse(&self, input: &mut P::Input) -> Result<Q::Output, Self::Error> {
        let output = self.parser.parse(input).map_err(Either::Left)?;
        (self.f)(output).parse(input).map_err(Either::Right)
    }
}

/// Parser returned by [`Parser::map_err`].
#[derive(Clone, Copy, Debug)]
pub struct MapErr<P, F> {
    parser: P,
    f: F,
}

pub fn map_err<P, F>(parser: P, f: F) -> MapErr<P, F> {
    MapErr { parser, f }
}

impl<P, F, E> Parser for MapErr<P, F>
where
    P: Parser,
    F: Fn(P::Error) -> E,
{
    type Input = P::Input;
    type Output = P::Output;
    type Error = E;

    fn parse(&self, input: &mut P::Input) -> Result<P::Output, E> {
        self.parser.parse(input).map_err(&self.f)
    }
}

impl<P, F, E> Printer for MapErr<P, F>
where
    P: Printer,
    F: Fn(P::Error) -> E,
{
    type PrintError = P::PrintError;

    fn print(&self, output: P::Output, buffer: &mut Buffer<P>) -> Result<(), P::PrintError> {
        self.parser.print(output, buffer)
    }
}

/// Parser returned by [`Parser::to`].
///
/// The printer only accepts the constant itself, which is what lets alternation pick the right
/// branch when printing.
#[derive(Clone, Copy, Debug)]
pub struct To<P, O> {
    parser: P,
    value: O,
}

pub fn to<P, O>(parser: P, value: O) -> To<P, O> {
    To { parser, value }
}

impl<P: Parser, O: Clone> Parser for To<P, O> {
    type Input = P::Input;
    type Output = O;
    type Error = P::Error;

    fn parse(&self, input: &mut P::Input) -> Result<O, P::Error> {
        self.parser.parse(input).map(|_| self.value.clone())
    }
}

impl<P, O> Printer for To<P, O>
where
    P: Printer<Output = ()>,
    O: Clone + PartialEq + fmt::Debug,
{
    type PrintError = Either<P::PrintError, Validation>;

    fn print(&self, output: O, buffer: &mut Buffer<P>) -> Result<(), Self::PrintError> {
        if output != self.value {
            return Err(Either::Right(Validation::new(&output, format!("expected {:?}", self.value))));
        }
        self.parser.print((), buffer).map_err(Either::Left)
    }
}

/// Run two parsers in order and return both outputs.
///
/// ## Examples
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = "ab";
/// assert_eq!(then(first(), first()).parse(&mut input), Ok(('a', 'b')));
/// assert_eq!(input, "");
/// ```
pub fn then<P, Q>(left: P, right: Q) -> Then<P, Q> {
    Then(left, right)
}

/// Parser returned by [`then`].
#[derive(Clone, Copy, Debug)]
pub struct Then<P, Q>(P, Q);

impl<P, Q> Parser for Then<P, Q>
where
    P: Parser,
    Q: Parser<Input = P::Input>,
{
    type Input = P::Input;
    type Output = (P::Output, Q::Output);
    type Error = Either<P::Error, Q::Error>;

    fn parse(&self, input: &mut P::Input) -> Result<Self::Output, Self::Error> {
        let a = self.0.parse(input).map_err(Either::Left)?;
        let b = self.1.parse(input).map_err(Either::Right)?;
        Ok((a, b))
    }
}

impl<P, Q> Printer for Then<P, Q>
where
    P: Printer,
    Q: Printer<Input = P::Input>,
{
    type PrintError = Either<P::PrintError, Q::PrintError>;

    fn print(&self, (a, b): Self::Output, buffer: &mut Buffer<P>) -> Result<(), Self::PrintError> {
        self.1.print(b, buffer).map_err(Either::Right)?;
        self.0.print(a, buffer).map_err(Either::Left)
    }
}

/// Keep the left output and discard the right output.
///
/// When printing, the right parser prints from `()`.
///
/// ## Examples
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = "a;";
/// assert_eq!(left(first(), literal(';')).parse(&mut input), Ok('a'));
/// assert_eq!(input, "");
/// ```
pub fn left<P, Q>(p: P, q: Q) -> Left<P, Q> {
    Left(p, q)
}

/// Parser returned by [`left`].
#[derive(Clone, Copy, Debug)]
pub struct Left<P, Q>(P, Q);

impl<P, Q> Parser for Left<P, Q>
where
    P: Parser,
    Q: Parser<Input = P::Input>,
{
    type Input = P::Input;
    type Output = P::Output;
    type Error = Either<P::Error, Q::Error>;

    fn parse(&self, input: &mut P::Input) -> Result<P::Output, Self::Error> {
        let a = self.0.parse(input).map_err(Either::Left)?;
        self.1.parse(input).map_err(Either::Right)?;
        Ok(a)
    }
}

impl<P, Q> Printer for Left<P, Q>
where
    P: Printer,
    Q: Printer<Input = P::Input, Output = ()>,
{
    type PrintError = Either<P::PrintError, Q::PrintError>;

    fn print(&self, a: P::Output, buffer: &mut Buffer<P>) -> Result<(), Self::PrintError> {
        self.1.print((), buffer).map_err(Either::Right)?;
        self.0.print(a, buffer).map_err(Either::Left)
    }
}

/// Keep the right output and discard the left output.
///
/// ## Examples
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = "-5";
/// assert_eq!(right(literal('-'), first()).parse(&mut input), Ok('5'));
/// ```
pub fn right<P, Q>(p: P, q: Q) -> Right<P, Q> {
    Right(p, q)
}

/// Parser returned by [`right`].
#[derive(Clone, Copy, Debug)]
pub struct Right<P, Q>(P, Q);

impl<P, Q> Parser for Right<P, Q>
where
    P: Parser,
    Q: Parser<Input = P::Input>,
{
    type Input = P::Input;
    type Output = Q::Output;
    type Error = Either<P::Error, Q::Error>;

    fn parse(&self, input: &mut P::Input) -> Result<Q::Output, Self::Error> {
        self.0.parse(input).map_err(Either::Left)?;
        self.1.parse(input).map_err(Either::Right)
    }
}

impl<P, Q> Printer for Right<P, Q>
where
    P: Printer<Output = ()>,
    Q: Printer<Input = P::Input>,
{
    type PrintError = Either<P::PrintError, Q::PrintError>;

    fn print(&self, b: Q::Output, buffer: &mut Buffer<P>) -> Result<(), Self::PrintError> {
        self.1.print(b, buffer).map_err(Either::Right)?;
        self.0.print((), buffer).map_err(Either::Left)
    }
}

/// Parse `open`, then `inner`, then `close`, returning the `inner` output.
///
/// Errors nest from the left: `Left(Left(_))` is `open`, `Left(Right(_))` is `inner` and
/// `Right(_)` is `close`.
pub fn between<L, P, R>(open: L, inner: P, close: R) -> Between<L, P, R> {
    Between(open, inner, close)
}

/// Parser returned by [`between`].
#[derive(Clone, Copy, Debug)]
pub struct Between<L, P, R>(L, P, R);

impl<L, P, R> Parser for Between<L, P, R>
where
    L: Parser,
    P: Parser<Input = L::Input>,
    R: Parser<Input = L::Input>,
{
    type Input = L::Input;
    type Output = P::Output;
    type Error = Either<Either<L::Error, P::Error>, R::Error>;

    fn parse(&self, input: &mut L::Input) -> Result<P::Output, Self::Error> {
        self.0.parse(input).map_err(|e| Either::Left(Either::Left(e)))?;
        let output = self.1.parse(input).map_err(|e| Either::Left(Either::Right(e)))?;
        self.2.parse(input).map_err(Either::Right)?;
        Ok(output)
    }
}

impl<L, P, R> Printer for Between<L, P, R>
where
    L: Printer<Output = ()>,
    P: Printer<Input = L::Input>,
    R: Printer<Input = L::Input, Output = ()>,
{
    type PrintError = Either<Either<L::PrintError, P::PrintError>, R::PrintError>;

    fn print(&self, output: P::Output, buffer: &mut Buffer<L>) -> Result<(), Self::PrintError> {
        self.2.print((), buffer).map_err(Either::Right)?;
        self.1.print(output, buffer).map_err(|e| Either::Left(Either::Right(e)))?;
        self.0.print((), buffer).map_err(|e| Either::Left(Either::Left(e)))
    }
}

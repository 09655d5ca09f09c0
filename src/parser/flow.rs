//! Building blocks for grammars written as straight-line code.
//!
//! A grammar block is assembled from:
//!
//! - [`identity`] for an empty block: consumes nothing, produces `()`.
//! - [`when`] for a condition without an alternative ([`Optional`] under the hood).
//! - [`branch`] for a condition with an alternative. The result is an [`Either`] of parsers,
//!   which is itself a parser. The branch is fixed when the grammar is built and never
//!   backtracks.
//! - [`each`] for a loop: one parser per iteration, outputs collected in order.

use crate::{
    error::{Constraint, Either, Iteration},
    input::Input,
    parser::{
        option::{optional, Optional},
        prim::{always, Always},
        Buffer, Parser, Printer,
    },
};

/// The empty block.
pub fn identity<I: Input>() -> Always<I, ()> {
    always(())
}

/// Include the parser built by `build` only when `cond` holds.
///
/// ```
/// use recto::prelude::*;
///
/// let header = |with_bom: bool| when(with_bom, || literal('\u{feff}')).then(literal("key"));
///
/// assert_eq!(header(true).parse(&mut "\u{feff}key"), Ok((Some(()), ())));
/// assert_eq!(header(false).parse(&mut "key"), Ok((None, ())));
/// ```
pub fn when<P, F>(cond: bool, build: F) -> Optional<P>
where
    F: FnOnce() -> P,
{
    optional(cond.then(build))
}

/// Pick one of two parsers when the grammar is built.
///
/// ```
/// use recto::prelude::*;
///
/// let radix = |hex: bool| branch(hex, || literal("0x").to(16), || literal("").to(10));
///
/// assert_eq!(radix(false).parse(&mut "42"), Ok(10));
/// assert_eq!(radix(true).parse(&mut "0x2a"), Ok(16));
/// assert!(radix(true).parse(&mut "42").unwrap_err().is_left());
/// ```
pub fn branch<A, B, FA, FB>(cond: bool, left: FA, right: FB) -> Either<A, B>
where
    FA: FnOnce() -> A,
    FB: FnOnce() -> B,
{
    if cond {
        Either::Left(left())
    } else {
        Either::Right(right())
    }
}

impl<A, B> Parser for Either<A, B>
where
    A: Parser,
    B: Parser<Input = A::Input, Output = A::Output>,
{
    type Input = A::Input;
    type Output = A::Output;
    type Error = Either<A::Error, B::Error>;

    fn parse(&self, input: &mut A::Input) -> Result<A::Output, Self::Error> {
        match self {
            Either::Left(parser) => parser.parse(input).map_err(Either::Left),
            Either::Right(parser) => parser.parse(input).map_err(Either::Right),
        }
    }
}

impl<A, B> Printer for Either<A, B>
where
    A: Printer,
    B: Printer<Input = A::Input, Output = A::Output>,
{
    type PrintError = Either<A::PrintError, B::PrintError>;

    fn print(&self, output: A::Output, buffer: &mut Buffer<A>) -> Result<(), Self::PrintError> {
        match self {
            Either::Left(printer) => printer.print(output, buffer).map_err(Either::Left),
            Either::Right(printer) => printer.print(output, buffer).map_err(Either::Right),
        }
    }
}

/// Run one parser per loop iteration, in order, collecting the outputs.
///
/// A failure reports the iteration it happened in.
///
/// ```
/// use recto::prelude::*;
///
/// let fields = each(["id", "name"].map(|name| literal(name).right(prefix_up_to(";")).left(literal(';'))));
///
/// let mut input = "id7;namebob;";
/// assert_eq!(fields.parse(&mut input), Ok(vec!["7", "bob"]));
///
/// let mut input = "id7;nick;";
/// assert_eq!(fields.parse(&mut input).unwrap_err().index, 1);
/// ```
pub fn each<P: Parser>(parsers: impl IntoIterator<Item = P>) -> Each<P> {
    Each(parsers.into_iter().collect())
}

/// Parser returned by [`each`].
#[derive(Clone, Debug)]
pub struct Each<P>(Vec<P>);

impl<P: Parser> Parser for Each<P> {
    type Input = P::Input;
    type Output = Vec<P::Output>;
    type Error = Iteration<P::Error>;

    fn parse(&self, input: &mut P::Input) -> Result<Vec<P::Output>, Self::Error> {
        self.0
            .iter()
            .enumerate()
            .map(|(index, parser)| parser.parse(input).map_err(|error| Iteration { index, error }))
            .collect()
    }
}

/// The value must have exactly one element per iteration.
impl<P: Printer> Printer for Each<P> {
    type PrintError = Either<Constraint, Iteration<P::PrintError>>;

    fn print(&self, output: Vec<P::Output>, buffer: &mut Buffer<P>) -> Result<(), Self::PrintError> {
        if output.len() != self.0.len() {
            return Err(Either::Left(Constraint::exactly(self.0.len(), output.len())));
        }
        for (index, (parser, item)) in self.0.iter().zip(output).enumerate().rev() {
            parser.print(item, buffer).map_err(|error| Either::Right(Iteration { index, error }))?;
        }
        Ok(())
    }
}

//! Optional inclusion.
//!
//! - [`optional`] decides at build time: `None` never runs anything, `Some(p)` always runs `p`.
//! - [`optionally`] decides at run time: failure of `p` is rolled back and becomes `None`.

use log::trace;

use crate::{
    error::{Either, Never, Validation},
    input::Back as _,
    parser::{Buffer, Parser, Printer},
};

/// Include a parser or not, decided when the grammar is built.
///
/// ```
/// use recto::prelude::*;
///
/// let signed = true;
/// let sign = optional(signed.then(|| literal('-')));
///
/// let mut input = "-1";
/// assert_eq!(sign.parse(&mut input), Ok(Some(())));
/// assert!(sign.parse(&mut input).is_err());
/// ```
pub fn optional<P>(parser: Option<P>) -> Optional<P> {
    Optional(parser)
}

/// Parser returned by [`optional`].
#[derive(Clone, Copy, Debug)]
pub struct Optional<P>(Option<P>);

impl<P: Parser> Parser for Optional<P> {
    type Input = P::Input;
    type Output = Option<P::Output>;
    type Error = P::Error;

    fn parse(&self, input: &mut P::Input) -> Result<Option<P::Output>, P::Error> {
        match &self.0 {
            Some(parser) => parser.parse(input).map(Some),
            None => Ok(None),
        }
    }
}

/// A value is only printable when it matches whether the parser is present.
impl<P: Printer> Printer for Optional<P> {
    type PrintError = Either<P::PrintError, Validation>;

    fn print(&self, output: Option<P::Output>, buffer: &mut Buffer<P>) -> Result<(), Self::PrintError> {
        match (&self.0, output) {
            (Some(parser), Some(output)) => parser.print(output, buffer).map_err(Either::Left),
            (None, None) => Ok(()),
            (Some(_), None) => Err(Either::Right(Validation { value: "None".into(), reason: "the parser is present".into() })),
            (None, Some(_)) => Err(Either::Right(Validation { value: "Some(..)".into(), reason: "the parser is absent".into() })),
        }
    }
}

/// Try a parser; on failure roll back and produce `None`.
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = "abc";
/// assert_eq!(optionally(literal("-")).parse(&mut input), Ok(None));
/// assert_eq!(input, "abc");
///
/// let mut input = "ab";
/// assert_eq!(optionally(literal("ab")).parse(&mut input), Ok(Some(())));
/// assert_eq!(input, "");
/// ```
pub fn optionally<P>(parser: P) -> Optionally<P> {
    Optionally(parser)
}

/// Parser returned by [`optionally`] and [`Parser::or_not`].
#[derive(Clone, Copy, Debug)]
pub struct Optionally<P>(P);

impl<P: Parser> Parser for Optionally<P> {
    type Input = P::Input;
    type Output = Option<P::Output>;
    type Error = Never;

    fn parse(&self, input: &mut P::Input) -> Result<Option<P::Output>, Never> {
        let checkpoint = input.checkpoint();
        match self.0.parse(input) {
            Ok(output) => Ok(Some(output)),
            Err(_) => {
                trace!("optionally: inner parser failed, rolling back");
                input.rollback(checkpoint);
                Ok(None)
            }
        }
    }
}

impl<P: Printer> Printer for Optionally<P> {
    type PrintError = P::PrintError;

    fn print(&self, output: Option<P::Output>, buffer: &mut Buffer<P>) -> Result<(), P::PrintError> {
        match output {
            Some(output) => self.0.print(output, buffer),
            None => Ok(()),
        }
    }
}

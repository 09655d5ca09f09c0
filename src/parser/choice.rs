//! Ordered choice between parsers.
//!
//! Alternatives are tried left to right from the same starting point:
//!
//! - If an alternative succeeds, the choice succeeds and stops.
//! - If it fails, the input is rolled back and the next alternative is tried.
//! - If every alternative fails, all failures are returned in order as an [`Aggregate`]. The
//!   input is **not** restored after the last failure.

use log::trace;

use crate::{
    error::Aggregate,
    input::Back as _,
    parser::{Buffer, Parser, Printer},
};

/// Ordered choice between a fixed tuple of 2 to 8 parsers with the same output.
///
/// ```
/// use recto::prelude::*;
///
/// let boolean = one_of((literal("true").to(true), literal("false").to(false)));
///
/// let mut input = "false";
/// assert_eq!(boolean.parse(&mut input), Ok(false));
/// assert_eq!(input, "");
///
/// let mut input = "maybe";
/// let Aggregate((on_true, on_false)) = boolean.parse(&mut input).unwrap_err();
/// assert_eq!(on_true, Failure::mismatch("\"true\"", 'm', 0));
/// assert_eq!(on_false, Failure::mismatch("\"false\"", 'm', 0));
/// ```
pub fn one_of<Ps>(parsers: Ps) -> OneOf<Ps> {
    OneOf(parsers)
}

/// Parser returned by [`one_of`] and [`Parser::or`].
#[derive(Clone, Copy, Debug)]
pub struct OneOf<Ps>(Ps);

impl<Ps> OneOf<Ps> {
    pub fn into_inner(self) -> Ps {
        self.0
    }
}

macro_rules! one_of_impl {
    ($p1:ident : $P1:ident : $e1:ident $(, $i:tt : $p:ident : $P:ident : $e:ident)+) => {
        impl<$P1, $($P,)+> Parser for OneOf<($P1, $($P,)+)>
        where
            $P1: Parser,
            $($P: Parser<Input = $P1::Input, Output = $P1::Output>,)+
        {
            type Input = $P1::Input;
            type Output = $P1::Output;
            type Error = Aggregate<($P1::Error, $($P::Error,)+)>;

            fn parse(&self, input: &mut $P1::Input) -> Result<$P1::Output, Self::Error> {
                let ($p1, $($p,)+) = &self.0;
                let start = input.checkpoint();
                let $e1 = match $p1.parse(input) {
                    Ok(output) => return Ok(output),
                    Err(error) => error,
                };
                $(
                    trace!("one_of: rolling back to try alternative {}", $i);
                    input.rollback(start.clone());
                    let $e = match $p.parse(input) {
                        Ok(output) => return Ok(output),
                        Err(error) => error,
                    };
                )+
                Err(Aggregate(($e1, $($e,)+)))
            }
        }

        impl<$P1, $($P,)+> Printer for OneOf<($P1, $($P,)+)>
        where
            $P1: Printer<Output: Clone>,
            $($P: Printer<Input = $P1::Input, Output = $P1::Output>,)+
        {
            type PrintError = Aggregate<($P1::PrintError, $($P::PrintError,)+)>;

            fn print(&self, output: $P1::Output, buffer: &mut Buffer<$P1>) -> Result<(), Self::PrintError> {
                let ($p1, $($p,)+) = &self.0;
                let mut attempt = buffer.clone();
                let $e1 = match $p1.print(output.clone(), &mut attempt) {
                    Ok(()) => {
                        *buffer = attempt;
                        return Ok(());
                    }
                    Err(error) => error,
                };
                $(
                    attempt.clone_from(buffer);
                    let $e = match $p.print(output.clone(), &mut attempt) {
                        Ok(()) => {
                            *buffer = attempt;
                            return Ok(());
                        }
                        Err(error) => error,
                    };
                )+
                Err(Aggregate(($e1, $($e,)+)))
            }
        }
    };
}

one_of_impl!(p1: P1: e1, 1: p2: P2: e2);
one_of_impl!(p1: P1: e1, 1: p2: P2: e2, 2: p3: P3: e3);
one_of_impl!(p1: P1: e1, 1: p2: P2: e2, 2: p3: P3: e3, 3: p4: P4: e4);
one_of_impl!(p1: P1: e1, 1: p2: P2: e2, 2: p3: P3: e3, 3: p4: P4: e4, 4: p5: P5: e5);
one_of_impl!(p1: P1: e1, 1: p2: P2: e2, 2: p3: P3: e3, 3: p4: P4: e4, 4: p5: P5: e5, 5: p6: P6: e6);
one_of_impl!(p1: P1: e1, 1: p2: P2: e2, 2: p3: P3: e3, 3: p4: P4: e4, 4: p5: P5: e5, 5: p6: P6: e6, 6: p7: P7: e7);
one_of_impl!(
    p1: P1: e1,
    1: p2: P2: e2,
    2: p3: P3: e3,
    3: p4: P4: e4,
    4: p5: P5: e5,
    5: p6: P6: e6,
    6: p7: P7: e7,
    7: p8: P8: e8
);

/// Ordered choice between any number of parsers of one type.
///
/// Pair it with [`Parser::boxed`] to mix parser types. An empty list always fails with an empty
/// [`Aggregate`].
///
/// ```
/// use recto::prelude::*;
///
/// let keyword = one_of_any(["let", "fn", "if"].map(literal));
///
/// let mut input = "fn main";
/// assert_eq!(keyword.parse(&mut input), Ok(()));
/// assert_eq!(input, " main");
///
/// let mut input = "for";
/// assert_eq!(keyword.parse(&mut input).unwrap_err().0.len(), 3);
/// ```
pub fn one_of_any<P: Parser>(parsers: impl IntoIterator<Item = P>) -> OneOfAny<P> {
    OneOfAny(parsers.into_iter().collect())
}

/// Parser returned by [`one_of_any`].
#[derive(Clone, Debug)]
pub struct OneOfAny<P>(Vec<P>);

impl<P> OneOfAny<P> {
    pub fn alternatives(&self) -> &[P] {
        &self.0
    }
}

impl<P: Parser> Parser for OneOfAny<P> {
    type Input = P::Input;
    type Output = P::Output;
    type Error = Aggregate<Vec<P::Error>>;

    fn parse(&self, input: &mut P::Input) -> Result<P::Output, Self::Error> {
        let start = input.checkpoint();
        let mut errors = Vec::with_capacity(self.0.len());
        for (index, parser) in self.0.iter().enumerate() {
            if index > 0 {
                trace!("one_of_any: rolling back to try alternative {}", index);
                input.rollback(start.clone());
            }
            match parser.parse(input) {
                Ok(output) => return Ok(output),
                Err(error) => errors.push(error),
            }
        }
        Err(Aggregate(errors))
    }
}

impl<P> Printer for OneOfAny<P>
where
    P: Printer<Output: Clone>,
{
    type PrintError = Aggregate<Vec<P::PrintError>>;

    fn print(&self, output: P::Output, buffer: &mut Buffer<P>) -> Result<(), Self::PrintError> {
        let mut errors = Vec::with_capacity(self.0.len());
        for parser in &self.0 {
            let mut attempt = buffer.clone();
            match parser.print(output.clone(), &mut attempt) {
                Ok(()) => {
                    *buffer = attempt;
                    return Ok(());
                }
                Err(error) => errors.push(error),
            }
        }
        Err(Aggregate(errors))
    }
}

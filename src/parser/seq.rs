//! N-ary sequencing with flat tuple outputs.
//!
//! [`sequence`] starts an empty sequence whose output is `()`. Each stage either adds a slot
//! ([`Sequence::then`]), runs without adding one ([`Sequence::skip`]), or splices in another
//! sequence ([`Sequence::chain`]). Outputs are always flat tuples, up to 8 slots, no matter how
//! the stages were grouped:
//!
//! ```
//! use recto::prelude::*;
//!
//! let digit = || first_where(|c: &char| c.is_ascii_digit());
//!
//! let flat = sequence().then(digit()).then(digit()).then(digit());
//! let grouped = sequence().then(digit()).chain(sequence().then(digit()).then(digit()));
//!
//! assert_eq!(flat.parse(&mut "123"), Ok(('1', '2', '3')));
//! assert_eq!(grouped.parse(&mut "123"), Ok(('1', '2', '3')));
//!
//! let delimiters = sequence().skip(literal('(')).skip(literal(',')).skip(literal(')'));
//! assert_eq!(delimiters.parse(&mut "(,)"), Ok(()));
//! ```
//!
//! Every stage nests the error as `Either<previous, stage>`, so the outermost `Right` is the
//! last stage.
//!
//! [`Sequence::then`] is an inherent method and takes precedence over [`Parser::then`] in
//! method-call syntax. The trait method is still reachable as `Parser::then(seq, p)`, which pairs
//! the whole tuple with the next output instead of appending a slot.

use crate::{
    error::Either,
    input::Input,
    parser::{
        prim::{always, Always},
        then::{left, Left},
        Buffer, Parser, Printer,
    },
};

/// Tuple concatenation.
///
/// Implemented for every pair of tuples whose combined length is at most 8.
pub trait Concat<Rhs>: Sized {
    type Output;

    fn concat(self, rhs: Rhs) -> Self::Output;
    /// Inverse of [`Concat::concat`].
    fn split(output: Self::Output) -> (Self, Rhs);
}

macro_rules! concat_impl {
    (($($A:ident),*), ($($B:ident),*)) => {
        impl<$($A,)* $($B,)*> Concat<($($B,)*)> for ($($A,)*) {
            type Output = ($($A,)* $($B,)*);

            #[allow(non_snake_case, clippy::unused_unit)]
            fn concat(self, rhs: ($($B,)*)) -> Self::Output {
                let ($($A,)*) = self;
                let ($($B,)*) = rhs;
                ($($A,)* $($B,)*)
            }

            #[allow(non_snake_case, clippy::unused_unit)]
            fn split(output: Self::Output) -> (Self, ($($B,)*)) {
                let ($($A,)* $($B,)*) = output;
                (($($A,)*), ($($B,)*))
            }
        }
    };
}

concat_impl!((), ());
concat_impl!((), (B0));
concat_impl!((), (B0, B1));
concat_impl!((), (B0, B1, B2));
concat_impl!((), (B0, B1, B2, B3));
concat_impl!((), (B0, B1, B2, B3, B4));
concat_impl!((), (B0, B1, B2, B3, B4, B5));
concat_impl!((), (B0, B1, B2, B3, B4, B5, B6));
concat_impl!((), (B0, B1, B2, B3, B4, B5, B6, B7));
concat_impl!((A0), ());
concat_impl!((A0), (B0));
concat_impl!((A0), (B0, B1));
concat_impl!((A0), (B0, B1, B2));
concat_impl!((A0), (B0, B1, B2, B3));
concat_impl!((A0), (B0, B1, B2, B3, B4));
concat_impl!((A0), (B0, B1, B2, B3, B4, B5));
concat_impl!((A0), (B0, B1, B2, B3, B4, B5, B6));
concat_impl!((A0, A1), ());
concat_impl!((A0, A1), (B0));
concat_impl!((A0, A1), (B0, B1));
concat_impl!((A0, A1), (B0, B1, B2));
concat_impl!((A0, A1), (B0, B1, B2, B3));
concat_impl!((A0, A1), (B0, B1, B2, B3, B4));
concat_impl!((A0, A1), (B0, B1, B2, B3, B4, B5));
concat_impl!((A0, A1, A2), ());
concat_impl!((A0, A1, A2), (B0));
concat_impl!((A0, A1, A2), (B0, B1));
concat_impl!((A0, A1, A2), (B0, B1, B2));
concat_impl!((A0, A1, A2), (B0, B1, B2, B3));
concat_impl!((A0, A1, A2), (B0, B1, B2, B3, B4));
concat_impl!((A0, A1, A2, A3), ());
concat_impl!((A0, A1, A2, A3), (B0));
concat_impl!((A0, A1, A2, A3), (B0, B1));
concat_impl!((A0, A1, A2, A3), (B0, B1, B2));
concat_impl!((A0, A1, A2, A3), (B0, B1, B2, B3));
concat_impl!((A0, A1, A2, A3, A4), ());
concat_impl!((A0, A1, A2, A3, A4), (B0));
concat_impl!((A0, A1, A2, A3, A4), (B0, B1));
concat_impl!((A0, A1, A2, A3, A4), (B0, B1, B2));
concat_impl!((A0, A1, A2, A3, A4, A5), ());
concat_impl!((A0, A1, A2, A3, A4, A5), (B0));
concat_impl!((A0, A1, A2, A3, A4, A5), (B0, B1));
concat_impl!((A0, A1, A2, A3, A4, A5, A6), ());
concat_impl!((A0, A1, A2, A3, A4, A5, A6), (B0));
concat_impl!((A0, A1, A2, A3, A4, A5, A6, A7), ());

/// Start an empty sequence. It consumes nothing and produces `()`.
pub fn sequence<I: Input>() -> Sequence<Always<I, ()>> {
    Sequence(always(()))
}

/// A parser whose output is a flat tuple.
#[derive(Clone, Copy, Debug)]
pub struct Sequence<P>(P);

impl<P: Parser> Sequence<P> {
    /// Run `next` after this sequence and append its output as a new slot.
    ///
    /// This shadows [`Parser::then`], which nests instead:
    ///
    /// ```
    /// use recto::prelude::*;
    ///
    /// let digit = || first_where(|c: &char| c.is_ascii_digit());
    /// let one = || sequence().then(digit());
    ///
    /// assert_eq!(one().then(digit()).parse(&mut "12"), Ok(('1', '2')));
    /// assert_eq!(Parser::then(one(), digit()).parse(&mut "12"), Ok((('1',), '2')));
    /// ```
    pub fn then<Q>(self, next: Q) -> Sequence<Join<P, Single<Q>>>
    where
        Q: Parser<Input = P::Input>,
        P::Output: Concat<(Q::Output,)>,
    {
        Sequence(Join(self.0, Single(next)))
    }

    /// Run `next` after this sequence and drop its output.
    pub fn skip<Q>(self, next: Q) -> Sequence<Left<P, Q>>
    where
        Q: Parser<Input = P::Input>,
    {
        Sequence(left(self.0, next))
    }

    /// Run `other` after this sequence, concatenating the outputs.
    pub fn chain<Q>(self, other: Sequence<Q>) -> Sequence<Join<P, Q>>
    where
        Q: Parser<Input = P::Input>,
        P::Output: Concat<Q::Output>,
    {
        Sequence(Join(self.0, other.0))
    }

    pub fn into_inner(self) -> P {
        self.0
    }
}

impl<P: Parser> Parser for Sequence<P> {
    type Input = P::Input;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, input: &mut P::Input) -> Result<P::Output, P::Error> {
        self.0.parse(input)
    }
}

impl<P: Printer> Printer for Sequence<P> {
    type PrintError = P::PrintError;

    fn print(&self, output: P::Output, buffer: &mut Buffer<P>) -> Result<(), P::PrintError> {
        self.0.print(output, buffer)
    }
}

/// Wraps an output into a one-slot tuple.
#[derive(Clone, Copy, Debug)]
pub struct Single<P>(P);

impl<P: Parser> Parser for Single<P> {
    type Input = P::Input;
    type Output = (P::Output,);
    type Error = P::Error;

    fn parse(&self, input: &mut P::Input) -> Result<(P::Output,), P::Error> {
        self.0.parse(input).map(|output| (output,))
    }
}

impl<P: Printer> Printer for Single<P> {
    type PrintError = P::PrintError;

    fn print(&self, (output,): (P::Output,), buffer: &mut Buffer<P>) -> Result<(), P::PrintError> {
        self.0.print(output, buffer)
    }
}

/// Runs two tuple-producing parsers in order and concatenates their outputs.
#[derive(Clone, Copy, Debug)]
pub struct Join<P, Q>(P, Q);

impl<P, Q> Parser for Join<P, Q>
where
    P: Parser,
    Q: Parser<Input = P::Input>,
    P::Output: Concat<Q::Output>,
{
    type Input = P::Input;
    type Output = <P::Output as Concat<Q::Output>>::Output;
    type Error = Either<P::Error, Q::Error>;

    fn parse(&self, input: &mut P::Input) -> Result<Self::Output, Self::Error> {
        let a = self.0.parse(input).map_err(Either::Left)?;
        let b = self.1.parse(input).map_err(Either::Right)?;
        Ok(a.concat(b))
    }
}

impl<P, Q> Printer for Join<P, Q>
where
    P: Printer,
    Q: Printer<Input = P::Input>,
    P::Output: Concat<Q::Output>,
{
    type PrintError = Either<P::PrintError, Q::PrintError>;

    fn print(&self, output: Self::Output, buffer: &mut Buffer<P>) -> Result<(), Self::PrintError> {
        let (a, b) = <P::Output as Concat<Q::Output>>::split(output);
        self.1.print(b, buffer).map_err(Either::Right)?;
        self.0.print(a, buffer).map_err(Either::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_and_split_are_inverse() {
        let joined = (1, 'a').concat(("b", 2.5));
        assert_eq!(joined, (1, 'a', "b", 2.5));
        assert_eq!(<(i32, char) as Concat<(&str, f64)>>::split(joined), ((1, 'a'), ("b", 2.5)));

        assert_eq!(().concat(()), ());
        assert_eq!((1,).concat(()), (1,));
        assert_eq!(().concat((1, 2)), (1, 2));
    }
}

//! Primitive parsers that do not look at item values.
//!
//! - [`consume`] / [`discard`]: exactly `n` items.
//! - [`rest`]: everything that is left.
//! - [`end`]: succeed only on empty input.
//! - [`always`] / [`fail`]: the identity and the bottom of the algebra.
//! - [`lazy`]: build the inner parser on each call (recursive grammars).
//! - [`from_fn`]: adapt a plain function.

use std::{fmt, marker::PhantomData};

use crate::{
    error::{Constraint, Failure, Found, Never},
    input::{Input, Printable},
    parser::{Parser, Printer},
};

/// Slice off exactly `count` items.
///
/// If fewer are available this fails with [`Constraint`] (`actual` is how many there were) and
/// leaves the input untouched.
///
/// ## Examples
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = "abcd";
/// assert_eq!(consume(3).parse(&mut input), Ok("abc"));
/// assert_eq!(consume(3).parse(&mut input), Err(Constraint::exactly(3, 1)));
/// assert_eq!(input, "d");
/// ```
pub fn consume<I: Input>(count: usize) -> Consume<I> {
    Consume { count, _input: PhantomData }
}

/// Parser returned by [`consume`].
#[derive(Clone, Copy, Debug)]
pub struct Consume<I> {
    count: usize,
    _input: PhantomData<fn() -> I>,
}

fn take_exactly<I: Input>(input: &mut I, count: usize) -> Result<I::Slice, Constraint> {
    let start = input.checkpoint();
    let taken = input.advance(count);
    if taken < count {
        input.rollback(start);
        return Err(Constraint::exactly(count, taken));
    }
    let end = input.checkpoint();
    Ok(I::slice(start, end))
}

impl<I: Input> Parser for Consume<I> {
    type Input = I;
    type Output = I::Slice;
    type Error = Constraint;

    fn parse(&self, input: &mut I) -> Result<I::Slice, Constraint> {
        take_exactly(input, self.count)
    }
}

impl<I> Printer for Consume<I>
where
    I: Printable,
    I::Slice: Input,
{
    type PrintError = Constraint;

    fn print(&self, slice: I::Slice, buffer: &mut I::Buffer) -> Result<(), Constraint> {
        let len = slice.remaining();
        if len != self.count {
            return Err(Constraint::exactly(self.count, len));
        }
        I::prepend_slice(buffer, slice);
        Ok(())
    }
}

/// Skip exactly `count` items.
///
/// Like [`consume`], but the output is `()`. There is no printer: the skipped items are unknown.
pub fn discard<I: Input>(count: usize) -> Discard<I> {
    Discard { count, _input: PhantomData }
}

/// Parser returned by [`discard`].
#[derive(Clone, Copy, Debug)]
pub struct Discard<I> {
    count: usize,
    _input: PhantomData<fn() -> I>,
}

impl<I: Input> Parser for Discard<I> {
    type Input = I;
    type Output = ();
    type Error = Constraint;

    fn parse(&self, input: &mut I) -> Result<(), Constraint> {
        take_exactly(input, self.count).map(drop)
    }
}

/// Consume the rest of the input.
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = "tail";
/// assert_eq!(rest().parse(&mut input), Ok("tail"));
/// assert_eq!(input, "");
/// ```
pub fn rest<I: Input>() -> Rest<I> {
    Rest(PhantomData)
}

/// Parser returned by [`rest`].
#[derive(Clone, Copy, Debug)]
pub struct Rest<I>(PhantomData<fn() -> I>);

impl<I: Input> Parser for Rest<I> {
    type Input = I;
    type Output = I::Slice;
    type Error = Never;

    fn parse(&self, input: &mut I) -> Result<I::Slice, Never> {
        let start = input.checkpoint();
        input.advance(usize::MAX);
        let end = input.checkpoint();
        Ok(I::slice(start, end))
    }
}

impl<I: Printable> Printer for Rest<I> {
    type PrintError = Never;

    fn print(&self, slice: I::Slice, buffer: &mut I::Buffer) -> Result<(), Never> {
        I::prepend_slice(buffer, slice);
        Ok(())
    }
}

/// Succeed without consuming anything iff the input is empty.
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = "";
/// assert_eq!(end().parse(&mut input), Ok(()));
///
/// let mut input = "xy";
/// let err = end().parse(&mut input).unwrap_err();
/// assert_eq!(err.to_string(), "expected end of input, found 2 remaining items at position 0");
/// ```
pub fn end<I: Input>() -> End<I> {
    End(PhantomData)
}

/// Parser returned by [`end`].
#[derive(Clone, Copy, Debug)]
pub struct End<I>(PhantomData<fn() -> I>);

fn not_at_end<Item>(remaining: usize) -> Failure<Item> {
    Failure::Mismatch { expected: "end of input".into(), found: Found::Remaining(remaining), position: 0 }
}

impl<I: Input> Parser for End<I> {
    type Input = I;
    type Output = ();
    type Error = Failure<I::Item>;

    fn parse(&self, input: &mut I) -> Result<(), Self::Error> {
        if input.is_empty() {
            Ok(())
        } else {
            Err(not_at_end(input.remaining()))
        }
    }
}

/// Printing runs back to front, so the buffer must still be empty when `end` prints.
impl<I: Printable> Printer for End<I> {
    type PrintError = Failure<I::Item>;

    fn print(&self, (): (), buffer: &mut I::Buffer) -> Result<(), Self::PrintError> {
        match I::buffer_len(buffer) {
            0 => Ok(()),
            len => Err(not_at_end(len)),
        }
    }
}

/// Succeed with a clone of `value` without touching the input.
pub fn always<I: Input, V: Clone>(value: V) -> Always<I, V> {
    Always { value, _input: PhantomData }
}

/// Parser returned by [`always`].
#[derive(Clone, Copy, Debug)]
pub struct Always<I, V> {
    value: V,
    _input: PhantomData<fn() -> I>,
}

impl<I: Input, V: Clone> Parser for Always<I, V> {
    type Input = I;
    type Output = V;
    type Error = Never;

    fn parse(&self, _input: &mut I) -> Result<V, Never> {
        Ok(self.value.clone())
    }
}

impl<I: Printable, V: Clone> Printer for Always<I, V> {
    type PrintError = Never;

    fn print(&self, _value: V, _buffer: &mut I::Buffer) -> Result<(), Never> {
        Ok(())
    }
}

/// Fail with a clone of `error` without touching the input.
///
/// The output type is free, so `fail` fits in any position:
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = "abc";
/// let p = fail::<&str, char, _>("unsupported");
/// assert_eq!(p.parse(&mut input), Err("unsupported"));
/// assert_eq!(input, "abc");
/// ```
pub fn fail<I: Input, O, E: Clone>(error: E) -> Fail<I, O, E> {
    Fail { error, _marker: PhantomData }
}

/// Parser returned by [`fail`].
pub struct Fail<I, O, E> {
    error: E,
    _marker: PhantomData<fn() -> (I, O)>,
}

impl<I, O, E: Clone> Clone for Fail<I, O, E> {
    fn clone(&self) -> Self {
        Fail { error: self.error.clone(), _marker: PhantomData }
    }
}

impl<I, O, E: fmt::Debug> fmt::Debug for Fail<I, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Fail").field(&self.error).finish()
    }
}

impl<I: Input, O, E: Clone> Parser for Fail<I, O, E> {
    type Input = I;
    type Output = O;
    type Error = E;

    fn parse(&self, _input: &mut I) -> Result<O, E> {
        Err(self.error.clone())
    }
}

impl<I: Printable, O, E: Clone> Printer for Fail<I, O, E> {
    type PrintError = E;

    fn print(&self, _value: O, _buffer: &mut I::Buffer) -> Result<(), E> {
        Err(self.error.clone())
    }
}

/// Build the inner parser each time this parser runs.
///
/// This is what makes recursive grammars expressible: a function returning a parser can refer
/// to itself through `lazy`, usually combined with [`Parser::boxed`].
///
/// ```
/// use recto::prelude::*;
///
/// // depth = "(" depth ")" | ""
/// fn depth<'a>() -> BoxedParser<'a, &'a str, usize, Never> {
///     lazy(depth).between(literal('('), literal(')')).map(|d: usize| d + 1).or_not().map(|d: Option<usize>| d.unwrap_or(0)).boxed()
/// }
///
/// let mut input = "((()))";
/// assert_eq!(depth().parse(&mut input), Ok(3));
/// assert_eq!(input, "");
/// ```
pub fn lazy<F, P>(build: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    Lazy(build)
}

/// Parser returned by [`lazy`].
#[derive(Clone, Copy, Debug)]
pub struct Lazy<F>(F);

impl<F, P> Parser for Lazy<F>
where
    F: Fn() -> P,
    P: Parser,
{
    type Input = P::Input;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, input: &mut P::Input) -> Result<P::Output, P::Error> {
        (self.0)().parse(input)
    }
}

impl<F, P> Printer for Lazy<F>
where
    F: Fn() -> P,
    P: Printer,
{
    type PrintError = P::PrintError;

    fn print(&self, output: P::Output, buffer: &mut <P::Input as Printable>::Buffer) -> Result<(), P::PrintError> {
        (self.0)().print(output, buffer)
    }
}

/// Use a function over the input as a parser.
///
/// ```
/// use recto::prelude::*;
///
/// let upper = from_fn(|input: &mut &str| match input.peek() {
///     Some(c) if c.is_uppercase() => Ok(input.next()),
///     _ => Err("not uppercase"),
/// });
///
/// let mut input = "Ab";
/// assert_eq!(upper.parse(&mut input), Ok(Some('A')));
/// assert_eq!(upper.parse(&mut input), Err("not uppercase"));
/// ```
pub fn from_fn<I, O, E, F>(f: F) -> FromFn<I, O, E, F>
where
    I: Input,
    F: Fn(&mut I) -> Result<O, E>,
{
    FromFn { f, _marker: PhantomData }
}

/// Parser returned by [`from_fn`].
pub struct FromFn<I, O, E, F> {
    f: F,
    _marker: PhantomData<fn(&mut I) -> Result<O, E>>,
}

impl<I, O, E, F: Clone> Clone for FromFn<I, O, E, F> {
    fn clone(&self) -> Self {
        FromFn { f: self.f.clone(), _marker: PhantomData }
    }
}

impl<I, O, E, F> Parser for FromFn<I, O, E, F>
where
    I: Input,
    F: Fn(&mut I) -> Result<O, E>,
{
    type Input = I;
    type Output = O;
    type Error = E;

    fn parse(&self, input: &mut I) -> Result<O, E> {
        (self.f)(input)
    }
}

//! Repetition.
//!
//! [`many`] repeats a parser and collects the outputs into any [`FromIterator`] container
//! (`Vec` by default). Bounds come from [`Many::at_least`], [`Many::at_most`] or
//! [`Many::count`], and [`Many::separated_by`] interleaves a separator.
//!
//! - Each attempt starts from a checkpoint. A failing element (or separator) ends the loop and
//!   the input is rolled back to before that attempt; the failure itself is discarded.
//! - Fewer elements than the minimum fails with [`Constraint`].
//!
//! - An attempt that succeeds without consuming input (element and separator together) is
//!   rolled back and ends the loop, so `many(optionally(p))` stops where `p` stops matching.

use std::{marker::PhantomData, ops};

use log::trace;

use crate::{
    error::{Constraint, Either, Iteration},
    input::Input,
    parser::{Buffer, Parser, Printer},
};

/// Count bounds accepted by [`Many::count`].
pub trait CountRange {
    /// `(min, max)` inclusive; `None` means unbounded.
    fn bounds(&self) -> (usize, Option<usize>);
}

impl CountRange for usize {
    fn bounds(&self) -> (usize, Option<usize>) {
        (*self, Some(*self))
    }
}

impl CountRange for ops::RangeFull {
    fn bounds(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

impl CountRange for ops::Range<usize> {
    fn bounds(&self) -> (usize, Option<usize>) {
        (self.start, Some(self.end.saturating_sub(1)))
    }
}

impl CountRange for ops::RangeInclusive<usize> {
    fn bounds(&self) -> (usize, Option<usize>) {
        (*self.start(), Some(*self.end()))
    }
}

impl CountRange for ops::RangeFrom<usize> {
    fn bounds(&self) -> (usize, Option<usize>) {
        (self.start, None)
    }
}

impl CountRange for ops::RangeTo<usize> {
    fn bounds(&self) -> (usize, Option<usize>) {
        (0, Some(self.end.saturating_sub(1)))
    }
}

impl CountRange for ops::RangeToInclusive<usize> {
    fn bounds(&self) -> (usize, Option<usize>) {
        (0, Some(self.end))
    }
}

/// Iterator driving the repetition loop.
///
/// `step` receives the index of the element being attempted and yields `None` to stop.
/// A step that succeeds without consuming input is discarded and ends the loop.
struct Repeat<'a, I: Input, O, F> {
    input: &'a mut I,
    step: F,
    max: usize,
    count: usize,
    is_end: bool,
    _output: PhantomData<fn() -> O>,
}

impl<'a, I, O, F> Repeat<'a, I, O, F>
where
    I: Input,
    F: FnMut(&mut I, usize) -> Option<O>,
{
    fn new(input: &'a mut I, max: usize, step: F) -> Self {
        Repeat { input, step, max, count: 0, is_end: false, _output: PhantomData }
    }
}

impl<I, O, F> Iterator for Repeat<'_, I, O, F>
where
    I: Input,
    F: FnMut(&mut I, usize) -> Option<O>,
{
    type Item = O;

    fn next(&mut self) -> Option<O> {
        if self.is_end || self.count >= self.max {
            return None;
        }
        let checkpoint = self.input.checkpoint();
        match (self.step)(self.input, self.count) {
            Some(output) => {
                let here = self.input.checkpoint();
                if !I::progressed(&checkpoint, &here) {
                    trace!("many: step {} consumed nothing, stopping", self.count);
                    self.input.rollback(checkpoint);
                    self.is_end = true;
                    return None;
                }
                self.count += 1;
                Some(output)
            }
            None => {
                trace!("many: stopped after {} elements", self.count);
                self.input.rollback(checkpoint);
                self.is_end = true;
                None
            }
        }
    }
}

fn check_len(len: usize, min: usize, max: usize) -> Result<(), Constraint> {
    if len < min {
        Err(Constraint::at_least(min, len))
    } else if len > max {
        Err(Constraint::at_most(max, len))
    } else {
        Ok(())
    }
}

/// Repeat a parser zero or more times and collect the outputs.
///
/// ## Examples
///
/// ```
/// use recto::prelude::*;
///
/// let digit = first_where(|c: &char| c.is_ascii_digit());
///
/// let mut input = "123a";
/// let out: String = many(&digit).collect().parse(&mut input).unwrap();
/// assert_eq!(out, "123");
/// assert_eq!(input, "a");
///
/// let mut input = "";
/// assert_eq!(many(&digit).at_least(1).parse(&mut input), Err(Constraint::at_least(1, 0)));
/// ```
pub fn many<P: Parser>(parser: P) -> Many<P, Vec<P::Output>> {
    Many { parser, min: 0, max: usize::MAX, _collect: PhantomData }
}

/// Parser returned by [`many`].
pub struct Many<P, C> {
    parser: P,
    min: usize,
    max: usize,
    _collect: PhantomData<fn() -> C>,
}

impl<P: Clone, C> Clone for Many<P, C> {
    fn clone(&self) -> Self {
        Many { parser: self.parser.clone(), min: self.min, max: self.max, _collect: PhantomData }
    }
}

impl<P: std::fmt::Debug, C> std::fmt::Debug for Many<P, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Many").field("parser", &self.parser).field("min", &self.min).field("max", &self.max).finish()
    }
}

impl<P, C> Many<P, C> {
    /// Require at least `min` elements.
    pub fn at_least(self, min: usize) -> Self {
        Many { min, ..self }
    }

    /// Stop after `max` elements.
    pub fn at_most(self, max: usize) -> Self {
        Many { max, ..self }
    }

    /// Set both bounds from a range: `3`, `2..5`, `1..`, `..=4`, ...
    ///
    /// ```
    /// use recto::prelude::*;
    ///
    /// let mut input = "aaaa";
    /// let out = many(literal('a')).count(2..=3).parse(&mut input).unwrap();
    /// assert_eq!(out.len(), 3);
    /// assert_eq!(input, "a");
    /// ```
    pub fn count(self, range: impl CountRange) -> Self {
        let (min, max) = range.bounds();
        Many { min, max: max.unwrap_or(usize::MAX), ..self }
    }

    /// Collect into a different container.
    pub fn collect<C2>(self) -> Many<P, C2> {
        Many { parser: self.parser, min: self.min, max: self.max, _collect: PhantomData }
    }

    /// Interleave `separator` between elements.
    ///
    /// ```
    /// use recto::prelude::*;
    ///
    /// let list = many(first_where(|c: &char| c.is_ascii_digit())).separated_by(literal(','));
    ///
    /// let mut input = "1,2,3,";
    /// assert_eq!(list.parse(&mut input), Ok(vec!['1', '2', '3']));
    /// assert_eq!(input, ",");
    /// ```
    pub fn separated_by<S>(self, separator: S) -> SeparatedBy<P, S, C> {
        SeparatedBy { parser: self.parser, separator, min: self.min, max: self.max, _collect: PhantomData }
    }
}

impl<P, C> Parser for Many<P, C>
where
    P: Parser,
    C: FromIterator<P::Output>,
{
    type Input = P::Input;
    type Output = C;
    type Error = Constraint;

    fn parse(&self, input: &mut P::Input) -> Result<C, Constraint> {
        let mut iter = Repeat::new(input, self.max, |input: &mut P::Input, _| self.parser.parse(input).ok());
        let collected: C = iter.by_ref().collect();
        if iter.count < self.min {
            return Err(Constraint::at_least(self.min, iter.count));
        }
        Ok(collected)
    }
}

/// Checks the bounds, then prints the elements back to front.
impl<P, C> Printer for Many<P, C>
where
    P: Printer,
    C: FromIterator<P::Output> + IntoIterator<Item = P::Output, IntoIter: DoubleEndedIterator + ExactSizeIterator>,
{
    type PrintError = Either<Constraint, Iteration<P::PrintError>>;

    fn print(&self, output: C, buffer: &mut Buffer<P>) -> Result<(), Self::PrintError> {
        let items = output.into_iter();
        check_len(items.len(), self.min, self.max).map_err(Either::Left)?;
        for (index, item) in items.enumerate().rev() {
            self.parser.print(item, buffer).map_err(|error| Either::Right(Iteration { index, error }))?;
        }
        Ok(())
    }
}

/// Parser returned by [`Many::separated_by`].
///
/// The first element is parsed alone; every further element must be preceded by the separator.
/// A trailing separator is left in the input.
pub struct SeparatedBy<P, S, C> {
    parser: P,
    separator: S,
    min: usize,
    max: usize,
    _collect: PhantomData<fn() -> C>,
}

impl<P: Clone, S: Clone, C> Clone for SeparatedBy<P, S, C> {
    fn clone(&self) -> Self {
        SeparatedBy {
            parser: self.parser.clone(),
            separator: self.separator.clone(),
            min: self.min,
            max: self.max,
            _collect: PhantomData,
        }
    }
}

impl<P, S, C> SeparatedBy<P, S, C> {
    /// Require at least `min` elements.
    pub fn at_least(self, min: usize) -> Self {
        SeparatedBy { min, ..self }
    }

    /// Stop after `max` elements.
    pub fn at_most(self, max: usize) -> Self {
        SeparatedBy { max, ..self }
    }

    /// Collect into a different container.
    pub fn collect<C2>(self) -> SeparatedBy<P, S, C2> {
        SeparatedBy { parser: self.parser, separator: self.separator, min: self.min, max: self.max, _collect: PhantomData }
    }
}

impl<P, S, C> Parser for SeparatedBy<P, S, C>
where
    P: Parser,
    S: Parser<Input = P::Input>,
    C: FromIterator<P::Output>,
{
    type Input = P::Input;
    type Output = C;
    type Error = Constraint;

    fn parse(&self, input: &mut P::Input) -> Result<C, Constraint> {
        let mut iter = Repeat::new(input, self.max, |input: &mut P::Input, index| {
            if index > 0 {
                self.separator.parse(input).ok()?;
            }
            self.parser.parse(input).ok()
        });
        let collected: C = iter.by_ref().collect();
        if iter.count < self.min {
            return Err(Constraint::at_least(self.min, iter.count));
        }
        Ok(collected)
    }
}

impl<P, S, C> Printer for SeparatedBy<P, S, C>
where
    P: Printer,
    S: Printer<Input = P::Input, Output = ()>,
    C: FromIterator<P::Output> + IntoIterator<Item = P::Output, IntoIter: DoubleEndedIterator + ExactSizeIterator>,
{
    type PrintError = Either<Constraint, Iteration<Either<P::PrintError, S::PrintError>>>;

    fn print(&self, output: C, buffer: &mut Buffer<P>) -> Result<(), Self::PrintError> {
        let items = output.into_iter();
        check_len(items.len(), self.min, self.max).map_err(Either::Left)?;
        for (index, item) in items.enumerate().rev() {
            self.parser.print(item, buffer).map_err(|error| Either::Right(Iteration { index, error: Either::Left(error) }))?;
            if index > 0 {
                self.separator.print((), buffer).map_err(|error| Either::Right(Iteration { index, error: Either::Right(error) }))?;
            }
        }
        Ok(())
    }
}

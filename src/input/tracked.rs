//! Position tracking for diagnostics.
//!
//! [`Tracked`] wraps any [`Input`] and feeds every consumed item into a [`Counter`]. Parsers do
//! not know whether their input is tracked; only code that wants positions has to ask for them.
//!
//! The checkpoint of a tracked input is the pair `(base checkpoint, counter checkpoint)`, so a
//! rollback restores the consumed prefix and the position together.

use crate::input::{Back, Input, Printable};

/// Position counter fed with each consumed item.
pub trait Counter<Item>: Back {
    type Pos;
    /// Feed one consumed item into the counter.
    fn feed(&mut self, item: &Item);
    /// Current position derived from the counter state.
    fn pos(&self) -> Self::Pos;
}

/// Counts consumed items.
impl<T> Counter<T> for usize {
    type Pos = usize;

    fn feed(&mut self, _item: &T) {
        *self += 1;
    }

    fn pos(&self) -> usize {
        *self
    }
}

/// 1-based line and column for `char` inputs.
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = "ab\nc".with_counter(LineColumn::default());
/// input.advance(3);
/// assert_eq!(input.pos(), LineColumn { line: 2, column: 1 });
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineColumn {
    pub line: usize,
    pub column: usize,
}

impl Default for LineColumn {
    fn default() -> Self {
        LineColumn { line: 1, column: 1 }
    }
}

impl Counter<char> for LineColumn {
    type Pos = LineColumn;

    fn feed(&mut self, item: &char) {
        if *item == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    fn pos(&self) -> LineColumn {
        *self
    }
}

/// An input wrapper that tracks how far it has been consumed.
#[derive(Debug)]
pub struct Tracked<I, C = usize> {
    /// The underlying input.
    pub input: I,
    /// The counter state.
    pub counter: C,
}

impl<I> Tracked<I> {
    /// Track the number of consumed items, starting at zero.
    pub fn new(input: I) -> Self {
        Tracked { input, counter: 0 }
    }

    /// Number of items consumed so far.
    pub fn offset(&self) -> usize {
        self.counter
    }
}

impl<I, C> Tracked<I, C> {
    /// Track positions with a user-defined counter.
    pub fn with_counter(input: I, counter: C) -> Self {
        Tracked { input, counter }
    }

    /// Get a reference to the underlying input.
    pub fn inner(&self) -> &I {
        &self.input
    }

    /// Unwrap the underlying input, dropping the counter.
    pub fn into_inner(self) -> I {
        self.input
    }

    /// Current position reported by the counter.
    pub fn pos<P>(&self) -> P
    where
        I: Input,
        C: Counter<I::Item, Pos = P>,
    {
        self.counter.pos()
    }
}

impl<I, C> Back for Tracked<I, C>
where
    I: Input,
    C: Counter<I::Item>,
{
    type Checkpoint = (I::Checkpoint, C::Checkpoint);
    fn checkpoint(&mut self) -> Self::Checkpoint {
        (self.input.checkpoint(), self.counter.checkpoint())
    }
    fn rollback(&mut self, (input, counter): Self::Checkpoint) {
        self.input.rollback(input);
        self.counter.rollback(counter);
    }
}

impl<I, C> Input for Tracked<I, C>
where
    I: Input,
    C: Counter<I::Item>,
{
    type Item = I::Item;
    type Slice = I::Slice;

    fn remaining(&self) -> usize {
        self.input.remaining()
    }

    fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    fn peek(&self) -> Option<I::Item> {
        self.input.peek()
    }

    fn next(&mut self) -> Option<I::Item> {
        let item = self.input.next()?;
        self.counter.feed(&item);
        Some(item)
    }

    fn slice(start: Self::Checkpoint, end: Self::Checkpoint) -> I::Slice {
        I::slice(start.0, end.0)
    }

    fn progressed(start: &Self::Checkpoint, end: &Self::Checkpoint) -> bool {
        I::progressed(&start.0, &end.0)
    }
}

impl<I, C> Printable for Tracked<I, C>
where
    I: Printable,
    C: Counter<I::Item>,
{
    type Buffer = I::Buffer;

    fn prepend_item(buffer: &mut I::Buffer, item: I::Item) {
        I::prepend_item(buffer, item);
    }

    fn prepend_slice(buffer: &mut I::Buffer, slice: I::Slice) {
        I::prepend_slice(buffer, slice);
    }

    fn buffer_len(buffer: &I::Buffer) -> usize {
        I::buffer_len(buffer)
    }
}

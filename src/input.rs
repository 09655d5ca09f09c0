//! Low-level input traits.
//!
//! This module defines the abstraction that parsers consume and printers produce.
//!
//! - [`Input`] is a consumable sequence with O(1) prefix removal for slices.
//! - [`Back`] provides `checkpoint()` / `rollback()` for local backtracking.
//! - [`Printable`] names the buffer a printer prepends into.
//!
//! Parsers never roll back on their own. Only combinators that explicitly backtrack
//! (`one_of`, `many`, `optionally`, ...) take a checkpoint and restore it.

pub mod tracked;

use std::collections::VecDeque;

pub use tracked::{Counter, LineColumn, Tracked};

/// Core input trait consumed by parsers.
pub trait Input: Back {
    /// Item type returned by [`Input::next`].
    type Item: Clone;
    /// The value produced when slicing between two checkpoints.
    type Slice;

    /// Number of items left. May be O(n) (e.g. counting `char`s in a `&str`).
    fn remaining(&self) -> usize;
    /// Whether no items are left.
    fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
    /// Look at the first item without consuming it.
    fn peek(&self) -> Option<Self::Item>;
    /// Consume one item from the front.
    fn next(&mut self) -> Option<Self::Item>;
    /// Consume up to `n` items from the front, returning how many were actually consumed.
    fn advance(&mut self, n: usize) -> usize {
        let mut consumed = 0;
        while consumed < n && self.next().is_some() {
            consumed += 1;
        }
        consumed
    }
    /// Return the chunk consumed to get from `start` to `end`.
    ///
    /// `end` must have been taken after `start` on the same input.
    fn slice(start: Self::Checkpoint, end: Self::Checkpoint) -> Self::Slice;
    /// Whether anything was consumed between `start` and `end`.
    fn progressed(start: &Self::Checkpoint, end: &Self::Checkpoint) -> bool;

    /// Wrap this input with a counter to track position.
    ///
    /// ## Examples
    ///
    /// ```
    /// use recto::prelude::*;
    ///
    /// let mut input = "hello".with_counter(0usize);
    /// assert_eq!(input.pos(), 0);
    /// input.next();
    /// assert_eq!(input.pos(), 1);
    /// ```
    fn with_counter<C: Counter<Self::Item>>(self, counter: C) -> Tracked<Self, C>
    where
        Self: Sized,
    {
        Tracked::with_counter(self, counter)
    }
}

/// Rollback support for local backtracking.
pub trait Back {
    /// A clonable checkpoint that can restore the input to an earlier state.
    type Checkpoint: Clone;
    /// Create a rollback checkpoint.
    fn checkpoint(&mut self) -> Self::Checkpoint;
    /// Roll back the input to a previously created checkpoint.
    fn rollback(&mut self, checkpoint: Self::Checkpoint);
}
impl<T: Clone> Back for T {
    type Checkpoint = T;
    fn checkpoint(&mut self) -> Self::Checkpoint {
        self.clone()
    }
    fn rollback(&mut self, checkpoint: Self::Checkpoint) {
        *self = checkpoint;
    }
}

/// Inputs that have a matching output buffer for printing.
///
/// Printers run in reverse order relative to parsing, so every operation here *prepends*.
pub trait Printable: Input {
    type Buffer: Default + Clone;
    fn prepend_item(buffer: &mut Self::Buffer, item: Self::Item);
    fn prepend_slice(buffer: &mut Self::Buffer, slice: Self::Slice);
    /// Number of items already printed into `buffer`.
    fn buffer_len(buffer: &Self::Buffer) -> usize;
}

impl<'a> Input for &'a str {
    type Item = char;
    type Slice = &'a str;

    fn remaining(&self) -> usize {
        self.chars().count()
    }
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
    fn peek(&self) -> Option<char> {
        self.chars().next()
    }
    /// Consume one `char` from the front of the string.
    fn next(&mut self) -> Option<char> {
        let mut chars = self.chars();
        let c = chars.next();
        *self = chars.as_str();
        c
    }
    fn advance(&mut self, n: usize) -> usize {
        let s: &'a str = *self;
        match s.char_indices().nth(n) {
            Some((at, _)) => {
                *self = &s[at..];
                n
            }
            None => {
                *self = &s[s.len()..];
                s.chars().count()
            }
        }
    }
    /// Return the prefix of `start` that was consumed to reach `end`.
    fn slice(start: &'a str, end: &'a str) -> &'a str {
        &start[0..(start.len() - end.len())]
    }
    fn progressed(start: &&'a str, end: &&'a str) -> bool {
        start.len() != end.len()
    }
}

impl<'a> Printable for &'a str {
    type Buffer = String;
    fn prepend_item(buffer: &mut String, item: char) {
        buffer.insert(0, item);
    }
    fn prepend_slice(buffer: &mut String, slice: &'a str) {
        buffer.insert_str(0, slice);
    }
    fn buffer_len(buffer: &String) -> usize {
        buffer.chars().count()
    }
}

impl<'a, T> Input for &'a [T]
where
    T: Clone,
{
    type Item = T;
    type Slice = &'a [T];

    fn remaining(&self) -> usize {
        self.len()
    }
    fn peek(&self) -> Option<T> {
        self.first().cloned()
    }
    fn next(&mut self) -> Option<T> {
        let s: &'a [T] = *self;
        let (first, rest) = s.split_first()?;
        *self = rest;
        Some(first.clone())
    }
    fn advance(&mut self, n: usize) -> usize {
        let s: &'a [T] = *self;
        let consumed = n.min(s.len());
        *self = &s[consumed..];
        consumed
    }
    fn slice(start: &'a [T], end: &'a [T]) -> &'a [T] {
        &start[0..(start.len() - end.len())]
    }
    fn progressed(start: &&'a [T], end: &&'a [T]) -> bool {
        start.len() != end.len()
    }
}

impl<'a, T> Printable for &'a [T]
where
    T: Clone,
{
    type Buffer = VecDeque<T>;
    fn prepend_item(buffer: &mut VecDeque<T>, item: T) {
        buffer.push_front(item);
    }
    fn prepend_slice(buffer: &mut VecDeque<T>, slice: &'a [T]) {
        for item in slice.iter().rev() {
            buffer.push_front(item.clone());
        }
    }
    fn buffer_len(buffer: &VecDeque<T>) -> usize {
        buffer.len()
    }
}

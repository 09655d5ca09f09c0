//! Set-like predicates for item parsers.
//!
//! [`crate::parser::item::first_where`] and [`crate::parser::prefix::prefix_while`] accept any
//! [`ItemSet`]. This module implements it for common Rust types:
//!
//! - `&str` and `char` for `char` inputs
//! - range types like `..`, `..=`, `a..b`, etc.
//! - predicates (`Fn(&Item) -> bool`)
//!
//! Sets combine with [`ItemSet::cap`] (intersection), [`ItemSet::union`], [`ItemSet::sub`]
//! (difference), and [`ItemSet::complement`].
//!
//! ```rust
//! use recto::parser::item::set::ItemSet;
//!
//! let letters = ('a'..='z').union('A'..='Z');
//! assert!(letters.has(&'q'));
//! assert!(letters.has(&'Q'));
//! assert!(!letters.has(&'9'));
//! ```

use std::ops;

/// A set-like predicate over items.
pub trait ItemSet<Item> {
    /// Return whether `item` is in this set.
    fn has(&self, item: &Item) -> bool;

    /// Intersection.
    fn cap<A: ItemSet<Item>>(self, other: A) -> Intersection<Self, A>
    where
        Self: Sized,
    {
        Intersection(self, other)
    }

    /// Union.
    fn union<A: ItemSet<Item>>(self, other: A) -> Union<Self, A>
    where
        Self: Sized,
    {
        Union(self, other)
    }

    /// Difference (`self \\ other`).
    fn sub<A: ItemSet<Item>>(self, other: A) -> Difference<Self, A>
    where
        Self: Sized,
    {
        Difference(self, other)
    }

    /// Complement.
    fn complement(self) -> Complement<Self>
    where
        Self: Sized,
    {
        Complement(self)
    }
}

impl<'a> ItemSet<char> for &'a str {
    fn has(&self, item: &char) -> bool {
        self.contains(*item)
    }
}

impl ItemSet<char> for char {
    fn has(&self, item: &char) -> bool {
        self == item
    }
}

impl<Item, F: Fn(&Item) -> bool> ItemSet<Item> for F {
    fn has(&self, item: &Item) -> bool {
        self(item)
    }
}

macro_rules! set_op {
    ($(#[$doc:meta])* $Name:ident<$($T:ident),+>, |$set:ident, $item:ident| $has:expr) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Hash)]
        pub struct $Name<$($T),+>($(pub $T),+);

        impl<Item, $($T: ItemSet<Item>),+> ItemSet<Item> for $Name<$($T),+> {
            fn has(&self, $item: &Item) -> bool {
                let $set = self;
                $has
            }
        }
    };
}

set_op!(
    /// Items in both sets.
    Intersection<A, B>,
    |set, item| set.0.has(item) && set.1.has(item)
);
set_op!(
    /// Items in either set.
    Union<A, B>,
    |set, item| set.0.has(item) || set.1.has(item)
);
set_op!(
    /// Items in the first set but not the second.
    Difference<A, B>,
    |set, item| set.0.has(item) && !set.1.has(item)
);
set_op!(
    /// Items outside the set.
    Complement<A>,
    |set, item| !set.0.has(item)
);

impl<T> ItemSet<T> for ops::RangeFull {
    fn has(&self, _: &T) -> bool {
        true
    }
}

macro_rules! impl_range {
    ($($Range:ident),+) => {$(
        impl<T: PartialOrd> ItemSet<T> for ops::$Range<T> {
            fn has(&self, item: &T) -> bool {
                self.contains(item)
            }
        }
    )+};
}

impl_range!(Range, RangeFrom, RangeInclusive, RangeTo, RangeToInclusive);

//! A convenience prelude for `recto`.

pub use crate::{
    error::{
        never_left, never_right, Aggregate, Bound, Constraint, Either, Failure, Found, Iteration, Never, Reject, Validation,
    },
    input::{Back, Counter, Input, LineColumn, Printable, Tracked},
    parse::{parse, parse_complete, print, ParseError},
    parser::{BoxedParser, Buffer, Parser, Printer},
};

// Function-level constructors.
pub use crate::char::{
    ascii, ascii_alpha, ascii_alphanumeric, ascii_digit, ascii_hexdigit, digits, space, ws, ws1, ASCII, ASCII_ALPHA,
    ASCII_ALPHANUM, ASCII_DIGIT, ASCII_HEXDIGIT, SPACE,
};
pub use crate::parser::choice::{one_of, one_of_any};
pub use crate::parser::flow::{branch, each, identity, when};
pub use crate::parser::item::{first, first_where, set::ItemSet as _};
pub use crate::parser::many::{many, CountRange as _};
pub use crate::parser::option::{optional, optionally};
pub use crate::parser::prefix::{prefix_through, prefix_up_to, prefix_while, Missing};
pub use crate::parser::prim::{always, consume, discard, end, fail, from_fn, lazy, rest};
pub use crate::parser::seq::{sequence, Concat as _};
pub use crate::parser::then::{between, left, right, then};
pub use crate::parser::token::literal;

//! High-level entry points to run parsers and printers.

use log::debug;

use crate::{
    input::Input,
    parser::{Buffer, Parser, Printer},
};

/// Error returned by [`parse_complete`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError<E> {
    /// The parser itself failed.
    #[error("{0}")]
    Parser(E),
    /// The parser succeeded but left input behind.
    #[error("input not fully consumed: {remaining} {} left", crate::error::items(.remaining))]
    TrailingInput { remaining: usize },
}

/// Run a parser once, advancing `input` past what it consumed.
///
/// ```
/// use recto::prelude::*;
///
/// let mut input = "ab";
/// assert_eq!(parse(&first(), &mut input), Ok('a'));
/// assert_eq!(input, "b");
/// ```
pub fn parse<P: Parser>(parser: &P, input: &mut P::Input) -> Result<P::Output, P::Error> {
    parser.parse(input)
}

/// Run a parser and require it to consume the whole input.
///
/// ```
/// use recto::prelude::*;
///
/// assert_eq!(parse_complete(&digits(), "42"), Ok("42"));
/// assert_eq!(parse_complete(&digits(), "42px"), Err(ParseError::TrailingInput { remaining: 2 }));
///
/// let err = parse_complete(&digits(), "42!").unwrap_err();
/// assert_eq!(err.to_string(), "input not fully consumed: 1 item left");
/// ```
pub fn parse_complete<P: Parser>(parser: &P, mut input: P::Input) -> Result<P::Output, ParseError<P::Error>> {
    let output = parser.parse(&mut input).map_err(ParseError::Parser)?;
    if !input.is_empty() {
        let remaining = input.remaining();
        debug!("parse_complete: {remaining} items left after a successful parse");
        return Err(ParseError::TrailingInput { remaining });
    }
    Ok(output)
}

/// Print a value into a fresh buffer.
///
/// ```
/// use recto::prelude::*;
///
/// let pair = digits::<&str>().left(literal(',')).then(digits());
/// assert_eq!(print(&pair, ("1", "2")).unwrap(), "1,2");
/// ```
pub fn print<P: Printer>(printer: &P, value: P::Output) -> Result<Buffer<P>, P::PrintError> {
    let mut buffer: Buffer<P> = Default::default();
    printer.print(value, &mut buffer)?;
    Ok(buffer)
}

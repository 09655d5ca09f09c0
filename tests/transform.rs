use std::num::ParseIntError;

use recto::prelude::*;

#[test]
fn map_transforms_output() {
    let mut input = "7";
    assert_eq!(ascii_digit().map(|c: char| c.to_digit(10)).parse(&mut input), Ok(Some(7)));
}

#[test]
fn try_map_tags_conversion_errors() {
    let number = digits().try_map(|s: &str| s.parse::<u8>());

    let mut input = "42";
    assert_eq!(number.parse(&mut input), Ok(42));

    let mut input = "x";
    assert_eq!(number.parse(&mut input), Err(Either::Left(Constraint::at_least(1, 0))));

    let mut input = "300";
    let err = number.parse(&mut input).unwrap_err();
    let expected: ParseIntError = "300".parse::<u8>().unwrap_err();
    assert_eq!(err, Either::Right(expected));
}

#[test]
fn filter_adds_the_rejection_to_the_upstream_error() {
    let short = digits().filter(|s: &&str| s.len() <= 2, "too many digits");

    let mut input = "12";
    assert_eq!(short.parse(&mut input), Ok("12"));

    let mut input = "1234";
    assert_eq!(short.parse(&mut input), Err(Either::Right(Validation::new(&"1234", "too many digits"))));

    let mut input = "x";
    assert_eq!(short.parse(&mut input), Err(Either::Left(Constraint::at_least(1, 0))));
}

#[test]
fn filter_on_leaf_failures_keeps_the_error_type() {
    let even = ascii_digit().filter(|c: &char| *c != '1', "one");
    let mut input = "1";
    assert_eq!(even.parse(&mut input), Err(Failure::Validation(Validation::new(&'1', "one"))));
}

#[test]
fn filter_infallible_parsers() {
    let non_empty = rest::<&str>().filter(|s: &&str| !s.is_empty(), "empty");

    let mut input = "abc";
    assert_eq!(non_empty.parse(&mut input), Ok("abc"));
    assert_eq!(input, "");

    let mut input = "";
    assert_eq!(non_empty.parse(&mut input), Err(Validation::new(&"", "empty")));

    let signed = optionally(literal::<&str, _>('-')).filter(|sign: &Option<()>| sign.is_some(), "unsigned");
    let mut input = "5";
    assert_eq!(signed.parse(&mut input), Err(Validation::new(&None::<()>, "unsigned")));

    let answer = always::<&str, _>(42).filter(|n: &i32| *n == 42, "wrong answer");
    assert_eq!(answer.parse(&mut "anything"), Ok(42));
}

#[test]
fn filter_prefix_while_directly() {
    let lower = prefix_while::<&str, _>(ASCII_ALPHA)
        .filter(|s: &&str| s.chars().all(|c| c.is_ascii_lowercase()), "not lowercase");

    let mut input = "abc1";
    assert_eq!(lower.parse(&mut input), Ok("abc"));
    assert_eq!(input, "1");

    let mut input = "aBc";
    assert_eq!(lower.parse(&mut input), Err(Either::Right(Validation::new(&"aBc", "not lowercase"))));
}

#[test]
fn filter_printers_add_the_rejection_too() {
    let non_empty = rest::<&str>().filter(|s: &&str| !s.is_empty(), "empty");
    assert_eq!(print(&non_empty, "ab"), Ok("ab".to_string()));
    assert_eq!(print(&non_empty, ""), Err(Validation::new(&"", "empty")));
}

#[test]
fn flat_map_chooses_the_next_parser() {
    let counted = digits().try_map(|s: &str| s.parse::<usize>()).flat_map(|n: usize| consume(n));

    let mut input = "3abcd";
    assert_eq!(counted.parse(&mut input), Ok("abc"));
    assert_eq!(input, "d");

    let mut input = "9ab";
    assert_eq!(counted.parse(&mut input), Err(Either::Right(Constraint::exactly(9, 2))));
}

#[test]
fn map_err_replaces_the_error() {
    let digit = ascii_digit().map_err(|e: Failure<char>| e.to_string());
    let mut input = "z";
    assert_eq!(digit.parse(&mut input), Err("expected ASCII digit, found 'z' at position 0".to_string()));
}

#[test]
fn to_replaces_output_with_a_constant() {
    #[derive(Clone, Debug, PartialEq)]
    enum Op {
        Add,
        Sub,
    }

    let op = literal('+').to(Op::Add).or(literal('-').to(Op::Sub));
    let mut input = "-+";
    assert_eq!(op.parse(&mut input), Ok(Op::Sub));
    assert_eq!(op.parse(&mut input), Ok(Op::Add));
}

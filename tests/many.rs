use recto::prelude::*;

#[test]
fn many_collects_until_failure() {
    let mut input = "123a";
    assert_eq!(many(ascii_digit()).parse(&mut input), Ok(vec!['1', '2', '3']));
    assert_eq!(input, "a");
}

#[test]
fn many_accepts_zero_elements() {
    let mut input = "abc";
    assert_eq!(ascii_digit().many().parse(&mut input), Ok(vec![]));
    assert_eq!(input, "abc");
}

#[test]
fn many_at_least_one_on_empty_input() {
    let mut input = "";
    assert_eq!(ascii_digit().many().at_least(1).parse(&mut input), Err(Constraint::at_least(1, 0)));
}

#[test]
fn many_rolls_back_the_failed_attempt() {
    let mut input = "ababac";
    let pairs = many(literal("ab")).parse(&mut input).map(|v| v.len());
    assert_eq!(pairs, Ok(2));
    assert_eq!(input, "ac");
}

#[test]
fn many_stops_at_maximum() {
    let mut input = "12345";
    let out: String = many(ascii_digit()).at_most(3).collect().parse(&mut input).unwrap();
    assert_eq!(out, "123");
    assert_eq!(input, "45");
}

#[test]
fn many_count_ranges() {
    let up_to_three = many(ascii_digit()).count(2..4);
    let mut input = "12345";
    assert_eq!(up_to_three.parse(&mut input).map(|v| v.len()), Ok(3));
    assert_eq!(input, "45");

    let mut input = "1a";
    assert_eq!(up_to_three.parse(&mut input), Err(Constraint::at_least(2, 1)));

    let mut input = "123";
    assert_eq!(many(ascii_digit()).count(2).parse(&mut input), Ok(vec!['1', '2']));
    assert_eq!(input, "3");

    let mut input = "123";
    assert_eq!(many(ascii_digit()).count(..=1).parse(&mut input), Ok(vec!['1']));
    assert_eq!(many(ascii_digit()).count(..).parse(&mut input), Ok(vec!['2', '3']));
}

#[test]
fn many_over_tokens() {
    let mut input: &[u8] = b"aaab";
    let run = many(literal(&[b'a'])).parse(&mut input).map(|v| v.len());
    assert_eq!(run, Ok(3));
    assert_eq!(input, b"b");
}

#[test]
fn separated_by_leaves_trailing_separator() {
    let list = many(ascii_digit()).separated_by(literal(','));
    let mut input = "1,2,3,";
    assert_eq!(list.parse(&mut input), Ok(vec!['1', '2', '3']));
    assert_eq!(input, ",");
}

#[test]
fn separated_by_is_empty_when_the_first_element_fails() {
    let list = many(ascii_digit()).separated_by(literal(','));
    let mut input = "x,1";
    assert_eq!(list.parse(&mut input), Ok(vec![]));
    assert_eq!(input, "x,1");
}

#[test]
fn separated_by_requires_minimum() {
    let list = many(ascii_digit()).at_least(2).separated_by(literal(','));
    let mut input = "x";
    assert_eq!(list.parse(&mut input), Err(Constraint::at_least(2, 0)));
    let mut input = "1,x";
    assert_eq!(list.parse(&mut input), Err(Constraint::at_least(2, 1)));
}

#[test]
fn separated_by_respects_maximum() {
    let list = many(digits()).separated_by(literal(", ")).at_most(2);
    let mut input = "10, 20, 30";
    assert_eq!(list.parse(&mut input), Ok(vec!["10", "20"]));
    assert_eq!(input, ", 30");
}

#[test]
fn many_stops_when_an_element_consumes_nothing() {
    let mut input = "abc";
    assert_eq!(many(always::<&str, _>(())).parse(&mut input), Ok(vec![]));
    assert_eq!(input, "abc");

    let mut input = "abc";
    assert_eq!(many(always::<&str, _>(())).at_least(1).parse(&mut input), Err(Constraint::at_least(1, 0)));
}

#[test]
fn many_optionally_stops_where_the_inner_parser_does() {
    let mut input = "xxa";
    assert_eq!(many(optionally(literal('x'))).parse(&mut input), Ok(vec![Some(()), Some(())]));
    assert_eq!(input, "a");

    let mut input = "";
    assert_eq!(many(optionally(literal::<&str, _>('x'))).parse(&mut input), Ok(vec![]));
}

#[test]
fn separated_by_counts_the_separator_as_progress() {
    let list = many(optionally(ascii_digit())).separated_by(literal(','));

    let mut input = "1,,2x";
    assert_eq!(list.parse(&mut input), Ok(vec![Some('1'), None, Some('2')]));
    assert_eq!(input, "x");

    let mut input = "x";
    assert_eq!(list.parse(&mut input), Ok(vec![]));
    assert_eq!(input, "x");
}

#[test]
fn zero_progress_guard_on_tracked_input() {
    let mut input = Tracked::new("ab");
    assert_eq!(many(optionally(literal('a'))).parse(&mut input), Ok(vec![Some(())]));
    assert_eq!(input.offset(), 1);
}

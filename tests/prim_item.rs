use recto::prelude::*;

#[test]
fn first_takes_one_item() {
    let mut input = "ab";
    assert_eq!(first().parse(&mut input), Ok('a'));
    assert_eq!(input, "b");
}

#[test]
fn first_on_empty_input() {
    let mut input = "";
    assert_eq!(first().parse(&mut input), Err(Failure::end_of_input("any item")));
}

#[test]
fn first_where_keeps_mismatching_item() {
    let mut input = "x1";
    let digit = first_where(|c: &char| c.is_ascii_digit()).label("digit");
    assert_eq!(digit.parse(&mut input), Err(Failure::mismatch("digit", 'x', 0)));
    assert_eq!(input, "x1");
}

#[test]
fn first_where_accepts_item_sets() {
    let mut input = "q7";
    assert_eq!(first_where('a'..='z').parse(&mut input), Ok('q'));

    let vowel_or_digit = "aeiou".union(ASCII_DIGIT);
    assert_eq!(first_where(vowel_or_digit).parse(&mut input), Ok('7'));
    assert_eq!(first_where("xyz").parse(&mut input), Err(Failure::end_of_input("matching item")));
}

#[test]
fn first_where_over_bytes() {
    let mut input: &[u8] = b"\x01\xff";
    assert_eq!(first_where(..0x80u8).parse(&mut input), Ok(1));
    assert_eq!(first_where(..0x80u8).parse(&mut input), Err(Failure::mismatch("matching item", 0xff, 0)));
}

#[test]
fn char_helpers() {
    let mut input = " x9f";
    assert_eq!(space().parse(&mut input), Ok(' '));
    assert_eq!(ascii_alpha().parse(&mut input), Ok('x'));
    assert_eq!(ascii_alphanumeric().parse(&mut input), Ok('9'));
    assert_eq!(ascii_hexdigit().parse(&mut input), Ok('f'));
    assert_eq!(ascii().parse(&mut input), Err(Failure::end_of_input("ASCII character")));
}

#[test]
fn prefix_while_digits() {
    let mut input = "123abc";
    assert_eq!(prefix_while(|c: &char| c.is_ascii_digit()).parse(&mut input), Ok("123"));
    assert_eq!(input, "abc");
}

#[test]
fn prefix_while_bounds() {
    let mut input = "12345";
    assert_eq!(prefix_while(ASCII_DIGIT).max(2).parse(&mut input), Ok("12"));
    assert_eq!(input, "345");

    let mut input = "12x";
    assert_eq!(prefix_while(ASCII_DIGIT).min(3).parse(&mut input), Err(Constraint::at_least(3, 2)));
}

#[test]
fn ws_and_digits() {
    let mut input = "  42";
    assert_eq!(ws().parse(&mut input), Ok("  "));
    assert_eq!(ws().parse(&mut input), Ok(""));
    assert_eq!(ws1().parse(&mut input), Err(Constraint::at_least(1, 0)));
    assert_eq!(digits().parse(&mut input), Ok("42"));
    assert_eq!(digits().parse(&mut input), Err(Constraint::at_least(1, 0)));
}

#[test]
fn prefix_up_to_stops_before_delimiter() {
    let mut input = "key: value";
    assert_eq!(prefix_up_to(": ").parse(&mut input), Ok("key"));
    assert_eq!(input, ": value");
}

#[test]
fn prefix_up_to_finds_overlapping_delimiter() {
    let mut input = "aab";
    assert_eq!(prefix_up_to("ab").parse(&mut input), Ok("a"));
    assert_eq!(input, "ab");
}

#[test]
fn prefix_through_includes_delimiter() {
    let mut input = "a-->b";
    assert_eq!(prefix_through("-->").parse(&mut input), Ok("a-->"));
    assert_eq!(input, "b");
}

#[test]
fn missing_delimiter_fails_without_consuming() {
    let mut input = "abc";
    assert_eq!(prefix_up_to(';').parse(&mut input), Err(Failure::end_of_input("';'")));
    assert_eq!(prefix_through(';').parse(&mut input), Err(Failure::end_of_input("';'")));
    assert_eq!(input, "abc");
}

#[test]
fn missing_delimiter_can_consume_the_rest() {
    let mut input = "abc";
    assert_eq!(prefix_up_to(';').or_rest().parse(&mut input), Ok("abc"));
    assert_eq!(input, "");

    let mut input = "abc";
    assert_eq!(prefix_through(';').missing(Missing::ConsumeRest).parse(&mut input), Ok("abc"));
    assert_eq!(input, "");
}

#[test]
fn consume_exact_count() {
    let mut input = "abc";
    assert_eq!(consume(2).parse(&mut input), Ok("ab"));
    assert_eq!(input, "c");
}

#[test]
fn consume_too_much_restores_input() {
    let mut input = "abc";
    assert_eq!(consume(5).parse(&mut input), Err(Constraint::exactly(5, 3)));
    assert_eq!(input, "abc");
}

#[test]
fn consume_over_bytes() {
    let mut input: &[u8] = &[1, 2, 3];
    assert_eq!(consume(2).parse(&mut input), Ok(&[1u8, 2][..]));
    assert_eq!(input, &[3]);
}

#[test]
fn discard_and_rest() {
    let mut input = "headerbody";
    assert_eq!(discard(6).parse(&mut input), Ok(()));
    assert_eq!(rest().parse(&mut input), Ok("body"));
    assert_eq!(input, "");
    assert_eq!(rest().parse(&mut input), Ok(""));
}

#[test]
fn end_requires_empty_input() {
    let mut input = "";
    assert_eq!(end().parse(&mut input), Ok(()));

    let mut input = "xy";
    let err = end().parse(&mut input).unwrap_err();
    assert_eq!(
        err,
        Failure::Mismatch { expected: "end of input".into(), found: Found::Remaining(2), position: 0 }
    );
    assert_eq!(input, "xy");
}

#[test]
fn always_and_fail_do_not_consume() {
    let mut input = "abc";
    assert_eq!(always(5).parse(&mut input), Ok(5));
    assert_eq!(fail::<&str, (), _>("nope").parse(&mut input), Err("nope"));
    assert_eq!(input, "abc");
}

#[test]
fn from_fn_wraps_a_closure() {
    let upper = from_fn(|input: &mut &str| match input.next() {
        Some(c) if c.is_uppercase() => Ok(c),
        _ => Err("expected an uppercase letter"),
    });
    let mut input = "Ab";
    assert_eq!(upper.parse(&mut input), Ok('A'));
    assert_eq!(upper.parse(&mut input), Err("expected an uppercase letter"));
}

use recto::prelude::*;

#[test]
fn key_value_round_trip() {
    let entry = sequence::<&str>().then(prefix_while(ASCII_ALPHA).min(1)).skip(literal('=')).then(digits());

    let printed = print(&entry, ("width", "80")).unwrap();
    assert_eq!(printed, "width=80");

    let mut input = printed.as_str();
    assert_eq!(entry.parse(&mut input), Ok(("width", "80")));
    assert_eq!(input, "");
}

#[test]
fn parse_then_print_reproduces_the_input() {
    let list = many(digits::<&str>()).separated_by(literal(','));
    let source = "1,22,333";
    let parsed = parse_complete(&list, source).unwrap();
    assert_eq!(parsed, vec!["1", "22", "333"]);
    assert_eq!(print(&list, parsed).unwrap(), source);
}

#[test]
fn alternation_prints_the_matching_branch() {
    let boolean = one_of((literal::<&str, _>("true").to(true), literal("false").to(false)));
    assert_eq!(print(&boolean, true).unwrap(), "true");
    assert_eq!(print(&boolean, false).unwrap(), "false");
}

#[test]
fn alternation_reports_every_branch_when_nothing_prints() {
    let sign = one_of((literal::<&str, _>('+').to(1), literal('-').to(-1)));
    let err = print(&sign, 0).unwrap_err();
    assert_eq!(
        err,
        Aggregate((
            Either::Right(Validation::new(&0, "expected 1")),
            Either::Right(Validation::new(&0, "expected -1")),
        ))
    );
}

#[test]
fn bimap_round_trip() {
    let digit = ascii_digit::<&str>()
        .bimap(|c: char| c.to_digit(10).unwrap_or(0), |d: u32| char::from_digit(d, 10).unwrap_or('0'));
    let printed = print(&digit, 7).unwrap();
    assert_eq!(printed, "7");
    assert_eq!(digit.parse(&mut printed.as_str()), Ok(7));
}

#[test]
fn optional_parts_print_only_when_present() {
    let signed = optionally(literal::<&str, _>('-')).then(digits());
    assert_eq!(print(&signed, (None, "5")).unwrap(), "5");
    assert_eq!(print(&signed, (Some(()), "5")).unwrap(), "-5");
}

#[test]
fn item_printer_checks_the_set() {
    assert_eq!(print(&ascii_digit::<&str>(), '4'), Ok("4".to_string()));
    assert_eq!(print(&ascii_digit::<&str>(), 'x'), Err(Validation::new(&'x', "expected ASCII digit")));
}

#[test]
fn prefix_printers_check_their_value() {
    let word = prefix_while::<&str, _>(ASCII_ALPHA).min(1);
    assert_eq!(print(&word, "abc"), Ok("abc".to_string()));
    assert_eq!(print(&word, ""), Err(Failure::Constraint(Constraint::at_least(1, 0))));
    assert!(matches!(print(&word, "a1"), Err(Failure::Validation(_))));

    let field = prefix_up_to::<&str, _>(';');
    assert_eq!(print(&field, "ab"), Ok("ab".to_string()));
    assert!(print(&field, "a;b").is_err());

    let line = prefix_through::<&str, _>('\n');
    assert_eq!(print(&line, "ab\n"), Ok("ab\n".to_string()));
    assert!(print(&line, "ab").is_err());
    assert!(print(&line, "a\nb\n").is_err());
    assert_eq!(print(&line.or_rest(), "ab"), Ok("ab".to_string()));
}

#[test]
fn consume_printer_checks_length() {
    assert_eq!(print(&consume::<&str>(2), "ab"), Ok("ab".to_string()));
    assert_eq!(print(&consume::<&str>(3), "ab"), Err(Constraint::exactly(3, 2)));
}

#[test]
fn end_printer_requires_nothing_after_it() {
    let ok = literal::<&str, _>("ab").left(end());
    assert_eq!(print(&ok, ()), Ok("ab".to_string()));

    let misplaced = end::<&str>().left(literal("ab"));
    let err = print(&misplaced, ()).unwrap_err();
    assert_eq!(
        err,
        Either::Left(Failure::Mismatch { expected: "end of input".into(), found: Found::Remaining(2), position: 0 })
    );
}

#[test]
fn filter_printer_rejects_values() {
    let nonzero = ascii_digit::<&str>().filter(|c: &char| *c != '0', "zero");
    assert_eq!(print(&nonzero, '3'), Ok("3".to_string()));
    assert_eq!(print(&nonzero, '0'), Err(Validation::new(&'0', "zero")));
}

#[test]
fn many_printer_checks_bounds() {
    let list = many(ascii_digit::<&str>()).at_least(1).separated_by(literal(','));
    assert_eq!(print(&list, vec![]), Err(Either::Left(Constraint::at_least(1, 0))));

    let err = print(&list, vec!['1', 'x']).unwrap_err();
    assert_eq!(
        err,
        Either::Right(Iteration { index: 1, error: Either::Left(Validation::new(&'x', "expected ASCII digit")) })
    );

    let pair = many(ascii_digit::<&str>()).count(2);
    assert_eq!(print(&pair, vec!['1', '2', '3']), Err(Either::Left(Constraint::at_most(2, 3))));
}

#[test]
fn byte_printers_fill_a_deque() {
    let frame = literal::<&[u8], _>(&[0xAAu8]).right(consume(2));
    let buffer = print(&frame, &[1u8, 2][..]).unwrap();
    assert_eq!(Vec::from(buffer), vec![0xAA, 1, 2]);
}

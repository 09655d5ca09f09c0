use recto::prelude::*;

#[test]
fn offset_counts_consumed_items() {
    let mut input = Tracked::new("héllo");
    literal("hé").parse(&mut input).unwrap();
    assert_eq!(input.offset(), 2);
    assert_eq!(input.inner(), &"llo");
}

#[test]
fn rollback_restores_the_position() {
    let mut input = Tracked::new("abc");
    let checkpoint = input.checkpoint();
    input.advance(2);
    assert_eq!(input.offset(), 2);
    input.rollback(checkpoint);
    assert_eq!(input.offset(), 0);
    assert_eq!(input.into_inner(), "abc");
}

#[test]
fn backtracking_combinators_restore_the_position() {
    let mut input = Tracked::new("ac");
    assert_eq!(one_of((literal("ab"), literal("ac"))).parse(&mut input), Ok(()));
    assert_eq!(input.offset(), 2);

    let mut input = Tracked::new("ax");
    assert_eq!(optionally(literal("ab")).parse(&mut input), Ok(None));
    assert_eq!(input.offset(), 0);

    let mut input = Tracked::new("ababx");
    assert_eq!(many(literal("ab")).parse(&mut input).map(|v| v.len()), Ok(2));
    assert_eq!(input.offset(), 4);
}

#[test]
fn slices_come_from_the_wrapped_input() {
    let mut input = Tracked::new("123abc");
    assert_eq!(digits().parse(&mut input), Ok("123"));
    assert_eq!(input.offset(), 3);

    let mut bytes = Tracked::new(&[1u8, 2, 3][..]);
    assert_eq!(consume(2).parse(&mut bytes), Ok(&[1u8, 2][..]));
    assert_eq!(bytes.offset(), 2);
}

#[test]
fn line_and_column() {
    let mut input = "let x\n  = 1".with_counter(LineColumn::default());
    let _ = prefix_through('\n').parse(&mut input);
    assert_eq!(input.pos(), LineColumn { line: 2, column: 1 });
    let _ = ws().parse(&mut input);
    assert_eq!(input.pos(), LineColumn { line: 2, column: 3 });
}

#[test]
fn failure_position_from_tracked_input() {
    let mut input = Tracked::new("abc!");
    let word = prefix_while(ASCII_ALPHA);
    let _ = word.parse(&mut input);
    let err = literal(';').parse(&mut input).unwrap_err();
    assert_eq!(err, Failure::mismatch("';'", '!', 0));
    assert_eq!(input.offset(), 3);
}

#[test]
fn tracked_inputs_print_like_their_base() {
    let number = digits::<Tracked<&str>>();
    assert_eq!(print(&number, "12"), Ok("12".to_string()));
}

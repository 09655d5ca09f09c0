use recto::prelude::*;

#[test]
fn literal_str_matches() {
    let mut input = "hello!";
    assert_eq!(literal("hello").parse(&mut input), Ok(()));
    assert_eq!(input, "!");
}

#[test]
fn literal_char_matches() {
    let mut input = "+1";
    assert_eq!(literal('+').parse(&mut input), Ok(()));
    assert_eq!(input, "1");
}

#[test]
fn literal_reports_position_of_mismatch() {
    let mut input = "ac";
    let err = literal("ab").parse(&mut input).unwrap_err();
    assert_eq!(err, Failure::mismatch("\"ab\"", 'c', 1));
    // the matched prefix stays consumed
    assert_eq!(input, "c");
}

#[test]
fn literal_runs_out_of_input() {
    let mut input = "a";
    assert_eq!(literal("ab").parse(&mut input), Err(Failure::end_of_input("\"ab\"")));
}

#[test]
fn literal_mismatch_message() {
    let mut input = "no";
    let err = literal("yes").parse(&mut input).unwrap_err();
    assert_eq!(err.to_string(), "expected \"yes\", found 'n' at position 0");
}

#[test]
fn literal_slice_matches() {
    let mut input: &[u8] = &[1, 2, 3, 4];
    assert_eq!(literal(&[1u8, 2, 3]).parse(&mut input), Ok(()));
    assert_eq!(input, &[4]);
}

#[test]
fn literal_over_tokens() {
    #[derive(Clone, Debug, PartialEq)]
    enum Token {
        Let,
        Ident(&'static str),
        Eq,
    }

    let tokens = [Token::Let, Token::Ident("x"), Token::Eq];
    let mut input: &[Token] = &tokens;
    assert_eq!(literal(&[Token::Let]).parse(&mut input), Ok(()));
    assert_eq!(input, &[Token::Ident("x"), Token::Eq]);

    let err = literal(&[Token::Eq]).parse(&mut input).unwrap_err();
    assert_eq!(err, Failure::mismatch("[Eq]", Token::Ident("x"), 0));
}

#[test]
fn literal_prints_itself() {
    assert_eq!(print(&literal::<&str, _>("let"), ()), Ok("let".to_string()));
    assert_eq!(print(&literal::<&str, _>('\n'), ()), Ok("\n".to_string()));
}

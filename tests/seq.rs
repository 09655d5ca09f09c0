use recto::prelude::*;

#[test]
fn unit_stages_collapse_to_unit() {
    let delimiters = sequence().skip(literal('(')).skip(literal(',')).skip(literal(')'));
    let mut input = "(,)";
    assert_eq!(delimiters.parse(&mut input), Ok(()));
    assert_eq!(input, "");
}

#[test]
fn two_values_make_a_pair() {
    let assignment = sequence().then(ascii_alpha()).skip(literal('=')).then(ascii_digit());
    let mut input = "a=1;";
    assert_eq!(assignment.parse(&mut input), Ok(('a', '1')));
    assert_eq!(input, ";");
}

#[test]
fn grouping_does_not_change_the_shape() {
    let flat = sequence().then(ascii_alpha()).then(ascii_digit()).then(ascii_alpha());
    let left = sequence().then(ascii_alpha()).then(ascii_digit()).chain(sequence().then(ascii_alpha()));
    let right = sequence().then(ascii_alpha()).chain(sequence().then(ascii_digit()).then(ascii_alpha()));

    assert_eq!(flat.parse(&mut "a1b"), Ok(('a', '1', 'b')));
    assert_eq!(left.parse(&mut "a1b"), Ok(('a', '1', 'b')));
    assert_eq!(right.parse(&mut "a1b"), Ok(('a', '1', 'b')));
}

#[test]
fn eight_slots() {
    let quad = || sequence().then(ascii_digit()).then(ascii_digit()).then(ascii_digit()).then(ascii_digit());
    let octet = quad().chain(quad());
    let mut input = "12345678";
    assert_eq!(octet.parse(&mut input), Ok(('1', '2', '3', '4', '5', '6', '7', '8')));
}

#[test]
fn errors_nest_per_stage() {
    let pair = sequence().then(ascii_alpha()).then(ascii_digit());

    let mut input = "ab";
    assert_eq!(pair.parse(&mut input), Err(Either::Right(Failure::mismatch("ASCII digit", 'b', 0))));

    let mut input = "1";
    assert_eq!(
        pair.parse(&mut input),
        Err(Either::Left(Either::Right(Failure::mismatch("ASCII letter", '1', 0))))
    );
}

#[test]
fn pairwise_sequencing() {
    let mut input = "a1";
    assert_eq!(then(ascii_alpha(), ascii_digit()).parse(&mut input), Ok(('a', '1')));

    let mut input = "a1";
    assert_eq!(ascii_alpha().right(ascii_digit()).parse(&mut input), Ok('1'));

    let mut input = "a;";
    assert_eq!(ascii_alpha().left(literal(';')).parse(&mut input), Ok('a'));

    let mut input = "-1";
    assert_eq!(right(literal('-'), ascii_digit()).parse(&mut input), Ok('1'));
    let mut input = "1!";
    assert_eq!(left(ascii_digit(), literal('!')).parse(&mut input), Ok('1'));
}

#[test]
fn between_reports_the_failing_part() {
    let parens = ascii_alpha().between(literal('('), literal(')'));

    let mut input = "(a)";
    assert_eq!(parens.parse(&mut input), Ok('a'));

    let mut input = "[a]";
    assert_eq!(parens.parse(&mut input), Err(Either::Left(Either::Left(Failure::mismatch("'('", '[', 0)))));

    let mut input = "(a]";
    assert_eq!(parens.parse(&mut input), Err(Either::Right(Failure::mismatch("')'", ']', 0))));

    let mut input = "[x]";
    assert_eq!(between(literal('['), ascii_alpha(), literal(']')).parse(&mut input), Ok('x'));
}

#[test]
fn sequence_then_appends_while_the_trait_method_nests() {
    let mut input = "a1";
    assert_eq!(sequence().then(ascii_alpha()).then(ascii_digit()).parse(&mut input), Ok(('a', '1')));

    let mut input = "a1";
    let nested = Parser::then(sequence().then(ascii_alpha()), ascii_digit());
    assert_eq!(nested.parse(&mut input), Ok((('a',), '1')));
}

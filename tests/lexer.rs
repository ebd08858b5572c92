use pretty_assertions::assert_eq;
use reckon::{
    error::LexError,
    interpreter::lexer::{Keyword, Number, Token, tokenize},
};

fn tokens(src: &str) -> Vec<Token> {
    tokenize(src, 1).filter_map(Result::ok)
                    .map(|(token, _)| token)
                    .collect()
}

fn ident(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

#[test]
fn numbers_are_float_iff_they_have_a_point_or_exponent() {
    assert_eq!(tokens("42"), vec![Token::Number(Number::Integer(42))]);
    assert_eq!(tokens("007"), vec![Token::Number(Number::Integer(7))]);
    assert_eq!(tokens("3.14"), vec![Token::Number(Number::Float(3.14))]);
    assert_eq!(tokens("3."), vec![Token::Number(Number::Float(3.0))]);
    assert_eq!(tokens("1e5"), vec![Token::Number(Number::Float(100_000.0))]);
    assert_eq!(tokens("2E-3"), vec![Token::Number(Number::Float(0.002))]);
    assert_eq!(tokens("1.5e+2"), vec![Token::Number(Number::Float(150.0))]);
}

#[test]
fn oversized_integer_literals_become_floats() {
    assert_eq!(tokens("99999999999999999999"),
               vec![Token::Number(Number::Float(1e20))]);
}

#[test]
fn signs_are_separate_tokens() {
    assert_eq!(tokens("-2.5"),
               vec![Token::Minus, Token::Number(Number::Float(2.5))]);
    assert_eq!(tokens("3-2.5"),
               vec![Token::Number(Number::Integer(3)),
                    Token::Minus,
                    Token::Number(Number::Float(2.5))]);
}

#[test]
fn two_character_operators_win_over_prefixes() {
    assert_eq!(tokens("a<=b"), vec![ident("a"), Token::LessEqual, ident("b")]);
    assert_eq!(tokens("a>=b"), vec![ident("a"), Token::GreaterEqual, ident("b")]);
    assert_eq!(tokens("a==b"), vec![ident("a"), Token::EqualEqual, ident("b")]);
    assert_eq!(tokens("a!=b"), vec![ident("a"), Token::BangEqual, ident("b")]);
    assert_eq!(tokens("7//2"),
               vec![Token::Number(Number::Integer(7)),
                    Token::SlashSlash,
                    Token::Number(Number::Integer(2))]);
    assert_eq!(tokens("a<b/c"),
               vec![ident("a"), Token::Less, ident("b"), Token::Slash, ident("c")]);
}

#[test]
fn single_character_symbols() {
    assert_eq!(tokens("= + - * / ( ) { } ^ %"),
               vec![Token::Equals,
                    Token::Plus,
                    Token::Minus,
                    Token::Star,
                    Token::Slash,
                    Token::LParen,
                    Token::RParen,
                    Token::LBrace,
                    Token::RBrace,
                    Token::Caret,
                    Token::Percent]);
}

#[test]
fn reserved_words_are_keywords() {
    assert_eq!(tokens("cls info quit"),
               vec![Token::Keyword(Keyword::Cls),
                    Token::Keyword(Keyword::Info),
                    Token::Keyword(Keyword::Quit)]);
    assert_eq!(tokens("clsx Info _quit"),
               vec![ident("clsx"), ident("Info"), ident("_quit")]);
}

#[test]
fn string_literals_keep_their_quotes() {
    assert_eq!(tokens("s = \"hi there\""),
               vec![ident("s"), Token::Equals, Token::Str("\"hi there\"".to_string())]);
    assert_eq!(tokens("\"a\" \"b\""),
               vec![Token::Str("\"a\"".to_string()), Token::Str("\"b\"".to_string())]);
}

#[test]
fn comments_and_whitespace_are_skipped() {
    assert_eq!(tokens("\t1 # the rest # is ignored"),
               vec![Token::Number(Number::Integer(1))]);
    assert!(tokens("# only a comment").is_empty());
}

#[test]
fn illegal_characters_are_reported_and_skipped() {
    let items: Vec<_> = tokenize("1 @ 2", 3).collect();

    assert_eq!(items,
               vec![Ok((Token::Number(Number::Integer(1)), 3)),
                    Err(LexError { ch: '@', line: 3 }),
                    Ok((Token::Number(Number::Integer(2)), 3))]);
}

#[test]
fn unterminated_string_skips_only_the_quote() {
    let items: Vec<_> = tokenize("\"abc", 1).collect();

    assert_eq!(items,
               vec![Err(LexError { ch: '"', line: 1 }), Ok((ident("abc"), 1))]);
}

#[test]
fn newlines_advance_the_line_counter() {
    let items: Vec<_> = tokenize("1\n\n2", 5).collect();

    assert_eq!(items,
               vec![Ok((Token::Number(Number::Integer(1)), 5)),
                    Ok((Token::Number(Number::Integer(2)), 7))]);
}

#[test]
fn lex_error_message() {
    let error = LexError { ch: '$', line: 4 };

    assert_eq!(error.to_string(), "Line 4: ILLEGAL character '$'");
}

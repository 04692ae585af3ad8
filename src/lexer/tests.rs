use assert_matches::assert_matches;
use rstest::rstest;

use super::*;

fn dump(expr: &str) -> String {
    match tokenize(expr) {
        Ok(tokens) => tokens
            .map(|token| match token {
                Token::String(text) => format!("'{}'", text),
                Token::Regex(text) => format!("r[{}]", text),
                token => token.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Err(err) => format!("err: {}", err),
    }
}

#[rstest]
#[case::empty("", "")]
#[case::blank("          ", "")]
#[case::open("(", "(")]
#[case::open_padded(" ( ", "(")]
#[case::close(")", ")")]
#[case::pair("()", "(, )")]
#[case::pair_spaced("( )", "(, )")]
#[case::nested("(())", "(, (, ), )")]
#[case::siblings("(()())", "(, (, ), (, ), )")]
#[case::siblings_spaced(" (   ()()  )  ", "(, (, ), (, ), )")]
fn test_parentheses(#[case] expr: &str, #[case] want: &str) {
    assert_eq!(dump(expr), want);
}

#[rstest]
#[case::single("a", "'a'")]
#[case::several("a b c", "'a', 'b', 'c'")]
#[case::close_ends_word("a b) c", "'a', 'b', ), 'c'")]
#[case::open_ends_word("a(b", "'a', (, 'b'")]
#[case::slash_ends_word("a/b/", "'a', r[b]")]
#[case::tab_is_not_separator("a\tb", "'a\tb'")]
#[case::lowercase_keyword("not and or", "'not', 'and', 'or'")]
#[case::mixed_case_keyword("Not AnD oR", "'Not', 'AnD', 'oR'")]
#[case::keyword_prefix("NOTE ANDROID ORACLE", "'NOTE', 'ANDROID', 'ORACLE'")]
#[case::non_ascii("привет 日本語", "'привет', '日本語'")]
fn test_string_literals(#[case] expr: &str, #[case] want: &str) {
    assert_eq!(dump(expr), want);
}

#[rstest]
#[case::empty("//", "r[]")]
#[case::two_empty("////", "r[], r[]")]
#[case::two_empty_spaced("// //", "r[], r[]")]
#[case::single("/a/", "r[a]")]
#[case::spaces_kept("/a b c/", "r[a b c]")]
#[case::space_only("/ / /b/", "r[ ], r[b]")]
#[case::adjacent("/a//b/", "r[a], r[b]")]
#[case::separated(" /a/   /b/  ", "r[a], r[b]")]
#[case::escaped_slash("/a\\//", "r[a/]")]
#[case::escaped_slashes_in_group(" ( /\\/a\\//)( /(b)/ ) ", "(, r[/a/], ), (, r[(b)], )")]
#[case::keywords_inside("/NOT AND OR/", "r[NOT AND OR]")]
#[case::non_ascii("/мир.*/", "r[мир.*]")]
#[case::home("/^\\/home/", "r[^/home]")]
fn test_regex_literals(#[case] expr: &str, #[case] want: &str) {
    assert_eq!(dump(expr), want);
}

#[rstest]
#[case::not("NOT", "NOT")]
#[case::not_not("NOT NOT", "NOT, NOT")]
#[case::not_regex("NOT /aa/", "NOT, r[aa]")]
#[case::not_string("NOT aa", "NOT, 'aa'")]
#[case::and_not("AND NOT aaa", "AND, NOT, 'aaa'")]
#[case::or_or("OR OR", "OR, OR")]
#[case::compact("/a/AND/b/", "r[a], AND, r[b]")]
#[case::compact_string("/a/AND b", "r[a], AND, 'b'")]
#[case::mixed("a AND /b/ OR c", "'a', AND, r[b], OR, 'c'")]
#[case::grouped("(/a/OR/b/)AND(/c/)", "(, r[a], OR, r[b], ), AND, (, r[c], )")]
#[case::grouped_spaced("  (  /a/OR  /b/ )    AND (/c/)    ", "(, r[a], OR, r[b], ), AND, (, r[c], )")]
#[case::long(
    "(/a/ OR /b/) AND ( /c/ AND NOT /d/ )",
    "(, r[a], OR, r[b], ), AND, (, r[c], AND, NOT, r[d], )"
)]
fn test_operators(#[case] expr: &str, #[case] want: &str) {
    assert_eq!(dump(expr), want);
}

#[rstest]
#[case::unclosed("/a", "err: unclosed regex literal in \"a\"")]
#[case::unclosed_after_escape("/a\\/", "err: unclosed regex literal in \"a/\"")]
#[case::unclosed_pending_escape("/a\\", "err: unclosed regex literal in \"a\"")]
#[case::unclosed_in_expression("DEBUG OR /aa", "err: unclosed regex literal in \"aa\"")]
#[case::invalid_escape("/a\\b/", "err: invalid escape sequence in \"ab\"")]
#[case::invalid_escape_backslash("/\\\\/", "err: invalid escape sequence in \"\\\\\"")]
fn test_errors(#[case] expr: &str, #[case] want: &str) {
    assert_eq!(dump(expr), want);
}

#[test]
fn test_error_variants() {
    assert_matches!(tokenize("/abc"), Err(LexError::UnclosedRegex(text)) if text == "abc");
    assert_matches!(tokenize("/a\\d/"), Err(LexError::InvalidEscape(text)) if text == "ad");
}

#[test]
fn test_eof_is_idempotent() {
    let mut tokens = tokenize("a").unwrap();
    assert_eq!(tokens.next_token(), Token::String("a".into()));
    for _ in 0..3 {
        assert_eq!(tokens.next_token(), Token::Eof);
    }
}

#[test]
fn test_keyword() {
    assert_eq!(Token::keyword("NOT"), Some(Token::Not));
    assert_eq!(Token::keyword("AND"), Some(Token::And));
    assert_eq!(Token::keyword("OR"), Some(Token::Or));
    assert_eq!(Token::keyword("or"), None);
    assert_eq!(Token::keyword(""), None);
}

#[test]
fn test_display() {
    assert_eq!(Token::Open.to_string(), "(");
    assert_eq!(Token::Close.to_string(), ")");
    assert_eq!(Token::String("a b".into()).to_string(), "\"a b\"");
    assert_eq!(Token::Regex("^a".into()).to_string(), "/^a/");
    assert_eq!(Token::Eof.to_string(), "EOF");
}

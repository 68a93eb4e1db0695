use thompson::{regex, Regex, RegexMatcher};

macro_rules! assert_matches {
    ($expression:expr, $pattern:pat $(if $guard:expr)? $(,)?) => {
        match &$expression {
            $pattern $(if $guard)? => {}
            outcome => assert!(false, "expected {:?} to match {}", outcome, stringify!($pattern $(if $guard)?))
        }
    };
}

#[test]
fn test_regex() {
    assert_matches!(regex!(""), Regex::Empty);
    assert_matches!(regex!("a"), Regex::Literal('a'));
    assert_matches!(regex!("."), Regex::Any);
    assert_matches!(regex!("a*"), Regex::Repeat(r) if **r == Regex::Literal('a'));
    assert_matches!(
        regex!("a|b"),
        Regex::Alternation(l, r) if **l == Regex::Literal('a') && **r == Regex::Literal('b')
    );
    assert_matches!(
        regex!("ab"),
        Regex::Concat(l, r) if **l == Regex::Literal('a') && **r == Regex::Literal('b')
    );
}

#[test]
fn test_regex_same_as_runtime() {
    let patterns = [
        (regex!("(ab|c)*d"), "(ab|c)*d"),
        (regex!("a|"), "a|"),
        (regex!("é.*"), "é.*"),
    ];
    for (compiled, pattern) in patterns {
        assert_eq!(compiled, thompson::parse_regex(pattern).unwrap());
    }
}

#[test]
fn test_regex_matcher() {
    let automaton = regex!("a*b").compile();
    let mut matcher = automaton.matcher();
    matcher.accept_many("aaa".chars());
    assert!(!matcher.is_accepting());
    matcher.accept('b');
    assert!(matcher.is_accepting());
    assert!(automaton.matcher().accepts("ab".chars()));
}

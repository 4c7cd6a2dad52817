use pclass_domain::constants::{
    BROWSER_PREFIX, DECORATED_MARKER, FUTURE_VERSION_COUNT, LESS_THAN_PREFIX, OS_PREFIX,
    UNSUPPORTED_PREFIX,
};

#[test]
fn constants_match_class_fragments() {
    assert_eq!(BROWSER_PREFIX, "ua-");
    assert_eq!(OS_PREFIX, "os-");
    assert_eq!(LESS_THAN_PREFIX, "lt-");
    assert_eq!(UNSUPPORTED_PREFIX, "no-");
    assert_eq!(DECORATED_MARKER, "pd--decorated");
    assert_eq!(FUTURE_VERSION_COUNT, 2);
}

#[test]
fn marker_is_a_single_class_token() {
    assert!(!DECORATED_MARKER.chars().any(char::is_whitespace));
}

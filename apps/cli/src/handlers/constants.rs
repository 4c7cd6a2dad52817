use pclass::constants::{
    BROWSER_PREFIX, DECORATED_MARKER, FUTURE_VERSION_COUNT, LESS_THAN_PREFIX, OS_PREFIX,
    UNSUPPORTED_PREFIX,
};

pub fn print_constants() {
    println!("browser_prefix = {BROWSER_PREFIX:?}");
    println!("os_prefix = {OS_PREFIX:?}");
    println!("less_than_prefix = {LESS_THAN_PREFIX:?}");
    println!("unsupported_prefix = {UNSUPPORTED_PREFIX:?}");
    println!("decorated_marker = {DECORATED_MARKER:?}");
    println!("future_version_count = {FUTURE_VERSION_COUNT}");
}

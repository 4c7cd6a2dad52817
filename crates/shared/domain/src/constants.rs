//! Reserved class-name fragments shared by the synthesizer and the decorator.

/// Prefix of every browser token (`ua-chrome90`).
pub const BROWSER_PREFIX: &str = "ua-";

/// Prefix of the operating system token (`os-windows`).
pub const OS_PREFIX: &str = "os-";

/// Inserted after [`BROWSER_PREFIX`] for upcoming-version markers (`ua-lt-chrome91`).
pub const LESS_THAN_PREFIX: &str = "lt-";

/// Prefix of unsupported feature tokens (`no-webgl`).
pub const UNSUPPORTED_PREFIX: &str = "no-";

/// Sentinel token marking a node as already decorated.
pub const DECORATED_MARKER: &str = "pd--decorated";

/// Number of upcoming major versions that get a `lt-` marker.
pub const FUTURE_VERSION_COUNT: u32 = 2;

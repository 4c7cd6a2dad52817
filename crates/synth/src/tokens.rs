use pclass_domain::constants::{
    BROWSER_PREFIX, FUTURE_VERSION_COUNT, LESS_THAN_PREFIX, OS_PREFIX, UNSUPPORTED_PREFIX,
};
use pclass_domain::{Browser, FeatureFlag, FeatureSet, OperatingSystem};

/// Lowercases `name` and replaces every whitespace character with `-`.
///
/// ```rust
/// assert_eq!(pclass_synth::name_to_class_name("Chrome OS"), "chrome-os");
/// ```
#[must_use]
pub fn name_to_class_name(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect::<String>()
        .to_lowercase()
}

/// Canonical class name if the detector supplied one, otherwise the normalized name.
#[must_use]
pub fn browser_identity(browser: &Browser) -> String {
    match browser.class_name.as_deref() {
        Some(class_name) if !class_name.trim().is_empty() => class_name.to_owned(),
        _ => name_to_class_name(&browser.name),
    }
}

#[must_use]
pub fn browser_token(browser: &Browser) -> String {
    format!("{BROWSER_PREFIX}{}", browser_identity(browser))
}

#[must_use]
pub fn os_token(os: &OperatingSystem) -> String {
    format!("{OS_PREFIX}{}", name_to_class_name(&os.name))
}

/// Exact-version token followed by one `lt-` marker per upcoming major version.
#[must_use]
pub fn browser_version_tokens(browser: &Browser) -> Vec<String> {
    let identity = browser_identity(browser);
    let major = u64::from(browser.major_version);

    let mut tokens = Vec::with_capacity(1 + FUTURE_VERSION_COUNT as usize);
    tokens.push(format!("{BROWSER_PREFIX}{identity}{major}"));
    tokens.extend((1..=u64::from(FUTURE_VERSION_COUNT)).map(|offset| {
        format!("{BROWSER_PREFIX}{LESS_THAN_PREFIX}{identity}{}", major + offset)
    }));
    tokens
}

#[must_use]
pub fn feature_token(flag: &FeatureFlag) -> String {
    if flag.supported { flag.name.clone() } else { format!("{UNSUPPORTED_PREFIX}{}", flag.name) }
}

/// One token per flag, in the set's insertion order.
#[must_use]
pub fn feature_tokens(features: &FeatureSet) -> Vec<String> {
    features.iter().map(feature_token).collect()
}

/// Joins non-blank tokens with a single space.
pub fn join<I>(tokens: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    for token in tokens {
        let token = token.as_ref();
        if token.trim().is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

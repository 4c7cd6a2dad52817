//! # Class-name Synthesizer
//!
//! Pure functions mapping a [`PlatformSource`] plus a [`FeatureSet`] to one
//! space-separated CSS class string. Nothing here touches the DOM and nothing
//! here can fail.
//!
//! The assembled string is, in order:
//!
//! 1. the caller's existing classes, verbatim;
//! 2. browser version tokens (`ua-chrome90 ua-lt-chrome91 ua-lt-chrome92`);
//! 3. the OS token (`os-chrome-os`);
//! 4. one token per feature flag (`webgl`, `no-touch`);
//! 5. the decoration marker (`pd--decorated`).
//!
//! ```rust
//! use pclass_domain::{Browser, ClassOptions, OperatingSystem, PlatformSnapshot};
//!
//! let platform = PlatformSnapshot::new(Browser::new("Chrome", 90), OperatingSystem::new("Chrome OS"));
//! let options = ClassOptions::builder().include_defaults(false).build();
//!
//! assert_eq!(
//!     pclass_synth::platform_classes(&platform, &options),
//!     "ua-chrome90 ua-lt-chrome91 ua-lt-chrome92 os-chrome-os pd--decorated",
//! );
//! ```

mod tokens;

pub use crate::tokens::{
    browser_identity, browser_token, browser_version_tokens, feature_token, feature_tokens, join,
    name_to_class_name, os_token,
};

use pclass_domain::constants::DECORATED_MARKER;
use pclass_domain::{ClassOptions, FeatureSet, PlatformSource};
use std::borrow::Cow;
use tracing::trace;

/// Builds the full class string for `existing_classes` plus the platform tokens.
///
/// With `include_defaults` the detector's default flags come first, followed by
/// the caller's flags that are not already present.
pub fn assemble_classes<P, S>(
    platform: &P,
    existing_classes: &[S],
    features: &FeatureSet,
    include_defaults: bool,
) -> String
where
    P: PlatformSource + ?Sized,
    S: AsRef<str>,
{
    let features: Cow<'_, FeatureSet> = if include_defaults {
        Cow::Owned(platform.default_features().union(features))
    } else {
        Cow::Borrowed(features)
    };

    let classes = join([
        join(existing_classes),
        join(browser_version_tokens(platform.browser())),
        os_token(platform.os()),
        join(feature_tokens(&features)),
        DECORATED_MARKER.to_owned(),
    ]);

    trace!(classes = %classes, "Platform classes assembled");
    classes
}

/// [`assemble_classes`] driven by a [`ClassOptions`] value.
pub fn platform_classes<P>(platform: &P, options: &ClassOptions) -> String
where
    P: PlatformSource + ?Sized,
{
    assemble_classes(
        platform,
        &options.existing_classes,
        &options.features,
        options.include_defaults,
    )
}

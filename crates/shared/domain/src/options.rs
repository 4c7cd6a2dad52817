use crate::features::FeatureSet;
use serde::Deserialize;
use typed_builder::TypedBuilder;

/// Inputs of a class-string computation, with named defaults.
///
/// ```rust
/// use pclass_domain::{ClassOptions, FeatureFlag, FeatureSet};
///
/// let options = ClassOptions::builder()
///     .features(FeatureSet::from([FeatureFlag::supported("webp")]))
///     .include_defaults(false)
///     .build();
/// assert!(options.existing_classes.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct ClassOptions {
    /// Caller-supplied flags, tokenized after the defaults.
    #[builder(default)]
    pub features: FeatureSet,
    /// Merge the detector's default feature set before tokenizing.
    #[builder(default = true)]
    pub include_defaults: bool,
    /// Classes kept verbatim at the front of the result.
    #[builder(default, setter(into))]
    pub existing_classes: Vec<String>,
}

impl Default for ClassOptions {
    fn default() -> Self {
        Self { features: FeatureSet::new(), include_defaults: true, existing_classes: Vec::new() }
    }
}

//! Detection snapshot handed over by the platform-detection collaborator.

use crate::features::FeatureSet;
use serde::{Deserialize, Serialize};

/// Host browser identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Browser {
    /// Human-readable name (e.g. `"Chrome"`, `"Mobile Safari"`).
    pub name: String,
    pub major_version: u32,
    /// Canonical class name, when the detector knows one (e.g. `"ios-safari"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Browser {
    pub fn new(name: impl Into<String>, major_version: u32) -> Self {
        Self { name: name.into(), major_version, class_name: None }
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// Host operating system identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatingSystem {
    pub name: String,
}

impl OperatingSystem {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Read-only source of platform data.
///
/// Implemented by whatever performs the actual detection; the class-name
/// synthesizer only ever reads through this trait.
pub trait PlatformSource {
    fn browser(&self) -> &Browser;
    fn os(&self) -> &OperatingSystem;
    /// Feature flags merged in when `include_defaults` is set.
    fn default_features(&self) -> &FeatureSet;
}

/// A fixed detection result, e.g. captured once at startup or loaded from a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformSnapshot {
    pub browser: Browser,
    pub os: OperatingSystem,
    #[serde(default)]
    pub features: FeatureSet,
}

impl PlatformSnapshot {
    #[must_use]
    pub fn new(browser: Browser, os: OperatingSystem) -> Self {
        Self { browser, os, features: FeatureSet::new() }
    }

    #[must_use]
    pub fn with_features(mut self, features: impl Into<FeatureSet>) -> Self {
        self.features = features.into();
        self
    }
}

impl PlatformSource for PlatformSnapshot {
    fn browser(&self) -> &Browser {
        &self.browser
    }

    fn os(&self) -> &OperatingSystem {
        &self.os
    }

    fn default_features(&self) -> &FeatureSet {
        &self.features
    }
}

impl<T: PlatformSource + ?Sized> PlatformSource for &T {
    fn browser(&self) -> &Browser {
        (**self).browser()
    }

    fn os(&self) -> &OperatingSystem {
        (**self).os()
    }

    fn default_features(&self) -> &FeatureSet {
        (**self).default_features()
    }
}

//! # Domain Models
//!
//! This crate contains pure platform types with minimal dependencies.
//! Keep it lean: no I/O, no DOM access, no detection logic. Just the data the
//! detection collaborator hands over and the options callers pass in.

pub mod constants;
pub mod features;
pub mod options;
pub mod platform;

pub use features::{FeatureFlag, FeatureSet};
pub use options::ClassOptions;
pub use platform::{Browser, OperatingSystem, PlatformSnapshot, PlatformSource};

//! Kernel utilities shared across the workspace.
//! Keep this crate lightweight; today it only owns layered config loading.
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! use pclass_kernel::config::load_config;
//! let profile: serde_json::Value = load_config(Some("profile.toml")).unwrap();
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use pclass_domain as domain;

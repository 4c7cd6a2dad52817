//! # Root Decorator
//!
//! Writes the synthesized platform classes onto a DOM node exactly once.
//!
//! The DOM is reached through two small traits, [`ClassTarget`] and
//! [`DocumentRoot`], so the same decoration logic runs against the browser
//! (`web` feature, wasm32 only) and against the in-memory [`MemoryDocument`].
//!
//! ```rust
//! use pclass_decorator::{decorate, DecorateOptions, Decoration, MemoryDocument, MemoryElement};
//! use pclass_domain::{Browser, OperatingSystem, PlatformSnapshot};
//!
//! let platform = PlatformSnapshot::new(Browser::new("Chrome", 90), OperatingSystem::new("Chrome OS"));
//! let mut document = MemoryDocument::new(MemoryElement::new("app"));
//!
//! let first = decorate(&mut document, &platform, DecorateOptions::new());
//! assert!(matches!(first, Decoration::Applied(_)));
//!
//! let second = decorate(&mut document, &platform, DecorateOptions::new());
//! assert_eq!(second, Decoration::AlreadyDecorated);
//! ```

mod decorate;
mod dom;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

pub use crate::decorate::{DecorateOptions, Decoration, decorate};
pub use crate::dom::{ClassTarget, DocumentRoot, MemoryDocument, MemoryElement};
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use crate::web::WebDocument;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web_sys;

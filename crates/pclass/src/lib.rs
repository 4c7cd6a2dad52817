//! Facade crate for platform classes.
//! Re-exports the domain, synthesizer, and decorator crates behind the two
//! public entry points. Keep this crate thin: it should compose other crates,
//! not implement class logic.
//!
//! ## Usage
//! - [`get_platform_classes`] computes the class string without touching the DOM.
//! - [`decorate_root_node_with_platform_classes`] writes it onto a root node once.
//! - Enable the `web` feature on wasm32 to decorate `document.documentElement`.

pub use pclass_decorator as decorator;
pub use pclass_decorator::{ClassTarget, DecorateOptions, Decoration, DocumentRoot};
pub use pclass_domain as domain;
pub use pclass_domain::{
    Browser, ClassOptions, FeatureFlag, FeatureSet, OperatingSystem, PlatformSnapshot,
    PlatformSource,
};
pub use pclass_synth as synth;

/// Reserved tokens and prefixes, re-exported for integration tests and stylesheets.
pub mod constants {
    pub use pclass_domain::constants::*;
}

/// Computes the platform class string for `options`.
///
/// ```rust
/// use pclass::{Browser, ClassOptions, OperatingSystem, PlatformSnapshot};
///
/// let platform = PlatformSnapshot::new(Browser::new("Firefox", 128), OperatingSystem::new("Linux"));
/// let classes = pclass::get_platform_classes(&platform, &ClassOptions::default());
/// assert!(classes.starts_with("ua-firefox128 "));
/// ```
#[must_use]
pub fn get_platform_classes<P>(platform: &P, options: &ClassOptions) -> String
where
    P: PlatformSource + ?Sized,
{
    pclass_synth::platform_classes(platform, options)
}

/// Decorates the target node (explicit or the document root) with the platform classes.
///
/// Calling it again on an already decorated node is a no-op.
pub fn decorate_root_node_with_platform_classes<D, P>(
    document: &mut D,
    platform: &P,
    options: DecorateOptions<'_, D::Node>,
) -> Decoration
where
    D: DocumentRoot + ?Sized,
    P: PlatformSource + ?Sized,
{
    pclass_decorator::decorate(document, platform, options)
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::decorate_document;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web {
    use super::{DecorateOptions, Decoration, PlatformSource};
    use pclass_decorator::WebDocument;
    use pclass_decorator::web_sys::Element;

    /// Decorates the current page's `document.documentElement`.
    pub fn decorate_document<P>(platform: &P, options: DecorateOptions<'_, Element>) -> Decoration
    where
        P: PlatformSource + ?Sized,
    {
        let mut document = WebDocument::current();
        super::decorate_root_node_with_platform_classes(&mut document, platform, options)
    }
}

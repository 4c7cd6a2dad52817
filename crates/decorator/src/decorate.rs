use crate::dom::{ClassTarget, DocumentRoot};
use pclass_domain::constants::DECORATED_MARKER;
use pclass_domain::{ClassOptions, FeatureSet, PlatformSource};
use std::fmt;
use tracing::debug;

/// Arguments of [`decorate`].
///
/// `root_node` overrides the document's root element; `callback` runs once,
/// after the class attribute has been written.
pub struct DecorateOptions<'a, N> {
    pub classes: ClassOptions,
    pub root_node: Option<&'a mut N>,
    pub callback: Option<Box<dyn FnOnce() + 'a>>,
}

impl<N> Default for DecorateOptions<'_, N> {
    fn default() -> Self {
        Self { classes: ClassOptions::default(), root_node: None, callback: None }
    }
}

impl<'a, N> DecorateOptions<'a, N> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn features(mut self, features: impl Into<FeatureSet>) -> Self {
        self.classes.features = features.into();
        self
    }

    #[must_use]
    pub const fn include_defaults(mut self, include: bool) -> Self {
        self.classes.include_defaults = include;
        self
    }

    #[must_use]
    pub fn root_node(mut self, node: &'a mut N) -> Self {
        self.root_node = Some(node);
        self
    }

    #[must_use]
    pub fn callback(mut self, callback: impl FnOnce() + 'a) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }
}

impl<N> fmt::Debug for DecorateOptions<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecorateOptions")
            .field("classes", &self.classes)
            .field("root_node", &self.root_node.is_some())
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

/// What [`decorate`] did to the target node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoration {
    /// The class attribute was overwritten with this value.
    Applied(String),
    /// The node already carried the marker; nothing changed.
    AlreadyDecorated,
    /// Neither an explicit node nor a document root was available.
    NoRoot,
}

/// Merges the platform classes into the target node's class attribute, once.
///
/// The node's current classes are preserved as the leading segment.
/// `options.classes.existing_classes` is ignored: the node is the source of truth.
pub fn decorate<D, P>(
    document: &mut D,
    platform: &P,
    options: DecorateOptions<'_, D::Node>,
) -> Decoration
where
    D: DocumentRoot + ?Sized,
    P: PlatformSource + ?Sized,
{
    let DecorateOptions { classes, root_node, callback } = options;

    let target: &mut D::Node = match root_node {
        Some(node) => node,
        None => match document.root_element() {
            Some(node) => node,
            None => {
                debug!("No root node to decorate");
                return Decoration::NoRoot;
            },
        },
    };

    let existing = target.class_tokens();
    if existing.iter().any(|token| token == DECORATED_MARKER) {
        debug!("Root node already decorated");
        return Decoration::AlreadyDecorated;
    }

    let value = pclass_synth::assemble_classes(
        platform,
        &existing,
        &classes.features,
        classes.include_defaults,
    );
    target.set_class_name(&value);
    debug!(classes = %value, "Root node decorated");

    if let Some(callback) = callback {
        callback();
    }

    Decoration::Applied(value)
}

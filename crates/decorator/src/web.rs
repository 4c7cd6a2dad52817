//! Browser DOM adapter backed by `web-sys`.

use crate::dom::{ClassTarget, DocumentRoot};
use web_sys::{Document, Element};

impl ClassTarget for Element {
    fn class_tokens(&self) -> Vec<String> {
        let list = self.class_list();
        (0..list.length()).filter_map(|index| list.item(index)).collect()
    }

    fn set_class_name(&mut self, value: &str) {
        Element::set_class_name(self, value);
    }
}

/// The page's `document.documentElement`, resolved once at construction.
#[derive(Debug, Clone)]
pub struct WebDocument {
    root: Option<Element>,
}

impl WebDocument {
    /// Resolves the root element of the global `window.document`, if any.
    #[must_use]
    pub fn current() -> Self {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        Self { root }
    }

    #[must_use]
    pub fn from_document(document: &Document) -> Self {
        Self { root: document.document_element() }
    }
}

impl DocumentRoot for WebDocument {
    type Node = Element;

    fn root_element(&mut self) -> Option<&mut Element> {
        self.root.as_mut()
    }
}

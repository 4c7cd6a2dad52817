/// A node whose class attribute can be read as a token list and overwritten.
pub trait ClassTarget {
    /// Current class list, in attribute order.
    fn class_tokens(&self) -> Vec<String>;

    /// Replaces the whole class attribute.
    fn set_class_name(&mut self, value: &str);

    fn has_class(&self, token: &str) -> bool {
        self.class_tokens().iter().any(|t| t == token)
    }
}

/// A document that may expose a default root element.
pub trait DocumentRoot {
    type Node: ClassTarget;

    fn root_element(&mut self) -> Option<&mut Self::Node>;
}

/// Detached element holding only a class attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryElement {
    class_name: String,
}

impl MemoryElement {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self { class_name: class_name.into() }
    }

    /// Raw class attribute value.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }
}

impl ClassTarget for MemoryElement {
    fn class_tokens(&self) -> Vec<String> {
        self.class_name.split_ascii_whitespace().map(str::to_owned).collect()
    }

    fn set_class_name(&mut self, value: &str) {
        value.clone_into(&mut self.class_name);
    }
}

/// In-memory document with an optional root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    root: Option<MemoryElement>,
}

impl MemoryDocument {
    #[must_use]
    pub const fn new(root: MemoryElement) -> Self {
        Self { root: Some(root) }
    }

    /// A document without a root element.
    #[must_use]
    pub const fn empty() -> Self {
        Self { root: None }
    }

    #[must_use]
    pub const fn root(&self) -> Option<&MemoryElement> {
        self.root.as_ref()
    }
}

impl DocumentRoot for MemoryDocument {
    type Node = MemoryElement;

    fn root_element(&mut self) -> Option<&mut MemoryElement> {
        self.root.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_tokens_split_on_any_ascii_whitespace() {
        let element = MemoryElement::new("  a\tb\n c ");
        assert_eq!(element.class_tokens(), ["a", "b", "c"]);
        assert!(element.has_class("b"));
        assert!(!element.has_class("d"));
    }

    #[test]
    fn set_class_name_overwrites_attribute() {
        let mut element = MemoryElement::new("old");
        element.set_class_name("new one");
        assert_eq!(element.class_name(), "new one");
    }

    #[test]
    fn empty_document_has_no_root() {
        let mut document = MemoryDocument::empty();
        assert!(document.root_element().is_none());
    }
}

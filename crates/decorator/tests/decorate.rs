use pclass_decorator::{
    ClassTarget, DecorateOptions, Decoration, MemoryDocument, MemoryElement, decorate,
};
use pclass_domain::{Browser, FeatureFlag, OperatingSystem, PlatformSnapshot};
use std::cell::Cell;

fn platform() -> PlatformSnapshot {
    PlatformSnapshot::new(Browser::new("Chrome", 90), OperatingSystem::new("Chrome OS"))
        .with_features([FeatureFlag::supported("webgl")])
}

#[test]
fn decorates_document_root_preserving_existing_classes() {
    let mut document = MemoryDocument::new(MemoryElement::new("app theme-dark"));

    let outcome = decorate(&mut document, &platform(), DecorateOptions::new().include_defaults(false));

    let expected = "app theme-dark ua-chrome90 ua-lt-chrome91 ua-lt-chrome92 os-chrome-os pd--decorated";
    assert_eq!(outcome, Decoration::Applied(expected.to_owned()));
    assert_eq!(document.root().map(MemoryElement::class_name), Some(expected));
}

#[test]
fn second_call_leaves_node_untouched() {
    let mut document = MemoryDocument::new(MemoryElement::new("app"));
    let platform = platform();

    decorate(&mut document, &platform, DecorateOptions::new());
    let after_first = document.clone();

    let outcome = decorate(&mut document, &platform, DecorateOptions::new());

    assert_eq!(outcome, Decoration::AlreadyDecorated);
    assert_eq!(document, after_first);
    let root = document.root().expect("root element");
    assert_eq!(root.class_tokens().iter().filter(|t| *t == "pd--decorated").count(), 1);
}

#[test]
fn callback_runs_only_after_mutation() {
    let mut document = MemoryDocument::new(MemoryElement::default());
    let platform = platform();
    let calls = Cell::new(0);

    decorate(&mut document, &platform, DecorateOptions::new().callback(|| calls.set(calls.get() + 1)));
    decorate(&mut document, &platform, DecorateOptions::new().callback(|| calls.set(calls.get() + 1)));

    assert_eq!(calls.get(), 1);
}

#[test]
fn explicit_root_node_overrides_document_root() {
    let mut document = MemoryDocument::new(MemoryElement::new("document-root"));
    let mut node = MemoryElement::new("widget");

    let outcome = decorate(&mut document, &platform(), DecorateOptions::new().root_node(&mut node));

    assert!(matches!(outcome, Decoration::Applied(_)));
    assert!(node.has_class("pd--decorated"));
    assert!(node.class_name().starts_with("widget ua-chrome90"));
    assert_eq!(document.root().map(MemoryElement::class_name), Some("document-root"));
}

#[test]
fn missing_root_is_a_silent_no_op() {
    let mut document = MemoryDocument::empty();
    let called = Cell::new(false);

    let outcome =
        decorate(&mut document, &platform(), DecorateOptions::new().callback(|| called.set(true)));

    assert_eq!(outcome, Decoration::NoRoot);
    assert!(!called.get());
}

#[test]
fn pre_marked_node_is_never_rewritten() {
    let mut document = MemoryDocument::new(MemoryElement::new("custom pd--decorated"));

    let outcome = decorate(&mut document, &platform(), DecorateOptions::new());

    assert_eq!(outcome, Decoration::AlreadyDecorated);
    assert_eq!(document.root().map(MemoryElement::class_name), Some("custom pd--decorated"));
}

#[test]
fn defaults_are_tokenized_unless_excluded() {
    let mut with_defaults = MemoryDocument::new(MemoryElement::default());
    let mut without_defaults = MemoryDocument::new(MemoryElement::default());
    let platform = platform();

    decorate(&mut with_defaults, &platform, DecorateOptions::new());
    decorate(
        &mut without_defaults,
        &platform,
        DecorateOptions::new().include_defaults(false).features([FeatureFlag::unsupported("touch")]),
    );

    assert!(with_defaults.root().is_some_and(|root| root.has_class("webgl")));
    let root = without_defaults.root().expect("root element");
    assert!(!root.has_class("webgl"));
    assert!(root.has_class("no-touch"));
}

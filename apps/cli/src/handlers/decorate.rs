use crate::models::args::ProfileArgs;
use crate::models::profile::Profile;
use anyhow::Result;
use pclass::decorator::{MemoryDocument, MemoryElement};
use pclass::{DecorateOptions, Decoration};
use tracing::info;

/// Runs the decorator twice against one in-memory root and reports both passes.
///
/// The second pass must report `already decorated`; the final attribute is printed last.
pub fn decorate_twice(args: &ProfileArgs, class_attr: Option<&str>, no_root: bool) -> Result<()> {
    let profile = Profile::resolve(args)?;
    let mut document = if no_root {
        MemoryDocument::empty()
    } else {
        MemoryDocument::new(MemoryElement::new(class_attr.unwrap_or_default()))
    };

    for pass in 1..=2 {
        let options = DecorateOptions {
            classes: profile.classes.clone(),
            root_node: None,
            callback: Some(Box::new(move || info!(pass, "Decoration callback invoked"))),
        };
        let outcome =
            pclass::decorate_root_node_with_platform_classes(&mut document, &profile.platform, options);
        println!("pass {pass}: {}", describe(&outcome));
    }

    if let Some(root) = document.root() {
        println!("class=\"{}\"", root.class_name());
    }
    Ok(())
}

fn describe(outcome: &Decoration) -> String {
    match outcome {
        Decoration::Applied(classes) => format!("applied {classes}"),
        Decoration::AlreadyDecorated => "already decorated".to_owned(),
        Decoration::NoRoot => "no root element".to_owned(),
    }
}

use crate::models::args::ProfileArgs;
use anyhow::{Context, Result, bail};
use pclass::{Browser, ClassOptions, OperatingSystem, PlatformSnapshot};
use pclass_kernel::config::load_config;
use serde::Deserialize;
use tracing::debug;

/// Platform snapshot plus class options, as stored in a profile file.
#[derive(Debug, Clone, Deserialize)]
pub struct Profile {
    pub platform: PlatformSnapshot,
    #[serde(default)]
    pub classes: ClassOptions,
}

impl Profile {
    /// Builds the effective profile: file (or inline flags), then command-line overrides.
    pub fn resolve(args: &ProfileArgs) -> Result<Self> {
        let mut profile = match (&args.config, &args.browser, &args.os) {
            (None, Some(browser), Some(os)) => Self::inline(browser, args.browser_version, os)?,
            (config, ..) => {
                load_config(config.as_deref()).context("Failed to load platform profile")?
            },
        };

        if let Some(name) = &args.browser {
            profile.platform.browser.name.clone_from(name);
        }
        if let Some(version) = args.browser_version {
            profile.platform.browser.major_version = version;
        }
        if let Some(class_name) = &args.browser_class {
            profile.platform.browser.class_name = Some(class_name.clone());
        }
        if let Some(os) = &args.os {
            profile.platform.os.name.clone_from(os);
        }

        profile.classes.features.extend(args.features.iter().cloned());
        profile.classes.existing_classes.extend(args.existing.iter().cloned());
        if args.no_defaults {
            profile.classes.include_defaults = false;
        }

        debug!(?profile, "Profile resolved");
        Ok(profile)
    }

    fn inline(browser: &str, version: Option<u32>, os: &str) -> Result<Self> {
        let Some(version) = version else {
            bail!("--browser-version is required when no profile file is given");
        };
        Ok(Self {
            platform: PlatformSnapshot::new(Browser::new(browser, version), OperatingSystem::new(os)),
            classes: ClassOptions::default(),
        })
    }
}

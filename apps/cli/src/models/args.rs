//! # CLI Argument Definitions
//!
//! Subcommands, profile selection, and per-invocation overrides for `pclass`.

use clap::{Args, Parser, Subcommand};
use pclass::FeatureFlag;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "pclass")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Compute platform CSS classes for a browser/OS profile")]
pub struct Cli {
    /// Emit debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: AppCommands,
}

#[derive(Debug, Subcommand)]
pub enum AppCommands {
    /// Print the class string for a profile
    Classes {
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Decorate an in-memory root node twice and print the resulting class attribute
    Decorate {
        #[command(flatten)]
        profile: ProfileArgs,
        /// Initial class attribute of the root node
        #[arg(long)]
        class_attr: Option<String>,
        /// Simulate a document without a root element
        #[arg(long, conflicts_with = "class_attr")]
        no_root: bool,
    },
    /// Print the reserved prefixes and marker tokens
    Constants {},
}

/// Where the platform snapshot comes from, plus class option overrides.
#[derive(Debug, Clone, Args)]
pub struct ProfileArgs {
    /// Profile file (TOML/JSON/YAML); defaults to `pclass.*` in the working directory
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Browser name; together with `--os` replaces the profile file
    #[arg(long)]
    pub browser: Option<String>,

    /// Browser major version
    #[arg(long, requires = "browser")]
    pub browser_version: Option<u32>,

    /// Canonical browser class name
    #[arg(long, requires = "browser")]
    pub browser_class: Option<String>,

    /// Operating system name
    #[arg(long)]
    pub os: Option<String>,

    /// Extra feature flag: `name`, `!name`, or `name=true|false` (repeatable)
    #[arg(short, long = "feature", value_name = "SPEC", value_parser = parse_feature)]
    pub features: Vec<FeatureFlag>,

    /// Ignore the profile's default feature flags
    #[arg(long)]
    pub no_defaults: bool,

    /// Existing class kept in front of the platform classes (repeatable)
    #[arg(long = "existing", value_name = "CLASS")]
    pub existing: Vec<String>,
}

/// Parses `name`, `!name`, `name=true` or `name=false` into a feature flag.
pub fn parse_feature(spec: &str) -> Result<FeatureFlag, String> {
    let spec = spec.trim();
    let (name, supported) = match spec.split_once('=') {
        Some((name, value)) => {
            let supported = match value.trim() {
                "true" | "yes" | "1" => true,
                "false" | "no" | "0" => false,
                other => return Err(format!("invalid support value '{other}', expected true or false")),
            };
            (name.trim(), supported)
        },
        None => spec.strip_prefix('!').map_or((spec, true), |name| (name, false)),
    };

    if name.is_empty() || name.chars().any(char::is_whitespace) {
        return Err(format!("invalid feature name '{name}'"));
    }
    Ok(FeatureFlag::new(name, supported))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_feature_specs() {
        assert_eq!(parse_feature("webgl"), Ok(FeatureFlag::supported("webgl")));
        assert_eq!(parse_feature("!touch"), Ok(FeatureFlag::unsupported("touch")));
        assert_eq!(parse_feature("webp=false"), Ok(FeatureFlag::unsupported("webp")));
        assert_eq!(parse_feature("webp = true"), Ok(FeatureFlag::supported("webp")));
    }

    #[test]
    fn rejects_malformed_feature_specs() {
        assert!(parse_feature("").is_err());
        assert!(parse_feature("!").is_err());
        assert!(parse_feature("a b").is_err());
        assert!(parse_feature("webp=maybe").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

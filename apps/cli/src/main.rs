#![allow(clippy::print_stdout)]

pub mod handlers;
pub mod models;

use crate::handlers::{classes, constants, decorate};
use crate::models::args::{AppCommands, Cli};

use anyhow::Result;
use clap::Parser;
use pclass_logger::{LevelFilter, Logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    let _logger = Logger::builder(env!("CARGO_PKG_NAME")).level(level).init()?;

    match cli.command {
        AppCommands::Classes { profile } => classes::print_classes(&profile)?,
        AppCommands::Decorate { profile, class_attr, no_root } => {
            decorate::decorate_twice(&profile, class_attr.as_deref(), no_root)?;
        },
        AppCommands::Constants {} => constants::print_constants(),
    }

    Ok(())
}

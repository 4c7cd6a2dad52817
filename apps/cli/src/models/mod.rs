pub mod args;
pub mod profile;

pub mod classes;
pub mod constants;
pub mod decorate;

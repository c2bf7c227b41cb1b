//! Report renderers for the command line

pub mod console;
pub mod json;

pub use console::ConsoleReporter;
pub use json::{CheckedFile, JsonReporter};

//! Command-line front end for the article template checker
//!
//! The binary reads a `.docx`, extracts its text, validates it and renders
//! the report. Rendering lives here so it can be tested without a file.

pub mod reporter;

//! Extracted API records, shared by the scrape and render passes.

use serde::{Deserialize, Serialize};

/// One parameter of a documented function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Lowercase, spaces replaced by underscores, brackets stripped.
    pub name: String,
    pub optional: bool,
}

/// A function signature scraped from the manual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub name: String,
    /// Top-level heading the signature appeared under, ordinal removed.
    pub category: Option<String>,
    pub params: Vec<Param>,
    /// Paragraphs joined with a blank line.
    pub desc: String,
}

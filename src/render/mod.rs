//! Output formats for the extracted API, dispatched by name.

pub mod lua;
pub mod markdown;

use anyhow::{anyhow, Result};

use crate::model::Signature;

/// Turns the extracted API into one text artifact.
pub trait Renderer {
    fn render(&self, api: &[Signature]) -> String;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "lua" => Ok(Box::new(lua::LuaRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use lua or markdown", format)),
    }
}

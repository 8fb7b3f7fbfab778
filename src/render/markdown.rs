//! Markdown reference page, grouped by category in document order.

use crate::model::Signature;
use crate::render::Renderer;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, api: &[Signature]) -> String {
        let mut out = String::from("# API Reference\n");
        let mut current: Option<Option<&str>> = None;

        for func in api {
            let category = func.category.as_deref();
            if current != Some(category) {
                out.push_str(&format!("\n## {}\n", category.unwrap_or("Uncategorized")));
                current = Some(category);
            }

            out.push_str(&format!("\n### `{}`\n", heading(func)));
            if !func.desc.is_empty() {
                out.push('\n');
                out.push_str(&func.desc);
                out.push('\n');
            }
        }
        out
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

/// `name(a, [b])`: optional parameters in brackets.
fn heading(func: &Signature) -> String {
    let params: Vec<String> = func
        .params
        .iter()
        .map(|p| {
            if p.optional {
                format!("[{}]", p.name)
            } else {
                p.name.clone()
            }
        })
        .collect();
    format!("{}({})", func.name, params.join(", "))
}

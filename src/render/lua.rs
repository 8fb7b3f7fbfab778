//! Lua language-server definitions (`---@meta` stubs).

use crate::model::Signature;
use crate::render::Renderer;

pub struct LuaRenderer;

impl Renderer for LuaRenderer {
    fn render(&self, api: &[Signature]) -> String {
        let mut out = String::from("---@meta\n");
        for func in api {
            render_stub(&mut out, func);
        }
        out
    }

    fn file_extension(&self) -> &str {
        "lua"
    }
}

fn render_stub(out: &mut String, func: &Signature) {
    out.push_str("\n---");
    out.push_str(&func.desc.replace('\n', "\n---"));

    for p in &func.params {
        let suffix = if p.optional { "?" } else { "" };
        out.push_str(&format!("\n---@param {} any{}", p.name, suffix));
    }

    out.push_str(&format!("\n{} end\n", declaration(func)));
}

/// `function name(a, b, c)`, optional markers dropped.
fn declaration(func: &Signature) -> String {
    let params: Vec<&str> = func.params.iter().map(|p| p.name.as_str()).collect();
    format!("function {}({})", func.name, params.join(", "))
}

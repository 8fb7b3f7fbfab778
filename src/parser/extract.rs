use super::blocks::Block;
use crate::model::{Param, Signature};

/// Traversal state carried between blocks.
#[derive(Debug, Default)]
struct Cursor {
    category: Option<String>,
    /// Paragraphs belong to the last signature while set.
    capturing: bool,
}

/// Signature under construction; paragraphs are joined once the pass ends.
struct Draft {
    name: String,
    category: Option<String>,
    params: Vec<Param>,
    paragraphs: Vec<String>,
}

impl Draft {
    fn finish(self) -> Signature {
        Signature {
            name: self.name,
            category: self.category,
            params: self.params,
            desc: self.paragraphs.join("\n\n"),
        }
    }
}

/// Fold classified blocks into signatures, then fill blank descriptions upward.
pub fn collect_signatures(blocks: &[Block]) -> Vec<Signature> {
    let mut cursor = Cursor::default();
    let mut drafts: Vec<Draft> = Vec::new();

    for block in blocks {
        match block {
            Block::Category(name) => {
                cursor.category = Some(name.clone());
                cursor.capturing = false;
            }
            Block::Subcategory => cursor.capturing = false,
            Block::Signature { name, params } => {
                cursor.capturing = true;
                drafts.push(Draft {
                    name: name.clone(),
                    category: cursor.category.clone(),
                    params: params.clone(),
                    paragraphs: Vec::new(),
                });
            }
            Block::Paragraph { text, code } if cursor.capturing => {
                if let Some(draft) = drafts.last_mut() {
                    draft.paragraphs.push(if *code {
                        format!("```\n{}\n```", text)
                    } else {
                        text.clone()
                    });
                }
            }
            Block::Paragraph { .. } => {}
        }
    }

    let mut api: Vec<Signature> = drafts.into_iter().map(Draft::finish).collect();
    fill_upward(&mut api);
    api
}

/// Give every blank description the description of the signature after it.
///
/// Runs back to front, so a run of blanks takes the first non-blank entry
/// below it. A blank last entry stays blank.
pub fn fill_upward(api: &mut [Signature]) {
    for i in (0..api.len().saturating_sub(1)).rev() {
        if api[i].desc.is_empty() {
            api[i].desc = api[i + 1].desc.clone();
        }
    }
}

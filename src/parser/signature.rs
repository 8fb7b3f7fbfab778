use std::sync::LazyLock;

use regex::Regex;

use crate::model::Param;

/// Whole-heading call form. Rejects headings that only mention a call mid-sentence.
static SIGNATURE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[A-Z]+\([A-Z0-9, _\[\]]*\)\s*$").unwrap());

/// Headings that break the grammar but still document a function.
/// Compared against the trimmed heading text.
pub const EXCEPTIONS: &[&str] = &[
    "SSPR(SX, SY, SW, SH, DX, DY, [DW, DH], [FLIP_X], [FLIP_Y]]",
    "FOLDER",
    "RESUME",
    "REBOOT",
    "YIELD",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadingMatch {
    Signature { name: String, params: Vec<Param> },
    NotASignature,
}

/// Decide whether a signature-level heading documents a function, and parse it if so.
pub fn classify(heading: &str) -> HeadingMatch {
    let text = heading.trim();
    if !SIGNATURE_RE.is_match(text) && !EXCEPTIONS.contains(&text) {
        return HeadingMatch::NotASignature;
    }

    let (name, rest) = match text.find('(') {
        Some(i) => text.split_at(i),
        None => (text, ""),
    };

    // Everything up to the first closing paren; nested optional groups stay inside.
    let inner = rest.trim_matches('(').split(')').next().unwrap_or_default();

    let params = inner
        .split(", ")
        .filter(|token| !token.trim().is_empty())
        .map(parse_param)
        .collect();

    HeadingMatch::Signature {
        name: name.trim().to_lowercase(),
        params,
    }
}

/// Loose on purpose: `[x` and `y]` both count, so split groups like `[DW, DH]`
/// mark each half optional.
pub fn is_optional(token: &str) -> bool {
    token.starts_with('[') || token.ends_with(']')
}

fn parse_param(token: &str) -> Param {
    Param {
        name: token
            .trim_matches(|c| c == '[' || c == ']')
            .trim()
            .replace(' ', "_")
            .to_lowercase(),
        optional: is_optional(token),
    }
}

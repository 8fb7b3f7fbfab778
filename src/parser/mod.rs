pub mod blocks;
pub mod extract;
pub mod signature;

use scraper::Html;
use tracing::info;

use crate::error::ExtractError;
use crate::model::Signature;
pub use blocks::Boundaries;

/// Two-step pass: HTML siblings → blocks → signatures.
pub fn extract_api(html: &str, bounds: &Boundaries) -> Result<Vec<Signature>, ExtractError> {
    let doc = Html::parse_document(html);
    let blocks = blocks::classify_nodes(&doc, bounds)?;
    let api = extract::collect_signatures(&blocks);
    info!(
        "Extracted {} signatures between #{} and #{}",
        api.len(),
        bounds.start,
        bounds.end
    );
    Ok(api)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Param;

    fn synthetic(body: &str) -> String {
        format!(
            "<html><body>\n<div><h1 id=\"START\">API</h1></div>\n{body}\n<div><h1 id=\"END\">Appendix</h1></div>\n</body></html>"
        )
    }

    fn bounds() -> Boundaries {
        Boundaries {
            start: "START".into(),
            end: "END".into(),
        }
    }

    fn manual_bounds() -> Boundaries {
        Boundaries {
            start: "API_Reference".into(),
            end: "Appendix".into(),
        }
    }

    #[test]
    fn minimal_document() {
        let html = synthetic(
            "<div><h2>1 MATH</h2></div>\n<div><h5>ABS(X)</h5></div>\n<p>Returns absolute value.</p>",
        );
        let api = extract_api(&html, &bounds()).unwrap();
        assert_eq!(
            api,
            vec![Signature {
                name: "abs".into(),
                category: Some("MATH".into()),
                params: vec![Param {
                    name: "x".into(),
                    optional: false
                }],
                desc: "Returns absolute value.".into(),
            }]
        );
    }

    #[test]
    fn exception_heading_without_parens() {
        let html = synthetic("<div><h2>6 SYSTEM</h2></div><div><h5>FOLDER</h5></div><p>Open the carts folder.</p>");
        let api = extract_api(&html, &bounds()).unwrap();
        assert_eq!(api.len(), 1);
        assert_eq!(api[0].name, "folder");
        assert!(api[0].params.is_empty());
    }

    #[test]
    fn code_block_paragraph() {
        let html = synthetic("<div><h5>FOO()</h5></div><p class=\"codebox\">a=1</p>");
        let api = extract_api(&html, &bounds()).unwrap();
        assert_eq!(api[0].desc, "```\na=1\n```");
    }

    #[test]
    fn idempotent() {
        let html = std::fs::read_to_string("tests/fixtures/manual.html").unwrap();
        let first = extract_api(&html, &manual_bounds()).unwrap();
        let second = extract_api(&html, &manual_bounds()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_boundary_fails() {
        let err = extract_api("<p>no markers</p>", &bounds()).unwrap_err();
        assert!(matches!(err, ExtractError::BoundaryNotFound { .. }));
    }

    #[test]
    fn manual_fixture() {
        let html = std::fs::read_to_string("tests/fixtures/manual.html").unwrap();
        let api = extract_api(&html, &manual_bounds()).unwrap();

        let names: Vec<&str> = api.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            ["load", "save", "folder", "cls", "circ", "circfill", "sspr", "abs", "flr"]
        );

        // categories follow the h2 headings
        assert!(api[..3].iter().all(|s| s.category.as_deref() == Some("SYSTEM")));
        assert!(api[3..7].iter().all(|s| s.category.as_deref() == Some("GRAPHICS")));
        assert!(api[7..].iter().all(|s| s.category.as_deref() == Some("MATH")));

        // circ had no paragraphs of its own and inherits circfill's
        let circ = &api[4];
        let circfill = &api[5];
        assert!(!circ.desc.is_empty());
        assert_eq!(circ.desc, circfill.desc);

        // cls description stops at the h3 subcategory
        assert_eq!(api[3].desc, "Clear the screen and reset the clipping rectangle.");

        // load keeps its code example fenced and nbsp normalized
        assert_eq!(
            api[0].desc,
            "Load a cartridge.\n\n```\nload(\"#mygame\")\n```"
        );

        let sspr = &api[6];
        assert_eq!(sspr.params.len(), 10);
        assert!(sspr.params[6].optional && sspr.params[7].optional);

        // text after the Appendix marker never leaks in
        assert!(!api.iter().any(|s| s.desc.contains("Appendix")));
        assert!(!names.contains(&"stat"));
    }
}

//! Prose document renderer.
//!
//! Turns a markdown-like document into a section title plus formatted
//! paragraphs:
//!
//! - a `# ` heading is dropped,
//! - the last `## ` heading becomes the title,
//! - one blank line directly after a heading is swallowed,
//! - paragraphs made only of `key: value` lines are dropped,
//! - everything else goes through [`inline::format`] and is wrapped in `<p>`.
//!
//! Rendering never fails: empty input gives an empty title and no fragments.

use crate::html;
use crate::inline;
use crate::lexer::{Lexer, Line};
use crate::meta::is_metadata_line;
use crate::model::RenderedSection;

/// Render one prose document.
pub fn render(text: &str) -> RenderedSection {
    let mut title = "";
    let mut body_lines: Vec<Line<'_>> = Vec::with_capacity(32);
    let mut skip_blank_once = false;

    for line in Lexer::new(text.trim()) {
        let trimmed = line.trimmed();

        if let Some(rest) = trimmed.strip_prefix("## ") {
            title = rest.trim();
            skip_blank_once = true;
            continue;
        }
        if trimmed.starts_with("# ") {
            skip_blank_once = true;
            continue;
        }
        if skip_blank_once && trimmed.is_empty() {
            skip_blank_once = false;
            continue;
        }

        skip_blank_once = false;
        body_lines.push(line);
    }

    let body = paragraphs(&body_lines)
        .into_iter()
        .filter(|p| !is_metadata_paragraph(p))
        .map(|p| html::paragraph(&inline::format(&p)))
        .collect();

    RenderedSection {
        title: title.to_string(),
        body,
    }
}

/// Group lines into paragraphs separated by runs of blank lines.
///
/// Lines inside a paragraph keep their indentation; the paragraph as a whole
/// is trimmed.
fn paragraphs(lines: &[Line<'_>]) -> Vec<String> {
    let mut out = Vec::new();

    for run in lines.split(|line| line.is_blank()) {
        if run.is_empty() {
            continue;
        }
        let joined = run.iter().map(|line| line.text).collect::<Vec<_>>().join("\n");
        let trimmed = joined.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
    }

    out
}

/// A paragraph is metadata when every line in it looks like `key: value`.
/// Paragraphs that mix metadata-looking lines with prose are kept whole.
fn is_metadata_paragraph(paragraph: &str) -> bool {
    paragraph
        .lines()
        .map(str::trim_start)
        .filter(|line| !line.is_empty())
        .all(is_metadata_line)
}

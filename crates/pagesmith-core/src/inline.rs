//! Inline formatting for prose paragraphs.
//!
//! Formatting is an ordered pipeline of independent single-pass rewrites:
//! strong emphasis, then emphasis, then em-dash entities. The order matters.
//! Bold runs first so the asterisks of a `**pair**` are gone before single
//! `*` matching starts, and the space-padded dash is rewritten before the
//! bare one so it is not replaced twice.
//!
//! Matching follows a lazy "shortest span on the same line" rule: an opening
//! delimiter pairs with the nearest closing delimiter that leaves at least one
//! character between them, and a span never crosses a newline. Delimiters that
//! find no partner are left as literal text.

use memchr::memchr;
use memchr::memmem::Finder;

use crate::html;

/// Apply the full inline pipeline to one paragraph.
pub fn format(text: &str) -> String {
    let text = wrap_delimited(text, "**", html::STRONG_OPEN, html::STRONG_CLOSE);
    let text = wrap_delimited(&text, "*", html::EM_OPEN, html::EM_CLOSE);
    replace_dashes(&text)
}

/// Wrap every `delim`…`delim` span in `open`/`close`, left to right.
///
/// The wrapped content is copied verbatim; it is never re-scanned for the
/// same delimiter.
pub fn wrap_delimited(text: &str, delim: &str, open: &str, close: &str) -> String {
    let finder = Finder::new(delim);
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() + 16);
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = finder.find(&bytes[pos..]) {
        let start = pos + offset;
        let content_start = start + delim.len();

        match find_closing(text, content_start, &finder) {
            Some(close_at) => {
                out.push_str(&text[copied..start]);
                out.push_str(open);
                out.push_str(&text[content_start..close_at]);
                out.push_str(close);
                pos = close_at + delim.len();
                copied = pos;
            }
            // No partner from here; retry one byte further (delimiters are ASCII)
            None => pos = start + 1,
        }
    }

    out.push_str(&text[copied..]);
    out
}

/// Find the closing delimiter for a span whose content starts at
/// `content_start`, requiring at least one content character and no newline.
#[inline]
fn find_closing(text: &str, content_start: usize, finder: &Finder<'_>) -> Option<usize> {
    let rest = &text[content_start..];
    let first = rest.chars().next().filter(|&c| c != '\n')?;
    let line_end = memchr(b'\n', rest.as_bytes()).unwrap_or(rest.len());
    let search_from = first.len_utf8();

    finder
        .find(&rest.as_bytes()[search_from..line_end])
        .map(|offset| content_start + search_from + offset)
}

/// Rewrite em-dashes to the named entity.
///
/// `" — "` is handled before `"— "`; a dash with a space on both sides keeps
/// both spaces.
pub fn replace_dashes(text: &str) -> String {
    text.replace(" \u{2014} ", " &mdash; ")
        .replace("\u{2014} ", "&mdash; ")
}

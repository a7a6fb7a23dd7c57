//! Fixed markup emitted by the pipeline.
//!
//! Class names match the site stylesheet; nothing here is escaped because
//! source documents are trusted, hand-written content.

/// Separator placed between rendered fragments (paragraphs, event cards) so
/// they line up with the indentation of the page template.
pub const FRAGMENT_SEPARATOR: &str = "\n                ";

pub const STRONG_OPEN: &str = r#"<strong class="text-dark-50">"#;
pub const STRONG_CLOSE: &str = "</strong>";
pub const EM_OPEN: &str = "<em>";
pub const EM_CLOSE: &str = "</em>";

/// Bullet placed between the time and location of an event.
pub const DETAILS_SEPARATOR: &str = " &bull; ";

/// Wrap already-formatted inline content in a paragraph element.
#[inline]
pub fn paragraph(content: &str) -> String {
    format!("<p>{content}</p>")
}

/// Join rendered fragments with [`FRAGMENT_SEPARATOR`].
#[inline]
pub fn join_fragments<S: AsRef<str>>(fragments: &[S]) -> String {
    let mut out = String::new();
    for (i, fragment) in fragments.iter().enumerate() {
        if i > 0 {
            out.push_str(FRAGMENT_SEPARATOR);
        }
        out.push_str(fragment.as_ref());
    }
    out
}

pub(crate) fn details_line(details: &str) -> String {
    format!(r#"<p class="text-dark-400 text-sm mb-2">{details}</p>"#)
}

pub(crate) fn title_link(href: &str, title: &str) -> String {
    format!(r#"<a href="{href}" class="hover:text-gold-500 transition-colors">{title}</a>"#)
}

pub(crate) fn learn_more_link(href: &str) -> String {
    format!(
        r#"<a href="{href}" class="inline-block mt-3 text-gold-500 hover:text-gold-400 text-sm font-medium transition-colors">Learn more &rarr;</a>"#
    )
}

pub(crate) fn event_card(
    title: &str,
    date: &str,
    details: &str,
    description: &str,
    link: &str,
) -> String {
    format!(
        r#"<div class="bg-dark-900 border border-dark-600 rounded-lg p-6 hover:border-gold-700/50 transition-colors">
                    <div class="flex flex-col sm:flex-row sm:items-start sm:justify-between gap-2 mb-3">
                        <h3 class="font-display text-xl font-bold text-dark-50">{title}</h3>
                        <span class="text-gold-500 font-medium text-sm whitespace-nowrap">{date}</span>
                    </div>
                    {details}
                    <p class="text-dark-300 leading-relaxed">{description}</p>
                    {link}
                </div>"#
    )
}

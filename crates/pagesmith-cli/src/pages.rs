//! The fixed set of pages and the content each one pulls from the sources.
//!
//! Page bodies live as HTML fragments under `pages/`; their `{{tokens}}` are
//! filled here, and `{{base}}` is left for [`assemble_page`] to resolve.

use pagesmith_core::events::BASE_TOKEN;
use pagesmith_core::meta;
use pagesmith_core::template::{self, Vars};

use crate::error::BuildError;
use crate::site::{assemble_page, Nav, PageSpec, SiteSources};

const HOME_CONTENT: &str = include_str!("../pages/home.html");
const HOME_SCRIPTS: &str = include_str!("../pages/home-scripts.html");
const ABOUT_CONTENT: &str = include_str!("../pages/about.html");
const EVENTS_CONTENT: &str = include_str!("../pages/events.html");
const EVENTS_SCRIPTS: &str = include_str!("../pages/events-scripts.html");
const SATURDAY_CONTENT: &str = include_str!("../pages/saturday.html");

const DEFAULT_TAGLINE: &str = "We have a plan.";
const DEFAULT_SATURDAYS_TITLE: &str = "Free State Saturdays";

/// A finished page and its path relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub path: &'static str,
    pub html: String,
}

/// Render every page of the site, home first.
pub fn render_pages(sources: &SiteSources) -> Result<Vec<Page>, BuildError> {
    Ok(vec![
        Page {
            path: "index.html",
            html: assemble_page(&sources.base, &home(sources)?),
        },
        Page {
            path: "about/index.html",
            html: assemble_page(&sources.base, &about(sources)),
        },
        Page {
            path: "events/index.html",
            html: assemble_page(&sources.base, &events(sources)),
        },
        Page {
            path: "saturday/index.html",
            html: assemble_page(&sources.base, &saturday(sources)),
        },
    ])
}

fn home(sources: &SiteSources) -> Result<PageSpec<'static>, BuildError> {
    let first_word = sources.words.first().map(String::as_str).unwrap_or("");
    let content = template::fill(
        HOME_CONTENT,
        &Vars::new()
            .with("first_word", first_word)
            .with("sub_tagline", sources.hero.get_or("sub_tagline", DEFAULT_TAGLINE)),
    );
    let scripts = template::fill(
        HOME_SCRIPTS,
        &Vars::new().with("words_json", serde_json::to_string(&sources.words)?),
    );

    Ok(PageSpec {
        title: "Free State Party \u{2014} A Private Club for Free Staters",
        description: "A private club for liberty-minded free staters in New Hampshire. \
We didn't come here to attend committee meetings. We came here to build something.",
        og_title: "Free State Party",
        content,
        scripts,
        active_nav: None,
        nested: false,
    })
}

fn about(sources: &SiteSources) -> PageSpec<'static> {
    let content = template::fill(
        ABOUT_CONTENT,
        &Vars::new()
            .with("pitch_title", sources.pitch.title.as_str())
            .with("pitch_body", sources.pitch.body_html())
            .with("what_title", sources.what.title.as_str())
            .with("what_body", sources.what.body_html()),
    );

    PageSpec {
        title: "About \u{2014} Free State Party",
        description: "Not a nonprofit. Not a political party. \
A private club for liberty-minded free staters in New Hampshire.",
        og_title: "About \u{2014} Free State Party",
        content,
        scripts: String::new(),
        active_nav: Some(Nav::About),
        nested: true,
    }
}

fn events(sources: &SiteSources) -> PageSpec<'static> {
    let cards = sources.events.render(BASE_TOKEN);
    // Members-only cards are rendered but the page only shows a placeholder.
    tracing::debug!(
        closed_cards = sources.events.closed.len(),
        closed_bytes = cards.closed.len(),
        "members-only events withheld from page"
    );

    let content = template::fill(
        EVENTS_CONTENT,
        &Vars::new().with("open_events", cards.open.as_str()),
    );

    PageSpec {
        title: "Events \u{2014} Free State Party",
        description: "Open and members-only events from the Free State Party in New Hampshire.",
        og_title: "Events \u{2014} Free State Party",
        content,
        scripts: EVENTS_SCRIPTS.to_string(),
        active_nav: Some(Nav::Events),
        nested: true,
    }
}

fn saturday(sources: &SiteSources) -> PageSpec<'static> {
    let title = if sources.saturdays.title.is_empty() {
        DEFAULT_SATURDAYS_TITLE
    } else {
        sources.saturdays.title.as_str()
    };
    let maps_url = meta::maps_search_url(sources.saturdays_meta.get_or("address", ""));

    let content = template::fill(
        SATURDAY_CONTENT,
        &Vars::new()
            .with("saturdays_title", title)
            .with("saturdays_body", sources.saturdays.body_html())
            .with("maps_url", maps_url),
    );

    PageSpec {
        title: "Free State Saturdays \u{2014} Free State Party",
        description: "A monthly open gathering for liberty-minded people in New Hampshire. \
No membership required.",
        og_title: "Free State Saturdays",
        content,
        scripts: String::new(),
        active_nav: None,
        nested: true,
    }
}

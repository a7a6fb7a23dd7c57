//! Event record parser and card renderer.
//!
//! The record document is a flat list of lines:
//!
//! ```text
//! ## Open Events
//! - title: Liberty Mixer
//! date: June 1
//! time: 7pm
//! location: Concord
//! link: /events/mixer
//! ## Closed Events
//! - title: Board Meeting
//! date: June 5
//! ```
//!
//! Parsing is an explicit reducer: [`ParseState::step`] folds one line into
//! the state and [`ParseState::finish`] performs the last flush. Nothing in
//! here fails; lines that match no marker are ignored.

use tracing::trace;

use crate::html;
use crate::lexer::{Lexer, Line};
use crate::model::{EventCollection, EventRecord, Field, RenderedEvents, Section};

/// Heading that switches collection to open events (compared case-insensitively).
pub const OPEN_MARKER: &str = "## open events";
/// Heading that switches collection to members-only events (compared case-insensitively).
pub const CLOSED_MARKER: &str = "## closed events";
/// Line prefix that starts a new record.
pub const RECORD_PREFIX: &str = "- title:";
/// Placeholder the page assembler later replaces with a relative base path.
pub const BASE_TOKEN: &str = "{{base}}";

/// Parse a record document into open and closed events.
pub fn parse(text: &str) -> EventCollection {
    Lexer::new(text.trim())
        .fold(ParseState::default(), ParseState::step)
        .finish()
}

/// Reducer state for [`parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseState {
    section: Option<Section>,
    pending: Option<EventRecord>,
    collection: EventCollection,
}

impl ParseState {
    /// Fold one line into the state.
    pub fn step(mut self, line: Line<'_>) -> Self {
        let trimmed = line.trimmed();

        if trimmed.eq_ignore_ascii_case(OPEN_MARKER) {
            self.flush();
            self.section = Some(Section::Open);
        } else if trimmed.eq_ignore_ascii_case(CLOSED_MARKER) {
            self.flush();
            self.section = Some(Section::Closed);
        } else if trimmed.starts_with("# ") {
            // top-level document heading
        } else if let Some(title) = trimmed.strip_prefix(RECORD_PREFIX) {
            self.flush();
            let title = title.trim();
            // Replaces a record still waiting for its first section.
            self.pending = if title.is_empty() {
                trace!(line = line.number, "record without title ignored");
                None
            } else {
                Some(EventRecord::new(title))
            };
        } else if let Some((field, value)) = field_line(trimmed) {
            match self.pending.as_mut() {
                Some(record) => record.set(field, value),
                None => trace!(line = line.number, ?field, "field outside a record ignored"),
            }
        }

        self
    }

    /// Flush the last pending record and return the collected events.
    pub fn finish(mut self) -> EventCollection {
        self.flush();
        self.collection
    }

    /// Commit the pending record into the active section. Without a section
    /// the record stays pending until one begins.
    fn flush(&mut self) {
        let Some(section) = self.section else {
            return;
        };
        if let Some(record) = self.pending.take() {
            self.collection.push(section, record);
        }
    }
}

fn field_line(trimmed: &str) -> Option<(Field, &str)> {
    Field::PREFIXES.iter().find_map(|&(prefix, field)| {
        trimmed
            .strip_prefix(prefix)
            .map(|value| (field, value.trim()))
    })
}

/// Rewrite a site-absolute link (`/events/x`) to sit under `base_token`.
/// Scheme-qualified and relative links pass through unchanged.
pub fn resolve_link(link: &str, base_token: &str) -> String {
    if link.starts_with('/') {
        format!("{base_token}{link}")
    } else {
        link.to_string()
    }
}

/// Render one event as a card.
pub fn render_card(record: &EventRecord, base_token: &str) -> String {
    let details: Vec<&str> = [record.time.as_deref(), record.location.as_deref()]
        .into_iter()
        .flatten()
        .filter(|value| !value.is_empty())
        .collect();
    let details = if details.is_empty() {
        String::new()
    } else {
        html::details_line(&details.join(html::DETAILS_SEPARATOR))
    };

    let link = record
        .link
        .as_deref()
        .filter(|link| !link.is_empty())
        .map(|link| resolve_link(link, base_token));

    let (title, learn_more) = match &link {
        Some(href) => (
            html::title_link(href, &record.title),
            html::learn_more_link(href),
        ),
        None => (record.title.clone(), String::new()),
    };

    html::event_card(
        &title,
        record.date.as_deref().unwrap_or(""),
        &details,
        record.description.as_deref().unwrap_or(""),
        &learn_more,
    )
}

/// Render cards in source order, joined with the fragment separator.
pub fn render_cards(records: &[EventRecord], base_token: &str) -> String {
    let cards: Vec<String> = records
        .iter()
        .map(|record| render_card(record, base_token))
        .collect();
    html::join_fragments(&cards)
}

impl EventCollection {
    /// Render the open and closed lists independently.
    pub fn render(&self, base_token: &str) -> RenderedEvents {
        RenderedEvents {
            open: render_cards(&self.open, base_token),
            closed: render_cards(&self.closed, base_token),
        }
    }
}

//! Output types produced by the content pipeline.
//!
//! Everything here is plain owned data: built fresh by each render or parse
//! call and never mutated afterwards.

use crate::html;

/// A rendered prose document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedSection {
    /// Text of the last `## ` heading, or empty if there was none.
    pub title: String,
    /// One `<p>` fragment per surviving paragraph, in source order.
    pub body: Vec<String>,
}

impl RenderedSection {
    /// Body fragments joined with the fixed fragment separator.
    pub fn body_html(&self) -> String {
        html::join_fragments(&self.body)
    }

    /// Check if the document produced neither a title nor any paragraph.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body.is_empty()
    }
}

/// Which list a record is collected into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Events open to the public.
    Open,
    /// Members-only events.
    Closed,
}

/// A single event entry.
///
/// `title` is the only required field; every other field is `None` when the
/// source did not supply it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventRecord {
    pub title: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    /// Destination as written in the source (not yet rewritten).
    pub link: Option<String>,
}

impl EventRecord {
    /// Create a record with only a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set one field, replacing any earlier value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Location => &mut self.location,
            Field::Description => &mut self.description,
            Field::Link => &mut self.link,
        };
        *slot = Some(value.into());
    }
}

/// Optional fields of an [`EventRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Time,
    Location,
    Description,
    Link,
}

impl Field {
    /// All fields with the line prefix that introduces them.
    pub const PREFIXES: [(&'static str, Field); 5] = [
        ("date:", Field::Date),
        ("time:", Field::Time),
        ("location:", Field::Location),
        ("description:", Field::Description),
        ("link:", Field::Link),
    ];
}

/// Events grouped by section, each list in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventCollection {
    pub open: Vec<EventRecord>,
    pub closed: Vec<EventRecord>,
}

impl EventCollection {
    /// Records of one section.
    pub fn section(&self, section: Section) -> &[EventRecord] {
        match section {
            Section::Open => &self.open,
            Section::Closed => &self.closed,
        }
    }

    /// Total number of records across both sections.
    pub fn len(&self) -> usize {
        self.open.len() + self.closed.len()
    }

    /// Check if no record was collected.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty() && self.closed.is_empty()
    }

    pub(crate) fn push(&mut self, section: Section, record: EventRecord) {
        match section {
            Section::Open => self.open.push(record),
            Section::Closed => self.closed.push(record),
        }
    }
}

/// Card markup for both sections, rendered independently.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedEvents {
    pub open: String,
    pub closed: String,
}

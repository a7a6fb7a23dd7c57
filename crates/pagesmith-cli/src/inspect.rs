//! Single-document inspection: `render` and `events` subcommands.
//!
//! Both read one file, run it through the same parsers the build uses, and
//! print the result to stdout as text or JSON.

use std::io::{self, Write};

use pagesmith_core::{document, events, EventCollection, EventRecord, RenderedSection};
use serde::Serialize;

use crate::cli::{EventsArgs, RenderArgs};
use crate::error::CliError;
use crate::site::read_document;

// =============================================================================
// Render Command
// =============================================================================

pub fn cmd_render(args: &RenderArgs) -> Result<(), CliError> {
    let section = document::render(&read_document(&args.file)?);
    let mut out = io::stdout().lock();
    write_section(&mut out, &section, args.json).map_err(CliError::Output)
}

pub fn write_section(
    out: &mut impl Write,
    section: &RenderedSection,
    json: bool,
) -> io::Result<()> {
    if json {
        let value = JsonSection {
            title: &section.title,
            body: section.body.iter().map(String::as_str).collect(),
        };
        serde_json::to_writer_pretty(&mut *out, &value)?;
        return writeln!(out);
    }

    if section.title.is_empty() {
        writeln!(out, "Title: (none)")?;
    } else {
        writeln!(out, "Title: {}", section.title)?;
    }
    writeln!(out, "Paragraphs: {}", section.body.len())?;
    for fragment in &section.body {
        writeln!(out)?;
        writeln!(out, "{fragment}")?;
    }
    Ok(())
}

// =============================================================================
// Events Command
// =============================================================================

/// How `events` prints a parsed collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventsOutput {
    Text,
    Json,
    Html,
}

impl EventsOutput {
    fn from_args(args: &EventsArgs) -> Self {
        if args.json {
            Self::Json
        } else if args.html {
            Self::Html
        } else {
            Self::Text
        }
    }
}

pub fn cmd_events(args: &EventsArgs) -> Result<(), CliError> {
    let collection = events::parse(&read_document(&args.file)?);
    let mut out = io::stdout().lock();
    write_events(
        &mut out,
        &collection,
        EventsOutput::from_args(args),
        &args.base_token,
    )
    .map_err(CliError::Output)
}

pub fn write_events(
    out: &mut impl Write,
    collection: &EventCollection,
    format: EventsOutput,
    base_token: &str,
) -> io::Result<()> {
    match format {
        EventsOutput::Json => {
            let value = JsonEvents {
                open: collection.open.iter().map(JsonEvent::from).collect(),
                closed: collection.closed.iter().map(JsonEvent::from).collect(),
            };
            serde_json::to_writer_pretty(&mut *out, &value)?;
            writeln!(out)
        }
        EventsOutput::Html => {
            let cards = collection.render(base_token);
            writeln!(out, "<!-- open events -->")?;
            writeln!(out, "{}", cards.open)?;
            writeln!(out, "<!-- closed events -->")?;
            writeln!(out, "{}", cards.closed)
        }
        EventsOutput::Text => {
            write_record_list(out, "Open events", &collection.open)?;
            writeln!(out)?;
            write_record_list(out, "Closed events", &collection.closed)
        }
    }
}

fn write_record_list(
    out: &mut impl Write,
    heading: &str,
    records: &[EventRecord],
) -> io::Result<()> {
    writeln!(out, "{heading} ({})", records.len())?;
    for record in records {
        writeln!(out, "  - {}", record.title)?;
        let fields = [
            ("date", &record.date),
            ("time", &record.time),
            ("location", &record.location),
            ("description", &record.description),
            ("link", &record.link),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                writeln!(out, "      {name}: {value}")?;
            }
        }
    }
    Ok(())
}

// =============================================================================
// JSON Output
// =============================================================================

#[derive(Serialize)]
struct JsonSection<'a> {
    title: &'a str,
    body: Vec<&'a str>,
}

#[derive(Serialize)]
struct JsonEvents<'a> {
    open: Vec<JsonEvent<'a>>,
    closed: Vec<JsonEvent<'a>>,
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<&'a str>,
}

impl<'a> From<&'a EventRecord> for JsonEvent<'a> {
    fn from(record: &'a EventRecord) -> Self {
        Self {
            title: &record.title,
            date: record.date.as_deref(),
            time: record.time.as_deref(),
            location: record.location.as_deref(),
            description: record.description.as_deref(),
            link: record.link.as_deref(),
        }
    }
}

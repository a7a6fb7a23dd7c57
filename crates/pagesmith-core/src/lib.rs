//! # Pagesmith Core
//!
//! The content pipeline of a small static site, free of any I/O.
//!
//! Two independent components do the real work:
//!
//! - [`document::render`] turns a prose document into a section title and a
//!   list of formatted `<p>` fragments.
//! - [`events::parse`] turns a record document into open and closed
//!   [`EventRecord`] lists, which [`EventCollection::render`] turns into card
//!   markup.
//!
//! [`template::fill`] and the helpers in [`meta`] cover the small amount of
//! glue a page assembler needs on top of that.
//!
//! ## Quick Start
//!
//! ```rust
//! use pagesmith_core::{document, events};
//!
//! let section = document::render("## Who we are\n\nWe are **neighbors**.");
//! assert_eq!(section.title, "Who we are");
//! assert_eq!(
//!     section.body,
//!     vec![r#"<p>We are <strong class="text-dark-50">neighbors</strong>.</p>"#]
//! );
//!
//! let collection = events::parse("## Open Events\n- title: Mixer\ndate: June 1");
//! assert_eq!(collection.open.len(), 1);
//! assert_eq!(collection.open[0].date.as_deref(), Some("June 1"));
//! ```
//!
//! Every call is independent and deterministic: the same input always gives
//! structurally equal output.

pub mod document;
pub mod events;
pub mod html;
pub mod inline;
pub mod lexer;
pub mod meta;
pub mod model;
pub mod template;

pub use meta::{KeyPolicy, Metadata};
pub use model::{EventCollection, EventRecord, Field, RenderedEvents, RenderedSection, Section};
pub use template::Vars;

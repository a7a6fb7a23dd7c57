//! Full site regeneration: read every source, assemble every page, write the
//! output tree.
//!
//! Each build is a complete recomputation with no state carried between
//! runs. A missing or unreadable source aborts the build.

use std::fs;
use std::path::{Path, PathBuf};

use pagesmith_core::meta::{self, KeyPolicy};
use pagesmith_core::template::{self, Vars};
use pagesmith_core::{document, events, EventCollection, Metadata, RenderedSection};
use tracing::{debug, info, warn};

use crate::config::PathSettings;
use crate::error::BuildError;
use crate::pages::{self, Page};

pub const BASE_TEMPLATE: &str = "base.html";
pub const HERO_DOC: &str = "hero.md";
pub const WORDS_DOC: &str = "words.md";
pub const PITCH_DOC: &str = "pitch.md";
pub const WHAT_DOC: &str = "what-this-is.md";
pub const EVENTS_DOC: &str = "events.md";
pub const SATURDAYS_DOC: &str = "saturdays.md";

/// Where the homepage video lands inside the output directory.
pub const VIDEO_TARGET: &str = "video/homepage.mp4";

/// Everything read from `content/` and `templates/`, already parsed.
#[derive(Debug, Clone)]
pub struct SiteSources {
    pub base: String,
    pub hero: Metadata,
    pub words: Vec<String>,
    pub pitch: RenderedSection,
    pub what: RenderedSection,
    pub events: EventCollection,
    pub saturdays: RenderedSection,
    pub saturdays_meta: Metadata,
}

impl SiteSources {
    pub fn load(paths: &PathSettings) -> Result<Self, BuildError> {
        let content = |name: &str| read_document(&paths.content_dir.join(name));

        let base = read_document(&paths.templates_dir.join(BASE_TEMPLATE))?;
        let hero = meta::parse_metadata(&content(HERO_DOC)?, KeyPolicy::Any);
        let words = meta::parse_words(&content(WORDS_DOC)?);
        let pitch = document::render(&content(PITCH_DOC)?);
        let what = document::render(&content(WHAT_DOC)?);
        let events = events::parse(&content(EVENTS_DOC)?);

        let saturdays_text = content(SATURDAYS_DOC)?;
        let saturdays_meta = meta::parse_metadata(&saturdays_text, KeyPolicy::Identifier);
        let saturdays = document::render(&saturdays_text);

        debug!(
            words = words.len(),
            open_events = events.open.len(),
            closed_events = events.closed.len(),
            "sources loaded"
        );

        Ok(Self {
            base,
            hero,
            words,
            pitch,
            what,
            events,
            saturdays,
            saturdays_meta,
        })
    }
}

/// Read a source document, trimmed of surrounding whitespace.
pub fn read_document(path: &Path) -> Result<String, BuildError> {
    fs::read_to_string(path)
        .map(|text| text.trim().to_string())
        .map_err(|err| BuildError::read(path, err))
}

/// Navigation entries that can be highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    About,
    Events,
}

/// One page to inject into the base template.
#[derive(Debug, Clone)]
pub struct PageSpec<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub og_title: &'a str,
    pub content: String,
    pub scripts: String,
    pub active_nav: Option<Nav>,
    /// Written as `<name>/index.html`, so relative links climb one level.
    pub nested: bool,
}

impl PageSpec<'_> {
    /// Value substituted for `{{base}}`.
    pub fn base_path(&self) -> &'static str {
        if self.nested {
            ".."
        } else {
            "."
        }
    }

    fn nav_class(&self, nav: Nav) -> &'static str {
        if self.active_nav == Some(nav) {
            "nav-active"
        } else {
            "text-dark-200"
        }
    }
}

/// Fill the base template for one page.
///
/// Runs two passes: the first injects content, the second resolves the
/// `{{base}}` tokens carried in by that content (event links, asset paths).
pub fn assemble_page(base: &str, page: &PageSpec<'_>) -> String {
    let vars = Vars::new()
        .with("page_title", page.title)
        .with("page_description", page.description)
        .with("og_title", page.og_title)
        .with("page_content", page.content.as_str())
        .with("page_scripts", page.scripts.as_str())
        .with("nav_about_class", page.nav_class(Nav::About))
        .with("nav_events_class", page.nav_class(Nav::Events));
    let html = template::fill(base, &vars);

    template::fill(&html, &Vars::new().with("base", page.base_path()))
}

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Written files, in build order.
    pub pages: Vec<PathBuf>,
    pub copied_video: bool,
    pub words: Vec<String>,
}

/// Regenerate the whole site.
pub fn build(paths: &PathSettings) -> Result<BuildReport, BuildError> {
    info!(root = %paths.root.display(), "building site");

    let sources = SiteSources::load(paths)?;
    let rendered = pages::render_pages(&sources)?;

    let mut written = Vec::with_capacity(rendered.len());
    for page in &rendered {
        written.push(write_page(&paths.output_dir, page)?);
        info!(page = page.path, "built page");
    }

    let copied_video = copy_video(paths)?;

    info!(pages = written.len(), words = ?sources.words, "site built");

    Ok(BuildReport {
        pages: written,
        copied_video,
        words: sources.words,
    })
}

fn write_page(output_dir: &Path, page: &Page) -> Result<PathBuf, BuildError> {
    let path = output_dir.join(page.path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|err| BuildError::write(parent, err))?;
    }
    fs::write(&path, &page.html).map_err(|err| BuildError::write(&path, err))?;
    Ok(path)
}

/// Copy the homepage video once; an existing copy is never overwritten.
fn copy_video(paths: &PathSettings) -> Result<bool, BuildError> {
    let Some(source) = paths.video_source.as_deref() else {
        return Ok(false);
    };
    let target = paths.output_dir.join(VIDEO_TARGET);

    if !source.exists() {
        warn!(source = %source.display(), "video source missing, skipping copy");
        return Ok(false);
    }
    if target.exists() {
        debug!(target = %target.display(), "video already present");
        return Ok(false);
    }

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|err| BuildError::write(parent, err))?;
    }
    fs::copy(source, &target).map_err(|err| BuildError::CopyVideo {
        from: source.to_path_buf(),
        to: target.clone(),
        source: err,
    })?;

    info!(target = VIDEO_TARGET, "copied video");
    Ok(true)
}

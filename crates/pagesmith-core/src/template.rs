//! `{{name}}` token substitution.
//!
//! [`fill`] makes one left-to-right pass: known tokens are replaced, unknown
//! tokens are copied through untouched. A misspelled token therefore survives
//! into the output instead of failing, which is how the page templates have
//! always behaved. Substituted values are not scanned again; a value that
//! itself contains tokens needs a second `fill`.

use std::borrow::Cow;

use memchr::memmem;

const OPEN: &[u8] = b"{{";
const CLOSE: &[u8] = b"}}";

/// Ordered token values for [`fill`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vars<'a> {
    entries: Vec<(&'a str, Cow<'a, str>)>,
}

impl<'a> Vars<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`Vars::insert`].
    pub fn with(mut self, name: &'a str, value: impl Into<Cow<'a, str>>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a token value, replacing any earlier value for the same name.
    pub fn insert(&mut self, name: &'a str, value: impl Into<Cow<'a, str>>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_ref())
    }
}

/// Replace every known `{{name}}` in `template`.
pub fn fill(template: &str, vars: &Vars<'_>) -> String {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(offset) = memmem::find(&bytes[pos..], OPEN) {
        let start = pos + offset;
        let name_start = start + OPEN.len();
        let Some(close) = memmem::find(&bytes[name_start..], CLOSE) else {
            break;
        };
        let name_end = name_start + close;

        match vars.get(&template[name_start..name_end]) {
            Some(value) => {
                out.push_str(&template[copied..start]);
                out.push_str(value);
                pos = name_end + CLOSE.len();
                copied = pos;
            }
            // `{{{{base}}` still resolves the inner `{{base}}`
            None => pos = start + 1,
        }
    }

    out.push_str(&template[copied..]);
    out
}

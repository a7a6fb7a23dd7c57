//! `key: value` metadata and word lists embedded in content documents.

/// Which keys [`parse_metadata`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPolicy {
    /// Any text before the first colon is a key.
    Any,
    /// Only identifier-shaped keys (`address`, `sub_tagline`); lines such as
    /// `Doors open: 7pm` in running prose are skipped.
    Identifier,
}

/// Ordered key/value pairs. Re-inserting a key keeps its original position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Metadata {
    entries: Vec<(String, String)>,
}

impl Metadata {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value for `key`, or `default` when the key is missing.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no key was collected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pairs in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Collect `key: value` pairs from every line that has a colon and does not
/// start with `#`. Keys and values are trimmed; later keys win.
pub fn parse_metadata(text: &str, policy: KeyPolicy) -> Metadata {
    let mut meta = Metadata::new();

    for line in text.lines() {
        if line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if policy == KeyPolicy::Identifier && !is_identifier(key) {
            continue;
        }
        meta.insert(key, value.trim());
    }

    meta
}

/// Non-blank lines, trimmed, in order.
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Check if a line has the metadata shape: a run of lowercase ASCII letters
/// or underscores immediately followed by `:`.
#[inline]
pub fn is_metadata_line(line: &str) -> bool {
    let bytes = line.as_bytes();
    let key_len = bytes
        .iter()
        .take_while(|&&b| b.is_ascii_lowercase() || b == b'_')
        .count();
    key_len > 0 && bytes.get(key_len) == Some(&b':')
}

/// Map search link for a street address; empty when there is no address.
pub fn maps_search_url(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }
    format!(
        "https://www.google.com/maps/search/{}",
        address.replace(' ', "+")
    )
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

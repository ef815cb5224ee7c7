//! Ordered keyword tables
//!
//! A table is a list of `(keywords, value)` entries evaluated in insertion
//! order. An entry matches when any of its keywords occurs in the lowercased
//! text. `first_match` gives priority dispatch; `matches` gives every hit.

/// Ordered keyword → value table
#[derive(Debug, Clone)]
pub struct KeywordTable<T> {
    entries: Vec<(Vec<String>, T)>,
}

impl<T> KeywordTable<T> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry; later entries have lower priority
    pub fn with_entry(mut self, keywords: &[&str], value: T) -> Self {
        self.push(keywords, value);
        self
    }

    /// Append an entry in place
    pub fn push(&mut self, keywords: &[&str], value: T) {
        let keywords = keywords.iter().map(|k| k.to_lowercase()).collect();
        self.entries.push((keywords, value));
    }

    /// Value of the first entry whose keywords occur in `text`
    pub fn first_match(&self, text: &str) -> Option<&T> {
        let lowered = text.to_lowercase();
        self.entries
            .iter()
            .find(|(keywords, _)| Self::hit(keywords, &lowered))
            .map(|(_, value)| value)
    }

    /// Values of every entry whose keywords occur in `text`, in table order
    pub fn matches<'a>(&'a self, text: &str) -> impl Iterator<Item = &'a T> + 'a {
        let lowered = text.to_lowercase();
        self.entries
            .iter()
            .filter(move |(keywords, _)| Self::hit(keywords, &lowered))
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn hit(keywords: &[String], lowered: &str) -> bool {
        keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

impl<T> Default for KeywordTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

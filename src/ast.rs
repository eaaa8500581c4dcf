use crate::error::IniError;
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// A parsed INI document.
///
/// Holds the implicit global section, every named section in the order its
/// header first appeared, and the names of sections whose header occurred
/// more than once. A repeated header never creates a second section: its
/// entries and comments are merged into the one stored under that name, and
/// the duplicate registry refers back to it by name.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct IniDocument {
    global: IniSection,
    sections: IndexMap<String, IniSection>,
    duplicate_sections: IndexSet<String>,
}

/// A section of an INI document: either the global section (empty name) or
/// one introduced by a `[name]` header.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct IniSection {
    name: String,
    #[serde(skip)]
    global: bool,
    comments: Vec<String>,
    section_comments: Vec<String>,
    entries: IndexMap<String, Entry>,
    duplicate_entries: Vec<Entry>,
}

/// A single `key = value` assignment together with the comments found next to it.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Entry {
    key: String,
    value: String,
    comments: Vec<String>,
}

impl Default for IniDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl IniDocument {
    /// Creates a document holding only an empty global section.
    pub fn new() -> Self {
        IniDocument {
            global: IniSection::global(),
            sections: IndexMap::new(),
            duplicate_sections: IndexSet::new(),
        }
    }

    /// The section holding everything that precedes the first header.
    pub fn global(&self) -> &IniSection {
        &self.global
    }

    /// Looks up a named section. Names are compared exactly.
    ///
    /// The global section is not part of the named sections: `section("")`
    /// only finds a section introduced by a `[ ]` header.
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.get(name)
    }

    /// Like [`IniDocument::section`], but reports a missing section as an error.
    ///
    /// # Errors
    /// Returns `IniError::SectionNotFound` if no header with this name was parsed.
    pub fn try_section(&self, name: &str) -> Result<&IniSection, IniError> {
        self.section(name).ok_or_else(|| IniError::SectionNotFound {
            name: name.to_string(),
        })
    }

    /// Looks up an entry by section name and key.
    ///
    /// Only named sections are searched. An empty `section` refers to a
    /// `[ ]` header, never to the global section; use
    /// [`IniDocument::global`] for entries that precede the first header.
    ///
    /// # Errors
    /// Returns `IniError::SectionNotFound` or `IniError::KeyNotFound`.
    pub fn entry(&self, section: &str, key: &str) -> Result<&Entry, IniError> {
        self.try_section(section)?.try_entry(key)
    }

    /// Named sections, in the order their headers first appeared.
    pub fn sections(&self) -> impl Iterator<Item = &IniSection> {
        self.sections.values()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Number of named sections, not counting the global section.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Names of sections whose header appeared more than once, in the order
    /// the first repetition was seen.
    pub fn duplicate_section_names(&self) -> impl Iterator<Item = &str> {
        self.duplicate_sections.iter().map(String::as_str)
    }

    /// Duplicated sections paired with their merged contents.
    pub fn duplicate_sections(&self) -> impl Iterator<Item = (&str, &IniSection)> {
        self.duplicate_sections
            .iter()
            .filter_map(|name| Some((name.as_str(), self.sections.get(name)?)))
    }

    pub fn is_duplicate_section(&self, name: &str) -> bool {
        self.duplicate_sections.contains(name)
    }

    // --- Builder hooks used by the parser ---

    pub(crate) fn global_mut(&mut self) -> &mut IniSection {
        &mut self.global
    }

    /// `index` must come from [`IniDocument::open_section`]; sections are never removed.
    pub(crate) fn section_at_mut(&mut self, index: usize) -> &mut IniSection {
        &mut self.sections[index]
    }

    /// Opens the section `name`, creating it if needed, and attaches the
    /// header's comments. Returns the section's index and whether the name
    /// had been seen before.
    pub(crate) fn open_section(&mut self, name: String, comments: Vec<String>) -> (usize, bool) {
        match self.sections.get_index_of(&name) {
            Some(index) => {
                self.duplicate_sections.insert(name);
                self.sections[index].section_comments.extend(comments);
                (index, true)
            }
            None => {
                let section = IniSection::new(name.clone(), comments);
                let (index, _) = self.sections.insert_full(name, section);
                (index, false)
            }
        }
    }
}

impl IniSection {
    pub(crate) fn new(name: String, section_comments: Vec<String>) -> Self {
        IniSection {
            name,
            global: false,
            comments: Vec::new(),
            section_comments,
            entries: IndexMap::new(),
            duplicate_entries: Vec::new(),
        }
    }

    fn global() -> Self {
        IniSection {
            global: true,
            ..IniSection::new(String::new(), Vec::new())
        }
    }

    /// The section name; empty for the global section and for a `[ ]` header.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `true` only for the implicit section before the first header.
    pub fn is_global(&self) -> bool {
        self.global
    }

    /// Standalone comment lines that appeared inside this section.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Comments attached to this section's header line(s).
    pub fn section_comments(&self) -> &[String] {
        &self.section_comments
    }

    pub fn entry(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// # Errors
    /// Returns `IniError::KeyNotFound` if the key was never assigned in this section.
    pub fn try_entry(&self, key: &str) -> Result<&Entry, IniError> {
        self.entry(key).ok_or_else(|| IniError::KeyNotFound {
            section: self.name.clone(),
            key: key.to_string(),
        })
    }

    /// The latest value assigned to `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.entry(key).map(Entry::value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Current entries in first-assignment order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries that were overwritten by a later assignment to the same key,
    /// in the order they were replaced.
    pub fn duplicate_entries(&self) -> &[Entry] {
        &self.duplicate_entries
    }

    /// Overwritten values of a single key, oldest first.
    pub fn duplicates_of<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.duplicate_entries.iter().filter(move |e| e.key == key)
    }

    /// Stores `entry`, retiring any previous entry with the same key.
    /// Returns `true` when an earlier entry was replaced.
    pub(crate) fn insert_entry(&mut self, entry: Entry) -> bool {
        match self.entries.insert(entry.key.clone(), entry) {
            Some(previous) => {
                self.duplicate_entries.push(previous);
                true
            }
            None => false,
        }
    }

    /// Records a standalone comment unless it repeats a header comment.
    pub(crate) fn push_comment(&mut self, comment: &str) {
        if !self.section_comments.iter().any(|c| c == comment) {
            self.comments.push(comment.to_string());
        }
    }
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>, comments: Vec<String>) -> Self {
        Entry {
            key: key.into(),
            value: value.into(),
            comments,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The inline comment first, then the comment line directly above, if any.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }
}

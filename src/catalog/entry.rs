/// Completion status of a translation unit.
///
/// `Obsolete` and `Vanished` entries are retained across merges so translator
/// work is never silently discarded; only an explicit prune removes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Finished,
    Unfinished,
    Obsolete,
    Vanished,
}

impl EntryStatus {
    /// The `type` attribute value used in the persisted form, if any.
    /// A finished translation carries no marker.
    pub fn type_attr(&self) -> Option<&'static str> {
        match self {
            Self::Finished => None,
            Self::Unfinished => Some("unfinished"),
            Self::Obsolete => Some("obsolete"),
            Self::Vanished => Some("vanished"),
        }
    }

    /// Parse the `type` attribute value from the persisted form.
    pub fn from_type_attr(value: &str) -> Option<Self> {
        match value {
            "unfinished" => Some(Self::Unfinished),
            "obsolete" => Some(Self::Obsolete),
            "vanished" => Some(Self::Vanished),
            _ => None,
        }
    }

    /// Whether the entry is retained only for translator continuity.
    pub fn is_retired(&self) -> bool {
        matches!(self, Self::Obsolete | Self::Vanished)
    }
}

/// A source-location hint: where the string occurs in the scanned sources.
///
/// Line numbers are absolute here; delta encoding is applied only at the
/// serialization boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file: String,
    pub line: Option<u32>,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line: Some(line),
        }
    }
}

/// Translation payload: a single form, or ordered plural forms for
/// numerus entries. An empty single form means "no translation yet".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    Single(String),
    Plural(Vec<String>),
}

impl Translation {
    pub fn empty() -> Self {
        Self::Single(String::new())
    }

    /// Whether any translated text is present.
    pub fn has_text(&self) -> bool {
        match self {
            Self::Single(s) => !s.is_empty(),
            Self::Plural(forms) => forms.iter().any(|f| !f.is_empty()),
        }
    }
}

/// An unknown child element of a message, preserved verbatim.
///
/// Qt Linguist writes elements like `<translatorcomment>` before the
/// translation and vendor extensions after it, so the fragment remembers
/// which side it stood on and re-serialization keeps the document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraElement {
    pub xml: String,
    pub after_translation: bool,
}

/// Lookup key for a translation unit. Unique within a catalog.
///
/// An omitted disambiguation comment is part of the key: looking up without
/// a comment matches only entries that have none.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryKey {
    pub context: String,
    pub source: String,
    pub comment: Option<String>,
}

impl EntryKey {
    pub fn new(
        context: impl Into<String>,
        source: impl Into<String>,
        comment: Option<&str>,
    ) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            comment: comment.map(str::to_string),
        }
    }
}

/// The atomic translation unit of a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Originating UI component the string belongs to.
    pub context: String,
    /// Original untranslated string; always a valid display fallback.
    pub source: String,
    /// Optional disambiguation comment for otherwise-identical sources.
    pub comment: Option<String>,
    pub translation: Translation,
    pub status: EntryStatus,
    /// Zero or more source-location hints, informational only.
    pub locations: Vec<Location>,
    /// Whether this is a numerus (plural-aware) entry.
    pub numerus: bool,
    /// Unknown child elements preserved verbatim for forward compatibility.
    pub extra: Vec<ExtraElement>,
}

impl Entry {
    /// Create a fresh untranslated entry, as the merger does for newly
    /// discovered strings.
    pub fn new_unfinished(
        context: impl Into<String>,
        source: impl Into<String>,
        comment: Option<&str>,
    ) -> Self {
        Self {
            context: context.into(),
            source: source.into(),
            comment: comment.map(str::to_string),
            translation: Translation::empty(),
            status: EntryStatus::Unfinished,
            locations: Vec::new(),
            numerus: false,
            extra: Vec::new(),
        }
    }

    pub fn key(&self) -> EntryKey {
        EntryKey::new(&self.context, &self.source, self.comment.as_deref())
    }

    /// Whether the translation is complete and trusted for display.
    pub fn is_finished(&self) -> bool {
        self.status == EntryStatus::Finished && self.translation.has_text()
    }

    /// Append a location hint, ignoring exact duplicates.
    pub fn add_location(&mut self, location: Location) {
        if !self.locations.contains(&location) {
            self.locations.push(location);
        }
    }
}

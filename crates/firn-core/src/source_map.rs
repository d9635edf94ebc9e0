//! Registry of the files taking part in one analysis session.
//!
//! Positions only carry a [`SourceId`]; the text and path live here and are
//! needed again only when diagnostics are rendered.

use indexmap::IndexMap;

/// Lightweight handle to a source in an analysis session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, serde::Serialize)]
#[serde(transparent)]
pub struct SourceId(u32);

impl SourceId {
    /// Raw index for debugging.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Describes the origin of a source.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SourceKind {
    /// Inline text without a backing file (tests, REPL-style drivers).
    Snippet,
    /// A file with its path.
    File(String),
}

impl SourceKind {
    /// Returns the display name for diagnostics.
    pub fn display_name(&self) -> &str {
        match self {
            SourceKind::Snippet => "<snippet>",
            SourceKind::File(path) => path,
        }
    }
}

/// A borrowed view of a source: id, kind, and content.
#[derive(Clone, Debug)]
pub struct Source<'s> {
    pub id: SourceId,
    pub kind: &'s SourceKind,
    pub content: &'s str,
}

impl<'s> Source<'s> {
    pub fn as_str(&self) -> &'s str {
        self.content
    }
}

#[derive(Clone, Debug)]
struct SourceEntry {
    kind: SourceKind,
    content: String,
}

/// Registry of all sources.
#[derive(Clone, Debug, Default)]
pub struct SourceMap {
    entries: Vec<SourceEntry>,
    by_path: IndexMap<String, SourceId>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add inline source text.
    pub fn add_snippet(&mut self, content: &str) -> SourceId {
        self.push_entry(SourceKind::Snippet, content)
    }

    /// Add a file source with its path.
    ///
    /// Re-adding a known path registers a new source; [`find`](Self::find)
    /// then returns the latest one.
    pub fn add_file(&mut self, path: &str, content: &str) -> SourceId {
        let id = self.push_entry(SourceKind::File(path.to_owned()), content);
        self.by_path.insert(path.to_owned(), id);
        id
    }

    /// Create a SourceMap with a single snippet source.
    pub fn snippet(content: &str) -> Self {
        let mut map = Self::new();
        map.add_snippet(content);
        map
    }

    /// Find the source registered for a path.
    pub fn find(&self, path: &str) -> Option<SourceId> {
        self.by_path.get(path).copied()
    }

    /// Get the content of a source by ID.
    pub fn content(&self, id: SourceId) -> &str {
        &self.entry(id).content
    }

    /// Get the kind of a source by ID.
    pub fn kind(&self, id: SourceId) -> &SourceKind {
        &self.entry(id).kind
    }

    /// Get the file path if this source is a file, None otherwise.
    pub fn path(&self, id: SourceId) -> Option<&str> {
        match &self.entry(id).kind {
            SourceKind::File(path) => Some(path),
            SourceKind::Snippet => None,
        }
    }

    /// Whether `id` was handed out by this map.
    pub fn contains(&self, id: SourceId) -> bool {
        (id.0 as usize) < self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get a source by ID, returning a `Source` view.
    pub fn get(&self, id: SourceId) -> Source<'_> {
        let entry = self.entry(id);
        Source {
            id,
            kind: &entry.kind,
            content: &entry.content,
        }
    }

    /// Iterate over all sources as `Source` views.
    pub fn iter(&self) -> impl Iterator<Item = Source<'_>> {
        self.entries.iter().enumerate().map(|(idx, entry)| Source {
            id: SourceId(idx as u32),
            kind: &entry.kind,
            content: &entry.content,
        })
    }

    fn entry(&self, id: SourceId) -> &SourceEntry {
        self.entries.get(id.0 as usize).expect("invalid SourceId")
    }

    fn push_entry(&mut self, kind: SourceKind, content: &str) -> SourceId {
        let id = SourceId(self.entries.len() as u32);
        self.entries.push(SourceEntry {
            kind,
            content: content.to_owned(),
        });
        id
    }
}

//! The stub request entity.

use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

/// A configured request to render one stub template.
///
/// Holds the three pieces of state the render pipeline consumes: the
/// template path (immutable after construction), the replacement map, and
/// the set of sections marked for removal. Configuration accumulates via
/// chained `with_*` calls; rendering never mutates the request, so the same
/// request can be rendered any number of times (each render re-reads the
/// file — there is no caching).
///
/// ```
/// use stubgen_core::domain::StubRequest;
///
/// let request = StubRequest::new("service.rs.stub")
///     .with_replacement("name", "UserService")
///     .with_section_removed("metrics");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubRequest {
    /// Relative template path, as supplied by the caller.
    template: PathBuf,

    /// Replacement map keyed by the uppercase-normalized placeholder name.
    ///
    /// `HashMap` rather than `BTreeMap`: insertion order is irrelevant for
    /// substitution and lookup is the hot operation.
    replacements: HashMap<String, String>,

    /// Sections marked for removal at render time.
    ///
    /// Set semantics make repeated marking idempotent; removal itself is
    /// deferred to the render step so configuration never touches disk and
    /// configuration order cannot affect the result.
    removed_sections: BTreeSet<String>,
}

impl StubRequest {
    /// Create a request for the given relative template path.
    pub fn new(template: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            replacements: HashMap::new(),
            removed_sections: BTreeSet::new(),
        }
    }

    /// Merge a single replacement into the map.
    ///
    /// The key is normalized to uppercase once, here — placeholder matching
    /// against the template is case-insensitive, and normalizing at
    /// insertion means the last write for a given logical key wins
    /// regardless of the casing it was supplied in. The value only needs to
    /// be representable as text.
    pub fn with_replacement(mut self, key: impl AsRef<str>, value: impl ToString) -> Self {
        self.replacements
            .insert(key.as_ref().to_uppercase(), value.to_string());
        self
    }

    /// Merge a batch of replacements into the map.
    ///
    /// Same normalization and last-write-wins semantics as
    /// [`with_replacement`](Self::with_replacement), applied per entry.
    pub fn with_replacements<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: ToString,
    {
        for (key, value) in entries {
            self.replacements
                .insert(key.as_ref().to_uppercase(), value.to_string());
        }
        self
    }

    /// Mark a named section for removal at render time.
    ///
    /// Idempotent: marking the same name twice has the same effect as
    /// marking it once. Empty names are ignored — there is no section an
    /// empty name could address.
    pub fn with_section_removed(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() {
            self.removed_sections.insert(name);
        }
        self
    }

    /// The relative template path this request was created with.
    pub fn template(&self) -> &Path {
        &self.template
    }

    /// The accumulated replacement map (keys uppercase-normalized).
    pub fn replacements(&self) -> &HashMap<String, String> {
        &self.replacements
    }

    /// The accumulated set of sections marked for removal.
    pub fn removed_sections(&self) -> &BTreeSet<String> {
        &self.removed_sections
    }
}

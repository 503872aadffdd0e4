//! Composite ordering keys for heading hierarchies.
//!
//! A [`KeyStack`] holds one component per hierarchy level. Setting a level
//! truncates everything deeper first, so a new heading at depth D discards
//! the components of the branch it closes. Joining the stack yields a key
//! whose lexicographic order reproduces document reading order.

/// Separator between key components.
pub const KEY_SEPARATOR: &str = ",";

/// Stack of per-level key components with truncate-then-set semantics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyStack {
    components: Vec<String>,
}

impl KeyStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stack with a level-0 base component (typically a page path).
    #[must_use]
    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            components: vec![base.into()],
        }
    }

    /// Set the component at `level`, discarding all deeper components first.
    ///
    /// Levels skipped by irregular nesting (e.g., a jump from depth 2 to
    /// depth 5) are filled with empty components; this is not an error.
    pub fn set_at(&mut self, level: usize, id: &str) {
        self.components.truncate(level);
        self.components.resize(level, String::new());
        self.components.push(id.to_owned());
    }

    /// The composite key: components joined by [`KEY_SEPARATOR`].
    #[must_use]
    pub fn key(&self) -> String {
        self.components.join(KEY_SEPARATOR)
    }

    /// Number of levels currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the stack holds no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

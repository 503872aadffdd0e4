//! Active-route resolution for navigation highlighting.
//!
//! Resolution is pure and re-evaluated on every navigation event. The only
//! state is the one-shot root permit inside [`ActivePass`], scoped to a
//! single render pass over the forest.

use crate::language::{current_language, language_root};

/// Current navigation location, normalized for route matching.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Location {
    /// Pathname with any deployment prefix stripped.
    pub pathname: String,
    /// Root path of the current partition (`/` or `/{lang}/`).
    pub root: String,
}

impl Location {
    /// Create a location from already-normalized parts.
    #[must_use]
    pub fn new(pathname: impl Into<String>, root: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            root: root.into(),
        }
    }

    /// Build a location from a raw request pathname.
    ///
    /// Strips `path_prefix` (the deployment prefix pages are served under)
    /// and derives the partition root from the language set: `/` for
    /// unpartitioned sites, `/{lang}/` for the language owning the path
    /// (falling back to the visitor preference).
    #[must_use]
    pub fn from_request(
        raw_pathname: &str,
        path_prefix: &str,
        languages: &[String],
        preferred: Option<&str>,
    ) -> Self {
        let pathname = raw_pathname
            .strip_prefix(path_prefix)
            .unwrap_or(raw_pathname)
            .to_owned();
        let root = if languages.is_empty() {
            "/".to_owned()
        } else {
            language_root(&current_language(&pathname, languages, preferred))
        };
        Self { pathname, root }
    }
}

/// One render pass of active-route resolution.
///
/// The first target checked in a pass holds the one-shot permission to be
/// active while the pathname equals the partition root; this maps the index
/// page onto the first real document. The permission is consumed by that
/// first check whether or not it was needed — later targets follow the
/// normal rule even if the pathname still equals the root.
#[derive(Debug)]
pub struct ActivePass {
    root_permit: bool,
}

impl ActivePass {
    /// Start a new render pass with a fresh root permit.
    #[must_use]
    pub fn new() -> Self {
        Self { root_permit: true }
    }

    /// Whether `target` (a path, optionally with anchor appended) is active
    /// at `location`.
    ///
    /// A target is active when it starts with the current pathname, unless
    /// the pathname sits on the partition root — there only the holder of
    /// the one-shot permit may be active.
    pub fn is_active(&mut self, target: &str, location: &Location) -> bool {
        let permit = std::mem::take(&mut self.root_permit);
        target.starts_with(location.pathname.as_str())
            && (location.pathname != location.root || permit)
    }
}

impl Default for ActivePass {
    fn default() -> Self {
        Self::new()
    }
}

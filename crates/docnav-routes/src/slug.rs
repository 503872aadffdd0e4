//! Slug and ordering-key normalization for source file paths.
//!
//! Converts a raw relative file path into the three values the rest of the
//! pipeline needs:
//!
//! - an [`ItemType`] classifying the file by its parent directory (with a
//!   sentinel for the configured logo file),
//! - an ordering key: the page path with `<digits>_` prefixes retained, so a
//!   lexicographic sort reproduces the manually assigned document order,
//! - a public slug: the same path with ordering prefixes stripped from every
//!   segment.
//!
//! Normalization never fails. Malformed input produces best-effort values so
//! a single odd path cannot abort a build.

use std::sync::LazyLock;

use regex::Regex;

/// Numeric ordering prefix on a path segment (e.g., `02_` in `02_install`).
static ORDER_PREFIX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+_").unwrap());

/// Classification of a source file by location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemType {
    /// The file is the configured site logo.
    Logo,
    /// Regular content file; carries the immediate parent directory name
    /// (empty for files at the content root).
    Dir(String),
}

/// Result of normalizing a raw file path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedPath {
    /// Item classification (parent directory or logo sentinel).
    pub item_type: ItemType,
    /// Ordering key: slash-wrapped page path with numeric prefixes retained.
    pub key: String,
    /// Public slug: slash-wrapped page path with numeric prefixes stripped.
    pub slug: String,
}

/// Normalize a raw relative file path.
///
/// When `language_partitioned` is set, the first path segment is the language
/// code; it is stripped before item-type and logo classification. The
/// ordering key and public slug keep the language segment, since every public
/// path of a partitioned site carries it.
///
/// `logo_path` is compared against the (language-stripped) relative path.
///
/// # Arguments
///
/// * `relative_path` - File path relative to the content root (e.g.,
///   `"en/02_guide/01_install.md"`)
/// * `language_partitioned` - Whether the first segment is a language code
/// * `logo_path` - Configured logo file path, if any
#[must_use]
pub fn normalize(
    relative_path: &str,
    language_partitioned: bool,
    logo_path: Option<&str>,
) -> NormalizedPath {
    let classified = if language_partitioned {
        relative_path
            .split_once('/')
            .map_or(relative_path, |(_, rest)| rest)
    } else {
        relative_path
    };

    let item_type = if logo_path.is_some_and(|logo| logo == classified) {
        ItemType::Logo
    } else {
        ItemType::Dir(parent_dir_name(classified).to_owned())
    };

    let segments = page_segments(relative_path);
    let key = join_slug(segments.iter().map(String::as_str));
    let slug = join_slug(segments.iter().map(|s| strip_order_prefix(s)));

    NormalizedPath {
        item_type,
        key,
        slug,
    }
}

/// Strip the numeric ordering prefix from a single path segment.
///
/// `"02_install"` becomes `"install"`; segments without a prefix are
/// returned unchanged.
#[must_use]
pub fn strip_order_prefix(segment: &str) -> &str {
    ORDER_PREFIX
        .find(segment)
        .map_or(segment, |m| &segment[m.end()..])
}

/// Name of the immediate parent directory, empty for root-level files.
fn parent_dir_name(path: &str) -> &str {
    path.rsplit_once('/')
        .map_or("", |(parent, _)| parent.rsplit('/').next().unwrap_or(parent))
}

/// Path segments that make up the page path: the file extension is dropped,
/// and an `index` basename collapses into its directory.
fn page_segments(path: &str) -> Vec<String> {
    let mut segments: Vec<String> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect();

    if let Some(basename) = segments.last_mut() {
        if let Some(dot) = basename.rfind('.') {
            basename.truncate(dot);
        }
        if basename.as_str() == "index" {
            segments.pop();
        }
    }

    segments
}

/// Join segments into a slash-wrapped slug (`/a/b/`, or `/` when empty).
fn join_slug<'a>(segments: impl Iterator<Item = &'a str>) -> String {
    let mut slug = String::from("/");
    for segment in segments {
        slug.push_str(segment);
        slug.push('/');
    }
    slug
}

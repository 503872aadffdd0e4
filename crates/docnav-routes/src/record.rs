//! Content record types supplied by the host pipeline.
//!
//! A [`ContentRecord`] is produced once per source document by the host's
//! content-processing step (Markdown parsing is the host's job). Records are
//! immutable after creation; the route forest is derived fresh from them on
//! every build.

/// Maximum depth a heading may have to qualify as a record's main heading.
pub const MAIN_HEADING_MAX_DEPTH: u8 = 2;

/// A heading extracted from a rendered document outline.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    /// Anchor ID for linking (e.g., "getting-started").
    pub id: String,
    /// Heading text as displayed.
    pub text: String,
    /// Heading level (1-6).
    pub depth: u8,
}

/// Frontmatter fields consumed from a document.
///
/// The host extracts these from whatever frontmatter format it parses;
/// unknown fields are ignored on deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frontmatter {
    /// Sidebar category label shown above this document's entry.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub category: Option<String>,
    /// Marks this document as the root page of its partition.
    #[cfg_attr(feature = "serde", serde(default, rename = "isRoot"))]
    pub is_root: bool,
}

/// One parsed source document, as handed over by the host pipeline.
///
/// The record sequence is expected to arrive already sorted by ordering key
/// (see [`normalize`](crate::normalize)); the route builder preserves that
/// order exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContentRecord {
    /// Source file path relative to the content root.
    pub file_path: String,
    /// Public slug (slash-wrapped, ordering prefixes stripped).
    pub slug: String,
    /// Heading outline in document order.
    pub headings: Vec<Heading>,
    /// Sidebar category label, if set in frontmatter.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub category: Option<String>,
    /// Whether this document is flagged as the root page.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_root: bool,
}

impl ContentRecord {
    /// Select the record's main heading.
    ///
    /// The main heading is the first heading in document order with depth at
    /// most [`MAIN_HEADING_MAX_DEPTH`]. Returns `None` for documents without
    /// one; such documents contribute no route.
    #[must_use]
    pub fn main_heading(&self) -> Option<&Heading> {
        self.headings
            .iter()
            .find(|h| h.depth <= MAIN_HEADING_MAX_DEPTH)
    }
}

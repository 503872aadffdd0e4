//! Diagram key computation.
//!
//! Provides [`DiagramKey`] for computing content-based hashes used as
//! element ids and queue keys.

use sha2::{Digest, Sha256};

/// Diagram parameters for key computation.
///
/// Contains the parameters that identify a rendered diagram. Two code
/// blocks with the same language and source share a key — and therefore a
/// single render.
#[derive(Debug)]
pub struct DiagramKey<'a> {
    /// Diagram source code.
    pub source: &'a str,
    /// Diagram language (e.g., "mermaid").
    pub language: &'a str,
}

impl DiagramKey<'_> {
    /// Compute a content hash for this diagram key.
    ///
    /// # Hash Format
    ///
    /// SHA-256 of `"{language}:{source}"`, hex-encoded.
    #[must_use]
    pub fn compute_hash(&self) -> String {
        let content = format!("{}:{}", self.language, self.source);
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Stable DOM element id for this diagram (`"{language}-{hash}"`).
    #[must_use]
    pub fn element_id(&self) -> String {
        format!("{}-{}", self.language, self.compute_hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key<'a>(source: &'a str, language: &'a str) -> DiagramKey<'a> {
        DiagramKey { source, language }
    }

    #[test]
    fn test_diagram_key_hash() {
        let key1 = make_key("graph TD\nA-->B", "mermaid");
        let key2 = make_key("graph TD\nA-->B", "mermaid");
        let key3 = make_key("graph TD\nC-->D", "mermaid");

        // Same inputs produce same hash
        assert_eq!(key1.compute_hash(), key2.compute_hash());
        // Different source produces different hash
        assert_ne!(key1.compute_hash(), key3.compute_hash());
        // Hash is 64 hex characters (256 bits)
        assert_eq!(key1.compute_hash().len(), 64);
    }

    #[test]
    fn test_diagram_key_hash_language_matters() {
        let mermaid = make_key("A -> B", "mermaid");
        let graphviz = make_key("A -> B", "graphviz");

        assert_ne!(mermaid.compute_hash(), graphviz.compute_hash());
    }

    #[test]
    fn test_element_id_carries_language_prefix() {
        let key = make_key("graph TD\nA-->B", "mermaid");
        let id = key.element_id();

        assert!(id.starts_with("mermaid-"));
        assert_eq!(id.len(), "mermaid-".len() + 64);
    }
}

//! Page emission plan for the host generator.
//!
//! The host creates one page per document; this module decides which pages
//! exist and under which paths. Path derivation matches the route builder's
//! (root override included), so the emitted set mirrors the route forest —
//! run [`build_routes`](docnav_routes::build_routes) first to validate the
//! record set.

use docnav_routes::{ContentRecord, partition_root};
use serde::Serialize;

/// One page to generate: its public path and the key under which the host
/// looks up the document's data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageSpec {
    /// Public page path (slash-wrapped).
    pub path: String,
    /// Host-side data key: the record's source file path.
    #[serde(rename = "dataKey")]
    pub data_key: String,
}

/// Ordered page specs for the record sequence.
///
/// One spec per record with a main heading, in input order. On
/// language-partitioned sites the first page is additionally emitted at `/`,
/// so the bare domain root serves the index document before any language
/// redirect kicks in.
#[must_use]
pub fn page_plan(records: &[ContentRecord], language_partitioned: bool) -> Vec<PageSpec> {
    let mut plan = Vec::with_capacity(records.len() + usize::from(language_partitioned));

    for record in records {
        if record.main_heading().is_none() {
            tracing::debug!(path = %record.file_path, "document without main heading gets no page");
            continue;
        }
        let path = if record.is_root {
            partition_root(&record.slug, language_partitioned)
        } else {
            record.slug.clone()
        };
        if language_partitioned && plan.is_empty() {
            plan.push(PageSpec {
                path: "/".to_owned(),
                data_key: record.file_path.clone(),
            });
        }
        plan.push(PageSpec {
            path,
            data_key: record.file_path.clone(),
        });
    }

    plan
}

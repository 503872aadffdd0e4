//! Route and slug derivation for docnav.
//!
//! This crate provides the core data transformation of the site layer:
//! - [`normalize`]: item-type classification, ordering keys and public slugs
//!   from raw file paths
//! - [`build_routes`]: the route forest (routes with nested sub-routes) from
//!   an ordered sequence of [`ContentRecord`]s
//! - [`ActivePass`]: per-render-pass active-route resolution
//! - [`extract_languages`] and friends for language-partitioned trees
//!
//! Everything here is pure and synchronous: the forest is a function of the
//! records, derived fresh on every build.
//!
//! # Example
//!
//! ```
//! use docnav_routes::{ContentRecord, Heading, RouteConfig, build_routes};
//!
//! # fn main() -> Result<(), docnav_routes::RouteError> {
//! let records = vec![ContentRecord {
//!     file_path: "guide.md".to_owned(),
//!     slug: "/guide/".to_owned(),
//!     headings: vec![
//!         Heading { id: "guide".to_owned(), text: "Guide".to_owned(), depth: 1 },
//!         Heading { id: "setup".to_owned(), text: "Setup".to_owned(), depth: 2 },
//!     ],
//!     category: None,
//!     is_root: false,
//! }];
//!
//! let routes = build_routes(&records, &RouteConfig::default())?;
//! assert_eq!(routes[0].path, "/guide/");
//! assert_eq!(routes[0].children[0].anchor, "#setup");
//! # Ok(())
//! # }
//! ```

mod active;
mod builder;
mod key_stack;
mod language;
mod record;
mod slug;

pub use active::{ActivePass, Location};
pub use builder::{Route, RouteConfig, RouteError, SubRoute, build_routes};
pub use key_stack::{KEY_SEPARATOR, KeyStack};
pub use language::{
    DEFAULT_LANGUAGE, current_language, extract_languages, language_redirect, language_root,
    partition_root, routes_for_language,
};
pub use record::{ContentRecord, Frontmatter, Heading, MAIN_HEADING_MAX_DEPTH};
pub use slug::{ItemType, NormalizedPath, normalize, strip_order_prefix};

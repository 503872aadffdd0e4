//! Page emission and sidebar model for docnav.
//!
//! This crate consumes the route forest on behalf of the host generator:
//! - [`SiteNav`]: per-build navigation state (routes + language set) with
//!   per-request location, redirect and sidebar queries
//! - [`page_plan`]: which pages to generate, in order, with data keys
//! - [`NavTree`]: the sidebar view model a frontend renders
//!
//! # Example
//!
//! ```
//! use docnav_config::Config;
//! use docnav_routes::{ContentRecord, Heading};
//! use docnav_site::{SiteNav, page_plan};
//!
//! # fn main() -> Result<(), docnav_routes::RouteError> {
//! let records = vec![ContentRecord {
//!     file_path: "guide.md".to_owned(),
//!     slug: "/guide/".to_owned(),
//!     headings: vec![Heading { id: "guide".to_owned(), text: "Guide".to_owned(), depth: 1 }],
//!     category: None,
//!     is_root: false,
//! }];
//! let config = Config::default();
//!
//! let nav = SiteNav::from_records(&records, &config)?;
//! let pages = page_plan(&records, nav.language_partitioned());
//!
//! let location = nav.location("/guide/", None);
//! let sidebar = nav.nav_tree(&location);
//! assert_eq!(pages[0].path, "/guide/");
//! assert!(sidebar.items[0].active);
//! # Ok(())
//! # }
//! ```

mod pages;
mod sidebar;
mod site;

pub use pages::{PageSpec, page_plan};
pub use sidebar::{NavEntry, NavSubEntry, NavTree};
pub use site::SiteNav;

//! Unified navigation state for one build.
//!
//! [`SiteNav`] ties the loaded configuration to the derived route forest
//! and answers the per-request questions: where am I, do I need a language
//! redirect, what does the sidebar look like.

use docnav_config::Config;
use docnav_routes::{
    ContentRecord, Location, Route, RouteConfig, RouteError, build_routes, extract_languages,
    language_redirect, routes_for_language,
};

use crate::sidebar::NavTree;

/// Derived navigation state: route forest plus language set.
///
/// Built once per build invocation from the record sequence; requests then
/// borrow it read-only.
pub struct SiteNav {
    routes: Vec<Route>,
    languages: Vec<String>,
    title: String,
    path_prefix: String,
    language_partitioned: bool,
}

impl SiteNav {
    /// Derive navigation state from records and configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError`] when route derivation fails (e.g., duplicate
    /// root documents).
    pub fn from_records(records: &[ContentRecord], config: &Config) -> Result<Self, RouteError> {
        let language_partitioned = config.content.language_partitioned();
        let route_config = RouteConfig {
            max_menu_depth: config.nav.max_menu_depth,
            language_partitioned,
        };
        let routes = build_routes(records, &route_config)?;
        let languages = if language_partitioned {
            extract_languages(&routes)
        } else {
            Vec::new()
        };
        tracing::debug!(
            routes = routes.len(),
            languages = languages.len(),
            "navigation derived"
        );

        Ok(Self {
            routes,
            languages,
            title: config.site.title.clone(),
            path_prefix: config.site.path_prefix.clone(),
            language_partitioned,
        })
    }

    /// The full route forest, in record order.
    #[must_use]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Languages present in the forest (empty for unpartitioned sites).
    #[must_use]
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    /// Whether the source tree is language-partitioned.
    #[must_use]
    pub fn language_partitioned(&self) -> bool {
        self.language_partitioned
    }

    /// Normalize a raw request pathname into a [`Location`].
    ///
    /// `preferred` is the visitor's language preference (e.g., from
    /// `Accept-Language`), used when the path itself names no language.
    #[must_use]
    pub fn location(&self, raw_pathname: &str, preferred: Option<&str>) -> Location {
        Location::from_request(raw_pathname, &self.path_prefix, &self.languages, preferred)
    }

    /// Redirect target for a pathname missing its language prefix, if any.
    #[must_use]
    pub fn language_redirect(&self, location: &Location, preferred: Option<&str>) -> Option<String> {
        language_redirect(&location.pathname, &self.languages, preferred)
    }

    /// Sidebar model for `location`: the forest filtered to the current
    /// partition, active flags resolved, title fallback applied.
    #[must_use]
    pub fn nav_tree(&self, location: &Location) -> NavTree {
        let visible = routes_for_language(&self.routes, &location.root);
        NavTree::new(visible, location, &self.title)
    }
}

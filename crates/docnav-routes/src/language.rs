//! Language partitioning helpers.
//!
//! A language-partitioned site keeps one document tree per locale, with the
//! locale code as the first path segment (`/en/guide/`, `/de/guide/`). The
//! language set is not configured anywhere; it is derived from the route
//! forest itself.

use crate::builder::Route;

/// Fallback language when neither the path nor the visitor preference
/// yields one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Distinct languages present in the route forest, in first-seen order.
///
/// A route contributes its first path segment when the path contains at
/// least two `/` (so `/en/` counts, the bare root `/` does not). Only
/// meaningful for partitioned sites; an unpartitioned forest should not be
/// passed here.
#[must_use]
pub fn extract_languages(routes: &[Route]) -> Vec<String> {
    let mut languages = Vec::new();
    for route in routes {
        let Some(rest) = route.path.strip_prefix('/') else {
            continue;
        };
        let Some((lang, _)) = rest.split_once('/') else {
            continue;
        };
        if !lang.is_empty() && !languages.iter().any(|l| l == lang) {
            languages.push(lang.to_owned());
        }
    }
    languages
}

/// Resolve the language for the current location.
///
/// The language owning the path wins; otherwise the visitor preference
/// (e.g., from `Accept-Language`, of which only the primary subtag is
/// used); otherwise [`DEFAULT_LANGUAGE`].
#[must_use]
pub fn current_language(path: &str, languages: &[String], preferred: Option<&str>) -> String {
    languages
        .iter()
        .find(|lang| path.starts_with(&language_root(lang)))
        .cloned()
        .or_else(|| {
            preferred
                .and_then(|p| p.split('-').next())
                .filter(|p| !p.is_empty())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned())
}

/// Root path for a language partition (`/en/`).
#[must_use]
pub fn language_root(lang: &str) -> String {
    format!("/{lang}/")
}

/// Root path owning a slug: `/{lang}/` for partitioned sites, `/` otherwise.
///
/// For partitioned sites the language is the slug's first segment; a slug
/// without one falls back to `/`.
#[must_use]
pub fn partition_root(slug: &str, language_partitioned: bool) -> String {
    if language_partitioned {
        slug.strip_prefix('/')
            .and_then(|rest| rest.split_once('/'))
            .filter(|(lang, _)| !lang.is_empty())
            .map_or_else(|| "/".to_owned(), |(lang, _)| language_root(lang))
    } else {
        "/".to_owned()
    }
}

/// Routes visible under the given partition root, preserving forest order.
///
/// For unpartitioned sites pass `/`, which keeps every route.
#[must_use]
pub fn routes_for_language<'a>(routes: &'a [Route], root: &str) -> Vec<&'a Route> {
    routes
        .iter()
        .filter(|route| route.path.starts_with(root))
        .collect()
}

/// Redirect target for a pathname lacking a language prefix.
///
/// Returns `Some("/{lang}{path}")` when the site is partitioned (non-empty
/// language set) but no language owns the pathname; `None` when the
/// pathname is already language-scoped or the site is unpartitioned.
#[must_use]
pub fn language_redirect(path: &str, languages: &[String], preferred: Option<&str>) -> Option<String> {
    if languages.is_empty() {
        return None;
    }
    let has_language = languages
        .iter()
        .any(|lang| path.starts_with(&language_root(lang)));
    if has_language {
        return None;
    }
    let lang = current_language(path, languages, preferred);
    Some(format!("/{lang}{path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{RouteConfig, build_routes};
    use crate::record::{ContentRecord, Heading};

    fn route_with_path(path: &str) -> Route {
        let record = ContentRecord {
            file_path: format!("{}.md", path.trim_matches('/')),
            slug: path.to_owned(),
            headings: vec![Heading {
                id: "h".to_owned(),
                text: "H".to_owned(),
                depth: 1,
            }],
            category: None,
            is_root: false,
        };
        build_routes(std::slice::from_ref(&record), &RouteConfig::default())
            .unwrap()
            .remove(0)
    }

    #[test]
    fn test_extract_languages_distinct_first_seen() {
        let routes = vec![
            route_with_path("/en/intro/"),
            route_with_path("/en/usage/"),
            route_with_path("/de/intro/"),
        ];

        assert_eq!(extract_languages(&routes), vec!["en", "de"]);
    }

    #[test]
    fn test_extract_languages_includes_partition_root() {
        let routes = vec![route_with_path("/en/")];

        assert_eq!(extract_languages(&routes), vec!["en"]);
    }

    #[test]
    fn test_extract_languages_ignores_bare_root() {
        let routes = vec![route_with_path("/")];

        assert!(extract_languages(&routes).is_empty());
    }

    #[test]
    fn test_current_language_from_path() {
        let languages = vec!["en".to_owned(), "de".to_owned()];

        assert_eq!(
            current_language("/de/guide/", &languages, Some("en-US")),
            "de"
        );
    }

    #[test]
    fn test_current_language_falls_back_to_preference() {
        let languages = vec!["en".to_owned(), "de".to_owned()];

        // Primary subtag only
        assert_eq!(current_language("/guide/", &languages, Some("de-AT")), "de");
    }

    #[test]
    fn test_current_language_default() {
        let languages = vec!["en".to_owned()];

        assert_eq!(current_language("/guide/", &languages, None), "en");
    }

    #[test]
    fn test_partition_root() {
        assert_eq!(partition_root("/en/intro/", true), "/en/");
        assert_eq!(partition_root("/en/intro/", false), "/");
        assert_eq!(partition_root("/", true), "/");
    }

    #[test]
    fn test_routes_for_language_filters_by_root() {
        let routes = vec![
            route_with_path("/en/intro/"),
            route_with_path("/de/intro/"),
            route_with_path("/en/usage/"),
        ];

        let en: Vec<_> = routes_for_language(&routes, "/en/")
            .iter()
            .map(|r| r.path.as_str())
            .collect();
        assert_eq!(en, vec!["/en/intro/", "/en/usage/"]);
    }

    #[test]
    fn test_routes_for_language_root_keeps_all() {
        let routes = vec![route_with_path("/intro/"), route_with_path("/usage/")];

        assert_eq!(routes_for_language(&routes, "/").len(), 2);
    }

    #[test]
    fn test_language_redirect_prefixes_unscoped_path() {
        let languages = vec!["en".to_owned(), "de".to_owned()];

        assert_eq!(
            language_redirect("/guide/", &languages, Some("de")),
            Some("/de/guide/".to_owned())
        );
    }

    #[test]
    fn test_language_redirect_none_when_scoped() {
        let languages = vec!["en".to_owned()];

        assert_eq!(language_redirect("/en/guide/", &languages, None), None);
    }

    #[test]
    fn test_language_redirect_none_when_unpartitioned() {
        assert_eq!(language_redirect("/guide/", &[], None), None);
    }
}

//! Route forest construction from content records.
//!
//! [`build_routes`] turns the ordered record sequence into the route forest
//! consumed by page emission and sidebar rendering. The transformation is
//! pure: same records in, same forest out, no state kept between builds.

use std::collections::HashMap;

use crate::key_stack::KeyStack;
use crate::language::partition_root;
use crate::record::ContentRecord;

/// Options controlling route derivation.
#[derive(Clone, Debug)]
pub struct RouteConfig {
    /// Deepest heading level visible in navigation. Deeper headings stay
    /// valid in rendered content but contribute no sub-route.
    pub max_menu_depth: u8,
    /// Whether paths carry a leading language segment.
    pub language_partitioned: bool,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            max_menu_depth: 3,
            language_partitioned: false,
        }
    }
}

/// A navigable in-page anchor derived from a secondary heading.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubRoute {
    /// Page path, same as the parent route's.
    pub path: String,
    /// Anchor fragment including the leading `#`.
    pub anchor: String,
    /// Bare anchor ID (for scroll tracking).
    pub id: String,
    /// Heading text.
    pub label: String,
    /// Absolute heading depth.
    pub depth: u8,
    /// Composite ordering key.
    pub order_key: String,
}

/// A navigable page derived from one document's main heading.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Public page path (slash-wrapped).
    pub path: String,
    /// Anchor fragment of the main heading, including the leading `#`.
    pub anchor: String,
    /// Main heading text.
    pub label: String,
    /// Main heading depth (1 or 2).
    pub depth: u8,
    /// Ordering key (the page path).
    pub order_key: String,
    /// Sidebar category label, if any.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub category: Option<String>,
    /// In-page anchors in heading occurrence order.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub children: Vec<SubRoute>,
}

/// Route derivation error.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// Two records in the same partition claim the root path.
    #[error("multiple root documents for {root}: {first} and {second}")]
    DuplicateRoot {
        /// The contested root path (`/` or `/{lang}/`).
        root: String,
        /// Natural slug of the record that claimed the root first.
        first: String,
        /// Natural slug of the later claimant.
        second: String,
    },
}

/// Build the route forest from an ordered record sequence.
///
/// One route is emitted per record with a main heading, in input order (the
/// sequence arrives sorted by ordering key; no re-sort happens here).
/// Records without a main heading are skipped with a warning — the document
/// still exists as an orphan page, it just has no navigation entry.
///
/// A record flagged `is_root` gets its path overridden to `/` (or
/// `/{lang}/` when partitioned) instead of its natural slug.
///
/// # Errors
///
/// Returns [`RouteError::DuplicateRoot`] when more than one record claims
/// the same root path.
pub fn build_routes(
    records: &[ContentRecord],
    config: &RouteConfig,
) -> Result<Vec<Route>, RouteError> {
    let mut routes = Vec::with_capacity(records.len());
    // Root path -> natural slug of the record that claimed it
    let mut roots: HashMap<String, String> = HashMap::new();

    for record in records {
        let Some(main) = record.main_heading() else {
            tracing::warn!(
                path = %record.file_path,
                "document has no heading of depth <= 2, skipping from navigation"
            );
            continue;
        };

        let path = if record.is_root {
            let root = partition_root(&record.slug, config.language_partitioned);
            if let Some(first) = roots.insert(root.clone(), record.slug.clone()) {
                return Err(RouteError::DuplicateRoot {
                    root,
                    first,
                    second: record.slug.clone(),
                });
            }
            root
        } else {
            record.slug.clone()
        };

        let mut stack = KeyStack::with_base(path.as_str());
        let children = record
            .headings
            .iter()
            .filter(|h| h.depth > main.depth && h.depth <= config.max_menu_depth)
            .map(|h| {
                stack.set_at(usize::from(h.depth - main.depth), &h.id);
                SubRoute {
                    path: path.clone(),
                    anchor: format!("#{}", h.id),
                    id: h.id.clone(),
                    label: h.text.clone(),
                    depth: h.depth,
                    order_key: stack.key(),
                }
            })
            .collect();

        routes.push(Route {
            anchor: format!("#{}", main.id),
            label: main.text.clone(),
            depth: main.depth,
            order_key: path.clone(),
            category: record.category.clone(),
            children,
            path,
        });
    }

    Ok(routes)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::record::Heading;

    fn heading(id: &str, depth: u8) -> Heading {
        Heading {
            id: id.to_owned(),
            text: id.to_owned(),
            depth,
        }
    }

    fn record(slug: &str, headings: Vec<Heading>) -> ContentRecord {
        ContentRecord {
            file_path: format!("{}.md", slug.trim_matches('/')),
            slug: slug.to_owned(),
            headings,
            category: None,
            is_root: false,
        }
    }

    #[test]
    fn test_one_route_per_record_with_main_heading() {
        let records = vec![
            record("/intro/", vec![heading("intro", 1)]),
            record("/usage/", vec![heading("usage", 2)]),
        ];

        let routes = build_routes(&records, &RouteConfig::default()).unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].path, "/intro/");
        assert_eq!(routes[0].anchor, "#intro");
        assert_eq!(routes[0].depth, 1);
        assert_eq!(routes[1].depth, 2);
    }

    #[test]
    fn test_record_without_main_heading_is_skipped() {
        let records = vec![
            record("/deep/", vec![heading("a", 3), heading("b", 4)]),
            record("/usage/", vec![heading("usage", 1)]),
        ];

        let routes = build_routes(&records, &RouteConfig::default()).unwrap();

        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].path, "/usage/");
    }

    #[test]
    fn test_input_order_is_preserved() {
        // Deliberately not alphabetical: the builder must not re-sort
        let records = vec![
            record("/z/", vec![heading("z", 1)]),
            record("/a/", vec![heading("a", 1)]),
            record("/m/", vec![heading("m", 1)]),
        ];

        let routes = build_routes(&records, &RouteConfig::default()).unwrap();

        let paths: Vec<_> = routes.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/z/", "/a/", "/m/"]);
    }

    #[test]
    fn test_subroutes_respect_max_menu_depth() {
        let records = vec![record(
            "/guide/",
            vec![
                heading("guide", 1),
                heading("setup", 2),
                heading("detail", 3),
                heading("minutiae", 4),
            ],
        )];
        let config = RouteConfig {
            max_menu_depth: 3,
            ..RouteConfig::default()
        };

        let routes = build_routes(&records, &config).unwrap();

        let ids: Vec<_> = routes[0].children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["setup", "detail"]);
    }

    #[test]
    fn test_subroutes_relative_to_main_heading_depth() {
        // Depth-2 main heading: only deeper headings become sub-routes
        let records = vec![record(
            "/guide/",
            vec![heading("guide", 2), heading("detail", 3)],
        )];

        let routes = build_routes(&records, &RouteConfig::default()).unwrap();

        assert_eq!(routes[0].children.len(), 1);
        assert_eq!(routes[0].children[0].id, "detail");
        assert_eq!(routes[0].children[0].path, "/guide/");
        assert_eq!(routes[0].children[0].anchor, "#detail");
    }

    #[test]
    fn test_order_keys_truncate_closed_branches() {
        // Depths [2,3,4,3,2] under a depth-1 main heading
        let records = vec![record(
            "/guide/",
            vec![
                heading("main", 1),
                heading("a", 2),
                heading("a1", 3),
                heading("a1x", 4),
                heading("a2", 3),
                heading("b", 2),
            ],
        )];
        let config = RouteConfig {
            max_menu_depth: 4,
            ..RouteConfig::default()
        };

        let routes = build_routes(&records, &config).unwrap();

        let keys: Vec<_> = routes[0]
            .children
            .iter()
            .map(|c| c.order_key.as_str())
            .collect();
        // The second depth-3 heading must not retain the depth-4 component
        assert_eq!(
            keys,
            vec![
                "/guide/,a",
                "/guide/,a,a1",
                "/guide/,a,a1,a1x",
                "/guide/,a,a2",
                "/guide/,b",
            ]
        );
    }

    #[test]
    fn test_depth_jump_fills_skipped_levels() {
        let records = vec![record(
            "/guide/",
            vec![heading("main", 2), heading("deep", 5)],
        )];
        let config = RouteConfig {
            max_menu_depth: 5,
            ..RouteConfig::default()
        };

        let routes = build_routes(&records, &config).unwrap();

        assert_eq!(routes[0].children[0].order_key, "/guide/,,,deep");
    }

    #[test]
    fn test_root_override_unpartitioned() {
        let mut rec = record("/foo/bar/", vec![heading("welcome", 1)]);
        rec.is_root = true;

        let routes = build_routes(&[rec], &RouteConfig::default()).unwrap();

        assert_eq!(routes[0].path, "/");
    }

    #[test]
    fn test_root_override_partitioned() {
        let mut rec = record("/en/foo/bar/", vec![heading("welcome", 1)]);
        rec.is_root = true;
        let config = RouteConfig {
            language_partitioned: true,
            ..RouteConfig::default()
        };

        let routes = build_routes(&[rec], &config).unwrap();

        assert_eq!(routes[0].path, "/en/");
    }

    #[test]
    fn test_duplicate_root_same_partition_fails() {
        let mut a = record("/en/intro/", vec![heading("intro", 1)]);
        a.is_root = true;
        let mut b = record("/en/other/", vec![heading("other", 1)]);
        b.is_root = true;
        let config = RouteConfig {
            language_partitioned: true,
            ..RouteConfig::default()
        };

        let err = build_routes(&[a, b], &config).unwrap_err();

        match err {
            RouteError::DuplicateRoot {
                root,
                first,
                second,
            } => {
                assert_eq!(root, "/en/");
                assert_eq!(first, "/en/intro/");
                assert_eq!(second, "/en/other/");
            }
        }
    }

    #[test]
    fn test_root_per_partition_is_allowed() {
        let mut en = record("/en/intro/", vec![heading("intro", 1)]);
        en.is_root = true;
        let mut de = record("/de/intro/", vec![heading("einfuehrung", 1)]);
        de.is_root = true;
        let config = RouteConfig {
            language_partitioned: true,
            ..RouteConfig::default()
        };

        let routes = build_routes(&[en, de], &config).unwrap();

        assert_eq!(routes[0].path, "/en/");
        assert_eq!(routes[1].path, "/de/");
    }

    #[test]
    fn test_category_carried_onto_route() {
        let mut rec = record("/guide/", vec![heading("guide", 1)]);
        rec.category = Some("Basics".to_owned());

        let routes = build_routes(&[rec], &RouteConfig::default()).unwrap();

        assert_eq!(routes[0].category.as_deref(), Some("Basics"));
    }

    #[test]
    fn test_scenario_partitioned_site() {
        // Two records, language partitioned: root override plus one sub-route
        let a = ContentRecord {
            file_path: "en/intro.md".to_owned(),
            slug: "/en/intro/".to_owned(),
            headings: vec![heading("intro", 1), heading("setup", 2)],
            category: None,
            is_root: true,
        };
        let b = ContentRecord {
            file_path: "en/usage.md".to_owned(),
            slug: "/en/usage/".to_owned(),
            headings: vec![heading("usage", 1)],
            category: None,
            is_root: false,
        };
        let config = RouteConfig {
            language_partitioned: true,
            ..RouteConfig::default()
        };

        let routes = build_routes(&[a, b], &config).unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].path, "/en/");
        assert_eq!(routes[0].children.len(), 1);
        let sub = &routes[0].children[0];
        assert_eq!(sub.id, "setup");
        assert_eq!(sub.depth - routes[0].depth, 1);
        assert_eq!(routes[1].path, "/en/usage/");
        assert!(routes[1].children.is_empty());

        let languages = crate::language::extract_languages(&routes);
        assert_eq!(languages, vec!["en".to_owned()]);
    }

    #[test]
    fn test_route_paths_unique_across_forest() {
        let records = vec![
            record("/a/", vec![heading("a", 1)]),
            record("/b/", vec![heading("b", 1)]),
            record("/a/b/", vec![heading("ab", 1)]),
        ];

        let routes = build_routes(&records, &RouteConfig::default()).unwrap();

        let mut paths: Vec<_> = routes.iter().map(|r| r.path.clone()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), routes.len());
    }
}

//! Sidebar view model.
//!
//! [`NavTree`] is the presentation-agnostic shape a sidebar renders from:
//! entries in forest order with active flags already resolved, category
//! labels with their spacing rule applied, and anchor targets for entries
//! on the current page. How it is styled is the frontend's business.

use docnav_routes::{ActivePass, Location, Route};
use serde::Serialize;

/// In-page entry under a [`NavEntry`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavSubEntry {
    /// Link target (anchor fragment).
    pub target: String,
    /// Bare anchor ID for scroll tracking.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Indent steps below the first sub-level.
    pub indent: u8,
}

/// Top-level sidebar entry for one route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    /// Link target: the route path, or an anchor fragment when the route is
    /// the current page.
    pub target: String,
    /// Display label.
    pub label: String,
    /// Whether the entry is highlighted for the current location.
    pub active: bool,
    /// Whether the entry is the current page (sub-entries get scroll
    /// tracking there).
    #[serde(rename = "onCurrentPage")]
    pub on_current_page: bool,
    /// Category label shown above this entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Whether the category label gets leading space (every category but
    /// the first).
    #[serde(rename = "categorySpaced")]
    pub category_spaced: bool,
    /// In-page entries in heading order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavSubEntry>,
}

/// Sidebar model for one location.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavTree {
    /// Resolved sidebar title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Entries in forest order.
    pub items: Vec<NavEntry>,
}

impl NavTree {
    /// Build the sidebar model for `location`.
    ///
    /// `routes` is the already language-filtered forest slice (see
    /// [`routes_for_language`](docnav_routes::routes_for_language)).
    /// `configured_title` wins when non-empty; otherwise the first depth-1
    /// route's label serves as the title.
    ///
    /// Active flags are resolved in one pass over the forest, so the
    /// first-route-on-root rule applies exactly once.
    #[must_use]
    pub fn new<'a>(
        routes: impl IntoIterator<Item = &'a Route>,
        location: &Location,
        configured_title: &str,
    ) -> Self {
        let mut pass = ActivePass::new();
        let mut title = if configured_title.is_empty() {
            None
        } else {
            Some(configured_title.to_owned())
        };
        let mut items = Vec::new();

        for (index, route) in routes.into_iter().enumerate() {
            if title.is_none() && route.depth == 1 {
                title = Some(route.label.clone());
            }

            let on_current_page = location.pathname == route.path;
            let (target, active) = if on_current_page {
                let active = pass.is_active(&format!("{}{}", route.path, route.anchor), location);
                (route.anchor.clone(), active)
            } else {
                let active = pass.is_active(&route.path, location);
                (route.path.clone(), active)
            };

            let children = route
                .children
                .iter()
                .map(|sub| NavSubEntry {
                    target: sub.anchor.clone(),
                    id: sub.id.clone(),
                    label: sub.label.clone(),
                    indent: sub.depth.saturating_sub(route.depth + 1),
                })
                .collect();

            items.push(NavEntry {
                target,
                label: route.label.clone(),
                active,
                on_current_page,
                category: route.category.clone(),
                category_spaced: route.category.is_some() && index > 0,
                children,
            });
        }

        Self { title, items }
    }
}

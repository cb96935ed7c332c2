//! Route table for top-level views.
//!
//! Only the home view exists; every path, registered or not, resolves to it.
//! The Leptos router in `app` mirrors this table.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Top-level views the router can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
}

/// Ordered path → view table with a fallback view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<(&'static str, View)>,
    fallback: View,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self { routes: vec![("/", View::Home)], fallback: View::Home }
    }
}

impl RouteTable {
    /// Registered paths in declaration order.
    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.iter().map(|(p, _)| *p)
    }

    #[must_use]
    pub fn fallback(&self) -> View {
        self.fallback
    }

    /// Resolve a URL path (query and fragment allowed) to a view.
    pub fn resolve(&self, url: &str) -> View {
        let path = normalize_path(url);
        match self.routes.iter().find(|(p, _)| *p == path) {
            Some((_, view)) => *view,
            None => {
                log::debug!("no route for {path}; showing {:?}", self.fallback);
                self.fallback
            }
        }
    }
}

/// Strip query/fragment, ensure a leading slash, drop trailing slashes.
pub fn normalize_path(url: &str) -> String {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let trimmed = url[..end].trim().trim_matches('/');
    format!("/{trimmed}")
}

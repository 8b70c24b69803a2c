//! Static routes and the table they live in.

use std::borrow::Cow;
use std::slice;
use crate::error::Error;

/// A path and the markup shown when the page is at that path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: Cow<'static, str>,
    content: Cow<'static, str>,
}

impl Route {
    /// Create a route.
    ///
    /// The content is an opaque markup fragment. It is never parsed or validated, only written
    /// into the container verbatim.
    pub fn new(path: impl Into<Cow<'static, str>>, content: impl Into<Cow<'static, str>>) -> Self {
        Route {
            path: path.into(),
            content: content.into(),
        }
    }

    /// The exact path this route answers to.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The markup for this route.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// An ordered, non-empty list of routes.
///
/// The first route is the default route, shown for any path the table doesn't know about.
/// Lookups compare paths with plain string equality: case matters, and `/mais` and `/mais/` are
/// different paths.
///
/// Duplicate paths are allowed. The first route with a given path wins and later duplicates are
/// never selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Build a table from the given routes, in order.
    pub fn new(routes: Vec<Route>) -> Result<Self, Error> {
        if routes.is_empty() {
            return Err(Error::EmptyRouteTable);
        }

        Ok(RouteTable {
            routes: routes,
        })
    }

    /// Find the first route whose path is exactly `path`.
    pub fn find(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.path() == path)
    }

    /// The fallback route.
    pub fn default_route(&self) -> &Route {
        // non-empty by construction
        &self.routes[0]
    }

    /// Number of routes in the table.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Always false, tables can't be empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterate over the routes in table order.
    pub fn iter(&self) -> slice::Iter<'_, Route> {
        self.routes.iter()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a Route;
    type IntoIter = slice::Iter<'a, Route>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! The router: match the current path, render it, and follow navigation.
//!
//! A [`Router`] owns a [`RouteTable`], a handle to the host's history and the container that
//! route content is written into. Every navigation signal ends in [`Router::resolve`], which
//! looks up the current path and replaces the container's contents with the matching route.
//! Unknown paths render the default route and the history entry is replaced with the default
//! path.
//!
//! The host is injected, so the same router drives a real page (see [`RouterBuilder::attach`])
//! or the in-memory doubles in [`test`].
//!
//! [`Router`]: struct.Router.html
//! [`RouteTable`]: ../route/struct.RouteTable.html
//! [`Router::resolve`]: struct.Router.html#method.resolve
//! [`RouterBuilder::attach`]: builder/struct.RouterBuilder.html#method.attach
//! [`test`]: ../test/index.html

pub mod builder;

pub use crate::router::builder::RouterBuilder;

use std::rc::Rc;
use log::{debug, info, error};
use crate::error::Error;
use crate::event::{Click, Signals};
use crate::host::{Container, History};
use crate::route::{Route, RouteTable};

/// Attribute that marks an element as navigable, unless configured otherwise.
pub const DEFAULT_MARKER: &str = "route";

/// Matches paths to routes and renders them into a container.
pub struct Router<H, C> {
    routes: RouteTable,
    history: H,
    container: C,
    marker: String,
}

impl<H, C> Router<H, C>
where
    H: History,
    C: Container,
{
    /// Create a router that renders `routes` into `container`, tracking `history`.
    pub fn new(routes: RouteTable, history: H, container: C) -> Self {
        Router {
            routes: routes,
            history: history,
            container: container,
            marker: DEFAULT_MARKER.to_owned(),
        }
    }

    /// The routes this router knows about.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// The history this router reads and updates.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// The container routes are rendered into.
    pub fn container(&self) -> &C {
        &self.container
    }

    /// The attribute that marks an element as navigable.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Render the route for the current path.
    ///
    /// If no route matches, the default route is rendered and the current history entry is
    /// replaced with the default path. Either way exactly one route ends up in the container,
    /// and it is returned.
    pub fn resolve(&self) -> Result<&Route, Error> {
        let path = self.history.path()?;

        let route = match self.routes.find(&path) {
            Some(route) => route,
            None => {
                let route = self.routes.default_route();
                debug!("no route for {:?}, redirecting to {:?}", path, route.path());
                self.history.replace(route.path())?;
                route
            }
        };

        debug!("rendering {:?}", route.path());
        self.container.set_content(route.content());

        Ok(route)
    }

    /// Handle a back or forward navigation.
    pub fn history_changed(&self) -> Result<&Route, Error> {
        self.resolve()
    }

    /// Handle a click anywhere on the page.
    ///
    /// Clicks on elements carrying the marker attribute are turned into a history push followed
    /// by a resolve, and the host's own navigation is suppressed. Any other click is ignored and
    /// `None` is returned.
    pub fn link_clicked<K>(&self, click: &K) -> Result<Option<&Route>, Error>
    where
        K: Click + ?Sized,
    {
        let target = match click.navigable_target(&self.marker) {
            Some(target) => target,
            None => return Ok(None),
        };

        click.prevent_default();
        self.navigate(&target).map(Some)
    }

    /// Push a new history entry for `path` and render it.
    pub fn navigate(&self, path: &str) -> Result<&Route, Error> {
        self.history.push(path)?;
        self.resolve()
    }

    /// Render the current path, then follow every navigation signal from `signals`.
    ///
    /// The returned handle keeps the subscriptions alive until it is detached.
    pub fn start<S>(self, mut signals: S) -> Result<Running<H, C, S>, Error>
    where
        H: 'static,
        C: 'static,
        S: Signals,
        S::Click: 'static,
    {
        let router = Rc::new(self);

        router.resolve()?;

        let r = Rc::clone(&router);
        signals.on_history_change(Box::new(move || {
            if let Err(e) = r.history_changed() {
                error!("error handling history change: {}", e);
            }
        }))?;

        let r = Rc::clone(&router);
        signals.on_click(Box::new(move |click: &S::Click| {
            if let Err(e) = r.link_clicked(click) {
                error!("error handling click: {}", e);
            }
        }))?;

        info!("router started with {} routes", router.routes().len());

        Ok(Running {
            router: router,
            signals: signals,
        })
    }
}

/// A started router and the subscriptions feeding it.
///
/// Dropping this stops the router, see [`detach`] and [`forget`].
///
/// [`detach`]: #method.detach
/// [`forget`]: #method.forget
#[must_use = "dropping a Running router removes its listeners"]
pub struct Running<H, C, S>
where
    S: Signals,
{
    router: Rc<Router<H, C>>,
    signals: S,
}

impl<H, C, S> Running<H, C, S>
where
    H: History,
    C: Container,
    S: Signals,
{
    /// The running router.
    pub fn router(&self) -> &Router<H, C> {
        &self.router
    }

    /// Navigate to `path` as if a marked link pointing there was clicked.
    pub fn navigate(&self, path: &str) -> Result<&Route, Error> {
        self.router.navigate(path)
    }

    /// Stop following navigation signals.
    ///
    /// The container keeps whatever was rendered last.
    pub fn detach(mut self) -> Rc<Router<H, C>> {
        self.signals.clear();
        info!("router detached");
        self.router
    }

    /// Keep the router running for the rest of the page's life.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

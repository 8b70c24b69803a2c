//! Configure a router and attach it to the page.

use std::borrow::Cow;
use log::debug;
use crate::error::Error;
use crate::host::{Container, History};
use crate::route::{Route, RouteTable};
use crate::router::{Router, Running, DEFAULT_MARKER};
use crate::web::{BrowserHistory, BrowserSignals};

/// Id of the element routes are rendered into, unless configured otherwise.
pub const DEFAULT_CONTAINER: &str = "content";

/// Struct used to configure a router and attach it to the DOM.
///
/// Routes are kept in the order they are added. The first route is the default route.
///
/// ```no_run
/// use pageroute::RouterBuilder;
///
/// let running = RouterBuilder::default()
///     .route("/", "<h1>home</h1>")
///     .route("/mais", "<h1>more</h1>")
///     .attach()
///     .expect("failed to attach router");
///
/// running.forget();
/// ```
#[derive(Debug, Clone)]
pub struct RouterBuilder {
    routes: Vec<Route>,
    container: String,
    marker: String,
}

impl Default for RouterBuilder {
    fn default() -> Self {
        RouterBuilder {
            routes: vec![],
            container: DEFAULT_CONTAINER.to_owned(),
            marker: DEFAULT_MARKER.to_owned(),
        }
    }
}

impl RouterBuilder {
    /// Add a route.
    pub fn route(
        mut self,
        path: impl Into<Cow<'static, str>>,
        content: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.routes.push(Route::new(path, content));
        self
    }

    /// Render into the element with the given id.
    pub fn container(mut self, id: impl Into<String>) -> Self {
        self.container = id.into();
        self
    }

    /// Treat elements with the given attribute as navigable links.
    pub fn marker(mut self, attribute: impl Into<String>) -> Self {
        self.marker = attribute.into();
        self
    }

    /// Build a router over the given history and container.
    pub fn build<H, C>(self, history: H, container: C) -> Result<Router<H, C>, Error>
    where
        H: History,
        C: Container,
    {
        let RouterBuilder {
            routes,
            marker,
            ..
        } = self;

        Ok(Router {
            routes: RouteTable::new(routes)?,
            history: history,
            container: container,
            marker: marker,
        })
    }

    /// Attach a router to the current page.
    ///
    /// The container is looked up by id, the current path is rendered, and listeners are
    /// registered for `popstate` on the window and `click` on the document body.
    pub fn attach(self) -> Result<Running<BrowserHistory, web_sys::Element, BrowserSignals>, Error> {
        let window = web_sys::window()
            .ok_or(Error::MissingWindow)?;

        let document = window.document()
            .ok_or(Error::MissingDocument)?;

        let container = document.get_element_by_id(&self.container)
            .ok_or_else(|| Error::MissingContainer(self.container.clone()))?;

        debug!("attaching router to #{}", self.container);

        let signals = BrowserSignals::new(&window)?;
        let history = BrowserHistory::new(window);

        self.build(history, container)?.start(signals)
    }
}

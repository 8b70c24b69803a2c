#![deny(missing_docs)]

//! A tiny client-side router for Rust WASM pages.
//!
//! A fixed table of routes maps exact paths to markup. The router renders the route for the
//! current path into a container element, then follows back/forward navigation and clicks on
//! links carrying a `route` attribute, without reloading the page. Paths that don't match any
//! route are redirected to the first route.
//!
//! ```no_run
//! use pageroute::RouterBuilder;
//!
//! // <div id="content"></div>
//! // <a route href="/mais">more</a>
//! RouterBuilder::default()
//!     .route("/", "<p>home</p>")
//!     .route("/mais", "<p>more</p>")
//!     .attach()
//!     .expect("failed to attach router")
//!     .forget();
//! ```
//!
//! The browser is reached only through the traits in [`host`] and [`event`], so the router can
//! be driven by the in-memory doubles in [`test`].
//!
//! [`host`]: host/index.html
//! [`event`]: event/index.html
//! [`test`]: test/index.html

pub mod error;
pub mod route;
pub mod host;
pub mod event;
pub mod router;
pub mod web;

pub use crate::error::Error;
pub use crate::route::{Route, RouteTable};
pub use crate::router::{Router, RouterBuilder, Running};

//! Errors raised while building or driving a router.

use wasm_bindgen::JsValue;
use thiserror::Error;

/// Everything that can go wrong outside of the normal fallback-to-default path.
///
/// An unknown path is not an error, the router quietly redirects to the default route. These
/// variants cover broken setup (no routes, no container) and failing browser calls.
#[derive(Debug, Error)]
pub enum Error {
    /// The router was built without any routes, so there is no default route.
    #[error("route table is empty")]
    EmptyRouteTable,
    /// There is no `window` global.
    #[error("couldn't get window handle")]
    MissingWindow,
    /// The window has no document.
    #[error("couldn't get document handle")]
    MissingDocument,
    /// The document has no body to listen for clicks on.
    #[error("couldn't get document body")]
    MissingBody,
    /// No element carries the configured container id.
    #[error("expected an element with id {0:?}")]
    MissingContainer(String),
    /// A browser api call failed.
    #[error("host error: {0:?}")]
    Host(JsValue),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        Error::Host(value)
    }
}

impl From<Error> for JsValue {
    fn from(error: Error) -> Self {
        match error {
            Error::Host(value) => value,
            e => JsValue::from_str(&e.to_string()),
        }
    }
}

//! The pieces of the host page the router reads from and writes to.
//!
//! A browser provides these through [`web`], tests use the in-memory versions in [`test`].
//!
//! [`web`]: ../web/index.html
//! [`test`]: ../test/index.html

use crate::error::Error;

/// The host's navigation history.
pub trait History {
    /// The current path.
    fn path(&self) -> Result<String, Error>;
    /// Add a new history entry for `path`, growing the back-stack.
    fn push(&self, path: &str) -> Result<(), Error>;
    /// Point the current history entry at `path` without growing the back-stack.
    fn replace(&self, path: &str) -> Result<(), Error>;
}

/// The element that route content is rendered into.
pub trait Container {
    /// Replace everything in the container with `content`.
    fn set_content(&self, content: &str);
}

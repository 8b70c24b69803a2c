//! Navigation signals the router subscribes to.

use crate::error::Error;

/// A click seen by the router.
pub trait Click {
    /// The target path of the clicked element, if that element is marked navigable.
    ///
    /// An element is navigable when it carries the `marker` attribute. Unmarked elements return
    /// `None` and the click is left alone.
    fn navigable_target(&self, marker: &str) -> Option<String>;

    /// Stop the host from following the link itself.
    fn prevent_default(&self);
}

/// Source of the two signals that make the router re-resolve.
///
/// Implementations hold on to the registered handlers until [`clear`] is called.
///
/// [`clear`]: #tymethod.clear
pub trait Signals {
    /// The click type passed to click handlers.
    type Click: Click;

    /// Call `handler` whenever the user moves back or forward through history.
    fn on_history_change(&mut self, handler: Box<dyn FnMut()>) -> Result<(), Error>;

    /// Call `handler` for every click on the page.
    fn on_click(&mut self, handler: Box<dyn FnMut(&Self::Click)>) -> Result<(), Error>;

    /// Drop every registered handler.
    fn clear(&mut self);
}

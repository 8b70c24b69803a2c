//! Browser implementations of the host traits.

use web_sys;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use log::warn;
use crate::error::Error;
use crate::event::{Click, Signals};
use crate::host::{Container, History};

/// The window's session history, addressed by `location.pathname`.
pub struct BrowserHistory {
    window: web_sys::Window,
}

impl BrowserHistory {
    /// Use the history of the given window.
    pub fn new(window: web_sys::Window) -> Self {
        BrowserHistory {
            window: window,
        }
    }
}

impl History for BrowserHistory {
    fn path(&self) -> Result<String, Error> {
        Ok(self.window.location().pathname()?)
    }

    fn push(&self, path: &str) -> Result<(), Error> {
        self.window.history()?
            .push_state_with_url(&JsValue::NULL, "", Some(path))?;
        Ok(())
    }

    fn replace(&self, path: &str) -> Result<(), Error> {
        self.window.history()?
            .replace_state_with_url(&JsValue::NULL, "", Some(path))?;
        Ok(())
    }
}

impl Container for web_sys::Element {
    fn set_content(&self, content: &str) {
        self.set_inner_html(content);
    }
}

impl Click for web_sys::Event {
    /// Only the element the click landed on is checked, not its ancestors. The target path is
    /// the element's `href` attribute, as written.
    fn navigable_target(&self, marker: &str) -> Option<String> {
        let element = self.target()?
            .dyn_into::<web_sys::Element>()
            .ok()?;

        if !element.has_attribute(marker) {
            return None;
        }

        let target = element.get_attribute("href");
        if target.is_none() {
            warn!("<{}> has a {:?} attribute but no href", element.tag_name().to_lowercase(), marker);
        }

        target
    }

    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

/// Window `popstate` and document body `click` events.
///
/// Registered closures are kept here and removed from the page by [`clear`], or when this is
/// dropped.
///
/// [`clear`]: ../event/trait.Signals.html#tymethod.clear
pub struct BrowserSignals {
    window: web_sys::Window,
    body: web_sys::HtmlElement,
    listeners: Vec<(web_sys::EventTarget, &'static str, Closure<dyn FnMut(web_sys::Event)>)>,
}

impl BrowserSignals {
    /// Listen on the given window and its document's body.
    pub fn new(window: &web_sys::Window) -> Result<Self, Error> {
        let body = window.document()
            .ok_or(Error::MissingDocument)?
            .body()
            .ok_or(Error::MissingBody)?;

        Ok(BrowserSignals {
            window: window.clone(),
            body: body,
            listeners: vec![],
        })
    }

    fn listen(
        &mut self,
        target: web_sys::EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut(web_sys::Event)>,
    ) -> Result<(), Error> {
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.listeners.push((target, event, closure));
        Ok(())
    }
}

impl Signals for BrowserSignals {
    type Click = web_sys::Event;

    fn on_history_change(&mut self, mut handler: Box<dyn FnMut()>) -> Result<(), Error> {
        let closure = Closure::wrap(
            Box::new(move |_event| handler()) as Box<dyn FnMut(web_sys::Event)>
        );

        let target = self.window.clone().into();
        self.listen(target, "popstate", closure)
    }

    fn on_click(&mut self, mut handler: Box<dyn FnMut(&web_sys::Event)>) -> Result<(), Error> {
        let closure = Closure::wrap(
            Box::new(move |event: web_sys::Event| handler(&event)) as Box<dyn FnMut(web_sys::Event)>
        );

        let target = self.body.clone().into();
        self.listen(target, "click", closure)
    }

    fn clear(&mut self) {
        for (target, event, listener) in self.listeners.drain(..) {
            if let Err(e) = target.remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref()) {
                warn!("failed to remove {} listener: {:?}", event, e);
            }
        }
    }
}

impl Drop for BrowserSignals {
    fn drop(&mut self) {
        // the closures die with us, so the page must stop calling them
        self.clear();
    }
}

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use pageroute::RouterBuilder;
use pageroute::Error;
use pageroute::event::Click;
use pageroute::host::{Container, History};
use pageroute::web::BrowserHistory;

use wasm_bindgen_test::*;
use wasm_bindgen_test::wasm_bindgen_test_configure;
wasm_bindgen_test_configure!(run_in_browser);

fn window() -> web_sys::Window {
    web_sys::window().expect("expected window")
}

fn document() -> web_sys::Document {
    window().document().expect("expected document")
}

fn e(name: &str) -> web_sys::Element {
    document().create_element(name).expect("expected element")
}

fn link(tag: &str, href: &str, marked: bool) -> web_sys::HtmlElement {
    let a = e(tag);
    a.set_attribute("href", href).expect("failed to set href");
    if marked {
        a.set_attribute("route", "").expect("failed to set marker");
    }

    document().body().expect("expected body")
        .append_child(&a).expect("failed to append link");

    a.dyn_into::<web_sys::HtmlElement>().expect("expected web_sys::HtmlElement")
}

fn container(id: &str) -> web_sys::Element {
    let div = e("div");
    div.set_id(id);
    document().body().expect("expected body")
        .append_child(&div).expect("failed to append container");
    div
}

fn init_log() {
    // every test calls this, only the first call installs the logger
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Run `f` and put the page's original path back afterwards.
fn preserving_path(f: impl FnOnce()) {
    init_log();
    let history = BrowserHistory::new(window());
    let original = history.path().expect("path");
    f();
    history.replace(&original).expect("restore path");
}

#[wasm_bindgen_test]
fn browser_history_push_and_replace() {
    preserving_path(|| {
        let history = BrowserHistory::new(window());
        let length = window().history().expect("history").length().expect("length");

        history.push("/mais").expect("push");
        assert_eq!(history.path().expect("path"), "/mais");

        history.replace("/").expect("replace");
        assert_eq!(history.path().expect("path"), "/");

        let new_length = window().history().expect("history").length().expect("length");
        assert_eq!(new_length, length + 1);
    });
}

#[wasm_bindgen_test]
fn element_container_replaces_contents() {
    let div = e("div");
    div.set_inner_html("<p>old</p><p>older</p>");

    div.set_content("<span>new</span>");

    assert_eq!(div.inner_html(), "<span>new</span>");
}

#[wasm_bindgen_test]
fn event_target_must_be_marked() {
    let a = e("a");
    a.set_attribute("href", "/mais").expect("failed to set href");

    let event = web_sys::Event::new("click").expect("event");
    a.dispatch_event(&event).expect("dispatch");
    assert_eq!(event.navigable_target("route"), None);

    a.set_attribute("route", "").expect("failed to set marker");
    let event = web_sys::Event::new("click").expect("event");
    a.dispatch_event(&event).expect("dispatch");
    assert_eq!(event.navigable_target("route"), Some("/mais".to_owned()));
}

#[wasm_bindgen_test]
fn missing_container() {
    let result = RouterBuilder::default()
        .route("/", "A")
        .container("no-such-container")
        .attach();

    match result {
        Err(Error::MissingContainer(id)) => assert_eq!(id, "no-such-container"),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("expected an error"),
    }
}

#[wasm_bindgen_test]
fn attached_router_follows_clicks() {
    preserving_path(|| {
        let history = BrowserHistory::new(window());
        history.replace("/unknown").expect("replace");

        let div = container("attached-clicks");
        let running = RouterBuilder::default()
            .route("/", "<p>A</p>")
            .route("/mais", "<p>B</p>")
            .container("attached-clicks")
            .attach()
            .expect("attach");

        // unknown paths fall back to the default route
        assert_eq!(div.inner_html(), "<p>A</p>");
        assert_eq!(history.path().expect("path"), "/");

        // spans have no default action, so an ignored click can't leave the page
        let plain = link("span", "/mais", false);
        plain.click();
        assert_eq!(div.inner_html(), "<p>A</p>");

        let marked = link("a", "/mais", true);
        marked.click();
        assert_eq!(div.inner_html(), "<p>B</p>");
        assert_eq!(history.path().expect("path"), "/mais");

        running.detach();

        let back = link("span", "/", true);
        back.click();
        assert_eq!(div.inner_html(), "<p>B</p>");

        for node in &[plain, marked, back] {
            node.remove();
        }
        div.remove();
    });
}

#[wasm_bindgen_test]
fn attached_router_follows_popstate() {
    preserving_path(|| {
        let history = BrowserHistory::new(window());
        history.replace("/mais").expect("replace");

        let div = container("attached-popstate");
        let running = RouterBuilder::default()
            .route("/", "A")
            .route("/mais", "B")
            .container("attached-popstate")
            .attach()
            .expect("attach");

        assert_eq!(div.inner_html(), "B");

        history.replace("/").expect("replace");
        let event = web_sys::Event::new("popstate").expect("event");
        window().dispatch_event(&event).expect("dispatch");
        assert_eq!(div.inner_html(), "A");

        running.detach();
        div.remove();
    });
}

#[wasm_bindgen_test]
fn dropped_router_removes_listeners() {
    preserving_path(|| {
        let history = BrowserHistory::new(window());
        history.replace("/").expect("replace");

        let div = container("dropped-router");
        let running = RouterBuilder::default()
            .route("/", "A")
            .route("/mais", "B")
            .container("dropped-router")
            .attach()
            .expect("attach");

        assert_eq!(div.inner_html(), "A");
        drop(running);

        // a span, so nothing navigates if a stale listener were still attached
        let marked = link("span", "/mais", true);
        marked.click();
        assert_eq!(div.inner_html(), "A");
        assert_eq!(history.path().expect("path"), "/");

        let event = web_sys::Event::new("popstate").expect("event");
        window().dispatch_event(&event).expect("dispatch");
        assert_eq!(div.inner_html(), "A");

        marked.remove();
        div.remove();
    });
}

#[wasm_bindgen_test]
fn error_into_js_value() {
    let value: JsValue = Error::Host(JsValue::from_f64(3.0)).into();
    assert_eq!(value.as_f64(), Some(3.0));

    let value: JsValue = Error::MissingContainer("content".to_owned()).into();
    assert_eq!(value.as_string().as_deref(), Some("expected an element with id \"content\""));

    let value: JsValue = Error::EmptyRouteTable.into();
    assert_eq!(value.as_string().as_deref(), Some("route table is empty"));
}

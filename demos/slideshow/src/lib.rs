use wasm_bindgen::prelude::*;
use cfg_if::cfg_if;
use log::{debug, info};
use pageroute::RouterBuilder;

cfg_if! {
    if #[cfg(feature = "console_error_panic_hook")] {
        #[inline]
        fn set_panic_hook() {
            console_error_panic_hook::set_once();
            debug!("panic hook set");
        }
    }
    else {
        fn set_panic_hook() {}
    }
}

cfg_if! {
    if #[cfg(feature = "console_log")] {
        #[inline]
        fn init_log() {
            console_log::init_with_level(log::Level::Debug)
                .expect("error initializing log");
            debug!("log initialized");
        }
    }
    else {
        fn init_log() {}
    }
}

/// The pages of the site, the first one is shown for unknown paths.
fn router() -> RouterBuilder {
    RouterBuilder::default()
        .route("/", include_str!("../pages/slideshow.html"))
        .route("/mais", include_str!("../pages/mais.html"))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init_log();
    set_panic_hook();

    router()
        .attach()?
        .forget();

    info!("slideshow initialized");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pageroute::test;

    #[test]
    fn pages_link_to_each_other() {
        let router = router()
            .build(test::History::at("/"), test::Container::default())
            .expect("build");

        for route in router.routes() {
            assert!(route.content().contains("<a route href="), "{} has no route link", route.path());
        }
    }

    #[test]
    fn unknown_path_shows_slideshow() {
        let router = router()
            .build(test::History::at("/nope"), test::Container::default())
            .expect("build");

        router.resolve().expect("resolve");

        let content = router.container().content().expect("content");
        assert!(content.contains("<h1>Slideshow</h1>"));
        assert_eq!(router.history().entries(), vec!["/"]);
    }
}

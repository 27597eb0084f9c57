//! Direct document access for the few effects markup can't express.
//!
//! Everything here is a no-op outside the browser build so it is safe to
//! call from cleanups that also run during server rendering.

pub fn set_scroll_locked(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::document;

        let value = if locked { "hidden" } else { "auto" };
        if let Some(body) = document().body() {
            if body.style().set_property("overflow", value).is_err() {
                log::warn!("couldn't set body overflow to {value}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}

pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::window;
        use web_sys::{ScrollBehavior, ScrollToOptions};

        let opts = ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }
}

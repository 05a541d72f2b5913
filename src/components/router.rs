//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the active route is derived from `#/path`
//! - **Shell never re-renders on navigation**: only the page outlet swaps
//! - **Unmatched paths redirect**: the catch-all rewrites the hash to `#/` in place
//! - **hashchange events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::shell::Shell;
use crate::models::{Resolution, path_from_hash, resolve, to_hash};
use crate::utils::dom;

/// Main application router.
///
/// - `#/` → Dashboard
/// - `#/jobs`, `#/chat`, ... → the bound page
/// - anything else → replace-style redirect to `#/`
#[component]
pub fn AppRouter() -> impl IntoView {
    // Current path from URL hash
    let path = RwSignal::new(path_from_hash(&dom::get_hash()));

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            path.set(path_from_hash(&dom::get_hash()));
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let resolution = Memo::new(move |_| path.with(|p| resolve(p)));

    // Catch-all: replace the unmatched hash so it never stays in the address bar
    Effect::new(move || {
        if let Resolution::Redirect { from, to } = resolution.get() {
            dom::log_warn(&format!("no route for '{}', redirecting to '{}'", from, to.path));
            dom::replace_hash(&to_hash(to.path));
            path.set(to.path.to_string());
        }
    });

    view! { <Shell resolution=resolution /> }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_unmatched_hash_is_replaced_with_root() {
        if let Some(window) = dom::window() {
            let _ = window.location().set_hash("/nowhere");
        }
        assert_eq!(dom::get_hash(), "#/nowhere");

        let body = document().body().expect("document has a body");
        let _handle = mount_to(body, AppRouter);

        // Let the redirect effect run
        TimeoutFuture::new(0).await;

        assert_eq!(dom::get_hash(), "#/");
    }

    #[wasm_bindgen_test]
    async fn test_known_hash_is_left_alone() {
        dom::replace_hash("#/jobs");

        let body = document().body().expect("document has a body");
        let _handle = mount_to(body, AppRouter);

        TimeoutFuture::new(0).await;

        assert_eq!(dom::get_hash(), "#/jobs");
    }
}

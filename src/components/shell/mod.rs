//! Shell controller.
//!
//! Owns the only piece of shared UI state ([`ShellState`]), observes the
//! viewport breakpoint and lays out sidebar, header, overlay and the main
//! content region.

use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::header::Header;
use crate::components::pages::PageOutlet;
use crate::components::sidebar::Sidebar;
use crate::models::{LayoutMode, Resolution, ShellState, wide_media_query};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/shell/shell.module.css");

/// Shell component wrapping the active page.
///
/// Children get read-only signals and a single `toggle` callback; only this
/// component writes to the state.
///
/// # Props
/// - `resolution`: The resolved current route (derived from the URL)
#[component]
pub fn Shell(resolution: Memo<Resolution>) -> impl IntoView {
    let state = RwSignal::new(ShellState::new());

    // The query reads `false` until evaluated after mount; sample the window
    // so a wide viewport never starts out narrow
    let is_wide = use_media_query(wide_media_query());
    let layout = Signal::derive(move || LayoutMode::settle(is_wide.get(), dom::viewport_layout()));

    // Read-only views for children
    let is_open = Signal::derive(move || state.with(|s| s.sidebar_open));
    let show_overlay = Signal::derive(move || state.with(|s| s.overlay_visible(layout.get())));
    let active_path = Signal::derive(move || resolution.with(Resolution::active_path));
    let page = Memo::new(move |_| resolution.with(Resolution::page));

    let toggle = Callback::new(move |_: ()| state.update(ShellState::toggle));
    let close = move |_: leptos::ev::MouseEvent| state.update(ShellState::close);

    view! {
        <div class=css::shell>
            <Sidebar
                is_open=is_open
                layout=layout
                active_path=active_path
                toggle=toggle
            />

            <div class=css::column>
                <Header layout=layout toggle_sidebar=toggle />

                <main class=css::main>
                    <PageOutlet page=page />
                </main>
            </div>

            // Beneath the sidebar, above the content; narrow layouts only
            <Show when=move || show_overlay.get()>
                <div class=css::overlay on:click=close></div>
            </Show>
        </div>
    }
}

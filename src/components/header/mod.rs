//! Header bar component.
//!
//! Menu button (narrow layouts only), global search field, notifications
//! and the user identity block.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::header;
use crate::models::LayoutMode;

stylance::import_crate_style!(css, "src/components/header/header.module.css");

/// Header bar shown above the main content.
///
/// Holds no state of its own; the menu button only requests a toggle.
#[component]
pub fn Header(layout: Signal<LayoutMode>, toggle_sidebar: Callback<()>) -> impl IntoView {
    view! {
        <header class=css::header>
            <div class=css::left>
                <Show when=move || layout.get().is_narrow()>
                    <button
                        class=css::menuButton
                        on:click=move |_: leptos::ev::MouseEvent| toggle_sidebar.run(())
                        title="Toggle navigation"
                        aria-label="Toggle navigation"
                    >
                        <Icon icon=ic::MENU />
                    </button>
                </Show>

                // Search is decorative: input is accepted, nothing is queried
                <label class=css::search>
                    <Icon icon=ic::SEARCH />
                    <input
                        type="text"
                        class=css::searchInput
                        placeholder=header::SEARCH_PLACEHOLDER
                    />
                </label>
            </div>

            <div class=css::right>
                <button class=css::bell title="Notifications">
                    <Icon icon=ic::BELL />
                    <span class=css::unread></span>
                </button>

                <div class=css::divider></div>

                <div class=css::user>
                    <div class=css::userText>
                        <p class=css::userName>{header::USER_NAME}</p>
                        <p class=css::userPlan>{header::USER_PLAN}</p>
                    </div>
                    <img src=header::AVATAR_URL alt="Avatar" class=css::avatar />
                </div>
            </div>
        </header>
    }
}

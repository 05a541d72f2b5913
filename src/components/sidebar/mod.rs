//! Sidebar navigation component.
//!
//! Renders the brand block, one link per navigation entry and the
//! promotional panel. Visibility and state changes are driven by the shell.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_NAME_ACCENT, promo};
use crate::models::{
    LayoutMode, NAV_ITEMS, NavItem, is_active, nav_click_requests_toggle, sidebar_visible,
    to_hash,
};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

/// Sidebar with the application's navigation links.
///
/// ## Responsive behavior
///
/// | Layout | `is_open = false` | `is_open = true` |
/// |--------|-------------------|------------------|
/// | Wide (>= 1024px) | visible | visible |
/// | Narrow (< 1024px) | translated off screen | visible above overlay |
///
/// # Props
/// - `is_open`: Sidebar state read from the shell
/// - `layout`: Current layout mode
/// - `active_path`: Canonical path of the mounted route
/// - `toggle`: Requests a toggle from the shell
#[component]
pub fn Sidebar(
    is_open: Signal<bool>,
    layout: Signal<LayoutMode>,
    active_path: Signal<&'static str>,
    toggle: Callback<()>,
) -> impl IntoView {
    // Close after navigating on narrow screens, never reopen
    let on_navigate = Callback::new(move |_: ()| {
        if nav_click_requests_toggle(
            dom::viewport_layout(),
            layout.get_untracked(),
            is_open.get_untracked(),
        ) {
            toggle.run(());
        }
    });

    let sidebar_class = move || {
        if sidebar_visible(layout.get(), is_open.get()) {
            css::sidebar.to_string()
        } else {
            format!("{} {}", css::sidebar, css::sidebarHidden)
        }
    };

    view! {
        <aside class=sidebar_class>
            <div class=css::inner>
                <div class=css::brand>
                    <div class=css::brandMark>
                        <Icon icon=ic::ZAP />
                    </div>
                    <span class=css::brandName>
                        {APP_NAME}" "<span class=css::brandAccent>{APP_NAME_ACCENT}</span>
                    </span>
                </div>

                <nav class=css::nav>
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <NavLink
                                    item=*item
                                    active_path=active_path
                                    on_navigate=on_navigate
                                />
                            }
                        })
                        .collect_view()}
                </nav>

                <PromoPanel />
            </div>
        </aside>
    }
}

/// A single navigation link.
#[component]
fn NavLink(
    item: NavItem,
    active_path: Signal<&'static str>,
    on_navigate: Callback<()>,
) -> impl IntoView {
    let active = Signal::derive(move || is_active(active_path.get(), item.path));

    view! {
        <a
            href=to_hash(item.path)
            class=move || nav_link_class(active.get())
            aria-current=move || active.get().then_some("page")
            on:click=move |_: leptos::ev::MouseEvent| on_navigate.run(())
        >
            <span class=css::navIcon>
                <Icon icon=ic::nav_icon(item.icon) />
            </span>
            {item.label}
        </a>
    }
}

fn nav_link_class(active: bool) -> String {
    if active {
        format!("{} {}", css::navLink, css::navLinkActive)
    } else {
        css::navLink.to_string()
    }
}

/// Static promotional panel linking to the applications page.
///
/// Not part of active-link highlighting.
#[component]
fn PromoPanel() -> impl IntoView {
    view! {
        <div class=css::promoSection>
            <a href=to_hash(promo::ITEM.path) class=css::promo>
                <div class=css::promoHeader>
                    <p class=css::promoTitle>{promo::ITEM.label}</p>
                    <span class=css::promoIcon>
                        <Icon icon=ic::ZAP />
                    </span>
                </div>
                <p class=css::promoCaption>{promo::CAPTION}</p>
                <div class=css::promoBadge>{promo::BADGE}</div>
            </a>
        </div>
    }
}

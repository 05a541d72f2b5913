//! Page units mounted by the router.
//!
//! Each page is a zero-argument component with no inputs from the shell and
//! no outputs back to it. The bodies are placeholders; page behavior lives
//! outside the shell.

use leptos::prelude::*;

use crate::models::Page;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

/// Common frame for a page placeholder.
#[component]
fn PageFrame(page: Page, summary: &'static str) -> impl IntoView {
    view! {
        <section class=css::page>
            <h1 class=css::title>{page.title()}</h1>
            <p class=css::summary>{summary}</p>
        </section>
    }
}

macro_rules! page_unit {
    ($name:ident, $summary:literal) => {
        #[component]
        pub fn $name() -> impl IntoView {
            view! { <PageFrame page=Page::$name summary={$summary} /> }
        }
    };
}

page_unit!(Dashboard, "Your search, applications and schedule at a glance.");
page_unit!(AiJobMatch, "Roles ranked against your profile.");
page_unit!(VisionStudio, "Create and review video introductions.");
page_unit!(JobSearch, "Browse and filter open positions.");
page_unit!(HousingSearch, "Find a place near your next job.");
page_unit!(SearchEngine, "Search across jobs, housing and the web.");
page_unit!(Calendar, "Interviews, deadlines and appointments.");
page_unit!(Applications, "Track every application and its status.");
page_unit!(ContentFactory, "Generate cover letters and profile copy.");
page_unit!(Chatbot, "Ask the assistant anything about your search.");
page_unit!(VoiceAssistant, "Talk to the assistant hands-free.");
page_unit!(Profile, "Your personal details and preferences.");

/// Render the page unit bound to `page`.
pub fn render(page: Page) -> AnyView {
    match page {
        Page::Dashboard => view! { <Dashboard /> }.into_any(),
        Page::AiJobMatch => view! { <AiJobMatch /> }.into_any(),
        Page::VisionStudio => view! { <VisionStudio /> }.into_any(),
        Page::JobSearch => view! { <JobSearch /> }.into_any(),
        Page::HousingSearch => view! { <HousingSearch /> }.into_any(),
        Page::SearchEngine => view! { <SearchEngine /> }.into_any(),
        Page::Calendar => view! { <Calendar /> }.into_any(),
        Page::Applications => view! { <Applications /> }.into_any(),
        Page::ContentFactory => view! { <ContentFactory /> }.into_any(),
        Page::Chatbot => view! { <Chatbot /> }.into_any(),
        Page::VoiceAssistant => view! { <VoiceAssistant /> }.into_any(),
        Page::Profile => view! { <Profile /> }.into_any(),
    }
}

/// Mount point for the active page unit.
///
/// Exactly one page is mounted at a time; switching pages drops the previous
/// one. Errors raised by a page render inline here and leave the shell intact.
#[component]
pub fn PageOutlet(page: Memo<Page>) -> impl IntoView {
    view! {
        <ErrorBoundary fallback=move |errors| {
            // Runs once per transition into the failed state
            for (_, e) in errors.get_untracked() {
                dom::log_error(&format!("page error in {}: {}", page.get_untracked().title(), e));
            }

            view! {
                <div class=css::error role="alert">
                    <p class=css::errorTitle>
                        {move || format!("{} failed to load", page.get().title())}
                    </p>
                    <ul class=css::errorList>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                </div>
            }
        }>
            {move || render(page.get())}
        </ErrorBoundary>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_outlet_swaps_pages_without_fallback() {
        let page = RwSignal::new(Page::Dashboard);
        let body = document().body().expect("document has a body");
        let _handle = mount_to(body.clone(), move || {
            let current = Memo::new(move |_| page.get());
            view! { <PageOutlet page=current /> }
        });

        TimeoutFuture::new(0).await;
        let text = body.text_content().unwrap_or_default();
        assert!(text.contains(Page::Dashboard.title()));

        page.set(Page::JobSearch);
        TimeoutFuture::new(0).await;
        let text = body.text_content().unwrap_or_default();
        assert!(text.contains(Page::JobSearch.title()));
        assert!(!text.contains("Your search, applications and schedule at a glance."));
        assert!(
            document()
                .query_selector("[role=alert]")
                .ok()
                .flatten()
                .is_none()
        );
    }
}

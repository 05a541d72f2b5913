//! Root application module.
//!
//! Contains the main App component and application-level setup logic
//! following Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;

/// Root application component with error boundary.
///
/// This component:
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the hash router, which mounts the shell
///
/// Page-level errors are caught closer to the page by the outlet; this
/// boundary only sees failures of the shell itself.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #0d1117;
                    color: #e2e8f0;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #f87171; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #94a3b8; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #161b22;
                            padding: 1rem;
                            border-radius: 0.75rem;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #64748b;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #f87171;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #007bff;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 0.75rem;
                                cursor: pointer;
                                font-weight: 700;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}

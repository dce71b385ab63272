//! Application router component.
//!
//! Handles URL-based routing with hash history and drives document loading.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the shown day is derived from `#/YYYY-MM-DD`
//! - **Layout never re-renders on navigation**: only the day document is swapped
//! - **hashchange events**: Browser back/forward buttons work automatically

use leptos::{ev, prelude::*};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::digest::DigestList;
use crate::components::header::Header;
use crate::components::toolbar::Toolbar;
use crate::config::SEARCH_INPUT_ID;
use crate::models::LoadState;
#[cfg(target_arch = "wasm32")]
use crate::models::Route;
use crate::utils::{dom, fetch_day, fetch_index};

stylance::import_crate_style!(css, "src/components/router.module.css");

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `#/` → latest published day
/// - `#/YYYY-MM-DD` → that day, or the latest if it is not listed
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let route = ctx.route;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Index: fetched on mount and again on retry while it has not loaded
    Effect::new(move |_| {
        ctx.reload.track();
        if ctx.index.with_untracked(|state| state.ready().is_some()) {
            return;
        }

        spawn_local(async move {
            let result = fetch_index().await;
            if let Ok(index) = &result {
                for value in &index.rejected {
                    dom::warn(&format!("index: skipping malformed date {:?}", value));
                }
            }
            ctx.index.set(result.into());
        });
    });

    // Day document: refetched whenever the shown day changes
    Effect::new(move |_| {
        ctx.reload.track();
        let Some(date) = ctx.current_date.get() else {
            return;
        };

        ctx.day.set(LoadState::Loading);
        ctx.filters.reset_page();

        spawn_local(async move {
            let result = fetch_day(date).await;

            // A newer navigation superseded this response
            if ctx.current_date.get_untracked() == Some(date) {
                ctx.day.set(result.into());
            }
        });
    });

    // `/` jumps to the search box from anywhere outside a text field
    let _ = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "/" && !ev.ctrl_key() && !ev.meta_key() && !dom::is_editing_text() {
            ev.prevent_default();
            dom::focus_element_by_id(SEARCH_INPUT_ID);
        }
    });

    view! {
        <div class=css::page>
            <Header />
            <main class=css::main>
                <Toolbar />
                <DigestList />
            </main>
        </div>
    }
}

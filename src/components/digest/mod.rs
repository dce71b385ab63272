//! The entry area: load/empty states, entry cards and the pager.

mod entry;
mod pager;

use keepup_core::UiText;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Listing;

pub use entry::EntryCard;
pub use pager::Pager;

stylance::import_crate_style!(css, "src/components/digest/digest.module.css");

/// Entries for the shown day, or the state that replaces them.
#[component]
pub fn DigestList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let locale = ctx.prefs.locale;
    let t = move |key: UiText| locale.get().text(key);

    let listing = Memo::new(move |_| ctx.listing());

    move || match listing.get() {
        Listing::Loading => view! {
            <div class=css::state aria-busy="true">
                <span class=css::spinner />
                <p>{move || t(UiText::Loading)}</p>
            </div>
        }
        .into_any(),
        Listing::Failed(message) => view! {
            <div class=format!("{} {}", css::state, css::stateError) role="alert">
                <p class=css::stateTitle>{move || t(UiText::LoadError)}</p>
                <p class=css::stateDetail>{message}</p>
                <button class=css::stateButton on:click=move |_| ctx.retry()>
                    <Icon icon=ic::RETRY />
                    {move || t(UiText::Retry)}
                </button>
            </div>
        }
        .into_any(),
        Listing::NoData => view! {
            <div class=css::state>
                <p class=css::stateTitle>{move || t(UiText::NoData)}</p>
            </div>
        }
        .into_any(),
        Listing::NoMatch => view! {
            <div class=css::state>
                <p class=css::stateTitle>{move || t(UiText::NoMatch)}</p>
                <button class=css::stateButton on:click=move |_| ctx.filters.clear()>
                    <Icon icon=ic::CLOSE />
                    {move || t(UiText::ClearFilters)}
                </button>
            </div>
        }
        .into_any(),
        Listing::Entries(page) => {
            let number = page.number;
            let total_pages = page.total_pages;
            view! {
                <ol class=css::entries>
                    {page
                        .items
                        .into_iter()
                        .map(|entry| view! { <li><EntryCard entry=entry /></li> })
                        .collect_view()}
                </ol>
                <Pager number=number total_pages=total_pages />
            }
            .into_any()
        }
    }
}

//! Previous/next page controls.

use keepup_core::UiText;
use keepup_core::locale::format_page;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/digest/digest.module.css");

/// Pager below the entry list; hidden when everything fits on one page.
#[component]
pub fn Pager(number: usize, total_pages: usize) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let locale = ctx.prefs.locale;
    let t = move |key: UiText| locale.get().text(key);

    let go = move |page: usize| {
        ctx.filters.page.set(page);
        dom::scroll_to_top();
    };

    (total_pages > 1).then(|| {
        view! {
            <nav class=css::pager>
                <button
                    class=css::pageButton
                    disabled=number <= 1
                    on:click=move |_| go(number.saturating_sub(1))
                >
                    <Icon icon=ic::CHEVRON_LEFT />
                    {move || t(UiText::PreviousPage)}
                </button>
                <span class=css::pageCaption>
                    {move || format_page(number, total_pages, locale.get())}
                </span>
                <button
                    class=css::pageButton
                    disabled=number >= total_pages
                    on:click=move |_| go(number + 1)
                >
                    {move || t(UiText::NextPage)}
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </nav>
        }
    })
}

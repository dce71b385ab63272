//! Category chips and the debounced search box.

use gloo_timers::callback::Timeout;
use keepup_core::{CategoryFilter, UiText};
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{SEARCH_DEBOUNCE_MS, SEARCH_INPUT_ID};

stylance::import_crate_style!(css, "src/components/toolbar/toolbar.module.css");

#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let has_entries = Memo::new(move |_| {
        ctx.day
            .with(|state| state.ready().is_some_and(|day| !day.is_empty()))
    });

    view! {
        <div class=css::toolbar>
            <SearchBox />
            <Show when=move || has_entries.get()>
                <CategoryChips />
            </Show>
        </div>
    }
}

/// Search input; the filter updates once typing pauses.
#[component]
fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let filters = ctx.filters;
    let locale = ctx.prefs.locale;

    // Text in the box, ahead of the applied query while a debounce is pending
    let draft = RwSignal::new(filters.query.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    // Filters cleared elsewhere ("Clear filters") empty the box too
    Effect::new(move |_| {
        if filters.query.with(|q| q.is_empty()) {
            draft.set(String::new());
        }
    });

    let clear = move || {
        pending.set_value(None);
        draft.set(String::new());
        filters.set_query(String::new());
    };

    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        draft.set(value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || filters.set_query(value));
        // Dropping the previous handle cancels it
        pending.set_value(Some(timeout));
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            clear();
        }
    };

    view! {
        <label class=css::search>
            <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
            <input
                id=SEARCH_INPUT_ID
                type="search"
                class=css::searchInput
                autocomplete="off"
                placeholder=move || locale.get().text(UiText::SearchPlaceholder)
                prop:value=move || draft.get()
                on:input=on_input
                on:keydown=on_keydown
            />
            <Show when=move || draft.with(|d| !d.is_empty())>
                <button
                    class=css::clearButton
                    title=move || locale.get().text(UiText::ClearFilters)
                    on:click=move |_| clear()
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </Show>
        </label>
    }
}

/// One chip per category present in the day, plus "All".
#[component]
fn CategoryChips() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let filters = ctx.filters;
    let locale = ctx.prefs.locale;

    let counts = Memo::new(move |_| {
        ctx.day
            .with(|state| state.ready().map(|day| day.category_counts()).unwrap_or_default())
    });
    let total = Memo::new(move |_| counts.with(|c| c.iter().map(|(_, n)| n).sum::<usize>()));

    let chip_class = move |active: bool| {
        if active {
            format!("{} {}", css::chip, css::chipActive)
        } else {
            css::chip.to_string()
        }
    };

    view! {
        <div class=css::chips role="toolbar">
            <button
                class=move || chip_class(filters.category.with(|c| *c == CategoryFilter::All))
                aria-pressed=move || (filters.category.with(|c| *c == CategoryFilter::All)).to_string()
                on:click=move |_| filters.set_category(CategoryFilter::All)
            >
                {move || locale.get().text(UiText::AllCategories)}
                <span class=css::count>{total}</span>
            </button>
            {move || {
                counts
                    .get()
                    .into_iter()
                    .map(|(category, count)| {
                        let emoji = category.emoji();
                        let filter = CategoryFilter::Only(category.clone());
                        let is_active = {
                            let filter = filter.clone();
                            Memo::new(move |_| filters.category.with(|c| *c == filter))
                        };
                        view! {
                            <button
                                class=move || chip_class(is_active.get())
                                aria-pressed=move || is_active.get().to_string()
                                on:click=move |_| filters.set_category(filter.clone())
                            >
                                <span aria-hidden="true">{emoji}</span>
                                {move || category.label(locale.get()).to_string()}
                                <span class=css::count>{count}</span>
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

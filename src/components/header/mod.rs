//! Page header: title, day navigation and preference toggles.

use keepup_core::locale::{format_date_long, format_stats};
use keepup_core::{DigestDate, Theme, UiText};
use leptos::{ev, prelude::*};
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/header/header.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let locale = ctx.prefs.locale;
    let t = move |key: UiText| locale.get().text(key);

    let long_date = Signal::derive(move || {
        ctx.current_date
            .get()
            .map(|date| format_date_long(date, locale.get()))
            .unwrap_or_default()
    });

    let stats = Signal::derive(move || {
        ctx.day.with(|state| {
            state.ready().map(|day| {
                format_stats(day.total_articles, day.source_total(), day.entries.len(), locale.get())
            })
        })
    });

    view! {
        <header class=css::header>
            <div class=css::titleRow>
                <div class=css::brand>
                    <h1 class=css::title>
                        <a href=Route::Latest.to_hash()>{move || t(UiText::AppTitle)}</a>
                    </h1>
                    <p class=css::tagline>{move || t(UiText::Tagline)}</p>
                </div>
                <PreferenceToggles />
            </div>

            <DayNav />

            <p class=css::date>{long_date}</p>
            {move || stats.get().map(|line| view! { <p class=css::stats>{line}</p> })}
        </header>
    }
}

/// Previous/next day buttons around the date select.
#[component]
fn DayNav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let locale = ctx.prefs.locale;
    let t = move |key: UiText| locale.get().text(key);

    let neighbours = Memo::new(move |_| ctx.neighbours());
    let dates = Memo::new(move |_| {
        ctx.index
            .with(|state| state.ready().map(|index| index.dates.clone()).unwrap_or_default())
    });

    let go = move |date: Option<DigestDate>| {
        if let Some(date) = date {
            Route::Day(date).navigate();
        }
    };

    let on_select = move |ev: ev::Event| {
        if let Ok(date) = DigestDate::parse(&event_target_value(&ev)) {
            Route::Day(date).navigate();
        }
    };

    view! {
        <nav class=css::dayNav>
            <button
                class=css::navButton
                disabled=move || neighbours.get().0.is_none()
                title=move || t(UiText::PreviousDay)
                on:click=move |_| go(neighbours.get_untracked().0)
            >
                <Icon icon=ic::CHEVRON_LEFT />
            </button>

            <label class=css::dateSelect>
                <span class=css::dateIcon><Icon icon=ic::CALENDAR /></span>
                <select
                    aria-label=move || t(UiText::SelectDate)
                    disabled=move || dates.with(|d| d.is_empty())
                    on:change=on_select
                >
                    <For
                        each=move || dates.get()
                        key=|date| *date
                        children=move |date: DigestDate| view! {
                            <option
                                value=date.to_string()
                                prop:selected=move || ctx.current_date.get() == Some(date)
                            >
                                {date.to_string()}
                            </option>
                        }
                    />
                </select>
            </label>

            <button
                class=css::navButton
                disabled=move || neighbours.get().1.is_none()
                title=move || t(UiText::NextDay)
                on:click=move |_| go(neighbours.get_untracked().1)
            >
                <Icon icon=ic::CHEVRON_RIGHT />
            </button>
        </nav>
    }
}

/// Language and theme switches.
#[component]
fn PreferenceToggles() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let prefs = ctx.prefs;
    let t = move |key: UiText| prefs.locale.get().text(key);

    let theme_title = move || match prefs.theme.get() {
        Theme::Light => t(UiText::SwitchToDark),
        Theme::Dark => t(UiText::SwitchToLight),
    };

    view! {
        <div class=css::toggles>
            <button
                class=css::toggleButton
                title=move || t(UiText::SwitchLanguage)
                on:click=move |_| prefs.toggle_locale()
            >
                <Icon icon=ic::LANGUAGE />
                <span class=css::toggleLabel>{move || prefs.locale.get().toggle().short_label()}</span>
            </button>
            <button
                class=css::toggleButton
                title=theme_title
                on:click=move |_| prefs.toggle_theme()
            >
                {move || match prefs.theme.get() {
                    Theme::Light => view! { <Icon icon=ic::MOON /> }.into_any(),
                    Theme::Dark => view! { <Icon icon=ic::SUN /> }.into_any(),
                }}
            </button>
        </div>
    }
}

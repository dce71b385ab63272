//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the two
//! state groups it is built from: [`Preferences`] and [`FilterState`].

use keepup_core::{CategoryFilter, DayDigest, DigestDate, DigestIndex, EntryQuery, Locale, Theme};
use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::AppRouter;
use crate::config::{PAGE_SIZE, PREFERS_DARK_QUERY};
use crate::models::{Listing, LoadState, Route};
use crate::utils::{dom, prefs};

// ============================================================================
// Preferences
// ============================================================================

/// The persisted user preferences.
///
/// The theme follows the system color scheme until the user toggles it;
/// only an explicit toggle writes to storage.
#[derive(Clone, Copy)]
pub struct Preferences {
    pub locale: RwSignal<Locale>,
    pub theme: RwSignal<Theme>,
    /// Whether the theme was chosen by the user rather than the system.
    pub theme_pinned: RwSignal<bool>,
}

impl Preferences {
    /// Restores stored preferences, falling back to browser defaults.
    pub fn new(prefers_dark: bool) -> Self {
        let stored_theme = prefs::load_theme();

        Self {
            locale: RwSignal::new(prefs::initial_locale()),
            theme: RwSignal::new(stored_theme.unwrap_or(Theme::from_system(prefers_dark))),
            theme_pinned: RwSignal::new(stored_theme.is_some()),
        }
    }

    pub fn toggle_locale(&self) {
        let next = self.locale.get_untracked().toggle();
        self.locale.set(next);
        if let Err(e) = prefs::save_locale(next) {
            dom::warn(&format!("language preference not saved: {}", e));
        }
    }

    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggle();
        self.theme.set(next);
        self.theme_pinned.set(true);
        if let Err(e) = prefs::save_theme(next) {
            dom::warn(&format!("theme preference not saved: {}", e));
        }
    }

    /// Track the system color scheme unless the user pinned a theme.
    pub fn follow_system(&self, prefers_dark: bool) {
        if !self.theme_pinned.get_untracked() {
            self.theme.set(Theme::from_system(prefers_dark));
        }
    }
}

// ============================================================================
// FilterState
// ============================================================================

/// Active category, search text and page.
///
/// Every change to the category or query returns to the first page.
#[derive(Clone, Copy)]
pub struct FilterState {
    pub category: RwSignal<CategoryFilter>,
    pub query: RwSignal<String>,
    /// 1-based; clamped when the listing is built.
    pub page: RwSignal<usize>,
}

impl FilterState {
    pub fn new() -> Self {
        Self {
            category: RwSignal::new(CategoryFilter::All),
            query: RwSignal::new(String::new()),
            page: RwSignal::new(1),
        }
    }

    pub fn set_category(&self, category: CategoryFilter) {
        self.category.set(category);
        self.page.set(1);
    }

    pub fn set_query(&self, query: String) {
        self.query.set(query);
        self.page.set(1);
    }

    pub fn reset_page(&self) {
        self.page.set(1);
    }

    pub fn clear(&self) {
        self.category.set(CategoryFilter::All);
        self.query.set(String::new());
        self.page.set(1);
    }

    /// Current filters as a query (tracked).
    pub fn entry_query(&self) -> EntryQuery {
        EntryQuery::new(self.category.get(), self.query.get())
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from children
/// with `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub prefs: Preferences,
    pub filters: FilterState,

    /// Route from the URL hash.
    pub route: RwSignal<Route>,
    /// The date index, fetched once per session (or per retry).
    pub index: RwSignal<LoadState<DigestIndex>>,
    /// The displayed day's document.
    pub day: RwSignal<LoadState<DayDigest>>,
    /// Day actually shown: the routed date if listed, else the latest.
    pub current_date: Memo<Option<DigestDate>>,
    /// Bumped to re-run failed fetches.
    pub reload: RwSignal<u32>,
}

impl AppContext {
    pub fn new(prefers_dark: bool) -> Self {
        let route = RwSignal::new(Route::current());
        let index = RwSignal::new(LoadState::Loading);
        let current_date = Memo::new(move |_| {
            let requested = route.get().date();
            index.with(|state: &LoadState<DigestIndex>| state.ready().and_then(|i| i.resolve(requested)))
        });

        Self {
            prefs: Preferences::new(prefers_dark),
            filters: FilterState::new(),
            route,
            index,
            day: RwSignal::new(LoadState::Loading),
            current_date,
            reload: RwSignal::new(0),
        }
    }

    /// Render state of the entry area (tracked).
    pub fn listing(&self) -> Listing {
        let query = self.filters.entry_query();
        let locale = self.prefs.locale.get();
        let page = self.filters.page.get();

        self.index.with(|index| {
            self.day
                .with(|day| Listing::build(index, day, &query, locale, page, PAGE_SIZE))
        })
    }

    /// Older and newer neighbours of the shown day (tracked).
    pub fn neighbours(&self) -> (Option<DigestDate>, Option<DigestDate>) {
        let Some(date) = self.current_date.get() else {
            return (None, None);
        };
        self.index.with(|state| match state.ready() {
            Some(index) => (index.previous(date), index.next(date)),
            None => (None, None),
        })
    }

    /// Re-run whichever fetch failed.
    pub fn retry(&self) {
        if matches!(self.index.get_untracked(), LoadState::Failed(_)) {
            self.index.set(LoadState::Loading);
        }
        self.day.set(LoadState::Loading);
        self.reload.update(|n| *n += 1);
    }
}

/// Root application component.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Mirrors theme and language onto the `<html>` element
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let prefers_dark = use_media_query(PREFERS_DARK_QUERY);
    let ctx = AppContext::new(prefers_dark.get_untracked());
    provide_context(ctx);

    Effect::new(move |_| {
        ctx.prefs.follow_system(prefers_dark.get());
    });

    Effect::new(move |_| {
        dom::set_root_attribute("data-theme", ctx.prefs.theme.get().tag());
    });

    Effect::new(move |_| {
        dom::set_root_attribute("lang", ctx.prefs.locale.get().tag());
    });

    view! { <AppRouter /> }
}

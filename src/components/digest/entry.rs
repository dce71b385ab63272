//! A single digest entry card.

use keepup_core::{DigestEntry, SourceCitation, UiText, render_inline, render_markdown, validate_link_url};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/digest/digest.module.css");

/// Emoji, category badge, title, body and source citations of one entry.
///
/// Title and body go through the markdown renderer, which escapes the
/// document text before adding any markup.
#[component]
pub fn EntryCard(entry: DigestEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let locale = ctx.prefs.locale;

    let entry = StoredValue::new(entry);
    let title = move || entry.with_value(|e| render_inline(e.title(locale.get())));
    let body = move || entry.with_value(|e| render_markdown(e.body(locale.get())));
    let badge = move || entry.with_value(|e| e.category.label(locale.get()).to_string());
    let emoji = entry.with_value(|e| e.display_emoji().to_string());
    let sources = entry.with_value(|e| e.sources.clone());

    view! {
        <article class=css::card>
            <header class=css::cardHeader>
                <span class=css::emoji aria-hidden="true">{emoji}</span>
                <span class=css::badge>{badge}</span>
            </header>
            <h2 class=css::cardTitle inner_html=title />
            <div class=css::body inner_html=body />
            {(!sources.is_empty()).then(|| view! {
                <footer class=css::sources>
                    <span class=css::sourcesLabel>{move || locale.get().text(UiText::Sources)}</span>
                    <ul>
                        {sources
                            .into_iter()
                            .map(|citation| view! { <li><Citation citation=citation /></li> })
                            .collect_view()}
                    </ul>
                </footer>
            })}
        </article>
    }
}

/// Source link; unsafe or malformed URLs degrade to plain text.
#[component]
fn Citation(citation: SourceCitation) -> impl IntoView {
    let label = citation.source_label().into_owned();
    let title = if citation.title.trim().is_empty() {
        citation.url.clone()
    } else {
        citation.title.clone()
    };

    let link = match validate_link_url(&citation.url).into_valid() {
        Some(href) => view! {
            <a href=href target="_blank" rel="noopener noreferrer" class=css::sourceLink>
                {title}
                <span class=css::externalIcon><Icon icon=ic::EXTERNAL_LINK /></span>
            </a>
        }
        .into_any(),
        None => view! { <span class=css::sourceText>{title}</span> }.into_any(),
    };

    view! {
        <span class=css::sourceTag>{label}</span>
        {link}
    }
}

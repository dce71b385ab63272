//! Native previewer for digest documents.
//!
//! Renders a day document through the same filter, pager and markdown
//! renderer the web app uses, so pipeline output can be checked from a
//! terminal before it is published.

use keepup_core::locale::{format_date_long, format_page, format_stats};
use keepup_core::markdown::escape_html;
use keepup_core::{
    CategoryFilter, DayDigest, DigestDate, DigestEntry, DigestError, DigestIndex, DigestView,
    EntryQuery, Locale, UiText, render_inline, render_markdown, validate_link_url, view_digest,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Digest(#[from] DigestError),
}

/// Filters shared by the `show` and `html` subcommands.
#[derive(Clone, Debug)]
pub struct ViewOptions {
    pub locale: Locale,
    pub category: CategoryFilter,
    pub query: String,
    pub page: usize,
    pub per_page: usize,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            category: CategoryFilter::All,
            query: String::new(),
            page: 1,
            per_page: 10,
        }
    }
}

impl ViewOptions {
    fn query(&self) -> EntryQuery {
        EntryQuery::new(self.category.clone(), self.query.clone())
    }
}

pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_string(),
        source,
    })
}

/// Plain-text listing of one page of a day document.
pub fn show(document: &str, opts: &ViewOptions) -> Result<String, CliError> {
    let day = DayDigest::from_json(document)?;
    let locale = opts.locale;
    let mut lines = Vec::new();

    if let Some(date) = day.date {
        lines.push(format_date_long(date, locale));
    }
    lines.push(format_stats(
        day.total_articles,
        day.source_total(),
        day.entries.len(),
        locale,
    ));
    lines.push(String::new());

    match view_digest(&day, &opts.query(), locale, opts.page, opts.per_page) {
        DigestView::NoData => lines.push(UiText::NoData.text(locale).to_string()),
        DigestView::NoMatch => lines.push(UiText::NoMatch.text(locale).to_string()),
        DigestView::Entries(page) => {
            lines.extend(page.items.iter().map(|entry| {
                format!(
                    "{} [{}] {} ({})",
                    entry.display_emoji(),
                    entry.category.label(locale),
                    entry.title(locale),
                    entry.sources.len()
                )
            }));
            if page.is_paged() {
                lines.push(String::new());
                lines.push(format_page(page.number, page.total_pages, locale));
            }
        }
    }

    Ok(join_lines(&lines))
}

/// HTML fragment for one page of a day document.
pub fn html(document: &str, opts: &ViewOptions) -> Result<String, CliError> {
    let day = DayDigest::from_json(document)?;
    let locale = opts.locale;

    let lines = match view_digest(&day, &opts.query(), locale, opts.page, opts.per_page) {
        DigestView::NoData => vec![format!(
            "<p class=\"empty no-data\">{}</p>",
            escape_html(UiText::NoData.text(locale))
        )],
        DigestView::NoMatch => vec![format!(
            "<p class=\"empty no-match\">{}</p>",
            escape_html(UiText::NoMatch.text(locale))
        )],
        DigestView::Entries(page) => page
            .items
            .iter()
            .flat_map(|entry| entry_html(entry, locale))
            .collect(),
    };

    Ok(join_lines(&lines))
}

fn entry_html(entry: &DigestEntry, locale: Locale) -> Vec<String> {
    let mut lines = vec![
        format!(
            "<article class=\"entry\" data-category=\"{}\">",
            escape_html(entry.category.tag())
        ),
        format!(
            "<h2><span class=\"emoji\">{}</span> {}</h2>",
            escape_html(entry.display_emoji()),
            render_inline(entry.title(locale))
        ),
        render_markdown(entry.body(locale)),
    ];

    if !entry.sources.is_empty() {
        lines.push("<ul class=\"sources\">".to_string());
        lines.extend(entry.sources.iter().map(|citation| {
            let title = escape_html(&citation.title);
            let label = escape_html(&citation.source_label());
            match validate_link_url(&citation.url).into_valid() {
                Some(url) => format!(
                    "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a> · {}</li>",
                    escape_html(&url),
                    title,
                    label
                ),
                None => format!("<li>{} · {}</li>", title, label),
            }
        }));
        lines.push("</ul>".to_string());
    }

    lines.push("</article>".to_string());
    lines
}

/// Normalized date list of an index document, newest first.
pub fn dates(document: &str) -> Result<String, CliError> {
    let index = DigestIndex::from_json(document)?;

    let lines: Vec<String> = index
        .dates
        .iter()
        .map(DigestDate::to_string)
        .chain(
            index
                .rejected
                .iter()
                .map(|rejected| format!("# skipped invalid date: {}", rejected)),
        )
        .collect();

    Ok(join_lines(&lines))
}

/// One line per item, each newline-terminated.
fn join_lines(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

//! Interface language and the translated UI strings.
//!
//! Digest content carries its own English and Portuguese text; this module
//! only covers the chrome around it.

use std::fmt;
use std::str::FromStr;

use crate::error::DigestError;
use crate::models::DigestDate;

/// Interface and content language.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    /// Brazilian Portuguese.
    Pt,
}

impl Locale {
    /// BCP 47 tag, used for `<html lang>` and storage.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt-BR",
        }
    }

    /// Short label shown on the language toggle.
    pub fn short_label(&self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Pt => "PT",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::En => Self::Pt,
            Self::Pt => Self::En,
        }
    }

    /// Parse a language tag (`en`, `en-US`, `pt`, `pt-BR`, ...).
    pub fn parse(tag: &str) -> Result<Self, DigestError> {
        let lower = tag.trim().to_ascii_lowercase();
        if lower == "en" || lower.starts_with("en-") || lower.starts_with("en_") {
            Ok(Self::En)
        } else if lower == "pt" || lower.starts_with("pt-") || lower.starts_with("pt_") {
            Ok(Self::Pt)
        } else {
            Err(DigestError::UnknownLocale(tag.to_string()))
        }
    }

    /// Pick a locale from the browser language, defaulting to English.
    pub fn from_browser_language(language: &str) -> Self {
        Self::parse(language).unwrap_or_default()
    }

    pub fn text(self, key: UiText) -> &'static str {
        key.text(self)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Translatable interface strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiText {
    AppTitle,
    Tagline,
    SearchPlaceholder,
    AllCategories,
    Loading,
    LoadError,
    Retry,
    NoData,
    NoMatch,
    ClearFilters,
    PreviousDay,
    NextDay,
    PreviousPage,
    NextPage,
    Sources,
    SwitchLanguage,
    SwitchToDark,
    SwitchToLight,
    SelectDate,
}

impl UiText {
    pub fn text(self, locale: Locale) -> &'static str {
        use Locale::{En, Pt};

        match (self, locale) {
            (Self::AppTitle, _) => "Keep Up Daily",
            (Self::Tagline, En) => "The developer news that matters, summarized every morning.",
            (Self::Tagline, Pt) => "As notícias de tecnologia que importam, resumidas toda manhã.",
            (Self::SearchPlaceholder, En) => "Search today's digest…",
            (Self::SearchPlaceholder, Pt) => "Buscar no resumo do dia…",
            (Self::AllCategories, En) => "All",
            (Self::AllCategories, Pt) => "Todas",
            (Self::Loading, En) => "Loading digest…",
            (Self::Loading, Pt) => "Carregando resumo…",
            (Self::LoadError, En) => "Could not load the digest.",
            (Self::LoadError, Pt) => "Não foi possível carregar o resumo.",
            (Self::Retry, En) => "Try again",
            (Self::Retry, Pt) => "Tentar novamente",
            (Self::NoData, En) => "No digest was published for this day.",
            (Self::NoData, Pt) => "Nenhum resumo foi publicado neste dia.",
            (Self::NoMatch, En) => "No entries match your filters.",
            (Self::NoMatch, Pt) => "Nenhum destaque corresponde aos filtros.",
            (Self::ClearFilters, En) => "Clear filters",
            (Self::ClearFilters, Pt) => "Limpar filtros",
            (Self::PreviousDay, En) => "Previous day",
            (Self::PreviousDay, Pt) => "Dia anterior",
            (Self::NextDay, En) => "Next day",
            (Self::NextDay, Pt) => "Próximo dia",
            (Self::PreviousPage, En) => "Previous",
            (Self::PreviousPage, Pt) => "Anterior",
            (Self::NextPage, En) => "Next",
            (Self::NextPage, Pt) => "Próxima",
            (Self::Sources, En) => "Sources",
            (Self::Sources, Pt) => "Fontes",
            (Self::SwitchLanguage, En) => "Ler em português",
            (Self::SwitchLanguage, Pt) => "Read in English",
            (Self::SwitchToDark, En) => "Switch to dark theme",
            (Self::SwitchToDark, Pt) => "Mudar para tema escuro",
            (Self::SwitchToLight, En) => "Switch to light theme",
            (Self::SwitchToLight, Pt) => "Mudar para tema claro",
            (Self::SelectDate, En) => "Choose a day",
            (Self::SelectDate, Pt) => "Escolha um dia",
        }
    }
}

const MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTHS_PT: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro",
    "outubro", "novembro", "dezembro",
];

/// Long date for the header ("October 18, 2026" / "18 de outubro de 2026").
pub fn format_date_long(date: DigestDate, locale: Locale) -> String {
    let idx = usize::from(date.month() - 1);
    match locale {
        Locale::En => format!("{} {}, {}", MONTHS_EN[idx], date.day(), date.year()),
        Locale::Pt => format!("{} de {} de {}", date.day(), MONTHS_PT[idx], date.year()),
    }
}

/// Summary line under the header.
pub fn format_stats(total_articles: u64, sources: usize, entries: usize, locale: Locale) -> String {
    match locale {
        Locale::En => format!(
            "{} {} scanned from {} {} · {} {}",
            total_articles,
            plural(total_articles as usize, "article", "articles"),
            sources,
            plural(sources, "source", "sources"),
            entries,
            plural(entries, "highlight", "highlights"),
        ),
        Locale::Pt => format!(
            "{} {} de {} {} · {} {}",
            total_articles,
            plural(total_articles as usize, "artigo analisado", "artigos analisados"),
            sources,
            plural(sources, "fonte", "fontes"),
            entries,
            plural(entries, "destaque", "destaques"),
        ),
    }
}

/// Pager caption ("Page 2 of 3").
pub fn format_page(number: usize, total: usize, locale: Locale) -> String {
    match locale {
        Locale::En => format!("Page {} of {}", number, total),
        Locale::Pt => format!("Página {} de {}", number, total),
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tags() {
        assert_eq!(Locale::parse("en").unwrap(), Locale::En);
        assert_eq!(Locale::parse("en-US").unwrap(), Locale::En);
        assert_eq!(Locale::parse("pt-BR").unwrap(), Locale::Pt);
        assert_eq!(Locale::parse("PT").unwrap(), Locale::Pt);
        assert!(Locale::parse("fr").is_err());
        assert!(Locale::parse("english").is_err());
    }

    #[test]
    fn test_browser_language_defaults_to_english() {
        assert_eq!(Locale::from_browser_language("pt-PT"), Locale::Pt);
        assert_eq!(Locale::from_browser_language("de-DE"), Locale::En);
        assert_eq!(Locale::from_browser_language(""), Locale::En);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Locale::En.toggle(), Locale::Pt);
        assert_eq!(Locale::Pt.toggle().toggle(), Locale::Pt);
    }

    #[test]
    fn test_format_date_long() {
        let date = DigestDate::parse("2026-10-18").unwrap();
        assert_eq!(format_date_long(date, Locale::En), "October 18, 2026");
        assert_eq!(format_date_long(date, Locale::Pt), "18 de outubro de 2026");
        let date = DigestDate::parse("2026-03-01").unwrap();
        assert_eq!(format_date_long(date, Locale::Pt), "1 de março de 2026");
    }

    #[test]
    fn test_format_stats_pluralizes() {
        assert_eq!(
            format_stats(143, 6, 1, Locale::En),
            "143 articles scanned from 6 sources · 1 highlight"
        );
        assert_eq!(
            format_stats(1, 1, 12, Locale::Pt),
            "1 artigo analisado de 1 fonte · 12 destaques"
        );
    }

    #[test]
    fn test_ui_text_is_translated() {
        assert_ne!(UiText::NoData.text(Locale::En), UiText::NoData.text(Locale::Pt));
        assert_ne!(UiText::NoData.text(Locale::En), UiText::NoMatch.text(Locale::En));
        assert_eq!(Locale::Pt.text(UiText::AllCategories), "Todas");
    }
}

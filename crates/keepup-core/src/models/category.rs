//! Topic categories assigned to digest entries by the pipeline.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::locale::Locale;

/// Topic tag of a digest entry.
///
/// The pipeline emits a fixed set of tags; anything else is preserved as
/// [`Category::Other`] so new tags still display (with the generic emoji).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    Ai,
    Web,
    Devops,
    Languages,
    Frameworks,
    Security,
    Career,
    #[default]
    General,
    Other(String),
}

impl Category {
    /// Known categories in display order.
    pub const KNOWN: [Category; 8] = [
        Category::Ai,
        Category::Web,
        Category::Devops,
        Category::Languages,
        Category::Frameworks,
        Category::Security,
        Category::Career,
        Category::General,
    ];

    /// Map a raw tag to a category (case-insensitive, surrounding whitespace ignored).
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_lowercase();
        match tag.as_str() {
            "ai" => Self::Ai,
            "web" => Self::Web,
            "devops" => Self::Devops,
            "languages" => Self::Languages,
            "frameworks" => Self::Frameworks,
            "security" => Self::Security,
            "career" => Self::Career,
            "general" | "" => Self::General,
            _ => Self::Other(tag),
        }
    }

    /// Wire tag as used in the JSON documents.
    pub fn tag(&self) -> &str {
        match self {
            Self::Ai => "ai",
            Self::Web => "web",
            Self::Devops => "devops",
            Self::Languages => "languages",
            Self::Frameworks => "frameworks",
            Self::Security => "security",
            Self::Career => "career",
            Self::General => "general",
            Self::Other(tag) => tag,
        }
    }

    /// Short human label for chips and badges.
    pub fn label(&self, locale: Locale) -> &str {
        match (self, locale) {
            (Self::Ai, Locale::En) => "AI & ML",
            (Self::Ai, Locale::Pt) => "IA & ML",
            (Self::Web, Locale::En) => "Web Dev",
            (Self::Web, Locale::Pt) => "Desenvolvimento Web",
            (Self::Devops, Locale::En) => "DevOps & Cloud",
            (Self::Devops, Locale::Pt) => "DevOps & Nuvem",
            (Self::Languages, Locale::En) => "Languages",
            (Self::Languages, Locale::Pt) => "Linguagens",
            (Self::Frameworks, _) => "Frameworks",
            (Self::Security, Locale::En) => "Security",
            (Self::Security, Locale::Pt) => "Segurança",
            (Self::Career, Locale::En) => "Career",
            (Self::Career, Locale::Pt) => "Carreira",
            (Self::General, Locale::En) => "General",
            (Self::General, Locale::Pt) => "Geral",
            (Self::Other(tag), _) => tag,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Ai => "🤖",
            Self::Web => "🌐",
            Self::Devops => "☁️",
            Self::Languages => "💻",
            Self::Frameworks => "🧩",
            Self::Security => "🔒",
            Self::Career => "🚀",
            Self::General | Self::Other(_) => "📌",
        }
    }

    /// Position in display order; unknown tags sort after every known one.
    pub fn rank(&self) -> usize {
        Self::KNOWN
            .iter()
            .position(|known| known == self)
            .unwrap_or(Self::KNOWN.len())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.map(|tag| Self::from_tag(&tag)).unwrap_or_default())
    }
}

/// Active category filter in the toolbar.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Parse a filter tag; `all` (or an empty string) disables category filtering.
    pub fn parse(tag: &str) -> Self {
        let tag = tag.trim();
        if tag.is_empty() || tag.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(Category::from_tag(tag))
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.tag(),
        }
    }

    /// Whether an entry tagged `category` passes this filter.
    pub fn accepts(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

//! Hairstyle catalog - classification tags, style entries and the static catalog

pub mod filter;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{AppError, Result};
use crate::i18n::Language;

const CATALOG_JSON: &str = include_str!("../../assets/styles.json");

/// Target demographic of a style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Female,
    Male,
    Unisex,
}

impl Gender {
    /// Demographics a user can pick as the active one
    pub const SELECTABLE: [Gender; 2] = [Gender::Female, Gender::Male];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "female",
            Gender::Male => "male",
            Gender::Unisex => "unisex",
        }
    }
}

/// Hair length tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairLength {
    Short,
    Medium,
    Long,
}

impl HairLength {
    pub const ALL: [HairLength; 3] = [HairLength::Short, HairLength::Medium, HairLength::Long];

    pub fn as_str(&self) -> &'static str {
        match self {
            HairLength::Short => "short",
            HairLength::Medium => "medium",
            HairLength::Long => "long",
        }
    }
}

/// Hair color tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    Black,
    Brown,
    Blonde,
    Red,
    Silver,
    Multicolor,
}

impl HairColor {
    pub const ALL: [HairColor; 6] = [
        HairColor::Black,
        HairColor::Brown,
        HairColor::Blonde,
        HairColor::Red,
        HairColor::Silver,
        HairColor::Multicolor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HairColor::Black => "black",
            HairColor::Brown => "brown",
            HairColor::Blonde => "blonde",
            HairColor::Red => "red",
            HairColor::Silver => "silver",
            HairColor::Multicolor => "multicolor",
        }
    }
}

macro_rules! impl_tag_text {
    ($ty:ty, $variants:expr, $what:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = AppError;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim().to_lowercase();
                $variants
                    .into_iter()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| AppError::InvalidRequest(format!("unknown {}: {}", $what, s)))
            }
        }
    };
}

impl_tag_text!(Gender, [Gender::Female, Gender::Male, Gender::Unisex], "gender");
impl_tag_text!(HairLength, HairLength::ALL, "hair length");
impl_tag_text!(HairColor, HairColor::ALL, "hair color");

/// Per-locale overrides for a style's display text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A preset hairstyle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleOption {
    pub id: String,
    /// Canonical (English) name
    pub name: String,
    /// Canonical (English) description
    pub description: String,
    #[serde(default)]
    pub zh: LocalizedText,
    #[serde(default)]
    pub vi: LocalizedText,
    #[serde(default)]
    pub th: LocalizedText,
    /// Instruction fragment sent to the image service
    pub prompt: String,
    pub gender: Gender,
    pub length: HairLength,
    pub color: HairColor,
}

impl StyleOption {
    fn overrides(&self, lang: Language) -> Option<&LocalizedText> {
        match lang {
            Language::En => None,
            Language::Zh => Some(&self.zh),
            Language::Vi => Some(&self.vi),
            Language::Th => Some(&self.th),
        }
    }

    /// Display name in `lang`, falling back to English
    pub fn name(&self, lang: Language) -> &str {
        self.overrides(lang)
            .and_then(|t| t.name.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.name)
    }

    /// Description in `lang`, falling back to English
    pub fn description(&self, lang: Language) -> &str {
        self.overrides(lang)
            .and_then(|t| t.description.as_deref())
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.description)
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    styles: Vec<StyleOption>,
}

/// Immutable list of preset styles
#[derive(Debug, Clone)]
pub struct Catalog {
    styles: Vec<StyleOption>,
}

impl Catalog {
    /// Parse a catalog document. Ids must be unique and prompts non-empty.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.styles)
    }

    pub fn new(styles: Vec<StyleOption>) -> Result<Self> {
        let mut seen = HashSet::new();
        for style in &styles {
            if !seen.insert(style.id.as_str()) {
                return Err(AppError::InvalidRequest(format!(
                    "duplicate style id in catalog: {}",
                    style.id
                )));
            }
            if style.prompt.trim().is_empty() {
                return Err(AppError::InvalidRequest(format!(
                    "style '{}' has an empty prompt",
                    style.id
                )));
            }
        }
        Ok(Self { styles })
    }

    /// The catalog embedded in the binary
    pub fn builtin() -> Result<&'static Catalog> {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        if let Some(catalog) = BUILTIN.get() {
            return Ok(catalog);
        }
        let catalog = Catalog::from_json(CATALOG_JSON)?;
        Ok(BUILTIN.get_or_init(|| catalog))
    }

    pub fn get(&self, id: &str) -> Option<&StyleOption> {
        self.styles.iter().find(|s| s.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleOption> {
        self.styles.iter()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

//! Section titles and their localization
//!
//! The default locale is Brazilian Portuguese, which is what the section
//! titles of a freshly assembled document read as.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language of the fixed section titles
///
/// Config files and `--locale` accept the same spellings; both go through
/// [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Locale {
    /// Brazilian Portuguese
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// English
    #[serde(rename = "en")]
    En,
}

impl Locale {
    /// The tag used in config files and on the command line
    pub fn tag(self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pt-br" | "pt_br" | "pt" => Ok(Locale::PtBr),
            "en" | "en-us" | "en_us" => Ok(Locale::En),
            other => Err(format!("unknown locale '{}' (expected pt-BR or en)", other)),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Titles of the four content sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLabels {
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
}

/// Per-section title replacements, usually read from `cvdok.toml`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelOverrides {
    pub summary: Option<String>,
    pub experience: Option<String>,
    pub education: Option<String>,
    pub skills: Option<String>,
}

impl SectionLabels {
    /// Built-in titles for a locale
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::PtBr => Self {
                summary: "RESUMO PROFISSIONAL".to_string(),
                experience: "EXPERIÊNCIA PROFISSIONAL".to_string(),
                education: "FORMAÇÃO ACADÊMICA".to_string(),
                skills: "HABILIDADES".to_string(),
            },
            Locale::En => Self {
                summary: "PROFESSIONAL SUMMARY".to_string(),
                experience: "PROFESSIONAL EXPERIENCE".to_string(),
                education: "EDUCATION".to_string(),
                skills: "SKILLS".to_string(),
            },
        }
    }

    /// Replace every title present in `overrides`
    pub fn with_overrides(mut self, overrides: &LabelOverrides) -> Self {
        if let Some(ref summary) = overrides.summary {
            self.summary = summary.clone();
        }
        if let Some(ref experience) = overrides.experience {
            self.experience = experience.clone();
        }
        if let Some(ref education) = overrides.education {
            self.education = education.clone();
        }
        if let Some(ref skills) = overrides.skills {
            self.skills = skills.clone();
        }
        self
    }
}

impl Default for SectionLabels {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_portuguese() {
        assert_eq!(Locale::default(), Locale::PtBr);
        assert_eq!(SectionLabels::default().skills, "HABILIDADES");
        assert_eq!(SectionLabels::default().summary, "RESUMO PROFISSIONAL");
    }

    #[test]
    fn test_english_labels() {
        let labels = SectionLabels::for_locale(Locale::En);
        assert_eq!(labels.experience, "PROFESSIONAL EXPERIENCE");
        assert_eq!(labels.education, "EDUCATION");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("pt-BR".parse::<Locale>(), Ok(Locale::PtBr));
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::En));
        assert!("fr".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_display_roundtrips() {
        for locale in [Locale::PtBr, Locale::En] {
            assert_eq!(locale.to_string().parse::<Locale>(), Ok(locale));
        }
    }

    #[test]
    fn test_locale_deserializes_like_from_str() {
        for tag in ["pt-BR", "pt", "pt_br", "en", "en-US", "EN_us"] {
            let json = format!("\"{}\"", tag);
            let from_config: Locale = serde_json::from_str(&json).unwrap();
            assert_eq!(Ok(from_config), tag.parse::<Locale>(), "tag {}", tag);
        }
        assert!(serde_json::from_str::<Locale>("\"fr\"").is_err());
    }

    #[test]
    fn test_locale_serializes_canonical_tag() {
        assert_eq!(serde_json::to_string(&Locale::PtBr).unwrap(), "\"pt-BR\"");
        assert_eq!(serde_json::to_string(&Locale::En).unwrap(), "\"en\"");
    }

    #[test]
    fn test_overrides_replace_only_given_titles() {
        let overrides = LabelOverrides {
            skills: Some("TECHNICAL SKILLS".to_string()),
            ..Default::default()
        };
        let labels = SectionLabels::for_locale(Locale::En).with_overrides(&overrides);

        assert_eq!(labels.skills, "TECHNICAL SKILLS");
        assert_eq!(labels.summary, "PROFESSIONAL SUMMARY");
    }
}

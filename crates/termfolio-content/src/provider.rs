use std::path::Path;

use serde::Deserialize;
use serde::Serialize;
use termfolio_core::AboutInfo;
use termfolio_core::ContactInfo;
use termfolio_core::Experience;
use termfolio_core::Locale;
use termfolio_core::Project;
use termfolio_core::SkillCategory;
use thiserror::Error;
use tracing::debug;

use crate::data;

/// Where portfolio commands get their records. Every call names the locale
/// the records should be phrased in.
pub trait ContentProvider: Send + Sync {
    fn projects(&self, locale: Locale) -> Vec<Project>;

    fn project(&self, locale: Locale, id: &str) -> Option<Project> {
        self.projects(locale)
            .into_iter()
            .find(|project| project.id == id)
    }

    fn skills(&self, locale: Locale) -> Vec<SkillCategory>;
    fn about(&self, locale: Locale) -> AboutInfo;
    fn experience(&self, locale: Locale) -> Vec<Experience>;
    fn contact(&self, locale: Locale) -> ContactInfo;
}

/// One locale's worth of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    pub about: AboutInfo,
    #[serde(default)]
    pub experience: Vec<Experience>,
    pub contact: ContactInfo,
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid content file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Fixed records held in memory, one set per locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticPortfolio {
    pub en: Portfolio,
    pub pt: Portfolio,
}

impl Default for StaticPortfolio {
    fn default() -> Self {
        Self {
            en: data::english(),
            pt: data::portuguese(),
        }
    }
}

impl StaticPortfolio {
    /// Parses `{"en": {...}, "pt": {...}}`.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let portfolio = Self::from_json(&json)?;
        debug!(path = %path.display(), "portfolio content loaded");
        Ok(portfolio)
    }

    pub fn for_locale(&self, locale: Locale) -> &Portfolio {
        match locale {
            Locale::En => &self.en,
            Locale::Pt => &self.pt,
        }
    }
}

impl ContentProvider for StaticPortfolio {
    fn projects(&self, locale: Locale) -> Vec<Project> {
        self.for_locale(locale).projects.clone()
    }

    fn project(&self, locale: Locale, id: &str) -> Option<Project> {
        self.for_locale(locale)
            .projects
            .iter()
            .find(|project| project.id == id)
            .cloned()
    }

    fn skills(&self, locale: Locale) -> Vec<SkillCategory> {
        self.for_locale(locale).skills.clone()
    }

    fn about(&self, locale: Locale) -> AboutInfo {
        self.for_locale(locale).about.clone()
    }

    fn experience(&self, locale: Locale) -> Vec<Experience> {
        self.for_locale(locale).experience.clone()
    }

    fn contact(&self, locale: Locale) -> ContactInfo {
        self.for_locale(locale).contact.clone()
    }
}

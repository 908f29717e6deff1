use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency, 0 to 100.
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutInfo {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub photo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    Project,
    Skills,
    About,
    Experience,
    Contact,
}

impl PanelKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Skills => "skills",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    pub fn is_paginated(self) -> bool {
        matches!(self, Self::Experience)
    }
}

/// Structured result meant for a dedicated panel. About and Contact are
/// single records by construction; the list kinds may come back empty from a
/// provider and are downgraded to text before they reach the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "items", rename_all = "snake_case")]
pub enum PanelPayload {
    Project(Vec<Project>),
    Skills(Vec<SkillCategory>),
    About(AboutInfo),
    Experience(Vec<Experience>),
    Contact(ContactInfo),
}

impl PanelPayload {
    pub fn kind(&self) -> PanelKind {
        match self {
            Self::Project(_) => PanelKind::Project,
            Self::Skills(_) => PanelKind::Skills,
            Self::About(_) => PanelKind::About,
            Self::Experience(_) => PanelKind::Experience,
            Self::Contact(_) => PanelKind::Contact,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Project(items) => items.len(),
            Self::Skills(items) => items.len(),
            Self::Experience(items) => items.len(),
            Self::About(_) | Self::Contact(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CommandResult {
    Text(String),
    Visual(PanelPayload),
}

impl CommandResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn is_visual(&self) -> bool {
        matches!(self, Self::Visual(_))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Visual(_) => None,
        }
    }
}

impl From<String> for CommandResult {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for CommandResult {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<PanelPayload> for CommandResult {
    fn from(payload: PanelPayload) -> Self {
        Self::Visual(payload)
    }
}

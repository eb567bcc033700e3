//! Frontend Models
//!
//! Data structures matching the REST API payloads.

use serde::{Deserialize, Serialize};

/// Level assumed when the form has no explicit selection
pub const DEFAULT_LEVEL: u8 = 3;

/// Valid skill levels
pub const LEVELS: std::ops::RangeInclusive<u8> = 1..=5;

/// Skill category (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    #[default]
    Frontend,
    Backend,
    Tools,
    Soft,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Tools,
        SkillCategory::Soft,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Tools => "tools",
            SkillCategory::Soft => "soft",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Tools => "Tools & DevOps",
            SkillCategory::Soft => "Soft Skills",
        }
    }

    /// Unknown values fall back to the default category
    pub fn from_str(s: &str) -> Self {
        match s {
            "backend" => SkillCategory::Backend,
            "tools" => SkillCategory::Tools,
            "soft" => SkillCategory::Soft,
            _ => SkillCategory::Frontend,
        }
    }
}

/// Skill as returned by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    /// Absent until the server assigns one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub category: SkillCategory,
    pub level: u8,
    /// Display order, written back after a reorder
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing)]
    pub category_display: Option<String>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<String>,
}

impl Skill {
    pub fn category_label(&self) -> &str {
        self.category_display.as_deref().unwrap_or_else(|| self.category.label())
    }
}

/// Body of a create request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillDraft {
    pub name: String,
    pub category: SkillCategory,
    pub level: u8,
}

/// Visual theme applied as the document class
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    GithubDark,
    GithubLight,
    Dracula,
    Nord,
    /// Unrecognised identifier, applied verbatim
    Custom(String),
}

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::GithubDark, Theme::GithubLight, Theme::Dracula, Theme::Nord];

    pub fn as_str(&self) -> &str {
        match self {
            Theme::GithubDark => "github-dark",
            Theme::GithubLight => "github-light",
            Theme::Dracula => "dracula",
            Theme::Nord => "nord",
            Theme::Custom(name) => name,
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "github-dark" => Theme::GithubDark,
            "github-light" => Theme::GithubLight,
            "dracula" => Theme::Dracula,
            "nord" => Theme::Nord,
            other => Theme::Custom(other.to_string()),
        }
    }

    /// `github-dark` -> `Github Dark`
    pub fn label(&self) -> String {
        self.as_str()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Swatch classes for the selector button
    pub fn swatch_class(&self) -> &'static str {
        match self {
            Theme::GithubDark => "bg-gray-900",
            Theme::GithubLight => "bg-white border",
            Theme::Dracula => "bg-purple-900",
            Theme::Nord | Theme::Custom(_) => "bg-blue-900",
        }
    }
}

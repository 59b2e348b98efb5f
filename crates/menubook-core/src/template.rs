//! Visual template identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Visual style a menu is rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TemplateStyle {
    #[default]
    ClassicBlue,
    SlateMinimal,
    WarmPaper,
    /// Owner-uploaded background asset.
    CustomUpload,
    /// Style id this build does not know about.
    Unknown(String),
}

impl TemplateStyle {
    /// Built-in style ids that can be previewed without a stored template.
    pub const BUILT_IN: [&'static str; 3] = ["classic-blue", "slate-minimal", "warm-paper"];

    /// Parse a style id. Empty ids resolve to the default style.
    pub fn from_id(id: &str) -> Self {
        match id {
            "" | "classic-blue" => Self::ClassicBlue,
            "slate-minimal" => Self::SlateMinimal,
            "warm-paper" => Self::WarmPaper,
            "custom-upload" => Self::CustomUpload,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Whether the id names one of the built-in styles.
    pub fn is_built_in(id: &str) -> bool {
        Self::BUILT_IN.contains(&id)
    }

    /// Style id as sent by the backend.
    pub fn id(&self) -> &str {
        match self {
            Self::ClassicBlue => "classic-blue",
            Self::SlateMinimal => "slate-minimal",
            Self::WarmPaper => "warm-paper",
            Self::CustomUpload => "custom-upload",
            Self::Unknown(id) => id,
        }
    }
}

impl fmt::Display for TemplateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A template stashed by the dashboard for previewing before it is saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewTemplate {
    pub id: String,
    #[serde(default)]
    pub style_id: Option<String>,
    #[serde(default)]
    pub asset_url: Option<String>,
    #[serde(default)]
    pub asset_type: Option<String>,
}

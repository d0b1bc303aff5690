use serde::Serialize;

use crate::filter::Tagged;

/// Organisation a project was carried out for. Drives the card accent colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ProjectCategory {
    #[serde(rename = "UW")]
    Uw,
    #[serde(rename = "Blue Origin")]
    BlueOrigin,
    #[serde(rename = "UMD")]
    Umd,
    #[serde(rename = "USDA")]
    Usda,
    Personal,
    Other,
}

impl ProjectCategory {
    /// Hex accent used for the card border, tint and technology chips.
    pub fn accent_color(self) -> &'static str {
        match self {
            ProjectCategory::Uw => "#b172e0",
            ProjectCategory::BlueOrigin => "#386cfc",
            ProjectCategory::Umd => "#e84361",
            ProjectCategory::Usda => "#44a12a",
            ProjectCategory::Personal => "#e86f43",
            ProjectCategory::Other => "#e5e7eb",
        }
    }
}

/// A gallery entry. Compiled in, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectItem {
    pub id: &'static str,
    pub title: &'static str,
    pub subheader: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub technologies: &'static [&'static str],
    pub category: ProjectCategory,
    pub tags: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<&'static str>,
}

impl Tagged for ProjectItem {
    fn id(&self) -> &str {
        self.id
    }

    fn tags(&self) -> &[&str] {
        self.tags
    }
}

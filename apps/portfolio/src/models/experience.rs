use std::fmt;
use std::str::FromStr;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExperienceType {
    Academic,
    Career,
    Research,
    Leadership,
}

/// The two résumé variants the site can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeMode {
    #[default]
    Thermal,
    Ml,
}

impl ResumeMode {
    pub const ALL: [ResumeMode; 2] = [ResumeMode::Thermal, ResumeMode::Ml];

    pub fn as_str(self) -> &'static str {
        match self {
            ResumeMode::Thermal => "thermal",
            ResumeMode::Ml => "ml",
        }
    }

    /// Label shown on the mode toggle.
    pub fn label(self) -> &'static str {
        match self {
            ResumeMode::Thermal => "Thermal Engineering",
            ResumeMode::Ml => "ML / Software",
        }
    }
}

impl fmt::Display for ResumeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResumeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "thermal" => Ok(ResumeMode::Thermal),
            "ml" => Ok(ResumeMode::Ml),
            other => Err(format!(
                "unknown resume mode '{other}' (expected 'thermal' or 'ml')"
            )),
        }
    }
}

/// A role, research position or degree.
#[derive(Debug, Clone, Serialize)]
pub struct ExperienceItem {
    pub id: &'static str,
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: ExperienceType,
    pub technologies: &'static [&'static str],
    pub bullets: &'static [&'static str],
    pub resume_tags: &'static [ResumeMode],
    /// Résumé-only variants of a role that would duplicate another entry elsewhere.
    pub exclude_from_about: bool,
}

impl ExperienceItem {
    pub fn in_resume(&self, mode: ResumeMode) -> bool {
        self.resume_tags.contains(&mode)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorizedSkills {
    pub languages: &'static [&'static str],
    pub software: &'static [&'static str],
    pub hardware: &'static [&'static str],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_mode_parses_case_insensitively() {
        assert_eq!("ML".parse::<ResumeMode>().unwrap(), ResumeMode::Ml);
        assert_eq!(" thermal ".parse::<ResumeMode>().unwrap(), ResumeMode::Thermal);
    }

    #[test]
    fn test_resume_mode_rejects_unknown() {
        let err = "design".parse::<ResumeMode>().unwrap_err();
        assert!(err.contains("design"), "error should name the bad value: {err}");
    }

    #[test]
    fn test_resume_mode_defaults_to_thermal() {
        assert_eq!(ResumeMode::default(), ResumeMode::Thermal);
    }
}

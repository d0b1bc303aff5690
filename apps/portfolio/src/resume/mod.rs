//! Résumé builder: turns the experience catalog into one of two résumé variants.
//!
//! Experience is included in a mode when its résumé tags name that mode.
//! Degrees go to the education block in catalog order; everything else is
//! stable-sorted so the roles on the mode's priority list lead.

use serde::Serialize;

use crate::content::SiteContent;
use crate::models::experience::{CategorizedSkills, ExperienceItem, ExperienceType, ResumeMode};

// ────────────────────────────────────────────────────────────────────────────
// Configuration
// ────────────────────────────────────────────────────────────────────────────

/// Experience ids that lead the technical section, per mode, in display order.
pub fn priority(mode: ResumeMode) -> &'static [&'static str] {
    match mode {
        ResumeMode::Thermal => &["c1", "c2", "c3", "l1"],
        ResumeMode::Ml => &["c2", "c1", "bo-ml", "c5"],
    }
}

/// Which skills categories a mode lists, in display order.
fn skill_categories(mode: ResumeMode) -> [SkillCategory; 3] {
    match mode {
        ResumeMode::Ml => [
            SkillCategory::Languages,
            SkillCategory::Software,
            SkillCategory::Hardware,
        ],
        ResumeMode::Thermal => [
            SkillCategory::Software,
            SkillCategory::Languages,
            SkillCategory::Hardware,
        ],
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkillCategory {
    Languages,
    Software,
    Hardware,
}

impl SkillCategory {
    fn label(self) -> &'static str {
        match self {
            SkillCategory::Languages => "Languages",
            SkillCategory::Software => "Software",
            SkillCategory::Hardware => "Hardware",
        }
    }

    fn pick(self, skills: &CategorizedSkills) -> &'static [&'static str] {
        match self {
            SkillCategory::Languages => skills.languages,
            SkillCategory::Software => skills.software,
            SkillCategory::Hardware => skills.hardware,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResumeHeader {
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillRow {
    pub label: &'static str,
    pub items: &'static [&'static str],
    /// Comma-joined form for the printed layout.
    pub joined: String,
}

/// A fully assembled résumé for one mode.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeView {
    pub mode: ResumeMode,
    pub label: &'static str,
    pub header: ResumeHeader,
    pub education: Vec<&'static ExperienceItem>,
    pub skills: Vec<SkillRow>,
    pub experience: Vec<&'static ExperienceItem>,
}

// ────────────────────────────────────────────────────────────────────────────
// Builder
// ────────────────────────────────────────────────────────────────────────────

pub fn build_resume(content: &SiteContent, mode: ResumeMode) -> ResumeView {
    let included: Vec<&'static ExperienceItem> = content
        .experience
        .iter()
        .filter(|item| item.in_resume(mode))
        .collect();

    let (education, technical): (Vec<_>, Vec<_>) = included
        .into_iter()
        .partition(|item| item.kind == ExperienceType::Academic);

    let experience = order_by_priority(technical, priority(mode));

    let skills = skill_rows(mode, content.skills(mode));

    tracing::debug!(
        mode = %mode,
        education = education.len(),
        experience = experience.len(),
        "built resume"
    );

    ResumeView {
        mode,
        label: mode.label(),
        header: ResumeHeader {
            name: content.bio.name,
            email: content.bio.email,
            phone: content.bio.phone,
        },
        education,
        skills,
        experience,
    }
}

/// Rows in the mode's category order; empty categories are dropped.
fn skill_rows(mode: ResumeMode, skills: &CategorizedSkills) -> Vec<SkillRow> {
    skill_categories(mode)
        .into_iter()
        .map(|category| (category.label(), category.pick(skills)))
        .filter(|(_, items)| !items.is_empty())
        .map(|(label, items)| SkillRow {
            label,
            items,
            joined: items.join(", "),
        })
        .collect()
}

/// Listed ids first in list order; unlisted items keep their relative order.
fn order_by_priority(
    mut items: Vec<&'static ExperienceItem>,
    order: &[&str],
) -> Vec<&'static ExperienceItem> {
    items.sort_by_key(|item| {
        order
            .iter()
            .position(|id| *id == item.id)
            .unwrap_or(order.len())
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&ExperienceItem]) -> Vec<&'static str> {
        items.iter().map(|item| item.id).collect()
    }

    fn content() -> SiteContent {
        SiteContent::load().unwrap()
    }

    #[test]
    fn test_thermal_order_puts_priority_roles_first() {
        let resume = build_resume(&content(), ResumeMode::Thermal);
        assert_eq!(
            ids(&resume.experience),
            vec!["c1", "c2", "c3", "l1", "c4", "r1", "r2", "l2"]
        );
    }

    #[test]
    fn test_ml_order_follows_its_own_priority() {
        let resume = build_resume(&content(), ResumeMode::Ml);
        assert_eq!(ids(&resume.experience), vec!["c2", "c1", "bo-ml", "c5"]);
    }

    #[test]
    fn test_education_keeps_catalog_order() {
        for mode in ResumeMode::ALL {
            let resume = build_resume(&content(), mode);
            assert_eq!(ids(&resume.education), vec!["e1", "e2"]);
            assert!(resume
                .experience
                .iter()
                .all(|item| item.kind != ExperienceType::Academic));
        }
    }

    #[test]
    fn test_mode_excludes_untagged_items() {
        let resume = build_resume(&content(), ResumeMode::Thermal);
        assert!(!ids(&resume.experience).contains(&"bo-ml"));
        assert!(!ids(&resume.experience).contains(&"c5"));
    }

    #[test]
    fn test_skill_rows_follow_mode_order() {
        let labels = |mode: ResumeMode| -> Vec<&'static str> {
            build_resume(&content(), mode)
                .skills
                .iter()
                .map(|row| row.label)
                .collect()
        };
        assert_eq!(labels(ResumeMode::Thermal), vec!["Software", "Languages", "Hardware"]);
        assert_eq!(labels(ResumeMode::Ml), vec!["Languages", "Software", "Hardware"]);
    }

    #[test]
    fn test_empty_skill_rows_are_omitted() {
        let sparse = CategorizedSkills {
            languages: &["Rust"],
            software: &[],
            hardware: &[],
        };
        let rows = skill_rows(ResumeMode::Thermal, &sparse);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "Languages");
        assert_eq!(rows[0].joined, "Rust");
    }

    #[test]
    fn test_unlisted_items_keep_relative_order() {
        let content = content();
        let items: Vec<_> = content.experience.iter().collect();
        let ordered = order_by_priority(items, &["l2", "c3"]);
        assert_eq!(&ids(&ordered)[..4], &["l2", "c3", "c2", "c1"]);
    }

    #[test]
    fn test_header_uses_bio_contacts() {
        let resume = build_resume(&content(), ResumeMode::Ml);
        assert_eq!(resume.header.phone, "669-214-8048");
        assert_eq!(resume.label, "ML / Software");
    }
}

//! Compiled-in site content.
//!
//! Everything the site shows lives in the submodules as `static` data. At
//! startup [`SiteContent::load`] gathers it into one immutable value and
//! checks the cross-references that the type system cannot: unique ids, tags
//! drawn from the vocabulary, detail write-ups attached to real projects.

pub mod details;
pub mod experience;
pub mod profile;
pub mod projects;
pub mod publications;

use std::collections::HashSet;

use anyhow::{bail, Result};

use crate::gallery::DetailRegistry;
use crate::models::experience::{CategorizedSkills, ExperienceItem, ResumeMode};
use crate::models::profile::{Bio, PublicationItem, Referral, SocialLink};
use crate::models::project::ProjectItem;

/// Shared, read-only content handed to every request through `AppState`.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub bio: &'static Bio,
    pub socials: &'static [SocialLink],
    pub referrals: &'static [Referral],
    pub projects: &'static [ProjectItem],
    pub vocabulary: &'static [&'static str],
    pub publications: &'static [PublicationItem],
    pub experience: &'static [ExperienceItem],
    pub details: DetailRegistry,
    in_progress: &'static [&'static str],
}

impl SiteContent {
    /// Assembles the compiled-in content and validates it.
    pub fn load() -> Result<Self> {
        let content = SiteContent {
            bio: &profile::BIO,
            socials: profile::SOCIALS,
            referrals: profile::REFERRALS,
            projects: projects::PROJECTS,
            vocabulary: projects::TAG_VOCABULARY,
            publications: publications::PUBLICATIONS,
            experience: experience::EXPERIENCE,
            details: details::build_registry(),
            in_progress: projects::IN_PROGRESS_IDS,
        };
        content.validate()?;

        tracing::info!(
            projects = content.projects.len(),
            publications = content.publications.len(),
            experience = content.experience.len(),
            "site content loaded"
        );
        Ok(content)
    }

    fn validate(&self) -> Result<()> {
        ensure_unique("project", self.projects.iter().map(|p| p.id))?;
        ensure_unique("experience", self.experience.iter().map(|e| e.id))?;
        ensure_unique("publication", self.publications.iter().map(|p| p.id))?;
        ensure_unique("tag", self.vocabulary.iter().copied())?;

        for project in self.projects {
            if let Some(tag) = project
                .tags
                .iter()
                .find(|tag| !self.vocabulary.contains(*tag))
            {
                bail!("project '{}' uses tag '{tag}' outside the vocabulary", project.id);
            }
        }

        for id in self.details.ids() {
            if self.project(id).is_none() {
                bail!("detail write-up '{id}' has no matching project");
            }
        }

        for id in self.in_progress {
            if self.project(id).is_none() {
                bail!("in-progress marker '{id}' has no matching project");
            }
        }

        for project in self.projects {
            if !self.details.contains(project.id) {
                tracing::warn!(project_id = project.id, "project has no detail write-up");
            }
        }

        Ok(())
    }

    pub fn project(&self, id: &str) -> Option<&'static ProjectItem> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn is_in_progress(&self, id: &str) -> bool {
        self.in_progress.contains(&id)
    }

    pub fn skills(&self, mode: ResumeMode) -> &'static CategorizedSkills {
        match mode {
            ResumeMode::Thermal => &profile::THERMAL_RESUME_SKILLS,
            ResumeMode::Ml => &profile::ML_RESUME_SKILLS,
        }
    }

    pub fn home_skills(&self) -> Vec<&'static str> {
        profile::home_skills()
    }
}

fn ensure_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            bail!("duplicate {kind} id '{id}'");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::detail::DetailView;

    #[test]
    fn test_compiled_content_is_valid() {
        let content = SiteContent::load().expect("content should validate");
        assert_eq!(content.projects.len(), 10);
        assert_eq!(content.vocabulary.len(), 8);
    }

    #[test]
    fn test_every_project_tag_is_in_vocabulary() {
        for project in projects::PROJECTS {
            for tag in project.tags {
                assert!(
                    projects::TAG_VOCABULARY.contains(tag),
                    "{} carries unknown tag {tag}",
                    project.id
                );
            }
        }
    }

    #[test]
    fn test_every_project_has_a_write_up() {
        let content = SiteContent::load().unwrap();
        for project in content.projects {
            assert!(
                !matches!(
                    content.details.lookup(project.id).view(0, 0),
                    DetailView::Placeholder { .. }
                ),
                "{} renders the placeholder",
                project.id
            );
        }
    }

    #[test]
    fn test_blue_origin_trades_are_paged() {
        let content = SiteContent::load().unwrap();
        let DetailView::Paged { pager, .. } = content.details.lookup("bo2").view(0, 0) else {
            panic!("bo2 should be paged");
        };
        assert_eq!(pager.count, 4);
    }

    #[test]
    fn test_ensure_unique_rejects_duplicates() {
        let err = ensure_unique("project", ["a", "b", "a"].into_iter()).unwrap_err();
        assert!(err.to_string().contains("'a'"));
    }

    #[test]
    fn test_in_progress_lookup() {
        let content = SiteContent::load().unwrap();
        assert!(content.is_in_progress("uw2"));
        assert!(!content.is_in_progress("uw1"));
    }

    #[test]
    fn test_home_skills_are_capped() {
        let content = SiteContent::load().unwrap();
        let skills = content.home_skills();
        assert_eq!(skills.len(), profile::HOME_SKILL_LIMIT);
        assert_eq!(skills[0], "Thermal Desktop");
        assert_eq!(skills[7], "Python");
    }
}

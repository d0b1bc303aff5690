// Project gallery: filterable cards, detail panels and the referral slides.

pub mod detail;
pub mod referrals;

use serde::Serialize;

use crate::content::projects::CARD_TECHNOLOGY_LIMIT;
use crate::content::SiteContent;
use crate::filter::{FacetView, Selection, TagChip};
use crate::models::project::{ProjectCategory, ProjectItem};

pub use detail::{DetailRegistry, DetailView};
pub use referrals::{referral_slide, ReferralSlide};

pub const EMPTY_GALLERY_MESSAGE: &str = "No projects found with the selected filter.";

/// Hex alpha suffix giving the card background roughly 6% of the accent.
const TINT_ALPHA: &str = "10";

/// A project card as the gallery renders it.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectCard {
    pub id: &'static str,
    pub title: &'static str,
    pub subheader: &'static str,
    pub description: Option<&'static str>,
    pub category: ProjectCategory,
    pub accent: &'static str,
    pub tint: String,
    pub technologies: &'static [&'static str],
    pub in_progress: bool,
    pub link: Option<&'static str>,
    pub github: Option<&'static str>,
    /// Detail URL carrying the current selection so "Back to Projects" restores it.
    pub href: String,
}

impl ProjectCard {
    pub fn new(item: &'static ProjectItem, in_progress: bool, selection: &Selection) -> Self {
        let accent = item.category.accent_color();
        let shown = item.technologies.len().min(CARD_TECHNOLOGY_LIMIT);
        ProjectCard {
            id: item.id,
            title: item.title,
            subheader: item.subheader,
            description: item.description,
            category: item.category,
            accent,
            tint: format!("{accent}{TINT_ALPHA}"),
            technologies: &item.technologies[..shown],
            in_progress,
            link: item.link,
            github: item.github,
            href: project_href(item.id, selection),
        }
    }
}

/// `/projects/{id}`, keeping the active tag selection in the query string.
pub fn project_href(id: &str, selection: &Selection) -> String {
    match selection.to_query() {
        Some(tags) => format!("/projects/{id}?tags={tags}"),
        None => format!("/projects/{id}"),
    }
}

/// `/` with the given selection, used by the back link and the chips.
pub fn gallery_href(selection: &Selection) -> String {
    match selection.to_query() {
        Some(tags) => format!("/?tags={tags}"),
        None => "/".to_string(),
    }
}

/// The "Selected Work" section for one selection.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryView {
    pub selected: Vec<String>,
    pub chips: Vec<TagChip>,
    pub cards: Vec<ProjectCard>,
    pub empty_message: Option<&'static str>,
}

impl GalleryView {
    pub fn build(content: &SiteContent, selection: Selection) -> Self {
        let facets: FacetView<'static, ProjectItem> =
            FacetView::compute(content.projects, content.vocabulary, selection);

        let cards = facets
            .visible
            .iter()
            .map(|&item| ProjectCard::new(item, content.is_in_progress(item.id), &facets.selection))
            .collect();

        GalleryView {
            selected: facets.selection.iter().map(str::to_string).collect(),
            empty_message: facets.is_empty().then_some(EMPTY_GALLERY_MESSAGE),
            chips: facets.chips,
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content() -> SiteContent {
        SiteContent::load().unwrap()
    }

    #[test]
    fn test_unfiltered_gallery_shows_every_project() {
        let content = content();
        let view = GalleryView::build(&content, Selection::new());
        assert_eq!(view.cards.len(), content.projects.len());
        assert!(view.empty_message.is_none());
        assert_eq!(view.chips.len(), content.vocabulary.len());
    }

    #[test]
    fn test_cards_truncate_technologies_and_tint() {
        let content = content();
        let view = GalleryView::build(&content, Selection::new());
        let usda1 = view.cards.iter().find(|c| c.id == "usda1").unwrap();
        assert_eq!(content.project("usda1").unwrap().technologies.len(), 4);
        assert_eq!(usda1.technologies, &["Python", "Pytorch", "Sci-Kit Learn"]);
        assert_eq!(usda1.technologies.len(), CARD_TECHNOLOGY_LIMIT);

        let bo1 = view.cards.iter().find(|c| c.id == "bo1").unwrap();
        assert_eq!(bo1.technologies, &["Thermal Desktop"]);
        assert_eq!(bo1.accent, "#386cfc");
        assert_eq!(bo1.tint, "#386cfc10");
    }

    #[test]
    fn test_in_progress_badge() {
        let content = content();
        let view = GalleryView::build(&content, Selection::new());
        let flagged: Vec<_> = view
            .cards
            .iter()
            .filter(|c| c.in_progress)
            .map(|c| c.id)
            .collect();
        assert_eq!(flagged, vec!["uw2", "uw3", "pers1"]);
    }

    #[test]
    fn test_impossible_selection_shows_empty_message() {
        let content = content();
        let selection = Selection::from_tags(["Machine Learning", "Blue Origin"]);
        let view = GalleryView::build(&content, selection);
        assert!(view.cards.is_empty());
        assert_eq!(view.empty_message, Some(EMPTY_GALLERY_MESSAGE));
        // Selected chips stay visible so they can be toggled off.
        assert_eq!(view.chips.len(), 2);
        assert!(view.chips.iter().all(|c| c.selected));
    }

    #[test]
    fn test_card_links_keep_the_selection() {
        let content = content();
        let view = GalleryView::build(&content, Selection::from_tags(["Blue Origin"]));
        assert!(view
            .cards
            .iter()
            .all(|c| c.href.ends_with("?tags=Blue%20Origin")));
        assert_eq!(project_href("bo1", &Selection::new()), "/projects/bo1");
    }

    #[test]
    fn test_gallery_href() {
        assert_eq!(gallery_href(&Selection::new()), "/");
        assert_eq!(
            gallery_href(&Selection::from_tags(["Thermal Test"])),
            "/?tags=Thermal%20Test"
        );
    }
}

//! Project detail panels.
//!
//! A detail is chosen by project id through [`DetailRegistry`]. Ids without a
//! write-up resolve to [`DetailEntry::Placeholder`] instead of failing, so the
//! gallery tolerates projects whose content has not been written yet.

use std::collections::HashMap;

use serde::Serialize;

use crate::rotation::RotatingIndex;

pub const PLACEHOLDER_MESSAGE: &str = "Project information under construction";

/// One block of body copy inside a section.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Paragraph { text: &'static str },
    Bullets { items: &'static [&'static str] },
    /// Numbered "technical implementation" card.
    Feature { title: &'static str, text: &'static str },
    /// Highlighted closing box (validation, results).
    Callout { title: &'static str, text: &'static str },
    /// Slideshow slot; rendered where the write-up places its photos.
    Gallery,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailSection {
    pub heading: &'static str,
    pub blocks: &'static [Block],
}

/// A single write-up: header, role line, sections and optional photos.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    pub title: &'static str,
    pub summary: &'static str,
    pub technologies: &'static [&'static str],
    pub info: &'static str,
    pub sections: &'static [DetailSection],
    pub images: &'static [&'static str],
}

/// How a project's detail panel is rendered.
#[derive(Debug, Clone)]
pub enum DetailEntry {
    Article(&'static ProjectDetail),
    /// Several related trade studies paged through with prev/next.
    Paged(&'static [ProjectDetail]),
    Placeholder,
}

/// A detail entry resolved against the visitor's slide/page position.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum DetailView {
    Article {
        detail: &'static ProjectDetail,
        slideshow: Option<Slideshow>,
    },
    Paged {
        detail: &'static ProjectDetail,
        pager: Pager,
    },
    Placeholder {
        message: &'static str,
    },
}

/// Current photo plus the indices the prev/next controls lead to.
#[derive(Debug, Clone, Serialize)]
pub struct Slideshow {
    pub current: usize,
    pub image: &'static str,
    pub count: usize,
    pub prev: usize,
    pub next: usize,
}

/// Position within a paged detail; `number` is one-based for display.
#[derive(Debug, Clone, Serialize)]
pub struct Pager {
    pub current: usize,
    pub number: usize,
    pub count: usize,
    pub prev: usize,
    pub next: usize,
}

impl Slideshow {
    fn at(images: &'static [&'static str], requested: usize) -> Option<Self> {
        let idx = RotatingIndex::starting_at(images.len(), requested);
        if idx.is_empty() {
            return None;
        }
        let image = images[idx.current()];
        Some(Slideshow {
            current: idx.current(),
            image,
            count: idx.len(),
            prev: idx.peek_prev(),
            next: idx.peek_next(),
        })
    }
}

impl DetailEntry {
    /// Resolves to a concrete view. Out-of-range positions wrap.
    pub fn view(&self, slide: usize, page: usize) -> DetailView {
        match *self {
            DetailEntry::Article(detail) => DetailView::Article {
                detail,
                slideshow: Slideshow::at(detail.images, slide),
            },
            DetailEntry::Paged(pages) => {
                let idx = RotatingIndex::starting_at(pages.len(), page);
                match pages.get(idx.current()) {
                    Some(detail) => DetailView::Paged {
                        detail,
                        pager: Pager {
                            current: idx.current(),
                            number: idx.current() + 1,
                            count: idx.len(),
                            prev: idx.peek_prev(),
                            next: idx.peek_next(),
                        },
                    },
                    None => DetailView::Placeholder {
                        message: PLACEHOLDER_MESSAGE,
                    },
                }
            }
            DetailEntry::Placeholder => DetailView::Placeholder {
                message: PLACEHOLDER_MESSAGE,
            },
        }
    }
}

/// Project id → detail lookup with a placeholder default.
#[derive(Debug, Clone, Default)]
pub struct DetailRegistry {
    entries: HashMap<&'static str, DetailEntry>,
}

static PLACEHOLDER: DetailEntry = DetailEntry::Placeholder;

impl DetailRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: &'static str, entry: DetailEntry) -> &mut Self {
        if self.entries.insert(id, entry).is_some() {
            tracing::warn!(project_id = id, "detail registered twice, keeping the latest");
        }
        self
    }

    /// Never fails: unknown ids get the placeholder entry.
    pub fn lookup(&self, id: &str) -> &DetailEntry {
        self.entries.get(id).unwrap_or(&PLACEHOLDER)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ARTICLE: ProjectDetail = ProjectDetail {
        title: "Article",
        summary: "summary",
        technologies: &["MATLAB"],
        info: "Role: Tester",
        sections: &[],
        images: &["a.png", "b.png", "c.png"],
    };

    static NO_PHOTOS: ProjectDetail = ProjectDetail {
        title: "Bare",
        summary: "",
        technologies: &[],
        info: "",
        sections: &[],
        images: &[],
    };

    static PAGES: [ProjectDetail; 2] = [
        ProjectDetail {
            title: "First",
            summary: "",
            technologies: &[],
            info: "",
            sections: &[],
            images: &[],
        },
        ProjectDetail {
            title: "Second",
            summary: "",
            technologies: &[],
            info: "",
            sections: &[],
            images: &[],
        },
    ];

    fn registry() -> DetailRegistry {
        let mut registry = DetailRegistry::new();
        registry
            .register("art", DetailEntry::Article(&ARTICLE))
            .register("bare", DetailEntry::Article(&NO_PHOTOS))
            .register("paged", DetailEntry::Paged(&PAGES));
        registry
    }

    #[test]
    fn test_unknown_id_falls_back_to_placeholder() {
        let view = registry().lookup("does-not-exist").view(0, 0);
        match view {
            DetailView::Placeholder { message } => assert_eq!(message, PLACEHOLDER_MESSAGE),
            other => panic!("expected placeholder, got {other:?}"),
        }
    }

    #[test]
    fn test_slideshow_wraps_in_both_directions() {
        let DetailView::Article { slideshow, .. } = registry().lookup("art").view(0, 0) else {
            panic!("expected article");
        };
        let slideshow = slideshow.expect("article has photos");
        assert_eq!(slideshow.image, "a.png");
        assert_eq!(slideshow.prev, 2);
        assert_eq!(slideshow.next, 1);

        let DetailView::Article { slideshow, .. } = registry().lookup("art").view(4, 0) else {
            panic!("expected article");
        };
        let slideshow = slideshow.expect("article has photos");
        assert_eq!(slideshow.current, 1, "slide 4 of 3 wraps to 1");
        assert_eq!(slideshow.image, "b.png");
    }

    #[test]
    fn test_article_without_photos_has_no_slideshow() {
        let DetailView::Article { slideshow, .. } = registry().lookup("bare").view(3, 0) else {
            panic!("expected article");
        };
        assert!(slideshow.is_none());
    }

    #[test]
    fn test_paged_detail_wraps_pages() {
        let DetailView::Paged { detail, pager } = registry().lookup("paged").view(0, 1) else {
            panic!("expected paged detail");
        };
        assert_eq!(detail.title, "Second");
        assert_eq!(pager.number, 2);
        assert_eq!(pager.next, 0);
        assert_eq!(pager.prev, 0);
    }

    #[test]
    fn test_registry_reports_registered_ids() {
        let registry = registry();
        assert!(registry.contains("art"));
        assert!(!registry.contains("missing"));
        assert_eq!(registry.ids().count(), 3);
    }
}

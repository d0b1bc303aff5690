//! Page contexts for the HTML surface.
//!
//! Each page is rendered into `layout.html`, which needs the bio, the
//! navigation with its active entry, the social links and the footer year.

use std::time::Duration;

use chrono::Datelike;
use minijinja::{context, Value};
use serde::Serialize;

use crate::content::SiteContent;
use crate::filter::Selection;
use crate::gallery::{gallery_href, DetailView, GalleryView, ReferralSlide};
use crate::models::experience::ResumeMode;
use crate::models::project::{ProjectCategory, ProjectItem};
use crate::resume::ResumeView;
use crate::site::TemplateEngine;

/// Top-level sections reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Projects,
    Publications,
    Resume,
}

impl Page {
    const ALL: [Page; 3] = [Page::Projects, Page::Publications, Page::Resume];

    fn label(self) -> &'static str {
        match self {
            Page::Projects => "Projects",
            Page::Publications => "Publications",
            Page::Resume => "Resume",
        }
    }

    fn href(self) -> &'static str {
        match self {
            Page::Projects => "/",
            Page::Publications => "/publications",
            Page::Resume => "/resume",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct NavItem {
    label: &'static str,
    href: &'static str,
    active: bool,
}

fn nav(active: Page) -> Vec<NavItem> {
    Page::ALL
        .into_iter()
        .map(|page| NavItem {
            label: page.label(),
            href: page.href(),
            active: page == active,
        })
        .collect()
}

#[derive(Debug, Clone, Serialize)]
struct ModeOption {
    value: &'static str,
    label: &'static str,
    active: bool,
}

/// `&tags=...` appended to in-page links so the selection survives them.
fn tags_suffix(selection: &Selection) -> String {
    selection
        .to_query()
        .map(|tags| format!("&tags={tags}"))
        .unwrap_or_default()
}

/// Client-side slideshow timer: a `<meta http-equiv="refresh">` pointing at
/// the next slide. It exists only while the page is open, and leaving the
/// page cancels it.
#[derive(Debug, Clone, Serialize)]
struct AutoAdvance {
    secs: u64,
    url: String,
}

impl AutoAdvance {
    fn after(interval: Duration, url: String) -> Self {
        AutoAdvance {
            secs: interval.as_secs(),
            url,
        }
    }
}

fn render_page(
    engine: &dyn TemplateEngine,
    content: &SiteContent,
    template: &str,
    active: Page,
    page: Value,
) -> Result<String, minijinja::Error> {
    let ctx = context! {
        bio => content.bio,
        socials => content.socials,
        nav => nav(active),
        year => chrono::Utc::now().year(),
        ..page
    };
    engine.render(template, ctx)
}

pub fn render_home(
    engine: &dyn TemplateEngine,
    content: &SiteContent,
    gallery: &GalleryView,
    referral: Option<&ReferralSlide>,
    selection: &Selection,
    interval: Duration,
) -> Result<String, minijinja::Error> {
    let auto_advance = referral.filter(|slide| slide.rotates()).map(|slide| {
        AutoAdvance::after(
            interval,
            format!("/?referral={}{}", slide.next, tags_suffix(selection)),
        )
    });
    let page = context! {
        auto_advance => auto_advance,
        gallery => gallery,
        referral => referral,
        skills => content.home_skills(),
        tags_suffix => tags_suffix(selection),
    };
    render_page(engine, content, "home.html", Page::Projects, page)
}

pub fn render_project_detail(
    engine: &dyn TemplateEngine,
    content: &SiteContent,
    id: &str,
    project: Option<&ProjectItem>,
    view: &DetailView,
    selection: &Selection,
    interval: Duration,
) -> Result<String, minijinja::Error> {
    let category = project.map_or(ProjectCategory::Other, |p| p.category);
    let accent = category.accent_color();
    let auto_advance = match view {
        DetailView::Article {
            slideshow: Some(slideshow),
            ..
        } if slideshow.count > 1 => Some(AutoAdvance::after(
            interval,
            format!(
                "/projects/{id}?slide={}{}",
                slideshow.next,
                tags_suffix(selection)
            ),
        )),
        _ => None,
    };
    let page = context! {
        auto_advance => auto_advance,
        view => view,
        accent => accent,
        self_href => format!("/projects/{id}"),
        back_href => gallery_href(selection),
        tags_suffix => tags_suffix(selection),
    };
    render_page(engine, content, "project_detail.html", Page::Projects, page)
}

pub fn render_publications(
    engine: &dyn TemplateEngine,
    content: &SiteContent,
) -> Result<String, minijinja::Error> {
    let page = context! { publications => content.publications };
    render_page(engine, content, "publications.html", Page::Publications, page)
}

pub fn render_resume(
    engine: &dyn TemplateEngine,
    content: &SiteContent,
    resume: &ResumeView,
) -> Result<String, minijinja::Error> {
    let modes: Vec<ModeOption> = ResumeMode::ALL
        .into_iter()
        .map(|mode| ModeOption {
            value: mode.as_str(),
            label: mode.label(),
            active: mode == resume.mode,
        })
        .collect();
    let page = context! {
        resume => resume,
        modes => modes,
    };
    render_page(engine, content, "resume.html", Page::Resume, page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::build_resume;
    use crate::site::MiniJinjaEngine;

    const INTERVAL: Duration = Duration::from_secs(30);

    fn setup() -> (MiniJinjaEngine, SiteContent) {
        (MiniJinjaEngine::new(), SiteContent::load().unwrap())
    }

    #[test]
    fn test_nav_marks_one_active_page() {
        let items = nav(Page::Resume);
        assert_eq!(items.iter().filter(|i| i.active).count(), 1);
        assert!(items[2].active);
    }

    #[test]
    fn test_tags_suffix() {
        assert_eq!(tags_suffix(&Selection::new()), "");
        assert_eq!(
            tags_suffix(&Selection::from_tags(["Blue Origin"])),
            "&tags=Blue%20Origin"
        );
    }

    #[test]
    fn test_home_renders_gallery_and_referral() {
        let (engine, content) = setup();
        let gallery = GalleryView::build(&content, Selection::new());
        let slide = ReferralSlide {
            index: 0,
            next: 0,
            quote: "Great colleague",
            author: "Someone",
            dots: Vec::new(),
        };
        let html = render_home(
            &engine,
            &content,
            &gallery,
            Some(&slide),
            &Selection::new(),
            INTERVAL,
        )
        .unwrap();
        assert!(html.contains("Selected Work"));
        assert!(html.contains("Great colleague"));
        assert!(html.contains("Technical Skills"));
        assert!(html.contains("All rights reserved."));
        // A single quote has nothing to advance to.
        assert!(!html.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn test_home_advances_to_next_referral_keeping_tags() {
        let (engine, content) = setup();
        let selection = Selection::from_tags(["Blue Origin"]);
        let gallery = GalleryView::build(&content, selection.clone());
        let slide = crate::gallery::referral_slide(content.referrals, Some(0)).unwrap();
        let html = render_home(
            &engine,
            &content,
            &gallery,
            Some(&slide),
            &selection,
            INTERVAL,
        )
        .unwrap();
        assert!(html.contains("content=\"30;url=&#x2f;?referral=1&amp;tags=Blue%20Origin\""));
    }

    #[test]
    fn test_home_without_referrals_has_no_timer() {
        let (engine, content) = setup();
        let gallery = GalleryView::build(&content, Selection::new());
        let slide = crate::gallery::referral_slide(&[], None);
        let html = render_home(
            &engine,
            &content,
            &gallery,
            slide.as_ref(),
            &Selection::new(),
            INTERVAL,
        )
        .unwrap();
        assert!(!html.contains("Coworker Referrals"));
        assert!(!html.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn test_detail_placeholder_renders_message() {
        let (engine, content) = setup();
        let view = content.details.lookup("nope").view(0, 0);
        let html = render_project_detail(
            &engine,
            &content,
            "nope",
            None,
            &view,
            &Selection::new(),
            INTERVAL,
        )
        .unwrap();
        assert!(html.contains("Project information under construction"));
        assert!(html.contains("Back to Projects"));
        assert!(!html.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn test_detail_image_hides_on_error() {
        let (engine, content) = setup();
        let view = content.details.lookup("uw1").view(1, 0);
        let html = render_project_detail(
            &engine,
            &content,
            "uw1",
            content.project("uw1"),
            &view,
            &Selection::new(),
            INTERVAL,
        )
        .unwrap();
        assert!(html.contains("onerror="));
        assert!(html.contains("onemm_photo_2.png"));
        assert!(html.contains("Image 2 of 3"));
        // Slide 2 of 3 advances to the third photo.
        assert!(html.contains("content=\"30;url=&#x2f;projects&#x2f;uw1?slide=2\""));
    }

    #[test]
    fn test_resume_page_marks_active_mode() {
        let (engine, content) = setup();
        let resume = build_resume(&content, ResumeMode::Ml);
        let html = render_resume(&engine, &content, &resume).unwrap();
        assert!(html.contains("Technical Experience"));
        assert!(html.contains("href=\"/resume?mode=ml\" class=\"active\""));
    }
}

use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::filter::Selection;
use crate::gallery::{referral_slide, GalleryView};
use crate::models::experience::ResumeMode;
use crate::resume::build_resume;
use crate::site::pages;
use crate::state::AppState;

// Numeric parameters arrive as strings so a malformed value falls back to the
// first slide/page instead of rejecting the page.

#[derive(Debug, Default, Deserialize)]
pub struct HomeQuery {
    pub tags: Option<String>,
    pub referral: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DetailQuery {
    pub tags: Option<String>,
    pub slide: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResumeQuery {
    pub mode: Option<String>,
}

fn parse_index(raw: Option<&str>) -> Option<usize> {
    raw.and_then(|value| value.trim().parse().ok())
}

/// GET /
pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<HomeQuery>,
) -> Result<Html<String>, AppError> {
    let selection = Selection::from_query(params.tags.as_deref());
    let gallery = GalleryView::build(&state.content, selection.clone());
    let referral = referral_slide(
        state.content.referrals,
        parse_index(params.referral.as_deref()),
    );

    let html = pages::render_home(
        state.templates.as_ref(),
        &state.content,
        &gallery,
        referral.as_ref(),
        &selection,
        state.config.slideshow_interval,
    )?;
    Ok(Html(html))
}

/// GET /projects/:id
///
/// Ids without a write-up render the placeholder panel rather than a 404.
pub async fn project_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<DetailQuery>,
) -> Result<Html<String>, AppError> {
    let selection = Selection::from_query(params.tags.as_deref());
    let view = state.content.details.lookup(&id).view(
        parse_index(params.slide.as_deref()).unwrap_or(0),
        parse_index(params.page.as_deref()).unwrap_or(0),
    );

    let html = pages::render_project_detail(
        state.templates.as_ref(),
        &state.content,
        &id,
        state.content.project(&id),
        &view,
        &selection,
        state.config.slideshow_interval,
    )?;
    Ok(Html(html))
}

/// GET /publications
pub async fn publications(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = pages::render_publications(state.templates.as_ref(), &state.content)?;
    Ok(Html(html))
}

/// GET /resume?mode=thermal|ml
///
/// An unrecognised mode shows the default résumé.
pub async fn resume(
    State(state): State<AppState>,
    Query(params): Query<ResumeQuery>,
) -> Result<Html<String>, AppError> {
    let mode = match params.mode.as_deref() {
        None => ResumeMode::default(),
        Some(raw) => raw.parse::<ResumeMode>().unwrap_or_else(|e| {
            tracing::debug!("{e}; showing the default resume");
            ResumeMode::default()
        }),
    };

    let resume = build_resume(&state.content, mode);
    let html = pages::render_resume(state.templates.as_ref(), &state.content, &resume)?;
    Ok(Html(html))
}

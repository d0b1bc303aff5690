use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::filter::{FacetView, Selection};
use crate::gallery::DetailView;
use crate::models::experience::ResumeMode;
use crate::models::profile::PublicationItem;
use crate::models::project::ProjectItem;
use crate::resume::{build_resume, ResumeView};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TagsQuery {
    pub tags: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PositionQuery {
    #[serde(default)]
    pub slide: usize,
    #[serde(default)]
    pub page: usize,
}

#[derive(Serialize)]
pub struct ProjectDetailResponse {
    pub project: &'static ProjectItem,
    pub in_progress: bool,
    pub accent: &'static str,
    pub detail: DetailView,
}

#[derive(Serialize)]
pub struct TagsResponse {
    pub vocabulary: &'static [&'static str],
}

/// GET /api/v1/projects?tags=a,b
pub async fn list_projects(
    State(state): State<AppState>,
    Query(params): Query<TagsQuery>,
) -> Json<FacetView<'static, ProjectItem>> {
    let selection = Selection::from_query(params.tags.as_deref());
    let content = &state.content;
    Json(FacetView::compute(content.projects, content.vocabulary, selection))
}

/// GET /api/v1/projects/:id
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(position): Query<PositionQuery>,
) -> Result<Json<ProjectDetailResponse>, AppError> {
    let project = state
        .content
        .project(&id)
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))?;

    Ok(Json(ProjectDetailResponse {
        project,
        in_progress: state.content.is_in_progress(project.id),
        accent: project.category.accent_color(),
        detail: state
            .content
            .details
            .lookup(project.id)
            .view(position.slide, position.page),
    }))
}

/// GET /api/v1/publications
pub async fn list_publications(State(state): State<AppState>) -> Json<&'static [PublicationItem]> {
    Json(state.content.publications)
}

/// GET /api/v1/resume/:mode
pub async fn get_resume(
    State(state): State<AppState>,
    Path(mode): Path<String>,
) -> Result<Json<ResumeView>, AppError> {
    let mode: ResumeMode = mode.parse().map_err(AppError::Validation)?;
    Ok(Json(build_resume(&state.content, mode)))
}

/// GET /api/v1/tags
pub async fn list_tags(State(state): State<AppState>) -> Json<TagsResponse> {
    Json(TagsResponse {
        vocabulary: state.content.vocabulary,
    })
}

use std::sync::Arc;

use crate::config::Config;
use crate::content::SiteContent;
use crate::site::TemplateEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub content: Arc<SiteContent>,
    /// HTML renderer. Default: embedded minijinja templates.
    pub templates: Arc<dyn TemplateEngine>,
}

impl AppState {
    pub fn new(config: Config, content: SiteContent, templates: Arc<dyn TemplateEngine>) -> Self {
        AppState {
            config,
            content: Arc::new(content),
            templates,
        }
    }
}

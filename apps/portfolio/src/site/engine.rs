use minijinja::{default_auto_escape_callback, Environment, Value};

/// Page templates compiled into the binary, by the name pages render them under.
const EMBEDDED: &[(&str, &str)] = &[
    ("layout.html", include_str!("templates/layout.html")),
    ("home.html", include_str!("templates/home.html")),
    ("project_detail.html", include_str!("templates/project_detail.html")),
    ("publications.html", include_str!("templates/publications.html")),
    ("resume.html", include_str!("templates/resume.html")),
];

fn embedded_source(name: &str) -> Option<&'static str> {
    EMBEDDED
        .iter()
        .find(|(embedded, _)| *embedded == name)
        .map(|(_, source)| *source)
}

/// Renders a named page template against a context.
pub trait TemplateEngine: Send + Sync {
    fn render(&self, name: &str, ctx: Value) -> Result<String, minijinja::Error>;
}

/// The site's minijinja environment. `.html` names are auto-escaped and block
/// tags do not leave blank lines behind.
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(default_auto_escape_callback);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_loader(|name| Ok(embedded_source(name).map(str::to_owned)));
        MiniJinjaEngine { env }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render(&self, name: &str, ctx: Value) -> Result<String, minijinja::Error> {
        self.env.get_template(name)?.render(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_unknown_template_is_an_error() {
        let engine = MiniJinjaEngine::new();
        assert!(engine.render("missing.html", context! {}).is_err());
        assert!(embedded_source("missing.html").is_none());
    }

    #[test]
    fn test_every_embedded_template_parses() {
        let engine = MiniJinjaEngine::new();
        for (name, _) in EMBEDDED {
            assert!(
                engine.env.get_template(name).is_ok(),
                "{name} failed to load"
            );
        }
    }

    #[test]
    fn test_values_are_html_escaped() {
        let mut engine = MiniJinjaEngine::new();
        engine
            .env
            .add_template("snippet.html", "{{ text }}")
            .unwrap();
        let html = engine
            .render("snippet.html", context! { text => "<b>R&D</b>" })
            .unwrap();
        assert_eq!(html, "&lt;b&gt;R&amp;D&lt;&#x2f;b&gt;");
    }
}

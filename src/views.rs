//! HTML for the single summary page.

use minijinja::{Environment, context};
use once_cell::sync::Lazy;

use crate::errors::SummaryError;

// Names end in `.html` so minijinja auto-escapes every interpolated value.
static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut environment = Environment::new();
    for (name, source) in [
        ("base.html", include_str!("../templates/base.html")),
        ("index.html", include_str!("../templates/index.html")),
        ("error.html", include_str!("../templates/error.html")),
    ] {
        environment
            .add_template(name, source)
            .expect("bundled template compile");
    }
    environment
});

/// Renders the form page. The summary block is only emitted when there is
/// a summary to show.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_index(summary: &str, text: &str) -> Result<String, SummaryError> {
    let template = TEMPLATES.get_template("index.html")?;
    Ok(template.render(context!(summary => summary, text => text))?)
}

/// Minimal page for requests that could not be read.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_error(message: &str) -> Result<String, SummaryError> {
    let template = TEMPLATES.get_template("error.html")?;
    Ok(template.render(context!(message => message))?)
}

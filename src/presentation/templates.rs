/// HTML templates
///
/// Page markup lives in standalone files under `templates/` so it can be
/// edited and diffed apart from the code. They are compiled once into a shared
/// minijinja `Environment`. Every template name ends in `.html`, which turns on
/// minijinja's HTML auto-escaping: anything a template prints is escaped unless
/// the value was explicitly marked safe.
///
/// Layout:
/// - `base.html` is the page shell (nav, alert container, dismiss script)
/// - `form.html` and `listing.html` extend it
/// - `alert.html`, `rows.html` and `controls.html` are fragments, included by
///   the pages and also rendered on their own

use minijinja::{Environment, Error};
use once_cell::sync::Lazy;
use serde::Serialize;

pub const BASE_TEMPLATE: &str = include_str!("templates/base.html");
pub const ALERT_TEMPLATE: &str = include_str!("templates/alert.html");
pub const FORM_TEMPLATE: &str = include_str!("templates/form.html");
pub const LISTING_TEMPLATE: &str = include_str!("templates/listing.html");
pub const ROWS_TEMPLATE: &str = include_str!("templates/rows.html");
pub const CONTROLS_TEMPLATE: &str = include_str!("templates/controls.html");

static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    for (name, source) in [
        ("base.html", BASE_TEMPLATE),
        ("alert.html", ALERT_TEMPLATE),
        ("form.html", FORM_TEMPLATE),
        ("listing.html", LISTING_TEMPLATE),
        ("rows.html", ROWS_TEMPLATE),
        ("controls.html", CONTROLS_TEMPLATE),
    ] {
        env.add_template(name, source).expect("valid built-in template");
    }
    env
});

/// Render a registered template with `context`
pub fn render<T: Serialize>(name: &str, context: &T) -> Result<String, Error> {
    TEMPLATES.get_template(name)?.render(context)
}

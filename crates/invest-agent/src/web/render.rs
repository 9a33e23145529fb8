use crate::page::{PAGE_TITLE, Page};
use minijinja::{Environment, context};

const PAGE_TEMPLATE_NAME: &str = "page.html";
const PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");

/// Renders a [`Page`] to HTML
///
/// The template name ends in `.html`, so every interpolated value is escaped.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Load the page template
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Render the full HTML document
    pub fn render(&self, page: &Page) -> Result<String, minijinja::Error> {
        self.env.get_template(PAGE_TEMPLATE_NAME)?.render(context! {
            document_title => PAGE_TITLE,
            sidebar => page.sidebar(),
            blocks => page.blocks(),
        })
    }
}

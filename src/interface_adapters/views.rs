use askama::Template;

use crate::domain::{PageRenderer, StatusPage};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexView<'a> {
    is_live: bool,
    place: &'a str,
}

// Renders the status page from the compiled askama template.
#[derive(Clone, Default)]
pub struct AskamaRenderer;

impl PageRenderer for AskamaRenderer {
    fn render(&self, page: &StatusPage) -> Result<String, String> {
        IndexView {
            is_live: page.is_live,
            place: &page.place,
        }
        .render()
        .map_err(|e| e.to_string())
    }
}

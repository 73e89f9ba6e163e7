// 🏠 Root Composition
// Header, banner, six sections and footer, always in this order.

use crate::content::ContentRegistry;
use crate::error::SiteError;
use crate::markup::{Element, Node};
use crate::navigation::{header, Anchor, NavShell};
use crate::sections;
use askama::Template;
use chrono::{Datelike, Local};

const STYLESHEET: &str = include_str!("../web/site.css");
const NAV_SCRIPT: &str = include_str!("../web/nav.js");

/// Calendar year on the host clock, read at call time
pub fn current_year() -> i32 {
    Local::now().year()
}

/// The page body as a tree
pub fn render_page(registry: &ContentRegistry, shell: &NavShell, year: i32) -> Node {
    Element::new("div")
        .class("page")
        .child(header(shell, &registry.contact))
        .child(
            Element::new("main")
                .child(sections::hero(&registry.contact))
                .child(sections::about())
                .child(sections::skills(registry))
                .child(sections::experience(&registry.experience))
                .child(sections::projects(&registry.projects))
                .child(sections::education(&registry.education))
                .child(sections::contact(&registry.contact)),
        )
        .child(sections::footer(&registry.contact, year))
        .into()
}

/// Anchor ids emitted by the page, in document order
pub fn section_anchors(page: &Node) -> Vec<String> {
    let known: Vec<&str> = Anchor::ALL.iter().map(Anchor::as_str).collect();
    page.find_all(|el| {
        el.tag == "section"
            && el.get_attr("id").map(|id| known.contains(&id)).unwrap_or(false)
    })
    .iter()
    .filter_map(|el| el.get_attr("id").map(str::to_string))
    .collect()
}

/// Document shell around the rendered body
#[derive(Template)]
#[template(path = "index.html")]
struct DocumentTemplate<'a> {
    title: String,
    css: &'a str,
    body: String,
    js: &'a str,
}

/// Complete HTML5 document with the panel closed
pub fn render_document(registry: &ContentRegistry, year: i32) -> Result<String, SiteError> {
    let contact = &registry.contact;
    let template = DocumentTemplate {
        title: format!("{} · {}", contact.name, contact.title),
        css: STYLESHEET,
        body: render_page(registry, &NavShell::new(), year).to_html(),
        js: NAV_SCRIPT,
    };
    Ok(template.render()?)
}

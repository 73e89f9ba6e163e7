// Portfolio Site - Core Library
// Exposes all modules for use in the CLI, the viewer, the HTTP server and tests

pub mod content;
pub mod icons;
pub mod markup;
pub mod primitives;
pub mod navigation;
pub mod sections;
pub mod page;
pub mod export;
pub mod config;
pub mod error;
pub mod logging;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use content::{
    ContactInfo, ContentRegistry, EducationEntry, ExperienceEntry,
    ProjectEntry, ProjectLink, SkillCategory, SkillGroup,
};
pub use icons::Icon;
pub use markup::{Element, Node};
pub use navigation::{Anchor, NavItem, NavShell, PanelState, NAV_ITEMS};
pub use sections::footer_text;
pub use page::{current_year, render_document, render_page, section_anchors};
pub use export::export_site;
pub use config::SiteConfig;
pub use error::SiteError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

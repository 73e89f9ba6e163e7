// Icon handles shared by both display surfaces.
// HTML gets an inline stroke SVG, the terminal gets a short glyph.

use crate::markup::{Element, Node};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Globe,
    Wrench,
    Briefcase,
    Code,
    GraduationCap,
    Mail,
    Phone,
    MapPin,
    Github,
    Linkedin,
    ExternalLink,
    Menu,
    Close,
}

impl Icon {
    /// 24x24 stroke paths
    fn paths(&self) -> &'static [&'static str] {
        match self {
            Icon::Globe => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
                "M2 12h20",
                "M12 2a14.5 14.5 0 0 0 0 20a14.5 14.5 0 0 0 0-20",
            ],
            Icon::Wrench => &[
                "M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z",
            ],
            Icon::Briefcase => &[
                "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
                "M4 6h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
            ],
            Icon::Code => &["m18 16 4-4-4-4", "m6 8-4 4 4 4", "m14.5 4-5 16"],
            Icon::GraduationCap => &[
                "M22 10v6",
                "M2 10l10-5 10 5-10 5z",
                "M6 12v5c3 3 9 3 12 0v-5",
            ],
            Icon::Mail => &[
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
            ],
            Icon::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Icon::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0z",
                "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6z",
            ],
            Icon::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
            ],
            Icon::ExternalLink => &[
                "M15 3h6v6",
                "M10 14 21 3",
                "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6",
            ],
            Icon::Menu => &["M4 6h16M4 12h16M4 18h16"],
            Icon::Close => &["M6 18L18 6M6 6l12 12"],
        }
    }

    /// All stroke paths joined into one `d` value
    pub fn path_data(&self) -> String {
        self.paths().join(" ")
    }

    /// Single-cell-ish glyph for the terminal viewer
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Globe => "◎",
            Icon::Wrench => "⚒",
            Icon::Briefcase => "▣",
            Icon::Code => "</>",
            Icon::GraduationCap => "🎓",
            Icon::Mail => "✉",
            Icon::Phone => "☎",
            Icon::MapPin => "⌖",
            Icon::Github => "GH",
            Icon::Linkedin => "in",
            Icon::ExternalLink => "↗",
            Icon::Menu => "☰",
            Icon::Close => "✕",
        }
    }

    /// Inline SVG, hidden from assistive technology
    pub fn svg(&self, class: &str) -> Node {
        Element::new("svg")
            .class(class)
            .attr("viewBox", "0 0 24 24")
            .attr("fill", "none")
            .attr("stroke", "currentColor")
            .attr("stroke-width", "2")
            .attr("stroke-linecap", "round")
            .attr("stroke-linejoin", "round")
            .attr("aria-hidden", "true")
            .children(self.paths().iter().map(|d| Element::new("path").attr("d", *d)))
            .into()
    }
}

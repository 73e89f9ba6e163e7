// 🧭 Navigation Shell - header, anchor links, collapsible panel
//
// The panel is a two-state machine owned by one NavShell:
//   Closed --toggle--> Open
//   Open   --toggle--> Closed
//   Open   --link----> Closed
// Nothing else moves it.

use crate::content::ContactInfo;
use crate::icons::Icon;
use crate::markup::{Element, Node};
use serde::Serialize;

// ============================================================================
// ANCHORS
// ============================================================================

/// In-page navigation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Contact,
}

impl Anchor {
    /// Every anchor, in page order
    pub const ALL: [Anchor; 7] = [
        Anchor::Home,
        Anchor::About,
        Anchor::Skills,
        Anchor::Experience,
        Anchor::Projects,
        Anchor::Education,
        Anchor::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Skills => "skills",
            Anchor::Experience => "experience",
            Anchor::Projects => "projects",
            Anchor::Education => "education",
            Anchor::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.as_str())
    }
}

/// A header link: visible label and its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub anchor: Anchor,
    pub label: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { anchor: Anchor::About, label: "Sobre" },
    NavItem { anchor: Anchor::Skills, label: "Skills" },
    NavItem { anchor: Anchor::Experience, label: "Experiência" },
    NavItem { anchor: Anchor::Projects, label: "Projetos" },
    NavItem { anchor: Anchor::Education, label: "Educação" },
    NavItem { anchor: Anchor::Contact, label: "Contato" },
];

// ============================================================================
// PANEL STATE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Default)]
pub struct NavShell {
    panel: PanelState,
    /// Focused link inside the open panel (keyboard surfaces only)
    focus: usize,
}

impl NavShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanelState {
        self.panel
    }

    pub fn is_open(&self) -> bool {
        self.panel == PanelState::Open
    }

    /// Toggle-control activation
    pub fn toggle(&mut self) {
        self.panel = match self.panel {
            PanelState::Closed => PanelState::Open,
            PanelState::Open => PanelState::Closed,
        };
        self.focus = 0;
    }

    /// Activation of a navigation link. Always leaves the panel closed.
    pub fn activate_link(&mut self, anchor: Anchor) -> Anchor {
        self.panel = PanelState::Closed;
        self.focus = 0;
        anchor
    }

    pub fn focused(&self) -> NavItem {
        NAV_ITEMS[self.focus]
    }

    pub fn select_next(&mut self) {
        if self.is_open() {
            self.focus = (self.focus + 1) % NAV_ITEMS.len();
        }
    }

    pub fn select_previous(&mut self) {
        if self.is_open() {
            self.focus = (self.focus + NAV_ITEMS.len() - 1) % NAV_ITEMS.len();
        }
    }

    /// Activate whatever link has focus
    pub fn activate_focused(&mut self) -> Anchor {
        let anchor = self.focused().anchor;
        self.activate_link(anchor)
    }
}

// ============================================================================
// HEADER
// ============================================================================

fn profile_link(href: &str, label: &str, icon: Icon, external: bool) -> Element {
    let link = Element::new("a")
        .class("icon-link")
        .attr("href", href)
        .attr("aria-label", label)
        .child(icon.svg("icon icon-sm"));
    if external {
        link.attr("target", "_blank")
    } else {
        link
    }
}

/// Header with desktop links, profile links, toggle control and mobile panel
pub fn header(shell: &NavShell, contact: &ContactInfo) -> Node {
    let open = shell.is_open();

    let desktop_links = Element::new("div").class("nav-links desktop-only").children(
        NAV_ITEMS.iter().map(|item| {
            Element::new("a")
                .class("nav-link")
                .attr("href", item.anchor.href())
                .child(item.label)
        }),
    );

    let desktop_profiles = Element::new("div")
        .class("nav-profiles desktop-only")
        .child(profile_link(&contact.github, "GitHub", Icon::Github, true))
        .child(profile_link(&contact.linkedin, "LinkedIn", Icon::Linkedin, true));

    let toggle = Element::new("button")
        .class("nav-toggle mobile-only")
        .attr("type", "button")
        .attr("aria-label", "Abrir menu")
        .attr("aria-controls", "nav-panel")
        .attr("aria-expanded", open.to_string())
        .attr("data-icon-closed", Icon::Menu.path_data())
        .attr("data-icon-open", Icon::Close.path_data())
        .child(if open { Icon::Close } else { Icon::Menu }.svg("icon"));

    let panel = Element::new("div")
        .class("nav-panel mobile-only")
        .class(if open { "open" } else { "hidden" })
        .attr("id", "nav-panel")
        .children(NAV_ITEMS.iter().map(|item| {
            Element::new("a")
                .class("panel-link")
                .attr("href", item.anchor.href())
                .attr("data-anchor", item.anchor.as_str())
                .child(item.label)
        }))
        .child(
            Element::new("div")
                .class("panel-profiles")
                .child(profile_link(&contact.github, "GitHub", Icon::Github, false))
                .child(profile_link(&contact.linkedin, "LinkedIn", Icon::Linkedin, false)),
        );

    Element::new("header")
        .class("site-header")
        .child(
            Element::new("nav")
                .class("container nav-bar")
                .child(
                    Element::new("a")
                        .class("brand")
                        .attr("href", Anchor::Home.href())
                        .child(contact.name.as_str()),
                )
                .child(desktop_links)
                .child(desktop_profiles)
                .child(toggle),
        )
        .child(panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentRegistry;

    #[test]
    fn test_initial_state_closed() {
        let shell = NavShell::new();
        assert_eq!(shell.state(), PanelState::Closed);
        assert!(!shell.is_open());
    }

    #[test]
    fn test_toggle_parity() {
        for n in 0..10 {
            let mut shell = NavShell::new();
            for _ in 0..n {
                shell.toggle();
            }
            assert_eq!(shell.is_open(), n % 2 == 1, "after {} toggles", n);
        }
    }

    #[test]
    fn test_any_link_closes_open_panel() {
        for item in NAV_ITEMS {
            let mut shell = NavShell::new();
            shell.toggle();
            assert!(shell.is_open());

            let target = shell.activate_link(item.anchor);
            assert_eq!(target, item.anchor);
            assert_eq!(shell.state(), PanelState::Closed);
        }
    }

    #[test]
    fn test_link_on_closed_panel_stays_closed() {
        let mut shell = NavShell::new();
        shell.activate_link(Anchor::Skills);
        assert_eq!(shell.state(), PanelState::Closed);
    }

    #[test]
    fn test_focus_wraps_and_activates() {
        let mut shell = NavShell::new();
        shell.select_next();
        assert_eq!(shell.focused().anchor, Anchor::About, "focus ignored while closed");

        shell.toggle();
        shell.select_previous();
        assert_eq!(shell.focused().anchor, Anchor::Contact);
        shell.select_next();
        shell.select_next();
        assert_eq!(shell.focused().anchor, Anchor::Skills);

        assert_eq!(shell.activate_focused(), Anchor::Skills);
        assert!(!shell.is_open());
    }

    #[test]
    fn test_nav_items_cover_sections() {
        let anchors: Vec<&str> = NAV_ITEMS.iter().map(|i| i.anchor.as_str()).collect();
        assert_eq!(
            anchors,
            vec!["about", "skills", "experience", "projects", "education", "contact"]
        );
    }

    #[test]
    fn test_header_reflects_panel_state() {
        let contact = &ContentRegistry::fixture().contact;
        let mut shell = NavShell::new();

        let closed = header(&shell, contact);
        let button = closed.find_all(|el| el.tag == "button")[0];
        assert_eq!(button.get_attr("aria-expanded"), Some("false"));
        assert!(closed.find_by_id("nav-panel").unwrap().has_class("hidden"));

        shell.toggle();
        let open = header(&shell, contact);
        let button = open.find_all(|el| el.tag == "button")[0];
        assert_eq!(button.get_attr("aria-expanded"), Some("true"));
        assert!(open.find_by_id("nav-panel").unwrap().has_class("open"));
    }

    #[test]
    fn test_toggle_carries_both_icon_paths() {
        let contact = &ContentRegistry::fixture().contact;
        let mut shell = NavShell::new();

        for _ in 0..2 {
            let node = header(&shell, contact);
            let button = node.find_all(|el| el.tag == "button")[0];
            let drawn = button.descendants()[1].get_attr("d").unwrap().to_string();
            let expected = if shell.is_open() { Icon::Close } else { Icon::Menu };

            assert_eq!(drawn, expected.path_data());
            assert_eq!(button.get_attr("data-icon-closed"), Some(Icon::Menu.path_data().as_str()));
            assert_eq!(button.get_attr("data-icon-open"), Some(Icon::Close.path_data().as_str()));
            shell.toggle();
        }
    }

    #[test]
    fn test_anchor_serializes_as_id() {
        for anchor in Anchor::ALL {
            assert_eq!(serde_json::to_value(anchor).unwrap(), anchor.as_str());
        }
    }

    #[test]
    fn test_profile_links_duplicated_in_panel() {
        let contact = &ContentRegistry::fixture().contact;
        let node = header(&NavShell::new(), contact);

        let github = node.find_all(|el| el.get_attr("href") == Some(contact.github.as_str()));
        assert_eq!(github.len(), 2);
        assert_eq!(github[0].get_attr("target"), Some("_blank"));

        let panel = node.find_by_id("nav-panel").unwrap();
        assert_eq!(
            panel
                .descendants()
                .iter()
                .filter(|el| el.has_class("panel-link"))
                .count(),
            6
        );
    }
}

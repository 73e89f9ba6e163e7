// Presentational primitives: section frame, badge, card.

use crate::icons::Icon;
use crate::markup::{Element, Node};
use crate::navigation::Anchor;

/// Titled, anchored block. The anchor doubles as the element id.
pub fn section_frame<I>(anchor: Anchor, title: &str, icon: Icon, content: I) -> Node
where
    I: IntoIterator<Item = Node>,
{
    Element::new("section")
        .class("section")
        .attr("id", anchor.as_str())
        .child(
            Element::new("div")
                .class("section-heading")
                .child(Element::new("div").class("section-icon").child(icon.svg("icon")))
                .child(Element::new("h2").child(title)),
        )
        .child(Element::new("div").class("section-body").children(content))
        .into()
}

/// Small pill carrying one label
pub fn badge(label: &str) -> Node {
    Element::new("span").class("badge").child(label).into()
}

/// Bordered container. `modifier` is appended to the class list.
pub fn card<I>(content: I, modifier: Option<&str>) -> Node
where
    I: IntoIterator<Item = Node>,
{
    let mut el = Element::new("div").class("card");
    if let Some(extra) = modifier {
        el = el.class(extra);
    }
    el.children(content).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_frame_anchor_and_title() {
        let node = section_frame(Anchor::Skills, "Habilidades", Icon::Wrench, Vec::new());
        let el = node.as_element().unwrap();

        assert_eq!(el.tag, "section");
        assert_eq!(el.get_attr("id"), Some("skills"));
        assert_eq!(node.find_all(|e| e.tag == "h2")[0].text_content(), "Habilidades");
        assert_eq!(node.find_all(|e| e.tag == "svg").len(), 1);
    }

    #[test]
    fn test_badge_round_trips_label() {
        for label in ["React", "CMS (Strapi)", "Git/GitHub", "<b>"] {
            assert_eq!(badge(label).text_content(), label);
        }
    }

    #[test]
    fn test_card_modifier() {
        let plain = card(vec![Node::text("x")], None);
        let wide = card(vec![Node::text("x")], Some("wide"));

        assert_eq!(plain.as_element().unwrap().get_attr("class"), Some("card"));
        assert!(wide.as_element().unwrap().has_class("wide"));
        assert_eq!(wide.text_content(), "x");
    }
}

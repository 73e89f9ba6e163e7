// 📄 Section Renderers
// Each renderer maps its slice of the registry to a tree. No state, no I/O.
// Empty collections still produce the section frame with an empty body.

use crate::content::{
    ContactInfo, ContentRegistry, EducationEntry, ExperienceEntry, ProjectEntry, SkillCategory,
};
use crate::icons::Icon;
use crate::markup::{Element, Node};
use crate::navigation::Anchor;
use crate::primitives::{badge, card, section_frame};

const HERO_STATUS: &str = "Disponível para novas oportunidades";

const HERO_SUMMARY: &str = "Experiência em Front-End (Vue, Nuxt, React, Tailwind) e Back-End \
(Node, Java, Spring, Python), com foco em qualidade (Cypress/Jest/JUnit/Pytest) e interesse em \
aplicar IA para gerar impacto real.";

const ABOUT_TEXT: &str = "Sou desenvolvedor Full-Stack com pouco mais de um ano de experiência \
profissional, com foco em Front-End (JavaScript, Vue.js, Nuxt.js, TailwindCSS) e testes \
automatizados com Cypress/Jest. Também possuo experiência prática com Back-End (Node.js, Java, \
Spring Boot, Python, MySQL), integração de CMS (Strapi) e testes com JUnit e Pytest. Recentemente \
aprofundei meus conhecimentos em Inteligência Artificial, buscando aplicar soluções inovadoras e \
otimizadas em desenvolvimento de software.";

const CONTACT_HEADING: &str = "Vamos conversar";

const CONTACT_TEXT: &str =
    "Aberto a oportunidades e colaborações. Me chame por e-mail, telefone ou redes.";

fn icon_label(icon: Icon, label: &str) -> Vec<Node> {
    vec![icon.svg("icon icon-sm"), Node::text(format!(" {}", label))]
}

fn button_link(href: &str, icon: Icon, label: &str) -> Element {
    Element::new("a")
        .class("button")
        .attr("href", href)
        .children(icon_label(icon, label))
}

// ============================================================================
// LANDING BANNER
// ============================================================================

pub fn hero(contact: &ContactInfo) -> Node {
    let status = Element::new("div")
        .class("status-pill")
        .child(Element::new("span").class("pulse-dot"))
        .child(HERO_STATUS);

    let calls_to_action = Element::new("div")
        .class("cta-row")
        .child(
            Element::new("a")
                .class("button")
                .attr("href", Anchor::Projects.href())
                .child("Ver Projetos"),
        )
        .child(
            Element::new("a")
                .class("button")
                .attr("href", contact.resume.as_str())
                .external()
                .child("Ver Currículo"),
        );

    let quick_links = Element::new("div")
        .class("quick-links")
        .child(
            Element::new("span")
                .class("inline-icon")
                .children(icon_label(Icon::MapPin, &contact.location)),
        )
        .child(
            Element::new("a")
                .class("inline-icon")
                .attr("href", contact.email.as_str())
                .children(icon_label(Icon::Mail, contact.email_address())),
        )
        .child(
            Element::new("a")
                .class("inline-icon")
                .attr("href", contact.phone.as_str())
                .children(icon_label(Icon::Phone, &contact.phone_label)),
        );

    Element::new("section")
        .class("hero")
        .attr("id", Anchor::Home.as_str())
        .child(
            Element::new("div")
                .class("container hero-grid")
                .child(
                    Element::new("div")
                        .child(status)
                        .child(Element::new("h1").child(contact.title.as_str()))
                        .child(Element::new("p").class("lead").child(HERO_SUMMARY))
                        .child(calls_to_action)
                        .child(quick_links),
                )
                .child(
                    Element::new("div")
                        .class("hero-art")
                        .child(Icon::Code.svg("icon icon-xl")),
                ),
        )
        .into()
}

// ============================================================================
// CONTENT SECTIONS
// ============================================================================

pub fn about() -> Node {
    section_frame(
        Anchor::About,
        "Sobre mim",
        Icon::Globe,
        vec![card(vec![Element::new("p").child(ABOUT_TEXT).into()], None)],
    )
}

/// One card per category in fixed display order, one badge per skill
pub fn skills(registry: &ContentRegistry) -> Node {
    let cards = SkillCategory::ALL
        .iter()
        .filter(|category| registry.skills.iter().any(|g| g.category == **category))
        .map(|category| {
            card(
                vec![
                    Element::new("h3").child(category.heading()).into(),
                    Element::new("div")
                        .class("badge-row")
                        .attr("data-category", category.key())
                        .children(registry.skills(*category).iter().map(|s| badge(s)))
                        .into(),
                ],
                None,
            )
        });

    section_frame(
        Anchor::Skills,
        "Habilidades",
        Icon::Wrench,
        vec![Element::new("div").class("grid grid-3").children(cards).into()],
    )
}

fn experience_card(entry: &ExperienceEntry) -> Node {
    card(
        vec![Element::new("div")
            .class("split")
            .child(
                Element::new("div")
                    .child(Element::new("h3").child(format!("{} · {}", entry.role, entry.company)))
                    .child(
                        Element::new("ol")
                            .class("bullets")
                            .children(entry.bullets.iter().map(|b| Element::new("li").child(b.as_str()))),
                    ),
            )
            .child(Element::new("div").class("period").child(entry.period.as_str()))
            .into()],
        None,
    )
}

pub fn experience(entries: &[ExperienceEntry]) -> Node {
    section_frame(
        Anchor::Experience,
        "Experiência",
        Icon::Briefcase,
        vec![Element::new("div")
            .class("stack")
            .children(entries.iter().map(experience_card))
            .into()],
    )
}

fn project_card(project: &ProjectEntry) -> Node {
    let mut content: Vec<Node> = vec![
        Element::new("h3").child(project.name.as_str()).into(),
        Element::new("p").child(project.description.as_str()).into(),
        Element::new("div")
            .class("badge-row")
            .children(project.tech.iter().map(|t| badge(t)))
            .into(),
    ];

    if !project.links.is_empty() {
        content.push(
            Element::new("div")
                .class("link-row")
                .children(
                    project
                        .links
                        .iter()
                        .map(|link| button_link(&link.href, link.icon, &link.label).external()),
                )
                .into(),
        );
    }

    card(content, None)
}

pub fn projects(entries: &[ProjectEntry]) -> Node {
    section_frame(
        Anchor::Projects,
        "Projetos",
        Icon::Code,
        vec![Element::new("div")
            .class("grid grid-2")
            .children(entries.iter().map(project_card))
            .into()],
    )
}

pub fn education(entries: &[EducationEntry]) -> Node {
    let cards = entries.iter().map(|entry| {
        card(
            vec![
                Element::new("h3").child(entry.course.as_str()).into(),
                Element::new("div").class("muted").child(entry.organization.as_str()).into(),
                Element::new("div").class("period").child(entry.period.as_str()).into(),
            ],
            None,
        )
    });

    section_frame(
        Anchor::Education,
        "Educação",
        Icon::GraduationCap,
        vec![Element::new("div").class("grid grid-2").children(cards).into()],
    )
}

pub fn contact(contact: &ContactInfo) -> Node {
    let links = Element::new("div")
        .class("link-row")
        .child(button_link(&contact.email, Icon::Mail, "E-mail"))
        .child(button_link(&contact.phone, Icon::Phone, "Telefone"))
        .child(button_link(&contact.linkedin, Icon::Linkedin, "LinkedIn").external())
        .child(button_link(&contact.github, Icon::Github, "GitHub").external());

    section_frame(
        Anchor::Contact,
        "Contato",
        Icon::Mail,
        vec![card(
            vec![
                Element::new("h3").child(CONTACT_HEADING).into(),
                Element::new("p").child(CONTACT_TEXT).into(),
                links.into(),
            ],
            None,
        )],
    )
}

// ============================================================================
// FOOTER
// ============================================================================

pub fn footer_text(name: &str, year: i32) -> String {
    format!("© {} {}. Todos os direitos reservados.", year, name)
}

pub fn footer(contact: &ContactInfo, year: i32) -> Node {
    Element::new("footer")
        .class("site-footer")
        .child(
            Element::new("div")
                .class("container")
                .child(Element::new("p").child(footer_text(&contact.name, year))),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registry() -> ContentRegistry {
        ContentRegistry::fixture()
    }

    fn badges_in(node: &Node, category: &str) -> Vec<String> {
        node.find_all(|el| el.get_attr("data-category") == Some(category))[0]
            .descendants()
            .iter()
            .filter(|el| el.has_class("badge"))
            .map(|el| el.text_content())
            .collect()
    }

    #[test]
    fn test_skills_preserve_declared_order() {
        let node = skills(&registry());
        let frontend = badges_in(&node, "frontend");

        assert_eq!(
            frontend,
            vec!["JavaScript", "TypeScript", "Vue.js", "Nuxt.js", "React", "HTML", "CSS", "TailwindCSS"]
        );
        assert_eq!(frontend[4], "React");
    }

    #[test]
    fn test_skills_category_order() {
        let node = skills(&registry());
        let headings: Vec<String> = node
            .find_all(|el| el.tag == "h3")
            .iter()
            .map(|el| el.text_content())
            .collect();

        assert_eq!(
            headings,
            vec!["Front-End", "Back-End", "Testes", "Banco de Dados", "Outros"]
        );
        assert_eq!(node.find_all(|el| el.has_class("card")).len(), 5);
    }

    #[test]
    fn test_empty_experience_renders_frame_only() {
        let node = experience(&[]);

        assert_eq!(node.as_element().unwrap().get_attr("id"), Some("experience"));
        assert_eq!(node.find_all(|el| el.tag == "h2")[0].text_content(), "Experiência");
        assert_eq!(node.find_all(|el| el.has_class("card")).len(), 0);
    }

    #[test]
    fn test_every_renderer_handles_empty_registry() {
        let mut empty = registry();
        empty.skills.clear();
        empty.experience.clear();
        empty.projects.clear();
        empty.education.clear();

        for node in [
            skills(&empty),
            experience(&empty.experience),
            projects(&empty.projects),
            education(&empty.education),
        ] {
            assert_eq!(node.find_all(|el| el.has_class("card")).len(), 0);
            assert_eq!(node.find_all(|el| el.tag == "h2").len(), 1);
        }
    }

    #[test]
    fn test_experience_bullets_ordered() {
        let reg = registry();
        let node = experience(&reg.experience);
        let items: Vec<String> = node
            .find_all(|el| el.tag == "li")
            .iter()
            .map(|el| el.text_content())
            .collect();

        assert_eq!(items, reg.experience[0].bullets);
        assert_eq!(node.find_all(|el| el.tag == "ol").len(), 1);
        assert!(node.text_content().contains("Desenvolvedor Front-End · Hashdex"));
        assert!(node.text_content().contains("09/2023 – 10/2024"));
    }

    #[test]
    fn test_project_links_open_externally() {
        let reg = registry();
        let node = projects(&reg.projects);
        let link = node
            .find_all(|el| el.get_attr("href") == Some("https://minas-na-area.vercel.app/"))[0];

        assert_eq!(link.get_attr("target"), Some("_blank"));
        assert_eq!(link.get_attr("rel"), Some("noreferrer"));
        assert!(link.text_content().contains("Visitar"));

        let tags: Vec<String> = node
            .find_all(|el| el.has_class("badge"))
            .iter()
            .map(|el| el.text_content())
            .collect();
        assert_eq!(tags, reg.projects[0].tech);
    }

    #[test]
    fn test_project_without_links_omits_row() {
        let mut reg = registry();
        reg.projects[0].links.clear();
        let node = projects(&reg.projects);

        assert_eq!(node.find_all(|el| el.has_class("card")).len(), 1);
        assert!(node.find_all(|el| el.has_class("link-row")).is_empty());
    }

    #[test]
    fn test_education_in_registry_order() {
        let reg = registry();
        let node = education(&reg.education);
        let courses: Vec<String> = node
            .find_all(|el| el.tag == "h3")
            .iter()
            .map(|el| el.text_content())
            .collect();

        assert_eq!(
            courses,
            vec![
                "Tecnólogo em Análise e Desenvolvimento de Sistemas",
                "Bootcamp Desenvolvedor Web Full Stack (Java)",
            ]
        );
    }

    #[test]
    fn test_contact_email_target() {
        let node = contact(&registry().contact);
        let email = node
            .find_all(|el| el.tag == "a" && el.text_content().contains("E-mail"))[0];

        assert_eq!(email.get_attr("href"), Some("mailto:lucasbarbato80@gmail.com"));
        assert_eq!(email.get_attr("target"), None);
    }

    #[test]
    fn test_contact_link_targets() {
        let reg = registry();
        let node = contact(&reg.contact);
        let hrefs: Vec<&str> = node
            .find_all(|el| el.tag == "a")
            .iter()
            .filter_map(|el| el.get_attr("href"))
            .collect();

        assert_eq!(
            hrefs,
            vec![
                "mailto:lucasbarbato80@gmail.com",
                "tel:+5511948930158",
                "https://www.linkedin.com/in/lucasbarbato/",
                "https://github.com/lucaolv",
            ]
        );
    }

    #[test]
    fn test_hero_quick_links() {
        let node = hero(&registry().contact);

        assert_eq!(node.as_element().unwrap().get_attr("id"), Some("home"));
        assert!(node.text_content().contains("lucasbarbato80@gmail.com"));
        assert!(node.text_content().contains("São Paulo - SP"));
        let resume = node
            .find_all(|el| el.get_attr("href") == Some("https://flowcv.com/resume/235ke2r695"))[0];
        assert_eq!(resume.get_attr("target"), Some("_blank"));
        assert_eq!(
            node.find_all(|el| el.get_attr("href") == Some("#projects")).len(),
            1
        );
    }

    #[test]
    fn test_footer_text() {
        let node = footer(&registry().contact, 2031);
        assert_eq!(
            node.text_content(),
            "© 2031 Lucas Vinícius Barbato. Todos os direitos reservados."
        );
    }
}

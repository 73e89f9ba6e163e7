// 📇 Content Registry - the fixed portfolio data
// Every value shown on the page lives here. Nothing is loaded or mutated at runtime.

use crate::icons::Icon;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// ============================================================================
// SKILLS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Frontend,
    Backend,
    Testing,
    Db,
    Other,
}

impl SkillCategory {
    /// Display order on the page
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Testing,
        SkillCategory::Db,
        SkillCategory::Other,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "frontend",
            SkillCategory::Backend => "backend",
            SkillCategory::Testing => "testing",
            SkillCategory::Db => "db",
            SkillCategory::Other => "other",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Front-End",
            SkillCategory::Backend => "Back-End",
            SkillCategory::Testing => "Testes",
            SkillCategory::Db => "Banco de Dados",
            SkillCategory::Other => "Outros",
        }
    }
}

/// One category and its skills, in declared order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: SkillCategory,
    pub skills: Vec<String>,
}

// ============================================================================
// EXPERIENCE / PROJECTS / EDUCATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub href: String,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    pub tech: Vec<String>,
    /// Empty means the card has no links row
    #[serde(default)]
    pub links: Vec<ProjectLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub course: String,
    pub organization: String,
    pub period: String,
}

// ============================================================================
// CONTACT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub title: String,
    /// `mailto:` URI
    pub email: String,
    /// `tel:` URI
    pub phone: String,
    pub phone_label: String,
    pub location: String,
    pub linkedin: String,
    pub github: String,
    pub resume: String,
}

impl ContactInfo {
    /// Bare address behind the `mailto:` URI
    pub fn email_address(&self) -> &str {
        self.email.strip_prefix("mailto:").unwrap_or(&self.email)
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

/// ContentRegistry - the five read-only collections behind the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRegistry {
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    pub contact: ContactInfo,
}

static GLOBAL: OnceLock<ContentRegistry> = OnceLock::new();

impl ContentRegistry {
    /// Process-wide registry, built on first access and never reloaded
    pub fn global() -> &'static ContentRegistry {
        GLOBAL.get_or_init(ContentRegistry::fixture)
    }

    /// Skills of one category in declared order
    pub fn skills(&self, category: SkillCategory) -> &[String] {
        self.skills
            .iter()
            .find(|group| group.category == category)
            .map(|group| group.skills.as_slice())
            .unwrap_or(&[])
    }

    /// The data shipped on the page
    pub fn fixture() -> Self {
        ContentRegistry {
            skills: vec![
                group(
                    SkillCategory::Frontend,
                    &[
                        "JavaScript",
                        "TypeScript",
                        "Vue.js",
                        "Nuxt.js",
                        "React",
                        "HTML",
                        "CSS",
                        "TailwindCSS",
                    ],
                ),
                group(
                    SkillCategory::Backend,
                    &["Node.js", "Java", "Spring Boot", "Python", "REST APIs", "GraphQL"],
                ),
                group(SkillCategory::Testing, &["Cypress", "Jest", "JUnit", "Pytest"]),
                group(SkillCategory::Db, &["MySQL", "PostgreSQL", "MongoDB"]),
                group(
                    SkillCategory::Other,
                    &["Git/GitHub", "CMS (Strapi)", "SCRUM", "AI Foundations"],
                ),
            ],
            experience: vec![ExperienceEntry {
                company: "Hashdex".to_string(),
                role: "Desenvolvedor Front-End".to_string(),
                period: "09/2023 – 10/2024".to_string(),
                bullets: strings(&[
                    "Desenvolvimento e otimização de interfaces com Vue.js, Nuxt.js e TailwindCSS.",
                    "Testes end-to-end com Cypress garantindo qualidade de páginas e componentes.",
                    "Integração e personalização do CMS Strapi (conteúdo e controle de acesso).",
                    "Documentação técnica para reuso e evolução do produto.",
                ]),
            }],
            projects: vec![ProjectEntry {
                name: "Minas na Área".to_string(),
                description: "Rede social baseada na ODS 5 da ONU, promovendo igualdade de gênero e empoderamento feminino. Projeto em equipe apresentado na Gen Talents.".to_string(),
                tech: strings(&[
                    "React",
                    "TypeScript",
                    "TailwindCSS",
                    "Java",
                    "Spring Boot",
                    "Swagger",
                    "MySQL",
                    "JUnit",
                ]),
                links: vec![ProjectLink {
                    label: "Visitar".to_string(),
                    href: "https://minas-na-area.vercel.app/".to_string(),
                    icon: Icon::ExternalLink,
                }],
            }],
            education: vec![
                EducationEntry {
                    course: "Tecnólogo em Análise e Desenvolvimento de Sistemas".to_string(),
                    organization: "Universidade Cruzeiro do Sul".to_string(),
                    period: "07/2022 – 12/2024".to_string(),
                },
                EducationEntry {
                    course: "Bootcamp Desenvolvedor Web Full Stack (Java)".to_string(),
                    organization: "Generation Brasil".to_string(),
                    period: "05/2023 – 08/2023".to_string(),
                },
            ],
            contact: ContactInfo {
                name: "Lucas Vinícius Barbato".to_string(),
                title: "Desenvolvedor Full-Stack".to_string(),
                email: "mailto:lucasbarbato80@gmail.com".to_string(),
                phone: "tel:+5511948930158".to_string(),
                phone_label: "+55 11 94893-0158".to_string(),
                location: "São Paulo - SP".to_string(),
                linkedin: "https://www.linkedin.com/in/lucasbarbato/".to_string(),
                github: "https://github.com/lucaolv".to_string(),
                resume: "https://flowcv.com/resume/235ke2r695".to_string(),
            },
        }
    }
}

impl Default for ContentRegistry {
    fn default() -> Self {
        Self::fixture()
    }
}

fn group(category: SkillCategory, skills: &[&str]) -> SkillGroup {
    SkillGroup {
        category,
        skills: strings(skills),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

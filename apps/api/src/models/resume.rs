use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ────────────────────────────────────────────────────────────────────────────
// Identifiers
// ────────────────────────────────────────────────────────────────────────────

/// Opaque list-item identifier.
///
/// Fresh ids are UUID v4 strings. Ids read from storage or an import are kept
/// verbatim, so a record survives export → import with identical ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Record
// ────────────────────────────────────────────────────────────────────────────

/// The complete résumé tree. Replaced wholesale on every edit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeRecord {
    pub personal_info: PersonalInfo,
    pub profile: String,
    pub education: Vec<EducationItem>,
    pub work_experience: Vec<WorkExperienceItem>,
    pub projects: Vec<ProjectItem>,
    pub skills: Skills,
    pub certificates: Vec<CertificateItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub location: String,
    pub portfolio_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationItem {
    pub id: ItemId,
    pub period: String,
    pub degree: String,
    pub institution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkExperienceItem {
    pub id: ItemId,
    pub period: String,
    pub position: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectItem {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub points: Vec<String>,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CertificateItem {
    pub id: ItemId,
    pub title: String,
    pub issuer: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// The body sections of a résumé. The personal-info header is not a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Profile,
    Projects,
    Skills,
    Certificates,
    Education,
    WorkExperience,
}

impl SectionKind {
    /// Default display order shared by the preview and the structured exports.
    pub const DEFAULT_ORDER: [SectionKind; 6] = [
        SectionKind::Profile,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Certificates,
        SectionKind::Education,
        SectionKind::WorkExperience,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Profile => "Professional Summary",
            SectionKind::Projects => "Projects",
            SectionKind::Skills => "Skills",
            SectionKind::Certificates => "Certifications",
            SectionKind::Education => "Education",
            SectionKind::WorkExperience => "Work Experience",
        }
    }

    /// Normalizes a caller-supplied order: duplicates are dropped and missing
    /// sections are appended in default order, so each kind appears exactly once.
    pub fn normalize_order(order: &[SectionKind]) -> Vec<SectionKind> {
        let mut out: Vec<SectionKind> = Vec::with_capacity(Self::DEFAULT_ORDER.len());
        for kind in order.iter().chain(Self::DEFAULT_ORDER.iter()) {
            if !out.contains(kind) {
                out.push(*kind);
            }
        }
        out
    }
}

impl ResumeRecord {
    /// Whether a body section has at least one non-blank leaf.
    pub fn section_has_content(&self, kind: SectionKind) -> bool {
        match kind {
            SectionKind::Profile => has_text(&self.profile),
            SectionKind::Projects => self.projects.iter().any(|item| item.has_content()),
            SectionKind::Skills => self.skills.has_content(),
            SectionKind::Certificates => self.certificates.iter().any(|item| item.has_content()),
            SectionKind::Education => self.education.iter().any(|item| item.has_content()),
            SectionKind::WorkExperience => {
                self.work_experience.iter().any(|item| item.has_content())
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Blank handling
// ────────────────────────────────────────────────────────────────────────────

/// True when the value has at least one non-whitespace character.
pub fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn opt_has_text(value: Option<&String>) -> bool {
    value.is_some_and(|v| has_text(v))
}

/// Non-blank entries of a free-text list, trimmed, in order.
pub fn non_blank(values: &[String]) -> Vec<&str> {
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Whether an item carries at least one non-blank leaf. The id never counts.
pub trait HasContent {
    fn has_content(&self) -> bool;
}

impl HasContent for PersonalInfo {
    fn has_content(&self) -> bool {
        has_text(&self.name)
            || has_text(&self.email)
            || has_text(&self.location)
            || has_text(&self.portfolio_url)
            || opt_has_text(self.phone.as_ref())
            || opt_has_text(self.linkedin.as_ref())
            || opt_has_text(self.github.as_ref())
    }
}

impl HasContent for EducationItem {
    fn has_content(&self) -> bool {
        has_text(&self.period)
            || has_text(&self.degree)
            || has_text(&self.institution)
            || opt_has_text(self.details.as_ref())
            || opt_has_text(self.gpa.as_ref())
    }
}

impl HasContent for WorkExperienceItem {
    fn has_content(&self) -> bool {
        has_text(&self.period)
            || has_text(&self.position)
            || has_text(&self.company)
            || opt_has_text(self.location.as_ref())
            || !non_blank(&self.points).is_empty()
    }
}

impl HasContent for ProjectItem {
    fn has_content(&self) -> bool {
        has_text(&self.title)
            || has_text(&self.description)
            || opt_has_text(self.link.as_ref())
            || !non_blank(&self.points).is_empty()
            || !non_blank(&self.technologies).is_empty()
    }
}

impl HasContent for CertificateItem {
    fn has_content(&self) -> bool {
        has_text(&self.title)
            || has_text(&self.issuer)
            || has_text(&self.year)
            || opt_has_text(self.credential_id.as_ref())
            || opt_has_text(self.link.as_ref())
    }
}

impl HasContent for Skills {
    fn has_content(&self) -> bool {
        !non_blank(&self.technical).is_empty()
            || !non_blank(&self.soft).is_empty()
            || !non_blank(&self.languages).is_empty()
    }
}

/// Items of a list that carry content, in order.
pub fn with_content<T: HasContent>(items: &[T]) -> Vec<&T> {
    items.iter().filter(|item| item.has_content()).collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Built-in records
// ────────────────────────────────────────────────────────────────────────────

impl ResumeRecord {
    /// The blank record used by the "reset" action.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The example record loaded on first start and by the "load example" action.
    pub fn example() -> Self {
        Self {
            personal_info: PersonalInfo {
                name: "Alexander Mitchell".into(),
                email: "alex.mitchell@email.com".into(),
                phone: Some("+1 (555) 123-4567".into()),
                location: "San Francisco, CA".into(),
                portfolio_url: "alexandermitchell.dev".into(),
                linkedin: Some("linkedin.com/in/alexandermitchell".into()),
                github: Some("github.com/alexmitchell".into()),
            },
            profile: "Results-driven software engineer with 5+ years of experience in \
                      full-stack development. Specialized in building scalable web \
                      applications using modern frameworks and cloud technologies. Proven \
                      track record of delivering high-quality solutions that improve user \
                      experience and drive business growth."
                .into(),
            education: vec![
                EducationItem {
                    id: "1".into(),
                    period: "2016 - 2020".into(),
                    degree: "Bachelor of Science in Computer Science".into(),
                    institution: "Stanford University".into(),
                    details: Some(
                        "GPA: 3.8/4.0 | Dean's List | Focus: Software Engineering & AI".into(),
                    ),
                    gpa: Some("3.8".into()),
                },
                EducationItem {
                    id: "2".into(),
                    period: "2014 - 2016".into(),
                    degree: "Associate Degree in Information Technology".into(),
                    institution: "Community College of San Francisco".into(),
                    details: Some("Honors Graduate | GPA: 3.9/4.0".into()),
                    gpa: None,
                },
            ],
            work_experience: vec![
                WorkExperienceItem {
                    id: "1".into(),
                    period: "2022 - Present".into(),
                    position: "Senior Software Engineer".into(),
                    company: "TechCorp Inc.".into(),
                    location: Some("San Francisco, CA".into()),
                    points: strings(&[
                        "Led development of microservices architecture serving 2M+ daily active users",
                        "Reduced application load time by 40% through code optimization and caching strategies",
                        "Mentored team of 5 junior developers and conducted code reviews",
                        "Implemented CI/CD pipeline reducing deployment time by 60%",
                    ]),
                },
                WorkExperienceItem {
                    id: "2".into(),
                    period: "2020 - 2022".into(),
                    position: "Full Stack Developer".into(),
                    company: "StartupVenture LLC".into(),
                    location: Some("Palo Alto, CA".into()),
                    points: strings(&[
                        "Built responsive web applications using React, Node.js, and PostgreSQL",
                        "Collaborated with UX team to implement intuitive user interfaces",
                        "Integrated third-party APIs and payment processing systems",
                        "Participated in agile development process and sprint planning",
                    ]),
                },
            ],
            projects: vec![
                ProjectItem {
                    id: "1".into(),
                    title: "E-Commerce Analytics Platform".into(),
                    description: "Real-time analytics dashboard for e-commerce businesses with \
                                  advanced data visualization."
                        .into(),
                    points: strings(&[
                        "Architected scalable backend using Node.js and MongoDB",
                        "Implemented real-time data processing with WebSocket connections",
                        "Created interactive dashboards using D3.js and Chart.js",
                        "Achieved 99.9% uptime with automated monitoring and alerts",
                    ]),
                    technologies: strings(&[
                        "React", "Node.js", "MongoDB", "WebSocket", "D3.js", "AWS",
                    ]),
                    link: Some("github.com/alexmitchell/ecommerce-analytics".into()),
                },
                ProjectItem {
                    id: "2".into(),
                    title: "Task Management System".into(),
                    description: "Collaborative project management tool with real-time updates \
                                  and team communication features."
                        .into(),
                    points: strings(&[
                        "Designed RESTful API with authentication and authorization",
                        "Implemented real-time collaboration using Socket.io",
                        "Built responsive UI with Material-UI components",
                    ]),
                    technologies: strings(&[
                        "TypeScript",
                        "Express",
                        "PostgreSQL",
                        "Socket.io",
                        "Docker",
                    ]),
                    link: Some("github.com/alexmitchell/task-manager".into()),
                },
            ],
            skills: Skills {
                technical: strings(&[
                    "JavaScript",
                    "TypeScript",
                    "Python",
                    "Java",
                    "React",
                    "Node.js",
                    "Express",
                    "Next.js",
                    "PostgreSQL",
                    "MongoDB",
                    "Redis",
                    "AWS",
                    "Docker",
                    "Kubernetes",
                    "Git",
                ]),
                soft: strings(&[
                    "Leadership",
                    "Problem Solving",
                    "Communication",
                    "Agile Methodology",
                    "Team Collaboration",
                    "Critical Thinking",
                ]),
                languages: vec![],
            },
            certificates: vec![
                CertificateItem {
                    id: "1".into(),
                    title: "AWS Certified Solutions Architect".into(),
                    issuer: "Amazon Web Services".into(),
                    year: "2023".into(),
                    credential_id: Some("AWS-CSA-2023-12345".into()),
                    link: None,
                },
                CertificateItem {
                    id: "2".into(),
                    title: "Professional Scrum Master I".into(),
                    issuer: "Scrum.org".into(),
                    year: "2022".into(),
                    credential_id: Some("PSM-I-987654".into()),
                    link: None,
                },
                CertificateItem {
                    id: "3".into(),
                    title: "MongoDB Certified Developer".into(),
                    issuer: "MongoDB University".into(),
                    year: "2021".into(),
                    credential_id: None,
                    link: None,
                },
            ],
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        assert_ne!(ItemId::generate(), ItemId::generate());
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_value(ResumeRecord::example()).unwrap();
        assert!(json.get("personalInfo").is_some());
        assert!(json.get("workExperience").is_some());
        assert!(json["personalInfo"].get("portfolioUrl").is_some());
        assert_eq!(json["certificates"][0]["credentialId"], "AWS-CSA-2023-12345");
    }

    #[test]
    fn test_absent_optional_sections_default_to_empty() {
        let json = r#"{
            "personalInfo": {"name": "", "email": "", "location": "", "portfolioUrl": ""},
            "profile": "",
            "education": [],
            "projects": [],
            "skills": {"technical": [], "soft": []},
            "certificates": []
        }"#;
        let record: ResumeRecord = serde_json::from_str(json).unwrap();
        assert!(record.work_experience.is_empty());
        assert!(record.skills.languages.is_empty());
        assert_eq!(record, ResumeRecord::empty());
    }

    #[test]
    fn test_none_fields_are_omitted_on_the_wire() {
        let json = serde_json::to_value(ResumeRecord::empty()).unwrap();
        assert!(json["personalInfo"].get("phone").is_none());
    }

    #[test]
    fn test_whitespace_is_blank() {
        assert!(!has_text("   \t"));
        assert!(has_text(" a "));
        assert_eq!(non_blank(&strings(&["", " x ", "  "])), vec!["x"]);
    }

    #[test]
    fn test_item_with_only_blank_points_has_no_content() {
        let item = WorkExperienceItem {
            id: ItemId::generate(),
            points: strings(&["", "  "]),
            ..Default::default()
        };
        assert!(!item.has_content());
    }

    #[test]
    fn test_normalize_order_dedups_and_fills() {
        let order = SectionKind::normalize_order(&[
            SectionKind::Education,
            SectionKind::Education,
            SectionKind::Skills,
        ]);
        assert_eq!(order.len(), 6);
        assert_eq!(order[0], SectionKind::Education);
        assert_eq!(order[1], SectionKind::Skills);
        assert_eq!(order[2], SectionKind::Profile);
    }

    #[test]
    fn test_example_has_content_everywhere() {
        let r = ResumeRecord::example();
        assert!(r.personal_info.has_content());
        assert!(r.skills.has_content());
        assert_eq!(with_content(&r.projects).len(), 2);
    }
}

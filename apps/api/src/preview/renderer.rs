//! Record → Document renderer.
//!
//! # Rules
//! - a section renders iff it has a non-blank leaf (blank = empty or whitespace)
//! - blank items, blank points and blank tags are dropped before rendering
//! - inside a rendered item, a blank display field renders nothing (`Omit`) or
//!   a named placeholder (`Placeholder`)
//! - sections follow `RenderOptions::section_order`, each at most once
//! - no rendered section → a single empty-state block after the header

use crate::models::resume::{
    has_text, non_blank, with_content, CertificateItem, EducationItem, HasContent, PersonalInfo,
    ProjectItem, ResumeRecord, SectionKind, Skills, WorkExperienceItem,
};
use crate::preview::{BlankPolicy, Block, Document, RenderOptions, TextStyle};

pub const EMPTY_STATE_TITLE: &str = "Resume is empty";
pub const EMPTY_STATE_HINT: &str = "Start editing to build your professional resume";

pub fn render(record: &ResumeRecord, options: &RenderOptions) -> Document {
    let r = Renderer {
        policy: options.blank_policy,
    };
    let mut blocks = r.header(&record.personal_info);

    let sections: Vec<Block> = SectionKind::normalize_order(&options.section_order)
        .into_iter()
        .filter(|kind| record.section_has_content(*kind))
        .map(|kind| Block::Section {
            kind,
            title: kind.title().to_string(),
            blocks: r.section_body(record, kind),
        })
        .collect();

    if sections.is_empty() {
        blocks.push(Block::Placeholder {
            title: EMPTY_STATE_TITLE.to_string(),
            hint: EMPTY_STATE_HINT.to_string(),
        });
    } else {
        blocks.extend(sections);
    }

    Document { blocks }
}

struct Renderer {
    policy: BlankPolicy,
}

impl Renderer {
    /// Resolves a display field to its rendered text and style, or nothing.
    fn field(&self, value: &str, placeholder: &str) -> Option<(String, TextStyle)> {
        if has_text(value) {
            Some((value.trim().to_string(), TextStyle::Normal))
        } else if self.policy == BlankPolicy::Placeholder {
            Some((placeholder.to_string(), TextStyle::Placeholder))
        } else {
            None
        }
    }

    fn heading(&self, level: u8, value: &str, placeholder: &str) -> Option<Block> {
        self.field(value, placeholder)
            .map(|(text, style)| Block::Heading { level, text, style })
    }

    fn paragraph(&self, value: &str, placeholder: &str, muted: bool) -> Option<Block> {
        self.field(value, placeholder).map(|(text, style)| Block::Paragraph {
            text,
            style: match style {
                TextStyle::Normal if muted => TextStyle::Muted,
                other => other,
            },
        })
    }

    /// Joins the resolved parts with `sep`; fully blank under `Omit` yields nothing.
    fn joined(&self, parts: &[(&str, &str)], sep: &str, muted: bool) -> Option<Block> {
        let resolved: Vec<(String, TextStyle)> = parts
            .iter()
            .filter_map(|(value, placeholder)| self.field(value, placeholder))
            .collect();
        if resolved.is_empty() {
            return None;
        }
        let all_placeholder = resolved.iter().all(|(_, s)| *s == TextStyle::Placeholder);
        let text = resolved
            .into_iter()
            .map(|(t, _)| t)
            .collect::<Vec<_>>()
            .join(sep);
        let style = if all_placeholder {
            TextStyle::Placeholder
        } else if muted {
            TextStyle::Muted
        } else {
            TextStyle::Normal
        };
        Some(Block::Paragraph { text, style })
    }

    fn header(&self, info: &PersonalInfo) -> Vec<Block> {
        let mut blocks = Vec::new();
        if self.policy == BlankPolicy::Omit && !info.has_content() {
            return blocks;
        }

        blocks.extend(self.heading(1, &info.name, "Your Name"));

        let contact = present(&[
            Some(info.email.as_str()),
            info.phone.as_deref(),
            Some(info.location.as_str()),
        ]);
        if !contact.is_empty() {
            blocks.push(Block::Paragraph {
                text: contact.join(" | "),
                style: TextStyle::Muted,
            });
        }

        let links = present(&[
            Some(info.portfolio_url.as_str()),
            info.linkedin.as_deref(),
            info.github.as_deref(),
        ]);
        if !links.is_empty() {
            blocks.push(Block::Paragraph {
                text: links.join(" | "),
                style: TextStyle::Muted,
            });
        }
        blocks
    }

    fn section_body(&self, record: &ResumeRecord, kind: SectionKind) -> Vec<Block> {
        match kind {
            SectionKind::Profile => vec![Block::Paragraph {
                text: record.profile.trim().to_string(),
                style: TextStyle::Normal,
            }],
            SectionKind::Projects => with_content(&record.projects)
                .into_iter()
                .flat_map(|p| self.project(p))
                .collect(),
            SectionKind::Skills => self.skills(&record.skills),
            SectionKind::Certificates => with_content(&record.certificates)
                .into_iter()
                .flat_map(|c| self.certificate(c))
                .collect(),
            SectionKind::Education => with_content(&record.education)
                .into_iter()
                .flat_map(|e| self.education(e))
                .collect(),
            SectionKind::WorkExperience => with_content(&record.work_experience)
                .into_iter()
                .flat_map(|w| self.work(w))
                .collect(),
        }
    }

    fn education(&self, item: &EducationItem) -> Vec<Block> {
        let mut blocks = Vec::new();
        blocks.extend(self.heading(3, &item.degree, "Degree"));
        blocks.extend(self.paragraph(&item.period, "Period", true));
        blocks.extend(self.paragraph(&item.institution, "Institution", false));
        if let Some(details) = item.details.as_deref().filter(|d| has_text(d)) {
            blocks.push(Block::Paragraph {
                text: details.trim().to_string(),
                style: TextStyle::Muted,
            });
        }
        if let Some(gpa) = item.gpa.as_deref().filter(|g| has_text(g)) {
            blocks.push(Block::Paragraph {
                text: format!("GPA: {}", gpa.trim()),
                style: TextStyle::Muted,
            });
        }
        blocks
    }

    fn work(&self, item: &WorkExperienceItem) -> Vec<Block> {
        let mut blocks = Vec::new();
        blocks.extend(self.heading(3, &item.position, "Position"));
        blocks.extend(self.paragraph(&item.period, "Period", true));
        let mut parts = vec![(item.company.as_str(), "Company")];
        if let Some(location) = item.location.as_deref().filter(|l| has_text(l)) {
            parts.push((location, ""));
        }
        blocks.extend(self.joined(&parts, " • ", false));
        push_list(&mut blocks, &item.points);
        blocks
    }

    fn project(&self, item: &ProjectItem) -> Vec<Block> {
        let mut blocks = Vec::new();
        blocks.extend(self.heading(3, &item.title, "Project Title"));
        blocks.extend(self.paragraph(&item.description, "Project description...", false));
        push_list(&mut blocks, &item.points);
        let tags = owned(non_blank(&item.technologies));
        if !tags.is_empty() {
            blocks.push(Block::TagGroup { label: None, tags });
        }
        if let Some(link) = item.link.as_deref().filter(|l| has_text(l)) {
            blocks.push(Block::Paragraph {
                text: link.trim().to_string(),
                style: TextStyle::Muted,
            });
        }
        blocks
    }

    fn skills(&self, skills: &Skills) -> Vec<Block> {
        [
            ("Technical Skills", &skills.technical),
            ("Soft Skills", &skills.soft),
            ("Languages", &skills.languages),
        ]
        .into_iter()
        .filter_map(|(label, values)| {
            let tags = owned(non_blank(values));
            (!tags.is_empty()).then(|| Block::TagGroup {
                label: Some(label.to_string()),
                tags,
            })
        })
        .collect()
    }

    fn certificate(&self, item: &CertificateItem) -> Vec<Block> {
        let mut blocks = Vec::new();
        blocks.extend(self.heading(3, &item.title, "Certificate Title"));
        blocks.extend(self.joined(
            &[(item.issuer.as_str(), "Issuer"), (item.year.as_str(), "Year")],
            " • ",
            false,
        ));
        if let Some(id) = item.credential_id.as_deref().filter(|c| has_text(c)) {
            blocks.push(Block::Paragraph {
                text: format!("ID: {}", id.trim()),
                style: TextStyle::Muted,
            });
        }
        if let Some(link) = item.link.as_deref().filter(|l| has_text(l)) {
            blocks.push(Block::Paragraph {
                text: link.trim().to_string(),
                style: TextStyle::Muted,
            });
        }
        blocks
    }
}

fn present(values: &[Option<&str>]) -> Vec<String> {
    values
        .iter()
        .flatten()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(String::from)
        .collect()
}

fn owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(String::from).collect()
}

fn push_list(blocks: &mut Vec<Block>, points: &[String]) {
    let items = owned(non_blank(points));
    if !items.is_empty() {
        blocks.push(Block::List { items });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{education, projects};
    use crate::models::resume::ItemId;
    use proptest::prelude::*;

    fn strict() -> RenderOptions {
        RenderOptions::default()
    }

    fn lenient() -> RenderOptions {
        RenderOptions::with_placeholders(true)
    }

    fn section<'a>(doc: &'a Document, wanted: SectionKind) -> &'a [Block] {
        doc.blocks
            .iter()
            .find_map(|b| match b {
                Block::Section { kind, blocks, .. } if *kind == wanted => Some(blocks.as_slice()),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn test_name_only_renders_header_and_empty_state() {
        let mut record = ResumeRecord::empty();
        record.personal_info.name = "Jane Doe".into();
        let doc = render(&record, &strict());
        assert_eq!(
            doc.blocks,
            vec![
                Block::Heading {
                    level: 1,
                    text: "Jane Doe".into(),
                    style: TextStyle::Normal
                },
                Block::Placeholder {
                    title: EMPTY_STATE_TITLE.into(),
                    hint: EMPTY_STATE_HINT.into()
                },
            ]
        );
    }

    #[test]
    fn test_blank_record_strict_is_only_empty_state() {
        let doc = render(&ResumeRecord::empty(), &strict());
        assert_eq!(doc.blocks.len(), 1);
        assert!(doc.is_empty_state());
    }

    #[test]
    fn test_blank_record_lenient_shows_name_placeholder() {
        let doc = render(&ResumeRecord::empty(), &lenient());
        assert_eq!(
            doc.blocks[0],
            Block::Heading {
                level: 1,
                text: "Your Name".into(),
                style: TextStyle::Placeholder
            }
        );
        assert!(doc.is_empty_state());
    }

    #[test]
    fn test_example_renders_every_section_once_in_order() {
        let doc = render(&ResumeRecord::example(), &strict());
        assert_eq!(doc.sections(), SectionKind::DEFAULT_ORDER.to_vec());
        assert!(!doc.is_empty_state());
    }

    #[test]
    fn test_blank_items_do_not_make_a_section() {
        let mut record = ResumeRecord::empty();
        record.education = education::add(&[]);
        record.projects = projects::add(&[]);
        record.skills.soft = vec!["  ".into()];
        let doc = render(&record, &lenient());
        assert!(doc.sections().is_empty());
        assert!(doc.is_empty_state());
    }

    #[test]
    fn test_placeholder_policy_fills_blank_fields_in_rendered_items() {
        let mut record = ResumeRecord::empty();
        record.education = vec![EducationItem {
            id: ItemId::generate(),
            institution: "ETH Zürich".into(),
            ..Default::default()
        }];

        let strict_doc = render(&record, &strict());
        assert_eq!(
            section(&strict_doc, SectionKind::Education),
            &[Block::Paragraph {
                text: "ETH Zürich".into(),
                style: TextStyle::Normal
            }]
        );

        let lenient_doc = render(&record, &lenient());
        let body = section(&lenient_doc, SectionKind::Education);
        assert_eq!(
            body[0],
            Block::Heading {
                level: 3,
                text: "Degree".into(),
                style: TextStyle::Placeholder
            }
        );
        assert_eq!(body.len(), 3);
    }

    #[test]
    fn test_blank_points_and_tags_are_dropped() {
        let mut record = ResumeRecord::empty();
        record.projects = vec![ProjectItem {
            id: ItemId::generate(),
            title: "Lexer".into(),
            points: vec!["".into(), "Fast".into(), " ".into()],
            technologies: vec!["Rust".into(), "".into()],
            ..Default::default()
        }];
        let doc = render(&record, &strict());
        let body = section(&doc, SectionKind::Projects);
        assert!(body.contains(&Block::List {
            items: vec!["Fast".into()]
        }));
        assert!(body.contains(&Block::TagGroup {
            label: None,
            tags: vec!["Rust".into()]
        }));
    }

    #[test]
    fn test_custom_order_is_respected() {
        let options = RenderOptions {
            section_order: vec![SectionKind::WorkExperience, SectionKind::Education],
            ..RenderOptions::default()
        };
        let doc = render(&ResumeRecord::example(), &options);
        let sections = doc.sections();
        assert_eq!(sections[0], SectionKind::WorkExperience);
        assert_eq!(sections[1], SectionKind::Education);
        assert_eq!(sections.len(), 6);
    }

    #[test]
    fn test_work_location_joined_with_company() {
        let doc = render(&ResumeRecord::example(), &strict());
        let body = section(&doc, SectionKind::WorkExperience);
        assert!(body.contains(&Block::Paragraph {
            text: "TechCorp Inc. • San Francisco, CA".into(),
            style: TextStyle::Normal
        }));
    }

    #[test]
    fn test_optional_only_fields_render_a_body() {
        let mut record = ResumeRecord::empty();
        record.education = vec![EducationItem {
            id: ItemId::generate(),
            gpa: Some("3.9".into()),
            ..Default::default()
        }];
        record.certificates = vec![CertificateItem {
            id: ItemId::generate(),
            link: Some("https://x".into()),
            ..Default::default()
        }];
        let doc = render(&record, &strict());
        assert_eq!(
            section(&doc, SectionKind::Education),
            &[Block::Paragraph {
                text: "GPA: 3.9".into(),
                style: TextStyle::Muted
            }]
        );
        assert_eq!(
            section(&doc, SectionKind::Certificates),
            &[Block::Paragraph {
                text: "https://x".into(),
                style: TextStyle::Muted
            }]
        );
    }

    fn arb_text() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), Just("  ".to_string()), "[a-z]{1,6}"]
    }

    proptest! {
        #[test]
        fn prop_sections_present_iff_content(
            profile in arb_text(),
            degree in arb_text(),
            gpa in arb_text(),
            point in arb_text(),
            skill in arb_text(),
            cert_link in arb_text(),
            placeholders in any::<bool>(),
        ) {
            let mut record = ResumeRecord::empty();
            record.profile = profile.clone();
            record.education = vec![EducationItem {
                id: ItemId::generate(),
                degree: degree.clone(),
                gpa: Some(gpa.clone()),
                ..Default::default()
            }];
            record.work_experience = vec![WorkExperienceItem {
                id: ItemId::generate(),
                points: vec![point.clone()],
                ..Default::default()
            }];
            record.skills.technical = vec![skill.clone()];
            record.certificates = vec![CertificateItem {
                id: ItemId::generate(),
                link: Some(cert_link.clone()),
                ..Default::default()
            }];

            let doc = render(&record, &RenderOptions::with_placeholders(placeholders));
            let sections = doc.sections();
            for kind in SectionKind::DEFAULT_ORDER {
                let count = sections.iter().filter(|k| **k == kind).count();
                prop_assert!(count <= 1);
                prop_assert_eq!(count == 1, record.section_has_content(kind));
            }
            for block in &doc.blocks {
                if let Block::Section { blocks, .. } = block {
                    prop_assert!(!blocks.is_empty());
                }
            }
            prop_assert_eq!(sections.contains(&SectionKind::Profile), has_text(&profile));
            prop_assert_eq!(
                sections.contains(&SectionKind::Education),
                has_text(&degree) || has_text(&gpa)
            );
            prop_assert_eq!(sections.contains(&SectionKind::WorkExperience), has_text(&point));
            prop_assert_eq!(sections.contains(&SectionKind::Skills), has_text(&skill));
            prop_assert_eq!(sections.contains(&SectionKind::Certificates), has_text(&cert_link));
            prop_assert_eq!(doc.is_empty_state(), sections.is_empty());
        }
    }
}

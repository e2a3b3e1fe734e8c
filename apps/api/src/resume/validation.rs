//! Structural completeness: which required display fields are still blank.
//!
//! This is a hint for the form (the asterisk fields), not validation: any
//! string, including an empty one, is accepted everywhere and nothing is rejected.

use serde::{Deserialize, Serialize};

use crate::models::resume::{has_text, ItemId, ResumeRecord, SectionKind};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MissingField {
    /// `None` for the personal-info header.
    pub section: Option<SectionKind>,
    pub item_id: Option<ItemId>,
    pub field: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequiredFieldsReport {
    pub complete: bool,
    pub missing: Vec<MissingField>,
}

pub fn check_required_fields(record: &ResumeRecord) -> RequiredFieldsReport {
    let mut missing = Vec::new();

    let info = &record.personal_info;
    for (field, value) in [
        ("name", &info.name),
        ("email", &info.email),
        ("location", &info.location),
    ] {
        if !has_text(value) {
            missing.push(MissingField {
                section: None,
                item_id: None,
                field: field.to_string(),
            });
        }
    }

    for item in &record.education {
        push_blank(
            &mut missing,
            SectionKind::Education,
            &item.id,
            &[
                ("period", &item.period),
                ("degree", &item.degree),
                ("institution", &item.institution),
            ],
        );
    }

    for item in &record.work_experience {
        push_blank(
            &mut missing,
            SectionKind::WorkExperience,
            &item.id,
            &[
                ("period", &item.period),
                ("position", &item.position),
                ("company", &item.company),
            ],
        );
    }

    for item in &record.projects {
        push_blank(
            &mut missing,
            SectionKind::Projects,
            &item.id,
            &[("title", &item.title)],
        );
    }

    for item in &record.certificates {
        push_blank(
            &mut missing,
            SectionKind::Certificates,
            &item.id,
            &[
                ("title", &item.title),
                ("issuer", &item.issuer),
                ("year", &item.year),
            ],
        );
    }

    RequiredFieldsReport {
        complete: missing.is_empty(),
        missing,
    }
}

fn push_blank(
    missing: &mut Vec<MissingField>,
    section: SectionKind,
    id: &ItemId,
    fields: &[(&str, &String)],
) {
    for (field, value) in fields {
        if !has_text(value) {
            missing.push(MissingField {
                section: Some(section),
                item_id: Some(id.clone()),
                field: field.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{certificates, projects};

    #[test]
    fn test_example_is_complete() {
        let report = check_required_fields(&ResumeRecord::example());
        assert!(report.complete, "missing: {:?}", report.missing);
    }

    #[test]
    fn test_empty_record_lacks_contact_fields() {
        let report = check_required_fields(&ResumeRecord::empty());
        assert!(!report.complete);
        let fields: Vec<_> = report.missing.iter().map(|m| m.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "location"]);
    }

    #[test]
    fn test_new_items_report_their_blank_fields() {
        let mut record = ResumeRecord::example();
        record.projects = projects::add(&[]);
        record.certificates = certificates::add(&[]);
        let report = check_required_fields(&record);

        let project_id = record.projects[0].id.clone();
        assert!(report.missing.contains(&MissingField {
            section: Some(SectionKind::Projects),
            item_id: Some(project_id),
            field: "title".into(),
        }));
        // A fresh certificate is pre-dated, so only title and issuer are blank.
        let cert_fields: Vec<_> = report
            .missing
            .iter()
            .filter(|m| m.section == Some(SectionKind::Certificates))
            .map(|m| m.field.as_str())
            .collect();
        assert_eq!(cert_fields, vec!["title", "issuer"]);
    }
}

//! Plain-text export: header lines, then one `=`-bannered block per section
//! in preview order. Blank sections, items and entries are skipped.

use std::fmt::Write;

use crate::export::{ExportError, ExportFormat, ExportedFile};
use crate::models::resume::{has_text, non_blank, with_content, ResumeRecord, SectionKind};

const BANNER_WIDTH: usize = 60;

pub fn encode(record: &ResumeRecord, order: &[SectionKind]) -> Result<ExportedFile, ExportError> {
    let text = render_text(record, order);
    Ok(ExportedFile::new(
        ExportFormat::Text,
        &record.personal_info.name,
        text.into_bytes(),
    ))
}

pub fn render_text(record: &ResumeRecord, order: &[SectionKind]) -> String {
    let mut out = String::new();
    let info = &record.personal_info;

    if has_text(&info.name) {
        line(&mut out, info.name.trim());
    }
    let contact = joined(
        &[
            Some(info.email.as_str()),
            info.phone.as_deref(),
            Some(info.location.as_str()),
        ],
        " | ",
    );
    if !contact.is_empty() {
        line(&mut out, &contact);
    }
    for (label, value) in [
        ("Portfolio", Some(info.portfolio_url.as_str())),
        ("LinkedIn", info.linkedin.as_deref()),
        ("GitHub", info.github.as_deref()),
    ] {
        if let Some(value) = value.filter(|v| has_text(v)) {
            line(&mut out, &format!("{label}: {}", value.trim()));
        }
    }
    out.push('\n');

    for kind in SectionKind::normalize_order(order) {
        if !record.section_has_content(kind) {
            continue;
        }
        banner(&mut out, kind);
        section(&mut out, record, kind);
        out.push('\n');
    }

    out
}

fn section(out: &mut String, record: &ResumeRecord, kind: SectionKind) {
    match kind {
        SectionKind::Profile => line(out, record.profile.trim()),
        SectionKind::WorkExperience => {
            for job in with_content(&record.work_experience) {
                out.push('\n');
                line_if_any(out, &joined(&[Some(&job.position), Some(&job.company)], " | "));
                line_if_any(
                    out,
                    &joined(&[Some(job.period.as_str()), job.location.as_deref()], " | "),
                );
                bullets(out, &job.points);
            }
        }
        SectionKind::Education => {
            for edu in with_content(&record.education) {
                out.push('\n');
                line_if_any(out, &joined(&[Some(&edu.degree), Some(&edu.institution)], " | "));
                line_if_any(
                    out,
                    &joined(&[Some(edu.period.as_str()), edu.details.as_deref()], " | "),
                );
                if let Some(gpa) = edu.gpa.as_deref().filter(|g| has_text(g)) {
                    line(out, &format!("GPA: {}", gpa.trim()));
                }
            }
        }
        SectionKind::Projects => {
            for project in with_content(&record.projects) {
                out.push('\n');
                if has_text(&project.title) {
                    line(out, project.title.trim());
                }
                if has_text(&project.description) {
                    line(out, project.description.trim());
                }
                bullets(out, &project.points);
                let tech = non_blank(&project.technologies);
                if !tech.is_empty() {
                    line(out, &format!("Technologies: {}", tech.join(", ")));
                }
                if let Some(link) = project.link.as_deref().filter(|l| has_text(l)) {
                    line(out, &format!("Link: {}", link.trim()));
                }
            }
        }
        SectionKind::Skills => {
            out.push('\n');
            for (label, values) in [
                ("Technical", &record.skills.technical),
                ("Soft Skills", &record.skills.soft),
                ("Languages", &record.skills.languages),
            ] {
                let values = non_blank(values);
                if !values.is_empty() {
                    line(out, &format!("{label}: {}", values.join(", ")));
                }
            }
        }
        SectionKind::Certificates => {
            for cert in with_content(&record.certificates) {
                out.push('\n');
                line_if_any(
                    out,
                    &joined(
                        &[Some(&cert.title), Some(&cert.issuer), Some(&cert.year)],
                        " | ",
                    ),
                );
                if let Some(id) = cert.credential_id.as_deref().filter(|c| has_text(c)) {
                    line(out, &format!("Credential ID: {}", id.trim()));
                }
                if let Some(link) = cert.link.as_deref().filter(|l| has_text(l)) {
                    line(out, &format!("Link: {}", link.trim()));
                }
            }
        }
    }
}

fn banner(out: &mut String, kind: SectionKind) {
    let rule = "=".repeat(BANNER_WIDTH);
    line(out, &rule);
    line(out, &kind.title().to_uppercase());
    line(out, &rule);
}

fn bullets(out: &mut String, points: &[String]) {
    for point in non_blank(points) {
        line(out, &format!("  • {point}"));
    }
}

fn line(out: &mut String, text: &str) {
    let _ = writeln!(out, "{text}");
}

fn line_if_any(out: &mut String, text: &str) {
    if !text.is_empty() {
        line(out, text);
    }
}

fn joined<S: AsRef<str>>(parts: &[Option<S>], sep: &str) -> String {
    parts
        .iter()
        .flatten()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

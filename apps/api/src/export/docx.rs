//! Word document export built from record fields (not from the capture).
//! Sections follow the preview order; blank sections, items and entries are skipped.

use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, LineSpacing, Paragraph, Run};

use crate::export::{ExportError, ExportFormat, ExportedFile};
use crate::models::resume::{has_text, non_blank, with_content, ResumeRecord, SectionKind};

// Run sizes are in half-points.
const NAME_SIZE: usize = 36;
const HEADING_SIZE: usize = 26;

pub fn encode(record: &ResumeRecord, order: &[SectionKind]) -> Result<ExportedFile, ExportError> {
    let docx = build(record, order);
    let mut cursor = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut cursor)
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    Ok(ExportedFile::new(
        ExportFormat::Docx,
        &record.personal_info.name,
        cursor.into_inner(),
    ))
}

fn build(record: &ResumeRecord, order: &[SectionKind]) -> Docx {
    let mut paragraphs = header(record);
    for kind in SectionKind::normalize_order(order) {
        if !record.section_has_content(kind) {
            continue;
        }
        paragraphs.push(section_heading(kind));
        paragraphs.extend(section(record, kind));
    }
    paragraphs
        .into_iter()
        .fold(Docx::new(), |docx, p| docx.add_paragraph(p))
}

fn header(record: &ResumeRecord) -> Vec<Paragraph> {
    let info = &record.personal_info;
    let mut out = Vec::new();
    if has_text(&info.name) {
        out.push(
            Paragraph::new()
                .add_run(Run::new().add_text(info.name.trim()).bold().size(NAME_SIZE))
                .align(AlignmentType::Center)
                .line_spacing(LineSpacing::new().after(100)),
        );
    }
    let contact = [
        Some(info.email.as_str()),
        info.phone.as_deref(),
        Some(info.location.as_str()),
        Some(info.portfolio_url.as_str()),
        info.linkedin.as_deref(),
        info.github.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|v| !v.is_empty())
    .collect::<Vec<_>>()
    .join(" | ");
    if !contact.is_empty() {
        out.push(
            Paragraph::new()
                .add_run(Run::new().add_text(contact))
                .align(AlignmentType::Center)
                .line_spacing(LineSpacing::new().after(200)),
        );
    }
    out
}

fn section_heading(kind: SectionKind) -> Paragraph {
    Paragraph::new()
        .add_run(
            Run::new()
                .add_text(kind.title().to_uppercase())
                .bold()
                .size(HEADING_SIZE),
        )
        .line_spacing(LineSpacing::new().before(200).after(100))
}

/// Bold lead followed by plain ` | `-joined trailing parts; nothing when all are blank.
fn titled(lead: &str, rest: &[&str]) -> Option<Paragraph> {
    let tail: Vec<&str> = rest
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if !has_text(lead) && tail.is_empty() {
        return None;
    }
    let mut p = Paragraph::new().line_spacing(LineSpacing::new().before(100));
    if has_text(lead) {
        p = p.add_run(Run::new().add_text(lead.trim()).bold());
    }
    if !tail.is_empty() {
        let sep = if has_text(lead) { " | " } else { "" };
        p = p.add_run(Run::new().add_text(format!("{sep}{}", tail.join(" | "))));
    }
    Some(p)
}

fn italic_line(parts: &[&str]) -> Option<Paragraph> {
    let text = parts
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" | ");
    (!text.is_empty()).then(|| {
        Paragraph::new()
            .add_run(Run::new().add_text(text).italic())
            .line_spacing(LineSpacing::new().after(50))
    })
}

fn bullets(points: &[String]) -> impl Iterator<Item = Paragraph> + '_ {
    non_blank(points).into_iter().map(|point| {
        Paragraph::new()
            .add_run(Run::new().add_text(format!("• {point}")))
            .line_spacing(LineSpacing::new().after(50))
    })
}

fn labelled(label: &str, values: &[String]) -> Option<Paragraph> {
    let values = non_blank(values);
    (!values.is_empty()).then(|| {
        Paragraph::new()
            .add_run(Run::new().add_text(format!("{label}: ")).bold())
            .add_run(Run::new().add_text(values.join(", ")))
            .line_spacing(LineSpacing::new().after(100))
    })
}

fn section(record: &ResumeRecord, kind: SectionKind) -> Vec<Paragraph> {
    let mut out = Vec::new();
    match kind {
        SectionKind::Profile => out.push(
            Paragraph::new()
                .add_run(Run::new().add_text(record.profile.trim()))
                .line_spacing(LineSpacing::new().after(200)),
        ),
        SectionKind::WorkExperience => {
            for job in with_content(&record.work_experience) {
                out.extend(titled(&job.position, &[&job.company]));
                out.extend(italic_line(&[
                    &job.period,
                    job.location.as_deref().unwrap_or_default(),
                ]));
                out.extend(bullets(&job.points));
            }
        }
        SectionKind::Education => {
            for edu in with_content(&record.education) {
                out.extend(titled(&edu.degree, &[&edu.institution]));
                out.extend(italic_line(&[
                    &edu.period,
                    edu.details.as_deref().unwrap_or_default(),
                ]));
                if let Some(gpa) = edu.gpa.as_deref().filter(|g| has_text(g)) {
                    out.extend(italic_line(&[&format!("GPA: {}", gpa.trim())]));
                }
            }
        }
        SectionKind::Projects => {
            for project in with_content(&record.projects) {
                out.extend(titled(&project.title, &[]));
                out.extend(italic_line(&[&project.description]));
                out.extend(bullets(&project.points));
                out.extend(labelled("Technologies", &project.technologies));
                if let Some(link) = project.link.as_deref().filter(|l| has_text(l)) {
                    out.push(Paragraph::new().add_run(Run::new().add_text(link.trim())));
                }
            }
        }
        SectionKind::Skills => {
            out.extend(labelled("Technical", &record.skills.technical));
            out.extend(labelled("Soft Skills", &record.skills.soft));
            out.extend(labelled("Languages", &record.skills.languages));
        }
        SectionKind::Certificates => {
            for cert in with_content(&record.certificates) {
                out.extend(titled(&cert.title, &[&cert.issuer, &cert.year]));
                if let Some(id) = cert.credential_id.as_deref().filter(|c| has_text(c)) {
                    out.extend(italic_line(&[&format!("Credential ID: {}", id.trim())]));
                }
                if let Some(link) = cert.link.as_deref().filter(|l| has_text(l)) {
                    out.push(Paragraph::new().add_run(Run::new().add_text(link.trim())));
                }
            }
        }
    }
    out
}

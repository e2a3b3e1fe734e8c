use serde::{Deserialize, Serialize};

use crate::models::resume::{has_text, non_blank, with_content, ResumeRecord};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Strong,
    Moderate,
    Weak,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryCheck {
    pub id: u8,
    pub name: String,
    pub passed: bool,
    pub tip: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub checks: Vec<AdvisoryCheck>,
    pub passed: usize,
    pub total: usize,
    /// Integer percentage in [0, 100].
    pub percentage: u8,
    pub rating: Rating,
}

const MIN_SUMMARY_CHARS: usize = 50;
const MIN_TECHNICAL_SKILLS: usize = 3;

/// Scores a record against the advisory checklist. Pure: no side effects,
/// same report for the same record. Never gates anything.
pub fn analyze(record: &ResumeRecord) -> AdvisoryReport {
    let info = &record.personal_info;
    let education = with_content(&record.education).len();
    let work = with_content(&record.work_experience);
    let projects = with_content(&record.projects);

    let has_action_points = projects.iter().any(|p| !non_blank(&p.points).is_empty())
        || work.iter().any(|w| !non_blank(&w.points).is_empty());

    let rules: [(&str, bool, &str); 8] = [
        (
            "Contact Information",
            has_text(&info.name) && has_text(&info.email) && has_text(&info.location),
            "Include name, email, and location",
        ),
        (
            "Professional Summary",
            record.profile.trim().chars().count() > MIN_SUMMARY_CHARS,
            "Write a compelling summary (50-200 words)",
        ),
        (
            "Education Section",
            education >= 1,
            "List at least one educational qualification",
        ),
        (
            "Work Experience",
            !work.is_empty() || projects.len() >= 2,
            "Include work experience or substantial projects",
        ),
        (
            "Projects/Portfolio",
            !projects.is_empty(),
            "Showcase at least one project with details",
        ),
        (
            "Skills Listed",
            non_blank(&record.skills.technical).len() >= MIN_TECHNICAL_SKILLS,
            "List at least 3 relevant technical skills",
        ),
        (
            "Action-Oriented Content",
            has_action_points,
            "Use bullet points with action verbs",
        ),
        (
            "ATS-Friendly Format",
            true,
            "This template is ATS-friendly (no complex formatting)",
        ),
    ];

    let checks: Vec<AdvisoryCheck> = rules
        .iter()
        .zip(1u8..)
        .map(|((name, passed, tip), id)| AdvisoryCheck {
            id,
            name: name.to_string(),
            passed: *passed,
            tip: tip.to_string(),
        })
        .collect();

    let passed = checks.iter().filter(|c| c.passed).count();
    let total = checks.len();
    let percentage = percentage(passed, total);

    let rating = match percentage {
        p if p >= 80 => Rating::Strong,
        p if p >= 60 => Rating::Moderate,
        _ => Rating::Weak,
    };

    AdvisoryReport {
        checks,
        passed,
        total,
        percentage,
        rating,
    }
}

fn percentage(passed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((passed as f64 / total as f64) * 100.0).round().clamp(0.0, 100.0) as u8
}

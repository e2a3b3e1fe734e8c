use serde::{Deserialize, Serialize};

use crate::editor::lists::{append, remove_at};
use crate::models::resume::Skills;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Technical,
    Soft,
    Languages,
}

fn list(skills: &Skills, category: SkillCategory) -> &[String] {
    match category {
        SkillCategory::Technical => &skills.technical,
        SkillCategory::Soft => &skills.soft,
        SkillCategory::Languages => &skills.languages,
    }
}

fn with_list(skills: &Skills, category: SkillCategory, values: Vec<String>) -> Skills {
    let mut next = skills.clone();
    match category {
        SkillCategory::Technical => next.technical = values,
        SkillCategory::Soft => next.soft = values,
        SkillCategory::Languages => next.languages = values,
    }
    next
}

/// Appends a trimmed skill. Blank input leaves the skills unchanged.
pub fn add(skills: &Skills, category: SkillCategory, value: &str) -> Skills {
    let value = value.trim();
    if value.is_empty() {
        return skills.clone();
    }
    with_list(
        skills,
        category,
        append(list(skills, category), value.to_string()),
    )
}

pub fn remove(skills: &Skills, category: SkillCategory, index: usize) -> Skills {
    with_list(skills, category, remove_at(list(skills, category), index))
}

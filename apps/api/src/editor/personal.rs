use serde::{Deserialize, Serialize};

use crate::models::resume::PersonalInfo;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Location,
    PortfolioUrl,
    Linkedin,
    Github,
}

/// Copy of `info` with one field overridden.
pub fn set_field(info: &PersonalInfo, field: PersonalField, value: &str) -> PersonalInfo {
    let mut next = info.clone();
    let value = value.to_string();
    match field {
        PersonalField::Name => next.name = value,
        PersonalField::Email => next.email = value,
        PersonalField::Phone => next.phone = Some(value),
        PersonalField::Location => next.location = value,
        PersonalField::PortfolioUrl => next.portfolio_url = value,
        PersonalField::Linkedin => next.linkedin = Some(value),
        PersonalField::Github => next.github = Some(value),
    }
    next
}

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::editor::lists::{append, remove_by_id, update_by_id};
use crate::models::resume::{CertificateItem, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificateField {
    Title,
    Issuer,
    Year,
    CredentialId,
    Link,
}

/// Appends a blank certificate dated to the current year.
pub fn add(items: &[CertificateItem]) -> Vec<CertificateItem> {
    append(
        items,
        CertificateItem {
            id: ItemId::generate(),
            year: Utc::now().year().to_string(),
            ..Default::default()
        },
    )
}

pub fn update(
    items: &[CertificateItem],
    id: &ItemId,
    field: CertificateField,
    value: &str,
) -> Vec<CertificateItem> {
    update_by_id(items, id, |item| {
        let value = value.to_string();
        match field {
            CertificateField::Title => item.title = value,
            CertificateField::Issuer => item.issuer = value,
            CertificateField::Year => item.year = value,
            CertificateField::CredentialId => item.credential_id = Some(value),
            CertificateField::Link => item.link = Some(value),
        }
    })
}

pub fn remove(items: &[CertificateItem], id: &ItemId) -> Vec<CertificateItem> {
    remove_by_id(items, id)
}

use serde::{Deserialize, Serialize};

use crate::editor::lists::{append, remove_by_id, update_by_id};
use crate::models::resume::{EducationItem, ItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Period,
    Degree,
    Institution,
    Details,
    Gpa,
}

pub fn add(items: &[EducationItem]) -> Vec<EducationItem> {
    append(
        items,
        EducationItem {
            id: ItemId::generate(),
            details: Some(String::new()),
            ..Default::default()
        },
    )
}

pub fn update(
    items: &[EducationItem],
    id: &ItemId,
    field: EducationField,
    value: &str,
) -> Vec<EducationItem> {
    update_by_id(items, id, |item| {
        let value = value.to_string();
        match field {
            EducationField::Period => item.period = value,
            EducationField::Degree => item.degree = value,
            EducationField::Institution => item.institution = value,
            EducationField::Details => item.details = Some(value),
            EducationField::Gpa => item.gpa = Some(value),
        }
    })
}

pub fn remove(items: &[EducationItem], id: &ItemId) -> Vec<EducationItem> {
    remove_by_id(items, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_appends_blank_item_with_fresh_id() {
        let first = add(&[]);
        let second = add(&first);
        assert_eq!(second.len(), 2);
        assert_eq!(second[0], first[0]);
        assert_ne!(second[0].id, second[1].id);
        assert!(second[1].degree.is_empty());
    }

    #[test]
    fn test_update_touches_only_target() {
        let items = add(&add(&[]));
        let id = items[1].id.clone();
        let next = update(&items, &id, EducationField::Degree, "BSc Physics");
        assert_eq!(next[1].degree, "BSc Physics");
        assert_eq!(next[0], items[0]);
        assert!(items[1].degree.is_empty());
    }

    #[test]
    fn test_update_optional_field() {
        let items = add(&[]);
        let next = update(&items, &items[0].id, EducationField::Gpa, "3.9");
        assert_eq!(next[0].gpa.as_deref(), Some("3.9"));
    }

    #[test]
    fn test_remove() {
        let items = add(&add(&[]));
        let next = remove(&items, &items[0].id);
        assert_eq!(next, vec![items[1].clone()]);
    }
}

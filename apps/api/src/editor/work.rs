use serde::{Deserialize, Serialize};

use crate::editor::lists::{append, push_slot, remove_by_id, remove_slot, set_slot, update_by_id};
use crate::models::resume::{ItemId, WorkExperienceItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkField {
    Period,
    Position,
    Company,
    Location,
}

pub fn add(items: &[WorkExperienceItem]) -> Vec<WorkExperienceItem> {
    append(
        items,
        WorkExperienceItem {
            id: ItemId::generate(),
            location: Some(String::new()),
            points: vec![String::new()],
            ..Default::default()
        },
    )
}

pub fn update(
    items: &[WorkExperienceItem],
    id: &ItemId,
    field: WorkField,
    value: &str,
) -> Vec<WorkExperienceItem> {
    update_by_id(items, id, |item| {
        let value = value.to_string();
        match field {
            WorkField::Period => item.period = value,
            WorkField::Position => item.position = value,
            WorkField::Company => item.company = value,
            WorkField::Location => item.location = Some(value),
        }
    })
}

pub fn remove(items: &[WorkExperienceItem], id: &ItemId) -> Vec<WorkExperienceItem> {
    remove_by_id(items, id)
}

pub fn add_point(items: &[WorkExperienceItem], id: &ItemId) -> Vec<WorkExperienceItem> {
    update_by_id(items, id, |item| item.points = push_slot(&item.points))
}

pub fn update_point(
    items: &[WorkExperienceItem],
    id: &ItemId,
    index: usize,
    value: &str,
) -> Vec<WorkExperienceItem> {
    update_by_id(items, id, |item| {
        item.points = set_slot(&item.points, index, value);
    })
}

pub fn remove_point(
    items: &[WorkExperienceItem],
    id: &ItemId,
    index: usize,
) -> Vec<WorkExperienceItem> {
    update_by_id(items, id, |item| item.points = remove_slot(&item.points, index))
}

use serde::{Deserialize, Serialize};

use crate::editor::lists::{append, push_slot, remove_by_id, remove_slot, set_slot, update_by_id};
use crate::models::resume::{ItemId, ProjectItem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectField {
    Title,
    Description,
    Link,
}

pub fn add(items: &[ProjectItem]) -> Vec<ProjectItem> {
    append(
        items,
        ProjectItem {
            id: ItemId::generate(),
            points: vec![String::new()],
            technologies: vec![String::new()],
            ..Default::default()
        },
    )
}

pub fn update(
    items: &[ProjectItem],
    id: &ItemId,
    field: ProjectField,
    value: &str,
) -> Vec<ProjectItem> {
    update_by_id(items, id, |item| {
        let value = value.to_string();
        match field {
            ProjectField::Title => item.title = value,
            ProjectField::Description => item.description = value,
            ProjectField::Link => item.link = Some(value),
        }
    })
}

pub fn remove(items: &[ProjectItem], id: &ItemId) -> Vec<ProjectItem> {
    remove_by_id(items, id)
}

pub fn add_point(items: &[ProjectItem], id: &ItemId) -> Vec<ProjectItem> {
    update_by_id(items, id, |item| item.points = push_slot(&item.points))
}

pub fn update_point(
    items: &[ProjectItem],
    id: &ItemId,
    index: usize,
    value: &str,
) -> Vec<ProjectItem> {
    update_by_id(items, id, |item| {
        item.points = set_slot(&item.points, index, value);
    })
}

pub fn remove_point(items: &[ProjectItem], id: &ItemId, index: usize) -> Vec<ProjectItem> {
    update_by_id(items, id, |item| item.points = remove_slot(&item.points, index))
}

pub fn add_technology(items: &[ProjectItem], id: &ItemId) -> Vec<ProjectItem> {
    update_by_id(items, id, |item| {
        item.technologies = push_slot(&item.technologies);
    })
}

pub fn update_technology(
    items: &[ProjectItem],
    id: &ItemId,
    index: usize,
    value: &str,
) -> Vec<ProjectItem> {
    update_by_id(items, id, |item| {
        item.technologies = set_slot(&item.technologies, index, value);
    })
}

pub fn remove_technology(items: &[ProjectItem], id: &ItemId, index: usize) -> Vec<ProjectItem> {
    update_by_id(items, id, |item| {
        item.technologies = remove_slot(&item.technologies, index);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_with_points(points: &[&str]) -> Vec<ProjectItem> {
        vec![ProjectItem {
            id: "p1".into(),
            title: "Compiler".into(),
            points: points.iter().map(|p| p.to_string()).collect(),
            ..Default::default()
        }]
    }

    #[test]
    fn test_trailing_blank_point_is_trimmed() {
        let id = ItemId::from("p1");
        let items = project_with_points(&["A"]);
        let items = add_point(&items, &id);
        assert_eq!(items[0].points, vec!["A", ""]);
        let items = update_point(&items, &id, 1, "");
        let items = update_point(&items, &id, 0, "A");
        assert_eq!(items[0].points, vec!["A"]);
    }

    #[test]
    fn test_new_project_defaults() {
        let items = add(&[]);
        assert_eq!(items[0].points, vec![String::new()]);
        assert_eq!(items[0].technologies, vec![String::new()]);
        assert!(items[0].link.is_none());
    }

    #[test]
    fn test_technology_edits() {
        let items = add(&[]);
        let id = items[0].id.clone();
        let items = update_technology(&items, &id, 0, "Rust");
        let items = add_technology(&items, &id);
        let items = update_technology(&items, &id, 1, "Tokio");
        assert_eq!(items[0].technologies, vec!["Rust", "Tokio"]);
        let items = remove_technology(&items, &id, 0);
        assert_eq!(items[0].technologies, vec!["Tokio"]);
    }

    #[test]
    fn test_removing_only_entries_keeps_one_slot() {
        let items = add(&[]);
        let id = items[0].id.clone();
        let items = remove_point(&items, &id, 0);
        let items = remove_technology(&items, &id, 0);
        assert_eq!(items[0].points, vec![String::new()]);
        assert_eq!(items[0].technologies, vec![String::new()]);
    }

    #[test]
    fn test_edit_does_not_touch_other_projects() {
        let items = add(&add(&[]));
        let id = items[1].id.clone();
        let next = update(&items, &id, ProjectField::Title, "Parser");
        assert_eq!(next[0], items[0]);
        assert_eq!(next[1].title, "Parser");
    }
}

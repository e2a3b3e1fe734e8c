//! Serializable edit commands: the wire form of every form-editor operation.
//!
//! `{"op": "update_project_point", "id": "…", "index": 1, "value": ""}` is applied
//! to the current record and yields the next one. Unknown ids and out-of-range
//! indexes produce an identical record.

use serde::{Deserialize, Serialize};

use crate::editor::certificates::{self, CertificateField};
use crate::editor::education::{self, EducationField};
use crate::editor::personal::{self, PersonalField};
use crate::editor::projects::{self, ProjectField};
use crate::editor::skills::{self, SkillCategory};
use crate::editor::work::{self, WorkField};
use crate::editor::{
    CertificatesSection, EducationSection, PersonalInfoSection, ProfileSection, ProjectsSection,
    SkillsSection, WorkExperienceSection,
};
use crate::models::resume::{ItemId, ResumeRecord};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditCommand {
    SetPersonal {
        field: PersonalField,
        value: String,
    },
    SetProfile {
        value: String,
    },

    AddEducation,
    UpdateEducation {
        id: ItemId,
        field: EducationField,
        value: String,
    },
    RemoveEducation {
        id: ItemId,
    },

    AddWork,
    UpdateWork {
        id: ItemId,
        field: WorkField,
        value: String,
    },
    RemoveWork {
        id: ItemId,
    },
    AddWorkPoint {
        id: ItemId,
    },
    UpdateWorkPoint {
        id: ItemId,
        index: usize,
        value: String,
    },
    RemoveWorkPoint {
        id: ItemId,
        index: usize,
    },

    AddProject,
    UpdateProject {
        id: ItemId,
        field: ProjectField,
        value: String,
    },
    RemoveProject {
        id: ItemId,
    },
    AddProjectPoint {
        id: ItemId,
    },
    UpdateProjectPoint {
        id: ItemId,
        index: usize,
        value: String,
    },
    RemoveProjectPoint {
        id: ItemId,
        index: usize,
    },
    AddTechnology {
        id: ItemId,
    },
    UpdateTechnology {
        id: ItemId,
        index: usize,
        value: String,
    },
    RemoveTechnology {
        id: ItemId,
        index: usize,
    },

    AddSkill {
        category: SkillCategory,
        value: String,
    },
    RemoveSkill {
        category: SkillCategory,
        index: usize,
    },

    AddCertificate,
    UpdateCertificate {
        id: ItemId,
        field: CertificateField,
        value: String,
    },
    RemoveCertificate {
        id: ItemId,
    },
}

impl EditCommand {
    pub fn apply(&self, record: &ResumeRecord) -> ResumeRecord {
        use EditCommand::*;

        match self {
            SetPersonal { field, value } => {
                let info = personal::set_field(&record.personal_info, *field, value);
                record.with_section::<PersonalInfoSection>(info)
            }
            SetProfile { value } => record.with_section::<ProfileSection>(value.clone()),

            AddEducation => record.edit_section::<EducationSection>(|items| education::add(items)),
            UpdateEducation { id, field, value } => {
                let items = education::update(&record.education, id, *field, value);
                record.with_section::<EducationSection>(items)
            }
            RemoveEducation { id } => {
                record.edit_section::<EducationSection>(|items| education::remove(items, id))
            }

            AddWork => record.edit_section::<WorkExperienceSection>(|items| work::add(items)),
            UpdateWork { id, field, value } => {
                let items = work::update(&record.work_experience, id, *field, value);
                record.with_section::<WorkExperienceSection>(items)
            }
            RemoveWork { id } => {
                record.edit_section::<WorkExperienceSection>(|items| work::remove(items, id))
            }
            AddWorkPoint { id } => {
                record.edit_section::<WorkExperienceSection>(|items| work::add_point(items, id))
            }
            UpdateWorkPoint { id, index, value } => {
                let items = work::update_point(&record.work_experience, id, *index, value);
                record.with_section::<WorkExperienceSection>(items)
            }
            RemoveWorkPoint { id, index } => {
                let items = work::remove_point(&record.work_experience, id, *index);
                record.with_section::<WorkExperienceSection>(items)
            }

            AddProject => record.edit_section::<ProjectsSection>(|items| projects::add(items)),
            UpdateProject { id, field, value } => {
                let items = projects::update(&record.projects, id, *field, value);
                record.with_section::<ProjectsSection>(items)
            }
            RemoveProject { id } => {
                record.edit_section::<ProjectsSection>(|items| projects::remove(items, id))
            }
            AddProjectPoint { id } => {
                record.edit_section::<ProjectsSection>(|items| projects::add_point(items, id))
            }
            UpdateProjectPoint { id, index, value } => {
                let items = projects::update_point(&record.projects, id, *index, value);
                record.with_section::<ProjectsSection>(items)
            }
            RemoveProjectPoint { id, index } => {
                let items = projects::remove_point(&record.projects, id, *index);
                record.with_section::<ProjectsSection>(items)
            }
            AddTechnology { id } => {
                record.edit_section::<ProjectsSection>(|items| projects::add_technology(items, id))
            }
            UpdateTechnology { id, index, value } => {
                let items = projects::update_technology(&record.projects, id, *index, value);
                record.with_section::<ProjectsSection>(items)
            }
            RemoveTechnology { id, index } => {
                let items = projects::remove_technology(&record.projects, id, *index);
                record.with_section::<ProjectsSection>(items)
            }

            AddSkill { category, value } => {
                record.edit_section::<SkillsSection>(|s| skills::add(s, *category, value))
            }
            RemoveSkill { category, index } => {
                record.edit_section::<SkillsSection>(|s| skills::remove(s, *category, *index))
            }

            AddCertificate => {
                record.edit_section::<CertificatesSection>(|items| certificates::add(items))
            }
            UpdateCertificate { id, field, value } => {
                let items = certificates::update(&record.certificates, id, *field, value);
                record.with_section::<CertificatesSection>(items)
            }
            RemoveCertificate { id } => {
                record.edit_section::<CertificatesSection>(|items| certificates::remove(items, id))
            }
        }
    }
}

// Form editors: one module per résumé section.
// Each editor maps (current section value, change) -> new section value and never
// mutates its input. Sections are mutually independent; `Section` ties a section's
// value type to where it lives in the record.

pub mod certificates;
pub mod command;
pub mod education;
pub mod lists;
pub mod personal;
pub mod projects;
pub mod skills;
pub mod work;

pub use command::EditCommand;

use crate::models::resume::{
    CertificateItem, EducationItem, PersonalInfo, ProjectItem, ResumeRecord, Skills,
    WorkExperienceItem,
};

/// A named slice of the record with a concrete value type.
pub trait Section {
    type Value: Clone;

    fn get(record: &ResumeRecord) -> &Self::Value;
    fn set(record: &mut ResumeRecord, value: Self::Value);
}

pub struct PersonalInfoSection;
pub struct ProfileSection;
pub struct EducationSection;
pub struct WorkExperienceSection;
pub struct ProjectsSection;
pub struct SkillsSection;
pub struct CertificatesSection;

impl Section for PersonalInfoSection {
    type Value = PersonalInfo;

    fn get(record: &ResumeRecord) -> &PersonalInfo {
        &record.personal_info
    }

    fn set(record: &mut ResumeRecord, value: PersonalInfo) {
        record.personal_info = value;
    }
}

impl Section for ProfileSection {
    type Value = String;

    fn get(record: &ResumeRecord) -> &String {
        &record.profile
    }

    fn set(record: &mut ResumeRecord, value: String) {
        record.profile = value;
    }
}

impl Section for EducationSection {
    type Value = Vec<EducationItem>;

    fn get(record: &ResumeRecord) -> &Vec<EducationItem> {
        &record.education
    }

    fn set(record: &mut ResumeRecord, value: Vec<EducationItem>) {
        record.education = value;
    }
}

impl Section for WorkExperienceSection {
    type Value = Vec<WorkExperienceItem>;

    fn get(record: &ResumeRecord) -> &Vec<WorkExperienceItem> {
        &record.work_experience
    }

    fn set(record: &mut ResumeRecord, value: Vec<WorkExperienceItem>) {
        record.work_experience = value;
    }
}

impl Section for ProjectsSection {
    type Value = Vec<ProjectItem>;

    fn get(record: &ResumeRecord) -> &Vec<ProjectItem> {
        &record.projects
    }

    fn set(record: &mut ResumeRecord, value: Vec<ProjectItem>) {
        record.projects = value;
    }
}

impl Section for SkillsSection {
    type Value = Skills;

    fn get(record: &ResumeRecord) -> &Skills {
        &record.skills
    }

    fn set(record: &mut ResumeRecord, value: Skills) {
        record.skills = value;
    }
}

impl Section for CertificatesSection {
    type Value = Vec<CertificateItem>;

    fn get(record: &ResumeRecord) -> &Vec<CertificateItem> {
        &record.certificates
    }

    fn set(record: &mut ResumeRecord, value: Vec<CertificateItem>) {
        record.certificates = value;
    }
}

impl ResumeRecord {
    /// New record equal to `self` except for section `S`.
    pub fn with_section<S: Section>(&self, value: S::Value) -> ResumeRecord {
        let mut next = self.clone();
        S::set(&mut next, value);
        next
    }

    /// Runs a section editor against section `S` and returns the resulting record.
    pub fn edit_section<S: Section>(
        &self,
        edit: impl FnOnce(&S::Value) -> S::Value,
    ) -> ResumeRecord {
        self.with_section::<S>(edit(S::get(self)))
    }
}

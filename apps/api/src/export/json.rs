use crate::export::{ExportError, ExportFormat, ExportedFile};
use crate::models::resume::ResumeRecord;

/// Pretty-printed, lossless serialization of the record.
pub fn encode(record: &ResumeRecord) -> Result<ExportedFile, ExportError> {
    let bytes = serde_json::to_vec_pretty(record)?;
    Ok(ExportedFile::new(
        ExportFormat::Json,
        &record.personal_info.name,
        bytes,
    ))
}

pub fn decode(text: &str) -> Result<ResumeRecord, serde_json::Error> {
    serde_json::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{ItemId, ProjectItem};
    use proptest::prelude::*;

    #[test]
    fn test_example_round_trips() {
        let record = ResumeRecord::example();
        let file = encode(&record).unwrap();
        assert_eq!(file.filename, "Alexander_Mitchell_data.json");
        let text = String::from_utf8(file.bytes).unwrap();
        assert!(text.contains("\"personalInfo\""));
        assert!(text.contains("\"workExperience\""));
        assert_eq!(decode(&text).unwrap(), record);
    }

    #[test]
    fn test_blank_entries_survive_round_trip() {
        let mut record = ResumeRecord::empty();
        record.projects = vec![ProjectItem {
            id: ItemId::from("p1"),
            points: vec!["".into()],
            technologies: vec!["  ".into()],
            ..Default::default()
        }];
        let bytes = encode(&record).unwrap().bytes;
        let back = decode(std::str::from_utf8(&bytes).unwrap()).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_decode_fills_missing_lists() {
        let record = decode(r#"{"personalInfo":{"name":"Jane Doe"}}"#).unwrap();
        assert_eq!(record.personal_info.name, "Jane Doe");
        assert!(record.work_experience.is_empty());
        assert!(record.skills.languages.is_empty());
    }

    proptest! {
        #[test]
        fn prop_json_round_trip(
            name in ".{0,20}",
            profile in ".{0,40}",
            points in proptest::collection::vec(".{0,10}", 0..4),
            phone in proptest::option::of("[0-9 +()-]{0,12}"),
        ) {
            let mut record = ResumeRecord::example();
            record.personal_info.name = name;
            record.personal_info.phone = phone;
            record.profile = profile;
            record.work_experience[0].points = points;

            let bytes = encode(&record).unwrap().bytes;
            let back = decode(std::str::from_utf8(&bytes).unwrap()).unwrap();
            prop_assert_eq!(back, record);
        }
    }
}

use super::{StudyRecord, StudyState};

fn record(
    id: &str,
    patient_id: &str,
    patient_name: &str,
    study_type: &str,
    date: &str,
    state: StudyState,
) -> StudyRecord {
    StudyRecord {
        id: id.to_string(),
        patient_id: patient_id.to_string(),
        patient_name: Some(patient_name.to_string()),
        study_uid: format!("1.2.840.113619.2.{id}"),
        study_type: study_type.to_string(),
        date: date.to_string(),
        state,
    }
}

/// Built-in study list shown on the dashboard until a real archive is wired in.
pub fn sample_studies() -> Vec<StudyRecord> {
    vec![
        record(
            "1",
            "PT-2024-001",
            "Sarah Johnson",
            "Transthoracic Echo",
            "2024-03-15",
            StudyState::Completed,
        ),
        record(
            "2",
            "PT-2024-002",
            "Michael Chen",
            "Stress Echo",
            "2024-03-14",
            StudyState::processing(Some(67), Some("5 min")),
        ),
        record(
            "3",
            "PT-2024-003",
            "Emma Rodriguez",
            "Transthoracic Echo",
            "2024-03-14",
            StudyState::Completed,
        ),
        record(
            "4",
            "PT-2024-004",
            "James Wilson",
            "3D Echo",
            "2024-03-13",
            StudyState::Completed,
        ),
        record(
            "5",
            "PT-2024-005",
            "Olivia Brown",
            "Transesophageal Echo",
            "2024-03-13",
            StudyState::processing(Some(34), Some("12 min")),
        ),
    ]
}

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StudyStatus {
    Completed,
    Processing,
}

impl StudyStatus {
    pub fn label(self) -> &'static str {
        match self {
            StudyStatus::Completed => "Completed",
            StudyStatus::Processing => "Processing",
        }
    }
}

/// Lifecycle of a study. Progress details only exist while processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudyState {
    Completed,
    Processing {
        progress: Option<u8>,
        estimated_time_remaining: Option<String>,
    },
}

impl StudyState {
    /// Builds a processing state, clamping `progress` to 0..=100.
    pub fn processing(progress: Option<u8>, estimated_time_remaining: Option<&str>) -> Self {
        Self::Processing {
            progress: progress.map(|value| value.min(100)),
            estimated_time_remaining: estimated_time_remaining.map(str::to_string),
        }
    }

    pub fn status(&self) -> StudyStatus {
        match self {
            StudyState::Completed => StudyStatus::Completed,
            StudyState::Processing { .. } => StudyStatus::Processing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyRecord {
    pub id: String,
    pub patient_id: String,
    pub patient_name: Option<String>,
    pub study_uid: String,
    pub study_type: String,
    pub date: String,
    pub state: StudyState,
}

impl StudyRecord {
    pub fn status(&self) -> StudyStatus {
        self.state.status()
    }

    pub fn progress(&self) -> Option<u8> {
        match &self.state {
            StudyState::Processing { progress, .. } => *progress,
            StudyState::Completed => None,
        }
    }

    pub fn estimated_time_remaining(&self) -> Option<&str> {
        match &self.state {
            StudyState::Processing {
                estimated_time_remaining,
                ..
            } => estimated_time_remaining.as_deref(),
            StudyState::Completed => None,
        }
    }

    /// Text fields the dashboard search box matches against.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.patient_id.as_str()),
            self.patient_name.as_deref(),
            Some(self.study_type.as_str()),
            Some(self.study_uid.as_str()),
        ]
        .into_iter()
        .flatten()
    }
}

/// Echocardiography study kinds offered by the new-study form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyType {
    TransthoracicEcho,
    TransesophagealEcho,
    StressEcho,
    ThreeDimensionalEcho,
    DobutamineStressEcho,
}

impl StudyType {
    pub const ALL: [StudyType; 5] = [
        StudyType::TransthoracicEcho,
        StudyType::TransesophagealEcho,
        StudyType::StressEcho,
        StudyType::ThreeDimensionalEcho,
        StudyType::DobutamineStressEcho,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StudyType::TransthoracicEcho => "Transthoracic Echo",
            StudyType::TransesophagealEcho => "Transesophageal Echo",
            StudyType::StressEcho => "Stress Echo",
            StudyType::ThreeDimensionalEcho => "3D Echo",
            StudyType::DobutamineStressEcho => "Dobutamine Stress Echo",
        }
    }
}

impl fmt::Display for StudyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processing_state_clamps_progress() {
        let state = StudyState::processing(Some(140), Some("5 min"));
        assert_eq!(
            state,
            StudyState::Processing {
                progress: Some(100),
                estimated_time_remaining: Some("5 min".to_string()),
            }
        );
        assert_eq!(state.status(), StudyStatus::Processing);
    }

    #[test]
    fn completed_records_have_no_progress_details() {
        let record = StudyRecord {
            id: "1".into(),
            patient_id: "PT-1".into(),
            patient_name: None,
            study_uid: "1.2.3".into(),
            study_type: "3D Echo".into(),
            date: "2024-03-13".into(),
            state: StudyState::Completed,
        };
        assert_eq!(record.progress(), None);
        assert_eq!(record.estimated_time_remaining(), None);
    }

    #[test]
    fn searchable_fields_skip_missing_patient_name() {
        let record = StudyRecord {
            id: "1".into(),
            patient_id: "PT-1".into(),
            patient_name: None,
            study_uid: "1.2.3".into(),
            study_type: "Stress Echo".into(),
            date: "2024-03-13".into(),
            state: StudyState::Completed,
        };
        let fields: Vec<_> = record.searchable_fields().collect();
        assert_eq!(fields, vec!["PT-1", "Stress Echo", "1.2.3"]);
    }
}

//! Stand-in for the remote study service.
//!
//! Each call waits for the configured latency and then succeeds, so screens
//! can be driven through `Task::perform` exactly as a real client would be.

use crate::error::BackendError;
use crate::forms::{Credentials, StudySubmission};
use crate::session::{Clinician, Session};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyReceipt {
    pub study_type: String,
    pub file_count: usize,
    pub total_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedBackend {
    latency: Duration,
}

impl SimulatedBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub async fn sign_in(
        self,
        credentials: Credentials,
        clinician: Clinician,
    ) -> Result<Session, BackendError> {
        tokio::time::sleep(self.latency).await;
        if credentials.email.is_empty() || credentials.password.is_empty() {
            return Err(BackendError::InvalidCredentials);
        }
        Ok(Session {
            clinician,
            email: credentials.email,
        })
    }

    pub async fn submit_study(
        self,
        submission: StudySubmission,
    ) -> Result<StudyReceipt, BackendError> {
        tokio::time::sleep(self.latency).await;
        Ok(StudyReceipt {
            study_type: submission.study_type.to_string(),
            file_count: submission.files.len(),
            total_bytes: submission.files.iter().map(|file| file.size_bytes).sum(),
        })
    }
}

//! Typed form state for the sign-in and new-study screens.
//!
//! Every input is a [`FormField`] that carries its own error message, which is
//! cleared as soon as the user edits that input.

use crate::error::{SubmitError, ValidationIssue};
use crate::model::{StagedFile, StagedFileSet, StudyType};
use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormField<T> {
    pub value: T,
    pub error: Option<String>,
}

impl<T> FormField<T> {
    pub fn new(value: T) -> Self {
        Self { value, error: None }
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.error = None;
    }

    fn fail(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub email: FormField<String>,
    pub password: FormField<String>,
}

impl SignInForm {
    pub fn validate(&mut self) -> Result<Credentials, SubmitError> {
        let email = self.email.value.trim().to_string();
        if email.is_empty() {
            self.email.fail("Email is required");
        } else if !email.contains('@') {
            self.email.fail("Enter a valid email address");
        }
        if self.password.value.is_empty() {
            self.password.fail("Password is required");
        }

        if self.email.error.is_some() || self.password.error.is_some() {
            return Err(SubmitError::ValidationFailed(ValidationIssue::InvalidFields));
        }

        Ok(Credentials {
            email,
            password: self.password.value.clone(),
        })
    }
}

/// A create-study request that passed every form check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudySubmission {
    pub study_type: StudyType,
    pub date: NaiveDate,
    pub files: Vec<StagedFile>,
}

#[derive(Debug, Clone)]
pub struct NewStudyForm {
    pub study_type: FormField<Option<StudyType>>,
    pub date: FormField<String>,
}

impl NewStudyForm {
    pub fn new(default_date: NaiveDate) -> Self {
        Self {
            study_type: FormField::new(None),
            date: FormField::new(default_date.format(DATE_FORMAT).to_string()),
        }
    }

    /// Checks the fields first, then the staged files.
    pub fn prepare_submission(
        &mut self,
        files: &StagedFileSet,
    ) -> Result<StudySubmission, SubmitError> {
        if self.study_type.value.is_none() {
            self.study_type.fail("Study type is required");
        }

        let date_text = self.date.value.trim().to_string();
        let date = if date_text.is_empty() {
            self.date.fail("Date is required");
            None
        } else {
            match NaiveDate::parse_from_str(&date_text, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    self.date.fail("Use the YYYY-MM-DD format");
                    None
                }
            }
        };

        let (Some(study_type), Some(date)) = (self.study_type.value, date) else {
            return Err(SubmitError::ValidationFailed(ValidationIssue::InvalidFields));
        };

        files.ensure_submittable()?;

        Ok(StudySubmission {
            study_type,
            date,
            files: files.files().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn staged(name: &str) -> StagedFileSet {
        let mut set = StagedFileSet::new();
        set.add([StagedFile {
            name: name.to_string(),
            size_bytes: 2048,
            path: PathBuf::from(name),
        }]);
        set
    }

    #[test]
    fn new_form_defaults_date() {
        let form = NewStudyForm::new(today());
        assert_eq!(form.date.value, "2024-03-15");
        assert_eq!(form.study_type.value, None);
    }

    #[test]
    fn missing_fields_are_reported_before_missing_files() {
        let mut form = NewStudyForm::new(today());
        form.date.set(String::new());
        let result = form.prepare_submission(&StagedFileSet::new());
        assert_eq!(
            result,
            Err(SubmitError::ValidationFailed(ValidationIssue::InvalidFields))
        );
        assert_eq!(form.study_type.error.as_deref(), Some("Study type is required"));
        assert_eq!(form.date.error.as_deref(), Some("Date is required"));
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = NewStudyForm::new(today());
        let _ = form.prepare_submission(&StagedFileSet::new());
        assert!(form.study_type.error.is_some());
        form.study_type.set(Some(StudyType::StressEcho));
        assert!(form.study_type.error.is_none());
    }

    #[test]
    fn malformed_date_is_rejected() {
        let mut form = NewStudyForm::new(today());
        form.study_type.set(Some(StudyType::StressEcho));
        form.date.set("15/03/2024".to_string());
        assert!(form.prepare_submission(&staged("a.dcm")).is_err());
        assert_eq!(form.date.error.as_deref(), Some("Use the YYYY-MM-DD format"));
    }

    #[test]
    fn empty_file_set_blocks_submission() {
        let mut form = NewStudyForm::new(today());
        form.study_type.set(Some(StudyType::TransthoracicEcho));
        let err = form.prepare_submission(&StagedFileSet::new()).unwrap_err();
        assert_eq!(
            err,
            SubmitError::ValidationFailed(ValidationIssue::EmptyFileSet)
        );
        assert_eq!(err.to_string(), "Please upload at least one DICOM file");
    }

    #[test]
    fn one_staged_file_passes_the_gate() {
        let mut form = NewStudyForm::new(today());
        form.study_type.set(Some(StudyType::ThreeDimensionalEcho));
        let submission = form.prepare_submission(&staged("echo.dcm")).unwrap();
        assert_eq!(submission.study_type, StudyType::ThreeDimensionalEcho);
        assert_eq!(submission.date, today());
        assert_eq!(submission.files.len(), 1);
    }

    #[test]
    fn sign_in_requires_both_fields() {
        let mut form = SignInForm::default();
        assert!(form.validate().is_err());
        assert_eq!(form.email.error.as_deref(), Some("Email is required"));
        assert_eq!(form.password.error.as_deref(), Some("Password is required"));

        form.email.set("doctor@clinic.org".to_string());
        form.password.set("secret".to_string());
        let credentials = form.validate().unwrap();
        assert_eq!(credentials.email, "doctor@clinic.org");
    }

    #[test]
    fn sign_in_rejects_email_without_at_sign() {
        let mut form = SignInForm::default();
        form.email.set("doctor".to_string());
        form.password.set("secret".to_string());
        assert!(form.validate().is_err());
        assert!(form.email.error.is_some());
        assert!(form.password.error.is_none());
    }

    #[test]
    fn sign_in_credentials_carry_trimmed_email() {
        let mut form = SignInForm::default();
        form.email.set("  doctor@clinic.org ".to_string());
        form.password.set("secret".to_string());
        let credentials = form.validate().unwrap();
        assert_eq!(credentials.email, "doctor@clinic.org");
        assert_eq!(credentials.password, "secret");
        assert!(form.email.error.is_none());
    }
}

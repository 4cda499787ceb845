use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StagingError {
    #[error("staged file index {index} is out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Why a create-study request was refused before leaving the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationIssue {
    EmptyFileSet,
    InvalidFields,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValidationIssue::EmptyFileSet => "Please upload at least one DICOM file",
            ValidationIssue::InvalidFields => "Please fix the highlighted fields",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("{0}")]
    ValidationFailed(ValidationIssue),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IntakeRejection {
    #[error("{name}: only DICOM files (.dcm, .dicom) are accepted")]
    UnsupportedExtension { name: String },
    #[error("{name}: {size_mb} exceeds the {limit_mb} limit")]
    TooLarge {
        name: String,
        size_mb: String,
        limit_mb: String,
    },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BackendError {
    #[error("email and password are required")]
    InvalidCredentials,
}

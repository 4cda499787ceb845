use super::StagedFile;
use crate::error::IntakeRejection;
use crate::utils::{format_megabytes, BYTES_PER_MB};
use std::path::Path;

pub const DICOM_EXTENSIONS: [&str; 2] = ["dcm", "dicom"];
pub const DEFAULT_MAX_FILE_BYTES: u64 = 500 * BYTES_PER_MB;

/// Screens files before they are staged for a new study.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileIntakePolicy {
    pub max_file_bytes: u64,
}

impl Default for FileIntakePolicy {
    fn default() -> Self {
        Self {
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }
}

impl FileIntakePolicy {
    pub fn new(max_file_bytes: u64) -> Self {
        Self { max_file_bytes }
    }

    pub fn check(&self, file: &StagedFile) -> Result<(), IntakeRejection> {
        if !has_dicom_extension(&file.path) {
            return Err(IntakeRejection::UnsupportedExtension {
                name: file.name.clone(),
            });
        }
        if file.size_bytes > self.max_file_bytes {
            return Err(IntakeRejection::TooLarge {
                name: file.name.clone(),
                size_mb: format_megabytes(file.size_bytes),
                limit_mb: format_megabytes(self.max_file_bytes),
            });
        }
        Ok(())
    }

    /// Splits `files` into accepted files and rejections, keeping the input order.
    pub fn screen(&self, files: Vec<StagedFile>) -> (Vec<StagedFile>, Vec<IntakeRejection>) {
        let mut accepted = Vec::with_capacity(files.len());
        let mut rejected = Vec::new();
        for file in files {
            match self.check(&file) {
                Ok(()) => accepted.push(file),
                Err(rejection) => {
                    log::warn!("Rejected file: {rejection}");
                    rejected.push(rejection);
                }
            }
        }
        (accepted, rejected)
    }
}

fn has_dicom_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            DICOM_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn file(name: &str, size_bytes: u64) -> StagedFile {
        StagedFile {
            name: name.to_string(),
            size_bytes,
            path: PathBuf::from("/incoming").join(name),
        }
    }

    #[test]
    fn accepts_dicom_extensions_in_any_case() {
        let policy = FileIntakePolicy::default();
        assert!(policy.check(&file("echo.dcm", 10)).is_ok());
        assert!(policy.check(&file("ECHO.DICOM", 10)).is_ok());
    }

    #[test]
    fn rejects_other_extensions() {
        let policy = FileIntakePolicy::default();
        assert_eq!(
            policy.check(&file("report.pdf", 10)),
            Err(IntakeRejection::UnsupportedExtension {
                name: "report.pdf".to_string()
            })
        );
        assert!(policy.check(&file("no_extension", 10)).is_err());
    }

    #[test]
    fn rejects_files_over_the_ceiling() {
        let policy = FileIntakePolicy::new(BYTES_PER_MB);
        assert!(policy.check(&file("small.dcm", BYTES_PER_MB)).is_ok());
        let err = policy.check(&file("big.dcm", 2 * BYTES_PER_MB)).unwrap_err();
        assert_eq!(err.to_string(), "big.dcm: 2.00 MB exceeds the 1.00 MB limit");
    }

    #[test]
    fn screen_keeps_order_of_accepted_files() {
        let policy = FileIntakePolicy::default();
        let (accepted, rejected) = policy.screen(vec![
            file("b.dcm", 1),
            file("notes.txt", 1),
            file("a.dcm", 1),
        ]);
        let names: Vec<_> = accepted.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["b.dcm", "a.dcm"]);
        assert_eq!(rejected.len(), 1);
    }
}

use crate::error::{StagingError, SubmitError, ValidationIssue};
use std::path::PathBuf;

/// A file picked or dropped by the user that has not been uploaded yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub name: String,
    pub size_bytes: u64,
    pub path: PathBuf,
}

/// Files collected by one new-study form, in the order they were added.
///
/// Duplicates are kept; nothing here looks at names, sizes or contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedFileSet {
    files: Vec<StagedFile>,
}

impl StagedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `new_files` after the files already staged.
    pub fn add<I>(&mut self, new_files: I) -> &[StagedFile]
    where
        I: IntoIterator<Item = StagedFile>,
    {
        self.files.extend(new_files);
        &self.files
    }

    pub fn remove_at(&mut self, index: usize) -> Result<StagedFile, StagingError> {
        if index >= self.files.len() {
            return Err(StagingError::IndexOutOfRange {
                index,
                len: self.files.len(),
            });
        }
        Ok(self.files.remove(index))
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn files(&self) -> &[StagedFile] {
        &self.files
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StagedFile> {
        self.files.iter()
    }

    pub fn total_bytes(&self) -> u64 {
        self.files.iter().map(|file| file.size_bytes).sum()
    }

    /// Gate checked before a create-study request leaves the form.
    pub fn ensure_submittable(&self) -> Result<(), SubmitError> {
        if self.is_empty() {
            Err(SubmitError::ValidationFailed(ValidationIssue::EmptyFileSet))
        } else {
            Ok(())
        }
    }
}

impl<'a> IntoIterator for &'a StagedFileSet {
    type Item = &'a StagedFile;
    type IntoIter = std::slice::Iter<'a, StagedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub mod catalog;
pub mod intake;
pub mod loader;
pub mod query;
pub mod staged;
pub mod study;

pub use intake::FileIntakePolicy;
pub use query::{filter_counts, filter_studies, DashboardStats, FilterCounts, StudyFilter};
pub use staged::{StagedFile, StagedFileSet};
pub use study::{StudyRecord, StudyState, StudyStatus, StudyType};

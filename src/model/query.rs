//! Dashboard search and status filtering over an in-memory study list.

use super::{StudyRecord, StudyStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudyFilter {
    #[default]
    All,
    Completed,
    Processing,
}

impl StudyFilter {
    pub const ALL: [StudyFilter; 3] = [
        StudyFilter::All,
        StudyFilter::Completed,
        StudyFilter::Processing,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StudyFilter::All => "All",
            StudyFilter::Completed => StudyStatus::Completed.label(),
            StudyFilter::Processing => StudyStatus::Processing.label(),
        }
    }

    pub fn admits(self, status: StudyStatus) -> bool {
        match self {
            StudyFilter::All => true,
            StudyFilter::Completed => status == StudyStatus::Completed,
            StudyFilter::Processing => status == StudyStatus::Processing,
        }
    }
}

/// Badge counts shown next to each filter pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterCounts {
    pub all: usize,
    pub completed: usize,
    pub processing: usize,
}

impl FilterCounts {
    pub fn for_filter(&self, filter: StudyFilter) -> usize {
        match filter {
            StudyFilter::All => self.all,
            StudyFilter::Completed => self.completed,
            StudyFilter::Processing => self.processing,
        }
    }
}

/// Returns the records matching both `query` and `filter`, in their original order.
///
/// The query is matched case-insensitively as a substring of the patient ID,
/// patient name, study type or study UID. An empty query matches everything.
pub fn filter_studies<'a>(
    records: &'a [StudyRecord],
    query: &str,
    filter: StudyFilter,
) -> Vec<&'a StudyRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| filter.admits(record.status()))
        .filter(|record| matches_query(record, &needle))
        .collect()
}

fn matches_query(record: &StudyRecord, needle: &str) -> bool {
    needle.is_empty()
        || record
            .searchable_fields()
            .any(|field| field.to_lowercase().contains(needle))
}

pub fn filter_counts(records: &[StudyRecord]) -> FilterCounts {
    records
        .iter()
        .fold(FilterCounts::default(), |mut counts, record| {
            counts.all += 1;
            match record.status() {
                StudyStatus::Completed => counts.completed += 1,
                StudyStatus::Processing => counts.processing += 1,
            }
            counts
        })
}

/// Summary tiles rendered above the study list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total: usize,
    pub completed_today: usize,
    pub processing: usize,
    pub success_rate_percent: u32,
}

impl DashboardStats {
    /// `today` is compared verbatim against each record's `YYYY-MM-DD` date.
    pub fn compute(records: &[StudyRecord], today: &str) -> Self {
        let counts = filter_counts(records);
        let completed_today = records
            .iter()
            .filter(|record| record.status() == StudyStatus::Completed && record.date == today)
            .count();
        let success_rate_percent = if counts.all == 0 {
            0
        } else {
            (counts.completed as f64 / counts.all as f64 * 100.0).round() as u32
        };

        Self {
            total: counts.all,
            completed_today,
            processing: counts.processing,
            success_rate_percent,
        }
    }
}

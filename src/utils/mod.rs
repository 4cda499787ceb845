pub mod formatting;

pub use formatting::{doctor_title, BYTES_PER_MB, format_megabytes, initials, plural};

pub mod clinician_badge;
pub mod filter_toggle;
pub mod form_parts;
pub mod window_controls;

pub use clinician_badge::clinician_badge;
pub use filter_toggle::study_filter_toggle;
pub use form_parts::field_error;
pub use window_controls::window_controls;

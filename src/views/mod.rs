pub mod dashboard;
pub mod new_study;
pub mod sign_in;

pub use dashboard::dashboard_view;
pub use new_study::new_study_view;
pub use sign_in::sign_in_view;

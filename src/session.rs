use crate::utils::{doctor_title, initials};

/// Who is using the app. Comes from configuration, never from global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clinician {
    pub name: String,
    pub specialty: String,
}

impl Clinician {
    pub fn title(&self) -> String {
        doctor_title(&self.name)
    }

    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub clinician: Clinician,
    pub email: String,
}

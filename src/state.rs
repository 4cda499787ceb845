use crate::forms::{NewStudyForm, SignInForm};
use crate::model::{FileIntakePolicy, StagedFile, StagedFileSet, StudyFilter};
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient banner shown at the top of the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct SignInState {
    pub form: SignInForm,
    pub is_loading: bool,
}

#[derive(Debug)]
pub struct DashboardState {
    pub query: String,
    pub filter: StudyFilter,
    pub show_welcome: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            query: String::new(),
            filter: StudyFilter::All,
            show_welcome: true,
        }
    }
}

/// One new-study form session. Dropped on submit or cancel.
#[derive(Debug)]
pub struct NewStudyState {
    pub form: NewStudyForm,
    pub files: StagedFileSet,
    pub is_dragging: bool,
    pub is_submitting: bool,
    /// Load failures and intake rejections, kept across drops until dismissed.
    pub file_errors: Vec<String>,
}

impl NewStudyState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            form: NewStudyForm::new(today),
            files: StagedFileSet::new(),
            is_dragging: false,
            is_submitting: false,
            file_errors: Vec::new(),
        }
    }

    /// Screens one batch of picked or dropped files and appends the accepted ones.
    pub fn stage(&mut self, results: Vec<Result<StagedFile, String>>, intake: &FileIntakePolicy) {
        let mut loaded = Vec::with_capacity(results.len());
        for result in results {
            match result {
                Ok(file) => loaded.push(file),
                Err(err) => self.file_errors.push(err),
            }
        }

        let (accepted, rejected) = intake.screen(loaded);
        self.file_errors.extend(rejected.iter().map(ToString::to_string));
        let staged = self.files.add(accepted).len();
        log::info!("{staged} file(s) staged for the new study");
    }
}

#[derive(Debug)]
pub enum Screen {
    SignIn(SignInState),
    Dashboard(DashboardState),
    NewStudy(NewStudyState),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::SignIn(_) => "sign-in",
            Screen::Dashboard(_) => "dashboard",
            Screen::NewStudy(_) => "new-study",
        }
    }
}

use crate::backend::StudyReceipt;
use crate::error::BackendError;
use crate::model::{StagedFile, StudyFilter, StudyType};
use crate::session::Session;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowAction {
    Minimize,
    ToggleMaximize,
    Close,
}

#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    PasswordChanged(String),
    SignIn,
    SignedIn(Result<Session, BackendError>),
    SearchChanged(String),
    ClearSearch,
    SetFilter(StudyFilter),
    DismissWelcome,
    OpenNewStudy,
    Logout,
    StudyTypeSelected(StudyType),
    DateChanged(String),
    PickFiles,
    FilesStaged(Vec<Result<StagedFile, String>>),
    RemoveFile(usize),
    DismissFileErrors,
    FileHovered,
    FilesHoveredLeft,
    FileDropped(PathBuf),
    SubmitStudy,
    StudySubmitted(Result<StudyReceipt, BackendError>),
    BackToDashboard,
    DismissNotice,
    Window(WindowAction),
}

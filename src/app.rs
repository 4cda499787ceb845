use crate::config::Config;
use crate::error::{SubmitError, ValidationIssue};
use crate::message::{Message, WindowAction};
use crate::model::catalog::sample_studies;
use crate::model::intake::DICOM_EXTENSIONS;
use crate::model::loader::{stage_path, stage_paths};
use crate::model::StudyRecord;
use crate::session::Session;
use crate::state::{DashboardState, NewStudyState, Notice, NoticeKind, Screen, SignInState};
use crate::views::{dashboard_view, new_study_view, sign_in_view};
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, row, text};
use iced::{application, event, window, Alignment, Element, Event, Length, Subscription, Task, Theme};
use rfd::AsyncFileDialog;

const APP_TITLE: &str = "Horalix Pulse";

pub fn run(config: Config) -> iced::Result {
    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .window_size((1280.0, 860.0))
        .run_with(move || (App::new(config), Task::none()))
}

pub struct App {
    config: Config,
    studies: Vec<StudyRecord>,
    session: Option<Session>,
    screen: Screen,
    notice: Option<Notice>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            studies: sample_studies(),
            session: None,
            screen: Screen::SignIn(SignInState::default()),
            notice: None,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EmailChanged(value) => {
                if let Screen::SignIn(state) = &mut self.screen {
                    state.form.email.set(value);
                }
                Task::none()
            }
            Message::PasswordChanged(value) => {
                if let Screen::SignIn(state) = &mut self.screen {
                    state.form.password.set(value);
                }
                Task::none()
            }
            Message::SignIn => {
                let Screen::SignIn(state) = &mut self.screen else {
                    return Task::none();
                };
                if state.is_loading {
                    return Task::none();
                }
                match state.form.validate() {
                    Ok(credentials) => {
                        log::info!("Signing in as {}", credentials.email);
                        state.is_loading = true;
                        self.notice = None;
                        Task::perform(
                            self.config
                                .backend
                                .sign_in(credentials, self.config.clinician.clone()),
                            Message::SignedIn,
                        )
                    }
                    Err(err) => {
                        log::debug!("Sign-in form rejected: {err}");
                        Task::none()
                    }
                }
            }
            Message::SignedIn(result) => {
                let Screen::SignIn(state) = &mut self.screen else {
                    return Task::none();
                };
                state.is_loading = false;
                match result {
                    Ok(session) => {
                        log::info!("Signed in: {}", session.clinician.title());
                        self.session = Some(session);
                        self.navigate(Screen::Dashboard(DashboardState::default()));
                    }
                    Err(err) => {
                        log::warn!("Sign-in failed: {err}");
                        self.notice = Some(Notice::error(err.to_string()));
                    }
                }
                Task::none()
            }
            Message::SearchChanged(query) => {
                if let Screen::Dashboard(state) = &mut self.screen {
                    state.query = query;
                }
                Task::none()
            }
            Message::ClearSearch => {
                if let Screen::Dashboard(state) = &mut self.screen {
                    state.query.clear();
                }
                Task::none()
            }
            Message::SetFilter(filter) => {
                if let Screen::Dashboard(state) = &mut self.screen {
                    state.filter = filter;
                }
                Task::none()
            }
            Message::DismissWelcome => {
                if let Screen::Dashboard(state) = &mut self.screen {
                    state.show_welcome = false;
                }
                Task::none()
            }
            Message::OpenNewStudy => {
                if self.session.is_some() {
                    self.notice = None;
                    self.navigate(Screen::NewStudy(NewStudyState::new(self.config.today)));
                }
                Task::none()
            }
            Message::Logout => {
                if let Some(session) = self.session.take() {
                    log::info!("Signed out {}", session.email);
                }
                self.notice = None;
                self.navigate(Screen::SignIn(SignInState::default()));
                Task::none()
            }
            Message::StudyTypeSelected(study_type) => {
                if let Screen::NewStudy(state) = &mut self.screen {
                    state.form.study_type.set(Some(study_type));
                }
                Task::none()
            }
            Message::DateChanged(value) => {
                if let Screen::NewStudy(state) = &mut self.screen {
                    state.form.date.set(value);
                }
                Task::none()
            }
            Message::PickFiles => {
                if !matches!(self.screen, Screen::NewStudy(_)) {
                    return Task::none();
                }
                Task::perform(
                    async {
                        match AsyncFileDialog::new()
                            .add_filter("DICOM", &DICOM_EXTENSIONS)
                            .pick_files()
                            .await
                        {
                            Some(handles) if !handles.is_empty() => stage_paths(
                                handles
                                    .into_iter()
                                    .map(|handle| handle.path().to_path_buf())
                                    .collect(),
                            ),
                            _ => Vec::new(),
                        }
                    },
                    Message::FilesStaged,
                )
            }
            Message::FileHovered => {
                if let Screen::NewStudy(state) = &mut self.screen {
                    state.is_dragging = true;
                }
                Task::none()
            }
            Message::FilesHoveredLeft => {
                if let Screen::NewStudy(state) = &mut self.screen {
                    state.is_dragging = false;
                }
                Task::none()
            }
            Message::FileDropped(path) => {
                let Screen::NewStudy(state) = &mut self.screen else {
                    return Task::none();
                };
                state.is_dragging = false;
                state.stage(vec![stage_path(path)], &self.config.intake);
                Task::none()
            }
            Message::FilesStaged(results) => {
                let Screen::NewStudy(state) = &mut self.screen else {
                    return Task::none();
                };
                state.stage(results, &self.config.intake);
                Task::none()
            }
            Message::RemoveFile(index) => {
                if let Screen::NewStudy(state) = &mut self.screen {
                    match state.files.remove_at(index) {
                        Ok(file) => {
                            log::info!("Removed staged file {}", file.name);
                            state.file_errors.clear();
                        }
                        Err(err) => log::warn!("Ignoring remove request: {err}"),
                    }
                }
                Task::none()
            }
            Message::SubmitStudy => {
                let Screen::NewStudy(state) = &mut self.screen else {
                    return Task::none();
                };
                if state.is_submitting {
                    return Task::none();
                }
                match state.form.prepare_submission(&state.files) {
                    Ok(submission) => {
                        log::info!(
                            "Submitting {} study with {} file(s)",
                            submission.study_type,
                            submission.files.len()
                        );
                        state.is_submitting = true;
                        self.notice = None;
                        Task::perform(
                            self.config.backend.submit_study(submission),
                            Message::StudySubmitted,
                        )
                    }
                    Err(err @ SubmitError::ValidationFailed(ValidationIssue::EmptyFileSet)) => {
                        log::warn!("Study submission blocked: {err}");
                        self.notice = Some(Notice::error(err.to_string()));
                        Task::none()
                    }
                    Err(err) => {
                        log::debug!("Study form rejected: {err}");
                        Task::none()
                    }
                }
            }
            Message::StudySubmitted(result) => {
                let Screen::NewStudy(state) = &mut self.screen else {
                    return Task::none();
                };
                state.is_submitting = false;
                match result {
                    Ok(receipt) => {
                        log::info!(
                            "Created {} study ({} file(s), {} bytes)",
                            receipt.study_type,
                            receipt.file_count,
                            receipt.total_bytes
                        );
                        self.notice = Some(Notice::success("Study created successfully"));
                        self.navigate(Screen::Dashboard(DashboardState::default()));
                    }
                    Err(err) => {
                        log::error!("Study submission failed: {err}");
                        self.notice = Some(Notice::error(err.to_string()));
                    }
                }
                Task::none()
            }
            Message::BackToDashboard => {
                if self.session.is_some() {
                    self.notice = None;
                    self.navigate(Screen::Dashboard(DashboardState::default()));
                }
                Task::none()
            }
            Message::DismissFileErrors => {
                if let Screen::NewStudy(state) = &mut self.screen {
                    state.file_errors.clear();
                }
                Task::none()
            }
            Message::DismissNotice => {
                self.notice = None;
                Task::none()
            }
            Message::Window(action) => window::get_latest().and_then(move |id| match action {
                WindowAction::Minimize => window::minimize(id, true),
                WindowAction::ToggleMaximize => window::toggle_maximize(id),
                WindowAction::Close => window::close(id),
            }),
        }
    }

    fn navigate(&mut self, screen: Screen) {
        log::info!("Navigating {} -> {}", self.screen.name(), screen.name());
        self.screen = screen;
    }

    pub fn view(&self) -> Element<'_, Message> {
        let body = match (&self.screen, &self.session) {
            (Screen::SignIn(state), _) => sign_in_view(state),
            (Screen::Dashboard(state), Some(session)) => {
                dashboard_view(state, &self.studies, session, self.config.today)
            }
            (Screen::NewStudy(state), Some(session)) => {
                new_study_view(state, session, self.config.intake.max_file_bytes)
            }
            (_, None) => text("Session expired").into(),
        };

        let mut content = column![].spacing(16);
        if let Some(notice) = &self.notice {
            content = content.push(notice_banner(notice));
        }

        container(content.push(body))
            .padding(20)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        event::listen_with(file_drop_events)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn file_drop_events(event: Event, _status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
        Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FilesHoveredLeft),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    }
}

fn notice_banner(notice: &Notice) -> Element<'_, Message> {
    let style = match notice.kind {
        NoticeKind::Success => text::success,
        NoticeKind::Error => text::danger,
    };

    container(
        row![
            text(&notice.text)
                .size(16)
                .wrapping(Wrapping::Word)
                .style(style)
                .width(Length::Fill),
            button(text("Dismiss").size(14))
                .style(button::text)
                .on_press(Message::DismissNotice),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(12)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{SimulatedBackend, StudyReceipt};
    use crate::model::{FileIntakePolicy, StagedFile, StudyFilter, StudyType};
    use crate::session::Clinician;
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use std::time::Duration;

    fn test_app() -> App {
        App::new(Config {
            clinician: Clinician {
                name: "doctor1".to_string(),
                specialty: "Cardiologist".to_string(),
            },
            intake: FileIntakePolicy::new(1024),
            backend: SimulatedBackend::new(Duration::ZERO),
            today: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        })
    }

    fn signed_in_app() -> App {
        let mut app = test_app();
        let session = Session {
            clinician: app.config.clinician.clone(),
            email: "doctor@clinic.org".to_string(),
        };
        let _ = app.update(Message::SignedIn(Ok(session)));
        app
    }

    fn staged(name: &str, size_bytes: u64) -> Result<StagedFile, String> {
        Ok(StagedFile {
            name: name.to_string(),
            size_bytes,
            path: PathBuf::from(name),
        })
    }

    fn new_study(app: &App) -> &NewStudyState {
        match &app.screen {
            Screen::NewStudy(state) => state,
            other => panic!("expected new-study screen, got {}", other.name()),
        }
    }

    #[test]
    fn starts_on_sign_in_screen() {
        let app = test_app();
        assert!(matches!(app.screen, Screen::SignIn(_)));
        assert_eq!(app.studies.len(), 5);
    }

    #[test]
    fn sign_in_with_blank_form_stays_idle() {
        let mut app = test_app();
        let _ = app.update(Message::SignIn);
        let Screen::SignIn(state) = &app.screen else {
            panic!("left sign-in screen");
        };
        assert!(!state.is_loading);
        assert!(state.form.email.error.is_some());
    }

    #[test]
    fn successful_sign_in_opens_dashboard() {
        let app = signed_in_app();
        assert!(matches!(app.screen, Screen::Dashboard(_)));
        assert!(app.session.is_some());
    }

    #[test]
    fn dashboard_messages_update_query_and_filter() {
        let mut app = signed_in_app();
        let _ = app.update(Message::SearchChanged("chen".to_string()));
        let _ = app.update(Message::SetFilter(StudyFilter::Processing));
        let _ = app.update(Message::DismissWelcome);
        let Screen::Dashboard(state) = &app.screen else {
            panic!("left dashboard");
        };
        assert_eq!(state.query, "chen");
        assert_eq!(state.filter, StudyFilter::Processing);
        assert!(!state.show_welcome);

        let _ = app.update(Message::ClearSearch);
        let Screen::Dashboard(state) = &app.screen else {
            panic!("left dashboard");
        };
        assert!(state.query.is_empty());
    }

    #[test]
    fn staged_files_go_through_intake_policy() {
        let mut app = signed_in_app();
        let _ = app.update(Message::OpenNewStudy);
        let _ = app.update(Message::FilesStaged(vec![
            staged("a.dcm", 10),
            staged("notes.txt", 10),
            staged("huge.dcm", 4096),
            Err("broken.dcm: failed to read file metadata".to_string()),
        ]));
        let _ = app.update(Message::FilesStaged(vec![staged("b.dicom", 10)]));

        let state = new_study(&app);
        let names: Vec<_> = state.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.dcm", "b.dicom"]);
        assert_eq!(state.file_errors.len(), 3);
    }

    #[test]
    fn rejected_files_are_reported() {
        let mut app = signed_in_app();
        let _ = app.update(Message::OpenNewStudy);
        let _ = app.update(Message::FilesStaged(vec![staged("notes.txt", 10)]));
        let errors = &new_study(&app).file_errors;
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("notes.txt"));
    }

    #[test]
    fn rejections_survive_later_drops_until_dismissed() {
        let dir = tempfile::tempdir().unwrap();
        let notes = dir.path().join("notes.txt");
        let first = dir.path().join("a.dcm");
        let second = dir.path().join("b.dcm");
        for path in [&notes, &first, &second] {
            std::fs::write(path, [0u8; 16]).unwrap();
        }

        let mut app = signed_in_app();
        let _ = app.update(Message::OpenNewStudy);
        let _ = app.update(Message::FileDropped(notes));
        let _ = app.update(Message::FileDropped(first));
        let _ = app.update(Message::FileDropped(second));

        let state = new_study(&app);
        let names: Vec<_> = state.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.dcm", "b.dcm"]);
        assert_eq!(state.file_errors.len(), 1);
        assert!(state.file_errors[0].contains("notes.txt"));

        let _ = app.update(Message::DismissFileErrors);
        assert!(new_study(&app).file_errors.is_empty());
    }

    #[test]
    fn removing_a_file_clears_reported_rejections() {
        let mut app = signed_in_app();
        let _ = app.update(Message::OpenNewStudy);
        let _ = app.update(Message::FilesStaged(vec![
            staged("a.dcm", 10),
            staged("notes.txt", 10),
        ]));
        let _ = app.update(Message::RemoveFile(0));
        let state = new_study(&app);
        assert!(state.files.is_empty());
        assert!(state.file_errors.is_empty());
    }

    #[test]
    fn bad_remove_index_is_ignored() {
        let mut app = signed_in_app();
        let _ = app.update(Message::OpenNewStudy);
        let _ = app.update(Message::FilesStaged(vec![staged("a.dcm", 10)]));
        let _ = app.update(Message::RemoveFile(3));
        assert_eq!(new_study(&app).files.len(), 1);
        let _ = app.update(Message::RemoveFile(0));
        assert!(new_study(&app).files.is_empty());
    }

    #[test]
    fn submit_without_files_shows_error() {
        let mut app = signed_in_app();
        let _ = app.update(Message::OpenNewStudy);
        let _ = app.update(Message::StudyTypeSelected(StudyType::StressEcho));
        let _ = app.update(Message::SubmitStudy);

        assert!(!new_study(&app).is_submitting);
        assert_eq!(
            app.notice,
            Some(Notice::error("Please upload at least one DICOM file"))
        );
    }

    #[test]
    fn submit_with_file_starts_request_and_returns_to_dashboard() {
        let mut app = signed_in_app();
        let _ = app.update(Message::OpenNewStudy);
        let _ = app.update(Message::StudyTypeSelected(StudyType::StressEcho));
        let _ = app.update(Message::FilesStaged(vec![staged("a.dcm", 10)]));
        let _ = app.update(Message::SubmitStudy);
        assert!(new_study(&app).is_submitting);

        let _ = app.update(Message::StudySubmitted(Ok(StudyReceipt {
            study_type: "Stress Echo".to_string(),
            file_count: 1,
            total_bytes: 10,
        })));
        assert!(matches!(app.screen, Screen::Dashboard(_)));
        assert_eq!(app.notice, Some(Notice::success("Study created successfully")));
    }

    #[test]
    fn cancel_discards_staged_files() {
        let mut app = signed_in_app();
        let _ = app.update(Message::OpenNewStudy);
        let _ = app.update(Message::FilesStaged(vec![staged("a.dcm", 10)]));
        let _ = app.update(Message::BackToDashboard);
        let _ = app.update(Message::OpenNewStudy);
        assert!(new_study(&app).files.is_empty());
    }

    #[test]
    fn drop_events_outside_new_study_are_ignored() {
        let mut app = signed_in_app();
        let _ = app.update(Message::FileHovered);
        let _ = app.update(Message::FileDropped(PathBuf::from("a.dcm")));
        assert!(matches!(app.screen, Screen::Dashboard(_)));
    }

    #[test]
    fn logout_clears_session() {
        let mut app = signed_in_app();
        let _ = app.update(Message::Logout);
        assert!(app.session.is_none());
        assert!(matches!(app.screen, Screen::SignIn(_)));
    }
}

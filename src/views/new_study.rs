use crate::components::{clinician_badge, field_error, window_controls};
use crate::message::Message;
use crate::model::{StagedFileSet, StudyType};
use crate::session::Session;
use crate::state::NewStudyState;
use crate::utils::{format_megabytes, BYTES_PER_MB};
use iced::widget::text::Wrapping;
use iced::widget::{
    button, column, container, horizontal_space, pick_list, row, scrollable, text, text_input,
    Column,
};
use iced::{Alignment, Background, Element, Length, Theme};

pub fn new_study_view<'a>(
    state: &'a NewStudyState,
    session: &'a Session,
    max_file_bytes: u64,
) -> Element<'a, Message> {
    let header = row![
        button(text("← Back"))
            .style(button::text)
            .on_press(Message::BackToDashboard),
        column![
            text("New Study").size(26),
            text("Upload and analyze echocardiogram").size(13),
        ]
        .spacing(2),
        horizontal_space(),
        clinician_badge(&session.clinician),
        window_controls(),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let form = &state.form;
    let study_type = column![
        text("Study Type *").size(13),
        pick_list(
            &StudyType::ALL[..],
            form.study_type.value,
            Message::StudyTypeSelected
        )
        .placeholder("Select study type")
        .padding(10)
        .width(Length::Fill),
        field_error(form.study_type.error.as_deref()),
    ]
    .spacing(6)
    .width(Length::FillPortion(1));

    let study_date = column![
        text("Study Date *").size(13),
        text_input("YYYY-MM-DD", &form.date.value)
            .on_input(Message::DateChanged)
            .padding(10),
        field_error(form.date.error.as_deref()),
    ]
    .spacing(6)
    .width(Length::FillPortion(1));

    let mut upload = column![
        text("Upload DICOM Files *").size(13),
        dropzone(state.is_dragging, max_file_bytes),
    ]
    .spacing(12);

    if !state.file_errors.is_empty() {
        upload = upload.push(
            row![
                text(state.file_errors.join("\n"))
                    .size(13)
                    .style(text::danger)
                    .wrapping(Wrapping::Word)
                    .width(Length::Fill),
                button(text("Dismiss").size(13))
                    .style(button::text)
                    .on_press(Message::DismissFileErrors),
            ]
            .spacing(12)
            .align_y(Alignment::Center),
        );
    }
    if !state.files.is_empty() {
        upload = upload.push(staged_file_list(&state.files));
    }

    let card = container(
        column![row![study_type, study_date].spacing(24), upload].spacing(32),
    )
    .padding(32)
    .width(Length::Fill)
    .style(container::rounded_box);

    let create_label = if state.is_submitting {
        "Creating..."
    } else {
        "+ Create Study"
    };
    let actions = row![
        horizontal_space(),
        button(text("Cancel"))
            .style(button::secondary)
            .on_press_maybe((!state.is_submitting).then_some(Message::BackToDashboard)),
        button(text(create_label))
            .style(button::primary)
            .padding([10, 24])
            .on_press_maybe((!state.is_submitting).then_some(Message::SubmitStudy)),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    column![
        header,
        scrollable(column![card, actions].spacing(24).max_width(960.0)).height(Length::Fill),
    ]
    .spacing(24)
    .into()
}

fn dropzone(is_dragging: bool, max_file_bytes: u64) -> Element<'static, Message> {
    let headline = if is_dragging {
        "Drop files here"
    } else {
        "Click to upload or drag and drop"
    };

    let content = column![
        text(headline).size(20),
        text(format!(
            "DICOM files only (Max {}MB per file)",
            max_file_bytes / BYTES_PER_MB
        ))
        .size(14),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    button(
        container(content)
            .width(Length::Fill)
            .height(Length::Fixed(260.0))
            .align_x(Alignment::Center)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(0)
    .on_press(Message::PickFiles)
    .style(move |theme, status| dropzone_style(theme, status, is_dragging))
    .into()
}

fn dropzone_style(theme: &Theme, status: button::Status, is_dragging: bool) -> button::Style {
    let palette = theme.extended_palette();
    let highlighted = is_dragging || matches!(status, button::Status::Hovered);

    let (background, border_color) = if highlighted {
        (
            palette.primary.weak.color.scale_alpha(0.15),
            palette.primary.strong.color,
        )
    } else {
        (
            palette.background.weak.color.scale_alpha(0.3),
            palette.background.strong.color,
        )
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.background.base.text,
        border: iced::border::Border {
            color: border_color,
            width: 2.0,
            radius: iced::border::Radius::new(16.0),
        },
        ..Default::default()
    }
}

fn staged_file_list(files: &StagedFileSet) -> Column<'_, Message> {
    let heading = text(format!(
        "Selected Files ({}, {} total)",
        files.len(),
        format_megabytes(files.total_bytes())
    ))
    .size(13);

    files
        .iter()
        .enumerate()
        .fold(column![heading].spacing(8), |list, (index, file)| {
            list.push(
                container(
                    row![
                        column![
                            text(&file.name).size(15),
                            text(format_megabytes(file.size_bytes)).size(12),
                        ]
                        .spacing(2)
                        .width(Length::Fill),
                        button(text("✕").size(14))
                            .style(button::danger)
                            .on_press(Message::RemoveFile(index)),
                    ]
                    .spacing(12)
                    .align_y(Alignment::Center),
                )
                .padding(12)
                .width(Length::Fill)
                .style(container::rounded_box),
            )
        })
}

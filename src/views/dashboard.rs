use crate::components::{clinician_badge, study_filter_toggle, window_controls};
use crate::forms::DATE_FORMAT;
use crate::message::Message;
use crate::model::{filter_counts, filter_studies, DashboardStats, StudyRecord, StudyStatus};
use crate::session::Session;
use crate::state::DashboardState;
use crate::utils::plural;
use chrono::NaiveDate;
use iced::widget::text::Wrapping;
use iced::widget::{
    button, column, container, horizontal_space, progress_bar, row, scrollable, text, text_input,
    Column,
};
use iced::{Alignment, Element, Length};

pub fn dashboard_view<'a>(
    state: &'a DashboardState,
    studies: &'a [StudyRecord],
    session: &'a Session,
    today: NaiveDate,
) -> Element<'a, Message> {
    let stats = DashboardStats::compute(studies, &today.format(DATE_FORMAT).to_string());
    let counts = filter_counts(studies);
    let visible = filter_studies(studies, &state.query, state.filter);

    let header = row![
        column![
            text("Patient Studies").size(26),
            text("AI-Powered Cardiac Precision").size(13),
        ]
        .spacing(2),
        horizontal_space(),
        clinician_badge(&session.clinician),
        button(text("+ New Study"))
            .style(button::primary)
            .on_press(Message::OpenNewStudy),
        button(text("Logout"))
            .style(button::secondary)
            .on_press(Message::Logout),
        window_controls(),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let mut page = column![header].spacing(24);

    if state.show_welcome {
        page = page.push(welcome_banner(session, &stats));
    }

    page = page
        .push(stat_tiles(&stats))
        .push(search_bar(state).push(study_filter_toggle(state.filter, counts)));

    let list: Element<'a, Message> = if visible.is_empty() {
        empty_state()
    } else {
        scrollable(
            visible
                .into_iter()
                .fold(Column::new().spacing(12), |list, study| {
                    list.push(study_card(study))
                }),
        )
        .height(Length::Fill)
        .into()
    };

    page.push(list).into()
}

fn welcome_banner(session: &Session, stats: &DashboardStats) -> Element<'static, Message> {
    let summary = format!(
        "You have {} in progress and {} completed today",
        plural(stats.processing, "study", "studies"),
        stats.completed_today
    );

    container(
        row![
            column![
                text(format!("Welcome back, {}", session.clinician.title())).size(20),
                text(summary).size(14),
            ]
            .spacing(4),
            horizontal_space(),
            button(text("Upload Study").size(14))
                .style(button::secondary)
                .on_press(Message::OpenNewStudy),
            button(text("✕").size(14))
                .style(button::text)
                .on_press(Message::DismissWelcome),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding(20)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}

fn stat_tiles(stats: &DashboardStats) -> Element<'static, Message> {
    let tiles = [
        ("Total Studies", stats.total.to_string()),
        ("Completed Today", stats.completed_today.to_string()),
        ("Processing", stats.processing.to_string()),
        ("Success Rate", format!("{}%", stats.success_rate_percent)),
    ];

    tiles
        .into_iter()
        .fold(row![].spacing(16), |tiles, (label, value)| {
            tiles.push(
                container(column![text(value).size(28), text(label).size(13)].spacing(4))
                    .padding(20)
                    .width(Length::FillPortion(1))
                    .style(container::rounded_box),
            )
        })
        .into()
}

fn search_bar(state: &DashboardState) -> iced::widget::Row<'_, Message> {
    let mut bar = row![text_input(
        "Search by patient ID, name, or study type...",
        &state.query
    )
    .on_input(Message::SearchChanged)
    .padding(10)
    .width(Length::Fill)]
    .spacing(12)
    .align_y(Alignment::Center);

    if !state.query.is_empty() {
        bar = bar.push(
            button(text("Clear").size(14))
                .style(button::text)
                .on_press(Message::ClearSearch),
        );
    }

    bar
}

fn study_card(study: &StudyRecord) -> Element<'_, Message> {
    let status = study.status();
    let badge = text(status.label()).size(12).style(match status {
        StudyStatus::Completed => text::success,
        StudyStatus::Processing => text::primary,
    });

    let mut details = column![
        row![text(&study.patient_id).size(18), badge]
            .spacing(12)
            .align_y(Alignment::Center),
    ]
    .spacing(4);

    if let Some(name) = &study.patient_name {
        details = details.push(text(name).size(14));
    }
    details = details.push(text(format!("{} • {}", study.study_type, study.date)).size(13));

    if let Some(progress) = study.progress() {
        let mut caption = row![text(format!("Processing: {progress}%")).size(12)];
        if let Some(eta) = study.estimated_time_remaining() {
            caption = caption
                .push(horizontal_space())
                .push(text(format!("Est. {eta} remaining")).size(12));
        }
        details = details.push(
            column![
                caption,
                progress_bar(0.0..=100.0, f32::from(progress)).height(Length::Fixed(6.0)),
            ]
            .spacing(4),
        );
    }

    container(details.width(Length::Fill))
        .padding(20)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}

fn empty_state() -> Element<'static, Message> {
    container(
        column![
            text("No studies found").size(20),
            text("Try adjusting your search or filter criteria")
                .size(14)
                .wrapping(Wrapping::Word),
            button(text("Upload Your First Study"))
                .style(button::primary)
                .on_press(Message::OpenNewStudy),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(48)
    .width(Length::Fill)
    .align_x(Alignment::Center)
    .style(container::rounded_box)
    .into()
}

use crate::message::Message;
use crate::session::Clinician;
use iced::widget::{column, container, row, text};
use iced::{Alignment, Element, Length};

pub fn clinician_badge(clinician: &Clinician) -> Element<'static, Message> {
    let avatar = container(text(clinician.initials()).size(16))
        .width(Length::Fixed(40.0))
        .height(Length::Fixed(40.0))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(container::rounded_box);

    container(
        row![
            avatar,
            column![
                text(clinician.title()).size(14),
                text(clinician.specialty.clone()).size(12),
            ]
            .spacing(2),
        ]
        .spacing(12)
        .align_y(Alignment::Center),
    )
    .padding([8, 16])
    .style(container::rounded_box)
    .into()
}

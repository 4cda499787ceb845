use crate::message::Message;
use iced::widget::{text, Space};
use iced::{Element, Length};

/// Inline validation message under an input, or nothing when the field is valid.
pub fn field_error(error: Option<&str>) -> Element<'_, Message> {
    match error {
        Some(message) => text(message).size(12).style(text::danger).into(),
        None => Space::with_height(Length::Fixed(0.0)).into(),
    }
}

use crate::message::{Message, WindowAction};
use iced::widget::{button, row, text, Row};

pub fn window_controls() -> Row<'static, Message> {
    row![
        control("—", WindowAction::Minimize, button::text),
        control("□", WindowAction::ToggleMaximize, button::text),
        control("✕", WindowAction::Close, button::danger),
    ]
    .spacing(4)
}

fn control(
    glyph: &'static str,
    action: WindowAction,
    style: fn(&iced::Theme, button::Status) -> button::Style,
) -> iced::widget::Button<'static, Message> {
    button(text(glyph).size(14))
        .padding([6, 12])
        .style(style)
        .on_press(Message::Window(action))
}

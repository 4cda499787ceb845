use crate::components::{field_error, window_controls};
use crate::message::Message;
use crate::state::SignInState;
use iced::widget::{button, column, container, horizontal_space, row, text, text_input};
use iced::{Alignment, Element, Length};

pub fn sign_in_view(state: &SignInState) -> Element<'_, Message> {
    let form = &state.form;

    let mut email = text_input("Email", &form.email.value)
        .padding(12)
        .size(16);
    let mut password = text_input("Password", &form.password.value)
        .secure(true)
        .padding(12)
        .size(16);
    if !state.is_loading {
        email = email
            .on_input(Message::EmailChanged)
            .on_submit(Message::SignIn);
        password = password
            .on_input(Message::PasswordChanged)
            .on_submit(Message::SignIn);
    }

    let sign_in_label = if state.is_loading {
        "Signing in..."
    } else {
        "Sign In"
    };
    let sign_in = button(
        container(text(sign_in_label).size(16))
            .width(Length::Fill)
            .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(12)
    .style(button::primary)
    .on_press_maybe((!state.is_loading).then_some(Message::SignIn));

    let card = container(
        column![
            column![email, field_error(form.email.error.as_deref())].spacing(4),
            column![password, field_error(form.password.error.as_deref())].spacing(4),
            sign_in,
        ]
        .spacing(20),
    )
    .padding(32)
    .width(Length::Fixed(420.0))
    .style(container::rounded_box);

    let branding = column![
        text("Horalix Pulse").size(32),
        text("AI-Powered Cardiac Precision").size(14),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    let body = column![
        branding,
        card,
        text("Secure hospital-grade authentication").size(12),
    ]
    .spacing(32)
    .align_x(Alignment::Center);

    column![
        row![horizontal_space(), window_controls()],
        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center),
    ]
    .into()
}

use crate::message::Message;
use crate::model::{FilterCounts, StudyFilter};
use iced::widget::text::Wrapping;
use iced::widget::{button, container, row, text, Row};
use iced::{Alignment, Background, Color, Length, Shadow, Theme};

/// Pill row for the dashboard status filter, each pill carrying its badge count.
pub fn study_filter_toggle(current: StudyFilter, counts: FilterCounts) -> Row<'static, Message> {
    StudyFilter::ALL
        .into_iter()
        .fold(row![].spacing(8), |pills, filter| {
            pills.push(filter_pill(filter, current, counts.for_filter(filter)))
        })
        .align_y(Alignment::Center)
}

fn filter_pill(
    filter: StudyFilter,
    current: StudyFilter,
    count: usize,
) -> iced::widget::Button<'static, Message> {
    let is_active = filter == current;
    let badge = container(text(count.to_string()).size(12))
        .padding([2, 8])
        .style(move |theme| badge_style(theme, is_active));
    let content = row![
        text(filter.label()).size(14).wrapping(Wrapping::None),
        badge
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    button(container(content).height(Length::Fixed(32.0)).align_y(Alignment::Center))
        .padding([4, 16])
        .on_press(Message::SetFilter(filter))
        .style(move |theme, status| pill_style(theme, status, is_active))
}

fn badge_style(theme: &Theme, is_active: bool) -> container::Style {
    let palette = theme.extended_palette();
    let background = if is_active {
        Color::WHITE.scale_alpha(0.2)
    } else {
        palette.background.strong.color
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: iced::border::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: iced::border::Radius::new(999.0),
        },
        ..Default::default()
    }
}

fn pill_style(theme: &Theme, status: button::Status, is_active: bool) -> button::Style {
    let palette = theme.extended_palette();

    let mut background_color = if is_active {
        palette.primary.strong.color
    } else {
        palette.background.strong.color.scale_alpha(0.4)
    };

    match status {
        button::Status::Hovered => {
            background_color = if is_active {
                palette.primary.base.color
            } else {
                palette.background.base.color.scale_alpha(0.8)
            };
        }
        button::Status::Pressed => {
            background_color = background_color.scale_alpha(0.9);
        }
        button::Status::Disabled => {
            background_color = background_color.scale_alpha(0.5);
        }
        button::Status::Active => {}
    }

    let text_color = if is_active {
        palette.primary.strong.text
    } else {
        palette.background.base.text
    };

    button::Style {
        background: Some(Background::Color(background_color)),
        text_color,
        border: iced::border::Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: iced::border::Radius::new(999.0),
        },
        shadow: Shadow::default(),
    }
}

//! Custom styles for the picker widgets.

use super::theme::MojiTheme;
use iced::widget::{container, text_input};
use iced::{Background, Border};

/// Style for the window background.
pub fn main_container(theme: &MojiTheme, opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(MojiTheme::with_alpha(
            theme.background,
            opacity,
        ))),
        ..Default::default()
    }
}

/// Style for the search input.
pub fn search_input(theme: &MojiTheme, focused: bool) -> text_input::Style {
    let border_color = if focused { theme.border } else { theme.surface };

    text_input::Style {
        background: Background::Color(theme.surface),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 2.0.into(),
        },
        icon: theme.subtext,
        placeholder: theme.subtext,
        value: theme.text,
        selection: theme.accent,
    }
}

/// Style for one result slot.
pub fn result_box(theme: &MojiTheme, selected: bool) -> container::Style {
    let background = if selected { theme.accent } else { theme.surface };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: MojiTheme::with_alpha(theme.text, 0.4),
            width: 1.0,
            radius: 0.0.into(),
        },
        text_color: Some(theme.text),
        ..Default::default()
    }
}

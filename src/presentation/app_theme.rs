use iced::widget::{button, container, text};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

const ANALYZE_BLUE: Color = Color::from_rgb(0.231, 0.510, 0.965);
const ANALYZE_BLUE_HOVER: Color = Color::from_rgb(0.145, 0.388, 0.922);
const ANALYZE_BLUE_PRESSED: Color = Color::from_rgb(0.114, 0.306, 0.847);
const EMERALD: Color = Color::from_rgb(0.431, 0.906, 0.718);
const EMERALD_HOVER: Color = Color::from_rgb(0.204, 0.827, 0.600);
const EMERALD_PRESSED: Color = Color::from_rgb(0.063, 0.725, 0.506);
const LINK_SLATE: Color = Color::from_rgb(0.392, 0.455, 0.545);
const BORDER_GRAY: Color = Color::from_rgb(0.820, 0.835, 0.859);
const ERROR_RED: Color = Color::from_rgb(0.937, 0.267, 0.267);

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.067, 0.078, 0.098),
                text: Color::from_rgb(0.95, 0.95, 0.95),
                primary: ANALYZE_BLUE,
                success: EMERALD,
                danger: ERROR_RED,
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::WHITE,
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: ANALYZE_BLUE,
                success: EMERALD,
                danger: ERROR_RED,
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn filled_button_style(
    status: button::Status,
    base: Color,
    hovered: Color,
    pressed: Color,
    text_color: Color,
) -> button::Style {
    let background = match status {
        button::Status::Active => base,
        button::Status::Hovered => hovered,
        button::Status::Pressed => pressed,
        button::Status::Disabled => Color::from_rgb(0.3, 0.3, 0.3),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: match status {
            button::Status::Disabled => Color::from_rgb(0.5, 0.5, 0.5),
            _ => text_color,
        },
        border: Border {
            color: background,
            width: 1.0,
            radius: 4.0.into(),
        },
        shadow: Shadow::default(),
        snap: matches!(status, button::Status::Pressed),
    }
}

pub fn analyze_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button_style(
        status,
        ANALYZE_BLUE,
        ANALYZE_BLUE_HOVER,
        ANALYZE_BLUE_PRESSED,
        Color::WHITE,
    )
}

pub fn change_image_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button_style(
        status,
        EMERALD,
        EMERALD_HOVER,
        EMERALD_PRESSED,
        Color::from_rgb(0.1, 0.1, 0.1),
    )
}

pub fn upload_prompt_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => palette.primary,
            _ => palette.text,
        },
        border: Border::default(),
        shadow: Shadow::default(),
        snap: false,
    }
}

pub fn link_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered | button::Status::Pressed => ANALYZE_BLUE,
            _ => LINK_SLATE,
        },
        border: Border::default(),
        shadow: Shadow::default(),
        snap: false,
    }
}

pub fn upload_box_style(_theme: &Theme) -> container::Style {
    container::Style {
        border: Border {
            color: BORDER_GRAY,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

pub fn error_text_style(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ERROR_RED),
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{palette::WHITE, radius, shadow};
use crate::ui::theming::ThemeMode;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call-to-action (Enhance, Try Enhancement).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ThemeMode::of(theme).colors();

    let (background, shadow) = match status {
        button::Status::Hovered => (colors.brand_secondary, shadow::LG),
        button::Status::Active | button::Status::Pressed => (colors.brand_primary, shadow::SM),
        button::Status::Disabled => (
            Color {
                a: 0.4,
                ..colors.brand_primary
            },
            iced::Shadow::default(),
        ),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: colors.brand_secondary,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow,
        snap: true,
    }
}

/// Outlined secondary action (Browse, Choose another image).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ThemeMode::of(theme).colors();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(colors.surface_tertiary)),
        button::Status::Active | button::Status::Disabled => None,
    };
    let text_color = if matches!(status, button::Status::Disabled) {
        colors.text_secondary
    } else {
        colors.brand_primary
    };

    button::Style {
        background,
        text_color,
        border: Border {
            color: colors.brand_primary,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}

/// Selected entry of a toggle group or the active navbar link.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ThemeMode::of(theme).colors();
    let background = if matches!(status, button::Status::Hovered) {
        colors.brand_secondary
    } else {
        colors.brand_primary
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Unselected entry of a toggle group or an inactive navbar link.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ThemeMode::of(theme).colors();
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (Some(Background::Color(colors.surface_tertiary)), colors.text_primary)
        }
        button::Status::Active | button::Status::Disabled => (None, colors.text_secondary),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}

/// Borderless text button (brand link, theme toggle).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let colors = ThemeMode::of(theme).colors();
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => colors.brand_primary,
        button::Status::Active | button::Status::Disabled => colors.text_primary,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: iced::Shadow::default(),
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, ThemeMode::Dark.colors().brand_primary);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn disabled_primary_is_faded() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        match style.background {
            Some(Background::Color(bg)) => assert!(bg.a < 1.0),
            other => panic!("Expected background color, got {other:?}"),
        }
    }

    #[test]
    fn selected_and_unselected_differ() {
        let on = selected(&Theme::Dark, button::Status::Active);
        let off = unselected(&Theme::Dark, button::Status::Active);
        assert_ne!(on.background, off.background);
        assert_ne!(on.text_color, off.text_color);
    }
}

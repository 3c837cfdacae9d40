// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ThemeMode;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = ThemeMode::of(theme).colors();

    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Top navigation bar.
pub fn navbar(theme: &Theme) -> container::Style {
    let colors = ThemeMode::of(theme).colors();

    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Raised card holding a preview, a feature or a metadata block.
pub fn card(theme: &Theme) -> container::Style {
    let colors = ThemeMode::of(theme).colors();

    container::Style {
        background: Some(Background::Color(colors.surface_secondary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Upload drop zone, highlighted while a file hovers over the window.
pub fn drop_zone(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let colors = ThemeMode::of(theme).colors();
        let (outline, fill) = if active {
            (colors.brand_primary, colors.surface_tertiary)
        } else {
            (colors.border, colors.surface_secondary)
        };

        container::Style {
            background: Some(Background::Color(fill)),
            text_color: Some(colors.text_primary),
            border: Border {
                color: outline,
                width: border::WIDTH_MD,
                radius: radius::LG.into(),
            },
            ..Default::default()
        }
    }
}

/// Small pill used for badges ("Demo mode", confidence).
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color { a: 0.15, ..color })),
        text_color: Some(color),
        border: Border {
            color,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_drop_zone_uses_brand_outline() {
        let style = drop_zone(true)(&Theme::Dark);
        assert_eq!(style.border.color, ThemeMode::Dark.colors().brand_primary);

        let idle = drop_zone(false)(&Theme::Dark);
        assert_ne!(idle.border.color, style.border.color);
    }

    #[test]
    fn page_background_follows_theme() {
        let dark = page(&Theme::Dark);
        let light = page(&Theme::Light);
        assert_ne!(dark.background, light.background);
    }
}

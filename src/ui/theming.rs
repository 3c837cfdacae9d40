// SPDX-License-Identifier: MPL-2.0
//! Dark and light color schemes and the global theme mode.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,
    pub accent: Color,

    // Semantic colors
    pub error: Color,
    pub success: Color,
    pub info: Color,

    pub border: Color,
    pub scrim: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::GRAY_100,
            surface_secondary: palette::WHITE,
            surface_tertiary: palette::OCEAN_100,

            text_primary: palette::ABYSS_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::OCEAN_600,
            brand_secondary: palette::OCEAN_700,
            accent: palette::TEAL_400,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            border: palette::GRAY_200,
            scrim: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::ABYSS_900
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::ABYSS_900,
            surface_secondary: palette::ABYSS_800,
            surface_tertiary: palette::ABYSS_700,

            text_primary: palette::GRAY_100,
            text_secondary: palette::GRAY_400,

            brand_primary: palette::OCEAN_400,
            brand_secondary: palette::OCEAN_500,
            accent: palette::TEAL_400,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,
            info: palette::INFO_500,

            border: palette::ABYSS_700,
            scrim: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }
}

/// Theme currently applied to the whole interface.
///
/// Lives only in memory; toggling it is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Returns the other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        match self {
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::Light => ColorScheme::light(),
        }
    }

    /// Maps the mode onto iced's built-in theme.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::Light => Theme::Light,
        }
    }

    /// Recovers the mode from the active iced theme, for style closures.
    #[must_use]
    pub fn of(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}

/// Initial theme as written in `settings.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemePreference {
    /// Resolves the preference to a concrete mode.
    ///
    /// `System` asks the OS once; detection failures fall back to dark.
    #[must_use]
    pub fn resolve(self) -> ThemeMode {
        match self {
            ThemePreference::Light => ThemeMode::Light,
            ThemePreference::Dark => ThemeMode::Dark,
            ThemePreference::System => match dark_light::detect() {
                Ok(dark_light::Mode::Light) => ThemeMode::Light,
                _ => ThemeMode::Dark,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn both_themes_have_ocean_brand() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();
        assert!(light.brand_primary.b > light.brand_primary.r);
        assert!(dark.brand_primary.b > dark.brand_primary.r);
    }

    #[test]
    fn default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert!(ThemeMode::default().is_dark());
    }

    #[test]
    fn toggle_flips_between_modes() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn iced_theme_round_trips_through_of() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            assert_eq!(ThemeMode::of(&mode.iced_theme()), mode);
        }
    }

    #[test]
    fn explicit_preferences_resolve_without_detection() {
        assert_eq!(ThemePreference::Light.resolve(), ThemeMode::Light);
        assert_eq!(ThemePreference::Dark.resolve(), ThemeMode::Dark);
        // Depends on the host; only check it does not panic.
        let _ = ThemePreference::System.resolve();
    }
}

// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for every screen of the client.

## Organization

- **Palette**: Base colors (ocean blues, neutrals, semantic colors)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use aqua_vision::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::ABYSS_900
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Neutrals
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.29, 0.33, 0.39);
    pub const GRAY_400: Color = Color::from_rgb(0.58, 0.62, 0.68);
    pub const GRAY_200: Color = Color::from_rgb(0.82, 0.85, 0.89);
    pub const GRAY_100: Color = Color::from_rgb(0.94, 0.96, 0.98);

    // Deep-water surfaces
    pub const ABYSS_900: Color = Color::from_rgb(0.04, 0.09, 0.16);
    pub const ABYSS_800: Color = Color::from_rgb(0.07, 0.14, 0.24);
    pub const ABYSS_700: Color = Color::from_rgb(0.10, 0.20, 0.32);

    // Brand colors (ocean scale)
    pub const OCEAN_100: Color = Color::from_rgb(0.88, 0.96, 0.99);
    pub const OCEAN_300: Color = Color::from_rgb(0.49, 0.83, 0.99);
    pub const OCEAN_400: Color = Color::from_rgb(0.22, 0.74, 0.97);
    pub const OCEAN_500: Color = Color::from_rgb(0.05, 0.65, 0.91);
    pub const OCEAN_600: Color = Color::from_rgb(0.01, 0.52, 0.78);
    pub const OCEAN_700: Color = Color::from_rgb(0.01, 0.41, 0.63);

    // Accent
    pub const TEAL_400: Color = Color::from_rgb(0.18, 0.83, 0.75);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const SUCCESS_500: Color = Color::from_rgb(0.133, 0.773, 0.369);
    pub const INFO_500: Color = Color::from_rgb(0.231, 0.510, 0.965);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Toasts and cards floating over content
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_XL: f32 = 48.0;

    pub const NAVBAR_HEIGHT: f32 = 56.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;

    pub const TOAST_WIDTH: f32 = 340.0;

    /// Height of the dashed drop zone on the upload screen.
    pub const DROP_ZONE_HEIGHT: f32 = 260.0;
    /// Max height of a preview inside the upload or results cards.
    pub const PREVIEW_MAX_HEIGHT: f32 = 420.0;
    /// Max width of the centered content column.
    pub const CONTENT_MAX_WIDTH: f32 = 1080.0;
    pub const FEATURE_CARD_WIDTH: f32 = 300.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale, from page heroes down to captions.

    /// Hero headline on the home screen
    pub const DISPLAY: f32 = 44.0;

    /// Page headings (Upload, Results, About)
    pub const TITLE_LG: f32 = 30.0;

    /// Card headings, brand name
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers
    pub const TITLE_SM: f32 = 18.0;

    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Card outlines
    pub const WIDTH_SM: f32 = 1.0;

    /// Drop zone outline, toast accents
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    const SHADOW_COLOR: Color = Color {
        a: 0.25,
        ..palette::BLACK
    };

    pub const SM: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const LG: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

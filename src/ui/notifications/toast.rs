// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the visible notification.
//!
//! A toast is a small card with a severity-colored border, a glyph, the
//! translated message and a dismiss button.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let severity = notification.severity();
        let accent_color = severity.color();

        let message_text = message_text(notification, i18n);

        let glyph = Text::new(severity.glyph())
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let message_widget = Text::new(message_text)
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss_button = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(notification.id()))
            .padding([0.0, spacing::XS])
            .style(dismiss_button_style);

        // Layout: [glyph] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast layer, positioned in the top-right corner below the
    /// navbar.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Option<Element<'a, Message>> {
        let notification = manager.current()?;

        Some(
            Container::new(Self::view(notification, i18n))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Top)
                .padding(iced::Padding {
                    top: sizing::NAVBAR_HEIGHT + spacing::MD,
                    right: spacing::MD,
                    bottom: spacing::MD,
                    left: spacing::MD,
                })
                .into(),
        )
    }
}

/// Translated message of `notification`, resolved at render time.
fn message_text(notification: &Notification, i18n: &I18n) -> String {
    i18n.tr(notification.message_key())
}

fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE,
            ..bg
        })),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::LG,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let hover_alpha = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: hover_alpha.map(|a| {
            iced::Background::Color(Color {
                a,
                ..palette::GRAY_400
            })
        }),
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&Theme::Dark, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn dismiss_button_highlights_on_hover() {
        let idle = dismiss_button_style(&Theme::Light, button::Status::Active);
        let hovered = dismiss_button_style(&Theme::Light, button::Status::Hovered);
        assert!(idle.background.is_none());
        assert!(hovered.background.is_some());
    }

    #[test]
    fn message_is_translated_in_current_locale() {
        let english = I18n::new(Some("en-US".into()), &Config::default());
        let french = I18n::new(Some("fr".into()), &Config::default());
        let notification = Notification::success("upload-enhance-success");

        assert_eq!(
            message_text(&notification, &english),
            "Enhancement completed successfully!"
        );
        let translated = message_text(&notification, &french);
        assert_ne!(translated, message_text(&notification, &english));
        assert!(!translated.starts_with("MISSING"), "{translated}");
    }

    #[test]
    fn visible_toast_renders_overlay() {
        let mut manager = Manager::new();
        manager.push(Notification::error("upload-no-file"));
        let i18n = I18n::default();
        assert!(Toast::view_overlay(&manager, &i18n).is_some());
    }

    #[test]
    fn empty_manager_renders_no_overlay() {
        let manager = Manager::new();
        let i18n = I18n::default();
        assert!(Toast::view_overlay(&manager, &i18n).is_none());
    }
}

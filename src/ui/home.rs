// SPDX-License-Identifier: MPL-2.0
//! Landing screen: tagline, call to action and feature highlights.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Horizontal,
    widget::{button, scrollable, text, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Feature cards as (glyph, title key, description key).
const FEATURES: [(&str, &str, &str); 3] = [
    ("✦", "home-feature-ai-title", "home-feature-ai-description"),
    ("⏱", "home-feature-speed-title", "home-feature-speed-description"),
    ("▣", "home-feature-quality-title", "home-feature-quality-description"),
];

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[derive(Debug, Clone)]
pub enum Message {
    TryEnhancement,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    OpenUpload,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::TryEnhancement => Event::OpenUpload,
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let headline = Text::new(ctx.i18n.tr("home-title"))
        .size(typography::DISPLAY);

    let subtitle = Text::new(ctx.i18n.tr("home-subtitle"))
        .size(typography::TITLE_SM)
        .style(|theme: &Theme| text::Style {
            color: Some(ThemeMode::of(theme).colors().text_secondary),
        });

    let cta = button(Text::new(ctx.i18n.tr("home-cta")).size(typography::BODY_LG))
        .on_press(Message::TryEnhancement)
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary);

    let features = FEATURES.into_iter().fold(
        Row::new().spacing(spacing::LG),
        |row, (glyph, title, description)| {
            row.push(feature_card(glyph, ctx.i18n.tr(title), ctx.i18n.tr(description)))
        },
    );

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .padding([spacing::XXL, spacing::LG])
        .push(headline)
        .push(subtitle)
        .push(cta)
        .push(features);

    scrollable(Container::new(content).width(Length::Fill).center_x(Length::Fill)).into()
}

fn feature_card<'a>(glyph: &'a str, title: String, description: String) -> Element<'a, Message> {
    let body = Column::new()
        .spacing(spacing::XS)
        .push(
            Text::new(glyph)
                .size(sizing::ICON_MD)
                .style(|theme: &Theme| text::Style {
                    color: Some(ThemeMode::of(theme).colors().accent),
                }),
        )
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(Text::new(description).size(typography::BODY));

    Container::new(body)
        .width(Length::Fixed(sizing::FEATURE_CARD_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! About screen: the model behind the service, the roadmap and contact
//! details.
//!
//! The screen is static; it emits no messages and is generic over the
//! parent's message type.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{rule, scrollable, text, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Contact address shown in the "Get in touch" section.
const CONTACT_EMAIL: &str = "info@aquavision.ai";

/// Roadmap entries as (glyph, title key, description key).
const ROADMAP: [(&str, &str, &str); 3] = [
    ("📡", "about-soon-live-title", "about-soon-live-description"),
    ("🗺", "about-soon-depth-title", "about-soon-depth-description"),
    ("🤖", "about-soon-detection-title", "about-soon-detection-description"),
];

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let title = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("about-title")).size(typography::TITLE_LG))
        .push(muted(format!("v{APP_VERSION}")));

    let model = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("about-model-training")).size(typography::BODY))
        .push(Text::new(ctx.i18n.tr("about-model-architecture")).size(typography::BODY));

    let roadmap = ROADMAP.into_iter().fold(
        Column::new().spacing(spacing::SM),
        |column, (glyph, title, description)| {
            column.push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(
                        Text::new(format!("{glyph} {}", ctx.i18n.tr(title)))
                            .size(typography::BODY_LG)
                            .style(|theme: &Theme| text::Style {
                                color: Some(ThemeMode::of(theme).colors().brand_primary),
                            }),
                    )
                    .push(muted(ctx.i18n.tr(description))),
            )
        },
    );

    let contact = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("about-contact-body")).size(typography::BODY))
        .push(
            Row::new()
                .spacing(spacing::SM)
                .push(Text::new(format!("{}:", ctx.i18n.tr("about-contact-email"))).size(typography::BODY))
                .push(Text::new(CONTACT_EMAIL).size(typography::BODY)),
        );

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::LG)
        .padding([spacing::XL, spacing::LG])
        .push(title)
        .push(section(ctx.i18n.tr("about-section-model"), model.into()))
        .push(section(ctx.i18n.tr("about-section-coming-soon"), roadmap.into()))
        .push(section(ctx.i18n.tr("about-section-contact"), contact.into()));

    scrollable(Container::new(content).center_x(Length::Fill)).into()
}

fn muted<'a, M: 'a>(content: String) -> Element<'a, M> {
    Text::new(content)
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(ThemeMode::of(theme).colors().text_secondary),
        })
        .into()
}

fn section<'a, M: 'a>(title: String, content: Element<'a, M>) -> Element<'a, M> {
    let inner = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_MD))
        .push(rule::horizontal(1))
        .push(content);

    Container::new(inner)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

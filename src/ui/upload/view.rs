// SPDX-License-Identifier: MPL-2.0
//! Upload screen layout.

use super::{Message, State};
use crate::app::config::ADVISORY_MAX_UPLOAD_MB;
use crate::i18n::fluent::I18n;
use crate::media::Preview;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, image::Image, scrollable, text, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length, Theme};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let i18n = ctx.i18n;
    let state = ctx.state;

    let title = Text::new(i18n.tr("upload-title")).size(typography::TITLE_LG);
    let subtitle = secondary_text(i18n.tr("upload-subtitle"), typography::BODY_LG);

    let zone_content: Element<'_, Message> = match (state.preview(), state.selected_path()) {
        (Some(preview), _) => preview_content(i18n, preview),
        (None, Some(_)) => secondary_text(i18n.tr("upload-preview-loading"), typography::BODY),
        (None, None) => empty_content(i18n, state.is_drag_active()),
    };

    let drop_zone = Container::new(zone_content)
        .width(Length::Fill)
        .height(Length::Fixed(
            if state.preview().is_some() {
                sizing::PREVIEW_MAX_HEIGHT + spacing::XXL * 2.0
            } else {
                sizing::DROP_ZONE_HEIGHT
            },
        ))
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::drop_zone(state.is_drag_active()));

    let content = Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .padding([spacing::XL, spacing::LG])
        .push(title)
        .push(subtitle)
        .push(drop_zone)
        .push(actions(i18n, state));

    scrollable(Container::new(content).center_x(Length::Fill)).into()
}

fn empty_content(i18n: &I18n, drag_active: bool) -> Element<'_, Message> {
    let headline_key = if drag_active {
        "upload-drop-release"
    } else {
        "upload-drop-title"
    };

    let browse = button(Text::new(i18n.tr("upload-browse-button")))
        .padding([spacing::XS, spacing::LG])
        .on_press(Message::BrowseClicked)
        .style(styles::button::secondary);

    let max_size = ADVISORY_MAX_UPLOAD_MB.to_string();

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new("⇪")
                .size(sizing::ICON_XL)
                .style(|theme: &Theme| text::Style {
                    color: Some(ThemeMode::of(theme).colors().brand_primary),
                }),
        )
        .push(Text::new(i18n.tr(headline_key)).size(typography::TITLE_SM))
        .push(secondary_text(i18n.tr("upload-drop-or"), typography::BODY))
        .push(browse)
        .push(secondary_text(
            i18n.tr_with_args("upload-max-size", &[("size", max_size.as_str())]),
            typography::CAPTION,
        ))
        .into()
}

fn preview_content<'a>(i18n: &I18n, preview: &'a Preview) -> Element<'a, Message> {
    let image = Image::new(preview.data.handle.clone())
        .height(Length::Fixed(sizing::PREVIEW_MAX_HEIGHT))
        .content_fit(ContentFit::Contain);

    let details = i18n.tr_with_args(
        "upload-preview-details",
        &[
            ("name", preview.file_name().as_str()),
            ("width", preview.data.width.to_string().as_str()),
            ("height", preview.data.height.to_string().as_str()),
        ],
    );

    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(image)
        .push(secondary_text(details, typography::CAPTION))
        .into()
}

fn actions<'a>(i18n: &I18n, state: &State) -> Element<'a, Message> {
    let enhance_label = if state.is_loading() {
        format!("⟳ {}", i18n.tr("upload-enhancing"))
    } else {
        i18n.tr("upload-enhance-button")
    };

    let mut enhance = button(Text::new(enhance_label).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary);
    if !state.is_loading() {
        enhance = enhance.on_press(Message::EnhanceClicked);
    }

    let mut row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(enhance);

    if state.selected_path().is_some() && !state.is_loading() {
        row = row.push(
            button(Text::new(i18n.tr("upload-reset-button")))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::ResetClicked)
                .style(styles::button::secondary),
        );
    }

    row.into()
}

fn secondary_text<'a>(content: String, size: f32) -> Element<'a, Message> {
    Text::new(content)
        .size(size)
        .style(|theme: &Theme| text::Style {
            color: Some(ThemeMode::of(theme).colors().text_secondary),
        })
        .into()
}

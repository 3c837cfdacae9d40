// SPDX-License-Identifier: MPL-2.0
//! Results screen: before/after comparison of the latest enhancement.
//!
//! The screen is a projection of the application's current
//! [`EnhancementResult`]. Its only local state is the display mode and the
//! decoded image handles, which are resolved once per result: data URIs are
//! decoded in process, URLs are downloaded through [`ApiClient::fetch_image`].

use crate::api::ApiClient;
use crate::domain::{EnhancementResult, ImageRef, ImageSource};
use crate::error::{Error, Result};
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, image::Image, scrollable, text, Column, Container, Row, Text};
use iced::{alignment, ContentFit, Element, Length, Task, Theme};

/// Formats a confidence fraction as a percentage with one decimal.
#[must_use]
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    SideBySide,
    EnhancedOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Original,
    Enhanced,
}

/// Display state of one image panel.
#[derive(Debug, Clone, Default)]
pub enum Slot {
    #[default]
    Empty,
    Loading,
    Ready(ImageData),
    Unavailable,
}

impl Slot {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Slot::Ready(_))
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    ShowComparison,
    ShowEnhancedOnly,
    EnhanceAnother,
    ImageResolved {
        generation: u64,
        side: Side,
        result: Result<ImageData>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    OpenUpload,
}

#[derive(Debug, Default)]
pub struct State {
    mode: Mode,
    original: Slot,
    enhanced: Slot,
    /// Bumped for every new result so late resolutions are discarded.
    generation: u64,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn slot(&self, side: Side) -> &Slot {
        match side {
            Side::Original => &self.original,
            Side::Enhanced => &self.enhanced,
        }
    }

    /// Called whenever the screen becomes visible.
    pub fn enter(&mut self) {
        self.mode = Mode::SideBySide;
    }

    /// Starts resolving the images of a newly stored result.
    pub fn load(&mut self, result: &EnhancementResult, api: Option<&ApiClient>) -> Task<Message> {
        self.generation += 1;
        self.original = Slot::Loading;
        self.enhanced = Slot::Loading;

        let generation = self.generation;
        tracing::debug!(generation, demo = result.is_demo(), "resolving result images");

        Task::batch([
            resolve_task(generation, Side::Original, result.original.clone(), api.cloned()),
            resolve_task(generation, Side::Enhanced, result.enhanced.clone(), api.cloned()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ShowComparison => {
                self.mode = Mode::SideBySide;
                Event::None
            }
            Message::ShowEnhancedOnly => {
                self.mode = Mode::EnhancedOnly;
                Event::None
            }
            Message::EnhanceAnother => Event::OpenUpload,
            Message::ImageResolved {
                generation,
                side,
                result,
            } => {
                self.apply_resolution(generation, side, result);
                Event::None
            }
        }
    }

    fn apply_resolution(&mut self, generation: u64, side: Side, result: Result<ImageData>) {
        if generation != self.generation {
            tracing::debug!(generation, current = self.generation, "discarding stale image");
            return;
        }

        let slot = match result {
            Ok(data) => Slot::Ready(data),
            Err(err) => {
                tracing::warn!(?side, error = %err, "result image unavailable");
                Slot::Unavailable
            }
        };

        match side {
            Side::Original => self.original = slot,
            Side::Enhanced => self.enhanced = slot,
        }
    }
}

fn resolve_task(
    generation: u64,
    side: Side,
    reference: ImageRef,
    api: Option<ApiClient>,
) -> Task<Message> {
    Task::perform(resolve_image(reference, api), move |result| {
        Message::ImageResolved {
            generation,
            side,
            result,
        }
    })
}

/// Turns a reference into decoded pixels.
///
/// # Errors
///
/// Fails when the reference is malformed, the download fails, or the
/// bytes are not an image.
pub async fn resolve_image(reference: ImageRef, api: Option<ApiClient>) -> Result<ImageData> {
    match reference.resolve()? {
        ImageSource::Inline(bytes) => media::image::decode(&bytes),
        ImageSource::Remote(url) => {
            let api = api.ok_or_else(|| Error::Io("no client to download the image".into()))?;
            let bytes = api
                .fetch_image(&url)
                .await
                .map_err(|e| Error::Io(e.to_string()))?;
            media::image::decode(&bytes)
        }
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub result: Option<&'a EnhancementResult>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content = match ctx.result {
        Some(result) => result_view(ctx.i18n, ctx.state, result),
        None => empty_view(ctx.i18n),
    };

    scrollable(Container::new(content).center_x(Length::Fill)).into()
}

fn empty_view(i18n: &I18n) -> Element<'_, Message> {
    Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .padding([spacing::XXL, spacing::LG])
        .push(
            Text::new("◌")
                .size(sizing::ICON_XL)
                .style(secondary_text_style),
        )
        .push(Text::new(i18n.tr("results-empty-title")).size(typography::TITLE_MD))
        .push(
            Text::new(i18n.tr("results-empty-body"))
                .size(typography::BODY)
                .style(secondary_text_style),
        )
        .push(
            button(Text::new(i18n.tr("results-go-upload")))
                .padding([spacing::SM, spacing::LG])
                .on_press(Message::EnhanceAnother)
                .style(styles::button::primary),
        )
        .into()
}

fn result_view<'a>(
    i18n: &I18n,
    state: &'a State,
    result: &'a EnhancementResult,
) -> Element<'a, Message> {
    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr("results-title")).size(typography::TITLE_LG));

    if result.is_demo() {
        header = header.push(
            Container::new(Text::new(i18n.tr("results-demo-badge")).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(|theme: &Theme| {
                    styles::container::badge(ThemeMode::of(theme).colors().error)(theme)
                }),
        );
    }

    let toggle = Row::new()
        .spacing(spacing::XS)
        .push(mode_button(
            i18n.tr("results-mode-compare"),
            state.mode == Mode::SideBySide,
            Message::ShowComparison,
        ))
        .push(mode_button(
            i18n.tr("results-mode-enhanced"),
            state.mode == Mode::EnhancedOnly,
            Message::ShowEnhancedOnly,
        ));

    let images: Element<'a, Message> = match state.mode {
        Mode::SideBySide => Row::new()
            .spacing(spacing::LG)
            .push(image_panel(i18n, i18n.tr("results-original"), &state.original))
            .push(image_panel(i18n, i18n.tr("results-enhanced"), &state.enhanced))
            .into(),
        Mode::EnhancedOnly => image_panel(i18n, i18n.tr("results-enhanced"), &state.enhanced),
    };

    let metadata = Row::new()
        .spacing(spacing::XL)
        .push(metric(
            i18n.tr("results-processing-time"),
            result.metadata.processing_time.clone(),
        ))
        .push(metric(
            i18n.tr("results-confidence"),
            format_confidence(result.metadata.confidence),
        ));

    let another = button(Text::new(i18n.tr("results-enhance-another")))
        .padding([spacing::SM, spacing::LG])
        .on_press(Message::EnhanceAnother)
        .style(styles::button::secondary);

    Column::new()
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .spacing(spacing::LG)
        .padding([spacing::XL, spacing::LG])
        .push(header)
        .push(toggle)
        .push(images)
        .push(
            Container::new(metadata)
                .width(Length::Fill)
                .padding(spacing::LG)
                .style(styles::container::card),
        )
        .push(another)
        .into()
}

fn mode_button<'a>(label: String, active: bool, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .on_press(message)
        .style(if active {
            styles::button::selected
        } else {
            styles::button::unselected
        })
        .into()
}

fn image_panel<'a>(i18n: &I18n, caption: String, slot: &'a Slot) -> Element<'a, Message> {
    let body: Element<'a, Message> = match slot {
        Slot::Ready(data) => Image::new(data.handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::PREVIEW_MAX_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        Slot::Empty | Slot::Loading => placeholder(i18n.tr("results-image-loading")),
        Slot::Unavailable => placeholder(i18n.tr("results-image-unavailable")),
    };

    Column::new()
        .width(Length::Fill)
        .spacing(spacing::XS)
        .push(Text::new(caption).size(typography::TITLE_SM))
        .push(
            Container::new(body)
                .width(Length::Fill)
                .padding(spacing::SM)
                .style(styles::container::card),
        )
        .into()
}

fn placeholder<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY).style(secondary_text_style))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PREVIEW_MAX_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn metric<'a>(label: String, value: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(label).size(typography::CAPTION).style(secondary_text_style))
        .push(Text::new(value).size(typography::TITLE_MD))
        .into()
}

fn secondary_text_style(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ThemeMode::of(theme).colors().text_secondary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ImageFormat;
    use crate::media::image::tests::png_bytes;

    fn sample_data() -> ImageData {
        media::image::decode(&png_bytes(2, 2)).expect("decode")
    }

    #[test]
    fn confidence_is_rendered_with_one_decimal() {
        assert_eq!(format_confidence(0.87), "87.0%");
        assert_eq!(format_confidence(0.94), "94.0%");
        assert_eq!(format_confidence(1.0), "100.0%");
        assert_eq!(format_confidence(0.0), "0.0%");
    }

    #[test]
    fn confidence_rounds_from_full_precision_response() {
        let cases = [
            ("0.0105", "1.1%"),
            ("0.0145", "1.5%"),
            ("0.0155", "1.6%"),
            ("0.8765", "87.6%"),
        ];
        for (raw, expected) in cases {
            let body = format!(
                r#"{{"enhanced_image":"X","processing_time":"1s","confidence":{raw}}}"#
            );
            let response: crate::api::EnhanceResponse =
                serde_json::from_str(&body).expect("parse response");
            assert_eq!(format_confidence(response.confidence), expected, "{raw}");
        }
    }

    #[test]
    fn entering_resets_to_side_by_side() {
        let mut state = State::new();
        state.update(Message::ShowEnhancedOnly);
        assert_eq!(state.mode(), Mode::EnhancedOnly);

        state.enter();
        assert_eq!(state.mode(), Mode::SideBySide);
    }

    #[test]
    fn enhance_another_opens_upload() {
        let mut state = State::new();
        assert_eq!(state.update(Message::EnhanceAnother), Event::OpenUpload);
    }

    #[test]
    fn load_marks_both_slots_loading() {
        let mut state = State::new();
        let result = EnhancementResult::demo_fallback(ImageRef::from_bytes(
            ImageFormat::Png,
            &png_bytes(2, 2),
        ));
        let _task = state.load(&result, None);

        assert!(matches!(state.slot(Side::Original), Slot::Loading));
        assert!(matches!(state.slot(Side::Enhanced), Slot::Loading));
    }

    #[test]
    fn resolution_fills_matching_slot() {
        let mut state = State::new();
        let result = EnhancementResult::demo_fallback(ImageRef::new("X"));
        let _task = state.load(&result, None);

        state.update(Message::ImageResolved {
            generation: 1,
            side: Side::Enhanced,
            result: Ok(sample_data()),
        });
        state.update(Message::ImageResolved {
            generation: 1,
            side: Side::Original,
            result: Err(Error::Image("bad".into())),
        });

        assert!(state.slot(Side::Enhanced).is_ready());
        assert!(matches!(state.slot(Side::Original), Slot::Unavailable));
    }

    #[test]
    fn stale_resolution_is_discarded() {
        let mut state = State::new();
        let result = EnhancementResult::demo_fallback(ImageRef::new("X"));
        let _first = state.load(&result, None);
        let _second = state.load(&result, None);

        state.update(Message::ImageResolved {
            generation: 1,
            side: Side::Enhanced,
            result: Ok(sample_data()),
        });

        assert!(matches!(state.slot(Side::Enhanced), Slot::Loading));
    }

    #[tokio::test]
    async fn inline_reference_decodes_without_client() {
        let reference = ImageRef::from_bytes(ImageFormat::Png, &png_bytes(3, 5));
        let data = resolve_image(reference, None).await.expect("resolve");
        assert_eq!((data.width, data.height), (3, 5));
    }

    #[tokio::test]
    async fn unrecognized_reference_is_an_error() {
        let result = resolve_image(ImageRef::new("X"), None).await;
        assert!(matches!(result, Err(Error::Image(_))));
    }

    #[tokio::test]
    async fn remote_reference_without_client_is_an_error() {
        let result = resolve_image(ImageRef::new("http://localhost:1/x.png"), None).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn views_render_with_and_without_result() {
        let i18n = I18n::default();
        let state = State::new();
        let result = EnhancementResult::demo_fallback(ImageRef::new("X"));

        let _empty = view(ViewContext {
            i18n: &i18n,
            state: &state,
            result: None,
        });
        let _filled = view(ViewContext {
            i18n: &i18n,
            state: &state,
            result: Some(&result),
        });
    }
}

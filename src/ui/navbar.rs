// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shown above every screen.
//!
//! Brand link on the left, one button per screen, theme toggle on the right.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current: Screen,
    pub theme_mode: ThemeMode,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Screen),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Navigate(Screen),
    ToggleTheme,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::Navigate(screen) => Event::Navigate(screen),
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = button(
        Text::new(ctx.i18n.tr("app-name")).size(typography::TITLE_MD),
    )
    .on_press(Message::Navigate(Screen::Home))
    .style(styles::button::ghost);

    let mut links = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for screen in Screen::ALL {
        let style = if screen == ctx.current {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        links = links.push(
            button(Text::new(ctx.i18n.tr(screen.label_key())).size(typography::BODY))
                .on_press(Message::Navigate(screen))
                .padding([spacing::XS, spacing::SM])
                .style(style),
        );
    }

    // Shows the mode the toggle switches to.
    let (toggle_glyph, toggle_key) = match ctx.theme_mode {
        ThemeMode::Dark => ("☀", "navbar-theme-light"),
        ThemeMode::Light => ("☾", "navbar-theme-dark"),
    };
    let theme_toggle = button(
        Row::new()
            .spacing(spacing::XXS)
            .align_y(Vertical::Center)
            .push(Text::new(toggle_glyph).size(typography::BODY_LG))
            .push(Text::new(ctx.i18n.tr(toggle_key)).size(typography::CAPTION)),
    )
    .on_press(Message::ToggleTheme)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::ghost);

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(links)
        .push(theme_toggle);

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .padding([0.0, spacing::LG])
        .style(styles::container::navbar)
        .into()
}

// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! This module handles the `view()` function that renders the navbar, the
//! current screen and the toast layer on top.

use super::{Message, Screen};
use crate::domain::EnhancementResult;
use crate::i18n::fluent::I18n;
use crate::ui::about::{self, ViewContext as AboutViewContext};
use crate::ui::home::{self, ViewContext as HomeViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::results::{self, ViewContext as ResultsViewContext};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::upload::{self, ViewContext as UploadViewContext};
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
    pub upload: &'a upload::State,
    pub results: &'a results::State,
    pub result: Option<&'a EnhancementResult>,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        current: ctx.screen,
        theme_mode: ctx.theme_mode,
    })
    .map(Message::Navbar);

    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Home => home::view(HomeViewContext { i18n: ctx.i18n }).map(Message::Home),
        Screen::Upload => upload::view(UploadViewContext {
            i18n: ctx.i18n,
            state: ctx.upload,
        })
        .map(Message::Upload),
        Screen::Results => results::view(ResultsViewContext {
            i18n: ctx.i18n,
            state: ctx.results,
            result: ctx.result,
        })
        .map(Message::Results),
        Screen::About => about::view(AboutViewContext { i18n: ctx.i18n }),
    };

    let page = Container::new(
        Column::new()
            .push(navbar_view)
            .push(
                Container::new(current_view)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::page);

    match Toast::view_overlay(ctx.notifications, ctx.i18n) {
        Some(toast) => Stack::new()
            .push(page)
            .push(toast.map(Message::Notification))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => page.into(),
    }
}

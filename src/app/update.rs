// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report what they need through events and effects; this module
//! turns those into state changes on `App` and into tasks (network calls,
//! timers, image decoding).

use super::config::RESULTS_NAVIGATION_DELAY;
use super::navigation::DeferredNavigation;
use super::{Message, Screen};
use crate::api::{ApiClient, ApiError};
use crate::domain::{EnhancementRequest, EnhancementResult};
use crate::i18n::fluent::I18n;
use crate::ui::home::{self, Event as HomeEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::notifications;
use crate::ui::results::{self, Event as ResultsEvent};
use crate::ui::theming::ThemeMode;
use crate::ui::upload::{self, Effect as UploadEffect};
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub screen: &'a mut Screen,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut notifications::Manager,
    pub upload: &'a mut upload::State,
    pub results: &'a mut results::State,
    pub result: &'a mut Option<EnhancementResult>,
    pub api: Option<&'a ApiClient>,
    pub navigation: &'a mut DeferredNavigation,
}

/// Switches screens on behalf of the user. Cancels any deferred switch.
pub fn navigate_to(ctx: &mut UpdateContext<'_>, target: Screen) -> Task<Message> {
    ctx.navigation.cancel();
    show_screen(ctx, target);
    Task::none()
}

fn show_screen(ctx: &mut UpdateContext<'_>, target: Screen) {
    if target == Screen::Results {
        ctx.results.enter();
    }
    if *ctx.screen != target {
        tracing::debug!(from = %ctx.screen, to = %target, "screen changed");
    }
    *ctx.screen = target;
}

pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message) {
        NavbarEvent::Navigate(screen) => navigate_to(ctx, screen),
        NavbarEvent::ToggleTheme => {
            *ctx.theme_mode = ctx.theme_mode.toggled();
            tracing::debug!(dark = ctx.theme_mode.is_dark(), "theme toggled");
            Task::none()
        }
    }
}

pub fn handle_home_message(ctx: &mut UpdateContext<'_>, message: &home::Message) -> Task<Message> {
    match home::update(message) {
        HomeEvent::OpenUpload => navigate_to(ctx, Screen::Upload),
    }
}

pub fn handle_results_message(
    ctx: &mut UpdateContext<'_>,
    message: results::Message,
) -> Task<Message> {
    match ctx.results.update(message) {
        ResultsEvent::None => Task::none(),
        ResultsEvent::OpenUpload => navigate_to(ctx, Screen::Upload),
    }
}

/// Handles upload screen messages and carries out the effects it returns.
pub fn handle_upload_message(
    ctx: &mut UpdateContext<'_>,
    message: upload::Message,
) -> Task<Message> {
    let (effect, task) = ctx.upload.handle_message(message, ctx.i18n);
    let upload_task = task.map(Message::Upload);

    let side_effect = match effect {
        UploadEffect::None => Task::none(),
        UploadEffect::Notify(notification) => {
            ctx.notifications.push(notification);
            Task::none()
        }
        UploadEffect::Enhance(request) => enhance(ctx.api, request),
        UploadEffect::Completed {
            result,
            notification,
        } => {
            ctx.notifications.push(notification);
            let images = ctx.results.load(&result, ctx.api).map(Message::Results);
            *ctx.result = Some(result);
            let navigation = ctx
                .navigation
                .schedule(Screen::Results, RESULTS_NAVIGATION_DELAY);
            Task::batch([images, navigation])
        }
    };

    Task::batch([upload_task, side_effect])
}

/// Sends the request, or reports a transport failure right away when no
/// client could be built at startup.
fn enhance(api: Option<&ApiClient>, request: EnhancementRequest) -> Task<Message> {
    let finished = |outcome| Message::Upload(upload::Message::EnhancementFinished(outcome));

    match api {
        Some(client) => {
            let client = client.clone();
            Task::perform(
                async move { client.enhance_image(request).await },
                finished,
            )
        }
        None => {
            tracing::warn!("no API client available, enhancement cannot be sent");
            Task::done(finished(Err(ApiError::Transport(
                "HTTP client unavailable".to_string(),
            ))))
        }
    }
}

/// Fires a deferred navigation if it is still the current one.
pub fn handle_navigation_due(ctx: &mut UpdateContext<'_>, id: u64) -> Task<Message> {
    if let Some(target) = ctx.navigation.fire(id) {
        show_screen(ctx, target);
    }
    Task::none()
}

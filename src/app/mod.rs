// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together localization, the toast manager, the
//! upload and results screens and the enhancement client, and translates
//! component effects into side effects like API calls or deferred
//! navigation.

pub mod config;
mod message;
pub mod navigation;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::{self, ApiClient};
use crate::domain::EnhancementResult;
use crate::i18n::fluent::I18n;
use crate::ui::notifications;
use crate::ui::results;
use crate::ui::theming::ThemeMode;
use crate::ui::upload;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use navigation::DeferredNavigation;
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    theme_mode: ThemeMode,
    notifications: notifications::Manager,
    upload: upload::State,
    results: results::State,
    /// Latest enhancement, kept for the session only.
    result: Option<EnhancementResult>,
    /// `None` when the HTTP client could not be built.
    api: Option<ApiClient>,
    navigation: DeferredNavigation,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("theme_mode", &self.theme_mode)
            .field("has_result", &self.result.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::default(),
            theme_mode: ThemeMode::default(),
            notifications: notifications::Manager::new(),
            upload: upload::State::new(),
            results: results::State::new(),
            result: None,
            api: None,
            navigation: DeferredNavigation::new(),
        }
    }
}

impl App {
    /// Initializes application state from the configuration file and the
    /// launcher flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let mut app = Self::from_config(flags.lang, &config);

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::error(key));
        }

        (app, Task::none())
    }

    fn from_config(lang: Option<String>, config: &Config) -> Self {
        let api = match ApiClient::new(api::DEFAULT_BASE_URL) {
            Ok(client) => {
                tracing::info!(base_url = client.base_url(), "enhancement service configured");
                Some(client)
            }
            Err(err) => {
                tracing::error!(error = %err, "HTTP client could not be built, enhancements will use demo mode");
                None
            }
        };

        Self {
            i18n: I18n::new(lang, config),
            theme_mode: config.general.theme_mode.resolve(),
            api,
            ..Self::default()
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-name");
        let screen_name = self.i18n.tr(self.screen.label_key());
        format!("{screen_name} - {app_name}")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.screen);
        let tick_sub =
            subscription::create_tick_subscription(self.notifications.has_notification());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            screen: &mut self.screen,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
            upload: &mut self.upload,
            results: &mut self.results,
            result: &mut self.result,
            api: self.api.as_ref(),
            navigation: &mut self.navigation,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Home(home_message) => update::handle_home_message(&mut ctx, &home_message),
            Message::Upload(upload_message) => {
                update::handle_upload_message(&mut ctx, upload_message)
            }
            Message::Results(results_message) => {
                update::handle_results_message(&mut ctx, results_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::NavigationDue(id) => update::handle_navigation_due(&mut ctx, id),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            theme_mode: self.theme_mode,
            upload: &self.upload,
            results: &self.results,
            result: self.result.as_ref(),
            notifications: &self.notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, EnhanceResponse};
    use crate::domain::ImageFormat;
    use crate::media::image::{load_preview, tests::png_bytes};
    use crate::ui::notifications::Severity;
    use crate::ui::{home, navbar};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    /// App with a decoded preview, ready to submit.
    fn app_with_preview(dir: &Path) -> App {
        let path = dir.join("reef.png");
        fs::write(&path, png_bytes(2, 2)).expect("write png");

        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Screen::Upload)));
        let _ = app.upload.select_file(path.clone());
        let preview = load_preview(&path, ImageFormat::Png).expect("preview");
        let _ = app.upload.apply_preview(&path, Ok(preview));
        app
    }

    fn pending_id(app: &App) -> u64 {
        app.navigation
            .pending()
            .map(navigation::PendingNavigation::id)
            .expect("navigation should be pending")
    }

    #[test]
    fn starts_on_home_in_dark_mode() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.theme_mode, ThemeMode::Dark);
        assert!(app.result.is_none());
        assert!(!app.notifications.has_notification());
    }

    #[test]
    fn navbar_navigation_sets_screen() {
        let mut app = App::default();
        for screen in Screen::ALL {
            let _ = app.update(Message::Navbar(navbar::Message::Navigate(screen)));
            assert_eq!(app.screen, screen);
        }
    }

    #[test]
    fn theme_toggle_flips_mode() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Light);

        let _ = app.update(Message::Navbar(navbar::Message::ToggleTheme));
        assert_eq!(app.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn home_call_to_action_opens_upload() {
        let mut app = App::default();
        let _ = app.update(Message::Home(home::Message::TryEnhancement));
        assert_eq!(app.screen, Screen::Upload);
    }

    #[test]
    fn submit_without_file_shows_error_and_stays() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Screen::Upload)));
        let _ = app.update(Message::Upload(upload::Message::EnhanceClicked));

        let toast = app.notifications.current().expect("toast");
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.message_key(), upload::NO_FILE_KEY);
        assert!(!app.upload.is_loading());
        assert!(app.navigation.pending().is_none());
    }

    #[test]
    fn dropping_unsupported_file_shows_error() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Screen::Upload)));
        let _ = app.update(Message::Upload(upload::Message::FileDropped("notes.gif".into())));

        let toast = app.notifications.current().expect("toast");
        assert_eq!(toast.message_key(), upload::INVALID_FORMAT_KEY);
        assert!(app.upload.selected_path().is_none());
        assert_eq!(app.screen, Screen::Upload);
    }

    #[test]
    fn server_success_stores_result_and_schedules_results() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_preview(dir.path());

        let _ = app.update(Message::Upload(upload::Message::EnhanceClicked));
        assert!(app.upload.is_loading());

        let response = EnhanceResponse {
            enhanced_image: "X".to_string(),
            processing_time: "1.2s".to_string(),
            confidence: 0.87,
        };
        let _ = app.update(Message::Upload(upload::Message::EnhancementFinished(Ok(
            response,
        ))));

        let result = app.result.as_ref().expect("result stored");
        assert_eq!(result.enhanced.as_str(), "X");
        assert_eq!(result.metadata.processing_time, "1.2s");
        assert_eq!(
            results::format_confidence(result.metadata.confidence),
            "87.0%"
        );
        assert_eq!(
            app.notifications.current().map(|n| n.message_key()),
            Some(upload::SUCCESS_KEY)
        );
        assert!(!app.upload.is_loading());
        assert_eq!(app.screen, Screen::Upload);

        let id = pending_id(&app);
        let _ = app.update(Message::NavigationDue(id));
        assert_eq!(app.screen, Screen::Results);
    }

    #[test]
    fn failure_falls_back_to_demo_result() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_preview(dir.path());
        let preview_ref = app.upload.preview().expect("preview").image.clone();

        let _ = app.update(Message::Upload(upload::Message::EnhanceClicked));
        let _ = app.update(Message::Upload(upload::Message::EnhancementFinished(Err(
            ApiError::Transport("connection refused".into()),
        ))));

        let result = app.result.as_ref().expect("result stored");
        assert!(result.is_demo());
        assert_eq!(result.original, preview_ref);
        assert_eq!(result.enhanced, preview_ref);
        assert_eq!(result.metadata.processing_time, "2.3s");

        let toast = app.notifications.current().expect("toast");
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.message_key(), upload::FALLBACK_KEY);
        assert!(app.navigation.pending().is_some());
    }

    #[test]
    fn user_navigation_cancels_deferred_switch() {
        let dir = tempdir().expect("temp dir");
        let mut app = app_with_preview(dir.path());

        let _ = app.update(Message::Upload(upload::Message::EnhanceClicked));
        let _ = app.update(Message::Upload(upload::Message::EnhancementFinished(Err(
            ApiError::Server {
                status: 500,
                message: "boom".into(),
            },
        ))));
        let id = pending_id(&app);

        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Screen::About)));
        let _ = app.update(Message::NavigationDue(id));
        assert_eq!(app.screen, Screen::About);
    }

    #[test]
    fn stale_navigation_id_is_ignored() {
        let mut app = App::default();
        let _ = app.update(Message::NavigationDue(42));
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn entering_results_resets_comparison_mode() {
        let mut app = App::default();
        let _ = app.update(Message::Results(results::Message::ShowEnhancedOnly));
        assert_eq!(app.results.mode(), results::Mode::EnhancedOnly);

        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Screen::Results)));
        assert_eq!(app.results.mode(), results::Mode::SideBySide);
    }

    #[test]
    fn results_placeholder_button_opens_upload() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Screen::Results)));
        let _ = app.update(Message::Results(results::Message::EnhanceAnother));
        assert_eq!(app.screen, Screen::Upload);
    }

    #[test]
    fn notification_dismiss_clears_toast() {
        let mut app = App::default();
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Screen::Upload)));
        let _ = app.update(Message::Upload(upload::Message::EnhanceClicked));
        let id = app.notifications.current().expect("toast").id();

        let _ = app.update(Message::Notification(
            notifications::NotificationMessage::Dismiss(id),
        ));
        assert!(!app.notifications.has_notification());
    }

    #[test]
    fn from_config_applies_theme() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"light\"\n").expect("config");

        let app = App::from_config(Some("en-US".into()), &config);
        assert_eq!(app.theme_mode, ThemeMode::Light);
    }

    #[test]
    fn service_url_ignores_settings_file() {
        let config: Config = toml::from_str(
            "[general]\ntheme_mode = \"dark\"\n[api]\nbase_url = \"http://example.test/api\"\n",
        )
        .expect("config");

        let app = App::from_config(Some("en-US".into()), &config);
        assert_eq!(
            app.api.as_ref().map(ApiClient::base_url),
            Some(api::DEFAULT_BASE_URL)
        );
    }

    #[test]
    fn title_names_current_screen() {
        let mut app = App::from_config(Some("en-US".into()), &Config::default());
        let _ = app.update(Message::Navbar(navbar::Message::Navigate(Screen::About)));
        let title = app.title();
        assert!(title.ends_with("AquaVision"), "{title}");
        assert!(!title.contains("MISSING"), "{title}");
    }

    #[test]
    fn view_renders_every_screen() {
        let mut app = App::default();
        for screen in Screen::ALL {
            let _ = app.update(Message::Navbar(navbar::Message::Navigate(screen)));
            let _element = app.view();
        }
    }
}

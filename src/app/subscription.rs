// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! File drag-and-drop is only routed while the upload screen is visible;
//! on other screens dropped files are ignored.

use super::config::NOTIFICATION_TICK_INTERVAL;
use super::{Message, Screen};
use crate::ui::notifications::NotificationMessage;
use crate::ui::upload;
use iced::{event, time, window, Subscription};

/// Creates the window event subscription for the current screen.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Upload => event::listen_with(|event, _status, _window_id| match event {
            event::Event::Window(window::Event::FileHovered(_)) => {
                Some(Message::Upload(upload::Message::DragEntered))
            }
            event::Event::Window(window::Event::FilesHoveredLeft) => {
                Some(Message::Upload(upload::Message::DragLeft))
            }
            event::Event::Window(window::Event::FileDropped(path)) => {
                Some(Message::Upload(upload::Message::FileDropped(path)))
            }
            _ => None,
        }),
        Screen::Home | Screen::Results | Screen::About => Subscription::none(),
    }
}

/// Ticks the notification manager while a toast is visible.
pub fn create_tick_subscription(has_notification: bool) -> Subscription<Message> {
    if has_notification {
        time::every(NOTIFICATION_TICK_INTERVAL)
            .map(|_| Message::Notification(NotificationMessage::Tick))
    } else {
        Subscription::none()
    }
}

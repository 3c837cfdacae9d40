// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! One toast at a time: a new notification replaces the visible one and
//! restarts the 3 second lifetime. Toasts never block interaction.
//!
//! # Components
//!
//! - [`notification`] - `Notification` and its `Severity`
//! - [`manager`] - `Manager`, owner of the visible toast
//! - [`toast`] - widget rendering the toast
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("upload-enhance-success"));
//!
//! let overlay = Toast::view_overlay(&manager, &i18n).map(|e| e.map(Message::Notification));
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;

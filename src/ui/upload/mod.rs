// SPDX-License-Identifier: MPL-2.0
//! Upload screen: file selection, preview, submission and the enhancement
//! outcome.
//!
//! The component owns the selected file, its decoded preview and the
//! `loading` flag. It never talks to the network itself: submitting returns
//! an [`Effect::Enhance`] that the application turns into an API call, and
//! the call's outcome comes back as [`Message::EnhancementFinished`].
//!
//! At most one request is in flight. While one is, selecting, dropping,
//! resetting and submitting are refused with an info toast.

mod state;
mod view;

pub use state::{Phase, State, DROP_GESTURE_WINDOW};
pub use view::{view, ViewContext};

use crate::api::EnhancementOutcome;
use crate::domain::{EnhancementRequest, EnhancementResult};
use crate::error::Error;
use crate::media::Preview;
use crate::ui::notifications::Notification;
use std::path::PathBuf;

/// Toast shown when the declared type is not JPEG or PNG.
pub const INVALID_FORMAT_KEY: &str = "notification-invalid-format";
/// Toast shown when submitting without a file.
pub const NO_FILE_KEY: &str = "upload-no-file";
/// Toast shown when submitting before the preview is decoded.
pub const PREVIEW_PENDING_KEY: &str = "upload-preview-pending";
/// Toast shown for any interaction refused while a request is in flight.
pub const BUSY_KEY: &str = "upload-busy";
/// Toast shown after a successful enhancement.
pub const SUCCESS_KEY: &str = "upload-enhance-success";
/// Toast shown when the service failed and the demo result is used.
pub const FALLBACK_KEY: &str = "upload-enhance-fallback";

#[derive(Debug, Clone)]
pub enum Message {
    BrowseClicked,
    FileDialogClosed(Option<PathBuf>),
    PreviewLoaded {
        path: PathBuf,
        result: Result<Preview, Error>,
    },
    EnhanceClicked,
    ResetClicked,
    /// A file is hovering over the window.
    DragEntered,
    /// The hovering files left the window without being dropped.
    DragLeft,
    /// One file of a drop gesture. Iced emits one per file.
    FileDropped(PathBuf),
    EnhancementFinished(EnhancementOutcome),
}

/// Work the application performs on behalf of the upload screen.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Show a toast.
    Notify(Notification),
    /// Send the request to the enhancement service.
    Enhance(EnhancementRequest),
    /// An enhancement finished, by the service or by the demo fallback.
    /// The application stores the result, shows the toast and schedules the
    /// switch to the results screen.
    Completed {
        result: EnhancementResult,
        notification: Notification,
    },
}

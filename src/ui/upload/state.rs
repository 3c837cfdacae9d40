// SPDX-License-Identifier: MPL-2.0
//! Upload flow state machine.

use super::{
    Effect, Message, BUSY_KEY, FALLBACK_KEY, INVALID_FORMAT_KEY, NO_FILE_KEY, PREVIEW_PENDING_KEY,
    SUCCESS_KEY,
};
use crate::api::EnhancementOutcome;
use crate::domain::image::ACCEPTED_EXTENSIONS;
use crate::domain::{EnhancementRequest, EnhancementResult, ImageFormat, ImageRef};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, Preview};
use crate::ui::notifications::Notification;
use iced::Task;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Drops arriving this soon after an accepted drop belong to the same
/// gesture, even if the platform sent no hover event in between.
pub const DROP_GESTURE_WINDOW: Duration = Duration::from_millis(500);

/// Where the upload flow stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Empty,
    FileSelected,
    Enhancing,
    Enhanced,
    DemoFallback,
}

#[derive(Debug, Default)]
pub struct State {
    /// File whose preview is shown or being decoded.
    selected: Option<PathBuf>,
    preview: Option<Preview>,
    loading: bool,
    drag_active: bool,
    /// Set by the first accepted drop of a gesture, cleared by the next hover.
    drop_latched_at: Option<Instant>,
    phase: Phase,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_drag_active(&self) -> bool {
        self.drag_active
    }

    #[must_use]
    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    #[must_use]
    pub fn selected_path(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    pub fn handle_message(&mut self, message: Message, i18n: &I18n) -> (Effect, Task<Message>) {
        match message {
            Message::BrowseClicked => {
                if self.loading {
                    return (busy(), Task::none());
                }
                (Effect::None, open_file_dialog(i18n.tr("upload-file-filter")))
            }
            Message::FileDialogClosed(Some(path)) => self.select_file(path),
            Message::FileDialogClosed(None) => (Effect::None, Task::none()),
            Message::PreviewLoaded { path, result } => {
                (self.apply_preview(&path, result), Task::none())
            }
            Message::EnhanceClicked => (self.submit(), Task::none()),
            Message::ResetClicked => (self.reset(), Task::none()),
            Message::DragEntered => {
                self.drag_entered();
                (Effect::None, Task::none())
            }
            Message::DragLeft => {
                self.drag_left();
                (Effect::None, Task::none())
            }
            Message::FileDropped(path) => self.file_dropped_at(path, Instant::now()),
            Message::EnhancementFinished(outcome) => (self.finish(outcome), Task::none()),
        }
    }

    /// Accepts `path` if its declared type is JPEG or PNG and starts
    /// decoding its preview.
    ///
    /// A rejected file leaves the state untouched and yields one error
    /// toast.
    pub fn select_file(&mut self, path: PathBuf) -> (Effect, Task<Message>) {
        if self.loading {
            return (busy(), Task::none());
        }

        let format = match ImageFormat::from_path(&path) {
            Ok(format) => format,
            Err(err) => {
                tracing::info!(path = %path.display(), error = %err, "rejected file selection");
                return (
                    Effect::Notify(Notification::error(INVALID_FORMAT_KEY)),
                    Task::none(),
                );
            }
        };

        tracing::debug!(path = %path.display(), %format, "file selected");
        self.selected = Some(path.clone());
        self.preview = None;
        self.phase = Phase::FileSelected;

        let task = Task::perform(
            {
                let path = path.clone();
                async move { media::image::load_preview(&path, format) }
            },
            move |result| Message::PreviewLoaded { path, result },
        );
        (Effect::None, task)
    }

    /// Stores a decoded preview, ignoring results for a file that is no
    /// longer selected.
    pub fn apply_preview(&mut self, path: &Path, result: Result<Preview, Error>) -> Effect {
        if self.selected_path() != Some(path) {
            tracing::debug!(path = %path.display(), "discarding stale preview");
            return Effect::None;
        }

        match result {
            Ok(preview) => {
                self.preview = Some(preview);
                Effect::None
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "preview could not be loaded");
                self.selected = None;
                self.preview = None;
                self.phase = Phase::Empty;
                Effect::Notify(Notification::error(err.i18n_key()))
            }
        }
    }

    /// Starts an enhancement of the selected file.
    pub fn submit(&mut self) -> Effect {
        if self.loading {
            return busy();
        }
        if self.selected.is_none() {
            return Effect::Notify(Notification::error(NO_FILE_KEY));
        }
        let Some(preview) = &self.preview else {
            return Effect::Notify(Notification::info(PREVIEW_PENDING_KEY));
        };

        let request =
            EnhancementRequest::new(preview.file_name(), preview.format, preview.bytes.clone());
        self.loading = true;
        self.phase = Phase::Enhancing;
        Effect::Enhance(request)
    }

    /// Turns the service outcome into a result. Failures of any kind fall
    /// back to the demo result built from the preview.
    pub fn finish(&mut self, outcome: EnhancementOutcome) -> Effect {
        if !self.loading {
            tracing::warn!("enhancement outcome received with no request in flight");
            return Effect::None;
        }
        self.loading = false;

        // Selection changes are refused while loading, so the preview that
        // was submitted is still here.
        let Some(original) = self.preview.as_ref().map(|preview| preview.image.clone()) else {
            tracing::warn!("enhancement outcome received without a preview");
            self.phase = Phase::Empty;
            return Effect::None;
        };

        let (result, notification) = match outcome {
            Ok(response) => {
                self.phase = Phase::Enhanced;
                (
                    EnhancementResult::from_server(
                        original,
                        ImageRef::new(response.enhanced_image),
                        response.processing_time,
                        response.confidence,
                    ),
                    Notification::success(SUCCESS_KEY),
                )
            }
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    reason = err.user_message(),
                    "enhancement failed, using demo result"
                );
                self.phase = Phase::DemoFallback;
                (
                    EnhancementResult::demo_fallback(original),
                    Notification::error(FALLBACK_KEY),
                )
            }
        };

        Effect::Completed {
            result,
            notification,
        }
    }

    /// Clears the selection so another file can be chosen.
    pub fn reset(&mut self) -> Effect {
        if self.loading {
            return busy();
        }
        self.selected = None;
        self.preview = None;
        self.phase = Phase::Empty;
        Effect::None
    }

    pub fn drag_entered(&mut self) {
        self.drag_active = true;
        self.drop_latched_at = None;
    }

    pub fn drag_left(&mut self) {
        self.drag_active = false;
    }

    /// Handles one dropped file. Only the first file of a gesture is
    /// selected; the others are ignored without a toast.
    pub fn file_dropped_at(&mut self, path: PathBuf, now: Instant) -> (Effect, Task<Message>) {
        self.drag_active = false;

        if let Some(latched) = self.drop_latched_at {
            if now.saturating_duration_since(latched) < DROP_GESTURE_WINDOW {
                tracing::debug!(path = %path.display(), "ignoring extra dropped file");
                return (Effect::None, Task::none());
            }
        }
        self.drop_latched_at = Some(now);
        self.select_file(path)
    }
}

fn busy() -> Effect {
    Effect::Notify(Notification::info(BUSY_KEY))
}

fn open_file_dialog(filter_name: String) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .add_filter(filter_name, ACCEPTED_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FileDialogClosed,
    )
}

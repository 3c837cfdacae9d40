// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::home;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::results;
use crate::ui::upload;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Home(home::Message),
    Upload(upload::Message),
    Results(results::Message),
    Notification(notifications::NotificationMessage),
    /// A deferred navigation timer elapsed.
    NavigationDue(u64),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `AQUA_VISION_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

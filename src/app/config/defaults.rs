// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and timing constants.
//!
//! # Categories
//!
//! - **Timing**: toast lifetime and the deferred switch to the results screen
//! - **Upload**: advisory limits shown to the user

use std::time::Duration;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Delay between a finished enhancement and the switch to the results screen.
pub const RESULTS_NAVIGATION_DELAY: Duration = Duration::from_secs(1);

/// Tick interval driving toast auto-dismiss.
pub const NOTIFICATION_TICK_INTERVAL: Duration = Duration::from_millis(100);

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Maximum upload size advertised in the UI, in megabytes.
///
/// The client does not enforce it; the backend does.
pub const ADVISORY_MAX_UPLOAD_MB: u32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_outlives_navigation_delay() {
        assert!(TOAST_DURATION > RESULTS_NAVIGATION_DELAY);
    }

    #[test]
    fn tick_is_finer_than_toast_duration() {
        assert!(NOTIFICATION_TICK_INTERVAL * 10 <= TOAST_DURATION);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Screens the user can navigate between. Exactly one is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Upload,
    Results,
    About,
}

impl Screen {
    /// Every screen, in navbar order.
    pub const ALL: [Screen; 4] = [Screen::Home, Screen::Upload, Screen::Results, Screen::About];

    /// Canonical lowercase name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Upload => "upload",
            Screen::Results => "results",
            Screen::About => "about",
        }
    }

    /// i18n key of the navbar label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Screen::Home => "navbar-home",
            Screen::Upload => "navbar-upload",
            Screen::Results => "navbar-results",
            Screen::About => "navbar-about",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Screen {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.name() == s)
            .ok_or_else(|| Error::UnknownScreen(s.to_string()))
    }
}

// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Landing page with the call to action and feature cards
//! - [`upload`] - File selection, preview and submission
//! - [`results`] - Before/after comparison of the latest enhancement
//! - [`about`] - Model description, roadmap and contact
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Navigation bar with the theme toggle
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme mode and color schemes

pub mod about;
pub mod design_tokens;
pub mod home;
pub mod navbar;
pub mod notifications;
pub mod results;
pub mod styles;
pub mod theming;
pub mod upload;

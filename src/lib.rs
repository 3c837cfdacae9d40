// SPDX-License-Identifier: MPL-2.0
//! `aqua_vision` is a desktop client for an underwater image enhancement
//! service, built with the Iced GUI framework.
//!
//! Users pick or drop a JPEG/PNG photo, send it to the enhancement backend
//! and compare the original with the restored image. When the service is
//! unreachable a demo result keeps the flow usable.

pub mod api;
pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

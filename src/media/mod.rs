// SPDX-License-Identifier: MPL-2.0
//! Local image decoding.

pub mod image;

pub use image::{ImageData, Preview};

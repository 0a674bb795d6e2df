// SPDX-License-Identifier: MPL-2.0
//! `pictopy` is a desktop photo gallery built with the Iced GUI framework.
//!
//! It renders a responsive grid of media thumbnails with click-to-open
//! dispatch, and a navigation bar whose display name can be edited inline
//! and persists across sessions.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

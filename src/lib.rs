// SPDX-License-Identifier: MPL-2.0
//! `quadrant_survey` is a small survey application built with the Iced GUI framework.
//!
//! It presents one question at a time and lets the user answer by dragging a
//! marker inside a square "quadrant" region, or by picking a named preset,
//! then move forward and backward through the question list. It demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod survey;
pub mod ui;

#[cfg(test)]
pub mod test_utils;

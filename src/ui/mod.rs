// SPDX-License-Identifier: MPL-2.0
//! UI components and shared presentation helpers.

pub mod board;
pub mod design_tokens;
pub mod settings;
pub mod styles;
pub mod theme;
pub mod theming;

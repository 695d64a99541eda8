// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the survey board.

use crate::ui::design_tokens::opacity;
use crate::ui::theming::ColorScheme;
use iced::Color;

/// Fill color of the marker dot.
pub fn marker_color(scheme: &ColorScheme) -> Color {
    scheme.accent
}

/// Translucent halo drawn behind the marker dot.
pub fn marker_halo_color(scheme: &ColorScheme) -> Color {
    Color {
        a: opacity::HALO,
        ..scheme.accent
    }
}

/// Color of the 3x3 grid lines inside the quadrant.
pub fn board_grid_color(scheme: &ColorScheme) -> Color {
    scheme.board_grid
}

/// Color of the quadrant's outer border.
pub fn board_border_color(scheme: &ColorScheme) -> Color {
    scheme.board_border
}

/// Color of the axis captions around the quadrant.
pub fn axis_caption_color(scheme: &ColorScheme) -> Color {
    scheme.text_secondary
}

/// Standard color for muted/secondary text.
pub fn muted_text_color(scheme: &ColorScheme) -> Color {
    scheme.text_secondary
}

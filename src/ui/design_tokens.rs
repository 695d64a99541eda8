// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens following the W3C Design Tokens standard.
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Accent color for the marker (orange scale, matching the survey brand)
    pub const ACCENT_400: Color = Color::from_rgb(0.992, 0.573, 0.282);
    pub const ACCENT_500: Color = Color::from_rgb(0.976, 0.451, 0.086);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const HALO: f32 = 0.3;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Side length of the quadrant region.
    pub const BOARD_SIDE: f32 = 420.0;

    /// Radius of the marker dot.
    pub const MARKER_RADIUS: f32 = 12.0;

    /// Radius of the translucent halo drawn behind the marker.
    pub const MARKER_HALO_RADIUS: f32 = 16.0;

    /// Inset of axis captions from the quadrant edges.
    pub const AXIS_CAPTION_INSET: f32 = 8.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const CAPTION: f32 = 13.0;
    pub const BODY: f32 = 15.0;
    pub const BODY_LG: f32 = 17.0;
    pub const HEADING: f32 = 22.0;
    pub const TITLE: f32 = 30.0;
}

// ============================================================================
// Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const PILL: f32 = 999.0;
}

// ============================================================================
// Border Width Scale
// ============================================================================

pub mod border {
    pub const THIN: f32 = 1.0;
    pub const MEDIUM: f32 = 2.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_keeps_ratios() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn halo_is_larger_than_marker() {
        assert!(sizing::MARKER_HALO_RADIUS > sizing::MARKER_RADIUS);
    }

    #[test]
    fn accent_colors_are_warm() {
        assert!(palette::ACCENT_500.r > palette::ACCENT_500.b);
    }
}

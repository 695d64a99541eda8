// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, palette, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Shadow, Theme};

/// Style for the primary action (e.g. the highlighted language button).
pub fn primary(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let brand = scheme.brand_primary;
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => palette::PRIMARY_400,
            _ => brand,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::THIN,
                radius: radius::SM.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Outlined style used for presets and navigation buttons.
pub fn outline(scheme: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let idle = scheme.surface_primary;
    let hover = scheme.surface_secondary;
    let text_color = scheme.text_primary;
    let border_color = scheme.board_border;
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => hover,
            _ => idle,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: border_color,
                width: border::THIN,
                radius: radius::SM.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_follows_the_active_scheme() {
        let dark = ColorScheme::dark();
        let style = outline(&dark)(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(dark.surface_primary))
        );
        assert_eq!(style.text_color, dark.text_primary);

        let light = ColorScheme::light();
        let style = outline(&light)(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(light.surface_primary))
        );
        assert_eq!(style.text_color, light.text_primary);
    }

    #[test]
    fn outline_hover_uses_the_secondary_surface() {
        let dark = ColorScheme::dark();
        let style = outline(&dark)(&Theme::Dark, button::Status::Hovered);
        assert_eq!(
            style.background,
            Some(Background::Color(dark.surface_secondary))
        );
    }

    #[test]
    fn primary_keeps_brand_colors() {
        let scheme = ColorScheme::light();
        let style = primary(&scheme)(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(scheme.brand_primary))
        );
        assert_eq!(style.text_color, palette::WHITE);
    }
}

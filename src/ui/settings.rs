// SPDX-License-Identifier: MPL-2.0
//! Settings screen: language selection and theme mode.
//!
//! The screen is stateless; choices are applied by the application update
//! loop and persisted to the config file.

use iced::alignment::Horizontal;
use iced::widget::{button, text, Column, Row};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::{ColorScheme, ThemeMode};

/// Messages emitted by the settings screen.
#[derive(Debug, Clone)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    Back,
}

/// Context needed to render the settings screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub scheme: &'a ColorScheme,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let title = text(i18n.tr("settings-title")).size(typography::TITLE);

    let mut language_column = Column::new()
        .push(text(i18n.tr("select-language-label")).size(typography::BODY_LG))
        .spacing(spacing::XS);

    for locale in &i18n.available_locales {
        let translated_name = i18n.tr(&format!("language-name-{}", locale));
        let label = if translated_name.starts_with("MISSING:") {
            locale.to_string()
        } else {
            format!("{} ({})", translated_name, locale)
        };

        let entry = button(text(label).size(typography::BODY));
        let entry = if i18n.current_locale() == locale {
            entry.style(styles::button::primary(ctx.scheme))
        } else {
            entry.style(styles::button::outline(ctx.scheme))
        };

        language_column =
            language_column.push(entry.on_press(Message::LanguageSelected(locale.clone())));
    }

    let mut theme_row = Row::new().spacing(spacing::XS);
    for mode in ThemeMode::ALL {
        let entry = button(text(i18n.tr(mode.i18n_key())).size(typography::BODY));
        let entry = if mode == ctx.theme_mode {
            entry.style(styles::button::primary(ctx.scheme))
        } else {
            entry.style(styles::button::outline(ctx.scheme))
        };
        theme_row = theme_row.push(entry.on_press(Message::ThemeModeSelected(mode)));
    }

    let theme_column = Column::new()
        .push(text(i18n.tr("select-theme-label")).size(typography::BODY_LG))
        .push(theme_row)
        .spacing(spacing::XS);

    let back = button(text(i18n.tr("settings-back")).size(typography::BODY))
        .style(styles::button::outline(ctx.scheme))
        .on_press(Message::Back);

    Column::new()
        .push(title)
        .push(language_column)
        .push(theme_column)
        .push(back)
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_builds_for_every_theme_mode() {
        let i18n = I18n::default();
        let scheme = ColorScheme::dark();
        for mode in ThemeMode::ALL {
            let _ = view(ViewContext {
                i18n: &i18n,
                theme_mode: mode,
                scheme: &scheme,
            });
        }
    }
}

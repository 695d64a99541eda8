// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen and the small header bar that leads to the
//! settings screen.

use iced::widget::{button, text, Column, Row, Space};
use iced::{Element, Length};

use super::{App, Message, Screen};
use crate::ui::board;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::settings;
use crate::ui::styles;

/// Renders the current application view based on the active screen.
pub fn view(app: &App) -> Element<'_, Message> {
    match app.screen {
        Screen::Survey => view_survey(app),
        Screen::Settings => view_settings(app),
    }
}

fn view_survey(app: &App) -> Element<'_, Message> {
    let header = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(
            button(text(app.i18n.tr("settings-open")).size(typography::CAPTION))
                .style(styles::button::outline(&app.scheme))
                .on_press(Message::SwitchScreen(Screen::Settings)),
        )
        .padding(spacing::XS)
        .width(Length::Fill);

    let board_view = app
        .board
        .view(board::ViewContext {
            i18n: &app.i18n,
            scheme: &app.scheme,
        })
        .map(Message::Board);

    Column::new()
        .push(header)
        .push(board_view)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_settings(app: &App) -> Element<'_, Message> {
    settings::view(settings::ViewContext {
        i18n: &app.i18n,
        theme_mode: app.theme_mode,
        scheme: &app.scheme,
    })
    .map(Message::Settings)
}

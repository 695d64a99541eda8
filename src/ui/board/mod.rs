// SPDX-License-Identifier: MPL-2.0
//! The quadrant picker component.
//!
//! Renders one question's axis captions around a square region, tracks the
//! marker position through drag or preset selection, and cycles through the
//! question list. All interaction state lives in the [`Session`].

mod canvas;

pub use canvas::{AxisCaptions, QuadrantCanvas};

use iced::alignment::Horizontal;
use iced::widget::{button, container, text, Canvas, Column, Row, Space};
use iced::{Border, Element, Length, Theme};

use crate::i18n::fluent::I18n;
use crate::survey::{self, Position, Session};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;

/// Board component state: one survey session.
#[derive(Debug, Clone, Default)]
pub struct State {
    session: Session,
}

/// Messages produced by the quadrant canvas and the surrounding controls.
#[derive(Debug, Clone)]
pub enum Message {
    /// A pointer press started a drag at the given percent position.
    DragStarted(Position),
    /// The pointer moved; only applied while a drag is active.
    DragMoved(Position),
    /// The pointer was released, lifted, or left the quadrant.
    DragEnded,
    /// A preset button was clicked (index into the preset catalog).
    PresetSelected(usize),
    NextQuestion,
    PreviousQuestion,
}

/// Context needed to render the board.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: &'a ColorScheme,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the session, mainly for the window title and tests.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::DragStarted(position) => self.session.drag_start(position),
            Message::DragMoved(position) => self.session.drag_move(position),
            Message::DragEnded => self.session.drag_end(),
            Message::PresetSelected(index) => {
                // Out-of-range indices cannot come from the preset buttons;
                // ignore them rather than panic.
                if let Some(preset) = survey::presets().get(index) {
                    self.session.select_preset(preset);
                }
            }
            Message::NextQuestion => self.session.next(),
            Message::PreviousQuestion => self.session.previous(),
        }
    }

    pub fn view<'a>(&self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let content = Column::new()
            .push(self.view_header(&ctx))
            .push(self.view_quadrant(&ctx))
            .push(self.view_presets(&ctx))
            .push(self.view_footer(&ctx))
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .width(Length::Shrink);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .padding(spacing::LG)
            .into()
    }

    fn view_header<'a>(&self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let question = self.session.question();
        let i18n = ctx.i18n;

        let current = (self.session.question_index() + 1).to_string();
        let total = self.session.question_count().to_string();
        let counter = i18n.tr_with_args(
            "board-question-counter",
            &[("current", current.as_str()), ("total", total.as_str())],
        );

        let chip_background = ctx.scheme.surface_secondary;
        let chip_text = ctx.scheme.text_primary;
        let counter_chip = container(text(counter).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(move |_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(chip_background)),
                border: Border {
                    radius: radius::PILL.into(),
                    ..Border::default()
                },
                text_color: Some(chip_text),
                ..Default::default()
            });

        let title_row = Row::new()
            .push(text(i18n.tr("board-title")).size(typography::BODY_LG))
            .push(Space::new().width(Length::Fill))
            .push(counter_chip)
            .align_y(iced::alignment::Vertical::Center)
            .width(Length::Fixed(sizing::BOARD_SIDE));

        Column::new()
            .push(title_row)
            .push(
                text(i18n.tr(question.text))
                    .size(typography::BODY)
                    .width(Length::Fixed(sizing::BOARD_SIDE)),
            )
            .spacing(spacing::XS)
            .into()
    }

    fn view_quadrant<'a>(&self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let question = self.session.question();
        let i18n = ctx.i18n;

        let captions = AxisCaptions {
            top: i18n.tr(question.y_axis.start),
            bottom: i18n.tr(question.y_axis.end),
            left: i18n.tr(question.x_axis.start),
            right: i18n.tr(question.x_axis.end),
        };

        Canvas::new(QuadrantCanvas {
            position: self.session.position(),
            captions,
            scheme: ctx.scheme.clone(),
        })
        .width(Length::Fixed(sizing::BOARD_SIDE))
        .height(Length::Fixed(sizing::BOARD_SIDE))
        .into()
    }

    fn view_presets<'a>(&self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        let hint = text(i18n.tr("board-preset-hint"))
            .size(typography::CAPTION)
            .color(crate::ui::theme::muted_text_color(ctx.scheme));

        // Two-column grid, matching the preset layout of the survey.
        let mut grid = Column::new().spacing(spacing::XS);
        for (chunk, pair) in survey::presets().chunks(2).enumerate() {
            let mut row = Row::new().spacing(spacing::XS);
            for (offset, preset) in pair.iter().enumerate() {
                let index = chunk * 2 + offset;
                row = row.push(
                    button(
                        text(i18n.tr(preset.name))
                            .size(typography::BODY)
                            .align_x(Horizontal::Center)
                            .width(Length::Fill),
                    )
                    .style(styles::button::outline(ctx.scheme))
                    .width(Length::Fill)
                    .on_press(Message::PresetSelected(index)),
                );
            }
            grid = grid.push(row);
        }

        Column::new()
            .push(hint)
            .push(grid)
            .spacing(spacing::XS)
            .width(Length::Fixed(sizing::BOARD_SIDE))
            .into()
    }

    fn view_footer<'a>(&self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;

        Row::new()
            .push(
                button(text(i18n.tr("board-previous")).size(typography::BODY))
                    .style(styles::button::outline(ctx.scheme))
                    .on_press(Message::PreviousQuestion),
            )
            .push(Space::new().width(Length::Fill))
            .push(
                button(text(i18n.tr("board-next")).size(typography::BODY))
                    .style(styles::button::outline(ctx.scheme))
                    .on_press(Message::NextQuestion),
            )
            .width(Length::Fixed(sizing::BOARD_SIDE))
            .into()
    }
}

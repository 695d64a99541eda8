// SPDX-License-Identifier: MPL-2.0
//! Canvas program for the quadrant region.
//!
//! Draws the bounded square (grid lines, axis captions, marker) and turns
//! pointer and touch events into board messages carrying percent
//! coordinates. The drag itself lives in the session; this program only
//! reports what the user did.

use iced::widget::canvas::{self, Frame, Path, Stroke, Text};
use iced::{mouse, touch, Point, Rectangle};

use crate::survey::Position;
use crate::ui::board::Message;
use crate::ui::theme;
use crate::ui::design_tokens::{border, sizing, typography};
use crate::ui::theming::ColorScheme;

/// Resolved captions drawn around the quadrant.
#[derive(Debug, Clone)]
pub struct AxisCaptions {
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
}

/// Canvas program rendering one question's quadrant and marker.
pub struct QuadrantCanvas {
    pub position: Position,
    pub captions: AxisCaptions,
    pub scheme: ColorScheme,
}

impl canvas::Program<Message> for QuadrantCanvas {
    /// The finger currently dragging the marker, if any. Only the first
    /// active touch point drives the drag; other fingers are ignored.
    type State = Option<touch::Finger>;

    fn update(
        &self,
        active_finger: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                let cursor_position = cursor.position_in(bounds)?;
                let position = Position::from_cursor(cursor_position, bounds.size())?;
                Some(Action::publish(Message::DragStarted(position)).and_capture())
            }
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                // Leaving the quadrant ends the drag, like the mouse
                // button being released.
                match cursor.position_in(bounds) {
                    Some(cursor_position) => {
                        let position = Position::from_cursor(cursor_position, bounds.size())?;
                        Some(Action::publish(Message::DragMoved(position)))
                    }
                    None => Some(Action::publish(Message::DragEnded)),
                }
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | iced::Event::Mouse(mouse::Event::CursorLeft) => {
                Some(Action::publish(Message::DragEnded))
            }
            iced::Event::Touch(touch::Event::FingerPressed { id, position }) => {
                if active_finger.is_some() || !bounds.contains(*position) {
                    return None;
                }
                *active_finger = Some(*id);
                let relative = relative_to(*position, bounds);
                let mapped = Position::from_cursor(relative, bounds.size())?;
                Some(Action::publish(Message::DragStarted(mapped)).and_capture())
            }
            iced::Event::Touch(touch::Event::FingerMoved { id, position }) => {
                if *active_finger != Some(*id) {
                    return None;
                }
                // Capture move events so no surrounding scrollable reacts
                // to the gesture while dragging.
                let relative = relative_to(*position, bounds);
                let mapped = Position::from_cursor(relative, bounds.size())?;
                Some(Action::publish(Message::DragMoved(mapped)).and_capture())
            }
            iced::Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) => {
                if *active_finger != Some(*id) {
                    return None;
                }
                *active_finger = None;
                Some(Action::publish(Message::DragEnded).and_capture())
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.size();

        // Outer border
        let outline = Path::rectangle(Point::ORIGIN, size);
        frame.stroke(
            &outline,
            Stroke::default()
                .with_width(border::THIN)
                .with_color(theme::board_border_color(&self.scheme)),
        );

        // 3x3 grid lines
        let grid_stroke = Stroke::default()
            .with_width(border::THIN)
            .with_color(theme::board_grid_color(&self.scheme));
        for i in 1..3 {
            let x = size.width * i as f32 / 3.0;
            frame.stroke(
                &Path::line(Point::new(x, 0.0), Point::new(x, size.height)),
                grid_stroke,
            );

            let y = size.height * i as f32 / 3.0;
            frame.stroke(
                &Path::line(Point::new(0.0, y), Point::new(size.width, y)),
                grid_stroke,
            );
        }

        self.draw_captions(&mut frame, size);
        self.draw_marker(&mut frame, size);

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl QuadrantCanvas {
    fn draw_captions(&self, frame: &mut Frame, size: iced::Size) {
        let color = theme::axis_caption_color(&self.scheme);
        let caption = |content: &str, position: Point| Text {
            content: content.to_owned(),
            position,
            color,
            size: typography::CAPTION.into(),
            align_x: iced::widget::text::Alignment::Center,
            align_y: iced::alignment::Vertical::Center,
            ..Text::default()
        };

        let inset = sizing::AXIS_CAPTION_INSET;
        frame.fill_text(caption(
            &self.captions.top,
            Point::new(size.width / 2.0, inset),
        ));
        frame.fill_text(caption(
            &self.captions.bottom,
            Point::new(size.width / 2.0, size.height - inset),
        ));

        // Side captions are rotated a quarter turn, reading upward on the
        // left edge and downward on the right edge.
        frame.with_save(|frame| {
            frame.translate(iced::Vector::new(inset, size.height / 2.0));
            frame.rotate(-std::f32::consts::FRAC_PI_2);
            frame.fill_text(caption(&self.captions.left, Point::ORIGIN));
        });
        frame.with_save(|frame| {
            frame.translate(iced::Vector::new(size.width - inset, size.height / 2.0));
            frame.rotate(std::f32::consts::FRAC_PI_2);
            frame.fill_text(caption(&self.captions.right, Point::ORIGIN));
        });
    }

    fn draw_marker(&self, frame: &mut Frame, size: iced::Size) {
        let center = self.position.to_point(size);

        let halo = Path::circle(center, sizing::MARKER_HALO_RADIUS);
        frame.fill(&halo, theme::marker_halo_color(&self.scheme));

        let dot = Path::circle(center, sizing::MARKER_RADIUS);
        frame.fill(&dot, theme::marker_color(&self.scheme));
    }
}

/// Translates a window-space touch point into canvas-local coordinates.
fn relative_to(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

// SPDX-License-Identifier: MPL-2.0
//! In-memory answering session: the current question, the marker position,
//! and the drag phase.
//!
//! The session is owned by the board component and mutated synchronously
//! from its update loop. Moving to another question always re-centers the
//! marker so a previous answer never leaks into the next question.

use super::catalog::{self, Preset, Question};
use super::Position;

/// Whether a pointer drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Mutable session state for one run of the survey.
#[derive(Debug, Clone, Default)]
pub struct Session {
    question_index: usize,
    position: Position,
    drag: DragPhase,
}

impl Session {
    /// Starts a fresh session at the first question with a centered marker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The question currently being answered.
    #[must_use]
    pub fn question(&self) -> &'static Question {
        &catalog::questions()[self.question_index]
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }

    /// Total number of questions in the catalog.
    #[must_use]
    pub fn question_count(&self) -> usize {
        catalog::questions().len()
    }

    /// Current marker position.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag == DragPhase::Dragging
    }

    /// Begins a drag and moves the marker to the press location.
    pub fn drag_start(&mut self, position: Position) {
        self.drag = DragPhase::Dragging;
        self.position = position;
    }

    /// Moves the marker while a drag is active; no-op otherwise.
    pub fn drag_move(&mut self, position: Position) {
        if self.drag == DragPhase::Dragging {
            self.position = position;
        }
    }

    /// Ends the active drag, keeping the marker where it is.
    pub fn drag_end(&mut self) {
        self.drag = DragPhase::Idle;
    }

    /// Jumps the marker to a preset's coordinate, regardless of drag phase.
    pub fn select_preset(&mut self, preset: &Preset) {
        self.position = preset.position;
    }

    /// Advances to the next question, wrapping to the first after the last.
    pub fn next(&mut self) {
        self.question_index = (self.question_index + 1) % self.question_count();
        self.reset_position();
    }

    /// Steps back to the previous question, wrapping to the last from the first.
    pub fn previous(&mut self) {
        let count = self.question_count();
        self.question_index = (self.question_index + count - 1) % count;
        self.reset_position();
    }

    fn reset_position(&mut self) {
        self.position = Position::CENTER;
    }
}

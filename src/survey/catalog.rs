// SPDX-License-Identifier: MPL-2.0
//! The fixed question and preset catalogs.
//!
//! Captions are stored as Fluent message keys and resolved through [`I18n`]
//! at render time, so the catalog itself stays locale-independent.
//!
//! [`I18n`]: crate::i18n::fluent::I18n

use super::Position;

/// Captions for one axis of the quadrant. For the horizontal axis these are
/// the left/right edges; for the vertical axis, top/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisLabels {
    pub start: &'static str,
    pub end: &'static str,
}

/// One survey question with the captions shown around the quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Fluent key of the question text.
    pub text: &'static str,
    /// Horizontal axis captions (start = left edge, end = right edge).
    pub x_axis: AxisLabels,
    /// Vertical axis captions (start = top edge, end = bottom edge).
    pub y_axis: AxisLabels,
}

/// A named shortcut that moves the marker to a fixed coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    /// Fluent key of the preset name.
    pub name: &'static str,
    pub position: Position,
}

const QUESTIONS: [Question; 6] = [
    Question {
        text: "question-base-vs-bonus",
        x_axis: AxisLabels {
            start: "axis-higher-base",
            end: "axis-performance-bonuses",
        },
        y_axis: AxisLabels {
            start: "axis-very-important",
            end: "axis-less-important",
        },
    },
    Question {
        text: "question-stock-options",
        x_axis: AxisLabels {
            start: "axis-base-salary",
            end: "axis-stock-options",
        },
        y_axis: AxisLabels {
            start: "axis-strongly-prefer",
            end: "axis-open-to-both",
        },
    },
    Question {
        text: "question-raises-promotions",
        x_axis: AxisLabels {
            start: "axis-essential",
            end: "axis-nice-to-have",
        },
        y_axis: AxisLabels {
            start: "axis-career-growth",
            end: "axis-stability",
        },
    },
    Question {
        text: "question-perks-negotiation",
        x_axis: AxisLabels {
            start: "axis-fixed-salary",
            end: "axis-flexible-package",
        },
        y_axis: AxisLabels {
            start: "axis-very-open",
            end: "axis-less-flexible",
        },
    },
    Question {
        text: "question-growth-tradeoff",
        x_axis: AxisLabels {
            start: "axis-higher-salary-now",
            end: "axis-future-growth",
        },
        y_axis: AxisLabels {
            start: "axis-strongly-agree",
            end: "axis-strongly-disagree",
        },
    },
    Question {
        text: "question-work-location",
        x_axis: AxisLabels {
            start: "axis-remote",
            end: "axis-in-office",
        },
        y_axis: AxisLabels {
            start: "axis-strong-preference",
            end: "axis-flexible",
        },
    },
];

const PRESETS: [Preset; 4] = [
    Preset {
        name: "preset-career-growth",
        position: Position { x: 65.0, y: 25.0 },
    },
    Preset {
        name: "preset-work-life-balance",
        position: Position { x: 35.0, y: 75.0 },
    },
    Preset {
        name: "preset-compensation",
        position: Position { x: 25.0, y: 35.0 },
    },
    Preset {
        name: "preset-flexibility",
        position: Position { x: 75.0, y: 65.0 },
    },
];

/// The ordered question list. Navigation wraps at both ends.
#[must_use]
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// The presets, in display order.
#[must_use]
pub fn presets() -> &'static [Preset] {
    &PRESETS
}

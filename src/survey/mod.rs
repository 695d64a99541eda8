// SPDX-License-Identifier: MPL-2.0
//! Survey domain model: the question catalog, presets, and the in-memory
//! answering session.
//!
//! Everything here is plain data mutated synchronously from UI event
//! handlers; nothing is persisted across runs.

pub mod catalog;
pub mod position;
pub mod session;

pub use catalog::{presets, questions, AxisLabels, Preset, Question};
pub use position::Position;
pub use session::{DragPhase, Session};

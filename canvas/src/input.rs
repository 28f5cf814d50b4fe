//! Input model: tool state, the free-draw brush, mouse buttons, and the
//! pointer gesture state machine.
//!
//! `ToolState` is the toolbar's transient state (colour, brush width, text
//! buffer, pen mode). `InputState` is the gesture being tracked between
//! pointer-down and pointer-up, carrying the context needed to move an
//! object or accumulate a freehand stroke.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::num::IntErrorKind;

use crate::consts::{BRUSH_WIDTH_MAX, BRUSH_WIDTH_MIN, DEFAULT_BRUSH_WIDTH, DEFAULT_COLOR};
use crate::doc::ObjectId;
use crate::surface::Point;

/// Toolbar state owned by the editor for the lifetime of one canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolState {
    /// Current draw colour (brush, new text, recolouring).
    pub color: String,
    /// Current free-draw brush width, always within `[1, 50]`.
    pub brush_width: u32,
    /// Text buffer consumed by add-text and update-text.
    pub text_input: String,
    /// Whether pointer input draws freehand strokes instead of selecting.
    pub pen_mode: bool,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR.to_owned(),
            brush_width: DEFAULT_BRUSH_WIDTH,
            text_input: String::new(),
            pen_mode: false,
        }
    }
}

/// Free-draw brush attached to the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brush {
    pub color: String,
    pub width: u32,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BrushWidthError {
    #[error("brush width is not a number: {0:?}")]
    NotANumber(String),
}

/// Parse a brush-width field. Non-numeric input is rejected; numeric input
/// outside `[1, 50]` is clamped into range.
///
/// # Errors
///
/// Returns [`BrushWidthError::NotANumber`] when `raw` is not an integer.
pub fn parse_brush_width(raw: &str) -> Result<u32, BrushWidthError> {
    let trimmed = raw.trim();
    match trimmed.parse::<i64>() {
        Ok(parsed) => Ok(clamp_brush_width(parsed)),
        // Too many digits for i64 is still a number; saturate it.
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(BRUSH_WIDTH_MAX),
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(BRUSH_WIDTH_MIN),
        Err(_) => Err(BrushWidthError::NotANumber(trimmed.to_owned())),
    }
}

/// Clamp an integer brush width into `[1, 50]`.
#[must_use]
pub fn clamp_brush_width(width: i64) -> u32 {
    let clamped = width.clamp(i64::from(BRUSH_WIDTH_MIN), i64::from(BRUSH_WIDTH_MAX));
    u32::try_from(clamped).unwrap_or(BRUSH_WIDTH_MIN)
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Internal state for the pointer gesture state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving an existing object across the surface.
    DraggingObject {
        /// Id of the object being dragged.
        id: ObjectId,
        /// Pointer position at the previous event.
        last: Point,
    },
    /// The user is drawing a freehand stroke in pen mode.
    DrawingStroke {
        /// Absolute surface points captured so far.
        points: Vec<Point>,
    },
}

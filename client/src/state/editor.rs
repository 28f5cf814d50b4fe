//! Reactive mirror of the editor's tool state and status line.
//!
//! DESIGN
//! ======
//! The `canvas` engine owns the authoritative tool state while an editor is
//! mounted. This struct mirrors the parts the toolbar renders so views can
//! subscribe to one `RwSignal<EditorState>` without borrowing the engine.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

/// Default draw colour shown before the engine reports its own.
pub const DEFAULT_COLOR: &str = "#000000";
/// Default brush width shown before the engine reports its own.
pub const DEFAULT_BRUSH_WIDTH: u32 = 5;
/// Rotation applied by each rotate button, in degrees.
pub const ROTATE_STEP_DEG: f64 = 15.0;

/// Whether the initial document fetch has been applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    /// The drawing surface could not be acquired.
    Failed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient status message shown under the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, message: message.into() }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }

    /// Notice for a completed save.
    #[must_use]
    pub fn for_save(result: &Result<(), String>) -> Self {
        match result {
            Ok(()) => Self::success("Canvas saved successfully!"),
            Err(_) => Self::error("Failed to save canvas!"),
        }
    }
}

/// A toolbar or properties-panel request, routed to the engine by the
/// editor component.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorCommand {
    AddRectangle,
    AddCircle,
    AddText,
    DeleteSelected,
    TogglePen,
    SetColor(String),
    /// Raw brush-width field contents; parsed by the engine.
    SetBrushWidth(String),
    SetTextInput(String),
    UpdateText,
    /// Rotate the active object by this many degrees.
    Rotate(f64),
    Save,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EditorState {
    pub canvas_id: Option<String>,
    pub phase: LoadPhase,
    pub color: String,
    pub brush_width: u32,
    /// Raw contents of the brush-width field. Holds a rejected entry until
    /// the next accepted change.
    pub brush_width_input: String,
    pub text_input: String,
    pub pen_mode: bool,
    pub has_selection: bool,
    pub selection_is_text: bool,
    pub notice: Option<Notice>,
    /// CSS cursor for the drawing surface, as last reported by the engine.
    pub cursor: String,
    /// CSS size of the drawing surface once acquired.
    pub surface_size: Option<(f64, f64)>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            canvas_id: None,
            phase: LoadPhase::Loading,
            color: DEFAULT_COLOR.to_owned(),
            brush_width: DEFAULT_BRUSH_WIDTH,
            brush_width_input: DEFAULT_BRUSH_WIDTH.to_string(),
            text_input: String::new(),
            pen_mode: false,
            has_selection: false,
            selection_is_text: false,
            notice: None,
            cursor: "default".to_owned(),
            surface_size: None,
        }
    }
}

impl EditorState {
    /// Fresh state for the editor of `canvas_id`.
    #[must_use]
    pub fn for_canvas(canvas_id: impl Into<String>) -> Self {
        Self { canvas_id: Some(canvas_id.into()), ..Self::default() }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == LoadPhase::Ready
    }

    /// Label for the pen toggle button.
    #[must_use]
    pub fn pen_label(&self) -> &'static str {
        if self.pen_mode { "Pen Off" } else { "Pen On" }
    }

    /// Copy the engine's tool state into the mirror. Resets the brush-width
    /// field to the applied width.
    pub fn sync_tools(&mut self, color: &str, brush_width: u32, text_input: &str, pen_mode: bool) {
        color.clone_into(&mut self.color);
        self.brush_width_input = brush_width.to_string();
        self.brush_width = brush_width;
        text_input.clone_into(&mut self.text_input);
        self.pen_mode = pen_mode;
    }

    /// Record the active object's presence and kind.
    pub fn sync_selection(&mut self, has_selection: bool, is_text: bool) {
        self.has_selection = has_selection;
        self.selection_is_text = has_selection && is_text;
    }

    /// Keep a rejected brush-width entry on screen. Returns the error
    /// notice for the host to show.
    #[must_use]
    pub fn reject_brush_width(&mut self, raw: &str, reason: &str) -> Notice {
        raw.clone_into(&mut self.brush_width_input);
        Notice::error(reason)
    }

    /// The surface could not be acquired; leave loading and report why.
    pub fn surface_failed(&mut self) {
        self.phase = LoadPhase::Failed;
        self.notice = Some(Notice::error("Canvas could not be started in this browser."));
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.phase == LoadPhase::Failed
    }
}

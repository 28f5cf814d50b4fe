//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the editor chrome and the drawing surface. Panels read
//! the page's `RwSignal<EditorState>` and send `EditorCommand`s back to the
//! `CanvasEditor` that owns the engine.

pub mod canvas_editor;
pub mod properties_panel;
pub mod tool_panel;

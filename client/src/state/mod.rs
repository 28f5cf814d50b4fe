//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is plain data held in `RwSignal`s; the editor page provides its
//! own `RwSignal<EditorState>` for the lifetime of one canvas.

pub mod editor;

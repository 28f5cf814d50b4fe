//! Drawing surface and editor engine for the sketchpad canvas editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! in-memory scene graph for one open canvas: the drawable objects, the
//! active selection, the toolbar's tool state, and the free-draw brush. The
//! host Leptos layer wires DOM events and toolbar buttons to the engine,
//! fetches and saves snapshots through the document store, and repaints when
//! the engine asks for it via [`engine::Action`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Drawable objects and the ordered [`doc::Scene`] |
//! | [`snapshot`] | Opaque JSON snapshot encode/decode for persistence |
//! | [`surface`] | Surface sizing and the shared [`surface::Point`] type |
//! | [`input`] | Tool state, brush, and the pointer gesture state machine |
//! | [`hit`] | Rotation-aware hit-testing against drawables |
//! | [`session`] | Editor lifecycle and cancellation tickets for async work |
//! | [`render`] | Scene rendering onto a 2D context |
//! | [`consts`] | Shared defaults (sizes, colours, brush limits) |

pub mod consts;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod input;
pub mod render;
pub mod session;
pub mod snapshot;
pub mod surface;

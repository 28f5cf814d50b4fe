//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The engine owns the scene graph and tool state. This component acquires
//! the surface on mount, runs the initial fetch and saves as ticketed async
//! tasks, routes panel commands and pointer events into the engine, and
//! mirrors the resulting tool state into `EditorState` for the panels.

use leptos::prelude::*;

use crate::components::properties_panel::PropertiesPanel;
use crate::components::tool_panel::ToolPanel;
use crate::state::editor::{EditorCommand, EditorState, NoticeKind};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use canvas::engine::{Action, Engine};
#[cfg(feature = "hydrate")]
use canvas::session::{Phase, Session};
#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

#[cfg(feature = "hydrate")]
use crate::state::editor::{LoadPhase, Notice};
#[cfg(feature = "hydrate")]
use crate::util::canvas_input::{pointer_button, pointer_point, surface_for_window};

/// How long a notice stays under the canvas.
#[cfg(feature = "hydrate")]
const NOTICE_TIMEOUT_MS: u32 = 3_000;

#[cfg(feature = "hydrate")]
fn render_logged(engine: &Engine) {
    if let Err(e) = engine.render() {
        log::error!("canvas render failed: {e:?}");
    }
}

/// Shared handles for one mounted editor. Cloned into async tasks.
#[cfg(feature = "hydrate")]
#[derive(Clone)]
struct EditorHandle {
    canvas_id: String,
    engine: Rc<RefCell<Option<Engine>>>,
    session: Rc<RefCell<Session>>,
    editor: RwSignal<EditorState>,
}

#[cfg(feature = "hydrate")]
impl EditorHandle {
    fn new(canvas_id: String, editor: RwSignal<EditorState>) -> Self {
        Self {
            canvas_id,
            engine: Rc::new(RefCell::new(None)),
            session: Rc::new(RefCell::new(Session::new())),
            editor,
        }
    }

    /// Acquire the surface and start the initial document fetch.
    fn mount(&self, canvas: web_sys::HtmlCanvasElement) {
        if self.engine.borrow().is_some() || self.session.borrow().phase() == Phase::Disposed {
            return;
        }
        let (surface, dpr) = surface_for_window();
        let size = (surface.width, surface.height);
        match Engine::new(canvas, surface, dpr) {
            Ok(engine) => {
                render_logged(&engine);
                *self.engine.borrow_mut() = Some(engine);
            }
            Err(e) => {
                log::error!("canvas surface unavailable: {e:?}");
                self.editor.update(EditorState::surface_failed);
                return;
            }
        }
        self.editor.update(|s| s.surface_size = Some(size));
        self.load();
    }

    fn load(&self) {
        let ticket = self.session.borrow().ticket();
        let handle = self.clone();
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_canvas(&handle.canvas_id).await;
            if !handle.session.borrow().accepts(ticket) {
                return;
            }
            let snapshot = match fetched {
                Ok(doc) => doc.canvas_data,
                Err(e) => {
                    log::warn!("loading canvas {} failed, starting empty: {e}", handle.canvas_id);
                    None
                }
            };

            let mut slot = handle.engine.borrow_mut();
            let Some(engine) = slot.as_mut() else {
                return;
            };
            let actions = match engine.load_document(snapshot.as_ref()) {
                Ok(actions) => actions,
                Err(e) => {
                    log::error!("canvas {} has unreadable scene data, starting empty: {e}", handle.canvas_id);
                    vec![Action::ToolsChanged, Action::SelectionChanged(None), Action::RenderNeeded]
                }
            };
            handle.session.borrow_mut().mark_ready();
            handle.editor.update(|s| s.phase = LoadPhase::Ready);
            handle.apply(engine, &actions);
        });
    }

    /// Run a toolbar command. Ignored until the initial load has finished.
    fn dispatch(&self, cmd: EditorCommand) {
        if !self.session.borrow().is_ready() {
            return;
        }
        if cmd == EditorCommand::Save {
            self.save();
            return;
        }

        let mut slot = self.engine.borrow_mut();
        let Some(engine) = slot.as_mut() else {
            return;
        };
        let core = &mut engine.core;
        let actions = match cmd {
            EditorCommand::AddRectangle => core.add_rectangle(),
            EditorCommand::AddCircle => core.add_circle(),
            EditorCommand::AddText => core.add_text(),
            EditorCommand::DeleteSelected => core.delete_selected(),
            EditorCommand::TogglePen => core.toggle_pen(),
            EditorCommand::SetColor(color) => core.change_color(&color),
            EditorCommand::SetBrushWidth(raw) => match core.set_brush_width(&raw) {
                Ok(actions) => actions,
                Err(e) => {
                    log::warn!("brush width {raw:?} rejected: {e}");
                    if let Some(notice) = self.editor.try_update(|s| s.reject_brush_width(&raw, &e.to_string())) {
                        self.notify(notice);
                    }
                    return;
                }
            },
            EditorCommand::SetTextInput(text) => {
                core.set_text_input(&text);
                vec![Action::ToolsChanged]
            }
            EditorCommand::UpdateText => core.update_text(),
            EditorCommand::Rotate(delta) => core.rotate_selected(delta),
            EditorCommand::Save => Vec::new(),
        };
        self.apply(engine, &actions);
    }

    /// Route a pointer event into the engine once ready.
    fn pointer(&self, f: impl FnOnce(&mut Engine) -> Vec<Action>) {
        if !self.session.borrow().is_ready() {
            return;
        }
        let mut slot = self.engine.borrow_mut();
        if let Some(engine) = slot.as_mut() {
            let actions = f(engine);
            self.apply(engine, &actions);
        }
    }

    /// Mirror engine state into the panels and repaint as requested.
    fn apply(&self, engine: &Engine, actions: &[Action]) {
        let needs_render = actions.iter().any(|a| matches!(a, Action::RenderNeeded));
        let needs_sync = actions
            .iter()
            .any(|a| !matches!(a, Action::RenderNeeded | Action::ObjectUpdated(_)));

        if needs_sync {
            let cursor = actions.iter().rev().find_map(|a| match a {
                Action::SetCursor(cursor) => Some(cursor.clone()),
                _ => None,
            });
            let tools = engine.tools();
            let active = engine.selection().and_then(|id| engine.core.object(&id));
            let has_selection = active.is_some();
            let is_text = active.is_some_and(canvas::doc::Drawable::is_text);
            self.editor.update(|s| {
                s.sync_tools(&tools.color, tools.brush_width, &tools.text_input, tools.pen_mode);
                s.sync_selection(has_selection, is_text);
                if let Some(cursor) = cursor {
                    s.cursor = cursor;
                }
            });
        }
        if needs_render {
            render_logged(engine);
        }
    }

    fn save(&self) {
        let snapshot = {
            let slot = self.engine.borrow();
            let Some(engine) = slot.as_ref() else {
                return;
            };
            engine.snapshot()
        };
        let snapshot = match snapshot {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::error!("serializing canvas {} failed: {e}", self.canvas_id);
                self.notify(Notice::for_save(&Err(e.to_string())));
                return;
            }
        };

        let ticket = self.session.borrow().ticket();
        let handle = self.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::save_canvas(&handle.canvas_id, snapshot).await;
            if !handle.session.borrow().accepts(ticket) {
                return;
            }
            match &result {
                Ok(()) => log::info!("saved canvas {}", handle.canvas_id),
                Err(e) => log::error!("saving canvas {} failed: {e}", handle.canvas_id),
            }
            handle.notify(Notice::for_save(&result));
        });
    }

    /// Show `notice` until it times out or a newer notice replaces it.
    fn notify(&self, notice: Notice) {
        self.editor.update(|s| s.notice = Some(notice.clone()));
        let editor = self.editor;
        Timeout::new(NOTICE_TIMEOUT_MS, move || {
            editor.try_update(|s| {
                if s.notice.as_ref() == Some(&notice) {
                    s.notice = None;
                }
            });
        })
        .forget();
    }

    /// Release the surface. Pending loads and saves become no-ops.
    fn dispose(&self) {
        self.session.borrow_mut().dispose();
        if let Some(engine) = self.engine.borrow_mut().take() {
            engine.dispose();
        }
    }
}

/// Canvas editor for one document: tool panel, surface, save, properties.
///
/// On hydration, this mounts `canvas::engine::Engine`, loads the document,
/// and releases the surface when the component is cleaned up.
#[component]
pub fn CanvasEditor(canvas_id: String) -> impl IntoView {
    let editor = RwSignal::new(EditorState::for_canvas(canvas_id.clone()));
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    #[cfg(feature = "hydrate")]
    let handle = StoredValue::new_local(EditorHandle::new(canvas_id, editor));
    #[cfg(not(feature = "hydrate"))]
    let _ = canvas_id;

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            handle.with_value(|h| h.mount(canvas));
        });
        on_cleanup(move || {
            handle.try_with_value(EditorHandle::dispose);
        });
    }

    let dispatch = {
        #[cfg(feature = "hydrate")]
        {
            Callback::new(move |cmd: EditorCommand| handle.with_value(|h| h.dispatch(cmd)))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Callback::new(|_cmd: EditorCommand| {})
        }
    };

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                let point = pointer_point(&ev);
                let button = pointer_button(&ev);
                handle.with_value(|h| h.pointer(|engine| engine.on_pointer_down(point, button)));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let point = pointer_point(&ev);
                handle.with_value(|h| h.pointer(|engine| engine.on_pointer_move(point)));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            move |ev: leptos::ev::PointerEvent| {
                let point = pointer_point(&ev);
                handle.with_value(|h| h.pointer(|engine| engine.on_pointer_up(point)));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            move |_ev: leptos::ev::PointerEvent| {
                handle.with_value(|h| h.pointer(Engine::on_pointer_leave));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let surface_width = move || editor.get().surface_size.map(|(w, _)| format!("{w}px")).unwrap_or_default();
    let surface_height = move || editor.get().surface_size.map(|(_, h)| format!("{h}px")).unwrap_or_default();

    view! {
        <div class="editor">
            <ToolPanel editor=editor dispatch=dispatch/>

            <div class="editor__main">
                <canvas
                    node_ref=canvas_ref
                    class="editor__surface"
                    style:cursor=move || editor.get().cursor
                    style:width=surface_width
                    style:height=surface_height
                    on:pointerdown=on_pointer_down
                    on:pointermove=on_pointer_move
                    on:pointerup=on_pointer_up
                    on:pointerleave=on_pointer_leave
                >
                    "Your browser does not support canvas."
                </canvas>
                <Show when=move || editor.with(|s| !s.is_ready() && !s.is_failed())>
                    <p class="editor__status">"Loading..."</p>
                </Show>
                <button
                    class="btn btn--primary"
                    disabled=move || !editor.get().is_ready()
                    on:click=move |_| dispatch.run(EditorCommand::Save)
                >
                    "Save Canvas"
                </button>
                {move || {
                    editor
                        .get()
                        .notice
                        .map(|notice| {
                            let class = match notice.kind {
                                NoticeKind::Success => "notice notice--success",
                                NoticeKind::Error => "notice notice--error",
                            };
                            view! { <p class=class>{notice.message}</p> }
                        })
                }}
            </div>

            <PropertiesPanel editor=editor dispatch=dispatch/>
        </div>
    }
}

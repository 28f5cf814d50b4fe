//! Editor page for `/canvas/{id}`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::canvas_editor::CanvasEditor;

#[component]
pub fn EditorPage() -> impl IntoView {
    let params = use_params_map();
    let canvas_id = move || params.read().get("id").unwrap_or_default();

    // Keyed on the id so navigating between canvases remounts the editor
    // and releases the previous surface.
    view! {
        <div class="editor-page">
            {move || {
                let id = canvas_id();
                view! { <CanvasEditor canvas_id=id/> }
            }}
        </div>
    }
}

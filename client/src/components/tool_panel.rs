//! Left "Tool Panel": object creation, deletion, and the pen toggle.

use leptos::prelude::*;

use crate::state::editor::{EditorCommand, EditorState};

#[component]
pub fn ToolPanel(editor: RwSignal<EditorState>, dispatch: Callback<EditorCommand>) -> impl IntoView {
    let not_ready = move || !editor.get().is_ready();

    view! {
        <aside class="tool-panel">
            <h3 class="panel__title">"Tool Panel"</h3>
            <button class="btn" disabled=not_ready on:click=move |_| dispatch.run(EditorCommand::AddRectangle)>
                "Rectangle"
            </button>
            <button class="btn" disabled=not_ready on:click=move |_| dispatch.run(EditorCommand::AddCircle)>
                "Circle"
            </button>
            <button class="btn" disabled=not_ready on:click=move |_| dispatch.run(EditorCommand::AddText)>
                "Text"
            </button>
            <button class="btn" disabled=not_ready on:click=move |_| dispatch.run(EditorCommand::DeleteSelected)>
                "Delete"
            </button>
            <button
                class="btn"
                class:btn--active=move || editor.get().pen_mode
                disabled=not_ready
                on:click=move |_| dispatch.run(EditorCommand::TogglePen)
            >
                {move || editor.get().pen_label()}
            </button>
        </aside>
    }
}

//! Right "Properties" panel: colour, brush width, rotation, and text.

use leptos::prelude::*;

use crate::state::editor::{EditorCommand, EditorState, ROTATE_STEP_DEG};

#[component]
pub fn PropertiesPanel(editor: RwSignal<EditorState>, dispatch: Callback<EditorCommand>) -> impl IntoView {
    let not_ready = move || !editor.get().is_ready();

    view! {
        <aside class="properties-panel">
            <h3 class="panel__title">"Properties"</h3>

            <label class="field">
                <span class="field__label">"Color"</span>
                <input
                    type="color"
                    prop:value=move || editor.get().color
                    disabled=not_ready
                    on:input=move |ev| dispatch.run(EditorCommand::SetColor(event_target_value(&ev)))
                />
            </label>

            <label class="field">
                <span class="field__label">"Brush Width"</span>
                <input
                    type="number"
                    min="1"
                    max="50"
                    prop:value=move || editor.get().brush_width_input
                    disabled=not_ready
                    on:change=move |ev| dispatch.run(EditorCommand::SetBrushWidth(event_target_value(&ev)))
                />
            </label>

            <div class="field field--row">
                <button class="btn" disabled=not_ready on:click=move |_| dispatch.run(EditorCommand::Rotate(ROTATE_STEP_DEG))>
                    "+15°"
                </button>
                <button class="btn" disabled=not_ready on:click=move |_| dispatch.run(EditorCommand::Rotate(-ROTATE_STEP_DEG))>
                    "-15°"
                </button>
            </div>

            <label class="field">
                <span class="field__label">"Text"</span>
                <input
                    type="text"
                    prop:value=move || editor.get().text_input
                    disabled=not_ready
                    on:input=move |ev| dispatch.run(EditorCommand::SetTextInput(event_target_value(&ev)))
                />
            </label>
            <button
                class="btn"
                class:btn--active=move || editor.get().selection_is_text
                disabled=not_ready
                on:click=move |_| dispatch.run(EditorCommand::UpdateText)
            >
                "Update Text"
            </button>
        </aside>
    }
}

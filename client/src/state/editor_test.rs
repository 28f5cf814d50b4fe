use super::*;

#[test]
fn default_state_is_loading_with_default_tools() {
    let state = EditorState::default();
    assert_eq!(state.phase, LoadPhase::Loading);
    assert!(!state.is_ready());
    assert_eq!(state.color, DEFAULT_COLOR);
    assert_eq!(state.brush_width, DEFAULT_BRUSH_WIDTH);
    assert_eq!(state.brush_width_input, "5");
    assert!(!state.pen_mode);
    assert!(state.notice.is_none());
}

#[test]
fn for_canvas_records_id() {
    let state = EditorState::for_canvas("abc");
    assert_eq!(state.canvas_id.as_deref(), Some("abc"));
    assert_eq!(state.phase, LoadPhase::Loading);
}

#[test]
fn pen_label_follows_pen_mode() {
    let mut state = EditorState::default();
    assert_eq!(state.pen_label(), "Pen On");
    state.pen_mode = true;
    assert_eq!(state.pen_label(), "Pen Off");
}

#[test]
fn default_cursor_is_pointer_mode() {
    assert_eq!(EditorState::default().cursor, "default");
}

#[test]
fn sync_tools_copies_engine_state() {
    let mut state = EditorState::default();
    state.sync_tools("#ff0000", 12, "hello", true);
    assert_eq!(state.color, "#ff0000");
    assert_eq!(state.brush_width, 12);
    assert_eq!(state.brush_width_input, "12");
    assert_eq!(state.text_input, "hello");
    assert!(state.pen_mode);
}

#[test]
fn rejected_brush_width_stays_visible_until_next_sync() {
    let mut state = EditorState::default();
    let notice = state.reject_brush_width("abc", "brush width must be a number");
    assert_eq!(state.brush_width_input, "abc");
    assert_eq!(state.brush_width, DEFAULT_BRUSH_WIDTH);
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "brush width must be a number");
    // The host shows the notice on its own timer.
    assert!(state.notice.is_none());

    state.sync_tools(DEFAULT_COLOR, 7, "", false);
    assert_eq!(state.brush_width_input, "7");
}

#[test]
fn surface_failure_leaves_loading_with_error_notice() {
    let mut state = EditorState::for_canvas("abc");
    state.surface_failed();
    assert!(state.is_failed());
    assert!(!state.is_ready());
    assert_eq!(state.notice.as_ref().map(|n| n.kind), Some(NoticeKind::Error));
}

#[test]
fn selection_is_text_requires_selection() {
    let mut state = EditorState::default();
    state.sync_selection(false, true);
    assert!(!state.selection_is_text);
    state.sync_selection(true, true);
    assert!(state.has_selection);
    assert!(state.selection_is_text);
}

#[test]
fn save_notice_reflects_outcome() {
    assert_eq!(Notice::for_save(&Ok(())).kind, NoticeKind::Success);
    let failed = Notice::for_save(&Err("boom".into()));
    assert_eq!(failed.kind, NoticeKind::Error);
    assert_eq!(failed.message, "Failed to save canvas!");
}

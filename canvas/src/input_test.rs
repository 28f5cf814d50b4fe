use super::*;

// =============================================================
// ToolState
// =============================================================

#[test]
fn tool_state_defaults() {
    let tools = ToolState::default();
    assert_eq!(tools.color, "#000000");
    assert_eq!(tools.brush_width, 5);
    assert!(tools.text_input.is_empty());
    assert!(!tools.pen_mode);
}

// =============================================================
// Brush width parsing
// =============================================================

#[test]
fn parse_accepts_in_range_values() {
    assert_eq!(parse_brush_width("1"), Ok(1));
    assert_eq!(parse_brush_width("25"), Ok(25));
    assert_eq!(parse_brush_width("50"), Ok(50));
}

#[test]
fn parse_trims_whitespace() {
    assert_eq!(parse_brush_width("  12 "), Ok(12));
}

#[test]
fn parse_clamps_out_of_range() {
    assert_eq!(parse_brush_width("0"), Ok(1));
    assert_eq!(parse_brush_width("-7"), Ok(1));
    assert_eq!(parse_brush_width("51"), Ok(50));
    assert_eq!(parse_brush_width("100000000000"), Ok(50));
    assert_eq!(parse_brush_width("99999999999999999999"), Ok(50));
    assert_eq!(parse_brush_width("+99999999999999999999"), Ok(50));
    assert_eq!(parse_brush_width("-99999999999999999999"), Ok(1));
}

#[test]
fn parse_rejects_non_numeric() {
    assert_eq!(parse_brush_width(""), Err(BrushWidthError::NotANumber(String::new())));
    assert!(parse_brush_width("abc").is_err());
    assert!(parse_brush_width("4.5").is_err());
}

#[test]
fn clamp_bounds() {
    assert_eq!(clamp_brush_width(i64::MIN), 1);
    assert_eq!(clamp_brush_width(i64::MAX), 50);
    assert_eq!(clamp_brush_width(30), 30);
}

// =============================================================
// Button
// =============================================================

#[test]
fn button_from_dom_codes() {
    assert_eq!(Button::from_dom(0), Button::Primary);
    assert_eq!(Button::from_dom(1), Button::Middle);
    assert_eq!(Button::from_dom(2), Button::Secondary);
    assert_eq!(Button::from_dom(9), Button::Primary);
}

// =============================================================
// InputState
// =============================================================

#[test]
fn input_state_default_is_idle() {
    assert!(matches!(InputState::default(), InputState::Idle));
}

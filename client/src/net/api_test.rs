use super::*;

#[test]
fn canvas_endpoint_formats_expected_path() {
    assert_eq!(canvas_endpoint("c123"), "/api/canvases/c123");
}

#[test]
fn request_failed_message_names_missing_canvas() {
    assert_eq!(request_failed_message("load", 404), "load failed: canvas not found");
}

#[test]
fn request_failed_message_names_oversized_canvas() {
    assert_eq!(request_failed_message("save", 413), "save failed: canvas too large");
}

#[test]
fn request_failed_message_formats_other_status() {
    assert_eq!(request_failed_message("create", 500), "create failed: 500");
}

use super::*;

#[test]
fn engine_busy_message() {
    assert_eq!(GameError::EngineBusy.to_string(), "engine is busy; start skipped");
}

#[test]
fn canvas_errors_name_the_element() {
    assert_eq!(GameError::CanvasNotFound("gamebox".into()).to_string(), "canvas element not found: #gamebox");
    assert_eq!(GameError::NotACanvas("hud".into()).to_string(), "element #hud is not a canvas");
}

#[test]
fn config_parse_wraps_serde_error() {
    let err: GameError = serde_json::from_str::<u32>("x").unwrap_err().into();
    assert!(err.to_string().starts_with("config parse failed: "));
}

use super::*;

#[test]
fn status_error_exposes_server_message() {
    let err = ApiError::Status { code: 409, message: "email already registered".to_owned() };
    assert_eq!(err.server_message(), Some("email already registered"));
}

#[test]
fn blank_status_message_is_not_exposed() {
    let err = ApiError::Status { code: 500, message: String::new() };
    assert_eq!(err.server_message(), None);
}

#[test]
fn transport_and_decode_carry_no_server_message() {
    assert_eq!(ApiError::Transport("timeout".to_owned()).server_message(), None);
    assert_eq!(ApiError::Decode("bad json".to_owned()).server_message(), None);
}

#[test]
fn display_includes_status_code() {
    let err = ApiError::Status { code: 401, message: "unauthorized".to_owned() };
    assert_eq!(err.to_string(), "unauthorized (status 401)");
}

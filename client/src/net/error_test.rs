use super::*;
use crate::net::types::ProductsResponse;

// =============================================================
// decode_response
// =============================================================

#[test]
fn decode_response_parses_success_body() {
    let body = r#"{"products":[{"id":"p-1","title":"Tart"}]}"#;
    let parsed: ProductsResponse = decode_response(200, body).unwrap();
    assert_eq!(parsed.products.len(), 1);
    assert_eq!(parsed.products[0].title, "Tart");
}

#[test]
fn decode_response_extracts_server_message_on_failure() {
    let err = decode_response::<ProductsResponse>(403, r#"{"success":false,"message":"token invalid"}"#)
        .unwrap_err();
    assert_eq!(err, ApiError::Status { status: 403, message: Some("token invalid".to_owned()) });
}

#[test]
fn decode_response_non_json_failure_has_no_message() {
    let err = decode_response::<ProductsResponse>(502, "<html>Bad Gateway</html>").unwrap_err();
    assert_eq!(err, ApiError::Status { status: 502, message: None });
}

#[test]
fn decode_response_reports_schema_mismatch() {
    let err = decode_response::<ProductsResponse>(200, r#"{"products":"nope"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn extract_message_joins_arrays() {
    assert_eq!(
        extract_message(r#"{"message":["title required","price required"]}"#),
        Some("title required, price required".to_owned())
    );
    assert_eq!(extract_message(r#"{"message":42}"#), None);
}

// =============================================================
// user_message
// =============================================================

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::Status { status: 400, message: Some("wrong password".to_owned()) };
    assert_eq!(err.user_message(), "wrong password");
}

#[test]
fn user_message_falls_back_to_display() {
    assert_eq!(ApiError::Status { status: 500, message: None }.user_message(), "server responded with status 500");
    assert_eq!(ApiError::Transport("dns".to_owned()).user_message(), "request failed: dns");
    assert_eq!(ApiError::MissingToken.user_message(), "no session token stored");
}

#[test]
fn user_message_ignores_blank_server_message() {
    let err = ApiError::Rejected(Some("  ".to_owned()));
    assert_eq!(err.user_message(), "request rejected by server");
}

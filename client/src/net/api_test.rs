use super::*;

fn signin(success: bool, token: &str, message: &str) -> SignInResponse {
    SignInResponse { success, token: token.to_owned(), expired: None, message: message.to_owned() }
}

#[test]
fn ensure_checked_passes_successful_check() {
    let resp = CheckResponse { success: true, message: None };
    assert_eq!(ensure_checked(resp.clone()), Ok(resp));
}

#[test]
fn ensure_checked_rejects_success_false() {
    let resp = CheckResponse { success: false, message: Some("expired".to_owned()) };
    assert_eq!(ensure_checked(resp), Err(ApiError::Rejected(Some("expired".to_owned()))));
}

#[test]
fn ensure_signed_in_requires_token() {
    assert!(ensure_signed_in(signin(true, "T1", "ok")).is_ok());
    assert_eq!(ensure_signed_in(signin(true, "  ", "")), Err(ApiError::Rejected(None)));
}

#[test]
fn ensure_signed_in_keeps_server_message_on_rejection() {
    assert_eq!(
        ensure_signed_in(signin(false, "", "login failed")),
        Err(ApiError::Rejected(Some("login failed".to_owned())))
    );
}

#[tokio::test]
async fn reqwest_client_reports_unreachable_host_as_transport_error() {
    let api = ReqwestAdminApi::new(ApiConfig::new("http://127.0.0.1:9", "shop")).unwrap();
    let err = api.list_products("T1").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}

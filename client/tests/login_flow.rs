//! End-to-end console flows against a stub admin API over real HTTP.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use client::config::ApiConfig;
use client::controller::ConsoleController;
use client::net::api::ReqwestAdminApi;
use client::net::types::CredentialField;
use client::state::console::{ConsoleState, ConsoleStore};
use client::state::toast::{Toast, ToastLevel};
use client::util::notify::Notifier;
use client::util::session_store::{MemorySessionStore, SessionStore};

// =========================================================================
// Stub admin API
// =========================================================================

#[derive(Clone, Default)]
struct Seen {
    signin_bodies: Arc<Mutex<Vec<Value>>>,
    product_auth: Arc<Mutex<Vec<String>>>,
    check_auth: Arc<Mutex<Vec<String>>>,
}

fn auth_header(headers: &HeaderMap) -> String {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_owned()
}

async fn signin(State(seen): State<Seen>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let password = body["password"].as_str().unwrap_or_default().to_owned();
    seen.signin_bodies.lock().unwrap().push(body);
    if password == "x" {
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "token": "T1",
                "expired": 1_893_456_000_000_i64,
                "message": "ok"
            })),
        )
    } else {
        (StatusCode::BAD_REQUEST, Json(json!({ "success": false, "message": "wrong password" })))
    }
}

async fn products(State(seen): State<Seen>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let token = auth_header(&headers);
    seen.product_auth.lock().unwrap().push(token.clone());
    if token != "T1" {
        return (StatusCode::FORBIDDEN, Json(json!({ "success": false, "message": "token invalid" })));
    }
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "products": [
                { "id": "A", "title": "Alpha", "origin_price": 100, "price": 80, "is_enabled": 1,
                  "imageUrl": "https://img.test/a.jpg", "imagesUrl": ["https://img.test/a2.jpg"] },
                { "id": "B", "title": "Beta", "origin_price": 50, "price": 50, "is_enabled": 0 }
            ]
        })),
    )
}

async fn check(State(seen): State<Seen>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let token = auth_header(&headers);
    seen.check_auth.lock().unwrap().push(token.clone());
    if token == "T1" {
        (StatusCode::OK, Json(json!({ "success": true })))
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "success": false, "message": "please sign in" })))
    }
}

async fn spawn_stub() -> (String, Seen) {
    let seen = Seen::default();
    let app = Router::new()
        .route("/admin/signin", post(signin))
        .route("/api/shop/admin/products", get(products))
        .route("/api/user/check", post(check))
        .with_state(seen.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), seen)
}

// =========================================================================
// Harness
// =========================================================================

#[derive(Default)]
struct RecordingNotifier {
    toasts: RefCell<Vec<Toast>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}

struct Console {
    controller: ConsoleController<
        ReqwestAdminApi,
        Rc<MemorySessionStore>,
        Rc<RecordingNotifier>,
        Rc<RefCell<ConsoleState>>,
    >,
    session: Rc<MemorySessionStore>,
    notifier: Rc<RecordingNotifier>,
    state: Rc<RefCell<ConsoleState>>,
}

fn console(base_url: &str) -> Console {
    let session = Rc::new(MemorySessionStore::new());
    let notifier = Rc::new(RecordingNotifier::default());
    let state = Rc::new(RefCell::new(ConsoleState::default()));
    let api = ReqwestAdminApi::new(ApiConfig::new(base_url, "shop")).unwrap();
    let controller = ConsoleController::new(api, Rc::clone(&session), Rc::clone(&notifier), Rc::clone(&state));
    Console { controller, session, notifier, state }
}

async fn login(console: &Console, username: &str, password: &str) -> bool {
    console.controller.update_credential_field(CredentialField::Username, username);
    console.controller.update_credential_field(CredentialField::Password, password);
    let credentials = console.state.snapshot().credentials;
    console.controller.submit_login(credentials).await
}

// =========================================================================
// Flows
// =========================================================================

#[tokio::test]
async fn login_sets_cookie_and_fetches_catalog_with_token() {
    let (base, seen) = spawn_stub().await;
    let c = console(&base);

    assert!(login(&c, "a@b.com", "x").await);

    assert_eq!(
        seen.signin_bodies.lock().unwrap().clone(),
        vec![json!({ "username": "a@b.com", "password": "x" })]
    );
    let cookie = c.session.cookie().expect("apiToken cookie stored");
    assert_eq!(cookie.name(), "apiToken");
    assert_eq!(cookie.value(), "T1");
    assert_eq!(cookie.expires_datetime().map(|t| t.unix_timestamp()), Some(1_893_456_000));
    assert_eq!(seen.product_auth.lock().unwrap().clone(), vec!["T1".to_owned()]);

    let state = c.state.snapshot();
    assert!(state.authenticated);
    assert_eq!(state.credentials.username, "");
    assert_eq!(state.products.len(), 2);
    assert!(state.products[0].is_enabled);
    assert!(!state.products[1].is_enabled);
    assert_eq!(state.products[0].images_url, vec!["https://img.test/a2.jpg".to_owned()]);

    let toasts = c.notifier.toasts.borrow().clone();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Success);
    assert_eq!(toasts[0].title, "ok");
}

#[tokio::test]
async fn wrong_password_surfaces_server_message() {
    let (base, seen) = spawn_stub().await;
    let c = console(&base);

    assert!(!login(&c, "a@b.com", "nope").await);

    assert!(!c.state.snapshot().authenticated);
    assert_eq!(c.session.token(), None);
    assert!(seen.product_auth.lock().unwrap().is_empty());
    let toasts = c.notifier.toasts.borrow().clone();
    assert_eq!(toasts.last().map(|t| (t.level, t.text.as_str())), Some((ToastLevel::Error, "wrong password")));
}

#[tokio::test]
async fn check_session_uses_cookie_token() {
    let (base, seen) = spawn_stub().await;
    let c = console(&base);
    login(&c, "a@b.com", "x").await;

    assert!(c.controller.check_session().await);

    assert_eq!(seen.check_auth.lock().unwrap().clone(), vec!["T1".to_owned()]);
}

#[tokio::test]
async fn check_session_with_stale_token_reports_failure_without_logging_out() {
    let (base, _seen) = spawn_stub().await;
    let c = console(&base);
    login(&c, "a@b.com", "x").await;
    c.session.set_token("stale", None);

    assert!(!c.controller.check_session().await);

    assert!(c.state.snapshot().authenticated);
    let last = c.notifier.toasts.borrow().last().cloned().unwrap();
    assert_eq!(last.level, ToastLevel::Error);
    assert_eq!(last.text, "please sign in");
}

#[tokio::test]
async fn select_then_logout_returns_to_login_view() {
    let (base, _seen) = spawn_stub().await;
    let c = console(&base);
    login(&c, "a@b.com", "x").await;

    assert!(c.controller.select_product(Some("B")));
    assert_eq!(c.state.snapshot().selected.map(|p| p.title), Some("Beta".to_owned()));

    c.controller.logout();

    let state = c.state.snapshot();
    assert!(!state.authenticated);
    assert!(state.selected.is_none());
    assert_eq!(c.session.token(), Some("T1".to_owned()));
}

#[tokio::test]
async fn refetch_with_invalid_token_keeps_catalog() {
    let (base, _seen) = spawn_stub().await;
    let c = console(&base);
    login(&c, "a@b.com", "x").await;
    c.session.set_token("bogus", None);

    assert!(!c.controller.fetch_catalog().await);

    assert_eq!(c.state.snapshot().products.len(), 2);
    let last = c.notifier.toasts.borrow().last().cloned().unwrap();
    assert_eq!(last.text, "token invalid");
}

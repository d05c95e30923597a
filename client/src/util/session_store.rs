//! Session token persistence in the `apiToken` cookie.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never touches `document.cookie` directly; it talks to a
//! [`SessionStore`]. The browser build uses [`DocumentCookieStore`]; tests
//! and native callers use [`MemorySessionStore`], which keeps the same
//! cookie in a `cookie::CookieJar` so assertions can inspect it.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::cell::RefCell;
use std::rc::Rc;

use cookie::{Cookie, CookieJar};
use time::OffsetDateTime;

/// Cookie holding the bearer token.
pub const TOKEN_COOKIE: &str = "apiToken";

/// Where the session token lives between requests.
pub trait SessionStore {
    /// Current token, if one is stored and non-empty.
    fn token(&self) -> Option<String>;

    /// Store `token`; `None` expiry makes it a browser-session cookie.
    fn set_token(&self, token: &str, expires: Option<OffsetDateTime>);

    fn clear_token(&self);
}

impl<T: SessionStore + ?Sized> SessionStore for Rc<T> {
    fn token(&self) -> Option<String> {
        (**self).token()
    }

    fn set_token(&self, token: &str, expires: Option<OffsetDateTime>) {
        (**self).set_token(token, expires);
    }

    fn clear_token(&self) {
        (**self).clear_token();
    }
}

/// Build the `apiToken` cookie for `token`.
pub fn session_cookie(token: &str, expires: Option<OffsetDateTime>) -> Cookie<'static> {
    let mut builder = Cookie::build((TOKEN_COOKIE, token.to_owned())).path("/");
    if let Some(at) = expires {
        builder = builder.expires(at);
    }
    builder.build()
}

/// An already-expired `apiToken` cookie; writing it deletes the token.
pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, "")).path("/").expires(OffsetDateTime::UNIX_EPOCH).build()
}

/// Whether `token` can be sent as an `Authorization` header value.
///
/// The cookie is user-editable, and the browser fetch layer throws on header
/// values outside visible ASCII, so anything else is treated as no token.
pub fn is_sendable_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_graphic())
}

/// Extract the token from a `document.cookie`-style header. Empty or
/// unsendable values count as absent.
pub fn token_from_cookie_header(header: &str) -> Option<String> {
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|c| c.name() == TOKEN_COOKIE)
        .map(|c| c.value().to_owned())
        .filter(|v| is_sendable_token(v))
}

// =============================================================================
// BROWSER
// =============================================================================

/// `document.cookie`-backed store.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookieStore;

#[cfg(feature = "hydrate")]
impl DocumentCookieStore {
    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;
        web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
    }

    fn write(cookie: &Cookie<'_>) {
        let Some(doc) = Self::document() else {
            log::warn!("no document available; {TOKEN_COOKIE} cookie not written");
            return;
        };
        if doc.set_cookie(&cookie.to_string()).is_err() {
            log::warn!("browser refused to write {TOKEN_COOKIE} cookie");
        }
    }
}

#[cfg(feature = "hydrate")]
impl SessionStore for DocumentCookieStore {
    fn token(&self) -> Option<String> {
        let header = Self::document()?.cookie().ok()?;
        let token = token_from_cookie_header(&header);
        if token.is_none() && header.contains(TOKEN_COOKIE) {
            log::warn!("ignoring unusable {TOKEN_COOKIE} cookie");
        }
        token
    }

    fn set_token(&self, token: &str, expires: Option<OffsetDateTime>) {
        Self::write(&session_cookie(token, expires));
    }

    fn clear_token(&self) {
        Self::write(&expired_session_cookie());
    }
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Cookie-jar store for native callers and tests. Expiry is recorded but not
/// enforced.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    jar: RefCell<CookieJar>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored `apiToken` cookie, including its attributes.
    pub fn cookie(&self) -> Option<Cookie<'static>> {
        self.jar.borrow().get(TOKEN_COOKIE).cloned()
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.cookie().map(|c| c.value().to_owned()).filter(|v| is_sendable_token(v))
    }

    fn set_token(&self, token: &str, expires: Option<OffsetDateTime>) {
        self.jar.borrow_mut().add(session_cookie(token, expires));
    }

    fn clear_token(&self) {
        self.jar.borrow_mut().remove(Cookie::from(TOKEN_COOKIE));
    }
}

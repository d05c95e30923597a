//! Wire DTOs for the remote admin API.
//!
//! DESIGN
//! ======
//! The admin API is loosely typed: flags arrive as `true`/`1`, prices as
//! numbers or numeric strings, and the token expiry as a millisecond
//! timestamp or a date string. Deserializers here absorb that looseness so
//! the rest of the crate works with plain Rust types.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::{Rfc2822, Rfc3339};

/// Login form payload, posted as-is to the signin endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// A single field of [`Credentials`], keyed by the login form input id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialField {
    Username,
    Password,
}

impl CredentialField {
    /// Map a login form input id (`"username"` / `"password"`) to its field.
    pub fn from_input_id(id: &str) -> Option<Self> {
        match id {
            "username" => Some(Self::Username),
            "password" => Some(Self::Password),
            _ => None,
        }
    }

    pub fn input_id(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Password => "password",
        }
    }
}

/// A catalog product as returned by the admin products endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// List price before discount.
    #[serde(default, deserialize_with = "deserialize_price")]
    pub origin_price: f64,
    /// Current selling price.
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_enabled: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    /// Sales unit label (e.g. "box"), empty when the API omits it.
    #[serde(default)]
    pub unit: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
    /// Additional gallery images; `null` and absent both mean none.
    #[serde(rename = "imagesUrl", default, deserialize_with = "deserialize_image_list")]
    pub images_url: Vec<String>,
}

/// `GET /api/{path}/admin/products` success body.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductsResponse {
    #[serde(default)]
    pub products: Vec<Product>,
}

/// `POST /api/user/check` body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CheckResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /admin/signin` body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SignInResponse {
    /// Some deployments omit `success` on a good login.
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub token: String,
    /// Token expiry; `None` means the cookie lives for the browser session.
    #[serde(default, deserialize_with = "deserialize_expiry")]
    pub expired: Option<OffsetDateTime>,
    #[serde(default)]
    pub message: String,
}

fn default_true() -> bool {
    true
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Bool(flag) => Ok(flag),
        serde_json::Value::Number(number) => Ok(number.as_f64().is_some_and(|n| n != 0.0)),
        serde_json::Value::Null => Ok(false),
        _ => Err(D::Error::custom("expected boolean or number")),
    }
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(number) => {
            number.as_f64().ok_or_else(|| D::Error::custom("expected finite number"))
        }
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom("expected numeric string")),
        serde_json::Value::Null => Ok(0.0),
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_image_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let urls = Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(urls.into_iter().filter(|url| !url.trim().is_empty()).collect())
}

#[allow(clippy::cast_possible_truncation)]
fn deserialize_expiry<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .and_then(expiry_from_millis),
        serde_json::Value::String(raw) => parse_expiry(&raw),
        _ => None,
    })
}

/// Parse a date-like expiry string: epoch millis, RFC 3339, or RFC 2822.
pub fn parse_expiry(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(millis) = raw.parse::<i64>() {
        return expiry_from_millis(millis);
    }
    OffsetDateTime::parse(raw, &Rfc3339)
        .or_else(|_| OffsetDateTime::parse(raw, &Rfc2822))
        .ok()
}

fn expiry_from_millis(millis: i64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).ok()
}

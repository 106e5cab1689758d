//! Client credential cookies.
//!
//! The reveal credential is held client-side in a cookie named
//! `salary_<public_token>`, scoped per pool. The value is an opaque bearer
//! token; the gate trusts nothing about it beyond an exact match.

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use std::time::Duration;

/// Cookie name for a pool's reveal credential.
pub fn credential_cookie_name(public_token: &str) -> String {
    format!("salary_{public_token}")
}

/// Find a cookie value by exact name across all Cookie headers.
pub fn find_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    for header in headers.get_all(COOKIE) {
        let Ok(raw) = header.to_str() else { continue };
        for pair in raw.split(';') {
            let mut parts = pair.trim().splitn(2, '=');
            let key = parts.next().unwrap_or("");
            if key == name {
                return Some(parts.next().unwrap_or("").to_string());
            }
        }
    }
    None
}

/// Build the Set-Cookie value issuing a reveal credential.
pub fn credential_set_cookie(name: &str, value: &str, ttl: Duration) -> String {
    format!(
        "{name}={value}; Max-Age={}; Path=/; HttpOnly; SameSite=Lax",
        ttl.as_secs()
    )
}

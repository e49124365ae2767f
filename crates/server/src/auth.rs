//! # Session Helpers
//!
//! The surrounding portal application owns authentication and supplies
//! session cookies; this module only reads them. `school_admin` marks a staff
//! session, `school_user` carries the numeric id of the logged-in user for
//! asker resolution. The pipeline itself mints and validates nothing.

use crate::state::AppState;
use axum::http::HeaderMap;
use schoolchat::types::Asker;
use tracing::warn;

/// Extracts a cookie value by name from the request headers.
pub fn cookie_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    let cookies = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// Whether the request carries a staff session.
pub fn is_staff_session(headers: &HeaderMap) -> bool {
    cookie_value(headers, "school_admin").is_some()
}

/// Resolves the asker identity from the session cookie, when present.
///
/// A missing cookie, unparseable id, or unknown user all yield `None`; the
/// chat pipeline treats an anonymous asker as a first-class case.
pub async fn asker_from_session(state: &AppState, headers: &HeaderMap) -> Option<Asker> {
    let user_id = cookie_value(headers, "school_user")?.parse::<i64>().ok()?;
    match state.store.get_asker(user_id).await {
        Ok(asker) => asker,
        Err(e) => {
            warn!("Failed to resolve session user {user_id}: {e}");
            None
        }
    }
}

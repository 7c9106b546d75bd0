// Inkpad - a file-backed web document manager built with Rust
// Copyright (C) 2026 Inkpad Project Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use axum_extra::extract::cookie::{Cookie, CookieJar};
use cookie::SameSite;
use inkpad_core::Role;

use crate::session::SessionStore;
use crate::state::AppState;

pub const SESSION_COOKIE: &str = "session_id";

/// Return the request's session id, minting a cookie when the browser did
/// not send one. The returned jar must flow back out with the response so
/// the Set-Cookie header reaches the client.
pub fn ensure_session(jar: CookieJar) -> (CookieJar, String) {
    if let Some(existing) = jar.get(SESSION_COOKIE) {
        let id = existing.value().to_string();
        return (jar, id);
    }

    let id = SessionStore::create_id();
    let cookie = Cookie::build((SESSION_COOKIE, id.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    (jar.add(cookie), id)
}

/// True iff the session's stored principal carries the admin role.
pub fn is_signed_in(state: &AppState, session_id: &str) -> bool {
    state
        .sessions
        .user(session_id)
        .as_deref()
        .and_then(Role::from_principal)
        .is_some()
}

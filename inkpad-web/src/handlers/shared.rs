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

use axum::{
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
};
use tera::Context;

use crate::{auth, error::AppError, state::AppState};

/// 302 redirect. The route contract is the classic found redirect, so this
/// builds the response directly instead of using axum's `Redirect::to`,
/// which emits 303.
pub fn redirect_found(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}

/// Render a page template with the session's one-shot flash messages and
/// the signed-in principal added to the context.
///
/// Taking the flash here means it is consumed exactly when a page renders,
/// never by a redirect.
pub fn render_page(
    state: &AppState,
    session_id: &str,
    template: &str,
    context: &mut Context,
) -> Result<Html<String>, AppError> {
    let flash = state.sessions.take_flash(session_id);
    context.insert("flash_success", &flash.success);
    context.insert("flash_error", &flash.error);
    context.insert("flash_message", &flash.message);
    context.insert("current_user", &state.sessions.user(session_id));

    let html = state.templates.render(template, context).map_err(|e| {
        tracing::error!("Failed to render {}: {:?}", template, e);
        AppError::internal_server_error("Failed to render page")
    })?;

    Ok(Html(html))
}

/// Guard for document-viewing and mutating routes. On failure the caller
/// gets a ready-made flash-plus-redirect response to return as-is.
pub fn require_signed_in(state: &AppState, session_id: &str) -> Result<(), Response> {
    if auth::is_signed_in(state, session_id) {
        return Ok(());
    }

    tracing::debug!("signed-out request to a protected route");
    state
        .sessions
        .set_error(session_id, "You must be signed in to do that.");
    Err(redirect_found("/"))
}

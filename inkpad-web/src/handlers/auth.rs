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
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};
use axum_extra::extract::CookieJar;
use inkpad_core::Role;
use serde::Deserialize;
use tera::Context;

use crate::{
    auth::ensure_session,
    error::AppError,
    handlers::shared::{redirect_found, render_page},
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct SigninForm {
    pub username: String,
    pub password: String,
}

/// Display the sign-in form
pub async fn signin_form(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let (jar, session_id) = ensure_session(jar);

    let mut context = Context::new();
    let html = render_page(&state, &session_id, "signin.html", &mut context)?;
    Ok((jar, html).into_response())
}

/// Handle a sign-in attempt.
///
/// Success sets the session principal and redirects home; failure re-renders
/// the form with 422 and leaves the principal unset.
pub async fn signin(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SigninForm>,
) -> Result<Response, AppError> {
    let (jar, session_id) = ensure_session(jar);

    let valid = state
        .credentials
        .verify(&form.username, &form.password)
        .map_err(|e| {
            tracing::error!("Credential verification failed: {:?}", e);
            AppError::internal_server_error("Unable to verify credentials")
        })?;

    // A stored principal is always one the auth gate accepts: a credential
    // entry whose username carries no role cannot sign in
    if valid && Role::from_principal(&form.username).is_some() {
        state.sessions.sign_in(&session_id, &form.username);
        return Ok((jar, redirect_found("/")).into_response());
    }

    tracing::warn!(username = %form.username, "failed sign-in attempt");

    let mut context = Context::new();
    context.insert("error", "Invalid credentials");
    context.insert("username", &form.username);
    let html = render_page(&state, &session_id, "signin.html", &mut context)?;
    Ok((StatusCode::UNPROCESSABLE_ENTITY, jar, html).into_response())
}

/// Clear the signed-in principal and bounce back to the sign-in form
pub async fn signout(State(state): State<AppState>, jar: CookieJar) -> Response {
    let (jar, session_id) = ensure_session(jar);
    state.sessions.sign_out(&session_id);
    (jar, redirect_found("/signin")).into_response()
}

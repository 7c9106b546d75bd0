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
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use axum_extra::extract::CookieJar;
use inkpad_core::{Document, DocumentFormat, PLACEHOLDER_CONTENT};
use serde::Deserialize;
use tera::Context;

use crate::{
    auth::ensure_session,
    error::AppError,
    handlers::shared::{redirect_found, render_page, require_signed_in},
    markdown::markdown_to_html,
    AppState,
};

#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct NewDocumentForm {
    pub name: String,
}

/// GET `/` - list every document in the catalog
pub async fn index(State(state): State<AppState>, jar: CookieJar) -> Result<Response, AppError> {
    let (jar, session_id) = ensure_session(jar);

    let files = state.documents.list()?;

    let mut context = Context::new();
    context.insert("files", &files);
    let html = render_page(&state, &session_id, "index.html", &mut context)?;
    Ok((jar, html).into_response())
}

/// GET `/{filename}` - serve a document's content.
///
/// Plain text goes out verbatim; markdown is converted to HTML and embedded
/// in the page template. Unknown extensions are rejected explicitly rather
/// than falling through with an empty body.
pub async fn view_document(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let (jar, session_id) = ensure_session(jar);

    let files = state.documents.list()?;
    if !files.iter().any(|f| f == &filename) {
        state
            .sessions
            .set_error(&session_id, &format!("{} does not exist.", filename));
        return Ok((jar, redirect_found("/")).into_response());
    }

    if let Err(denied) = require_signed_in(&state, &session_id) {
        return Ok((jar, denied).into_response());
    }

    let content = match state.documents.read(&filename) {
        Ok(content) => content,
        Err(e) => {
            tracing::error!("Failed to read '{}': {:?}", filename, e);
            state
                .sessions
                .set_error(&session_id, &format!("Unable to read {}.", filename));
            return Ok((jar, redirect_found("/")).into_response());
        }
    };

    match DocumentFormat::from_name(&filename) {
        DocumentFormat::PlainText => Ok((
            jar,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            content,
        )
            .into_response()),
        DocumentFormat::Markdown => {
            let mut context = Context::new();
            context.insert("name", &filename);
            context.insert("content", &markdown_to_html(&content));
            let html = render_page(&state, &session_id, "document.html", &mut context)?;
            Ok((jar, html).into_response())
        }
        DocumentFormat::Unsupported => {
            state.sessions.set_error(
                &session_id,
                &format!("{} has an unsupported file type.", filename),
            );
            Ok((jar, redirect_found("/")).into_response())
        }
    }
}

/// GET `/{filename}/edit` - edit form with the current content loaded
pub async fn edit_document_form(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let (jar, session_id) = ensure_session(jar);

    if let Err(denied) = require_signed_in(&state, &session_id) {
        return Ok((jar, denied).into_response());
    }

    if !state.documents.exists(&filename)? {
        state
            .sessions
            .set_error(&session_id, &format!("{} does not exist.", filename));
        return Ok((jar, redirect_found("/")).into_response());
    }

    let content = state.documents.read(&filename)?;

    let mut context = Context::new();
    context.insert("name", &filename);
    context.insert("content", &content);
    let html = render_page(&state, &session_id, "edit.html", &mut context)?;
    Ok((jar, html).into_response())
}

/// POST `/{filename}` - overwrite a document's content.
///
/// Saving is an update, never a creation: names absent from the catalog are
/// rejected so the creation route stays the only way to make a document.
pub async fn save_document(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    jar: CookieJar,
    Form(form): Form<EditForm>,
) -> Result<Response, AppError> {
    let (jar, session_id) = ensure_session(jar);

    if let Err(denied) = require_signed_in(&state, &session_id) {
        return Ok((jar, denied).into_response());
    }

    if !state.documents.exists(&filename)? {
        state
            .sessions
            .set_error(&session_id, &format!("{} does not exist.", filename));
        return Ok((jar, redirect_found("/")).into_response());
    }

    match state.documents.write(&filename, &form.content) {
        Ok(()) => {
            state
                .sessions
                .set_success(&session_id, &format!("{} has been updated.", filename));
        }
        Err(e) => {
            tracing::error!("Failed to save '{}': {:?}", filename, e);
            state
                .sessions
                .set_error(&session_id, &format!("Unable to save {}.", filename));
        }
    }
    Ok((jar, redirect_found("/")).into_response())
}

/// GET `/new/document` - document creation form
pub async fn new_document_form(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let (jar, session_id) = ensure_session(jar);

    if let Err(denied) = require_signed_in(&state, &session_id) {
        return Ok((jar, denied).into_response());
    }

    let mut context = Context::new();
    let html = render_page(&state, &session_id, "new.html", &mut context)?;
    Ok((jar, html).into_response())
}

/// POST `/new/document` - create a document with placeholder content.
///
/// An invalid or duplicate name re-renders the form with 422.
pub async fn create_document(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<NewDocumentForm>,
) -> Result<Response, AppError> {
    let (jar, session_id) = ensure_session(jar);

    if let Err(denied) = require_signed_in(&state, &session_id) {
        return Ok((jar, denied).into_response());
    }

    let name = form.name.trim().to_string();

    let error = match Document::validate_name(&name) {
        Err(message) => Some(message),
        Ok(()) => {
            if state.documents.exists(&name)? {
                Some(format!("{} already exists.", name))
            } else {
                None
            }
        }
    };

    if let Some(message) = error {
        let mut context = Context::new();
        context.insert("error", &message);
        context.insert("name", &form.name);
        let html = render_page(&state, &session_id, "new.html", &mut context)?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, jar, html).into_response());
    }

    match state.documents.write(&name, PLACEHOLDER_CONTENT) {
        Ok(()) => {
            state
                .sessions
                .set_success(&session_id, &format!("{} has been created.", name));
        }
        Err(e) => {
            tracing::error!("Failed to create '{}': {:?}", name, e);
            state
                .sessions
                .set_error(&session_id, &format!("Unable to create {}.", name));
        }
    }
    Ok((jar, redirect_found("/")).into_response())
}

/// POST `/{filename}/delete` - remove a document
pub async fn delete_document(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    jar: CookieJar,
) -> Result<Response, AppError> {
    let (jar, session_id) = ensure_session(jar);

    if let Err(denied) = require_signed_in(&state, &session_id) {
        return Ok((jar, denied).into_response());
    }

    // Deleting a name that is already gone is a failure, not a no-op
    if !state.documents.exists(&filename)? {
        state
            .sessions
            .set_error(&session_id, &format!("{} does not exist.", filename));
        return Ok((jar, redirect_found("/")).into_response());
    }

    match state.documents.delete(&filename) {
        Ok(()) => {
            state
                .sessions
                .set_success(&session_id, &format!("{} has been deleted.", filename));
        }
        Err(e) => {
            tracing::error!("Failed to delete '{}': {:?}", filename, e);
            state
                .sessions
                .set_error(&session_id, &format!("Unable to delete {}.", filename));
        }
    }
    Ok((jar, redirect_found("/")).into_response())
}

#[cfg(test)]
mod tests {
    use crate::routes::create_router;
    use crate::test_helpers::{create_test_state, TEST_PASSWORD};
    use crate::AppState;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    fn server() -> (TestServer, AppState, tempfile::TempDir) {
        let (state, dir) = create_test_state().unwrap();
        let server = TestServer::builder()
            .save_cookies()
            .build(create_router(state.clone()))
            .unwrap();
        (server, state, dir)
    }

    async fn sign_in(server: &TestServer) {
        let response = server
            .post("/signin")
            .form(&json!({ "username": "admin", "password": TEST_PASSWORD }))
            .await;
        assert_eq!(response.status_code(), StatusCode::FOUND);
    }

    #[tokio::test]
    async fn test_index_lists_every_document_once() {
        let (server, state, _dir) = server();
        state.documents.write("about.txt", "about").unwrap();
        state.documents.write("changes.md", "# changes").unwrap();

        let response = server.get("/").await;
        response.assert_status(StatusCode::OK);

        let body = response.text();
        assert!(body.contains("changes.md"));
        // Listed as a link exactly once
        assert_eq!(body.matches(r#"<a href="/about.txt">about.txt</a>"#).count(), 1);
    }

    #[tokio::test]
    async fn test_txt_round_trips_verbatim_with_plain_text_media_type() {
        let (server, state, _dir) = server();
        state
            .documents
            .write("history.txt", "talking with my colleague\n")
            .unwrap();

        sign_in(&server).await;
        let response = server.get("/history.txt").await;
        response.assert_status(StatusCode::OK);
        assert!(response
            .header("content-type")
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(response.text(), "talking with my colleague\n");
    }

    #[tokio::test]
    async fn test_markdown_renders_as_html() {
        let (server, state, _dir) = server();
        state
            .documents
            .write("guide.md", "# Heading\n\nSome *emphasis*.")
            .unwrap();

        sign_in(&server).await;
        let response = server.get("/guide.md").await;
        response.assert_status(StatusCode::OK);

        let body = response.text();
        assert!(body.contains("<h1>Heading</h1>"));
        assert!(body.contains("<em>emphasis</em>"));
    }

    #[tokio::test]
    async fn test_missing_document_flashes_once_then_clears() {
        let (server, _state, _dir) = server();

        let response = server.get("/notafile.txt").await;
        response.assert_status(StatusCode::FOUND);
        assert_eq!(response.header("location"), "/");

        let home = server.get("/").await;
        assert!(home.text().contains("notafile.txt does not exist."));

        // Flash is one-shot
        let home_again = server.get("/").await;
        assert!(!home_again.text().contains("notafile.txt does not exist."));
    }

    #[tokio::test]
    async fn test_viewing_requires_sign_in() {
        let (server, state, _dir) = server();
        state.documents.write("secret.txt", "hidden").unwrap();

        let response = server.get("/secret.txt").await;
        response.assert_status(StatusCode::FOUND);
        assert_eq!(response.header("location"), "/");

        let home = server.get("/").await;
        assert!(home.text().contains("You must be signed in to do that."));
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_rejected_explicitly() {
        let (server, state, _dir) = server();
        state.documents.write("image.png", "bytes").unwrap();

        sign_in(&server).await;
        let response = server.get("/image.png").await;
        response.assert_status(StatusCode::FOUND);

        let home = server.get("/").await;
        assert!(home.text().contains("image.png has an unsupported file type."));
    }

    #[tokio::test]
    async fn test_edit_form_shows_current_content() {
        let (server, state, _dir) = server();
        state.documents.write("notes.txt", "original text").unwrap();

        sign_in(&server).await;
        let response = server.get("/notes.txt/edit").await;
        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("original text"));
    }

    #[tokio::test]
    async fn test_save_overwrites_content() {
        let (server, state, _dir) = server();
        state.documents.write("notes.txt", "before").unwrap();

        sign_in(&server).await;
        let response = server
            .post("/notes.txt")
            .form(&json!({ "content": "after" }))
            .await;
        response.assert_status(StatusCode::FOUND);

        assert_eq!(state.documents.read("notes.txt").unwrap(), "after");
        let home = server.get("/").await;
        assert!(home.text().contains("notes.txt has been updated."));
    }

    #[tokio::test]
    async fn test_save_rejects_names_missing_from_catalog() {
        let (server, state, _dir) = server();
        sign_in(&server).await;

        // Saving must never double as creation, even for a supported
        // extension, and even less for one the creation route would reject
        for name in ["ghost.txt", "evil.sh"] {
            let response = server
                .post(&format!("/{}", name))
                .form(&json!({ "content": "sneaky" }))
                .await;
            response.assert_status(StatusCode::FOUND);
            assert_eq!(response.header("location"), "/");
            assert!(
                !state.documents.exists(name).unwrap(),
                "saving {:?} should not create it",
                name
            );
        }

        // The error slot keeps the most recent rejection
        let home = server.get("/").await;
        assert!(home.text().contains("evil.sh does not exist."));
    }

    #[tokio::test]
    async fn test_create_then_delete_lifecycle() {
        let (server, state, _dir) = server();
        sign_in(&server).await;

        let response = server
            .post("/new/document")
            .form(&json!({ "name": "test.txt" }))
            .await;
        response.assert_status(StatusCode::FOUND);
        assert_eq!(
            state.documents.read("test.txt").unwrap(),
            inkpad_core::PLACEHOLDER_CONTENT
        );

        let home = server.get("/").await;
        assert!(home.text().contains("test.txt has been created."));
        assert!(home.text().contains(r#"<a href="/test.txt">"#));

        let response = server.post("/test.txt/delete").await;
        response.assert_status(StatusCode::FOUND);
        assert!(!state.documents.exists("test.txt").unwrap());

        let home = server.get("/").await;
        assert!(home.text().contains("test.txt has been deleted."));
        assert!(!home.text().contains(r#"<a href="/test.txt">"#));
    }

    #[tokio::test]
    async fn test_double_delete_is_a_not_found_failure() {
        let (server, state, _dir) = server();
        state.documents.write("gone.txt", "x").unwrap();

        sign_in(&server).await;
        server.post("/gone.txt/delete").await;

        let response = server.post("/gone.txt/delete").await;
        response.assert_status(StatusCode::FOUND);

        let home = server.get("/").await;
        assert!(home.text().contains("gone.txt does not exist."));
    }

    #[tokio::test]
    async fn test_invalid_new_document_names_are_422() {
        let (server, _state, _dir) = server();
        sign_in(&server).await;

        for name in ["", "   ", "noext", "notes.txt.gz", "../evil.txt"] {
            let response = server
                .post("/new/document")
                .form(&json!({ "name": name }))
                .await;
            assert_eq!(
                response.status_code(),
                StatusCode::UNPROCESSABLE_ENTITY,
                "name {:?} should be rejected",
                name
            );
        }
    }

    #[tokio::test]
    async fn test_duplicate_new_document_name_is_422() {
        let (server, state, _dir) = server();
        state.documents.write("taken.txt", "x").unwrap();

        sign_in(&server).await;
        let response = server
            .post("/new/document")
            .form(&json!({ "name": "taken.txt" }))
            .await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        assert!(response.text().contains("taken.txt already exists."));
    }

    #[tokio::test]
    async fn test_signed_out_mutations_have_no_side_effects() {
        let (server, state, _dir) = server();
        state.documents.write("keep.txt", "original").unwrap();

        // Save
        let response = server
            .post("/keep.txt")
            .form(&json!({ "content": "tampered" }))
            .await;
        response.assert_status(StatusCode::FOUND);
        assert_eq!(response.header("location"), "/");
        assert_eq!(state.documents.read("keep.txt").unwrap(), "original");

        // Create
        server
            .post("/new/document")
            .form(&json!({ "name": "intruder.txt" }))
            .await;
        assert!(!state.documents.exists("intruder.txt").unwrap());

        // Delete
        server.post("/keep.txt/delete").await;
        assert!(state.documents.exists("keep.txt").unwrap());

        // Edit form is gated too
        let response = server.get("/keep.txt/edit").await;
        response.assert_status(StatusCode::FOUND);
    }

    #[tokio::test]
    async fn test_catalog_failure_is_a_500() {
        let (server, state, _dir) = server();
        std::fs::remove_dir_all(state.documents.root()).unwrap();

        let response = server.get("/").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }
}

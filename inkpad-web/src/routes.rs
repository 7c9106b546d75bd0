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
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{handlers, AppState};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/signin", get(handlers::signin_form).post(handlers::signin))
        .route("/signout", post(handlers::signout))
        // Static segments win over the filename capture below
        .route(
            "/new/document",
            get(handlers::new_document_form).post(handlers::create_document),
        )
        .route(
            "/{filename}",
            get(handlers::view_document).post(handlers::save_document),
        )
        .route("/{filename}/edit", get(handlers::edit_document_form))
        .route("/{filename}/delete", post(handlers::delete_document))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::create_test_state;
    use axum::http::StatusCode;
    use axum_test::TestServer;

    #[tokio::test]
    async fn test_home_page_renders() {
        let (state, _dir) = create_test_state().unwrap();
        let server = TestServer::new(create_router(state)).unwrap();

        let response = server.get("/").await;
        response.assert_status(StatusCode::OK);
        assert!(response.text().contains("Documents"));
    }

    #[tokio::test]
    async fn test_signout_only_accepts_post() {
        let (state, _dir) = create_test_state().unwrap();
        let server = TestServer::new(create_router(state)).unwrap();

        let response = server.get("/signout").await;
        response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_new_document_is_not_captured_as_a_filename() {
        let (state, _dir) = create_test_state().unwrap();
        let server = TestServer::new(create_router(state)).unwrap();

        // Resolves to the creation form (gated), not to a "new" document view
        let response = server.get("/new/document").await;
        response.assert_status(StatusCode::FOUND);
        assert_eq!(response.header("location"), "/");
    }
}

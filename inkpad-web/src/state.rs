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

use std::sync::Arc;

use inkpad_store::{CredentialStore, DocumentStore};
use tera::Tera;

use crate::config::Config;
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub documents: DocumentStore,
    pub credentials: CredentialStore,
    pub sessions: SessionStore,
    pub templates: Arc<Tera>,
    pub config: Config,
}

impl AppState {
    pub fn new(
        documents: DocumentStore,
        credentials: CredentialStore,
        sessions: SessionStore,
        templates: Arc<Tera>,
        config: Config,
    ) -> Self {
        Self {
            documents,
            credentials,
            sessions,
            templates,
            config,
        }
    }
}

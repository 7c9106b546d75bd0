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

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use uuid::Uuid;

/// Per-browser-session state: the signed-in principal plus the one-shot
/// flash messages surfaced on the next rendered page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionData {
    pub user: Option<String>,
    pub success: Option<String>,
    pub error: Option<String>,
    pub message: Option<String>,
}

/// Flash messages taken out of a session for exactly one render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flash {
    pub success: Option<String>,
    pub error: Option<String>,
    pub message: Option<String>,
}

/// In-memory session storage keyed by the opaque session-id cookie.
///
/// The map is the only cross-request mutable state in the system. The lock
/// is never held across an await point.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, SessionData>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh opaque session id.
    pub fn create_id() -> String {
        Uuid::new_v4().to_string()
    }

    pub fn get(&self, id: &str) -> SessionData {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn update(&self, id: &str, f: impl FnOnce(&mut SessionData)) {
        let mut sessions = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(sessions.entry(id.to_string()).or_default());
    }

    /// The session's signed-in principal, if any.
    pub fn user(&self, id: &str) -> Option<String> {
        self.get(id).user
    }

    pub fn sign_in(&self, id: &str, username: &str) {
        self.update(id, |session| {
            session.user = Some(username.to_string());
            session.success = Some("Welcome!".to_string());
        });
        tracing::info!(user = %username, "signed in");
    }

    pub fn sign_out(&self, id: &str) {
        self.update(id, |session| {
            session.user = None;
            session.message = Some("You have been signed out.".to_string());
        });
    }

    pub fn set_success(&self, id: &str, message: &str) {
        self.update(id, |session| session.success = Some(message.to_string()));
    }

    pub fn set_error(&self, id: &str, message: &str) {
        self.update(id, |session| session.error = Some(message.to_string()));
    }

    pub fn set_message(&self, id: &str, message: &str) {
        self.update(id, |session| session.message = Some(message.to_string()));
    }

    /// Take the pending flash messages, clearing them so each shows once.
    pub fn take_flash(&self, id: &str) -> Flash {
        let mut sessions = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        match sessions.get_mut(id) {
            Some(session) => Flash {
                success: session.success.take(),
                error: session.error.take(),
                message: session.message.take(),
            },
            None => Flash::default(),
        }
    }
}

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

use anyhow::Result;
use inkpad_store::{CredentialStore, DocumentStore};
use tempfile::TempDir;

use crate::config::{Config, RunMode};
use crate::session::SessionStore;
use crate::state::AppState;
use crate::templates::init_templates;

pub const TEST_PASSWORD: &str = "secret";

/// Build an `AppState` rooted in a throwaway directory, with an `admin`
/// credential hashed at low cost for test speed. The `TempDir` must be kept
/// alive for as long as the state is used.
pub fn create_test_state() -> Result<(AppState, TempDir)> {
    let dir = TempDir::new()?;

    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir)?;

    let credentials_file = dir.path().join("users.yml");
    let hash = bcrypt::hash(TEST_PASSWORD, 4)?;
    std::fs::write(&credentials_file, format!("admin: \"{}\"\n", hash))?;

    let templates_dir = dir.path().join("templates");
    let templates = init_templates(&templates_dir.to_string_lossy())?;

    let config = Config {
        run_mode: RunMode::Test,
        host: "127.0.0.1".to_string(),
        port: 0,
        data_dir: data_dir.clone(),
        credentials_file: credentials_file.clone(),
        templates_dir: templates_dir.to_string_lossy().into_owned(),
    };

    let state = AppState::new(
        DocumentStore::new(&data_dir),
        CredentialStore::new(&credentials_file),
        SessionStore::new(),
        templates,
        config,
    );

    Ok((state, dir))
}

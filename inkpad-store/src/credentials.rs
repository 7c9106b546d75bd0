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

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Credential verification against a YAML file mapping username to a bcrypt
/// password hash.
///
/// The file is re-read on every verification call. With a single admin and
/// sign-in being rare, freshness is worth more than the parse cost; a cache
/// keyed on mtime is the obvious upgrade if that ever changes.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check a username/password pair against the credential file.
    ///
    /// An unknown username is `Ok(false)`. A known username is compared with
    /// bcrypt's own verifier (constant-time, salt-aware) - never with string
    /// equality. An unreadable or corrupt credential file is an error.
    pub fn verify(&self, username: &str, password: &str) -> Result<bool> {
        let credentials = self.load()?;

        let Some(hash) = credentials.get(username) else {
            return Ok(false);
        };

        bcrypt::verify(password, hash)
            .with_context(|| format!("Invalid password hash for user '{}'", username))
    }

    fn load(&self) -> Result<HashMap<String, String>> {
        let raw = std::fs::read_to_string(&self.path).with_context(|| {
            format!("Failed to read credentials file {}", self.path.display())
        })?;
        serde_yaml::from_str(&raw).with_context(|| {
            format!("Failed to parse credentials file {}", self.path.display())
        })
    }
}

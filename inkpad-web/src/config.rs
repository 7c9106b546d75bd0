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
use std::{env, path::PathBuf};

/// Run mode selects which data directory and credentials file the server
/// uses: `APP_ENV=test` picks the test roots, anything else is production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Production,
    Test,
}

impl RunMode {
    pub fn from_env() -> Self {
        match env::var("APP_ENV").as_deref() {
            Ok("test") => Self::Test,
            _ => Self::Production,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub run_mode: RunMode,
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub credentials_file: PathBuf,
    pub templates_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let run_mode = RunMode::from_env();
        let root = env::current_dir().context("Failed to determine working directory")?;

        let (default_data_dir, default_credentials) = match run_mode {
            RunMode::Test => (
                root.join("tests").join("data"),
                root.join("tests").join("users.yml"),
            ),
            RunMode::Production => (root.join("data"), root.join("users.yml")),
        };

        Ok(Self {
            run_mode,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("Invalid PORT")?,
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(default_data_dir),
            credentials_file: env::var("CREDENTIALS_FILE")
                .map(PathBuf::from)
                .unwrap_or(default_credentials),
            templates_dir: env::var("TEMPLATES_DIR")
                .unwrap_or_else(|_| root.join("templates").to_string_lossy().to_string()),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

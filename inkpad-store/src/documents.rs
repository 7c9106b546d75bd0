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

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem-backed document storage.
///
/// The data directory is the sole source of truth: there is no caching and
/// no index beyond the directory listing itself. Every operation resolves
/// its document name to a path strictly inside the data directory.
#[derive(Debug, Clone)]
pub struct DocumentStore {
    root: PathBuf,
}

impl DocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List document names in directory order.
    ///
    /// A missing data directory is an error, not an empty catalog: an empty
    /// listing must always mean "no documents yet". Dotfiles are skipped so
    /// in-flight temp files never show up as documents.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.root).with_context(|| {
            format!("Failed to read data directory {}", self.root.display())
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read directory entry")?;
            let file_type = entry
                .file_type()
                .context("Failed to inspect directory entry")?;
            if !file_type.is_file() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                continue;
            }
            names.push(name);
        }
        Ok(names)
    }

    pub fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.list()?.iter().any(|n| n == name))
    }

    pub fn read(&self, name: &str) -> Result<String> {
        let path = self.resolve(name)?;
        fs::read_to_string(&path).with_context(|| format!("Failed to read document '{}'", name))
    }

    /// Overwrite a document's full content.
    ///
    /// Writes go through a temp file and a rename so a crash mid-write never
    /// leaves a truncated document behind. Last writer wins; there is no
    /// locking or versioning.
    pub fn write(&self, name: &str, content: &str) -> Result<()> {
        let path = self.resolve(name)?;
        let tmp = self.root.join(format!(".{}.tmp", name));

        fs::write(&tmp, content)
            .with_context(|| format!("Failed to write document '{}'", name))?;
        fs::rename(&tmp, &path)
            .with_context(|| format!("Failed to replace document '{}'", name))?;

        tracing::debug!(document = %name, bytes = content.len(), "document written");
        Ok(())
    }

    /// Remove a document.
    ///
    /// Deleting a name that is already gone is a NotFound-class error, never
    /// a silent no-op.
    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.resolve(name)?;
        fs::remove_file(&path)
            .with_context(|| format!("Failed to delete document '{}'", name))?;

        tracing::debug!(document = %name, "document deleted");
        Ok(())
    }

    /// Resolve a document name to a path inside the data directory,
    /// rejecting anything that could escape it.
    fn resolve(&self, name: &str) -> Result<PathBuf> {
        if name.trim().is_empty() {
            bail!("Document name is empty");
        }
        if name.contains('/') || name.contains('\\') {
            bail!("Document name '{}' contains path separators", name);
        }
        if name.contains("..") {
            bail!("Document name '{}' contains parent directory references", name);
        }
        Ok(self.root.join(name))
    }
}

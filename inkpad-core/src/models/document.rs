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

use serde::{Deserialize, Serialize};

/// Initial content written into a freshly created document.
pub const PLACEHOLDER_CONTENT: &str = "Your content here...\n";

/// The closed set of content types the manager knows how to serve.
///
/// Anything that is not plain text or markdown is `Unsupported` and must be
/// handled explicitly; there is no silent fallthrough for unknown extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentFormat {
    PlainText,
    Markdown,
    Unsupported,
}

impl DocumentFormat {
    /// Determine the format from a filename's extension.
    pub fn from_name(name: &str) -> Self {
        if name.ends_with(".txt") {
            Self::PlainText
        } else if name.ends_with(".md") {
            Self::Markdown
        } else {
            Self::Unsupported
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }

    /// Media type a document of this format is served with.
    pub fn media_type(&self) -> Option<&'static str> {
        match self {
            Self::PlainText => Some("text/plain; charset=utf-8"),
            Self::Markdown => Some("text/html; charset=utf-8"),
            Self::Unsupported => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub name: String,
    pub content: String,
}

impl Document {
    pub fn new(name: String, content: String) -> Self {
        Self { name, content }
    }

    pub fn format(&self) -> DocumentFormat {
        DocumentFormat::from_name(&self.name)
    }

    /// Validate a proposed document name.
    ///
    /// The name must be non-empty after trimming, must end with one of the
    /// supported extensions (a suffix match, not a substring scan), and must
    /// not be able to escape the data directory.
    pub fn validate_name(name: &str) -> Result<(), String> {
        let name = name.trim();

        if name.is_empty() {
            return Err("A name is required.".to_string());
        }

        if name.len() > 255 {
            return Err("Name cannot exceed 255 characters.".to_string());
        }

        if name.contains('/') || name.contains('\\') {
            return Err("Name cannot contain path separators.".to_string());
        }

        if name.contains("..") {
            return Err("Name cannot contain parent directory references.".to_string());
        }

        let stem = name
            .strip_suffix(".txt")
            .or_else(|| name.strip_suffix(".md"));
        match stem {
            Some(stem) if !stem.is_empty() => Ok(()),
            Some(_) => Err("A name is required.".to_string()),
            None => Err("Name must end in .txt or .md.".to_string()),
        }
    }
}

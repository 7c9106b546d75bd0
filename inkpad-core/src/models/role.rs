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

/// Roles a signed-in principal can hold.
///
/// Only the admin exists today; keeping it an enum means the auth gate
/// matches exhaustively instead of comparing strings all over the codebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
}

impl Role {
    pub const ADMIN_PRINCIPAL: &'static str = "admin";

    /// Map a session principal to its role, if it has one.
    pub fn from_principal(principal: &str) -> Option<Self> {
        match principal {
            Self::ADMIN_PRINCIPAL => Some(Self::Admin),
            _ => None,
        }
    }

    pub fn as_principal(&self) -> &'static str {
        match self {
            Self::Admin => Self::ADMIN_PRINCIPAL,
        }
    }
}

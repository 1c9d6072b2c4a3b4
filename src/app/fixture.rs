//! Sidebar fixture: the domain data the demo builds its buttons from.
//!
//! ```toml
//! own_user_id = 1
//!
//! [[streams]]
//! name = "general"
//! stream_id = 7
//! color = "#1a2b3c"
//!
//! [[users]]
//! full_name = "Ada Lovelace"
//! email = "ada@example.com"
//! user_id = 11
//! color = "user_active"
//!
//! [[palette]]
//! name = "user_active"
//! foreground = "lightgreen"
//!
//! [unread]
//! all = 12
//! private = 3
//! streams = [{ stream_id = 7, count = 5 }]
//! users = [{ user_id = 11, count = 3 }]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::buttons::{StreamRecord, UserRecord};
use crate::error::{Result, SidebarError};
use crate::palette::PaletteEntry;

#[derive(Debug, Clone, Deserialize)]
pub struct SidebarFixture {
    pub own_user_id: u64,
    #[serde(default)]
    pub streams: Vec<StreamRecord>,
    #[serde(default)]
    pub users: Vec<UserEntry>,
    /// Extra palette attributes, typically user colors.
    #[serde(default)]
    pub palette: Vec<PaletteEntry>,
    #[serde(default)]
    pub unread: UnreadCounts,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserEntry {
    #[serde(flatten)]
    pub user: UserRecord,
    #[serde(default)]
    pub color: Option<String>,
}

/// Snapshot from the unread-count source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UnreadCounts {
    pub all: i64,
    pub private: i64,
    pub streams: Vec<StreamUnread>,
    pub users: Vec<UserUnread>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StreamUnread {
    pub stream_id: u64,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserUnread {
    pub user_id: u64,
    pub count: i64,
}

impl UnreadCounts {
    pub fn stream(&self, stream_id: u64) -> i64 {
        self.streams
            .iter()
            .find(|s| s.stream_id == stream_id)
            .map_or(0, |s| s.count)
    }

    pub fn user(&self, user_id: u64) -> i64 {
        self.users
            .iter()
            .find(|u| u.user_id == user_id)
            .map_or(0, |u| u.count)
    }
}

impl SidebarFixture {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| SidebarError::Config(format!("Failed to parse fixture: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SidebarError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| {
            SidebarError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let fixture = Self::parse(&content)?;
        tracing::info!(
            path = %path.display(),
            streams = fixture.streams.len(),
            users = fixture.users.len(),
            "fixture loaded"
        );
        Ok(fixture)
    }
}

#[cfg(test)]
pub(crate) const SAMPLE: &str = r##"
own_user_id = 1

[[streams]]
name = "general"
stream_id = 7
color = "#1a2b3c"

[[streams]]
name = "rust"
stream_id = 9
color = "#f0e0d0"

[[users]]
full_name = "Ada Lovelace"
email = "ada@example.com"
user_id = 11
color = "user_active"

[[users]]
full_name = "Grace Hopper"
email = "grace@example.com"
user_id = 12

[[palette]]
name = "user_active"
foreground = "lightgreen"

[unread]
all = 12
private = 3
streams = [{ stream_id = 7, count = 5 }]
users = [{ user_id = 11, count = 3 }]
"##;

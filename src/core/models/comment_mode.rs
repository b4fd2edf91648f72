//! Comment delivery modes

use serde::{Deserialize, Serialize};

/// How a new coverage comment relates to earlier ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentMode {
    /// Delete earlier comments, then post a new one
    #[default]
    Replace,
    /// Edit the latest earlier comment in place, deleting any others
    Update,
    /// Always post a new comment
    Insert,
}

impl CommentMode {
    /// Parse a mode, falling back to [`CommentMode::Replace`] for unknown values
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for CommentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Replace => write!(f, "replace"),
            Self::Update => write!(f, "update"),
            Self::Insert => write!(f, "insert"),
        }
    }
}

impl std::str::FromStr for CommentMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "replace" => Ok(Self::Replace),
            "update" => Ok(Self::Update),
            "insert" => Ok(Self::Insert),
            _ => Err(format!("Invalid comment mode: {s}. Use: replace, update, insert")),
        }
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned post identifier. Opaque to the client; the wire field is
/// `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostId(pub String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A blog post as the server serves it. The client only ever holds transient
/// copies; the server owns the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(rename = "_id")]
    pub id: PostId,
    pub title: String,
    pub text: String,
    pub author_name: String,
    pub author_email: String,
    #[serde(default)]
    pub likes: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liked_by: Option<Vec<String>>,
}

/// The authentication collaborator's view of the signed-in user. Never
/// persisted by this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSession {
    pub name: String,
    pub email: String,
}

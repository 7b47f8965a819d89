//! Comment entity model.

use serde::{Deserialize, Serialize};

use crate::de::null_default;

use super::user::User;

/// A comment together with its replies.
///
/// Replies nest to arbitrary depth through `children`, in the order the API
/// returns them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    #[serde(deserialize_with = "null_default")]
    pub type_of: String,
    #[serde(deserialize_with = "null_default")]
    pub id_code: String,
    #[serde(deserialize_with = "null_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_default")]
    pub body_html: String,
    #[serde(deserialize_with = "null_default")]
    pub user: User,
    #[serde(deserialize_with = "null_default")]
    pub children: Vec<Comment>,
}

impl Comment {
    /// Depth of the thread rooted at this comment (a lone comment has depth 1).
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Comment::depth).max().unwrap_or(0)
    }

    /// Number of comments in the thread, including this one.
    pub fn thread_len(&self) -> usize {
        1 + self.children.iter().map(Comment::thread_len).sum::<usize>()
    }
}

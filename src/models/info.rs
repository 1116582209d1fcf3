// Announcement board models
use serde::{Deserialize, Serialize};

pub type InfoId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: InfoId,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub id: InfoId,
    /// Local display timestamp captured when the info was posted
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "chats", default)]
    pub replies: Vec<Reply>,
}

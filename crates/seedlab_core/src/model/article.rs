//! Article document.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Article category, stored as `type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleType {
    A,
    B,
    C,
}

impl ArticleType {
    /// Every article type, in seeding order.
    pub const ALL: [ArticleType; 3] = [ArticleType::A, ArticleType::B, ArticleType::C];

    /// Value stored in the `type` field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
        }
    }
}

impl Display for ArticleType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generated article record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Assigned by the server on insert; `None` before that.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub description: String,
    /// Serialized as `type` to match the stored document.
    #[serde(rename = "type")]
    pub kind: ArticleType,
    /// Order is preserved exactly as written.
    #[serde(default)]
    pub tags: Vec<String>,
}

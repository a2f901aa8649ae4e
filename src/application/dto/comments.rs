use serde::{Deserialize, Serialize};

/// Comment as served by the remote mock API. Read-only on our side; the
/// camelCase field names are the remote shape and we keep them on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i64,
    pub article_id: i64,
    pub nickname: String,
    pub body: String,
}

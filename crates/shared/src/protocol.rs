use serde::{Deserialize, Serialize};

/// Payload for POST /api/blogs. The server fills in `_id`, `likes` and
/// `likedBy` on the created record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogRequest {
    pub title: String,
    pub text: String,
    pub author_name: String,
    pub author_email: String,
}

/// Body of a successful POST /api/blogs/:id/like.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LikeResponse {
    pub likes: i64,
}

//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Query string of the post listing. Values stay raw strings so that
/// non-numeric input can fall back to the defaults instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Fields accepted when creating or updating a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// A post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
    pub slug: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::required;
use crate::domain::error::{ApiError, ApiResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Comment {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
}

/// One row of `GET /api/articles/{article_id}/comments`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct CommentListingRow {
    pub comment_id: i32,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    pub author: String,
    pub body: String,
    pub article_id: i32,
    pub result: String,
    pub total_results: String,
}

/// Request body of `POST /api/articles/{article_id}/comments`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewComment {
    pub username: Option<String>,
    pub body: Option<String>,
}

impl NewComment {
    /// Returns `(username, body)` or `BadRequest` if either is missing.
    pub fn validate(&self) -> ApiResult<(&str, &str)> {
        match (required(&self.username), required(&self.body)) {
            (Some(username), Some(body)) => Ok((username, body)),
            _ => Err(ApiError::BadRequest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_requires_username_and_body() {
        let ok = NewComment {
            username: Some("lurker".into()),
            body: Some("first!".into()),
        };
        assert_eq!(ok.validate().unwrap(), ("lurker", "first!"));

        let no_body = NewComment {
            username: Some("lurker".into()),
            body: None,
        };
        assert!(matches!(no_body.validate(), Err(ApiError::BadRequest)));
    }
}

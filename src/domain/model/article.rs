use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::required;
use crate::domain::error::{ApiError, ApiResult};

/// Image used when an article is posted without `article_img_url`.
pub const DEFAULT_ARTICLE_IMG_URL: &str =
    "https://images.pexels.com/photos/97050/pexels-photo-97050.jpeg?w=700&h=700";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Article {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
}

/// A freshly posted article together with its (zero) comment count.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArticleWithCount {
    #[serde(flatten)]
    pub article: Article,
    pub comment_count: i64,
}

/// One row of `GET /api/articles`.
///
/// `comment_count`, `result` and `total_results` are rendered as strings: Postgres returns
/// `count(*)`/`row_number()` as `bigint`, which the wire format has always carried as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ArticleListingRow {
    pub author: String,
    pub title: String,
    pub article_id: i32,
    pub topic: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: String,
    /// 1-based rank within the whole filtered, sorted set.
    pub result: String,
    /// Size of the filtered set before pagination.
    pub total_results: String,
}

/// Request body of `POST /api/articles`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewArticle {
    pub author: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub topic: Option<String>,
    pub article_img_url: Option<String>,
}

/// A `NewArticle` with every required field present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidNewArticle<'a> {
    pub author: &'a str,
    pub title: &'a str,
    pub body: &'a str,
    pub topic: &'a str,
    pub article_img_url: &'a str,
}

impl NewArticle {
    pub fn validate(&self) -> ApiResult<ValidNewArticle<'_>> {
        match (
            required(&self.author),
            required(&self.title),
            required(&self.body),
            required(&self.topic),
        ) {
            (Some(author), Some(title), Some(body), Some(topic)) => Ok(ValidNewArticle {
                author,
                title,
                body,
                topic,
                article_img_url: required(&self.article_img_url)
                    .unwrap_or(DEFAULT_ARTICLE_IMG_URL),
            }),
            _ => Err(ApiError::BadRequest),
        }
    }
}

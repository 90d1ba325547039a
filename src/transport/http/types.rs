use crate::app::NewsService;
use crate::domain::model::{
    Article, ArticleListingRow, ArticleWithCount, Comment, CommentListingRow, Topic, User,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub news: Arc<NewsService>,
}

impl AppState {
    pub fn new(news: NewsService) -> Self {
        Self {
            news: Arc::new(news),
        }
    }
}

/// Body of every error response, and of the root greeting.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MsgResponse {
    pub msg: String,
}

/// Raw `GET /api/articles` query. Validation happens in `ListingRequest::parse`.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListingParams {
    /// Topic slug to filter by.
    pub topic: Option<String>,
    /// One of author, title, article_id, topic, created_at, votes, comment_count.
    pub sort_by: Option<String>,
    /// `asc` or `desc` (default).
    pub order: Option<String>,
    /// Page size (default 10).
    pub limit: Option<String>,
    /// 1-based page number (default 1).
    pub p: Option<String>,
}

#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CommentListingParams {
    pub limit: Option<String>,
    pub p: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct VoteUpdate {
    /// Delta added to the current vote count; omitted means 0.
    #[serde(default)]
    pub inc_votes: Option<i32>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct TopicsResponse {
    pub topics: Vec<Topic>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<User>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ArticlesResponse {
    pub articles: Vec<ArticleListingRow>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ArticleResponse {
    pub article: Article,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct PostedArticleResponse {
    pub article: ArticleWithCount,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ArticleCommentsResponse {
    pub comments: Vec<CommentListingRow>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct CommentResponse {
    pub comment: Comment,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

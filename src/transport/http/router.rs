use crate::domain::model::{
    Article, ArticleListingRow, ArticleWithCount, Comment, CommentListingRow, NewArticle,
    NewComment, Topic, User,
};
use crate::transport::http::handlers::{api, articles, comments, health, topics, users};
use crate::transport::http::types::{
    AppState, ArticleCommentsResponse, ArticleResponse, ArticlesResponse, CommentResponse,
    CommentsResponse, HealthResponse, MsgResponse, PostedArticleResponse, TopicsResponse,
    UserResponse, UsersResponse, VoteUpdate,
};
use axum::routing::{get, patch};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        api::root_handler,
        api::api_handler,
        topics::get_topics_handler,
        users::get_users_handler,
        users::get_user_handler,
        articles::get_articles_handler,
        articles::post_article_handler,
        articles::get_article_handler,
        articles::patch_article_handler,
        articles::delete_article_handler,
        articles::get_article_comments_handler,
        articles::post_article_comment_handler,
        comments::get_comments_handler,
        comments::patch_comment_handler,
        comments::delete_comment_handler
    ),
    components(schemas(
        Topic,
        User,
        Article,
        ArticleWithCount,
        ArticleListingRow,
        Comment,
        CommentListingRow,
        NewArticle,
        NewComment,
        VoteUpdate,
        MsgResponse,
        HealthResponse,
        TopicsResponse,
        UsersResponse,
        UserResponse,
        ArticlesResponse,
        ArticleResponse,
        PostedArticleResponse,
        ArticleCommentsResponse,
        CommentsResponse,
        CommentResponse
    )),
    info(title = "NC News API", description = "Articles, comments, topics and users.")
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(api::root_handler))
        .route("/health", get(health::healthcheck_handler))
        .route("/api", get(api::api_handler))
        .route("/api/topics", get(topics::get_topics_handler))
        .route("/api/users", get(users::get_users_handler))
        .route("/api/users/:username", get(users::get_user_handler))
        .route(
            "/api/articles",
            get(articles::get_articles_handler).post(articles::post_article_handler),
        )
        .route(
            "/api/articles/:article_id",
            get(articles::get_article_handler)
                .patch(articles::patch_article_handler)
                .delete(articles::delete_article_handler),
        )
        .route(
            "/api/articles/:article_id/comments",
            get(articles::get_article_comments_handler)
                .post(articles::post_article_comment_handler),
        )
        .route("/api/comments", get(comments::get_comments_handler))
        .route(
            "/api/comments/:comment_id",
            patch(comments::patch_comment_handler).delete(comments::delete_comment_handler),
        )
        .fallback(api::fallback_handler)
        .with_state(app_state)
}

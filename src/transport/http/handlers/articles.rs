use crate::domain::error::ApiResult;
use crate::domain::listing::{ListingRequest, Pagination};
use crate::domain::model::{NewArticle, NewComment};
use crate::transport::http::handlers::common::{json_body, parse_id, query_params};
use crate::transport::http::types::{
    AppState, ArticleCommentsResponse, ArticleListingParams, ArticleResponse, ArticlesResponse,
    CommentListingParams, CommentResponse, MsgResponse, PostedArticleResponse, VoteUpdate,
};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListingParams),
    responses(
        (status = 200, description = "Filtered, sorted, paginated articles", body = ArticlesResponse),
        (status = 400, description = "invalid sort/order/limit/page", body = MsgResponse),
        (status = 404, description = "topic not found", body = MsgResponse)
    )
)]
pub async fn get_articles_handler(
    State(state): State<AppState>,
    query: Result<Query<ArticleListingParams>, QueryRejection>,
) -> ApiResult<Json<ArticlesResponse>> {
    let params = query_params(query)?;
    let request = ListingRequest::parse(
        params.topic.as_deref(),
        params.sort_by.as_deref(),
        params.order.as_deref(),
        params.limit.as_deref(),
        params.p.as_deref(),
    )?;
    let articles = state.news.list_articles(&request).await?;
    Ok(Json(ArticlesResponse { articles }))
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = NewArticle,
    responses(
        (status = 201, description = "Article created", body = PostedArticleResponse),
        (status = 400, description = "bad request", body = MsgResponse),
        (status = 404, description = "username or topic not found", body = MsgResponse)
    )
)]
pub async fn post_article_handler(
    State(state): State<AppState>,
    body: Result<Json<NewArticle>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<PostedArticleResponse>)> {
    let new_article = json_body(body)?;
    let article = state.news.add_article(&new_article).await?;
    Ok((StatusCode::CREATED, Json(PostedArticleResponse { article })))
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    params(("article_id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article", body = ArticleResponse),
        (status = 400, description = "bad request", body = MsgResponse),
        (status = 404, description = "article not found", body = MsgResponse)
    )
)]
pub async fn get_article_handler(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> ApiResult<Json<ArticleResponse>> {
    let article_id = parse_id(&article_id)?;
    let article = state.news.article_by_id(article_id).await?;
    Ok(Json(ArticleResponse { article }))
}

#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    params(("article_id" = i32, Path, description = "Article id")),
    request_body = VoteUpdate,
    responses(
        (status = 200, description = "Updated article", body = ArticleResponse),
        (status = 400, description = "bad request", body = MsgResponse),
        (status = 404, description = "article not found", body = MsgResponse)
    )
)]
pub async fn patch_article_handler(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    body: Result<Json<VoteUpdate>, JsonRejection>,
) -> ApiResult<Json<ArticleResponse>> {
    let article_id = parse_id(&article_id)?;
    let update = json_body(body)?;
    let article = state
        .news
        .alter_article_votes(article_id, update.inc_votes.unwrap_or(0))
        .await?;
    Ok(Json(ArticleResponse { article }))
}

#[utoipa::path(
    delete,
    path = "/api/articles/{article_id}",
    params(("article_id" = i32, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article and its comments deleted"),
        (status = 400, description = "bad request", body = MsgResponse),
        (status = 404, description = "article not found", body = MsgResponse)
    )
)]
pub async fn delete_article_handler(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> ApiResult<StatusCode> {
    let article_id = parse_id(&article_id)?;
    state.news.remove_article(article_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    params(
        ("article_id" = i32, Path, description = "Article id"),
        CommentListingParams
    ),
    responses(
        (status = 200, description = "Paginated comments", body = ArticleCommentsResponse),
        (status = 400, description = "bad request / invalid limit / invalid page", body = MsgResponse),
        (status = 404, description = "article not found", body = MsgResponse)
    )
)]
pub async fn get_article_comments_handler(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    query: Result<Query<CommentListingParams>, QueryRejection>,
) -> ApiResult<Json<ArticleCommentsResponse>> {
    let article_id = parse_id(&article_id)?;
    let params = query_params(query)?;
    let pagination = Pagination::parse(params.limit.as_deref(), params.p.as_deref())?;
    let comments = state
        .news
        .list_article_comments(article_id, &pagination)
        .await?;
    Ok(Json(ArticleCommentsResponse { comments }))
}

#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = i32, Path, description = "Article id")),
    request_body = NewComment,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "bad request", body = MsgResponse),
        (status = 404, description = "article or username not found", body = MsgResponse)
    )
)]
pub async fn post_article_comment_handler(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    body: Result<Json<NewComment>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<CommentResponse>)> {
    let article_id = parse_id(&article_id)?;
    let new_comment = json_body(body)?;
    let comment = state.news.add_comment(article_id, &new_comment).await?;
    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

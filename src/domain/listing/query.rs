//! SQL composition for the ranked listings.
//!
//! Both listings share one shape: an inner set (filtered, and for articles aggregated per
//! article), a middle layer that attaches `ROW_NUMBER()` and `COUNT(*) OVER ()` across the
//! whole set, and an outer `LIMIT`/`OFFSET`. Pagination is applied last so `result` and
//! `total_results` describe the full filtered set rather than the returned page.
//!
//! Rows that compare equal on the sort column have no secondary key, so their relative
//! rank is whatever order Postgres produces.

use sqlx::{Postgres, QueryBuilder};

use super::request::{ListingRequest, Pagination};

const ARTICLE_COLUMNS: &str = "articles.author, articles.title, articles.article_id, \
     articles.topic, articles.body, articles.created_at, articles.votes, articles.article_img_url";

/// Builds the `GET /api/articles` query for an already validated request.
///
/// Binds, in order: the topic (only when filtering), the limit, the offset.
pub fn article_listing_query(req: &ListingRequest) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        "SELECT author, title, article_id, topic, body, created_at, votes, article_img_url, \
         comment_count::TEXT AS comment_count, result::TEXT AS result, \
         total_results::TEXT AS total_results FROM (SELECT listed.*, ROW_NUMBER() OVER (ORDER BY listed.",
    );
    // Column and direction come from closed enums; only values are bound.
    qb.push(req.sort_by.as_str())
        .push(" ")
        .push(req.order.as_sql())
        .push(") AS result, COUNT(*) OVER () AS total_results FROM (SELECT ")
        .push(ARTICLE_COLUMNS)
        .push(
            ", COUNT(comments.comment_id) AS comment_count FROM articles \
             LEFT JOIN comments ON comments.article_id = articles.article_id",
        );

    if let Some(topic) = &req.topic {
        qb.push(" WHERE articles.topic = ").push_bind(topic.clone());
    }

    qb.push(" GROUP BY articles.article_id) AS listed) AS ranked ORDER BY ranked.result");
    push_window(&mut qb, &req.pagination);
    qb
}

/// Builds the `GET /api/articles/{id}/comments` query: same ranking mechanics, fixed
/// `comment_id` ascending order, no topic filter.
pub fn article_comments_query(
    article_id: i32,
    pagination: &Pagination,
) -> QueryBuilder<'static, Postgres> {
    let mut qb = QueryBuilder::new(
        "SELECT comment_id, votes, created_at, author, body, article_id, \
         result::TEXT AS result, total_results::TEXT AS total_results \
         FROM (SELECT comments.*, ROW_NUMBER() OVER (ORDER BY comments.comment_id ASC) AS result, \
         COUNT(*) OVER () AS total_results FROM comments WHERE comments.article_id = ",
    );
    qb.push_bind(article_id)
        .push(") AS ranked ORDER BY ranked.result");
    push_window(&mut qb, pagination);
    qb
}

fn push_window(qb: &mut QueryBuilder<'static, Postgres>, pagination: &Pagination) {
    qb.push(" LIMIT ")
        .push_bind(pagination.limit())
        .push(" OFFSET ")
        .push_bind(pagination.offset());
}

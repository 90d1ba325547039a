//! The NC News model layer.
//!
//! Every SQL statement the API issues lives here. Storage failures are caught at this
//! boundary and re-signalled as [`ApiError`] kinds; anything unrecognised becomes
//! `ApiError::Internal`.

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::domain::error::{is_foreign_key_violation_on, ApiError, ApiResult};
use crate::domain::listing::{
    article_comments_query, article_listing_query, ListingRequest, Pagination,
};
use crate::domain::model::{
    Article, ArticleListingRow, ArticleWithCount, Comment, CommentListingRow, NewArticle,
    NewComment, Topic, User,
};
use crate::infra::config;
use crate::storage::schema::{
    self, ARTICLE_AUTHOR_FK, ARTICLE_TOPIC_FK, COMMENT_ARTICLE_FK, COMMENT_AUTHOR_FK,
};

/// Stateless apart from the pool; cheap to clone and share between handlers.
#[derive(Clone)]
pub struct NewsService {
    pool: PgPool,
}

impl NewsService {
    /// Connects using `DATABASE_URL` and makes sure the tables exist.
    pub async fn new() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        let database_url = config::database_url()?;

        let pool = PgPoolOptions::new()
            .max_connections(config::db_max_connections()?)
            .connect(&database_url)
            .await
            .context("connecting to Postgres")?;

        schema::create_tables(&pool).await?;
        tracing::info!("database schema ready");

        Ok(Self { pool })
    }

    /// Wraps an existing pool without touching the schema.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    // --- topics -----------------------------------------------------------------------

    pub async fn list_topics(&self) -> ApiResult<Vec<Topic>> {
        Ok(sqlx::query_as::<_, Topic>("SELECT * FROM topics")
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn topic_by_slug(&self, slug: &str) -> ApiResult<Topic> {
        sqlx::query_as::<_, Topic>("SELECT * FROM topics WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ApiError::TopicNotFound)
    }

    // --- users ------------------------------------------------------------------------

    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        Ok(sqlx::query_as::<_, User>("SELECT * FROM users")
            .fetch_all(&self.pool)
            .await?)
    }

    pub async fn user_by_username(&self, username: &str) -> ApiResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ApiError::UserNotFound)
    }

    // --- articles ---------------------------------------------------------------------

    pub async fn article_by_id(&self, article_id: i32) -> ApiResult<Article> {
        sqlx::query_as::<_, Article>("SELECT * FROM articles WHERE article_id = $1")
            .bind(article_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(ApiError::ArticleNotFound)
    }

    /// Runs the composed listing query and, when a topic filter is present, the topic
    /// existence check alongside it. A missing topic overrides the (empty) listing.
    pub async fn list_articles(&self, req: &ListingRequest) -> ApiResult<Vec<ArticleListingRow>> {
        let rows = self.fetch_article_listing(req);
        match req.topic.as_deref() {
            None => rows.await,
            Some(slug) => {
                let (rows, topic) = tokio::join!(rows, self.topic_by_slug(slug));
                topic?;
                rows
            }
        }
    }

    async fn fetch_article_listing(
        &self,
        req: &ListingRequest,
    ) -> ApiResult<Vec<ArticleListingRow>> {
        let mut qb = article_listing_query(req);
        let rows = qb
            .build_query_as::<ArticleListingRow>()
            .fetch_all(&self.pool)
            .await?;
        tracing::debug!(
            sort_by = %req.sort_by,
            order = req.order.as_sql(),
            limit = req.pagination.limit,
            page = req.pagination.page,
            rows = rows.len(),
            "article listing"
        );
        Ok(rows)
    }

    /// Inserts an article once its author and topic are known to exist.
    pub async fn add_article(&self, new_article: &NewArticle) -> ApiResult<ArticleWithCount> {
        let valid = new_article.validate()?;

        let (author, topic) = tokio::join!(
            self.user_by_username(valid.author),
            self.topic_by_slug(valid.topic)
        );
        author.map_err(|e| match e {
            ApiError::UserNotFound => ApiError::UsernameNotFound,
            other => other,
        })?;
        topic?;

        let article = sqlx::query_as::<_, Article>(
            "INSERT INTO articles (author, title, body, topic, article_img_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(valid.author)
        .bind(valid.title)
        .bind(valid.body)
        .bind(valid.topic)
        .bind(valid.article_img_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // Author/topic may vanish between the checks and the insert.
            if is_foreign_key_violation_on(&e, ARTICLE_TOPIC_FK) {
                ApiError::TopicNotFound
            } else if is_foreign_key_violation_on(&e, ARTICLE_AUTHOR_FK) {
                ApiError::UsernameNotFound
            } else {
                ApiError::from(e)
            }
        })?;

        tracing::info!(article_id = article.article_id, "article created");
        Ok(ArticleWithCount {
            article,
            comment_count: 0,
        })
    }

    /// Adds `inc_votes` atomically (`votes = votes + $1`).
    pub async fn alter_article_votes(&self, article_id: i32, inc_votes: i32) -> ApiResult<Article> {
        sqlx::query_as::<_, Article>(
            "UPDATE articles SET votes = votes + $1 WHERE article_id = $2 RETURNING *",
        )
        .bind(inc_votes)
        .bind(article_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ApiError::ArticleNotFound)
    }

    /// Deletes an article; its comments go with it (`ON DELETE CASCADE`).
    pub async fn remove_article(&self, article_id: i32) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE article_id = $1")
            .bind(article_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::ArticleNotFound);
        }
        tracing::info!(article_id, "article deleted");
        Ok(())
    }

    // --- comments ---------------------------------------------------------------------

    pub async fn list_comments(&self) -> ApiResult<Vec<Comment>> {
        Ok(
            sqlx::query_as::<_, Comment>("SELECT * FROM comments ORDER BY comment_id")
                .fetch_all(&self.pool)
                .await?,
        )
    }

    /// Paginated comments of one article, checked against the article's existence.
    pub async fn list_article_comments(
        &self,
        article_id: i32,
        pagination: &Pagination,
    ) -> ApiResult<Vec<CommentListingRow>> {
        let mut qb = article_comments_query(article_id, pagination);
        let (article, rows) = tokio::join!(
            self.article_by_id(article_id),
            qb.build_query_as::<CommentListingRow>()
                .fetch_all(&self.pool)
        );
        article?;
        Ok(rows?)
    }

    pub async fn add_comment(&self, article_id: i32, new_comment: &NewComment) -> ApiResult<Comment> {
        let (username, body) = new_comment.validate()?;

        let insert = sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (article_id, author, body) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(article_id)
        .bind(username)
        .bind(body)
        .fetch_one(&self.pool);

        let (article, inserted) = tokio::join!(self.article_by_id(article_id), insert);
        article?;
        let comment = inserted.map_err(|e| {
            if is_foreign_key_violation_on(&e, COMMENT_AUTHOR_FK) {
                ApiError::UsernameNotFound
            } else if is_foreign_key_violation_on(&e, COMMENT_ARTICLE_FK) {
                ApiError::ArticleNotFound
            } else {
                ApiError::from(e)
            }
        })?;

        tracing::info!(comment_id = comment.comment_id, article_id, "comment created");
        Ok(comment)
    }

    pub async fn alter_comment_votes(&self, comment_id: i32, inc_votes: i32) -> ApiResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "UPDATE comments SET votes = votes + $1 WHERE comment_id = $2 RETURNING *",
        )
        .bind(inc_votes)
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ApiError::CommentNotFound)
    }

    pub async fn remove_comment(&self, comment_id: i32) -> ApiResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(ApiError::CommentNotFound);
        }
        tracing::info!(comment_id, "comment deleted");
        Ok(())
    }
}

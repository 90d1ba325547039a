//! Rebuilds the database from a JSON data set.

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::schema::{create_tables, drop_tables};
use crate::domain::model::article::DEFAULT_ARTICLE_IMG_URL;
use crate::domain::model::{Topic, User};

#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub topics: Vec<Topic>,
    pub users: Vec<User>,
    pub articles: Vec<SeedArticle>,
    #[serde(default)]
    pub comments: Vec<SeedComment>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedArticle {
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub votes: i32,
    pub article_img_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedComment {
    pub body: String,
    /// 1-based position of the article in `SeedData::articles`.
    pub article_id: i32,
    pub author: String,
    #[serde(default)]
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

impl SeedData {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("seed data is not valid JSON")
    }
}

/// Drops and recreates every table, then inserts `data`.
pub async fn seed(pool: &PgPool, data: &SeedData) -> anyhow::Result<()> {
    drop_tables(pool).await?;
    create_tables(pool).await?;

    let mut tx = pool.begin().await?;

    if !data.topics.is_empty() {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO topics (slug, description) ");
        qb.push_values(&data.topics, |mut row, topic| {
            row.push_bind(&topic.slug).push_bind(&topic.description);
        });
        qb.build().execute(&mut *tx).await.context("seeding topics")?;
    }

    if !data.users.is_empty() {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO users (username, name, avatar_url) ");
        qb.push_values(&data.users, |mut row, user| {
            row.push_bind(&user.username)
                .push_bind(&user.name)
                .push_bind(&user.avatar_url);
        });
        qb.build().execute(&mut *tx).await.context("seeding users")?;
    }

    // Inserted one by one so SERIAL ids follow the data file order.
    for article in &data.articles {
        sqlx::query(
            "INSERT INTO articles (title, topic, author, body, created_at, votes, article_img_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&article.title)
        .bind(&article.topic)
        .bind(&article.author)
        .bind(&article.body)
        .bind(article.created_at)
        .bind(article.votes)
        .bind(
            article
                .article_img_url
                .as_deref()
                .unwrap_or(DEFAULT_ARTICLE_IMG_URL),
        )
        .execute(&mut *tx)
        .await
        .with_context(|| format!("seeding article '{}'", article.title))?;
    }

    if !data.comments.is_empty() {
        let mut qb: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO comments (body, article_id, author, votes, created_at) ");
        qb.push_values(&data.comments, |mut row, comment| {
            row.push_bind(&comment.body)
                .push_bind(comment.article_id)
                .push_bind(&comment.author)
                .push_bind(comment.votes)
                .push_bind(comment.created_at);
        });
        qb.build().execute(&mut *tx).await.context("seeding comments")?;
    }

    tx.commit().await?;
    tracing::info!(
        topics = data.topics.len(),
        users = data.users.len(),
        articles = data.articles.len(),
        comments = data.comments.len(),
        "database seeded"
    );
    Ok(())
}

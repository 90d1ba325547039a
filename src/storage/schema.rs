//! DDL for the four NC News tables.

use sqlx::PgPool;

pub const ARTICLE_AUTHOR_FK: &str = "articles_author_fkey";
pub const ARTICLE_TOPIC_FK: &str = "articles_topic_fkey";
pub const COMMENT_AUTHOR_FK: &str = "comments_author_fkey";
pub const COMMENT_ARTICLE_FK: &str = "comments_article_id_fkey";

const CREATE_TOPICS: &str = "CREATE TABLE IF NOT EXISTS topics (
    slug VARCHAR PRIMARY KEY,
    description VARCHAR NOT NULL
)";

const CREATE_USERS: &str = "CREATE TABLE IF NOT EXISTS users (
    username VARCHAR PRIMARY KEY,
    name VARCHAR NOT NULL,
    avatar_url VARCHAR NOT NULL
)";

const CREATE_ARTICLES: &str = "CREATE TABLE IF NOT EXISTS articles (
    article_id SERIAL PRIMARY KEY,
    title VARCHAR NOT NULL,
    topic VARCHAR NOT NULL,
    author VARCHAR NOT NULL,
    body VARCHAR NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    votes INTEGER NOT NULL DEFAULT 0,
    article_img_url VARCHAR NOT NULL
        DEFAULT 'https://images.pexels.com/photos/97050/pexels-photo-97050.jpeg?w=700&h=700',
    CONSTRAINT articles_topic_fkey FOREIGN KEY (topic) REFERENCES topics(slug),
    CONSTRAINT articles_author_fkey FOREIGN KEY (author) REFERENCES users(username)
)";

const CREATE_COMMENTS: &str = "CREATE TABLE IF NOT EXISTS comments (
    comment_id SERIAL PRIMARY KEY,
    body VARCHAR NOT NULL,
    article_id INTEGER NOT NULL,
    author VARCHAR NOT NULL,
    votes INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT comments_article_id_fkey FOREIGN KEY (article_id)
        REFERENCES articles(article_id) ON DELETE CASCADE,
    CONSTRAINT comments_author_fkey FOREIGN KEY (author) REFERENCES users(username)
)";

/// Creates any missing table. Safe to run on every startup.
pub async fn create_tables(pool: &PgPool) -> anyhow::Result<()> {
    for ddl in [CREATE_TOPICS, CREATE_USERS, CREATE_ARTICLES, CREATE_COMMENTS] {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Drops all tables, dependents first.
pub async fn drop_tables(pool: &PgPool) -> anyhow::Result<()> {
    for table in ["comments", "articles", "users", "topics"] {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(pool)
            .await?;
    }
    Ok(())
}

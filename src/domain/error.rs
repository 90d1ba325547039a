//! Error taxonomy shared by the model layer and the HTTP transport.

use thiserror::Error;

/// Postgres SQLSTATE codes that indicate a malformed client request rather than a server fault.
const NOT_NULL_VIOLATION: &str = "23502";
const INVALID_TEXT_REPRESENTATION: &str = "22P02";
const UNDEFINED_COLUMN: &str = "42703";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const NUMERIC_VALUE_OUT_OF_RANGE: &str = "22003";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid sort query")]
    InvalidSortColumn,
    #[error("invalid order query")]
    InvalidOrder,
    #[error("invalid limit request")]
    InvalidLimit,
    #[error("invalid page request")]
    InvalidPage,
    #[error("bad request")]
    BadRequest,
    #[error("topic not found")]
    TopicNotFound,
    #[error("article not found")]
    ArticleNotFound,
    #[error("comment not found")]
    CommentNotFound,
    #[error("user not found")]
    UserNotFound,
    #[error("username not found")]
    UsernameNotFound,
    #[error("Page not found")]
    RouteNotFound,
    #[error("Internal Server Error")]
    Internal(#[source] anyhow::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// True for the "referenced entity is missing" family (HTTP 404).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApiError::TopicNotFound
                | ApiError::ArticleNotFound
                | ApiError::CommentNotFound
                | ApiError::UserNotFound
                | ApiError::UsernameNotFound
                | ApiError::RouteNotFound
        )
    }

    /// True for client input errors (HTTP 400).
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            ApiError::InvalidSortColumn
                | ApiError::InvalidOrder
                | ApiError::InvalidLimit
                | ApiError::InvalidPage
                | ApiError::BadRequest
        )
    }
}

/// Returns the SQLSTATE and constraint name of a database-side failure, if any.
pub fn db_error_parts(err: &sqlx::Error) -> Option<(String, Option<String>)> {
    match err {
        sqlx::Error::Database(db) => Some((
            db.code().map(|c| c.into_owned()).unwrap_or_default(),
            db.constraint().map(str::to_string),
        )),
        _ => None,
    }
}

/// True when `err` is a foreign-key violation on a constraint whose name contains `fragment`.
pub fn is_foreign_key_violation_on(err: &sqlx::Error, fragment: &str) -> bool {
    match db_error_parts(err) {
        Some((code, Some(constraint))) => {
            code == FOREIGN_KEY_VIOLATION && constraint.contains(fragment)
        }
        _ => false,
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let Some((code, _)) = db_error_parts(&err) {
            if matches!(
                code.as_str(),
                NOT_NULL_VIOLATION
                    | INVALID_TEXT_REPRESENTATION
                    | UNDEFINED_COLUMN
                    | FOREIGN_KEY_VIOLATION
                    | NUMERIC_VALUE_OUT_OF_RANGE
            ) {
                return ApiError::BadRequest;
            }
        }
        ApiError::Internal(err.into())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

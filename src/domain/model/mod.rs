//! Entities stored in Postgres and the row shapes read back from it.

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

pub use article::{Article, ArticleListingRow, ArticleWithCount, NewArticle};
pub use comment::{Comment, CommentListingRow, NewComment};
pub use topic::Topic;
pub use user::User;

/// Returns the trimmed value when the field is present and non-blank.
pub(crate) fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

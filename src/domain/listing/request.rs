use std::fmt;
use std::str::FromStr;

use crate::domain::error::{ApiError, ApiResult};

pub const DEFAULT_LIMIT: u32 = 10;
pub const DEFAULT_PAGE: u32 = 1;

/// Columns an article listing may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    Author,
    Title,
    ArticleId,
    Topic,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortColumn {
    pub const ALL: [SortColumn; 7] = [
        SortColumn::Author,
        SortColumn::Title,
        SortColumn::ArticleId,
        SortColumn::Topic,
        SortColumn::CreatedAt,
        SortColumn::Votes,
        SortColumn::CommentCount,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortColumn::Author => "author",
            SortColumn::Title => "title",
            SortColumn::ArticleId => "article_id",
            SortColumn::Topic => "topic",
            SortColumn::CreatedAt => "created_at",
            SortColumn::Votes => "votes",
            SortColumn::CommentCount => "comment_count",
        }
    }
}

impl FromStr for SortColumn {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SortColumn::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or(ApiError::InvalidSortColumn)
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ApiError::InvalidOrder),
        }
    }
}

/// A validated `limit`/`page` window. Both are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub limit: u32,
    pub page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            page: DEFAULT_PAGE,
        }
    }
}

impl Pagination {
    /// Parses `limit` then `page`; the first failure wins.
    pub fn parse(limit: Option<&str>, page: Option<&str>) -> ApiResult<Self> {
        let limit = parse_positive(limit, DEFAULT_LIMIT).ok_or(ApiError::InvalidLimit)?;
        let page = parse_positive(page, DEFAULT_PAGE).ok_or(ApiError::InvalidPage)?;
        Ok(Self { limit, page })
    }

    /// Number of rows skipped before this page: `(page - 1) * limit`.
    /// Clamped to `i64::MAX`, which Postgres accepts and which simply yields no rows.
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1))
            .checked_mul(i64::from(self.limit))
            .unwrap_or(i64::MAX)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.limit)
    }
}

/// Absent or blank input takes the default; anything else must be a positive integer.
fn parse_positive(raw: Option<&str>, default: u32) -> Option<u32> {
    match present(raw) {
        None => Some(default),
        Some(v) => v.parse::<u32>().ok().filter(|n| *n >= 1),
    }
}

fn present(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

/// The validated parameters of an article listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingRequest {
    pub topic: Option<String>,
    pub sort_by: SortColumn,
    pub order: SortOrder,
    pub pagination: Pagination,
}

impl ListingRequest {
    /// Validates raw query parameters in the order `sort_by`, `order`, `limit`, `page`, so the
    /// first violated rule decides the reported error.
    pub fn parse(
        topic: Option<&str>,
        sort_by: Option<&str>,
        order: Option<&str>,
        limit: Option<&str>,
        page: Option<&str>,
    ) -> ApiResult<Self> {
        let sort_by = present(sort_by)
            .map(str::parse::<SortColumn>)
            .transpose()?
            .unwrap_or_default();
        let order = present(order)
            .map(str::parse::<SortOrder>)
            .transpose()?
            .unwrap_or_default();
        let pagination = Pagination::parse(limit, page)?;
        Ok(Self {
            topic: present(topic).map(str::to_string),
            sort_by,
            order,
            pagination,
        })
    }
}

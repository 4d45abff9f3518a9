use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Query, QueryHandler};
use crate::modules::shorts::domain::Short;
use crate::modules::shorts::ports::{PaginatedResult, Pagination, ShortRepository};

/// 列出短视频查询
#[derive(Debug, Clone)]
pub struct ListShortsQuery {
    pub page: u32,
    pub limit: u32,
}

impl ListShortsQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }
}

impl Default for ListShortsQuery {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

impl Query for ListShortsQuery {
    type Output = ListShortsResponse;
}

/// 列出短视频响应
#[derive(Debug, Clone)]
pub struct ListShortsResponse {
    pub shorts: Vec<Short>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
    pub has_more: bool,
}

impl From<PaginatedResult<Short>> for ListShortsResponse {
    fn from(result: PaginatedResult<Short>) -> Self {
        let has_more = result.has_next();
        Self {
            shorts: result.items,
            total: result.total,
            page: result.page,
            limit: result.limit,
            has_more,
        }
    }
}

/// 列出短视频查询处理器
pub struct ListShortsHandler {
    short_repository: Arc<dyn ShortRepository>,
}

impl ListShortsHandler {
    pub fn new(short_repository: Arc<dyn ShortRepository>) -> Self {
        Self { short_repository }
    }
}

#[async_trait]
impl QueryHandler<ListShortsQuery> for ListShortsHandler {
    type Error = ApplicationError;

    async fn handle(&self, query: ListShortsQuery) -> Result<ListShortsResponse, ApplicationError> {
        let pagination = Pagination::new(query.page, query.limit);
        let result = self.short_repository.find_all(pagination).await?;

        Ok(result.into())
    }
}

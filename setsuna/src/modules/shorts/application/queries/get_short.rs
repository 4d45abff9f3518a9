use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ApplicationError, Query, QueryHandler};
use crate::modules::shorts::domain::{Short, ShortId};
use crate::modules::shorts::ports::ShortRepository;

/// 获取短视频查询
#[derive(Debug, Clone)]
pub struct GetShortQuery {
    pub short_id: ShortId,
}

impl GetShortQuery {
    pub fn new(short_id: ShortId) -> Self {
        Self { short_id }
    }
}

impl Query for GetShortQuery {
    type Output = GetShortResponse;
}

/// 获取短视频响应
#[derive(Debug, Clone)]
pub struct GetShortResponse {
    pub short: Short,
}

/// 获取短视频查询处理器
pub struct GetShortHandler {
    short_repository: Arc<dyn ShortRepository>,
}

impl GetShortHandler {
    pub fn new(short_repository: Arc<dyn ShortRepository>) -> Self {
        Self { short_repository }
    }
}

#[async_trait]
impl QueryHandler<GetShortQuery> for GetShortHandler {
    type Error = ApplicationError;

    async fn handle(&self, query: GetShortQuery) -> Result<GetShortResponse, ApplicationError> {
        let short = self
            .short_repository
            .get(query.short_id)
            .await?
            .ok_or_else(|| ApplicationError::ShortNotFound(query.short_id.to_string()))?;

        Ok(GetShortResponse { short })
    }
}

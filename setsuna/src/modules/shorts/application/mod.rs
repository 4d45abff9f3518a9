// Shorts Application Layer - 应用层
// 实现 CQRS 模式的命令和查询处理器

pub mod commands;
pub mod queries;

// 导出命令和查询
pub use commands::*;
pub use queries::*;

// 处理器契约来自中介者核心
pub use crate::mediator::{Command, CommandHandler, Query, QueryHandler};

use thiserror::Error;

use super::ports::RepositoryError;
use crate::mediator::DispatchError;

/// 应用层错误类型
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Short not found: {0}")]
    ShortNotFound(String),

    #[error("Tag not found: {0}")]
    TagNotFound(String),

    #[error("Report not found: {0}")]
    ReportNotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DispatchError<ApplicationError>> for ApplicationError {
    fn from(err: DispatchError<ApplicationError>) -> Self {
        match err {
            // 未注册处理器属于组合期缺陷，这里只在边界转换一次
            DispatchError::UnregisteredMessage(message_type) => {
                ApplicationError::Internal(format!("No handler registered for {}", message_type))
            }
            // 处理器自身的失败原样透传
            DispatchError::Handler(err) => err,
        }
    }
}

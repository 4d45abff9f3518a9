use async_trait::async_trait;

use super::message::{Command, Query};

/// 查询处理器 trait
///
/// 每个处理器绑定到唯一一种查询类型。处理器持有全部领域逻辑，
/// 中介者只负责路由调用并原样传递结果。
#[async_trait]
pub trait QueryHandler<Q: Query>: Send + Sync {
    /// 处理器失败类型
    type Error: Send + 'static;

    /// 执行查询
    async fn handle(&self, query: Q) -> Result<Q::Output, Self::Error>;
}

/// 命令处理器 trait
///
/// 每个处理器绑定到唯一一种命令类型，副作用全部发生在处理器内部。
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    /// 处理器失败类型
    type Error: Send + 'static;

    /// 执行命令
    async fn handle(&self, command: C) -> Result<C::Output, Self::Error>;
}

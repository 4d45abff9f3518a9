// Mediator - 命令/查询中介者
//
// 调度核心：类型化消息按其具体类型路由到唯一注册的处理器。
// - message: 消息契约（Query / Command 标记 trait）
// - handler: 处理器契约
// - registry: 消息类型到处理器的映射，组合期一次性构建
// - query_bus / command_bus: 读写两条独立的调度路径

pub mod command_bus;
pub mod handler;
pub mod message;
pub mod query_bus;
pub mod registry;

pub use command_bus::CommandBus;
pub use handler::{CommandHandler, QueryHandler};
pub use message::{Command, Query};
pub use query_bus::QueryBus;
pub use registry::{HandlerRegistry, RegistryError};

use thiserror::Error;

/// 调度错误类型
///
/// 处理器自身的失败以透明方式原样向上传递，中介者不重新分类。
#[derive(Debug, Error)]
pub enum DispatchError<E>
where
    E: std::error::Error + 'static,
{
    /// 消息类型没有注册处理器（组合期缺陷，调度时硬失败）
    #[error("No handler registered for message type: {0}")]
    UnregisteredMessage(&'static str),

    /// 处理器返回的原始失败
    #[error(transparent)]
    Handler(E),
}

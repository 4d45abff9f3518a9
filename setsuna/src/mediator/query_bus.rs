use std::any::{self, TypeId};
use std::marker::PhantomData;
use std::sync::Arc;

use super::handler::QueryHandler;
use super::message::Query;
use super::registry::{HandlerRegistry, RegistryError};
use super::DispatchError;

/// 查询总线
///
/// 只读调度路径。注册发生在组合期，之后总线不再持有可变状态，
/// 并发调度无需加锁。与命令总线结构相同但类型独立，读写区分
/// 由类型系统保证而非约定。
pub struct QueryBus<E> {
    registry: HandlerRegistry,
    _error: PhantomData<fn() -> E>,
}

impl<E> QueryBus<E>
where
    E: std::error::Error + Send + 'static,
{
    pub fn new() -> Self {
        Self {
            registry: HandlerRegistry::new(),
            _error: PhantomData,
        }
    }

    /// 注册查询处理器
    ///
    /// 每种查询类型只允许一个处理器，重复注册返回 `DuplicateHandler`。
    pub fn register<Q, H>(&mut self, handler: H) -> Result<(), RegistryError>
    where
        Q: Query,
        H: QueryHandler<Q, Error = E> + 'static,
    {
        let handler: Arc<dyn QueryHandler<Q, Error = E>> = Arc::new(handler);
        self.registry.bind(
            TypeId::of::<Q>(),
            any::type_name::<Q>(),
            Box::new(handler),
        )
    }

    /// 执行查询
    ///
    /// 按消息的具体类型解析处理器并调用，结果原样返回。
    /// 未注册的类型是硬失败，不做任何部分工作。
    pub async fn execute<Q: Query>(&self, query: Q) -> Result<Q::Output, DispatchError<E>> {
        let handler = self
            .registry
            .resolve::<Arc<dyn QueryHandler<Q, Error = E>>>(&TypeId::of::<Q>())
            .ok_or_else(|| DispatchError::UnregisteredMessage(any::type_name::<Q>()))?;

        handler.handle(query).await.map_err(DispatchError::Handler)
    }

    /// 已注册的查询类型数量
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl<E> Default for QueryBus<E>
where
    E: std::error::Error + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

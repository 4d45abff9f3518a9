use std::any::{self, TypeId};
use std::marker::PhantomData;
use std::sync::Arc;

use super::handler::CommandHandler;
use super::message::Command;
use super::registry::{HandlerRegistry, RegistryError};
use super::DispatchError;

/// 命令总线
///
/// 变更调度路径。调度算法与查询总线一致，但作为独立类型存在，
/// 下游策略（缓存、审计、复制）依赖这条读写边界。
pub struct CommandBus<E> {
    registry: HandlerRegistry,
    _error: PhantomData<fn() -> E>,
}

impl<E> CommandBus<E>
where
    E: std::error::Error + Send + 'static,
{
    pub fn new() -> Self {
        Self {
            registry: HandlerRegistry::new(),
            _error: PhantomData,
        }
    }

    /// 注册命令处理器
    ///
    /// 每种命令类型只允许一个处理器，重复注册返回 `DuplicateHandler`。
    pub fn register<C, H>(&mut self, handler: H) -> Result<(), RegistryError>
    where
        C: Command,
        H: CommandHandler<C, Error = E> + 'static,
    {
        let handler: Arc<dyn CommandHandler<C, Error = E>> = Arc::new(handler);
        self.registry.bind(
            TypeId::of::<C>(),
            any::type_name::<C>(),
            Box::new(handler),
        )
    }

    /// 执行命令
    ///
    /// 按消息的具体类型解析处理器并调用，结果和失败都原样传递。
    pub async fn execute<C: Command>(&self, command: C) -> Result<C::Output, DispatchError<E>> {
        let handler = self
            .registry
            .resolve::<Arc<dyn CommandHandler<C, Error = E>>>(&TypeId::of::<C>())
            .ok_or_else(|| DispatchError::UnregisteredMessage(any::type_name::<C>()))?;

        handler
            .handle(command)
            .await
            .map_err(DispatchError::Handler)
    }

    /// 已注册的命令类型数量
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl<E> Default for CommandBus<E>
where
    E: std::error::Error + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use thiserror::Error;

    #[derive(Debug, Error)]
    enum ProbeError {
        #[error("probe failed")]
        Failed,
    }

    struct IncrementCommand {
        amount: usize,
    }

    impl Command for IncrementCommand {
        type Output = usize;
    }

    struct IncrementHandler {
        counter: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CommandHandler<IncrementCommand> for IncrementHandler {
        type Error = ProbeError;

        async fn handle(&self, command: IncrementCommand) -> Result<usize, ProbeError> {
            Ok(self.counter.fetch_add(command.amount, Ordering::SeqCst) + command.amount)
        }
    }

    struct ResetCommand;

    impl Command for ResetCommand {
        type Output = ();
    }

    struct ResetHandler {
        counter: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CommandHandler<ResetCommand> for ResetHandler {
        type Error = ProbeError;

        async fn handle(&self, _command: ResetCommand) -> Result<(), ProbeError> {
            self.counter.store(0, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_each_command_routes_to_its_own_handler() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut bus = CommandBus::new();
        bus.register::<IncrementCommand, _>(IncrementHandler {
            counter: counter.clone(),
        })
        .unwrap();
        bus.register::<ResetCommand, _>(ResetHandler {
            counter: counter.clone(),
        })
        .unwrap();
        assert_eq!(bus.len(), 2);

        // 各自路由到绑定的处理器，没有扇出
        let value = bus.execute(IncrementCommand { amount: 3 }).await.unwrap();
        assert_eq!(value, 3);

        bus.execute(ResetCommand).await.unwrap();
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unregistered_command_performs_no_work() {
        let counter = Arc::new(AtomicUsize::new(0));
        let bus: CommandBus<ProbeError> = CommandBus::new();

        let result = bus.execute(IncrementCommand { amount: 3 }).await;

        assert!(matches!(
            result,
            Err(DispatchError::UnregisteredMessage(_))
        ));
        assert_eq!(counter.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_concurrent_dispatch() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut bus = CommandBus::new();
        bus.register::<IncrementCommand, _>(IncrementHandler {
            counter: counter.clone(),
        })
        .unwrap();

        let bus = Arc::new(bus);
        let mut handles = Vec::new();
        for _ in 0..8 {
            let bus = bus.clone();
            handles.push(tokio::spawn(async move {
                bus.execute(IncrementCommand { amount: 1 }).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(counter.load(Ordering::SeqCst), 8);
    }
}

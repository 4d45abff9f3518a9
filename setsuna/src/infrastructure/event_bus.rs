use tokio::sync::broadcast;

use crate::modules::shorts::domain::ShortsDomainEvent;

/// 领域事件总线
///
/// 基于 broadcast 通道的进程内发布订阅。命令成功后由门面发布事件，
/// 没有订阅者时发送失败被忽略。
pub struct DomainEventBus {
    sender: broadcast::Sender<ShortsDomainEvent>,
}

impl DomainEventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    /// 发布领域事件
    pub fn publish(&self, event: ShortsDomainEvent) {
        tracing::debug!("[DomainEventBus] Publishing event: {}", event.event_type());
        let _ = self.sender.send(event);
    }

    /// 订阅领域事件
    pub fn subscribe(&self) -> broadcast::Receiver<ShortsDomainEvent> {
        self.sender.subscribe()
    }
}

impl Default for DomainEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::shorts::domain::{ReportFiledEvent, ShortId, UserId};

    #[tokio::test]
    async fn test_publish_and_subscribe() {
        let bus = DomainEventBus::new();
        let mut receiver = bus.subscribe();

        bus.publish(ShortsDomainEvent::ReportFiled(ReportFiledEvent {
            short_id: ShortId::new(),
            reporter_id: UserId::new(),
            timestamp: chrono::Utc::now(),
        }));

        let event = receiver.recv().await.unwrap();
        assert_eq!(event.event_type(), "report.filed");
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_is_ignored() {
        let bus = DomainEventBus::new();

        // 没有订阅者也不报错
        bus.publish(ShortsDomainEvent::ReportFiled(ReportFiledEvent {
            short_id: ShortId::new(),
            reporter_id: UserId::new(),
            timestamp: chrono::Utc::now(),
        }));
    }
}

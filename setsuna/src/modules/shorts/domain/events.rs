use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::value_objects::{ShortId, UserId};

/// 领域事件基础 trait
pub trait DomainEvent: Clone + Send + Sync {
    fn event_type(&self) -> &'static str;
    fn timestamp(&self) -> DateTime<Utc>;
}

/// 短视频创建事件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortCreatedEvent {
    pub short_id: ShortId,
    pub user_id: UserId,
    pub title: String,
    pub timestamp: DateTime<Utc>,
}

impl DomainEvent for ShortCreatedEvent {
    fn event_type(&self) -> &'static str {
        "short.created"
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// 短视频删除事件
///
/// 删除级联清理标签关联与举报记录，数量随事件一并发布。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortDeletedEvent {
    pub short_id: ShortId,
    pub detached_tags: usize,
    pub deleted_reports: usize,
    pub timestamp: DateTime<Utc>,
}

impl DomainEvent for ShortDeletedEvent {
    fn event_type(&self) -> &'static str {
        "short.deleted"
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// 举报提交事件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFiledEvent {
    pub short_id: ShortId,
    pub reporter_id: UserId,
    pub timestamp: DateTime<Utc>,
}

impl DomainEvent for ReportFiledEvent {
    fn event_type(&self) -> &'static str {
        "report.filed"
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// 举报撤销事件
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDismissedEvent {
    pub short_id: ShortId,
    pub reporter_id: UserId,
    pub timestamp: DateTime<Utc>,
}

impl DomainEvent for ReportDismissedEvent {
    fn event_type(&self) -> &'static str {
        "report.dismissed"
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Shorts 领域事件枚举
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ShortsDomainEvent {
    ShortCreated(ShortCreatedEvent),
    ShortDeleted(ShortDeletedEvent),
    ReportFiled(ReportFiledEvent),
    ReportDismissed(ReportDismissedEvent),
}

impl ShortsDomainEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            ShortsDomainEvent::ShortCreated(e) => e.event_type(),
            ShortsDomainEvent::ShortDeleted(e) => e.event_type(),
            ShortsDomainEvent::ReportFiled(e) => e.event_type(),
            ShortsDomainEvent::ReportDismissed(e) => e.event_type(),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::super::value_objects::{ShortId, UserId};

/// 举报实体
///
/// 用户对短视频提交的内容投诉。以 (short_id, reporter_id) 复合键
/// 唯一标识：同一用户对同一短视频至多存在一条举报。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// 被举报的短视频
    short_id: ShortId,
    /// 举报人
    reporter_id: UserId,
    /// 举报理由（可选）
    reason: Option<String>,
    /// 创建时间
    created_at: DateTime<Utc>,
}

impl Report {
    /// 创建新举报
    pub fn new(short_id: ShortId, reporter_id: UserId, reason: Option<String>) -> Self {
        Self {
            short_id,
            reporter_id,
            reason,
            created_at: Utc::now(),
        }
    }

    // Getters
    pub fn short_id(&self) -> ShortId {
        self.short_id
    }

    pub fn reporter_id(&self) -> UserId {
        self.reporter_id
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 复合键 (short_id, reporter_id)
    pub fn key(&self) -> (ShortId, UserId) {
        (self.short_id, self.reporter_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_key() {
        let short_id = ShortId::new();
        let reporter_id = UserId::new();
        let report = Report::new(short_id, reporter_id, Some("spam".to_string()));

        assert_eq!(report.key(), (short_id, reporter_id));
        assert_eq!(report.reason(), Some("spam"));
    }
}

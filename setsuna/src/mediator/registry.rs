use std::any::{Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use thiserror::Error;

/// 注册表错误类型
#[derive(Debug, Error)]
pub enum RegistryError {
    /// 同一消息类型重复注册处理器（组合期配置错误）
    #[error("Handler already registered for message type: {0}")]
    DuplicateHandler(&'static str),
}

struct RegistryEntry {
    message_type: &'static str,
    handler: Box<dyn Any + Send + Sync>,
}

/// 处理器注册表
///
/// 以消息的 TypeId 为键的哈希映射，组合期一次性填充，之后只读。
/// resolve 位于每次调度的路径上，必须是 O(1) 查找。
pub struct HandlerRegistry {
    entries: HashMap<TypeId, RegistryEntry>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// 绑定消息类型到处理器
    ///
    /// 同一类型重复绑定返回 `DuplicateHandler`，首次绑定保持不变。
    pub fn bind(
        &mut self,
        key: TypeId,
        message_type: &'static str,
        handler: Box<dyn Any + Send + Sync>,
    ) -> Result<(), RegistryError> {
        match self.entries.entry(key) {
            Entry::Occupied(_) => Err(RegistryError::DuplicateHandler(message_type)),
            Entry::Vacant(slot) => {
                slot.insert(RegistryEntry {
                    message_type,
                    handler,
                });
                Ok(())
            }
        }
    }

    /// 解析消息类型对应的处理器
    ///
    /// 键与存储类型由绑定方保证一致，类型不匹配视同未注册。
    pub fn resolve<H: 'static>(&self, key: &TypeId) -> Option<&H> {
        self.entries
            .get(key)
            .and_then(|entry| entry.handler.downcast_ref::<H>())
    }

    /// 消息类型是否已绑定
    pub fn contains(&self, key: &TypeId) -> bool {
        self.entries.contains_key(key)
    }

    /// 已绑定的消息类型数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 列出已绑定的消息类型名（用于组合期日志）
    pub fn message_types(&self) -> Vec<&'static str> {
        self.entries.values().map(|e| e.message_type).collect()
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

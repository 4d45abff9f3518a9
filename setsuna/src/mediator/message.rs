/// 查询消息标记 trait
///
/// 查询表达只读意图，不得改变领域状态。消息一经构造即不可变，
/// 其身份就是它的具体类型：每种消息类型对应且仅对应一个处理器。
pub trait Query: Send + 'static {
    /// 查询成功时返回的结果类型
    type Output: Send + 'static;
}

/// 命令消息标记 trait
///
/// 命令表达变更意图，通常返回被变更的实体或操作状态。
/// 读写两类消息走各自独立的总线，读写区分由类型系统保证。
pub trait Command: Send + 'static {
    /// 命令成功时返回的结果类型
    type Output: Send + 'static;
}

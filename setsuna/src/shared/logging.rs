use tracing_subscriber::EnvFilter;

/// 初始化日志订阅器
///
/// 由组合根在进程启动时调用一次。日志级别可通过 RUST_LOG 覆盖，
/// 默认为 info。
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    tracing::info!("Setsuna logging initialized");
}

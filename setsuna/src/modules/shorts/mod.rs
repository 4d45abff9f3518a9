// Shorts Module - 短视频模块
//
// 实现六边形架构（Hexagonal Architecture）：
// - domain: 领域层，包含实体、值对象和领域事件
// - ports: 端口层，定义与外部世界的抽象接口
// - infrastructure: 基础设施层，实现端口的具体适配器
// - application: 应用层，实现 CQRS 命令和查询处理器
//
// 所有操作经由中介者调度：门面方法构造消息，查询走查询总线，
// 命令走命令总线，每种消息类型在组合期绑定唯一处理器。

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型
pub use application::{
    ApplicationError,
    // Commands
    ClearShortTagsCommand,
    ClearShortTagsHandler,
    ClearShortTagsResponse,
    CreateReportCommand,
    CreateReportHandler,
    CreateReportResponse,
    CreateShortCommand,
    CreateShortHandler,
    CreateShortResponse,
    CreateTagCommand,
    CreateTagHandler,
    CreateTagResponse,
    DeleteReportCommand,
    DeleteReportHandler,
    DeleteReportResponse,
    DeleteShortCommand,
    DeleteShortHandler,
    DeleteShortResponse,
    DeleteTagCommand,
    DeleteTagHandler,
    DeleteTagResponse,
    // Queries
    GetReportHandler,
    GetReportQuery,
    GetReportResponse,
    GetShortHandler,
    GetShortQuery,
    GetShortResponse,
    ListReportsByShortHandler,
    ListReportsByShortQuery,
    ListReportsByShortResponse,
    ListReportsByUserHandler,
    ListReportsByUserQuery,
    ListReportsByUserResponse,
    ListReportsHandler,
    ListReportsQuery,
    ListReportsResponse,
    ListShortsByTagHandler,
    ListShortsByTagQuery,
    ListShortsByTagResponse,
    ListShortsByUserHandler,
    ListShortsByUserQuery,
    ListShortsByUserResponse,
    ListShortsHandler,
    ListShortsQuery,
    ListShortsResponse,
    ListTagsByShortHandler,
    ListTagsByShortQuery,
    ListTagsByShortResponse,
    ListTagsHandler,
    ListTagsQuery,
    ListTagsResponse,
    RemoveTagFromShortCommand,
    RemoveTagFromShortHandler,
    RemoveTagFromShortResponse,
    RenameTagCommand,
    RenameTagHandler,
    RenameTagOnShortCommand,
    RenameTagOnShortHandler,
    RenameTagOnShortResponse,
    RenameTagResponse,
    UpdateShortCommand,
    UpdateShortHandler,
    UpdateShortResponse,
};

pub use domain::{Report, Short, ShortId, ShortsDomainEvent, Tag, TagId, UserId};

pub use infrastructure::{
    FileReportRepository, FileShortRepository, FileTagRepository, InMemoryReportRepository,
    InMemoryShortRepository, InMemoryTagRepository,
};

pub use ports::{
    PaginatedResult, Pagination, ReportRepository, RepositoryError, ShortRepository,
    TagRepository,
};

use std::sync::Arc;
use thiserror::Error;

use crate::infrastructure::DomainEventBus;
use crate::mediator::{CommandBus, QueryBus, RegistryError};
use domain::{
    ReportDismissedEvent, ReportFiledEvent, ShortCreatedEvent, ShortDeletedEvent,
};

/// 模块组装错误
#[derive(Debug, Error)]
pub enum ModuleInitError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Shorts 模块容器
///
/// 管理模块内的依赖注入：构造仓储，组装全部处理器并注册到
/// 查询/命令总线。注册只发生在组合期，之后总线只读。
pub struct ShortsModule {
    // Repositories
    short_repository: Arc<dyn ShortRepository>,
    tag_repository: Arc<dyn TagRepository>,
    report_repository: Arc<dyn ReportRepository>,
    // Dispatch
    query_bus: QueryBus<ApplicationError>,
    command_bus: CommandBus<ApplicationError>,
    // Events
    event_bus: Arc<DomainEventBus>,
}

impl ShortsModule {
    /// 创建新的 ShortsModule 实例（内存存储，用于开发测试）
    pub fn new() -> Result<Self, ModuleInitError> {
        let short_repository: Arc<dyn ShortRepository> = Arc::new(InMemoryShortRepository::new());
        let tag_repository: Arc<dyn TagRepository> = Arc::new(InMemoryTagRepository::new());
        let report_repository: Arc<dyn ReportRepository> =
            Arc::new(InMemoryReportRepository::new());

        Self::with_repositories(short_repository, tag_repository, report_repository)
    }

    /// 创建带持久化存储的 ShortsModule 实例（生产环境推荐）
    ///
    /// # Arguments
    /// * `data_dir` - 应用数据目录路径
    ///
    /// # Errors
    /// 如果无法初始化文件存储，返回错误
    pub async fn new_with_persistence(
        data_dir: std::path::PathBuf,
    ) -> Result<Self, ModuleInitError> {
        let short_repository: Arc<dyn ShortRepository> =
            Arc::new(FileShortRepository::new(data_dir.clone()).await?);
        let tag_repository: Arc<dyn TagRepository> =
            Arc::new(FileTagRepository::new(data_dir.clone()).await?);
        let report_repository: Arc<dyn ReportRepository> =
            Arc::new(FileReportRepository::new(data_dir).await?);

        Self::with_repositories(short_repository, tag_repository, report_repository)
    }

    /// 使用自定义仓储创建 ShortsModule
    ///
    /// 每种消息类型绑定唯一处理器；重复绑定是组合期错误。
    pub fn with_repositories(
        short_repository: Arc<dyn ShortRepository>,
        tag_repository: Arc<dyn TagRepository>,
        report_repository: Arc<dyn ReportRepository>,
    ) -> Result<Self, ModuleInitError> {
        let mut query_bus = QueryBus::new();

        query_bus.register::<ListShortsQuery, _>(ListShortsHandler::new(
            short_repository.clone(),
        ))?;
        query_bus.register::<GetShortQuery, _>(GetShortHandler::new(short_repository.clone()))?;
        query_bus.register::<ListShortsByUserQuery, _>(ListShortsByUserHandler::new(
            short_repository.clone(),
        ))?;
        query_bus.register::<ListShortsByTagQuery, _>(ListShortsByTagHandler::new(
            short_repository.clone(),
            tag_repository.clone(),
        ))?;
        query_bus.register::<ListTagsQuery, _>(ListTagsHandler::new(tag_repository.clone()))?;
        query_bus.register::<ListTagsByShortQuery, _>(ListTagsByShortHandler::new(
            tag_repository.clone(),
        ))?;
        query_bus.register::<ListReportsQuery, _>(ListReportsHandler::new(
            report_repository.clone(),
        ))?;
        query_bus.register::<ListReportsByUserQuery, _>(ListReportsByUserHandler::new(
            report_repository.clone(),
        ))?;
        query_bus.register::<ListReportsByShortQuery, _>(ListReportsByShortHandler::new(
            report_repository.clone(),
        ))?;
        query_bus.register::<GetReportQuery, _>(GetReportHandler::new(
            report_repository.clone(),
        ))?;

        let mut command_bus = CommandBus::new();

        command_bus.register::<CreateShortCommand, _>(CreateShortHandler::new(
            short_repository.clone(),
        ))?;
        command_bus.register::<UpdateShortCommand, _>(UpdateShortHandler::new(
            short_repository.clone(),
        ))?;
        command_bus.register::<DeleteShortCommand, _>(DeleteShortHandler::new(
            short_repository.clone(),
            tag_repository.clone(),
            report_repository.clone(),
        ))?;
        command_bus.register::<CreateTagCommand, _>(CreateTagHandler::new(
            short_repository.clone(),
            tag_repository.clone(),
        ))?;
        command_bus.register::<RenameTagCommand, _>(RenameTagHandler::new(
            tag_repository.clone(),
        ))?;
        command_bus.register::<RenameTagOnShortCommand, _>(RenameTagOnShortHandler::new(
            tag_repository.clone(),
        ))?;
        command_bus.register::<DeleteTagCommand, _>(DeleteTagHandler::new(
            tag_repository.clone(),
        ))?;
        command_bus.register::<ClearShortTagsCommand, _>(ClearShortTagsHandler::new(
            short_repository.clone(),
            tag_repository.clone(),
        ))?;
        command_bus.register::<RemoveTagFromShortCommand, _>(RemoveTagFromShortHandler::new(
            tag_repository.clone(),
        ))?;
        command_bus.register::<CreateReportCommand, _>(CreateReportHandler::new(
            short_repository.clone(),
            report_repository.clone(),
        ))?;
        command_bus.register::<DeleteReportCommand, _>(DeleteReportHandler::new(
            report_repository.clone(),
        ))?;

        tracing::info!(
            "Shorts module composed: {} queries, {} commands registered",
            query_bus.len(),
            command_bus.len()
        );

        Ok(Self {
            short_repository,
            tag_repository,
            report_repository,
            query_bus,
            command_bus,
            event_bus: Arc::new(DomainEventBus::new()),
        })
    }

    // Command handlers

    /// 创建短视频
    pub async fn create_short(
        &self,
        command: CreateShortCommand,
    ) -> Result<CreateShortResponse, ApplicationError> {
        let response = self.command_bus.execute(command).await?;

        self.event_bus
            .publish(ShortsDomainEvent::ShortCreated(ShortCreatedEvent {
                short_id: response.short.id(),
                user_id: response.short.user_id(),
                title: response.short.title().to_string(),
                timestamp: response.short.created_at(),
            }));

        Ok(response)
    }

    /// 更新短视频
    pub async fn update_short(
        &self,
        command: UpdateShortCommand,
    ) -> Result<UpdateShortResponse, ApplicationError> {
        Ok(self.command_bus.execute(command).await?)
    }

    /// 删除短视频（级联清理标签关联与举报）
    pub async fn delete_short(
        &self,
        command: DeleteShortCommand,
    ) -> Result<DeleteShortResponse, ApplicationError> {
        let response = self.command_bus.execute(command).await?;

        self.event_bus
            .publish(ShortsDomainEvent::ShortDeleted(ShortDeletedEvent {
                short_id: response.short.id(),
                detached_tags: response.detached_tags,
                deleted_reports: response.deleted_reports,
                timestamp: chrono::Utc::now(),
            }));

        Ok(response)
    }

    /// 创建标签（幂等）
    pub async fn create_tag(
        &self,
        command: CreateTagCommand,
    ) -> Result<CreateTagResponse, ApplicationError> {
        Ok(self.command_bus.execute(command).await?)
    }

    /// 全局重命名标签
    pub async fn rename_tag(
        &self,
        command: RenameTagCommand,
    ) -> Result<RenameTagResponse, ApplicationError> {
        Ok(self.command_bus.execute(command).await?)
    }

    /// 单个短视频上重命名标签
    pub async fn rename_tag_on_short(
        &self,
        command: RenameTagOnShortCommand,
    ) -> Result<RenameTagOnShortResponse, ApplicationError> {
        Ok(self.command_bus.execute(command).await?)
    }

    /// 全局删除标签
    pub async fn delete_tag(
        &self,
        command: DeleteTagCommand,
    ) -> Result<DeleteTagResponse, ApplicationError> {
        Ok(self.command_bus.execute(command).await?)
    }

    /// 清空短视频的全部标签
    pub async fn clear_short_tags(
        &self,
        command: ClearShortTagsCommand,
    ) -> Result<ClearShortTagsResponse, ApplicationError> {
        Ok(self.command_bus.execute(command).await?)
    }

    /// 移除短视频的单个标签
    pub async fn remove_tag_from_short(
        &self,
        command: RemoveTagFromShortCommand,
    ) -> Result<RemoveTagFromShortResponse, ApplicationError> {
        Ok(self.command_bus.execute(command).await?)
    }

    /// 创建举报
    pub async fn create_report(
        &self,
        command: CreateReportCommand,
    ) -> Result<CreateReportResponse, ApplicationError> {
        let response = self.command_bus.execute(command).await?;

        self.event_bus
            .publish(ShortsDomainEvent::ReportFiled(ReportFiledEvent {
                short_id: response.report.short_id(),
                reporter_id: response.report.reporter_id(),
                timestamp: response.report.created_at(),
            }));

        Ok(response)
    }

    /// 删除举报
    pub async fn delete_report(
        &self,
        command: DeleteReportCommand,
    ) -> Result<DeleteReportResponse, ApplicationError> {
        let response = self.command_bus.execute(command).await?;

        self.event_bus
            .publish(ShortsDomainEvent::ReportDismissed(ReportDismissedEvent {
                short_id: response.report.short_id(),
                reporter_id: response.report.reporter_id(),
                timestamp: chrono::Utc::now(),
            }));

        Ok(response)
    }

    // Query handlers

    /// 列出所有短视频（分页）
    pub async fn list_shorts(
        &self,
        query: ListShortsQuery,
    ) -> Result<ListShortsResponse, ApplicationError> {
        Ok(self.query_bus.execute(query).await?)
    }

    /// 获取短视频
    pub async fn get_short(
        &self,
        query: GetShortQuery,
    ) -> Result<GetShortResponse, ApplicationError> {
        Ok(self.query_bus.execute(query).await?)
    }

    /// 按用户列出短视频
    pub async fn list_shorts_by_user(
        &self,
        query: ListShortsByUserQuery,
    ) -> Result<ListShortsByUserResponse, ApplicationError> {
        Ok(self.query_bus.execute(query).await?)
    }

    /// 按标签列出短视频
    pub async fn list_shorts_by_tag(
        &self,
        query: ListShortsByTagQuery,
    ) -> Result<ListShortsByTagResponse, ApplicationError> {
        Ok(self.query_bus.execute(query).await?)
    }

    /// 列出所有标签
    pub async fn list_tags(
        &self,
        query: ListTagsQuery,
    ) -> Result<ListTagsResponse, ApplicationError> {
        Ok(self.query_bus.execute(query).await?)
    }

    /// 按短视频列出标签
    pub async fn list_tags_by_short(
        &self,
        query: ListTagsByShortQuery,
    ) -> Result<ListTagsByShortResponse, ApplicationError> {
        Ok(self.query_bus.execute(query).await?)
    }

    /// 列出所有举报
    pub async fn list_reports(
        &self,
        query: ListReportsQuery,
    ) -> Result<ListReportsResponse, ApplicationError> {
        Ok(self.query_bus.execute(query).await?)
    }

    /// 按用户列出举报
    pub async fn list_reports_by_user(
        &self,
        query: ListReportsByUserQuery,
    ) -> Result<ListReportsByUserResponse, ApplicationError> {
        Ok(self.query_bus.execute(query).await?)
    }

    /// 按短视频列出举报
    pub async fn list_reports_by_short(
        &self,
        query: ListReportsByShortQuery,
    ) -> Result<ListReportsByShortResponse, ApplicationError> {
        Ok(self.query_bus.execute(query).await?)
    }

    /// 获取单条举报（不存在时返回 None，不是错误）
    pub async fn get_report(
        &self,
        query: GetReportQuery,
    ) -> Result<GetReportResponse, ApplicationError> {
        Ok(self.query_bus.execute(query).await?)
    }

    // Accessors

    /// 获取领域事件总线
    pub fn event_bus(&self) -> &Arc<DomainEventBus> {
        &self.event_bus
    }

    /// 获取短视频仓储
    pub fn short_repository(&self) -> &Arc<dyn ShortRepository> {
        &self.short_repository
    }

    /// 获取标签仓储
    pub fn tag_repository(&self) -> &Arc<dyn TagRepository> {
        &self.tag_repository
    }

    /// 获取举报仓储
    pub fn report_repository(&self) -> &Arc<dyn ReportRepository> {
        &self.report_repository
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shorts_module_integration() {
        let module = ShortsModule::new().unwrap();
        let user_id = UserId::new();

        // 创建短视频
        let create_cmd =
            CreateShortCommand::new(user_id, "Integration Test".to_string(), None);
        let create_resp = module.create_short(create_cmd).await.unwrap();

        assert_eq!(create_resp.short.title(), "Integration Test");

        // 获取短视频
        let get_resp = module
            .get_short(GetShortQuery::new(create_resp.short.id()))
            .await
            .unwrap();
        assert_eq!(get_resp.short.id(), create_resp.short.id());

        // 列出短视频
        let list_resp = module.list_shorts(ListShortsQuery::default()).await.unwrap();
        assert_eq!(list_resp.total, 1);

        // 按用户列出
        let by_user = module
            .list_shorts_by_user(ListShortsByUserQuery::new(user_id))
            .await
            .unwrap();
        assert_eq!(by_user.shorts.len(), 1);

        // 更新短视频
        let update_resp = module
            .update_short(UpdateShortCommand::new(
                create_resp.short.id(),
                Some("Renamed".to_string()),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(update_resp.short.title(), "Renamed");

        // 删除短视频
        module
            .delete_short(DeleteShortCommand::new(create_resp.short.id()))
            .await
            .unwrap();

        // 确认已删除
        let list_resp = module.list_shorts(ListShortsQuery::default()).await.unwrap();
        assert_eq!(list_resp.total, 0);
    }

    #[tokio::test]
    async fn test_tag_lifecycle_scenario() {
        let module = ShortsModule::new().unwrap();

        // 创建短视频并打标签
        let short = module
            .create_short(CreateShortCommand::new(
                UserId::new(),
                "Tagged".to_string(),
                None,
            ))
            .await
            .unwrap()
            .short;

        module
            .create_tag(CreateTagCommand::new(short.id(), "funny".to_string()))
            .await
            .unwrap();

        let tags = module
            .list_tags_by_short(ListTagsByShortQuery::new(short.id()))
            .await
            .unwrap()
            .tags;
        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].text(), "funny");

        // 删除短视频后标签关联清空
        module
            .delete_short(DeleteShortCommand::new(short.id()))
            .await
            .unwrap();

        let tags = module
            .list_tags_by_short(ListTagsByShortQuery::new(short.id()))
            .await
            .unwrap()
            .tags;
        assert!(tags.is_empty());

        let reports = module
            .list_reports_by_short(ListReportsByShortQuery::new(short.id()))
            .await
            .unwrap()
            .reports;
        assert!(reports.is_empty());
    }

    #[tokio::test]
    async fn test_report_conflict_scenario() {
        let module = ShortsModule::new().unwrap();
        let u1 = UserId::new();
        let u2 = UserId::new();

        let short = module
            .create_short(CreateShortCommand::new(
                UserId::new(),
                "Reported".to_string(),
                None,
            ))
            .await
            .unwrap()
            .short;

        // U1 举报成功
        module
            .create_report(CreateReportCommand::new(
                short.id(),
                u1,
                Some("spam".to_string()),
            ))
            .await
            .unwrap();

        // U1 重复举报失败
        let result = module
            .create_report(CreateReportCommand::new(short.id(), u1, None))
            .await;
        assert!(matches!(result, Err(ApplicationError::Conflict(_))));

        // U2 举报成功（独立复合键）
        module
            .create_report(CreateReportCommand::new(short.id(), u2, None))
            .await
            .unwrap();

        let reports = module
            .list_reports_by_short(ListReportsByShortQuery::new(short.id()))
            .await
            .unwrap()
            .reports;
        assert_eq!(reports.len(), 2);
    }

    #[tokio::test]
    async fn test_get_report_none_is_not_an_error() {
        let module = ShortsModule::new().unwrap();

        let resp = module
            .get_report(GetReportQuery::new(ShortId::new(), UserId::new()))
            .await
            .unwrap();
        assert!(resp.report.is_none());
    }

    #[tokio::test]
    async fn test_rename_tag_globally_visible() {
        let module = ShortsModule::new().unwrap();

        let short = module
            .create_short(CreateShortCommand::new(
                UserId::new(),
                "Tagged".to_string(),
                None,
            ))
            .await
            .unwrap()
            .short;
        module
            .create_tag(CreateTagCommand::new(short.id(), "funny".to_string()))
            .await
            .unwrap();

        module
            .rename_tag(RenameTagCommand::new(
                "funny".to_string(),
                "hilarious".to_string(),
            ))
            .await
            .unwrap();

        // 旧文本不再出现在标签列表中
        let tags = module.list_tags(ListTagsQuery::new()).await.unwrap().tags;
        assert!(tags.iter().all(|t| t.text() != "funny"));
        assert!(tags.iter().any(|t| t.text() == "hilarious"));

        // 打过旧标签的短视频显示新文本
        let short_tags = module
            .list_tags_by_short(ListTagsByShortQuery::new(short.id()))
            .await
            .unwrap()
            .tags;
        assert_eq!(short_tags[0].text(), "hilarious");
    }

    #[tokio::test]
    async fn test_domain_events_published() {
        let module = ShortsModule::new().unwrap();
        let mut events = module.event_bus().subscribe();

        let short = module
            .create_short(CreateShortCommand::new(
                UserId::new(),
                "Evented".to_string(),
                None,
            ))
            .await
            .unwrap()
            .short;
        module
            .delete_short(DeleteShortCommand::new(short.id()))
            .await
            .unwrap();

        let first = events.recv().await.unwrap();
        assert_eq!(first.event_type(), "short.created");

        let second = events.recv().await.unwrap();
        assert_eq!(second.event_type(), "short.deleted");
    }
}

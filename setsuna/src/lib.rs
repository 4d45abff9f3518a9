//! Setsuna - 短视频内容服务模块
//!
//! 提供短视频（Short）、标签（Tag）和举报（Report）三类领域对象的
//! 命令/查询调度核心。所有操作以类型化消息的形式经由中介者
//! （[`mediator`]）分发到唯一注册的处理器。
//!
//! ```no_run
//! use setsuna::modules::ShortsModule;
//! use setsuna::modules::shorts::CreateShortCommand;
//! use setsuna::modules::shorts::domain::UserId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     setsuna::shared::logging::init();
//!
//!     let module = ShortsModule::new()?;
//!     let command = CreateShortCommand::new(
//!         UserId::new(),
//!         "My first short".to_string(),
//!         None,
//!     );
//!     let response = module.create_short(command).await?;
//!     println!("created short {}", response.short.id());
//!     Ok(())
//! }
//! ```

pub mod infrastructure;
pub mod mediator;
pub mod modules;
pub mod shared;

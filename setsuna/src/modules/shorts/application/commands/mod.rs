mod clear_short_tags;
mod create_report;
mod create_short;
mod create_tag;
mod delete_report;
mod delete_short;
mod delete_tag;
mod remove_tag_from_short;
mod rename_tag;
mod rename_tag_on_short;
mod update_short;

pub use clear_short_tags::{ClearShortTagsCommand, ClearShortTagsHandler, ClearShortTagsResponse};
pub use create_report::{CreateReportCommand, CreateReportHandler, CreateReportResponse};
pub use create_short::{CreateShortCommand, CreateShortHandler, CreateShortResponse};
pub use create_tag::{CreateTagCommand, CreateTagHandler, CreateTagResponse};
pub use delete_report::{DeleteReportCommand, DeleteReportHandler, DeleteReportResponse};
pub use delete_short::{DeleteShortCommand, DeleteShortHandler, DeleteShortResponse};
pub use delete_tag::{DeleteTagCommand, DeleteTagHandler, DeleteTagResponse};
pub use remove_tag_from_short::{
    RemoveTagFromShortCommand, RemoveTagFromShortHandler, RemoveTagFromShortResponse,
};
pub use rename_tag::{RenameTagCommand, RenameTagHandler, RenameTagResponse};
pub use rename_tag_on_short::{
    RenameTagOnShortCommand, RenameTagOnShortHandler, RenameTagOnShortResponse,
};
pub use update_short::{UpdateShortCommand, UpdateShortHandler, UpdateShortResponse};

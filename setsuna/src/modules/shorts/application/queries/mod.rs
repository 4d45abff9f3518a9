mod get_report;
mod get_short;
mod list_reports;
mod list_reports_by_short;
mod list_reports_by_user;
mod list_shorts;
mod list_shorts_by_tag;
mod list_shorts_by_user;
mod list_tags;
mod list_tags_by_short;

pub use get_report::{GetReportHandler, GetReportQuery, GetReportResponse};
pub use get_short::{GetShortHandler, GetShortQuery, GetShortResponse};
pub use list_reports::{ListReportsHandler, ListReportsQuery, ListReportsResponse};
pub use list_reports_by_short::{
    ListReportsByShortHandler, ListReportsByShortQuery, ListReportsByShortResponse,
};
pub use list_reports_by_user::{
    ListReportsByUserHandler, ListReportsByUserQuery, ListReportsByUserResponse,
};
pub use list_shorts::{ListShortsHandler, ListShortsQuery, ListShortsResponse};
pub use list_shorts_by_tag::{
    ListShortsByTagHandler, ListShortsByTagQuery, ListShortsByTagResponse,
};
pub use list_shorts_by_user::{
    ListShortsByUserHandler, ListShortsByUserQuery, ListShortsByUserResponse,
};
pub use list_tags::{ListTagsHandler, ListTagsQuery, ListTagsResponse};
pub use list_tags_by_short::{
    ListTagsByShortHandler, ListTagsByShortQuery, ListTagsByShortResponse,
};

mod report_repository;
mod short_repository;
mod tag_repository;

pub use report_repository::ReportRepository;
pub use short_repository::{PaginatedResult, Pagination, RepositoryError, ShortRepository};
pub use tag_repository::TagRepository;

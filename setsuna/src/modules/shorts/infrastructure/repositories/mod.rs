mod file_report_repository;
mod file_short_repository;
mod file_tag_repository;
mod in_memory_report_repository;
mod in_memory_short_repository;
mod in_memory_tag_repository;

pub use file_report_repository::FileReportRepository;
pub use file_short_repository::FileShortRepository;
pub use file_tag_repository::FileTagRepository;
pub use in_memory_report_repository::InMemoryReportRepository;
pub use in_memory_short_repository::InMemoryShortRepository;
pub use in_memory_tag_repository::InMemoryTagRepository;

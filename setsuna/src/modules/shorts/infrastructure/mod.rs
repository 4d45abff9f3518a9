pub mod repositories;

pub use repositories::{
    FileReportRepository, FileShortRepository, FileTagRepository, InMemoryReportRepository,
    InMemoryShortRepository, InMemoryTagRepository,
};

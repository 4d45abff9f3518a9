mod report;
mod short;
mod tag;

pub use report::Report;
pub use short::Short;
pub use tag::Tag;

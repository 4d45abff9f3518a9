pub mod shorts;

pub use shorts::ShortsModule;

pub mod entities;
pub mod events;
pub mod value_objects;

pub use entities::{Report, Short, Tag};
pub use events::{
    ReportDismissedEvent, ReportFiledEvent, ShortCreatedEvent, ShortDeletedEvent,
    ShortsDomainEvent,
};
pub use value_objects::{ShortId, TagId, UserId};

//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod retag;
pub mod show_tags;

pub use manage_config::ConfigService;
pub use retag::{retag_notes, RetagOptions, RetagReport, TagEdit};
pub use show_tags::TagsService;

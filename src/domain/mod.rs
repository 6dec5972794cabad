//! Domain layer - Business logic and domain models

pub mod placement;
pub mod tagline;

pub use placement::Placement;
pub use tagline::{LineBounds, TagLineLocator, TagMutator};

//! Tag line location, codec and mutation

pub mod codec;
pub mod locator;
pub mod mutator;

pub use codec::{decode_tag_line, encode_tag_line};
pub use locator::{LineBounds, TagLineLocator};
pub use mutator::TagMutator;

//! tagline - In-note tag line management
//!
//! A command-line tool that locates, renames and removes tags kept on a
//! dedicated tag line inside markdown notes, either right after the note
//! title or on the last non-blank line of the note.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TaglineError;

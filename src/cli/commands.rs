//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagline")]
#[command(about = "Manage the tag line of markdown notes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new tagline notes directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Tag line placement (after-title, trailing)
        #[arg(short, long, default_value = "after-title")]
        placement: String,

        /// Tag marker character
        #[arg(short, long, default_value = "#")]
        marker: char,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Show the tags of one note, or all tags across notes
    Tags {
        /// Note file relative to the root; omit to list tags of every note
        file: Option<String>,

        /// Include notes in subdirectories
        #[arg(short, long)]
        recursive: bool,
    },

    /// Rename a tag on the tag line of notes
    Rename {
        /// Tag to rename (leading marker optional)
        old_tag: String,

        /// New tag name (leading marker optional)
        new_tag: String,

        /// Only edit this note file
        #[arg(short, long)]
        file: Option<String>,

        /// Include notes in subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove a tag from the tag line of notes
    Remove {
        /// Tag to remove (leading marker optional)
        tag: String,

        /// Only edit this note file
        #[arg(short, long)]
        file: Option<String>,

        /// Include notes in subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Report what would change without writing
        #[arg(long)]
        dry_run: bool,
    },
}

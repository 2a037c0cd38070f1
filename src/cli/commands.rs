//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "motto")]
#[command(about = "Terminal quote keeper", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new quote store with the default quotes
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Pick and display a fresh random quote
    Show {
        /// Restrict the pick to one category for this invocation only
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Add a quote to the store
    Add {
        /// The quote text
        text: String,

        /// The category it belongs to
        category: String,
    },

    /// List the distinct categories in the store
    Categories,

    /// View or change the persisted filter category
    Filter {
        /// Category to filter by ('all' for no filter); omit to show current
        category: Option<String>,

        /// Reset the filter to 'all'
        #[arg(long)]
        clear: bool,
    },

    /// Merge quotes from a JSON file into the store
    Import {
        /// File containing a JSON array of {text, category} objects
        file: PathBuf,
    },

    /// Write the full collection to a JSON file
    Export {
        /// Output file
        #[arg(short, long, default_value = "quotes.json")]
        output: PathBuf,
    },
}

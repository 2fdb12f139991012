use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tally", bin_name = "tally", version)]
#[command(about = "Single-user inventory and budget ledger", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Articles document to use (defaults to ./articles.json)
    #[arg(short, long, global = true, env = "TALLY_FILE")]
    pub file: Option<PathBuf>,

    /// Use the per-user articles document instead of the current directory
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive numbered menu (the default)
    Menu,

    /// Register a new article
    #[command(alias = "new")]
    Add {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        category: String,

        #[arg(long, default_value = "", allow_hyphen_values = true)]
        quantity: String,

        #[arg(long, default_value = "", allow_hyphen_values = true)]
        price: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// List every article
    #[command(alias = "ls")]
    List,

    /// Find articles whose name or category matches exactly (ignoring case)
    Search {
        /// Field to compare: name or category
        field: String,

        /// Value to look for
        value: String,
    },

    /// Change fields of an article; omitted fields keep their value
    #[command(alias = "e")]
    Edit {
        #[arg(allow_hyphen_values = true)]
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        quantity: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        price: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an article by id
    #[command(alias = "rm")]
    Delete {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, log-level)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

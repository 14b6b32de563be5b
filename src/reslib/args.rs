use clap::{Parser, Subcommand};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const GIT_HASH: &str = env!("GIT_HASH");
const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");

pub fn version_string() -> String {
    if GIT_HASH.is_empty() {
        VERSION.to_string()
    } else {
        format!("{} ({} {})", VERSION, GIT_HASH, GIT_COMMIT_DATE)
    }
}

#[derive(Parser, Debug)]
#[command(name = "reslib")]
#[command(about = "Browse the resource library from the command line", long_about = None)]
#[command(version = version_string())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List resources matching the given filters (the default command)
    #[command(alias = "ls")]
    List {
        /// Search title and description (case-insensitive substring)
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by type, e.g. "White Papers" or "Videos" (repeatable)
        #[arg(short = 't', long = "type", value_name = "TYPE")]
        types: Vec<String>,

        /// Filter by tag, e.g. "Security" (repeatable)
        #[arg(short = 'g', long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Filter by publication year, e.g. 2024
        #[arg(short, long)]
        year: Option<String>,

        /// Sort order: relevance, date or title (anything else falls
        /// back to relevance)
        #[arg(long)]
        sort: Option<String>,

        /// Print the filtered resources as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single resource in full
    #[command(alias = "v")]
    Show {
        /// Resource id
        id: String,
    },

    /// Show the available filters: types, tags and years with counts
    #[command(alias = "f")]
    Filters,
}

use clap::{Parser, Subcommand};
use roomlist::model::Difficulty;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roomlist", bin_name = "roomlist", version)]
#[command(about = "Browse, filter and sort game rooms", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List rooms
    #[command(alias = "ls")]
    List {
        /// ALL, a difficulty (Easy, Medium, Hard) or an exact tag
        #[arg(short, long)]
        filter: Option<String>,

        /// Case-insensitive text matched against title, creator and tags
        #[arg(short, long)]
        search: Option<String>,

        /// popularity, newest, rating or players
        #[arg(long)]
        sort: Option<String>,

        /// Print rooms as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a room
    #[command(alias = "n")]
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        creator: String,

        /// Easy, Medium or Hard
        #[arg(short, long)]
        difficulty: Difficulty,

        /// Current player count
        #[arg(long, default_value_t = 0)]
        players: u32,

        /// Like rate, e.g. 94%
        #[arg(long, default_value = "0%")]
        like_rate: String,

        /// Play count, e.g. 2.1M or 850K
        #[arg(long, default_value = "0")]
        plays: String,

        #[arg(long, default_value_t = 0.0)]
        rating: f32,

        /// Tag (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Thumbnail image reference
        #[arg(long)]
        thumbnail: Option<String>,
    },

    /// Show full details of one or more rooms
    #[command(alias = "v")]
    View {
        /// Indexes (e.g. 1 3-4), a room id, or words from the title
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Remove one or more rooms
    #[command(alias = "rm")]
    Remove {
        /// Indexes (e.g. 1 3-4), a room id, or words from the title
        #[arg(required = true, num_args = 1..)]
        selectors: Vec<String>,
    },

    /// Remove all rooms
    Clear,

    /// Add the built-in sample rooms
    Seed,

    /// Import rooms from a JSON file
    Import { file: PathBuf },

    /// Export rooms to a JSON file
    Export { file: PathBuf },

    /// Get or set configuration (sort, filter, category, credits)
    Config {
        key: Option<String>,
        value: Option<String>,
    },
}

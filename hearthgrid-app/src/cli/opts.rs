use clap::{Args, Parser, Subcommand, ValueEnum};
use hearthgrid_http::DEFAULT_API_URL;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Parser, Clone)]
#[command(name = "hearthgrid", version, about = "Hearthstone card gallery: CLI/TUI/API")]
pub struct Cli {
    /// Base URL of the HearthstoneJSON-compatible card API
    #[arg(long, env = "HEARTHGRID_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Read cards from a local JSON array instead of the API
    #[arg(long)]
    pub cards_file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// List cards matching filters (CLI)
    Browse(BrowseCmd),
    /// Draw one random collectible card (CLI)
    Draw(DrawCmd),
    /// List expansions, newest first
    Sets {
        /// Only sets in the current rotation
        #[arg(long)]
        rotation: bool,
    },
    /// List card classes present in the catalog
    Classes,
    /// Launch Terminal UI
    Tui,
    /// Launch Axum HTTP API
    Api(ApiCmd),
}

#[derive(Debug, Args, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive text search over name, text, flavor, rarity and type
    #[arg(long, short = 's')]
    pub search: Option<String>,
    /// Class, e.g. MAGE
    #[arg(long)]
    pub class: Option<String>,
    /// Canonical set key, e.g. THE_GREAT_DARK_BEYOND (see `sets`)
    #[arg(long)]
    pub set: Option<String>,
    /// Mana cost bucket: 0-6 or 7+
    #[arg(long)]
    pub mana: Option<String>,
    /// Current rotation only
    #[arg(long)]
    pub rotation: bool,
    /// name | cost | attack | health
    #[arg(long, default_value = "name")]
    pub sort: String,
    /// asc | desc
    #[arg(long, default_value = "asc")]
    pub order: String,
    /// 1-based page; each page adds 20 cards
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

#[derive(Debug, Args, Clone)]
pub struct BrowseCmd {
    #[command(flatten)]
    pub filters: FilterArgs,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
    /// Include art URLs in table output
    #[arg(long)]
    pub images: bool,
}

#[derive(Debug, Args, Clone)]
pub struct DrawCmd {
    /// Print the card as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct ApiCmd {
    /// Bind address (host:port)
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub addr: String,
}

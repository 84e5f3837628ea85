use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "newsfeed")]
#[command(about = "Filter, paginate and summarize sentiment-tagged news feeds", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .newsfeed.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of the feed with summary charts
    View {
        /// Saved news list response ({"news": [...], "total": n})
        feed: PathBuf,

        #[command(flatten)]
        filters: FilterArgs,

        /// Page to show (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Items per page (overrides config)
        #[arg(long)]
        page_size: Option<usize>,

        /// Page-number buttons per group (overrides config)
        #[arg(long)]
        group_size: Option<usize>,

        /// Treat the feed as server-paged: fetch only the requested page
        #[arg(long)]
        server_paging: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Show a single item with its related stocks
    Show {
        /// Saved news list response
        feed: PathBuf,

        /// Item id
        id: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Keep items with a related stock whose name contains this text
    #[arg(long, default_value = "")]
    pub stock: String,

    /// Keep items with exactly this sentiment label
    #[arg(long, default_value = "")]
    pub sentiment: String,

    /// Keep items published with this date prefix (e.g. 2024-01)
    #[arg(long, default_value = "")]
    pub date: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

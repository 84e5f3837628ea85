use anyhow::{Context, Result};
use clap::Parser;
use newsfeed::cli::{Cli, Commands, FilterArgs, OutputFormat};
use newsfeed::config::{load_config, load_config_from, FeedConfig, PagingStrategy};
use newsfeed::formatting::FormattingConfig;
use newsfeed::io::{create_writer, RenderContext};
use newsfeed::session::{FeedSession, LoadState};
use newsfeed::source::JsonFileSource;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = match &cli.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => load_config(),
    };
    let formatting = if cli.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env(config.display.color.into())
    };

    match cli.command {
        Commands::View {
            feed,
            filters,
            page,
            page_size,
            group_size,
            server_paging,
            format,
        } => handle_view_command(
            ViewCommand {
                feed,
                filters,
                page,
                page_size,
                group_size,
                server_paging,
                format,
            },
            config,
            formatting,
        ),
        Commands::Show { feed, id, format } => {
            handle_show_command(feed, &id, format, &config, formatting)
        }
    }
}

/// `RUST_LOG` wins; otherwise warnings only, raised by each `-v`.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

struct ViewCommand {
    feed: PathBuf,
    filters: FilterArgs,
    page: usize,
    page_size: Option<usize>,
    group_size: Option<usize>,
    server_paging: bool,
    format: OutputFormat,
}

fn handle_view_command(
    command: ViewCommand,
    mut config: FeedConfig,
    formatting: FormattingConfig,
) -> Result<()> {
    if let Some(page_size) = command.page_size {
        config.view.page_size = page_size;
    }
    if let Some(group_size) = command.group_size {
        config.view.pagination_group_size = group_size;
    }
    if command.server_paging {
        config.source.paging = PagingStrategy::Server;
    }

    let params = config
        .view_params()
        .context("Invalid paging options")?
        .with_page(command.page)
        .with_stock_filter(command.filters.stock)
        .with_sentiment_filter(command.filters.sentiment)
        .with_date_filter(command.filters.date);

    let mut session = FeedSession::new(JsonFileSource::new(command.feed), params);
    session.refresh();

    // A failed fetch still renders the (empty) view with its message
    let ctx = RenderContext {
        status_message: session.status().message().map(str::to_string),
        fetched_at: session.fetched_at(),
        top_stocks: config.view.top_stocks,
    };
    create_writer(command.format, formatting).write_view(session.view(), &ctx)
}

fn handle_show_command(
    feed: PathBuf,
    id: &str,
    format: OutputFormat,
    config: &FeedConfig,
    formatting: FormattingConfig,
) -> Result<()> {
    // Lookup needs the whole feed regardless of the configured paging
    let mut client_config = config.clone();
    client_config.source.paging = PagingStrategy::Client;

    let mut session = FeedSession::new(JsonFileSource::new(feed), client_config.view_params()?);
    session.refresh();
    if let LoadState::Failed(message) = session.load_state() {
        anyhow::bail!("{}", message);
    }

    let detail = session.detail(id)?;
    create_writer(format, formatting).write_detail(&detail)
}

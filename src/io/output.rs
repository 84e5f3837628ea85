//! Writers that turn a computed view into text.
//!
//! ```text
//! ViewState ──→ OutputWriter ──→ stdout / file / buffer
//!                    │
//!                    ├→ JsonWriter      (ViewState + metadata as JSON)
//!                    └→ TerminalWriter  (items table, page window, charts)
//! ```
//!
//! Writers never recompute anything; they only lay out what the engine
//! derived.

use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::cli::OutputFormat;
use crate::formatting::{create_formatter, ColorMode, FormattingConfig, OutputFormatter};
use crate::view::display::{format_published, stock_summary};
use crate::view::sentiment::normalize;
use crate::view::{ItemDetail, SentimentCounts, SentimentLabel, StockCount, ViewState};

/// Title shown above the feed
pub const FEED_TITLE: &str = "감정분석 뉴스 리스트";

const TITLE_WIDTH: usize = 48;
const BAR_WIDTH: usize = 30;

/// Everything besides the view that a writer may show.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Loading / error / no-results line
    pub status_message: Option<String>,
    pub fetched_at: Option<DateTime<Utc>>,
    /// Bars in the stock chart
    pub top_stocks: usize,
}

pub trait OutputWriter {
    fn write_view(&mut self, view: &ViewState, ctx: &RenderContext) -> anyhow::Result<()>;
    fn write_detail(&mut self, detail: &ItemDetail) -> anyhow::Result<()>;
}

// ============================================================================
// JSON OUTPUT FORMAT
// ============================================================================

/// JSON document for one view.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput<'a> {
    pub format_version: &'static str,
    pub metadata: JsonMetadata,
    pub view: &'a ViewState,
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonMetadata {
    pub generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_view(&mut self, view: &ViewState, ctx: &RenderContext) -> anyhow::Result<()> {
        let output = JsonOutput {
            format_version: "1.0",
            metadata: JsonMetadata {
                generated_at: Utc::now().to_rfc3339(),
                fetched_at: ctx.fetched_at.map(|t| t.to_rfc3339()),
                status: ctx.status_message.clone(),
            },
            view,
        };
        serde_json::to_writer_pretty(&mut self.writer, &output)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_detail(&mut self, detail: &ItemDetail) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, detail)?;
        writeln!(self.writer)?;
        Ok(())
    }
}

// ============================================================================
// TERMINAL OUTPUT FORMAT
// ============================================================================

pub struct TerminalWriter<W: Write> {
    writer: W,
    config: FormattingConfig,
    formatter: Box<dyn OutputFormatter>,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, config: FormattingConfig) -> Self {
        Self {
            writer,
            config,
            formatter: create_formatter(config),
        }
    }

    fn items_table(&self, view: &ViewState) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec!["ID", "Title", "Sentiment", "Published", "Stocks"]);
        match self.config.color {
            ColorMode::Always => {
                table.enforce_styling();
            }
            ColorMode::Never => {
                table.force_no_tty();
            }
            ColorMode::Auto => {}
        }

        for item in &view.visible_items {
            let label = normalize(item.sentiment.as_ref());
            table.add_row(vec![
                Cell::new(&item.id),
                Cell::new(truncate_to_width(&item.title, TITLE_WIDTH)),
                badge_cell(label),
                Cell::new(format_published(item.published.as_deref())),
                Cell::new(stock_summary(&item.related_stocks)),
            ]);
        }
        table
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_view(&mut self, view: &ViewState, ctx: &RenderContext) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", self.formatter.header(FEED_TITLE))?;
        if let Some(fetched_at) = ctx.fetched_at {
            let line = format!("Fetched {}", fetched_at.format("%Y-%m-%d %H:%M:%S UTC"));
            writeln!(self.writer, "{}", self.formatter.dim(&line))?;
        }
        writeln!(self.writer)?;

        if let Some(message) = &ctx.status_message {
            writeln!(self.writer, "{}", self.formatter.warning(message))?;
        }

        if !view.visible_items.is_empty() {
            writeln!(self.writer, "{}", self.items_table(view))?;
        }

        writeln!(
            self.writer,
            "Page {}/{} · {} items",
            view.current_page, view.total_pages, view.total_filtered_count
        )?;
        writeln!(self.writer, "{}", pagination_bar(view, self.formatter.as_ref()))?;
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", self.formatter.bold("Most mentioned stocks"))?;
        let top = view.top_stocks(ctx.top_stocks);
        if top.is_empty() {
            writeln!(self.writer, "  {}", self.formatter.dim("-"))?;
        }
        for line in stock_bars(top, BAR_WIDTH) {
            writeln!(self.writer, "  {}", line)?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "{}", self.formatter.bold("Sentiment"))?;
        writeln!(
            self.writer,
            "  {}",
            sentiment_line(&view.sentiment_counts, self.formatter.as_ref())
        )?;
        Ok(())
    }

    fn write_detail(&mut self, detail: &ItemDetail) -> anyhow::Result<()> {
        let f = self.formatter.as_ref();
        writeln!(self.writer, "{}", f.header(&detail.title))?;
        let badge = if detail.badge_text.is_empty() {
            String::new()
        } else {
            format!("{}  ", f.badge(detail.badge, detail.badge_text))
        };
        writeln!(self.writer, "{}{}", badge, f.dim(&detail.published))?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", detail.content)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{} {}", f.bold("Reason:"), detail.reason)?;
        if let Some(link) = &detail.link {
            writeln!(self.writer, "{} {}", f.bold("Link:"), link)?;
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "{}", f.bold("Related stocks"))?;
        if detail.stocks.is_empty() {
            writeln!(self.writer, "  -")?;
        }
        for stock in &detail.stocks {
            let mut line = stock.name.clone();
            if let Some(code) = &stock.code {
                line.push_str(&format!(" ({})", code));
            }
            if let Some(sector) = &stock.sector {
                line.push_str(&format!(" · {}", sector));
            }
            match (stock.arrow, &stock.direction) {
                (_, None) => {}
                ("", Some(direction)) => line.push_str(&format!(" {}", direction)),
                (arrow, Some(direction)) => line.push_str(&format!(" {} {}", arrow, direction)),
            }
            writeln!(self.writer, "  {}", line)?;
        }
        Ok(())
    }
}

/// Writer for `format` on stdout.
pub fn create_writer(format: OutputFormat, config: FormattingConfig) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(std::io::stdout(), config)),
    }
}

fn badge_cell(label: &str) -> Cell {
    let cell = Cell::new(SentimentLabel::badge_text(label));
    match SentimentLabel::badge_style(label) {
        SentimentLabel::Positive => cell.fg(Color::Green).add_attribute(Attribute::Bold),
        SentimentLabel::Negative => cell.fg(Color::Red).add_attribute(Attribute::Bold),
        SentimentLabel::Neutral => cell,
    }
}

/// `« First  ‹ Prev  1 [2] 3  Next ›  Last »` with unavailable moves dimmed.
pub fn pagination_bar(view: &ViewState, f: &dyn OutputFormatter) -> String {
    let control = |text: &str, enabled: bool| {
        if enabled {
            text.to_string()
        } else {
            f.dim(text)
        }
    };

    let mut parts = vec![
        control("« First", view.can_go_previous()),
        control("‹ Prev", view.can_go_previous()),
    ];
    parts.extend(view.page_window.iter().map(|&page| {
        let number = page.to_string();
        if page == view.current_page {
            f.highlight(&number)
        } else {
            number
        }
    }));
    parts.push(control("Next ›", view.can_go_next()));
    parts.push(control("Last »", view.can_go_next()));
    parts.join("  ")
}

/// Horizontal bars scaled so the largest count fills `width`.
pub fn stock_bars(counts: &[StockCount], width: usize) -> Vec<String> {
    let max = counts.iter().map(|c| c.count).max().unwrap_or(0);
    let name_width = counts
        .iter()
        .map(|c| UnicodeWidthStr::width(c.name.as_str()))
        .max()
        .unwrap_or(0);

    counts
        .iter()
        .map(|c| {
            let filled = if max == 0 {
                0
            } else {
                (c.count * width).div_ceil(max)
            };
            let pad = name_width - UnicodeWidthStr::width(c.name.as_str());
            format!(
                "{}{} {} {}",
                c.name,
                " ".repeat(pad),
                "█".repeat(filled),
                c.count
            )
        })
        .collect()
}

fn sentiment_line(counts: &SentimentCounts, f: &dyn OutputFormatter) -> String {
    SentimentLabel::all()
        .iter()
        .map(|label| {
            format!(
                "{} {}",
                f.badge(*label, label.display_name()),
                counts.get(*label)
            )
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Cuts `text` to at most `max` display columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    if UnicodeWidthStr::width(text) <= max {
        return text.to_string();
    }
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if width + w + 1 > max {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push('…');
    out
}

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::formatting::ColorMode;
use crate::view::{PagingMode, ViewParams, DEFAULT_GROUP_SIZE, DEFAULT_PAGE_SIZE, DEFAULT_TOP_STOCKS};

/// Root configuration structure for newsfeed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Paging and chart sizes
    #[serde(default)]
    pub view: ViewConfig,

    /// How the feed is fetched
    #[serde(default)]
    pub source: SourceConfig,

    /// Terminal output
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default = "default_group_size")]
    pub pagination_group_size: usize,

    /// Bars in the stock mention chart
    #[serde(default = "default_top_stocks")]
    pub top_stocks: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            pagination_group_size: default_group_size(),
            top_stocks: default_top_stocks(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagingStrategy {
    /// Fetch the whole feed once and page locally
    #[default]
    Client,
    /// Fetch one page at a time
    Server,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub paging: PagingStrategy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub color: ColorSetting,
}

/// Serialized form of [`ColorMode`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    #[default]
    Auto,
    Always,
    Never,
}

impl From<ColorSetting> for ColorMode {
    fn from(setting: ColorSetting) -> Self {
        match setting {
            ColorSetting::Auto => ColorMode::Auto,
            ColorSetting::Always => ColorMode::Always,
            ColorSetting::Never => ColorMode::Never,
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_group_size() -> usize {
    DEFAULT_GROUP_SIZE
}

fn default_top_stocks() -> usize {
    DEFAULT_TOP_STOCKS
}

impl FeedConfig {
    /// Reject sizes that admit no pagination.
    pub fn validate(&self) -> Result<()> {
        if self.view.page_size == 0 {
            return Err(Error::Configuration(
                "view.page_size must be greater than 0".into(),
            ));
        }
        if self.view.pagination_group_size == 0 {
            return Err(Error::Configuration(
                "view.pagination_group_size must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    /// View params for the first page under this configuration.
    ///
    /// Server paging starts with an unknown total; the session fills it
    /// in after each fetch.
    pub fn view_params(&self) -> Result<ViewParams> {
        let paging = match self.source.paging {
            PagingStrategy::Client => PagingMode::Client,
            PagingStrategy::Server => PagingMode::Server { total: 0 },
        };
        Ok(ViewParams::new(self.view.page_size)?
            .with_group_size(self.view.pagination_group_size)?
            .with_paging(paging))
    }
}

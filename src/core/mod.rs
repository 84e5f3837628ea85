//! Feed data model as it arrives from the news service.
//!
//! Every optional field has a defined absent value so that a sparse or
//! partially malformed record still deserializes into a usable
//! [`NewsItem`]. Only the top-level structure must be JSON.

pub mod errors;

use serde::{Deserialize, Deserializer, Serialize};

pub use errors::{Error, Result};

/// Sentiment attached to a news item.
///
/// The service emits either a bare label (`"positive"`) or an analysis
/// result object carrying a `label` field. Both shapes are kept as sent;
/// [`crate::view::sentiment::normalize`] is the only place that looks
/// inside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Sentiment {
    /// Label sent as a plain string
    Plain(String),
    /// Label wrapped in a structured analysis result
    Structured { label: String },
}

impl Sentiment {
    /// Lenient conversion from an arbitrary JSON value.
    ///
    /// Strings and objects with a string `label` are recognized; every
    /// other shape yields `None`.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::String(label) => Some(Self::Plain(label.clone())),
            serde_json::Value::Object(map) => map
                .get("label")
                .and_then(serde_json::Value::as_str)
                .map(|label| Self::Structured {
                    label: label.to_string(),
                }),
            _ => None,
        }
    }
}

/// Expected price movement of a related stock.
///
/// The wire values are the Korean words used by the analysis service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Direction {
    /// "상승"
    Up,
    /// "하락"
    Down,
    /// "중립"
    Flat,
    /// Any other value sent by the service
    Other(String),
    /// No direction given
    #[default]
    Unspecified,
}

impl Direction {
    pub const UP: &'static str = "상승";
    pub const DOWN: &'static str = "하락";
    pub const FLAT: &'static str = "중립";

    /// Arrow used next to the stock name in listings
    pub fn arrow(&self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
            Direction::Flat => "─",
            Direction::Other(_) | Direction::Unspecified => "",
        }
    }

    /// Original wire text, if any
    pub fn as_wire(&self) -> Option<&str> {
        match self {
            Direction::Up => Some(Self::UP),
            Direction::Down => Some(Self::DOWN),
            Direction::Flat => Some(Self::FLAT),
            Direction::Other(raw) => Some(raw.as_str()),
            Direction::Unspecified => None,
        }
    }
}

impl From<Option<String>> for Direction {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref() {
            None => Direction::Unspecified,
            Some(Self::UP) => Direction::Up,
            Some(Self::DOWN) => Direction::Down,
            Some(Self::FLAT) => Direction::Flat,
            Some(_) => Direction::Other(raw.unwrap_or_default()),
        }
    }
}

impl From<Direction> for Option<String> {
    fn from(direction: Direction) -> Self {
        direction.as_wire().map(str::to_string)
    }
}

/// A stock referenced by a news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedStock {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default)]
    pub direction: Direction,
}

impl RelatedStock {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: None,
            sector: None,
            direction: Direction::Unspecified,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

/// One sentiment-tagged news record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(
        default,
        deserialize_with = "deserialize_sentiment",
        skip_serializing_if = "Option::is_none"
    )]
    pub sentiment: Option<Sentiment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub related_stocks: Vec<RelatedStock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl NewsItem {
    /// Minimal item with only an id and title; used by builders and tests.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: String::new(),
            sentiment: None,
            published: None,
            related_stocks: Vec::new(),
            link: None,
            reason: None,
        }
    }

    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = Some(sentiment);
        self
    }

    pub fn with_published(mut self, published: impl Into<String>) -> Self {
        self.published = Some(published.into());
        self
    }

    pub fn with_stock(mut self, stock: RelatedStock) -> Self {
        self.related_stocks.push(stock);
        self
    }
}

/// Body of the news list endpoint: `{ "news": [...], "total": n }`.
///
/// A missing `news` array is an empty page and a missing `total` is 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub news: Vec<NewsItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: usize,
}

fn deserialize_sentiment<'de, D>(deserializer: D) -> std::result::Result<Option<Sentiment>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(Sentiment::from_json(&value))
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

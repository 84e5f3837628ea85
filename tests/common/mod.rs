use indoc::indoc;
use std::path::{Path, PathBuf};

/// Saved list response with five items across three stocks.
pub const SAMPLE_FEED: &str = indoc! {r#"
    {
        "news": [
            {
                "_id": "a1",
                "title": "Acme beats estimates",
                "content": "Quarterly revenue rose 12%.",
                "sentiment": "positive",
                "published": "2024-01-05T10:00:00",
                "relatedStocks": [{"name": "Acme", "code": "ACM", "direction": "상승"}],
                "reason": "Earnings surprise",
                "link": "https://news.example/a1"
            },
            {
                "_id": "g1",
                "title": "Globex slips on guidance",
                "sentiment": {"label": "negative"},
                "published": "2024-01-06T08:30:00",
                "relatedStocks": [{"name": "Globex"}, {"name": "Acme"}]
            },
            {
                "_id": "i1",
                "title": "Initech holds steady",
                "sentiment": "neutral",
                "published": "2024-02-01T09:00:00",
                "relatedStocks": [{"name": "Initech", "direction": "중립"}]
            },
            {
                "_id": "a2",
                "title": "Acme opens new plant",
                "sentiment": "positive",
                "published": "2024-02-03T11:15:00",
                "relatedStocks": [{"name": "Acme"}]
            },
            {
                "_id": "x1",
                "title": "Analysts split on sector",
                "sentiment": "mixed",
                "relatedStocks": null
            }
        ],
        "total": 5
    }
"#};

pub fn write_feed(dir: &Path) -> PathBuf {
    let path = dir.join("feed.json");
    std::fs::write(&path, SAMPLE_FEED).unwrap();
    path
}

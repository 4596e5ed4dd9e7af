use chrono::Utc;
use feed_rs::parser;
use reqwest::blocking::Client;
use scraper::Html;
use tracing::{debug, warn};

use crate::domain::{FeedItem, Platform};
use crate::errors::{AggregatorError, AggregatorResult};
use crate::sources::traits::FeedSource;

pub struct RssSource {
    client: Client,
    url: String,
}

impl RssSource {
    pub fn new(url: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
            url: url.to_string(),
        }
    }

    /// Extract plain text from HTML content, preserving some structure
    fn html_to_text(html: &str) -> String {
        let document = Html::parse_fragment(html);
        let mut text = String::new();

        for node in document.root_element().descendants() {
            if let Some(text_node) = node.value().as_text() {
                text.push_str(text_node);
            }
            // Add space after block elements to preserve word boundaries
            if let Some(element) = node.value().as_element() {
                match element.name() {
                    "p" | "br" | "div" => text.push(' '),
                    _ => {}
                }
            }
        }

        // Collapse whitespace and trim
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn fetch_bytes(&self) -> AggregatorResult<Vec<u8>> {
        let response = self.client.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(AggregatorError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        Ok(response.bytes()?.to_vec())
    }

    /// Parse feed bytes into normalized items
    pub fn items_from_bytes(bytes: &[u8], source_url: &str) -> AggregatorResult<Vec<FeedItem>> {
        let parsed = parser::parse(bytes)
            .map_err(|e| AggregatorError::FeedParse(format!("{}: {}", source_url, e)))?;

        let feed_title = parsed.title.map(|t| t.content).unwrap_or_default();
        let feed_link = parsed
            .links
            .first()
            .map(|l| l.href.clone())
            .unwrap_or_else(|| source_url.to_string());

        let items = parsed
            .entries
            .into_iter()
            .map(|entry| {
                let title = entry.title.map(|t| t.content).unwrap_or_default();
                let description = entry
                    .summary
                    .map(|s| s.content)
                    .or_else(|| entry.content.and_then(|c| c.body))
                    .map(|html| Self::html_to_text(&html))
                    .unwrap_or_default();

                let username = entry
                    .authors
                    .into_iter()
                    .map(|a| a.name)
                    .find(|name| !name.is_empty())
                    .unwrap_or_else(|| feed_title.clone());

                let profile_link = entry
                    .links
                    .into_iter()
                    .map(|l| l.href)
                    .find(|href| !href.is_empty())
                    .unwrap_or_else(|| feed_link.clone());

                let media_url = entry
                    .media
                    .iter()
                    .flat_map(|m| m.content.iter())
                    .find_map(|c| c.url.as_ref().map(|u| u.to_string()));

                let timestamp = entry.published.or(entry.updated).unwrap_or_else(|| {
                    warn!(
                        "No usable date for RSS item '{}' from {}, using current time",
                        title, source_url
                    );
                    Utc::now()
                });

                FeedItem::new(
                    Platform::Rss.as_str(),
                    format!("{}\n{}", title, description),
                    username,
                    profile_link,
                )
                .with_media_url(media_url)
                .with_timestamp(timestamp)
            })
            .collect();

        Ok(items)
    }
}

impl FeedSource for RssSource {
    fn origin(&self) -> String {
        Platform::Rss.as_str().to_string()
    }

    fn describe(&self) -> String {
        format!("rss ({})", self.url)
    }

    fn fetch(&self) -> AggregatorResult<Vec<FeedItem>> {
        debug!("Fetching RSS feed from {}", self.url);
        let bytes = self.fetch_bytes()?;
        Self::items_from_bytes(&bytes, &self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SAMPLE_RSS: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Test Blog</title>
    <link>http://testblog.com</link>
    <item>
      <title>First Post</title>
      <link>http://testblog.com/first</link>
      <description><![CDATA[<p>This is the <b>first</b> post content.</p>]]></description>
      <pubDate>Wed, 01 Jan 2025 12:00:00 +0000</pubDate>
      <author>author@testblog.com (Author One)</author>
    </item>
    <item>
      <title>Second Post</title>
      <description>This is the second post content.</description>
      <pubDate>Tue, 31 Dec 2024 10:00:00 +0000</pubDate>
    </item>
  </channel>
</rss>"#;

    const SAMPLE_ATOM: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Example Tech Blog</title>
  <link href="https://example.com/"/>
  <id>https://example.com/feed.atom</id>
  <updated>2024-01-15T12:00:00Z</updated>
  <entry>
    <title>Understanding WebAssembly</title>
    <link href="https://example.com/posts/wasm-intro"/>
    <id>https://example.com/posts/wasm-intro</id>
    <updated>2024-01-15T12:00:00Z</updated>
    <author><name>Wasm Writer</name></author>
    <summary type="html"><![CDATA[<p>WebAssembly is a binary instruction format.</p>]]></summary>
  </entry>
</feed>"#;

    #[test]
    fn test_origin_is_rss() {
        let source = RssSource::new("https://example.com/feed.xml");
        assert_eq!(source.origin(), "rss");
        assert_eq!(source.describe(), "rss (https://example.com/feed.xml)");
    }

    #[test]
    fn test_rss_items_normalized() {
        let items = RssSource::items_from_bytes(SAMPLE_RSS, "http://testblog.com/rss").unwrap();

        assert_eq!(items.len(), 2);

        let first = &items[0];
        assert_eq!(first.platform, "rss");
        assert_eq!(first.post_content, "First Post\nThis is the first post content.");
        assert_eq!(first.profile_link, "http://testblog.com/first");
        assert_eq!(
            first.timestamp,
            Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
        );
        assert_eq!(first.interactions, 0);
        assert!(first.media_url.is_none());
        assert!(first.permalink.is_none());
    }

    #[test]
    fn test_rss_item_falls_back_to_channel() {
        let items = RssSource::items_from_bytes(SAMPLE_RSS, "http://testblog.com/rss").unwrap();

        let second = &items[1];
        assert_eq!(second.username, "Test Blog");
        assert!(second.profile_link.starts_with("http://testblog.com"));
    }

    #[test]
    fn test_offset_timestamps_are_converted_to_utc() {
        let feed = br#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Offset Blog</title>
    <link>http://offset.example</link>
    <item>
      <title>Morning</title>
      <link>http://offset.example/morning</link>
      <pubDate>Wed, 01 Jan 2025 12:00:00 +0200</pubDate>
    </item>
  </channel>
</rss>"#;

        let items = RssSource::items_from_bytes(feed, "http://offset.example/rss").unwrap();

        assert_eq!(
            items[0].timestamp,
            Utc.with_ymd_and_hms(2025, 1, 1, 10, 0, 0).unwrap()
        );
        assert_eq!(items[0].file_id(0), "20250101100000_0");

        let json = serde_json::to_value(&items[0]).unwrap();
        assert_eq!(json["timestamp"], "2025-01-01T10:00:00Z");
    }

    #[test]
    fn test_atom_items_normalized() {
        let items =
            RssSource::items_from_bytes(SAMPLE_ATOM, "https://example.com/feed.atom").unwrap();

        assert_eq!(items.len(), 1);
        let item = &items[0];
        assert_eq!(item.username, "Wasm Writer");
        assert_eq!(
            item.post_content,
            "Understanding WebAssembly\nWebAssembly is a binary instruction format."
        );
        assert_eq!(item.profile_link, "https://example.com/posts/wasm-intro");
    }

    #[test]
    fn test_invalid_feed_is_parse_error() {
        let result = RssSource::items_from_bytes(b"definitely not xml", "https://bad.example");

        match result {
            Err(AggregatorError::FeedParse(message)) => {
                assert!(message.contains("https://bad.example"))
            }
            other => panic!("expected FeedParse error, got {:?}", other),
        }
    }

    #[test]
    fn test_html_to_text_collapses_whitespace() {
        assert_eq!(
            RssSource::html_to_text("<p>Hello</p><p>  world <br/>again</p>"),
            "Hello world again"
        );
    }
}

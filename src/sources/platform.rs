use std::collections::HashMap;

use chrono::{Duration, Utc};
use tracing::debug;

use crate::domain::{FeedItem, Platform};
use crate::errors::{AggregatorError, AggregatorResult};
use crate::sources::traits::FeedSource;

/// A post returned by a simulated platform adapter.
struct SamplePost {
    content: &'static str,
    username: &'static str,
    media_url: Option<&'static str>,
    profile_link: &'static str,
    hours_ago: i64,
    interactions: u64,
}

/// Social platform adapter. Real API calls are out of scope, so once the
/// credential check passes each platform returns a fixed set of recent posts.
pub struct PlatformSource {
    platform: Platform,
    credentials: HashMap<String, String>,
}

impl PlatformSource {
    pub fn new(platform: Platform, credentials: HashMap<String, String>) -> Self {
        Self {
            platform,
            credentials,
        }
    }

    /// Read the platform's credentials from the environment
    pub fn from_env(platform: Platform) -> Self {
        let credentials = platform
            .required_credentials()
            .iter()
            .filter_map(|name| std::env::var(name).ok().map(|v| (name.to_string(), v)))
            .collect();

        Self::new(platform, credentials)
    }

    fn check_credentials(&self) -> AggregatorResult<()> {
        let missing: Vec<&str> = self
            .platform
            .required_credentials()
            .iter()
            .copied()
            .filter(|name| {
                self.credentials
                    .get(*name)
                    .map_or(true, |value| value.trim().is_empty())
            })
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AggregatorError::MissingCredentials {
                platform: self.platform.to_string(),
                variables: missing.join(", "),
            })
        }
    }

    fn sample_posts(&self) -> Vec<SamplePost> {
        match self.platform {
            Platform::LinkedIn => vec![
                SamplePost {
                    content: "Excited to share my latest project! #rustlang #softwaredevelopment",
                    username: "Jane Doe",
                    media_url: None,
                    profile_link: "https://linkedin.com/in/janedoe",
                    hours_ago: 2,
                    interactions: 120,
                },
                SamplePost {
                    content: "Great discussion on microservices architecture today.",
                    username: "John Smith",
                    media_url: None,
                    profile_link: "https://linkedin.com/in/johnsmith",
                    hours_ago: 24,
                    interactions: 85,
                },
            ],
            Platform::Threads => vec![
                SamplePost {
                    content: "Just posted on Threads! Loving the new features.",
                    username: "ThreadsUser1",
                    media_url: None,
                    profile_link: "https://threads.net/threadsuser1",
                    hours_ago: 1,
                    interactions: 50,
                },
                SamplePost {
                    content: "Discussing the future of decentralized social media.",
                    username: "DecentralGuru",
                    media_url: None,
                    profile_link: "https://threads.net/decentralguru",
                    hours_ago: 12,
                    interactions: 30,
                },
            ],
            Platform::X => vec![
                SamplePost {
                    content: "Just shared a new article on fearless concurrency! #rustlang #programming",
                    username: "RustDev",
                    media_url: None,
                    profile_link: "https://x.com/rustdev",
                    hours_ago: 3,
                    interactions: 200,
                },
                SamplePost {
                    content: "Excited for the upcoming tech conference!",
                    username: "TechEnthusiast",
                    media_url: None,
                    profile_link: "https://x.com/techenthusiast",
                    hours_ago: 18,
                    interactions: 90,
                },
            ],
            Platform::Instagram => vec![
                SamplePost {
                    content: "Beautiful sunset views from the beach! #travel #photography",
                    username: "TravelBug",
                    media_url: Some("https://instagram.com/p/sunset.jpg"),
                    profile_link: "https://instagram.com/travelbug",
                    hours_ago: 5,
                    interactions: 350,
                },
                SamplePost {
                    content: "New recipe alert! Delicious homemade pasta.",
                    username: "FoodieChef",
                    media_url: Some("https://instagram.com/p/pasta.jpg"),
                    profile_link: "https://instagram.com/foodiechef",
                    hours_ago: 20,
                    interactions: 280,
                },
            ],
            Platform::Reddit => vec![
                SamplePost {
                    content: "Check out this interesting discussion on r/rust!",
                    username: "FerrisFan",
                    media_url: None,
                    profile_link: "https://reddit.com/user/FerrisFan",
                    hours_ago: 6,
                    interactions: 500,
                },
                SamplePost {
                    content: "My thoughts on the latest tech news.",
                    username: "NewsReader",
                    media_url: None,
                    profile_link: "https://reddit.com/user/NewsReader",
                    hours_ago: 28,
                    interactions: 150,
                },
            ],
            Platform::Strava => vec![SamplePost {
                content: "Just completed a 10k run!",
                username: "strava_user",
                media_url: None,
                profile_link: "https://www.strava.com/athletes/strava_user",
                hours_ago: 0,
                interactions: 15,
            }],
            Platform::Goodreads => vec![SamplePost {
                content: "Finished reading 'The Hitchhiker's Guide to the Galaxy'. Highly recommend!",
                username: "goodreads_reader",
                media_url: None,
                profile_link: "https://www.goodreads.com/user/show/goodreads_reader",
                hours_ago: 0,
                interactions: 42,
            }],
            Platform::Credly => vec![SamplePost {
                content: "Earned 'Certified Kubernetes Administrator' badge!",
                username: "credly_achiever",
                media_url: None,
                profile_link: "https://www.credly.com/users/credly_achiever/badges",
                hours_ago: 0,
                interactions: 25,
            }],
            // RSS is served by RssSource
            Platform::Rss => Vec::new(),
        }
    }
}

impl FeedSource for PlatformSource {
    fn origin(&self) -> String {
        self.platform.as_str().to_string()
    }

    fn fetch(&self) -> AggregatorResult<Vec<FeedItem>> {
        self.check_credentials()?;
        debug!("Simulating {} feed fetch", self.platform);

        let now = Utc::now();
        let items = self
            .sample_posts()
            .into_iter()
            .map(|post| {
                FeedItem::new(
                    self.platform.as_str(),
                    post.content.to_string(),
                    post.username.to_string(),
                    post.profile_link.to_string(),
                )
                .with_media_url(post.media_url.map(str::to_string))
                .with_timestamp(now - Duration::hours(post.hours_ago))
                .with_interactions(post.interactions)
            })
            .collect();

        Ok(items)
    }
}

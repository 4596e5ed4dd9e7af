use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    LinkedIn,
    Threads,
    X,
    Instagram,
    Reddit,
    Strava,
    Goodreads,
    Credly,
    Rss,
}

impl Platform {
    /// Fetch order used when building the source list
    pub const ALL: [Platform; 9] = [
        Platform::LinkedIn,
        Platform::Threads,
        Platform::X,
        Platform::Instagram,
        Platform::Reddit,
        Platform::Strava,
        Platform::Goodreads,
        Platform::Credly,
        Platform::Rss,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::LinkedIn => "linkedin",
            Platform::Threads => "threads",
            Platform::X => "x",
            Platform::Instagram => "instagram",
            Platform::Reddit => "reddit",
            Platform::Strava => "strava",
            Platform::Goodreads => "goodreads",
            Platform::Credly => "credly",
            Platform::Rss => "rss",
        }
    }

    /// Environment variables that must be set before the platform can be fetched
    pub fn required_credentials(&self) -> &'static [&'static str] {
        match self {
            Platform::LinkedIn => &["LINKEDIN_API_KEY", "LINKEDIN_API_SECRET"],
            Platform::Threads => &["THREADS_API_KEY", "THREADS_API_SECRET"],
            Platform::X => &["X_API_KEY", "X_API_SECRET"],
            Platform::Instagram => &["INSTAGRAM_API_KEY", "INSTAGRAM_API_SECRET"],
            Platform::Reddit => &[
                "REDDIT_CLIENT_ID",
                "REDDIT_CLIENT_SECRET",
                "REDDIT_USERNAME",
                "REDDIT_PASSWORD",
            ],
            Platform::Strava | Platform::Goodreads | Platform::Credly | Platform::Rss => &[],
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "linkedin" => Ok(Platform::LinkedIn),
            "threads" => Ok(Platform::Threads),
            "x" | "twitter" => Ok(Platform::X),
            "instagram" => Ok(Platform::Instagram),
            "reddit" => Ok(Platform::Reddit),
            "strava" => Ok(Platform::Strava),
            "goodreads" => Ok(Platform::Goodreads),
            "credly" => Ok(Platform::Credly),
            "rss" => Ok(Platform::Rss),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

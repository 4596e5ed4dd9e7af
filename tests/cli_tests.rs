use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CREDENTIAL_VARS: &[&str] = &[
    "LINKEDIN_API_KEY",
    "LINKEDIN_API_SECRET",
    "X_API_KEY",
    "X_API_SECRET",
];

fn socialfeed_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("socialfeed").unwrap();
    // Keep a stray .env or shell environment from leaking credentials in
    cmd.current_dir(dir).env_remove("FEED_CONFIG");
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd
}

fn write_config(dir: &Path, content: &str) -> String {
    let path = dir.join("config.toml");
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    let temp_dir = TempDir::new().unwrap();

    socialfeed_cmd(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("sources"));
}

#[test]
fn test_run_help_shows_output_flag() {
    let temp_dir = TempDir::new().unwrap();

    socialfeed_cmd(temp_dir.path())
        .arg("run")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_sources_lists_fetch_order() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(
        temp_dir.path(),
        r#"
[feeds.goodreads]
enabled = true

[feeds.rss]
enabled = true
urls = ["https://example.com/feed.xml"]

[feeds.strava]
enabled = true
"#,
    );

    socialfeed_cmd(temp_dir.path())
        .args(["sources", "--config", &config])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "1. strava\n  2. goodreads\n  3. rss (https://example.com/feed.xml)",
        ));
}

#[test]
fn test_run_writes_paginated_feeds() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out");
    let config = write_config(
        temp_dir.path(),
        r#"
page_size = 2
generate_individual_items = true
generate_platform_feeds = true

[feeds.strava]
enabled = true

[feeds.goodreads]
enabled = true

[feeds.credly]
enabled = true
"#,
    );

    socialfeed_cmd(temp_dir.path())
        .args(["run", "--config", &config, "--output", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 items"));

    let meta = read_json(&output.join("meta.json"));
    assert_eq!(meta["total_items"], 3);
    assert_eq!(meta["total_pages"], 2);
    assert_eq!(
        meta["main_feed_pages"],
        serde_json::json!(["feed_page_1.json", "feed_page_2.json"])
    );
    assert_eq!(meta["individual_items_directory"], "items/");
    assert_eq!(
        meta["platform_feeds"]["strava"],
        "platforms/strava_page_1.json"
    );

    let first = read_json(&output.join("feed_page_1.json"));
    assert_eq!(first["items"].as_array().unwrap().len(), 2);
    assert!(first.get("prev_page").is_none());
    assert_eq!(first["next_page"], "feed_page_2.json");
    assert!(first["items"][0]["permalink"]
        .as_str()
        .unwrap()
        .starts_with("items/"));

    assert_eq!(fs::read_dir(output.join("items")).unwrap().count(), 3);
}

#[test]
fn test_run_survives_failing_source() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out");
    let config = write_config(
        temp_dir.path(),
        r#"
page_size = 1

[feeds.x]
enabled = true

[feeds.strava]
enabled = true
"#,
    );

    socialfeed_cmd(temp_dir.path())
        .args(["run", "--config", &config, "--output", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 warnings"))
        .stdout(predicate::str::contains("X_API_KEY"));

    let meta = read_json(&output.join("meta.json"));
    assert_eq!(meta["total_items"], 1);
    assert!(meta.get("total_pages").is_none());
    assert_eq!(meta["main_feed_pages"], serde_json::json!(["feed.json"]));

    let feed = read_json(&output.join("feed.json"));
    assert_eq!(feed[0]["platform"], "strava");
}

#[test]
fn test_run_without_sources_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_config(temp_dir.path(), "page_size = 2\n");

    socialfeed_cmd(temp_dir.path())
        .args(["run", "--config", &config])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no sources enabled"));
}

#[test]
fn test_missing_config_fails() {
    let temp_dir = TempDir::new().unwrap();

    socialfeed_cmd(temp_dir.path())
        .args(["run", "--config", "missing.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not load configuration"));
}

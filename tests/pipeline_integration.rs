use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tempfile::TempDir;

use feedmine::{
    run_pipeline, ExtractConfig, FetchError, PageFetcher, PipelineConfig, SegmentConfig,
};

/// Offline fetcher serving canned pages.
struct StubFetcher {
    pages: HashMap<String, String>,
}

impl StubFetcher {
    fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(url, body)| (url.to_string(), body.to_string()))
                .collect(),
        }
    }

    fn empty() -> Self {
        Self::new(&[])
    }
}

impl PageFetcher for StubFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        match self.pages.get(url) {
            Some(body) => Ok(body.clone()),
            None => Ok(String::new()),
        }
    }
}

const FEED: &str = "<rss version=\"2.0\"><channel>\
    <title>news</title>\
    <item><title>a</title><description>this is a test</description></item>\
    <item><title>b</title><description>this test works</description></item>\
    </channel></rss>";

fn config_in(dir: &Path) -> PipelineConfig {
    PipelineConfig {
        feed_path: dir.join("news.rss"),
        description_path: dir.join("description.txt"),
        tokenized_path: dir.join("tokenized.txt"),
        feature_path: dir.join("features.txt"),
        ..PipelineConfig::default()
    }
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn full_run_writes_all_three_artifacts() {
    let dir = TempDir::new().unwrap();
    let cfg = config_in(dir.path());
    fs::write(&cfg.feed_path, FEED).unwrap();

    let summary = run_pipeline(&cfg, &StubFetcher::empty()).unwrap();
    assert_eq!(summary.units, 2);
    assert_eq!(summary.sequences, 2);
    assert_eq!(summary.matrix_shape.0, 2);

    let descriptions = read_lines(&cfg.description_path);
    assert_eq!(descriptions, vec!["this is a test", "this test works"]);

    let tokenized = read_lines(&cfg.tokenized_path);
    assert_eq!(tokenized.len(), 2);
    assert!(tokenized[0].contains("test"));

    let features = read_lines(&cfg.feature_path);
    assert_eq!(features.len(), 2);
    // "token line, [v0, v1, ...]" per corpus entry.
    assert!(features[0].contains(", ["));
    assert!(features[0].starts_with(&tokenized[0]));
}

#[test]
fn filtering_removes_space_tokens_from_output() {
    let dir = TempDir::new().unwrap();
    let mut cfg = config_in(dir.path());
    cfg.segment = SegmentConfig {
        filter_invalid: true,
    };
    fs::write(&cfg.feed_path, FEED).unwrap();

    run_pipeline(&cfg, &StubFetcher::empty()).unwrap();

    let tokenized = read_lines(&cfg.tokenized_path);
    assert_eq!(tokenized[0], "this is a test");
}

#[test]
fn resolved_links_replace_descriptions_in_artifacts() {
    let dir = TempDir::new().unwrap();
    let mut cfg = config_in(dir.path());
    cfg.extract = ExtractConfig {
        resolve_links: true,
        ..ExtractConfig::default()
    };
    let feed = "<rss><channel>\
        <item><description>&lt;a href=\"http://x\"&gt;t&lt;/a&gt;</description></item>\
        <item><description>plain entry</description></item>\
        </channel></rss>";
    fs::write(&cfg.feed_path, feed).unwrap();

    let fetcher = StubFetcher::new(&[("http://x", "linked page body")]);
    let summary = run_pipeline(&cfg, &fetcher).unwrap();
    assert_eq!(summary.units, 2);

    let descriptions = read_lines(&cfg.description_path);
    assert_eq!(descriptions, vec!["linked page body", "plain entry"]);
}

#[test]
fn empty_link_bodies_contribute_no_units() {
    let dir = TempDir::new().unwrap();
    let mut cfg = config_in(dir.path());
    cfg.extract = ExtractConfig {
        resolve_links: true,
        ..ExtractConfig::default()
    };
    let feed = "<rss><channel>\
        <item><description>&lt;a href=\"http://gone\"&gt;t&lt;/a&gt;</description></item>\
        </channel></rss>";
    fs::write(&cfg.feed_path, feed).unwrap();

    // StubFetcher returns an empty body for unknown URLs, the non-200 shape.
    let summary = run_pipeline(&cfg, &StubFetcher::empty()).unwrap();
    assert_eq!(summary.units, 0);
    assert_eq!(summary.matrix_shape, (0, 0));
}

#[test]
fn renew_writes_the_feed_before_processing() {
    let dir = TempDir::new().unwrap();
    let mut cfg = config_in(dir.path());
    cfg.renew = true;
    cfg.feed_url = "http://feed".to_string();

    let fetcher = StubFetcher::new(&[("http://feed", FEED)]);
    let summary = run_pipeline(&cfg, &fetcher).unwrap();
    assert_eq!(summary.units, 2);
    assert_eq!(fs::read_to_string(&cfg.feed_path).unwrap(), FEED);
}

#[test]
fn vectorizer_parameters_flow_through_the_run() {
    let dir = TempDir::new().unwrap();
    let mut cfg = config_in(dir.path());
    cfg.min_df = Some("2".to_string());
    fs::write(&cfg.feed_path, FEED).unwrap();

    let summary = run_pipeline(&cfg, &StubFetcher::empty()).unwrap();
    let baseline = {
        let dir = TempDir::new().unwrap();
        let cfg = {
            let mut cfg = config_in(dir.path());
            fs::write(&cfg.feed_path, FEED).unwrap();
            cfg.min_df = None;
            cfg
        };
        run_pipeline(&cfg, &StubFetcher::empty()).unwrap()
    };
    assert!(summary.matrix_shape.1 < baseline.matrix_shape.1);
}

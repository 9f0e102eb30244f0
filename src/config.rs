use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Central configuration loaded from environment variables.
///
/// CLI flags override these per run; the scoring core itself never reads
/// the environment, it receives constructed sets and settings. The .env
/// file is loaded automatically at startup via dotenvy.
#[derive(Debug, Default)]
pub struct Config {
    /// Stopword list path (CARBON_STOPWORDS). Unset means the built-in
    /// default set.
    pub stopwords_path: Option<PathBuf>,
    /// Custom segmentation dictionary path (CARBON_DICT). Unset means the
    /// segmenter's bundled dictionary only.
    pub dict_path: Option<PathBuf>,
    /// Keep single-character tokens (CARBON_KEEP_SINGLE).
    pub keep_single: bool,
    /// Vocabulary cap (CARBON_MAX_FEATURES).
    pub max_features: Option<usize>,
    /// Disable 2-gram features (CARBON_UNIGRAMS_ONLY).
    pub unigrams_only: bool,
}

impl Config {
    /// Load configuration from environment variables. Every field has a
    /// working default; nothing here is required.
    pub fn load() -> Result<Self> {
        let max_features = match env::var("CARBON_MAX_FEATURES") {
            Ok(raw) => Some(
                raw.parse()
                    .with_context(|| format!("CARBON_MAX_FEATURES is not a number: {raw}"))?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            stopwords_path: env::var("CARBON_STOPWORDS").ok().map(PathBuf::from),
            dict_path: env::var("CARBON_DICT").ok().map(PathBuf::from),
            keep_single: flag("CARBON_KEEP_SINGLE"),
            max_features,
            unigrams_only: flag("CARBON_UNIGRAMS_ONLY"),
        })
    }
}

fn flag(name: &str) -> bool {
    matches!(env::var(name).as_deref(), Ok("1") | Ok("true") | Ok("yes"))
}

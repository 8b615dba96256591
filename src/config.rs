//! Explicit run configuration. The CLI fills these in; tests build them by hand.

use std::path::PathBuf;
use std::time::Duration;

use crate::images::{DEFAULT_LOOKUP_FALLBACK, DEFAULT_PLACEHOLDER_HOST, DEFAULT_PLACEHOLDER_SET};

pub const DEFAULT_BOUNTY_URL: &str = "https://api.api-onepiece.com/v2/characters/en";
/// MAL anime id 21 is One Piece.
pub const DEFAULT_IMAGE_URL: &str = "https://api.jikan.moe/v4/anime/21/characters";
pub const DEFAULT_DATASET_PATH: &str = "data/characters.json";
pub const DEFAULT_README_PATH: &str = "README.md";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Which image policy a dataset build uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMode {
    Placeholder,
    Lookup,
}

impl ImageMode {
    /// Number of characters kept when `--limit` is not given.
    pub fn default_limit(self) -> usize {
        match self {
            ImageMode::Placeholder => 100,
            ImageMode::Lookup => 50,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub bounty_url: String,
    pub image_url: String,
    pub output: PathBuf,
    pub mode: ImageMode,
    pub limit: usize,
    pub placeholder_host: String,
    pub placeholder_set: String,
    pub lookup_fallback: String,
    pub timeout: Duration,
}

impl BuildConfig {
    pub fn new(mode: ImageMode) -> Self {
        Self {
            bounty_url: DEFAULT_BOUNTY_URL.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            output: PathBuf::from(DEFAULT_DATASET_PATH),
            mode,
            limit: mode.default_limit(),
            placeholder_host: DEFAULT_PLACEHOLDER_HOST.to_string(),
            placeholder_set: DEFAULT_PLACEHOLDER_SET.to_string(),
            lookup_fallback: DEFAULT_LOOKUP_FALLBACK.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new(ImageMode::Placeholder)
    }
}

#[derive(Debug, Clone)]
pub struct PickConfig {
    pub dataset: PathBuf,
    pub readme: PathBuf,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET_PATH),
            readme: PathBuf::from(DEFAULT_README_PATH),
        }
    }
}

//! Building, writing and loading the character dataset file.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::bounty::format_bounty;
use crate::config::{BuildConfig, ImageMode};
use crate::data::{self, BROWSER_USER_AGENT};
use crate::images::{ImageResolver, build_image_map};
use crate::model::{CharacterRecord, RawCharacterItem};
use crate::ranking::{RankedCharacter, rank_top};

/// Number of characters of a broken dataset shown in the parse error.
const PREVIEW_CHARS: usize = 200;

/// Fatal problems with the dataset file when picking a character.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error(
        "dataset file not found: {}\n-> run `bounty-readme build` to create it first",
        path.display()
    )]
    Missing { path: PathBuf },
    #[error(
        "dataset file is empty: {}\n-> check that the build wrote characters into it",
        path.display()
    )]
    Empty { path: PathBuf },
    #[error(
        "dataset is not valid JSON\nfile preview: {preview}\n-> a failed download may have saved HTML or plain text"
    )]
    InvalidJson { preview: String },
    #[error("dataset must be a non-empty JSON array")]
    NotNonEmptyArray,
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Attaches an image and the display formatting to each ranked character.
pub fn build_records(ranked: Vec<RankedCharacter>, resolver: &ImageResolver) -> Vec<CharacterRecord> {
    ranked
        .into_iter()
        .map(|character| {
            let image = resolver.resolve(&character.name);
            CharacterRecord {
                epithet: if character.epithet.is_empty() {
                    "N/A".to_string()
                } else {
                    character.epithet
                },
                bounty: format_bounty(character.bounty),
                images: vec![image],
                name: character.name,
            }
        })
        .collect()
}

/// Runs the ranking and image pipeline over already-fetched characters.
pub fn build_from_items(
    items: Vec<RawCharacterItem>,
    limit: usize,
    resolver: &ImageResolver,
) -> Vec<CharacterRecord> {
    let ranked = rank_top(items, limit);
    log::info!("kept {} characters with a bounty", ranked.len());
    build_records(ranked, resolver)
}

/// Fetches everything the configured build needs, then writes the dataset.
///
/// Nothing is written unless every download succeeded.
pub fn build(config: &BuildConfig) -> Result<Vec<CharacterRecord>> {
    let user_agent = match config.mode {
        ImageMode::Placeholder => None,
        ImageMode::Lookup => Some(BROWSER_USER_AGENT),
    };
    let client = data::http_client(config.timeout, user_agent)?;

    let resolver = match config.mode {
        ImageMode::Placeholder => {
            ImageResolver::placeholder(&config.placeholder_host, &config.placeholder_set)
        }
        ImageMode::Lookup => {
            let source = data::fetch_image_source(&client, &config.image_url)?;
            let map = build_image_map(&source);
            log::info!("image map holds {} names", map.len());
            ImageResolver::lookup(map, &config.lookup_fallback)
        }
    };

    let items = data::fetch_characters(&client, &config.bounty_url)?;
    let records = build_from_items(items, config.limit, &resolver);
    write_dataset(&config.output, &records)?;
    Ok(records)
}

/// Overwrites `path` with the records as indented JSON, creating parent directories.
pub fn write_dataset(path: &Path, records: &[CharacterRecord]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let text = serde_json::to_string_pretty(records)?;
    fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Reads the dataset as loose JSON records, rejecting anything but a non-empty array.
pub fn load_dataset(path: &Path) -> Result<Vec<Value>, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::Missing {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw = content.trim();
    if raw.is_empty() {
        return Err(DatasetError::Empty {
            path: path.to_path_buf(),
        });
    }

    let parsed: Value = serde_json::from_str(raw).map_err(|_| DatasetError::InvalidJson {
        preview: preview(raw),
    })?;

    match parsed {
        Value::Array(records) if !records.is_empty() => Ok(records),
        _ => Err(DatasetError::NotNonEmptyArray),
    }
}

fn preview(raw: &str) -> String {
    raw.chars()
        .take(PREVIEW_CHARS)
        .collect::<String>()
        .replace('\n', "\\n")
}

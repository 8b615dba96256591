//! Picks a random dataset entry and splices it into the README markers.

use anyhow::{Context, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde_json::Value;
use std::fs;

use crate::config::PickConfig;
use crate::dataset::{DatasetError, load_dataset};
use crate::lookup::{first_text, image_value};
use crate::template::{Markers, replace_between};

/// Candidate keys and fallback text for one displayed field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub keys: &'static [&'static str],
    pub fallback: &'static str,
}

impl FieldRule {
    pub fn resolve(&self, record: &Value) -> String {
        first_text(record, self.keys).unwrap_or_else(|| self.fallback.to_string())
    }
}

pub const NAME_RULE: FieldRule = FieldRule {
    keys: &["English Name", "Official English Name", "engName", "name"],
    fallback: "Unknown",
};
pub const EPITHET_RULE: FieldRule = FieldRule {
    keys: &["Epithet", "epithet"],
    fallback: "N/A",
};
pub const BOUNTY_RULE: FieldRule = FieldRule {
    keys: &["Bounty", "bounty"],
    fallback: "N/A",
};
pub const IMAGE_FALLBACK: &str = "https://placehold.co/600x400?text=No+Image";

/// The display fields of the chosen character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub name: String,
    pub epithet: String,
    pub bounty: String,
    pub image: String,
}

impl Selection {
    pub fn from_record(record: &Value) -> Self {
        Self {
            name: NAME_RULE.resolve(record),
            epithet: EPITHET_RULE.resolve(record),
            bounty: BOUNTY_RULE.resolve(record),
            image: image_value(record).unwrap_or_else(|| IMAGE_FALLBACK.to_string()),
        }
    }
}

/// The four marker pairs the README carries.
#[derive(Debug, Clone)]
pub struct MarkerSet {
    pub name: Markers,
    pub epithet: Markers,
    pub bounty: Markers,
    pub image: Markers,
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self {
            name: Markers::new("<!--OP_CHAR_NAME_START-->", "<!--OP_CHAR_NAME_END-->"),
            epithet: Markers::new("<!--OP_CHAR_EPITHET_START-->", "<!--OP_CHAR_EPITHET_END-->"),
            bounty: Markers::new("<!--OP_CHAR_BOUNTY_START-->", "<!--OP_CHAR_BOUNTY_END-->"),
            image: Markers::new("<!--OP_CHAR_IMG_START-->", "<!--OP_CHAR_IMG_END-->"),
        }
    }
}

/// Chooses one record uniformly at random; `None` only for an empty slice.
pub fn select<'a, R: Rng + ?Sized>(records: &'a [Value], rng: &mut R) -> Option<&'a Value> {
    records.choose(rng)
}

/// Rewrites every marked region of `doc` with the selection's fields.
pub fn patch_document(doc: &str, selection: &Selection, markers: &MarkerSet) -> String {
    let doc = replace_between(doc, &markers.name, &selection.name);
    let doc = replace_between(&doc, &markers.epithet, &selection.epithet);
    let doc = replace_between(&doc, &markers.bounty, &selection.bounty);
    let image_line = format!("\n![Character]({})\n", selection.image);
    replace_between(&doc, &markers.image, &image_line)
}

/// Loads the dataset, picks a character and rewrites the README in place.
///
/// The README is only written once every earlier step has succeeded.
pub fn run<R: Rng + ?Sized>(config: &PickConfig, rng: &mut R) -> Result<Selection> {
    let records = load_dataset(&config.dataset)?;
    let record = select(&records, rng).ok_or(DatasetError::NotNonEmptyArray)?;
    let selection = Selection::from_record(record);
    log::debug!("selected record {record}");

    let doc = fs::read_to_string(&config.readme)
        .with_context(|| format!("failed to read {}", config.readme.display()))?;
    let patched = patch_document(&doc, &selection, &MarkerSet::default());
    fs::write(&config.readme, patched)
        .with_context(|| format!("failed to write {}", config.readme.display()))?;

    Ok(selection)
}

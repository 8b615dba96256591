//! Data model for the bounty API, the image API and the persisted dataset.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One element of the bounty API response, with loose fields already flattened.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCharacterItem {
    /// Display name, trimmed. Empty when the API sent null or nothing.
    pub name: String,
    /// The character's job, used as the epithet. Trimmed, possibly empty.
    pub job: String,
    /// The untouched bounty value (string, number or null).
    pub bounty: Value,
}

impl<'de> Deserialize<'de> for RawCharacterItem {
    /// `name` and `job` show up as strings, nulls or not at all depending on
    /// the character, so they are collapsed into trimmed strings here.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Proxy {
            name: Option<Value>,
            job: Option<Value>,
            bounty: Option<Value>,
        }

        let proxy = Proxy::deserialize(deserializer)?;

        Ok(RawCharacterItem {
            name: text_or_empty(proxy.name.as_ref()),
            job: text_or_empty(proxy.job.as_ref()),
            bounty: proxy.bounty.unwrap_or(Value::Null),
        })
    }
}

fn text_or_empty(value: Option<&Value>) -> String {
    value
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

/// A persisted dataset entry. Field names and order are part of the file format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub name: String,
    #[serde(rename = "Epithet")]
    pub epithet: String,
    #[serde(rename = "Bounty")]
    pub bounty: String,
    #[serde(rename = "Images")]
    pub images: Vec<String>,
}

/// Root of the anime character API response (`/anime/{id}/characters`).
#[derive(Debug, Default, Deserialize)]
pub struct ImageSourceResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<ImageSourceEntry>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ImageSourceEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub character: ImageSourceCharacter,
}

/// A character of the image API. A null or non-string name collapses to empty,
/// which the image map treats as "skip this entry".
#[derive(Debug, Default)]
pub struct ImageSourceCharacter {
    pub name: String,
    pub images: Option<Value>,
}

impl<'de> Deserialize<'de> for ImageSourceCharacter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Proxy {
            name: Option<Value>,
            images: Option<Value>,
        }

        let proxy = Proxy::deserialize(deserializer)?;

        Ok(ImageSourceCharacter {
            name: text_or_empty(proxy.name.as_ref()),
            images: proxy.images,
        })
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ImageSourceCharacter {
    /// Resolves `images.jpg.image_url`, falling back to `images.jpg.large_image_url`.
    pub fn image_url(&self) -> Option<&str> {
        let jpg = self.images.as_ref()?.get("jpg")?;
        ["image_url", "large_image_url"]
            .iter()
            .filter_map(|key| jpg.get(key).and_then(|v| v.as_str()))
            .find(|url| !url.is_empty())
    }
}

//! Image URL resolution for dataset records.

use indexmap::IndexMap;

use crate::model::ImageSourceResponse;
use crate::names::normalize_name;

pub const DEFAULT_PLACEHOLDER_HOST: &str = "robohash.org";
pub const DEFAULT_PLACEHOLDER_SET: &str = "set4";
pub const DEFAULT_LOOKUP_FALLBACK: &str = "https://placehold.co/600x400?text=One+Piece";

/// How a character name becomes an image URL. Resolution never fails.
#[derive(Debug, Clone)]
pub enum ImageResolver {
    /// Generated avatar derived only from the name; never fetched by us.
    Placeholder { host: String, set: String },
    /// Normalized-name map built from the image API, with a fixed fallback URL.
    Lookup {
        map: IndexMap<String, String>,
        fallback: String,
    },
}

impl ImageResolver {
    pub fn placeholder(host: impl Into<String>, set: impl Into<String>) -> Self {
        Self::Placeholder {
            host: host.into(),
            set: set.into(),
        }
    }

    pub fn lookup(map: IndexMap<String, String>, fallback: impl Into<String>) -> Self {
        Self::Lookup {
            map,
            fallback: fallback.into(),
        }
    }

    pub fn resolve(&self, name: &str) -> String {
        match self {
            Self::Placeholder { host, set } => placeholder_url(host, set, name),
            Self::Lookup { map, fallback } => lookup_url(map, name)
                .map(str::to_string)
                .unwrap_or_else(|| {
                    log::debug!("no image match for {name:?}, using fallback");
                    fallback.clone()
                }),
        }
    }
}

fn placeholder_url(host: &str, set: &str, name: &str) -> String {
    format!(
        "https://{}/{}.png?size=600x400&set={}",
        host,
        urlencoding::encode(name),
        set
    )
}

/// Exact normalized-key match first, then the first key (in insertion order)
/// that contains or is contained in the normalized name.
fn lookup_url<'a>(map: &'a IndexMap<String, String>, name: &str) -> Option<&'a str> {
    let key = normalize_name(name);
    if let Some(url) = map.get(&key) {
        return Some(url.as_str());
    }
    if key.is_empty() {
        return None;
    }

    map.iter()
        .find(|(candidate, _)| candidate.contains(&key) || key.contains(candidate.as_str()))
        .map(|(candidate, url)| {
            log::debug!("weak image match for {name:?} via {candidate:?}");
            url.as_str()
        })
}

/// Builds the normalized-name -> image URL map from the image API response.
///
/// Entries without a name, an image, or a non-empty key are skipped. A repeated
/// key takes the later URL but keeps its first position.
pub fn build_image_map(response: &ImageSourceResponse) -> IndexMap<String, String> {
    let mut map = IndexMap::new();
    for entry in &response.data {
        let character = &entry.character;
        let Some(url) = character.image_url() else {
            continue;
        };
        let key = normalize_name(&character.name);
        if key.is_empty() {
            continue;
        }
        map.insert(key, url.to_string());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lookup_resolver(pairs: &[(&str, &str)]) -> ImageResolver {
        let map = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ImageResolver::lookup(map, DEFAULT_LOOKUP_FALLBACK)
    }

    #[test]
    fn test_placeholder_is_deterministic() {
        let resolver = ImageResolver::placeholder(DEFAULT_PLACEHOLDER_HOST, DEFAULT_PLACEHOLDER_SET);
        let url = resolver.resolve("Monkey D. Luffy");
        assert_eq!(
            url,
            "https://robohash.org/Monkey%20D.%20Luffy.png?size=600x400&set=set4"
        );
        assert_eq!(url, resolver.resolve("Monkey D. Luffy"));
    }

    #[test]
    fn test_placeholder_custom_host_and_set() {
        let resolver = ImageResolver::placeholder("avatars.local", "set2");
        assert_eq!(
            resolver.resolve("Nami"),
            "https://avatars.local/Nami.png?size=600x400&set=set2"
        );
    }

    #[test]
    fn test_lookup_exact_match() {
        let resolver = lookup_resolver(&[("roronoazoro", "zoro.jpg"), ("luffy", "luffy.jpg")]);
        assert_eq!(resolver.resolve("Roronoa Zoro"), "zoro.jpg");
        assert_eq!(resolver.resolve("Monkey D. Luffy"), "luffy.jpg");
    }

    #[test]
    fn test_lookup_substring_both_directions() {
        let resolver = lookup_resolver(&[("nicorobin", "robin.jpg"), ("sanjivinsmoke", "sanji.jpg")]);
        // map key contains the name
        assert_eq!(resolver.resolve("Sanji"), "sanji.jpg");
        // name contains the map key
        assert_eq!(resolver.resolve("Nico Robin (Miss All Sunday)"), "robin.jpg");
    }

    #[test]
    fn test_lookup_first_key_wins() {
        let resolver = lookup_resolver(&[("donquixotedoflamingo", "doffy.jpg"), ("donquixoterosinante", "cora.jpg")]);
        assert_eq!(resolver.resolve("Donquixote"), "doffy.jpg");
    }

    #[test]
    fn test_lookup_falls_back_to_placeholder() {
        let resolver = lookup_resolver(&[("nami", "nami.jpg")]);
        assert_eq!(resolver.resolve("Kaido"), DEFAULT_LOOKUP_FALLBACK);
        assert_eq!(resolver.resolve("..."), DEFAULT_LOOKUP_FALLBACK);

        let custom = ImageResolver::lookup(IndexMap::new(), "https://img.local/none.png");
        assert_eq!(custom.resolve("Kaido"), "https://img.local/none.png");
    }

    #[test]
    fn test_build_image_map() {
        let response: ImageSourceResponse = serde_json::from_value(json!({
            "data": [
                {"character": {"name": "Monkey D. Luffy", "images": {"jpg": {"image_url": "l1.jpg"}}}},
                {"character": {"name": "Zoro, Roronoa", "images": {"jpg": {"large_image_url": "z.jpg"}}}},
                {"character": {"name": "Nobody"}},
                {"character": {"name": "???", "images": {"jpg": {"image_url": "q.jpg"}}}},
                {"character": {"name": "Luffy", "images": {"jpg": {"image_url": "l2.jpg"}}}}
            ]
        }))
        .unwrap();

        let map = build_image_map(&response);
        let entries: Vec<(&str, &str)> = map.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        assert_eq!(entries, vec![("luffy", "l2.jpg"), ("zorororonoa", "z.jpg")]);
    }

    #[test]
    fn test_build_image_map_skips_null_names() {
        let response: ImageSourceResponse = serde_json::from_value(json!({
            "data": [
                {"character": {"name": null, "images": {"jpg": {"image_url": "x.jpg"}}}},
                {"character": null},
                {"character": {"name": "Nami", "images": {"jpg": {"image_url": "nami.jpg"}}}}
            ]
        }))
        .unwrap();

        let map = build_image_map(&response);
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("nami").map(String::as_str), Some("nami.jpg"));
    }
}

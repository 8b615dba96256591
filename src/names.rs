/// Known multi-part names and the short form the image source files them under.
const NAME_ALIASES: [(&str, &str); 1] = [("monkeydluffy", "luffy")];

/// Builds the comparison key used to match character names across data sources.
///
/// Lower-cases the name and drops everything that is not a letter or digit
/// (underscores included), then applies the hard-coded aliases.
pub fn normalize_name(name: &str) -> String {
    let mut key: String = name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect();

    for (long, short) in NAME_ALIASES {
        if key.contains(long) {
            key = key.replace(long, short);
        }
    }
    key
}

/// A literal start/end marker pair delimiting a replaceable region of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Markers {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// Replaces the content between every `start`/`end` marker pair with `replacement`.
///
/// Each start marker pairs with the nearest end marker after it, and the span
/// may cross lines. The markers themselves are kept. A start marker without a
/// following end marker, or a document without markers, is left untouched.
pub fn replace_between(doc: &str, markers: &Markers, replacement: &str) -> String {
    let mut out = String::with_capacity(doc.len() + replacement.len());
    let mut rest = doc;

    loop {
        let Some(start_pos) = rest.find(markers.start.as_str()) else {
            break;
        };
        let inner_start = start_pos + markers.start.len();
        let Some(end_rel) = rest[inner_start..].find(markers.end.as_str()) else {
            break;
        };
        let end_pos = inner_start + end_rel;

        out.push_str(&rest[..inner_start]);
        out.push_str(replacement);
        out.push_str(&markers.end);
        rest = &rest[end_pos + markers.end.len()..];
    }

    out.push_str(rest);
    out
}

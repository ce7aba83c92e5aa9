//! Search term handling: percent-encoded search URLs and the case-variant
//! set used to decide whether a page mentions the term.

use crate::Error;

/// A validated search term plus its derived match variants. Built once per
/// search and read-only afterwards.
#[derive(Clone, Debug)]
pub struct SearchQuery {
    term: String,
    variants: Vec<String>,
}

impl SearchQuery {
    /// Validates the term and precomputes its match variants: the original,
    /// full uppercase, full lowercase, and the sentence-case forms made by
    /// capitalizing the first one or two characters. The two-character form
    /// covers scripts where the listing capitalizes a multi-byte leading
    /// letter; it is skipped for single-character terms.
    pub fn new(term: &str) -> Result<Self, Error> {
        if term.is_empty() {
            return Err(Error::InvalidQuery(
                "search term must not be empty".to_string(),
            ));
        }

        let mut variants = vec![term.to_string()];
        let mut push = |v: String| {
            if !variants.contains(&v) {
                variants.push(v);
            }
        };
        push(term.to_uppercase());
        push(term.to_lowercase());
        push(capitalize_leading(term, 1));
        if term.chars().count() >= 2 {
            push(capitalize_leading(term, 2));
        }

        Ok(Self {
            term: term.to_string(),
            variants,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Returns true iff `text` contains any of the term's variants.
    pub fn matches(&self, text: &str) -> bool {
        self.variants.iter().any(|v| text.contains(v.as_str()))
    }

    /// Builds the store search URL for this term. The raw UTF-8 bytes of
    /// the term are encoded as uppercase `%XX` pairs, so a multi-byte
    /// character produces consecutive groups: `Сбербанк` becomes
    /// `q=%D0%A1%D0%B1...`. An empty term would yield `q=&c=apps`, but
    /// [`SearchQuery::new`] rejects empty terms before that point.
    pub fn search_url(&self, base: &str) -> String {
        let encoded: String = self.term.bytes().map(|b| format!("%{:02X}", b)).collect();
        format!("{}/store/search?q={}&c=apps", base.trim_end_matches('/'), encoded)
    }
}

/// Uppercases the first `count` characters and leaves the rest untouched.
fn capitalize_leading(term: &str, count: usize) -> String {
    let mut chars = term.chars();
    let head: String = chars
        .by_ref()
        .take(count)
        .flat_map(char::to_uppercase)
        .collect();
    format!("{}{}", head, chars.as_str())
}

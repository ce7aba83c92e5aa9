//! Field extraction from Play Store markup.
//!
//! All attribute values the extractor keys on live in [`SelectorConfig`],
//! so tests (and alternate markup schemas) can swap them without touching
//! the traversal code.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::types::AppRecord;

/// Attribute values that identify the interesting elements on the listing
/// and detail pages. Immutable once constructed; `Default` carries the
/// Play Store values.
#[derive(Clone, Debug)]
pub struct SelectorConfig {
    /// Class of the listing-page anchors that link to app detail pages.
    pub app_card_class: String,
    /// Class of the detail-page block that holds the app fields.
    pub main_content_class: String,
    pub name_itemprop: String,
    pub description_itemprop: String,
    pub updated_itemprop: String,
    pub rating_class: String,
    pub review_count_class: String,
    pub author_class: String,
    pub category_class: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            app_card_class: "card-click-target".to_string(),
            main_content_class: "main-content".to_string(),
            name_itemprop: "name".to_string(),
            description_itemprop: "description".to_string(),
            updated_itemprop: "datePublished".to_string(),
            rating_class: "tiny-star star-rating-non-editable-container".to_string(),
            review_count_class: "reviews-stats".to_string(),
            author_class: "document-subtitle primary".to_string(),
            category_class: "document-subtitle category".to_string(),
        }
    }
}

/// Record fields read from an element's text, keyed by `itemprop`.
enum ItempropField {
    Name,
    Description,
    LastUpdated,
}

/// Record fields keyed by `class` inside the main-content block. Rating is
/// read from the element's `aria-label` attribute, not its text.
enum ClassField {
    Rating,
    ReviewCount,
}

impl SelectorConfig {
    fn itemprop_field(&self, value: &str) -> Option<ItempropField> {
        if value == self.name_itemprop {
            Some(ItempropField::Name)
        } else if value == self.description_itemprop {
            Some(ItempropField::Description)
        } else if value == self.updated_itemprop {
            Some(ItempropField::LastUpdated)
        } else {
            None
        }
    }

    fn class_field(&self, value: &str) -> Option<ClassField> {
        if value == self.rating_class {
            Some(ClassField::Rating)
        } else if value == self.review_count_class {
            Some(ClassField::ReviewCount)
        } else {
            None
        }
    }
}

/// Extracts the app fields from a detail page. Fields the page does not
/// carry stay empty; unrecognized attribute values are ignored.
pub fn extract_record(html: &str, cfg: &SelectorConfig, url: String) -> AppRecord {
    let doc = Html::parse_document(html);
    let mut record = AppRecord::new(url);
    // The two passes write disjoint record fields and share the read-only
    // document, so they can run in either order.
    extract_byline(&doc, cfg, &mut record);
    extract_main_content(&doc, cfg, &mut record);
    record
}

/// Collects the detail-page URLs from a listing page: every anchor whose
/// class equals the app-card marker, with its `href` resolved against
/// `base`. Anchors without a usable `href` are skipped.
pub fn listing_links(html: &str, cfg: &SelectorConfig, base: &Url) -> Vec<String> {
    let doc = Html::parse_document(html);
    let Ok(anchors) = Selector::parse("a") else {
        return Vec::new();
    };
    doc.select(&anchors)
        .filter(|a| a.value().attr("class") == Some(cfg.app_card_class.as_str()))
        .filter_map(|a| a.value().attr("href"))
        .filter_map(|href| base.join(href).ok())
        .map(String::from)
        .collect()
}

/// Author and category come from top-level anchors tagged with their own
/// class markers, outside the main-content block.
fn extract_byline(doc: &Html, cfg: &SelectorConfig, record: &mut AppRecord) {
    let Ok(anchors) = Selector::parse("a") else {
        return;
    };
    for a in doc.select(&anchors) {
        let Some(class) = a.value().attr("class") else {
            continue;
        };
        if class == cfg.author_class {
            record.author = element_text(&a);
        } else if class == cfg.category_class {
            record.category = element_text(&a);
        }
    }
}

fn extract_main_content(doc: &Html, cfg: &SelectorConfig, record: &mut AppRecord) {
    let Ok(divs) = Selector::parse("div") else {
        return;
    };
    for div in doc.select(&divs) {
        if div.value().attr("class") != Some(cfg.main_content_class.as_str()) {
            continue;
        }
        for kid in div.select(&divs) {
            if let Some(value) = kid.value().attr("itemprop") {
                match cfg.itemprop_field(value) {
                    Some(ItempropField::Name) => record.name = element_text(&kid),
                    Some(ItempropField::Description) => {
                        record.description = element_text(&kid)
                    }
                    Some(ItempropField::LastUpdated) => {
                        record.last_updated = element_text(&kid)
                    }
                    None => {}
                }
            } else if let Some(value) = kid.value().attr("class") {
                match cfg.class_field(value) {
                    Some(ClassField::Rating) => {
                        record.rating = kid
                            .value()
                            .attr("aria-label")
                            .unwrap_or_default()
                            .trim()
                            .to_string();
                    }
                    Some(ClassField::ReviewCount) => {
                        record.review_count = element_text(&kid)
                    }
                    None => {}
                }
            }
        }
    }
}

fn element_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

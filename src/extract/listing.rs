//! Listing extraction from rendered page markup
//!
//! Parses the full page source with the `scraper` crate, selects every
//! listing item node, and reads the six record fields through the
//! configured sub-selectors.

use crate::config::SelectorConfig;
use crate::extract::record::ProductRecord;
use crate::ConfigError;
use scraper::{ElementRef, Html, Selector};

/// Number of trailing characters stripped from the deal-count text
///
/// Matches the fixed "人付款" suffix on the site's buyer-count labels.
/// Shorter strings truncate to empty rather than keeping a partial suffix.
const DEAL_SUFFIX_CHARS: usize = 3;

/// Pre-compiled selectors for the item list and the six per-item fields
pub struct ListingSelectors {
    item: Selector,
    image: Selector,
    price: Selector,
    deal: Selector,
    title: Selector,
    shop: Selector,
    location: Selector,
}

impl ListingSelectors {
    /// Compiles the configured CSS selectors once, up front
    ///
    /// Validation already checks that these parse; compiling here keeps the
    /// per-page extraction free of selector errors.
    pub fn compile(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            item: compile(&config.item, "item")?,
            image: compile(&config.fields.image, "fields.image")?,
            price: compile(&config.fields.price, "fields.price")?,
            deal: compile(&config.fields.deal, "fields.deal")?,
            title: compile(&config.fields.title, "fields.title")?,
            shop: compile(&config.fields.shop, "fields.shop")?,
            location: compile(&config.fields.location, "fields.location")?,
        })
    }
}

fn compile(value: &str, name: &str) -> Result<Selector, ConfigError> {
    Selector::parse(value).map_err(|e| ConfigError::InvalidSelector {
        name: name.to_string(),
        message: e.to_string(),
    })
}

/// Extracts every product listing from a rendered result page
///
/// Returns one record per matched item node, in document order. Missing
/// sub-fields yield empty strings rather than dropping the record.
pub fn extract_listings(html: &str, selectors: &ListingSelectors) -> Vec<ProductRecord> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.item)
        .map(|item| extract_one(item, selectors))
        .collect()
}

/// Builds a single record from one listing item node
fn extract_one(item: ElementRef<'_>, selectors: &ListingSelectors) -> ProductRecord {
    ProductRecord {
        image: field_attr(item, &selectors.image, "src"),
        price: field_text(item, &selectors.price),
        deal: trim_deal_suffix(&field_text(item, &selectors.deal)),
        title: field_text(item, &selectors.title),
        shop: field_text(item, &selectors.shop),
        location: field_text(item, &selectors.location),
    }
}

/// Reads an attribute from the first descendant matching the selector
fn field_attr(item: ElementRef<'_>, selector: &Selector, attr: &str) -> String {
    item.select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .unwrap_or_default()
        .to_string()
}

/// Reads whitespace-normalized text from the first matching descendant
fn field_text(item: ElementRef<'_>, selector: &Selector) -> String {
    item.select(selector)
        .next()
        .map(|el| normalize_text(el))
        .unwrap_or_default()
}

/// Collapses all whitespace runs (including line breaks) to single spaces
fn normalize_text(el: ElementRef<'_>) -> String {
    el.text()
        .flat_map(|t| t.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drops the fixed trailing suffix from the deal-count text
///
/// Character-based so the multi-byte suffix cannot split a UTF-8 boundary;
/// text shorter than the suffix becomes empty.
fn trim_deal_suffix(text: &str) -> String {
    let count = text.chars().count();
    if count <= DEAL_SUFFIX_CHARS {
        return String::new();
    }
    text.chars().take(count - DEAL_SUFFIX_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FieldSelectors, SelectorConfig};

    fn test_selectors() -> ListingSelectors {
        let config = SelectorConfig {
            query_input: "#q".to_string(),
            query_submit: "#submit".to_string(),
            total_count: ".total".to_string(),
            page_input: ".page-input".to_string(),
            page_submit: ".page-submit".to_string(),
            active_page: ".active > span".to_string(),
            item: "#itemlist .items .item".to_string(),
            fields: FieldSelectors {
                image: ".pic .img".to_string(),
                price: ".price".to_string(),
                deal: ".deal-cnt".to_string(),
                title: ".title".to_string(),
                shop: ".shop".to_string(),
                location: ".location".to_string(),
            },
        };
        ListingSelectors::compile(&config).unwrap()
    }

    fn item_html(image: &str, price: &str, deal: &str, title: &str) -> String {
        format!(
            r#"<div class="item">
                <div class="pic"><img class="img" src="{image}"></div>
                <div class="price">{price}</div>
                <div class="deal-cnt">{deal}</div>
                <div class="title">{title}</div>
                <div class="shop">好店铺</div>
                <div class="location">上海</div>
            </div>"#
        )
    }

    fn page_html(items: &[String]) -> String {
        format!(
            r#"<html><body><div id="itemlist"><div class="items">{}</div></div></body></html>"#,
            items.join("\n")
        )
    }

    #[test]
    fn test_extracts_one_record_per_item() {
        let items: Vec<String> = (0..5)
            .map(|i| item_html("http://img.example/a.jpg", "¥12.80", "1200人付款", &format!("小吃 {}", i)))
            .collect();
        let records = extract_listings(&page_html(&items), &test_selectors());
        assert_eq!(records.len(), 5);
    }

    #[test]
    fn test_fields_populated_from_item_subtree() {
        let html = page_html(&[item_html(
            "http://img.example/a.jpg",
            "¥12.80",
            "1200人付款",
            "麻辣小吃",
        )]);
        let records = extract_listings(&html, &test_selectors());
        assert_eq!(
            records[0],
            ProductRecord {
                image: "http://img.example/a.jpg".to_string(),
                price: "¥12.80".to_string(),
                deal: "1200".to_string(),
                title: "麻辣小吃".to_string(),
                shop: "好店铺".to_string(),
                location: "上海".to_string(),
            }
        );
    }

    #[test]
    fn test_whitespace_normalized_in_price_and_title() {
        let html = page_html(&[item_html(
            "x.jpg",
            "¥\n 12.80",
            "88人付款",
            "麻辣\n小吃  特价",
        )]);
        let records = extract_listings(&html, &test_selectors());
        assert_eq!(records[0].price, "¥ 12.80");
        assert_eq!(records[0].title, "麻辣 小吃 特价");
    }

    #[test]
    fn test_deal_suffix_trimmed_by_chars_not_bytes() {
        let html = page_html(&[item_html("x.jpg", "¥1", "356人付款", "t")]);
        let records = extract_listings(&html, &test_selectors());
        assert_eq!(records[0].deal, "356");
    }

    #[test]
    fn test_short_deal_text_truncates_to_empty() {
        let html = page_html(&[item_html("x.jpg", "¥1", "人付款", "t")]);
        let records = extract_listings(&html, &test_selectors());
        assert_eq!(records[0].deal, "");

        let html = page_html(&[item_html("x.jpg", "¥1", "付款", "t")]);
        let records = extract_listings(&html, &test_selectors());
        assert_eq!(records[0].deal, "");
    }

    #[test]
    fn test_missing_subfields_yield_empty_strings() {
        let html = page_html(&[r#"<div class="item"><div class="title">只有标题</div></div>"#
            .to_string()]);
        let records = extract_listings(&html, &test_selectors());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "只有标题");
        assert_eq!(records[0].image, "");
        assert_eq!(records[0].price, "");
        assert_eq!(records[0].deal, "");
        assert_eq!(records[0].shop, "");
        assert_eq!(records[0].location, "");
    }

    #[test]
    fn test_empty_page_yields_no_records() {
        let records = extract_listings("<html><body></body></html>", &test_selectors());
        assert!(records.is_empty());
    }

    #[test]
    fn test_items_outside_container_ignored() {
        let html = format!(
            r#"<html><body>
            <div class="item"><div class="title">外面的</div></div>
            <div id="itemlist"><div class="items">{}</div></div>
            </body></html>"#,
            item_html("x.jpg", "¥1", "10人付款", "里面的")
        );
        let records = extract_listings(&html, &test_selectors());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "里面的");
    }
}

//! Product listing HTML → records.
//!
//! The listing is a grid of `div.product-card` elements, each with an `h3` title, a link,
//! and a `p.description`. Attributes the listing does not expose directly (remote testing,
//! adaptive/IRT, duration, type) are inferred from the description text.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::record::{AssessmentRecord, TestType};

static DURATION_MINUTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\s*minutes").expect("valid duration regex"));

struct ListingSelectors {
    card: Selector,
    title: Selector,
    link: Selector,
    description: Selector,
}

static SELECTORS: LazyLock<ListingSelectors> = LazyLock::new(|| ListingSelectors {
    card: Selector::parse("div.product-card").expect("valid card selector"),
    title: Selector::parse("h3").expect("valid title selector"),
    link: Selector::parse("a[href]").expect("valid link selector"),
    description: Selector::parse("p.description").expect("valid description selector"),
});

/// Parses every product card on a listing page.
///
/// Relative links are resolved against `base_url` when it parses.
pub fn parse_listing(html: &str, base_url: &str) -> Vec<AssessmentRecord> {
    let document = Html::parse_document(html);
    let base = Url::parse(base_url).ok();

    document
        .select(&SELECTORS.card)
        .map(|card| parse_card(card, base.as_ref()))
        .collect()
}

fn parse_card(card: ElementRef<'_>, base: Option<&Url>) -> AssessmentRecord {
    let name = first_text(card, &SELECTORS.title).unwrap_or_else(|| "Unknown".to_string());

    let href = card
        .select(&SELECTORS.link)
        .next()
        .and_then(|a| a.value().attr("href"))
        .unwrap_or("#");
    let url = resolve_href(href, base);

    let description = first_text(card, &SELECTORS.description).unwrap_or_default();

    AssessmentRecord {
        name,
        url,
        test_type: TestType::from_description(&description),
        duration_minutes: extract_duration_minutes(&description),
        remote_testing: mentions_remote_testing(&description),
        adaptive_irt: mentions_adaptive(&description),
        description,
    }
}

fn first_text(element: ElementRef<'_>, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .filter(|text| !text.is_empty())
}

fn resolve_href(href: &str, base: Option<&Url>) -> String {
    match base.and_then(|b| b.join(href).ok()) {
        Some(resolved) if href != "#" => resolved.to_string(),
        _ => href.to_string(),
    }
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First `<n> minutes` mention in `text`.
pub fn extract_duration_minutes(text: &str) -> Option<u32> {
    DURATION_MINUTES
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

fn mentions_remote_testing(text: &str) -> bool {
    text.to_lowercase().contains("remote")
}

fn mentions_adaptive(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower.contains("adaptive") || lower.contains("irt")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r##"
        <html><body>
          <div class="grid">
            <div class="product-card">
              <h3> Verify G+ Cognitive </h3>
              <a href="/products/verify-g/">Details</a>
              <p class="description">Adaptive cognitive reasoning test, remote proctored. 36 minutes.</p>
            </div>
            <div class="product-card">
              <h3>OPQ Personality</h3>
              <a href="https://cdn.example.com/opq">Details</a>
              <p class="description">Occupational personality questionnaire.</p>
            </div>
            <div class="product-card">
              <p class="description">No title, no link.</p>
            </div>
          </div>
        </body></html>
    "##;

    const BASE: &str = "https://www.example.com/solutions/products/product-catalog/";

    #[test]
    fn test_parse_listing_extracts_cards() {
        let records = parse_listing(LISTING, BASE);
        assert_eq!(records.len(), 3);

        let verify = &records[0];
        assert_eq!(verify.name, "Verify G+ Cognitive");
        assert_eq!(verify.url, "https://www.example.com/products/verify-g/");
        assert_eq!(verify.test_type, TestType::Cognitive);
        assert_eq!(verify.duration_minutes, Some(36));
        assert!(verify.remote_testing);
        assert!(verify.adaptive_irt);
    }

    #[test]
    fn test_parse_listing_absolute_link_and_unknown_duration() {
        let records = parse_listing(LISTING, BASE);
        let opq = &records[1];
        assert_eq!(opq.url, "https://cdn.example.com/opq");
        assert_eq!(opq.test_type, TestType::Personality);
        assert_eq!(opq.duration_minutes, None);
        assert!(!opq.remote_testing);
        assert!(!opq.adaptive_irt);
    }

    #[test]
    fn test_parse_listing_missing_fields_use_placeholders() {
        let records = parse_listing(LISTING, BASE);
        let bare = &records[2];
        assert_eq!(bare.name, "Unknown");
        assert_eq!(bare.url, "#");
        assert_eq!(bare.description, "No title, no link.");
    }

    #[test]
    fn test_parse_listing_without_cards() {
        assert!(parse_listing("<html><body><p>Maintenance</p></body></html>", BASE).is_empty());
    }

    #[test]
    fn test_extract_duration_minutes() {
        assert_eq!(extract_duration_minutes("Duration: 40 Minutes."), Some(40));
        assert_eq!(extract_duration_minutes("25minutes then 30 minutes"), Some(25));
        assert_eq!(extract_duration_minutes("about half an hour"), None);
        assert_eq!(extract_duration_minutes("99999999999 minutes"), None);
        assert_eq!(extract_duration_minutes("\u{663}\u{660} minutes, 15 minutes"), Some(15));
    }
}

//! Test fixtures for integration tests.

use recommender::catalog::{AssessmentRecord, TestType};

pub const LISTING_BASE_URL: &str = "https://catalog.example.com/products/";

#[derive(Default)]
pub struct RecordBuilder {
    name: String,
    description: Option<String>,
    test_type: Option<TestType>,
    duration: Option<u32>,
    remote: bool,
    adaptive: bool,
}

impl RecordBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn description(mut self, text: &str) -> Self {
        self.description = Some(text.to_string());
        self
    }

    pub fn test_type(mut self, test_type: TestType) -> Self {
        self.test_type = Some(test_type);
        self
    }

    pub fn duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    pub fn remote(mut self) -> Self {
        self.remote = true;
        self
    }

    pub fn adaptive(mut self) -> Self {
        self.adaptive = true;
        self
    }

    pub fn build(self) -> AssessmentRecord {
        let description = self
            .description
            .unwrap_or_else(|| format!("{} assessment", self.name));
        let mut record = AssessmentRecord::new(self.name.clone(), description)
            .with_url(format!("{}{}/", LISTING_BASE_URL, slug(&self.name)))
            .with_test_type(self.test_type.unwrap_or(TestType::Unknown))
            .with_remote_testing(self.remote)
            .with_adaptive_irt(self.adaptive);
        if let Some(minutes) = self.duration {
            record = record.with_duration(minutes);
        }
        record
    }
}

pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// A small engineering-focused catalog with one record of unknown duration.
pub fn engineering_catalog() -> Vec<AssessmentRecord> {
    vec![
        RecordBuilder::new("Rust Systems Test")
            .description("Rust programming and systems design. Duration: 50 minutes.")
            .test_type(TestType::Skills)
            .duration(50)
            .remote()
            .build(),
        RecordBuilder::new("Java Backend Test")
            .description("Java services, SQL persistence and coding exercises. Duration: 35 minutes.")
            .test_type(TestType::Skills)
            .duration(35)
            .remote()
            .adaptive()
            .build(),
        RecordBuilder::new("Numerical Reasoning")
            .description("Cognitive test of numerical reasoning. Duration: 20 minutes.")
            .test_type(TestType::Cognitive)
            .duration(20)
            .build(),
        RecordBuilder::new("Team Style Questionnaire")
            .description("Personality questionnaire about team style and collaboration.")
            .test_type(TestType::Personality)
            .build(),
    ]
}

/// Renders `records` the way the provider's product listing page lays them out.
pub fn listing_html(records: &[AssessmentRecord]) -> String {
    let cards: String = records
        .iter()
        .map(|r| {
            format!(
                r#"<div class="product-card"><h3>{}</h3><a href="{}/">View</a><p class="description">{}</p></div>"#,
                r.name,
                slug(&r.name),
                r.description
            )
        })
        .collect();
    format!(
        "<html><head><title>Catalog</title></head><body><div class=\"grid\">{}</div></body></html>",
        cards
    )
}

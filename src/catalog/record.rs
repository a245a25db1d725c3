//! Strongly typed assessment records.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Assessment category. Unrecognised strings deserialize to [`TestType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TestType {
    Cognitive,
    Personality,
    Skills,
    #[serde(other)]
    Unknown,
}

impl TestType {
    /// Classifies free text by the first category keyword it mentions.
    ///
    /// Checks cognitive, then personality, then skills.
    pub fn from_description(text: &str) -> Self {
        let lower = text.to_lowercase();
        if lower.contains("cognitive") {
            TestType::Cognitive
        } else if lower.contains("personality") {
            TestType::Personality
        } else if lower.contains("skills") {
            TestType::Skills
        } else {
            TestType::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TestType::Cognitive => "Cognitive",
            TestType::Personality => "Personality",
            TestType::Skills => "Skills",
            TestType::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalog entry. Identity is [`name`](Self::name).
///
/// Deserializes through [`RecordRow`], so hand-edited and tabular-export rows load too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordRow")]
pub struct AssessmentRecord {
    pub name: String,
    pub url: String,
    pub description: String,
    pub test_type: TestType,
    /// `None` when the catalog does not state a numeric duration.
    pub duration_minutes: Option<u32>,
    pub remote_testing: bool,
    pub adaptive_irt: bool,
}

/// Persisted row as found in cache files.
#[derive(Deserialize)]
struct RecordRow {
    name: String,
    #[serde(default)]
    url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    description: String,
    #[serde(default = "unknown_test_type")]
    test_type: TestType,
    #[serde(default, deserialize_with = "lenient_duration")]
    duration_minutes: Option<u32>,
    /// Column name used by tabular exports. `duration_minutes` wins when both parse.
    #[serde(default, deserialize_with = "lenient_duration")]
    duration: Option<u32>,
    #[serde(default, deserialize_with = "lenient_bool")]
    remote_testing: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    adaptive_irt: bool,
}

impl From<RecordRow> for AssessmentRecord {
    fn from(row: RecordRow) -> Self {
        Self {
            name: row.name,
            url: row.url,
            description: row.description,
            test_type: row.test_type,
            duration_minutes: row.duration_minutes.or(row.duration),
            remote_testing: row.remote_testing,
            adaptive_irt: row.adaptive_irt,
        }
    }
}

impl AssessmentRecord {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: String::new(),
            description: description.into(),
            test_type: TestType::Unknown,
            duration_minutes: None,
            remote_testing: false,
            adaptive_irt: false,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_test_type(mut self, test_type: TestType) -> Self {
        self.test_type = test_type;
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = Some(minutes);
        self
    }

    pub fn with_remote_testing(mut self, remote: bool) -> Self {
        self.remote_testing = remote;
        self
    }

    pub fn with_adaptive_irt(mut self, adaptive: bool) -> Self {
        self.adaptive_irt = adaptive;
        self
    }

    /// Text fed to the embedder for this record.
    pub fn embedding_text(&self) -> &str {
        &self.description
    }

    /// Human readable duration, e.g. `"40 minutes"` or `"Unknown"`.
    pub fn duration_label(&self) -> String {
        match self.duration_minutes {
            Some(minutes) => format!("{} minutes", minutes),
            None => "Unknown".to_string(),
        }
    }

    /// Returns `true` when the record satisfies a maximum duration.
    ///
    /// Unknown durations never satisfy a maximum.
    pub fn fits_duration(&self, max_minutes: u32) -> bool {
        self.duration_minutes.is_some_and(|d| d <= max_minutes)
    }
}

fn unknown_test_type() -> TestType {
    TestType::Unknown
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts `40`, `"40"`, `"40 minutes"`, `"Unknown"` or `null`.
fn lenient_duration<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Loose>::deserialize(deserializer)?;
    Ok(match value {
        Some(Loose::Unsigned(n)) => u32::try_from(n).ok(),
        Some(Loose::Float(f)) if f.is_finite() && f >= 0.0 && f <= u32::MAX as f64 => {
            Some(f as u32)
        }
        Some(Loose::Text(s)) => parse_leading_minutes(&s),
        _ => None,
    })
}

fn parse_leading_minutes(s: &str) -> Option<u32> {
    let digits: String = s
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Accepts `true`/`false` or `"Yes"`/`"No"` (case-insensitive).
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Loose>::deserialize(deserializer)?;
    Ok(match value {
        Some(Loose::Bool(b)) => b,
        Some(Loose::Unsigned(n)) => n != 0,
        Some(Loose::Signed(n)) => n != 0,
        Some(Loose::Text(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "yes" | "y" | "true" | "1"
        ),
        _ => false,
    })
}

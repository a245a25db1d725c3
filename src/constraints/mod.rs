//! Hard constraints mined from a free-text hiring query.
//!
//! Extraction is deliberately conservative: a missed constraint only widens the candidate
//! set, while a spurious one silently hides relevant assessments.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::catalog::{AssessmentRecord, TestType};


static DURATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([0-9]+)\s*min").expect("duration regex is valid"));

/// Keywords that map a query onto a test type. Matching is case-insensitive containment.
const TYPE_KEYWORDS: &[(TestType, &[&str])] = &[
    (TestType::Cognitive, &["cognitive"]),
    (TestType::Personality, &["personality"]),
    (
        TestType::Skills,
        &[
            "java",
            "python",
            "sql",
            "javascript",
            "coding",
            "programming",
            "developer",
        ],
    ),
];

/// Filters applied before similarity ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryConstraints {
    /// Inclusive upper bound on assessment length.
    pub max_duration_minutes: Option<u32>,
    /// Accepted test types; empty means any.
    pub allowed_test_types: BTreeSet<TestType>,
}

impl QueryConstraints {
    /// Constraints that admit every record.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_max_duration(mut self, minutes: u32) -> Self {
        self.max_duration_minutes = Some(minutes);
        self
    }

    pub fn with_test_type(mut self, test_type: TestType) -> Self {
        self.allowed_test_types.insert(test_type);
        self
    }

    pub fn is_unrestricted(&self) -> bool {
        self.max_duration_minutes.is_none() && self.allowed_test_types.is_empty()
    }

    /// Whether `record` passes every filter.
    ///
    /// A duration bound excludes records whose duration is unknown.
    pub fn allows(&self, record: &AssessmentRecord) -> bool {
        if let Some(max) = self.max_duration_minutes
            && !record.fits_duration(max)
        {
            return false;
        }

        self.allowed_test_types.is_empty() || self.allowed_test_types.contains(&record.test_type)
    }
}

/// Extracts duration and test-type constraints from `query`.
pub fn extract(query: &str) -> QueryConstraints {
    let constraints = QueryConstraints {
        max_duration_minutes: extract_max_duration(query),
        allowed_test_types: extract_test_types(query),
    };

    debug!(
        max_duration = ?constraints.max_duration_minutes,
        test_types = ?constraints.allowed_test_types,
        "Extracted query constraints"
    );

    constraints
}

/// First `<integer> min...` occurrence. Integers too large for `u32` yield no constraint.
pub fn extract_max_duration(query: &str) -> Option<u32> {
    DURATION_RE
        .captures(query)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

/// Union of the test types whose keywords occur in `query`.
pub fn extract_test_types(query: &str) -> BTreeSet<TestType> {
    let lower = query.to_lowercase();
    TYPE_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(test_type, _)| *test_type)
        .collect()
}

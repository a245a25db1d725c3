//! Built-in labelled hiring queries.

/// Queries paired index-for-index with their relevant assessment names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Benchmark {
    pub queries: Vec<String>,
    pub ground_truth: Vec<Vec<String>>,
}

impl Benchmark {
    pub fn len(&self) -> usize {
        self.queries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queries.is_empty()
    }
}

const CASES: &[(&str, &[&str])] = &[
    (
        "I am hiring for Java developers who can also collaborate effectively with my business \
         teams. Looking for an assessment(s) that can be completed in 40 minutes.",
        &["Java Coding Assessment", "Business Collaboration Assessment"],
    ),
    (
        "Looking to hire mid-level professionals who are proficient in Python, SQL and Java \
         Script. Need an assessment package that can test all skills with max duration of 60 \
         minutes.",
        &[
            "Python Programming Test",
            "SQL Database Skills",
            "JavaScript Proficiency",
            "Full Stack Developer Assessment",
        ],
    ),
    (
        "Here is a JD text: Looking for data analysts with SQL and Python experience. Need to \
         evaluate analytical thinking. Time limit is less than 30 minutes.",
        &[
            "SQL Database Skills",
            "Data Analyst Assessment",
            "Cognitive Ability Test",
        ],
    ),
    (
        "I am hiring for an analyst and wants applications to screen using Cognitive and \
         personality tests, what options are available within 45 mins.",
        &["Cognitive Ability Test", "Personality Profile"],
    ),
];

/// The four labelled hiring queries shipped with the recommender.
pub fn default_benchmark() -> Benchmark {
    Benchmark {
        queries: CASES.iter().map(|(q, _)| q.to_string()).collect(),
        ground_truth: CASES
            .iter()
            .map(|(_, truth)| truth.iter().map(|s| s.to_string()).collect())
            .collect(),
    }
}

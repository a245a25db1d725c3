//! Built-in seed catalog used when neither the cache nor the live listing is reachable.

use super::record::{AssessmentRecord, TestType};

const BASE_URL: &str = "https://www.shl.com/solutions/products";

struct SeedEntry {
    name: &'static str,
    slug: &'static str,
    description: &'static str,
    test_type: TestType,
    duration: u32,
    adaptive_irt: bool,
}

const SEED: &[SeedEntry] = &[
    SeedEntry {
        name: "Java Coding Assessment",
        slug: "coding-assessment",
        description: "Evaluates Java programming skills with practical coding challenges. Duration: 40 minutes. Suitable for all development roles.",
        test_type: TestType::Skills,
        duration: 40,
        adaptive_irt: true,
    },
    SeedEntry {
        name: "Python Programming Test",
        slug: "python-test",
        description: "Comprehensive assessment of Python skills including data structures and algorithms. Duration: 45 minutes.",
        test_type: TestType::Skills,
        duration: 45,
        adaptive_irt: false,
    },
    SeedEntry {
        name: "SQL Database Skills",
        slug: "sql-assessment",
        description: "Tests SQL query writing and database knowledge. Duration: 30 minutes.",
        test_type: TestType::Skills,
        duration: 30,
        adaptive_irt: false,
    },
    SeedEntry {
        name: "JavaScript Proficiency",
        slug: "javascript-test",
        description: "Evaluates JavaScript programming skills including DOM manipulation and async programming. Duration: 35 minutes.",
        test_type: TestType::Skills,
        duration: 35,
        adaptive_irt: false,
    },
    SeedEntry {
        name: "Full Stack Developer Assessment",
        slug: "fullstack-assessment",
        description: "Comprehensive test covering front-end, back-end, and database skills. Includes JavaScript, Python, SQL components. Duration: 60 minutes.",
        test_type: TestType::Skills,
        duration: 60,
        adaptive_irt: true,
    },
    SeedEntry {
        name: "Cognitive Ability Test",
        slug: "cognitive-test",
        description: "Measures reasoning abilities, problem-solving, and learning aptitude. Duration: 25 minutes.",
        test_type: TestType::Cognitive,
        duration: 25,
        adaptive_irt: true,
    },
    SeedEntry {
        name: "Personality Profile",
        slug: "personality-assessment",
        description: "Evaluates work style, team fit, and behavioral tendencies. Duration: 20 minutes.",
        test_type: TestType::Personality,
        duration: 20,
        adaptive_irt: false,
    },
    SeedEntry {
        name: "Communication Skills Assessment",
        slug: "communication-assessment",
        description: "Evaluates written and verbal communication abilities. Duration: 30 minutes. Good for client-facing roles.",
        test_type: TestType::Skills,
        duration: 30,
        adaptive_irt: false,
    },
    SeedEntry {
        name: "Data Analyst Assessment",
        slug: "data-analyst-test",
        description: "Evaluates data manipulation, visualization, and statistical analysis skills. Includes SQL and Python components. Duration: 45 minutes.",
        test_type: TestType::Skills,
        duration: 45,
        adaptive_irt: true,
    },
    SeedEntry {
        name: "Leadership Potential Assessment",
        slug: "leadership-assessment",
        description: "Identifies leadership qualities, decision-making styles, and management potential. Duration: 35 minutes.",
        test_type: TestType::Personality,
        duration: 35,
        adaptive_irt: true,
    },
    SeedEntry {
        name: "Business Collaboration Assessment",
        slug: "business-collaboration",
        description: "Measures ability to work effectively with business teams, communicate technical concepts, and understand business requirements. Duration: 30 minutes.",
        test_type: TestType::Skills,
        duration: 30,
        adaptive_irt: false,
    },
    SeedEntry {
        name: "Programming Logic Test",
        slug: "programming-logic",
        description: "Language-agnostic test of programming logic and algorithm design. Duration: 25 minutes.",
        test_type: TestType::Cognitive,
        duration: 25,
        adaptive_irt: true,
    },
];

/// The built-in seed catalog. Every seed assessment supports remote testing.
pub fn seed_catalog() -> Vec<AssessmentRecord> {
    SEED.iter()
        .map(|entry| {
            AssessmentRecord::new(entry.name, entry.description)
                .with_url(format!("{}/{}/", BASE_URL, entry.slug))
                .with_test_type(entry.test_type)
                .with_duration(entry.duration)
                .with_remote_testing(true)
                .with_adaptive_irt(entry.adaptive_irt)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_names_are_unique() {
        let records = seed_catalog();
        let names: HashSet<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names.len(), records.len());
        assert_eq!(records.len(), 12);
    }

    #[test]
    fn test_seed_durations_match_descriptions() {
        for record in seed_catalog() {
            assert_eq!(
                crate::catalog::scrape::extract_duration_minutes(&record.description),
                record.duration_minutes,
                "{}",
                record.name
            );
        }
    }
}

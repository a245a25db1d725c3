use std::sync::Arc;

use super::*;
use crate::catalog::{AssessmentRecord, CatalogIndex, TestType, seed_catalog};
use crate::constraints::QueryConstraints;
use crate::embedding::{EmbeddingError, MockEmbedder, SentenceEmbedder};

const QUERY: &str = "query";

/// Five records on the unit circle; "query" points along +x.
fn fixture() -> (RankingEngine<MockEmbedder>, CatalogIndex) {
    let records = vec![
        AssessmentRecord::new("east", "")
            .with_duration(30)
            .with_test_type(TestType::Skills),
        AssessmentRecord::new("north-east", "")
            .with_duration(60)
            .with_test_type(TestType::Cognitive),
        AssessmentRecord::new("north", "")
            .with_duration(20)
            .with_test_type(TestType::Personality),
        AssessmentRecord::new("west", "").with_test_type(TestType::Skills),
        AssessmentRecord::new("east-twin", "")
            .with_duration(45)
            .with_test_type(TestType::Skills),
    ];
    let s = std::f32::consts::FRAC_1_SQRT_2;
    let embeddings = vec![
        vec![1.0, 0.0],
        vec![s, s],
        vec![0.0, 1.0],
        vec![-1.0, 0.0],
        vec![1.0, 0.0],
    ];
    let index = CatalogIndex::from_parts(records, embeddings, 2, "mock").unwrap();

    let embedder = MockEmbedder::new(2).with_vector(QUERY, vec![1.0, 0.0]);
    (RankingEngine::new(Arc::new(embedder)), index)
}

fn names(recs: &[Recommendation]) -> Vec<&str> {
    recs.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn test_orders_by_similarity_with_stable_ties() {
    let (engine, index) = fixture();
    let recs = engine
        .rank(QUERY, &index, &QueryConstraints::none(), 10)
        .unwrap();

    assert_eq!(
        names(&recs),
        vec!["east", "east-twin", "north-east", "north", "west"]
    );
    for pair in recs.windows(2) {
        assert!(pair[0].similarity_score >= pair[1].similarity_score);
    }
    assert!((recs[0].similarity_score - 1.0).abs() < 1e-6);
    assert!((recs[4].similarity_score + 1.0).abs() < 1e-6);
}

#[test]
fn test_top_k_bounds_result() {
    let (engine, index) = fixture();
    for top_k in 1..=7 {
        let recs = engine
            .rank(QUERY, &index, &QueryConstraints::none(), top_k)
            .unwrap();
        assert_eq!(recs.len(), top_k.min(index.len()));
    }
}

#[test]
fn test_zero_top_k_is_rejected() {
    let (engine, index) = fixture();
    let err = engine
        .rank(QUERY, &index, &QueryConstraints::none(), 0)
        .unwrap_err();
    assert!(matches!(err, RankingError::InvalidTopK { top_k: 0 }));
    assert_eq!(engine.embedder().calls(), 0, "top_k is checked before embedding");
}

#[test]
fn test_duration_filter() {
    let (engine, index) = fixture();
    let constraints = QueryConstraints::none().with_max_duration(45);
    let recs = engine.rank(QUERY, &index, &constraints, 10).unwrap();

    assert_eq!(names(&recs), vec!["east", "east-twin", "north"]);

    // Everything excluded is either too long or has no duration.
    for record in index.records() {
        if !recs.iter().any(|r| r.name == record.name) {
            assert!(record.duration_minutes.is_none_or(|d| d > 45));
        }
    }
}

#[test]
fn test_type_filter() {
    let (engine, index) = fixture();
    let constraints = QueryConstraints::none()
        .with_test_type(TestType::Cognitive)
        .with_test_type(TestType::Personality);
    let recs = engine.rank(QUERY, &index, &constraints, 10).unwrap();

    assert_eq!(names(&recs), vec!["north-east", "north"]);
    assert!(recs.iter().all(|r| constraints.allowed_test_types.contains(&r.test_type)));
}

#[test]
fn test_filters_can_exclude_everything() {
    let (engine, index) = fixture();
    let constraints = QueryConstraints::none().with_max_duration(5);
    assert!(engine.rank(QUERY, &index, &constraints, 3).unwrap().is_empty());
}

#[test]
fn test_empty_catalog() {
    let (engine, _) = fixture();
    let recs = engine
        .rank(QUERY, &CatalogIndex::empty(2), &QueryConstraints::none(), 5)
        .unwrap();
    assert!(recs.is_empty());
}

#[test]
fn test_degenerate_query_keeps_catalog_order() {
    let (engine, index) = fixture();
    let recs = engine
        .rank("unregistered text", &index, &QueryConstraints::none(), 10)
        .unwrap();

    assert!(recs.iter().all(|r| r.similarity_score == 0.0));
    assert_eq!(
        names(&recs),
        vec!["east", "north-east", "north", "west", "east-twin"]
    );
}

#[test]
fn test_embedding_failure_propagates() {
    let index = fixture().1;
    let engine = RankingEngine::new(Arc::new(MockEmbedder::new(2).failing_on("boom")));

    let err = engine
        .rank("boom", &index, &QueryConstraints::none(), 3)
        .unwrap_err();
    assert!(matches!(
        err,
        RankingError::Embedding(EmbeddingError::InferenceFailed { .. })
    ));
}

#[test]
fn test_query_from_other_model_is_rejected() {
    let index = fixture().1;
    let engine = RankingEngine::new(Arc::new(MockEmbedder::new(3)));

    let err = engine
        .rank("anything", &index, &QueryConstraints::none(), 3)
        .unwrap_err();
    assert!(matches!(
        err,
        RankingError::Dimension(crate::constants::DimensionError::Mismatch {
            expected: 2,
            actual: 3
        })
    ));
}

#[test]
fn test_deterministic_over_seed_catalog() {
    let embedder = Arc::new(SentenceEmbedder::stub().unwrap());
    let index = CatalogIndex::build(seed_catalog(), embedder.as_ref()).unwrap();
    let engine = RankingEngine::new(embedder);

    let query = "Python and SQL for a data analyst, under 50 minutes";
    let first = engine.recommend(query, &index, 5).unwrap();
    let second = engine.recommend(query, &index, 5).unwrap();

    assert_eq!(first, second);
    assert!(!first.is_empty());
    assert!(first.iter().all(|r| r.test_type == TestType::Skills));
    assert!(first.iter().all(|r| {
        let minutes: u32 = r.duration.trim_end_matches(" minutes").parse().unwrap();
        minutes <= 50
    }));
}

#[test]
fn test_recommend_applies_extracted_constraints() {
    let (engine, index) = fixture();
    let recs = engine.recommend("personality within 30 minutes", &index, 10).unwrap();
    assert_eq!(names(&recs), vec!["north"]);
}

#[test]
fn test_recommendation_wire_format() {
    let record = AssessmentRecord::new("Java Coding Assessment", "")
        .with_url("https://example.com/java/")
        .with_test_type(TestType::Skills)
        .with_duration(40)
        .with_remote_testing(true);
    let index = CatalogIndex::from_parts(vec![record], vec![vec![1.0, 0.0]], 2, "mock").unwrap();
    let engine = RankingEngine::new(Arc::new(MockEmbedder::new(2).with_vector("java", vec![1.0, 0.0])));

    let recs = engine
        .rank("java", &index, &QueryConstraints::none(), 1)
        .unwrap();
    let json = serde_json::to_value(&recs[0]).unwrap();

    assert_eq!(json["name"], "Java Coding Assessment");
    assert_eq!(json["url"], "https://example.com/java/");
    assert_eq!(json["remote_testing"], "Yes");
    assert_eq!(json["adaptive_irt"], "No");
    assert_eq!(json["duration"], "40 minutes");
    assert_eq!(json["test_type"], "Skills");
    assert!((json["similarity_score"].as_f64().unwrap() - 1.0).abs() < 1e-6);
}

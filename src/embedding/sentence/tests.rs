use super::*;
use std::path::PathBuf;

mod config_tests {
    use super::*;

    #[test]
    fn test_sentence_config_default() {
        let config = SentenceConfig::default();
        assert_eq!(config.embedding_dim, SENTENCE_EMBEDDING_DIM);
        assert_eq!(config.max_seq_len, SENTENCE_MAX_SEQ_LEN);
        assert!(!config.testing_stub);
        assert!(config.model_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_sentence_config_new() {
        let config = SentenceConfig::new("/models/all-MiniLM-L6-v2");
        assert_eq!(config.model_dir, PathBuf::from("/models/all-MiniLM-L6-v2"));
        assert_eq!(config.model_id(), "all-MiniLM-L6-v2");
        assert!(!config.testing_stub);
    }

    #[test]
    fn test_sentence_config_stub() {
        let config = SentenceConfig::stub();
        assert!(config.testing_stub);
        assert_eq!(config.model_id(), STUB_MODEL_ID);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_dir_no_stub() {
        let err = SentenceConfig::default().validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_validation_nonexistent_dir() {
        let err = SentenceConfig::new("/nonexistent/model-dir")
            .validate()
            .unwrap_err();
        assert!(matches!(err, EmbeddingError::ModelNotFound { .. }));
    }

    #[test]
    fn test_validation_zero_dim() {
        let err = SentenceConfig::stub()
            .with_embedding_dim(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_from_model_dir_reads_hidden_size() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("config.json"),
            r#"{"hidden_size": 768, "num_attention_heads": 12, "model_type": "bert"}"#,
        )
        .unwrap();

        let config = SentenceConfig::from_model_dir(dir.path()).unwrap();
        assert_eq!(config.embedding_dim, 768);
        assert_eq!(config.max_seq_len, SENTENCE_MAX_SEQ_LEN);
        assert_eq!(config.model_dir, dir.path());
        assert!(!config.testing_stub);
    }

    #[test]
    fn test_from_model_dir_without_config_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = SentenceConfig::from_model_dir(dir.path()).unwrap_err();
        match err {
            EmbeddingError::ModelNotFound { path } => {
                assert_eq!(path, dir.path().join("config.json"));
            }
            other => panic!("expected ModelNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_from_model_dir_without_hidden_size() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.json"), r#"{"model_type": "bert"}"#).unwrap();

        let err = SentenceConfig::from_model_dir(dir.path()).unwrap_err();
        assert!(matches!(err, EmbeddingError::InvalidConfig { .. }));
    }

    #[test]
    fn test_validation_missing_files_in_existing_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.json"), "{}").unwrap();

        let config = SentenceConfig::new(dir.path());
        let missing = config.missing_files();
        assert_eq!(missing.len(), 2);
        assert!(missing.iter().any(|p| p.ends_with("tokenizer.json")));

        let err = config.validate().unwrap_err();
        assert!(matches!(err, EmbeddingError::ModelNotFound { .. }));
    }
}

mod stub_tests {
    use super::*;

    fn cosine(a: &[f32], b: &[f32]) -> f32 {
        a.iter().zip(b).map(|(x, y)| x * y).sum()
    }

    #[test]
    fn test_stub_loads() {
        let embedder = SentenceEmbedder::stub().unwrap();
        assert!(embedder.is_stub());
        assert!(!embedder.has_model());
        assert_eq!(embedder.embedding_dim(), SENTENCE_EMBEDDING_DIM);
        assert_eq!(embedder.model_id(), STUB_MODEL_ID);
    }

    #[test]
    fn test_stub_dimension() {
        let embedder = SentenceEmbedder::load(SentenceConfig::stub().with_embedding_dim(64)).unwrap();
        let v = embedder.encode("java developer").unwrap();
        assert_eq!(v.len(), 64);
    }

    #[test]
    fn test_stub_is_deterministic() {
        let embedder = SentenceEmbedder::stub().unwrap();
        let a = embedder.encode("SQL database skills").unwrap();
        let b = embedder.encode("SQL database skills").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_string_is_zero_vector() {
        let embedder = SentenceEmbedder::stub().unwrap();
        let v = embedder.encode("").unwrap();
        assert_eq!(v.len(), SENTENCE_EMBEDDING_DIM);
        assert!(v.iter().all(|x| *x == 0.0));

        let v = embedder.encode("   \n").unwrap();
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_encode_many_matches_encode() {
        let embedder = SentenceEmbedder::stub().unwrap();
        let texts = ["cognitive ability", "", "personality profile"];
        let batch = embedder.encode_many(&texts).unwrap();

        assert_eq!(batch.len(), 3);
        for (text, vector) in texts.iter().zip(&batch) {
            assert_eq!(&embedder.encode(text).unwrap(), vector);
        }
    }

    #[test]
    fn test_encode_many_empty() {
        let embedder = SentenceEmbedder::stub().unwrap();
        assert!(embedder.encode_many(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_related_text_is_closer() {
        let embedder = SentenceEmbedder::stub().unwrap();
        let query = embedder.encode("Java coding test").unwrap();
        let java = embedder
            .encode("Evaluates Java programming skills with practical coding challenges")
            .unwrap();
        let personality = embedder
            .encode("Evaluates work style, team fit, and behavioral tendencies")
            .unwrap();

        assert!(cosine(&query, &java) > cosine(&query, &personality));
    }

    #[test]
    fn test_debug_output() {
        let embedder = SentenceEmbedder::stub().unwrap();
        let debug = format!("{:?}", embedder);
        assert!(debug.contains("SentenceEmbedder"));
        assert!(debug.contains("Stub"));
    }
}

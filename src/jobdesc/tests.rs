use super::*;

#[test]
fn test_prefers_job_description_section() {
    let html = r#"
        <html><body>
            <nav>Home | Careers</nav>
            <div class="job-description">
                <h2>Data Analyst</h2>
                <p>Strong   SQL and Python.</p>
            </div>
            <footer>© Example</footer>
        </body></html>
    "#;
    assert_eq!(
        extract_text(html).as_deref(),
        Some("Data Analyst Strong SQL and Python.")
    );
}

#[test]
fn test_falls_back_to_visible_body_text() {
    let html = r#"
        <html>
            <head><title>Ignored title</title><style>p { color: red; }</style></head>
            <body>
                <p>Java developer</p>
                <script>var tracking = "java";</script>
                <p>40 minutes</p>
            </body>
        </html>
    "#;
    assert_eq!(extract_text(html).as_deref(), Some("Java developer 40 minutes"));
}

#[test]
fn test_blank_page_has_no_content() {
    assert_eq!(extract_text("<html><body>  <script>x()</script> </body></html>"), None);
    assert_eq!(extract_text(""), None);
}

#[test]
fn test_validate_url() {
    assert!(validate_url("https://jobs.example.com/123").is_ok());
    assert!(validate_url("http://localhost:8080/jd").is_ok());
    assert!(matches!(
        validate_url("ftp://example.com/jd"),
        Err(JobDescriptionError::InvalidUrl { .. })
    ));
    assert!(matches!(
        validate_url("not a url"),
        Err(JobDescriptionError::InvalidUrl { .. })
    ));
}

#[tokio::test]
async fn test_http_source_rejects_invalid_url_without_request() {
    let source = HttpJobDescriptionSource::new(Duration::from_millis(100)).unwrap();
    let err = source.fetch_text("file:///etc/passwd").await.unwrap_err();
    assert!(matches!(err, JobDescriptionError::InvalidUrl { .. }));
}

#[tokio::test]
async fn test_mock_source() {
    let source = MockJobDescriptionSource::new()
        .with_page("https://jobs.example.com/1", "Python developer")
        .with_page("https://jobs.example.com/blank", "   ");

    assert_eq!(
        source.fetch_text("https://jobs.example.com/1").await.unwrap(),
        "Python developer"
    );
    assert!(matches!(
        source.fetch_text("https://jobs.example.com/blank").await,
        Err(JobDescriptionError::NoContent { .. })
    ));
    assert!(matches!(
        source.fetch_text("https://jobs.example.com/missing").await,
        Err(JobDescriptionError::Status { status: 404, .. })
    ));
}

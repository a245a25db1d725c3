//! Assessment recommender HTTP server entrypoint.

use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use recommender::catalog::{CatalogHandle, CatalogStore, HttpCatalogSource};
use recommender::config::Config;
use recommender::embedding::{Embedder, SentenceConfig, SentenceEmbedder};
use recommender::evaluation::{EvaluationReport, Evaluator, default_benchmark};
use recommender::gateway::{HandlerState, create_router_with_state};
use recommender::jobdesc::HttpJobDescriptionSource;
use recommender::ranking::RankingEngine;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    let sentence_config = if let Some(path) = &config.model_path {
        SentenceConfig::from_model_dir(path.clone())?
    } else {
        tracing::warn!("No RECOMMENDER_MODEL_PATH configured, running embedder in stub mode");
        SentenceConfig::stub()
    };
    let embedder = Arc::new(SentenceEmbedder::load(sentence_config)?);

    let store = Arc::new(build_store(&config)?);
    let (index, origin) = store.load_index(embedder.as_ref()).await?;
    tracing::info!(
        records = index.len(),
        origin = %origin,
        model_id = %embedder.model_id(),
        "Catalog ready"
    );

    let engine = RankingEngine::new(embedder);

    if std::env::args().any(|arg| arg == "--evaluate") {
        let benchmark = default_benchmark();
        let report = Evaluator::new(&engine, &index).evaluate(
            benchmark.queries.as_slice(),
            benchmark.ground_truth.as_slice(),
            recommender::constants::EVALUATION_K,
        )?;
        print_report(&report);
        return Ok(());
    }

    let addr = config.socket_addr();
    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        "Assessment recommender starting"
    );

    let job_source = Arc::new(HttpJobDescriptionSource::new(config.fetch_timeout())?);
    let state = HandlerState::new(
        Arc::new(CatalogHandle::new(index)),
        engine,
        job_source,
        config.default_top_k,
    )
    .with_store(store);

    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Assessment recommender shutdown complete");
    Ok(())
}

fn build_store(config: &Config) -> anyhow::Result<CatalogStore> {
    let source = HttpCatalogSource::new(config.catalog_url.clone(), config.fetch_timeout())?;
    let store = CatalogStore::new(config.catalog_path.clone()).with_source(Arc::new(source));

    Ok(if config.seed_fallback {
        store.with_builtin_seed()
    } else {
        store
    })
}

fn print_report(report: &EvaluationReport) {
    println!("Evaluation at k = {}", report.k);
    for (i, q) in report.per_query.iter().enumerate() {
        println!(
            "  [{}] recall@{k} = {:.4}  ap@{k} = {:.4}  {}",
            i + 1,
            q.recall,
            q.ap,
            q.query,
            k = report.k
        );
        for name in &q.retrieved {
            println!("        - {}", name);
        }
    }
    println!("Mean Recall@{}: {:.4}", report.k, report.mean_recall);
    println!("MAP@{}:         {:.4}", report.k, report.mean_average_precision);
}

async fn run_health_check() -> i32 {
    let port = std::env::var(Config::ENV_PORT)
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let Ok(client) = reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    else {
        return 1;
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

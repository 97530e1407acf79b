use crate::cli::ServeArgs;
use crate::infra::AppState;
use crate::routes::api_router;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use mindmetrics::assessment::ModelBundle;
use mindmetrics::config::AppConfig;
use mindmetrics::error::AppError;
use mindmetrics::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(dir) = args.models_dir.take() {
        config.models.dir = dir;
    }

    telemetry::init(&config.telemetry)?;

    // No analysis can run without a coherent bundle, so a load failure here
    // aborts startup.
    let bundle = ModelBundle::load(&config.models.dir)?;
    info!(
        models_dir = %config.models.dir.display(),
        decision_feature_count = bundle.decision_feature_count,
        clusters = bundle.clusters.centroids.len(),
        "model artifacts loaded"
    );
    let engine = Arc::new(bundle.engine());

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = api_router(engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "cognitive self-assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

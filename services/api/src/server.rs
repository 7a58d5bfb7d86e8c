use crate::cli::ServeArgs;
use crate::infra::{AppState, LoggingReportSink};
use crate::routes::with_estimate_routes;
use axum::http::HeaderValue;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use psc_hours::config::{AppConfig, ConfigError, CorsOrigins, ServerConfig};
use psc_hours::error::AppError;
use psc_hours::estimation::{EstimateService, EstimationEngine};
use psc_hours::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    // Rule-table integrity is a startup concern: a broken table must keep
    // the service from answering a single request.
    let engine = EstimationEngine::standard();
    engine.table().validate()?;

    let sink = Arc::new(LoggingReportSink);
    let service = Arc::new(EstimateService::new(Arc::new(engine), sink));

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let cors = cors_layer(&config.server)?;
    let app = with_estimate_routes(service)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "estimation service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    match &config.cors {
        CorsOrigins::Any => Ok(layer.allow_origin(Any)),
        CorsOrigins::List(origins) => {
            let mut values = Vec::with_capacity(origins.len());
            for origin in origins {
                let value = origin.parse::<HeaderValue>().map_err(|_| {
                    ConfigError::InvalidCorsOrigin {
                        origin: origin.clone(),
                    }
                })?;
                values.push(value);
            }
            Ok(layer.allow_origin(values))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_cors_layer_for_explicit_origins() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8010,
            cors: CorsOrigins::List(vec!["http://localhost:8010".to_string()]),
        };
        assert!(cors_layer(&config).is_ok());
    }

    #[test]
    fn rejects_unparseable_origin() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8010,
            cors: CorsOrigins::List(vec!["http://bad\norigin".to_string()]),
        };
        let err = cors_layer(&config).expect_err("control character rejected");
        assert!(matches!(err, ConfigError::InvalidCorsOrigin { .. }));
    }
}

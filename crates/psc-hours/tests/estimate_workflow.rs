//! Integration specifications for the estimation service and HTTP boundary.
//!
//! Scenarios run end-to-end through the public service facade and router so
//! the engine, report renderer, and delivery seam are exercised together
//! without reaching into private modules.

mod common {
    use std::sync::{Arc, Mutex};

    use psc_hours::estimation::{
        DeliveryError, EstimateService, EstimationEngine, FeatureSnapshot, ReportSink,
    };

    #[derive(Default, Clone)]
    pub(super) struct MemorySink {
        deliveries: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
    }

    impl MemorySink {
        pub(super) fn deliveries(&self) -> Vec<(String, Vec<u8>)> {
            self.deliveries.lock().expect("lock").clone()
        }
    }

    impl ReportSink for MemorySink {
        fn deliver(&self, destination: &str, document: &[u8]) -> Result<(), DeliveryError> {
            self.deliveries
                .lock()
                .expect("lock")
                .push((destination.to_string(), document.to_vec()));
            Ok(())
        }
    }

    pub(super) struct FailingSink;

    impl ReportSink for FailingSink {
        fn deliver(&self, _destination: &str, _document: &[u8]) -> Result<(), DeliveryError> {
            Err(DeliveryError::Transport("smtp relay down".to_string()))
        }
    }

    pub(super) fn registration_snapshot() -> FeatureSnapshot {
        let mut snapshot = FeatureSnapshot::default();
        snapshot.bre_include = true;
        snapshot.housing = true;
        snapshot
    }

    pub(super) fn build_service() -> (Arc<EstimateService<MemorySink>>, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::default());
        let service = Arc::new(EstimateService::new(
            Arc::new(EstimationEngine::standard()),
            sink.clone(),
        ));
        (service, sink)
    }
}

mod delivery {
    use super::common::*;
    use chrono::NaiveDate;
    use psc_hours::estimation::{DeliveryStatus, EstimateService, EstimationEngine};
    use std::sync::Arc;

    fn prepared_on() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date")
    }

    #[test]
    fn delivered_document_reaches_the_sink() {
        let (service, sink) = build_service();
        let outcome = service.report(
            &registration_snapshot(),
            Some("pm@example.com"),
            prepared_on(),
        );

        assert_eq!(
            outcome.delivery,
            DeliveryStatus::Delivered {
                destination: "pm@example.com".to_string()
            }
        );

        let deliveries = sink.deliveries();
        assert_eq!(deliveries.len(), 1);
        assert_eq!(deliveries[0].0, "pm@example.com");
        let document = String::from_utf8(deliveries[0].1.clone()).expect("utf-8 document");
        assert!(document.contains("Total PSC Hours: 12"));
    }

    #[test]
    fn sink_failure_keeps_the_computed_hours() {
        let service = EstimateService::new(
            Arc::new(EstimationEngine::standard()),
            Arc::new(FailingSink),
        );
        let outcome = service.report(
            &registration_snapshot(),
            Some("pm@example.com"),
            prepared_on(),
        );

        assert_eq!(outcome.result.total_hours, 12);
        assert!(outcome.document.contains("Total PSC Hours: 12"));
        match outcome.delivery {
            DeliveryStatus::Failed {
                destination,
                reason,
            } => {
                assert_eq!(destination, "pm@example.com");
                assert!(reason.contains("smtp relay down"));
            }
            other => panic!("expected failed delivery, got {other:?}"),
        }
    }

    #[test]
    fn repeated_calls_are_independent() {
        let (service, _) = build_service();
        let first = service.estimate(&registration_snapshot());
        let empty = service.estimate(&Default::default());
        let second = service.estimate(&registration_snapshot());

        assert_eq!(first, second);
        assert_eq!(empty.total_hours, 0);
    }
}

mod routing {
    use super::common::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use psc_hours::estimation::estimate_router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn build_router() -> axum::Router {
        let (service, _) = build_service();
        estimate_router(service)
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn calculate_returns_module_totals() {
        let router = build_router();
        let response = router
            .oneshot(post(
                "/api/v1/estimates/calculate",
                json!({ "bre_include": true, "housing": true }),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");

        assert_eq!(payload.get("total_hours"), Some(&json!(12)));
        let modules = payload
            .get("modules")
            .and_then(Value::as_array)
            .expect("modules array");
        assert_eq!(modules.len(), 6);
        assert_eq!(modules[0].get("module"), Some(&json!("attendee_registration")));
        assert_eq!(modules[0].get("hours"), Some(&json!(12)));
    }

    #[tokio::test]
    async fn calculate_ignores_unknown_and_retired_keys() {
        let router = build_router();
        let response = router
            .oneshot(post(
                "/api/v1/estimates/calculate",
                json!({ "app_include": true, "multiple_POCs": true, "recurring_calls": true }),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(payload.get("total_hours"), Some(&json!(5)));
    }

    #[tokio::test]
    async fn calculate_rejects_non_boolean_flag_values() {
        let router = build_router();
        let response = router
            .oneshot(post(
                "/api/v1/estimates/calculate",
                json!({ "housing": "yes" }),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn report_requires_the_features_object() {
        let router = build_router();
        let response = router
            .oneshot(post(
                "/api/v1/estimates/report",
                json!({ "destination": "pm@example.com" }),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn report_returns_document_and_delivery_status() {
        let (service, sink) = build_service();
        let router = estimate_router(service);

        let response = router
            .oneshot(post(
                "/api/v1/estimates/report",
                json!({
                    "features": { "bre_include": true },
                    "destination": "pm@example.com",
                    "prepared_on": "2026-08-06"
                }),
            ))
            .await
            .expect("router dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload: Value = serde_json::from_slice(&body).expect("json");

        assert_eq!(
            payload.pointer("/result/total_hours"),
            Some(&json!(10)),
        );
        assert_eq!(
            payload.pointer("/delivery/status"),
            Some(&json!("delivered")),
        );
        assert!(payload
            .get("document")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .contains("Prepared 2026-08-06"));
        assert_eq!(sink.deliveries().len(), 1);
    }
}

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Query, State},
    routing::{any, get, MethodRouter},
    Router,
};

use crate::api::handlers::{self, SharedState};
use crate::model::ResourceKind;

pub fn create_router() -> Router<SharedState> {
    let mut router = Router::new()
        // Health check
        .route("/health", get(handlers::health_check));

    // One endpoint per resource kind, any method
    for kind in ResourceKind::ROUTABLE {
        router = router.route(&format!("/{}", kind.as_str()), resource_route(kind));
    }

    router
}

/// Bodies are read without a size cap so every request gets a JSON envelope back
fn resource_route(kind: ResourceKind) -> MethodRouter<SharedState> {
    any(
        move |state: State<SharedState>, query: Query<Vec<(String, String)>>, body: Bytes| {
            handlers::query_resource(kind.clone(), state, query, body)
        },
    )
    .layer(DefaultBodyLimit::disable())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::handlers::AppState;
    use crate::model::{Instance, MasterDataset, Region};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(dataset: MasterDataset) -> Router {
        create_router().with_state(Arc::new(AppState::new(dataset)))
    }

    fn fixture() -> MasterDataset {
        MasterDataset {
            regions: vec![Region {
                name: "us-east-1".to_string(),
            }],
            instances: vec![
                Instance::named("web-01"),
                Instance::named("db-01"),
                Instance::named("web-02"),
            ],
            ..MasterDataset::default()
        }
    }

    async fn send(app: Router, method: &str, uri: &str, body: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_query_string_paging() {
        let (status, body) = send(app(fixture()), "GET", "/instances?offset=2&limit=1", "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["metadata"],
            json!({"totalCount": 3, "offset": 2, "limit": 1, "kind": "instances"})
        );
        assert_eq!(body["data"][0]["name"], "db-01");
        assert!(body.get("error").is_none());
    }

    #[tokio::test]
    async fn test_body_overrides_query_string() {
        let (status, body) = send(
            app(fixture()),
            "POST",
            "/instances?offset=2&limit=1",
            r#"{"offset": 1, "limit": 2}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metadata"]["offset"], 1);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_repeated_query_key_uses_first_value() {
        let (status, body) = send(app(fixture()), "GET", "/instances?limit=1&limit=3", "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metadata"]["limit"], 1);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["name"], "web-01");
    }

    #[tokio::test]
    async fn test_null_keyword_keeps_body_paging() {
        let (status, body) = send(
            app(fixture()),
            "POST",
            "/instance_search",
            r#"{"keyword": null, "limit": 1, "offset": 2}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["metadata"],
            json!({"totalCount": 3, "offset": 2, "limit": 1, "kind": "instance_search"})
        );
        assert_eq!(body["data"][0]["name"], "db-01");
    }

    #[tokio::test]
    async fn test_large_body_still_gets_envelope() {
        // Well past axum's default 2 MB limit
        let padding = "x".repeat(3 * 1024 * 1024);
        let payload = format!(r#"{{"limit": 1, "keyword": "{}"}}"#, padding);

        let (status, body) = send(app(fixture()), "POST", "/instances", &payload).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metadata"]["limit"], 1);
        assert_eq!(body["data"][0]["name"], "web-01");
    }

    #[tokio::test]
    async fn test_instance_search() {
        let (status, body) = send(
            app(fixture()),
            "POST",
            "/instance_search",
            r#"{"keyword": "web"}"#,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metadata"]["totalCount"], 2);
        assert_eq!(body["metadata"]["keyword"], "web");
        assert_eq!(body["data"][1]["name"], "web-02");
    }

    #[tokio::test]
    async fn test_paging_error_is_500_with_app_code() {
        let (status, body) = send(app(fixture()), "GET", "/regions?offset=0", "").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], 402);
        assert!(body.get("metadata").is_none());
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_falls_back_to_query_string() {
        let (status, body) = send(app(fixture()), "PUT", "/instances?limit=1", "{not json").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["metadata"]["limit"], 1);
        assert_eq!(body["data"][0]["name"], "web-01");
    }

    #[tokio::test]
    async fn test_empty_dataset_reports_out_of_bounds() {
        let (status, body) = send(app(MasterDataset::default()), "GET", "/images", "").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"]["message"],
            "Offset cannot be greater than length of data i.e., 0"
        );
    }

    #[tokio::test]
    async fn test_health_reports_counts() {
        let (status, body) = send(app(fixture()), "GET", "/health", "").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["counts"]["instances"], 3);
        assert_eq!(body["counts"]["instanceTypes"], 0);
    }

    #[tokio::test]
    async fn test_unmapped_path_is_404() {
        let response = app(fixture())
            .oneshot(Request::builder().uri("/volumes").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

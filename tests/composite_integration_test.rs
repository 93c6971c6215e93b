use composite_gateway::core::client::DownstreamClient;
use composite_gateway::core::product::ProductClient;
use composite_gateway::core::recommendation::RecommendationClient;
use composite_gateway::core::review::ReviewClient;
use composite_gateway::{CompositeGateway, ConfigProvider, GatewayError, ViewService};
use httpmock::prelude::*;
use reqwest::Client;
use std::time::{Duration, Instant};

fn build_view_service(
    product_url: String,
    recommendation_url: String,
    review_url: String,
    timeout: Duration,
) -> ViewService<ProductClient, RecommendationClient, ReviewClient> {
    let http = Client::new();

    ViewService::new(CompositeGateway::new(
        ProductClient::new(DownstreamClient::new(
            "product",
            product_url,
            http.clone(),
            timeout,
        )),
        RecommendationClient::new(DownstreamClient::new(
            "recommendation",
            recommendation_url,
            http.clone(),
            timeout,
        )),
        ReviewClient::new(DownstreamClient::new("review", review_url, http, timeout)),
    ))
}

fn mock_product(server: &MockServer, product_id: i32) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/product/{}", product_id));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "productId": product_id,
                "name": "widget",
                "weight": 5,
                "serviceAddress": "product-1/10.0.0.5:7001"
            }));
    })
}

#[tokio::test]
async fn test_full_view_happy_path() {
    let product = MockServer::start();
    let recommendation = MockServer::start();
    let review = MockServer::start();

    let product_mock = mock_product(&product, 1);
    let recommendation_mock = recommendation.mock(|when, then| {
        when.method(GET)
            .path("/recommendation")
            .query_param("productId", "1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"productId": 1, "recommendationId": 1, "author": "ann", "rating": 4, "content": "good"}
            ]));
    });
    let review_mock = review.mock(|when, then| {
        when.method(GET).path("/review/1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!([
                {"productId": 1, "reviewId": 1, "author": "bob", "subject": "solid", "content": "fine"},
                {"productId": 1, "reviewId": 2, "author": "cat", "subject": "meh", "content": "ok"}
            ]));
    });

    let service = build_view_service(
        product.base_url(),
        recommendation.base_url(),
        review.base_url(),
        Duration::from_secs(1),
    );

    let view = service.get_product_view(1).await.unwrap();

    product_mock.assert();
    recommendation_mock.assert();
    review_mock.assert();

    assert_eq!(view.product.product_id, 1);
    assert_eq!(view.product.name, "widget");
    assert_eq!(view.recommendations.len(), 1);
    assert_eq!(view.reviews.len(), 2);
    assert_eq!(
        view.product.service_address.as_deref(),
        Some("product-1/10.0.0.5:7001")
    );
}

#[tokio::test]
async fn test_view_survives_auxiliary_failures() {
    let product = MockServer::start();
    let recommendation = MockServer::start();

    let product_mock = mock_product(&product, 1);
    recommendation.mock(|when, then| {
        when.method(GET).path("/recommendation");
        then.status(500).body("recommendation engine on fire");
    });

    // Review service is unreachable entirely.
    let service = build_view_service(
        product.base_url(),
        recommendation.base_url(),
        "http://127.0.0.1:9".to_string(),
        Duration::from_secs(1),
    );

    let view = service.get_product_view(1).await.unwrap();

    product_mock.assert();
    assert_eq!(view.product.product_id, 1);
    assert!(view.recommendations.is_empty());
    assert!(view.reviews.is_empty());
}

#[tokio::test]
async fn test_view_survives_auxiliary_timeouts() {
    let product = MockServer::start();
    let recommendation = MockServer::start();
    let review = MockServer::start();

    let product_mock = mock_product(&product, 1);
    recommendation.mock(|when, then| {
        when.method(GET).path("/recommendation");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(serde_json::json!([]));
    });
    review.mock(|when, then| {
        when.method(GET).path("/review/1");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(serde_json::json!([]));
    });

    let service = build_view_service(
        product.base_url(),
        recommendation.base_url(),
        review.base_url(),
        Duration::from_millis(500),
    );

    let started = Instant::now();
    let view = service.get_product_view(1).await.unwrap();
    let elapsed = started.elapsed();

    product_mock.assert();
    assert!(view.recommendations.is_empty());
    assert!(view.reviews.is_empty());
    // Bounded by the auxiliary calls' own timeout, not their response delay.
    assert!(
        elapsed < Duration::from_secs(2),
        "view took {:?}, should be bounded by the 500ms timeout",
        elapsed
    );
}

#[tokio::test]
async fn test_fatal_product_failure_is_not_delayed_by_slow_auxiliaries() {
    let product = MockServer::start();
    let recommendation = MockServer::start();
    let review = MockServer::start();

    product.mock(|when, then| {
        when.method(GET).path("/product/13");
        then.status(500).body("product db down");
    });
    recommendation.mock(|when, then| {
        when.method(GET).path("/recommendation");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(serde_json::json!([]));
    });
    review.mock(|when, then| {
        when.method(GET).path("/review/13");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(serde_json::json!([]));
    });

    let service = build_view_service(
        product.base_url(),
        recommendation.base_url(),
        review.base_url(),
        Duration::from_secs(5),
    );

    let started = Instant::now();
    let err = service.get_product_view(13).await.unwrap_err();
    let elapsed = started.elapsed();

    match err {
        GatewayError::Unexpected { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "product db down");
        }
        other => panic!("expected Unexpected, got {:?}", other),
    }
    // The product answer came back immediately; the in-flight auxiliary
    // calls are dropped rather than awaited.
    assert!(
        elapsed < Duration::from_millis(1500),
        "product failure took {:?} to surface",
        elapsed
    );
}

#[tokio::test]
async fn test_reads_are_issued_concurrently() {
    let product = MockServer::start();
    let recommendation = MockServer::start();
    let review = MockServer::start();

    product.mock(|when, then| {
        when.method(GET).path("/product/1");
        then.status(200)
            .delay(Duration::from_millis(400))
            .json_body(serde_json::json!({"productId": 1, "name": "widget", "weight": 5}));
    });
    recommendation.mock(|when, then| {
        when.method(GET).path("/recommendation");
        then.status(200)
            .delay(Duration::from_millis(400))
            .json_body(serde_json::json!([]));
    });
    review.mock(|when, then| {
        when.method(GET).path("/review/1");
        then.status(200)
            .delay(Duration::from_millis(400))
            .json_body(serde_json::json!([]));
    });

    let service = build_view_service(
        product.base_url(),
        recommendation.base_url(),
        review.base_url(),
        Duration::from_secs(2),
    );

    let started = Instant::now();
    let view = service.get_product_view(1).await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(view.product.product_id, 1);
    // Three sequential 400ms calls would take 1.2s; concurrent fan-out stays
    // close to a single call's latency.
    assert!(
        elapsed < Duration::from_millis(1100),
        "reads took {:?}, expected concurrent fan-out",
        elapsed
    );
}

#[tokio::test]
async fn test_product_not_found_propagates_through_the_view() {
    let product = MockServer::start();
    let recommendation = MockServer::start();
    let review = MockServer::start();

    product.mock(|when, then| {
        when.method(GET).path("/product/13");
        then.status(404)
            .header("Content-Type", "application/json")
            .body(r#"{"message":"No product found for productId: 13"}"#);
    });
    recommendation.mock(|when, then| {
        when.method(GET).path("/recommendation");
        then.status(200).json_body(serde_json::json!([]));
    });
    review.mock(|when, then| {
        when.method(GET).path("/review/13");
        then.status(200).json_body(serde_json::json!([]));
    });

    let service = build_view_service(
        product.base_url(),
        recommendation.base_url(),
        review.base_url(),
        Duration::from_secs(1),
    );

    match service.get_product_view(13).await.unwrap_err() {
        GatewayError::NotFound(message) => {
            assert_eq!(message, "No product found for productId: 13")
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_view_rejects_invalid_id_without_downstream_calls() {
    let product = MockServer::start();
    let recommendation = MockServer::start();
    let review = MockServer::start();

    let product_mock = product.mock(|when, then| {
        when.path_contains("/");
        then.status(200);
    });
    let recommendation_mock = recommendation.mock(|when, then| {
        when.path_contains("/");
        then.status(200);
    });
    let review_mock = review.mock(|when, then| {
        when.path_contains("/");
        then.status(200);
    });

    let service = build_view_service(
        product.base_url(),
        recommendation.base_url(),
        review.base_url(),
        Duration::from_secs(1),
    );

    assert!(matches!(
        service.get_product_view(0).await.unwrap_err(),
        GatewayError::InvalidInput(_)
    ));

    product_mock.assert_hits(0);
    recommendation_mock.assert_hits(0);
    review_mock.assert_hits(0);
}

struct StaticConfig {
    product_url: String,
    recommendation_url: String,
    review_url: String,
}

impl ConfigProvider for StaticConfig {
    fn product_service_url(&self) -> String {
        self.product_url.clone()
    }

    fn recommendation_service_url(&self) -> String {
        self.recommendation_url.clone()
    }

    fn review_service_url(&self) -> String {
        self.review_url.clone()
    }

    fn request_timeout_seconds(&self) -> u64 {
        1
    }
}

#[tokio::test]
async fn test_from_config_wires_all_three_gateways() {
    let product = MockServer::start();
    let recommendation = MockServer::start();
    let review = MockServer::start();

    let product_mock = mock_product(&product, 1);
    let recommendation_mock = recommendation.mock(|when, then| {
        when.method(GET)
            .path("/recommendation")
            .query_param("productId", "1");
        then.status(200).json_body(serde_json::json!([]));
    });
    let review_mock = review.mock(|when, then| {
        when.method(GET).path("/review/1");
        then.status(200).json_body(serde_json::json!([]));
    });

    let config = StaticConfig {
        product_url: product.base_url(),
        recommendation_url: recommendation.base_url(),
        review_url: review.base_url(),
    };

    let service = ViewService::new(CompositeGateway::from_config(&config));
    let view = service.get_product_view(1).await.unwrap();

    product_mock.assert();
    recommendation_mock.assert();
    review_mock.assert();
    assert_eq!(view.product.product_id, 1);
}

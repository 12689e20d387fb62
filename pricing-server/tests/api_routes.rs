use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use pricing_server::api::build_app;
use pricing_server::{CatalogStore, Config, PricingData, ServerState};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

fn sample_data() -> PricingData {
    serde_json::from_value(json!({
        "tiers": {
            "standard": [
                { "min_quantity": 1, "max_quantity": 49, "unit_price": 35 },
                { "min_quantity": 50, "max_quantity": 199, "unit_price": 30 },
                { "min_quantity": 200, "unit_price": 25 }
            ],
            "premium": [
                { "min_quantity": 1, "max_quantity": 9, "discount_percent": 0 },
                { "min_quantity": 10, "discount_percent": 15 }
            ],
            "tool": [
                { "min_quantity": 2, "max_quantity": 2, "discount_percent": 10 },
                { "min_quantity": 3, "discount_percent": 20 }
            ]
        },
        "products": [
            { "product_code": "CRS-200", "name": "Crimp sleeves 200", "base_unit_price": 40,
              "product_type": "consumable", "pricing_tier": "standard" },
            { "product_code": "CRS-300", "name": "Crimp sleeves 300", "base_unit_price": 38,
              "product_type": "consumable", "pricing_tier": "standard" },
            { "product_code": "BLD-100", "name": "Blades", "base_unit_price": 20,
              "product_type": "consumable", "pricing_tier": "premium" },
            { "product_code": "DRL-500", "name": "Crimping tool", "base_unit_price": 150,
              "product_type": "tool" }
        ],
        "portals": [
            { "token": "tok-acme", "customer_name": "Acme", "discounts": { "BLD-100": 5 } }
        ]
    }))
    .unwrap()
}

struct TestApp {
    router: Router,
    dir: TempDir,
}

fn test_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pricing.json");
    let mut config = Config::with_overrides(path.to_string_lossy(), 0);
    config.max_cart_lines = 10;
    config.request_timeout_ms = 30_000;
    let store = CatalogStore::from_data(&path, sample_data()).unwrap();
    let state = ServerState::with_store(config, store);
    TestApp {
        router: build_app(&state).with_state(state),
        dir,
    }
}

async fn send(app: &TestApp, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["catalog_version"].as_str().unwrap().len(), 64);
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let app = test_app();
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_portal_preview_standard_aggregate() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/pricing-preview",
        Some(json!({
            "token": "tok-acme",
            "items": [
                { "product_code": "CRS-200", "quantity": 30 },
                { "product_code": "CRS-300", "quantity": 25 }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["lines"][0]["unit_price"], 30.0);
    assert_eq!(body["lines"][1]["unit_price"], 30.0);
    assert_eq!(body["subtotal"], 1650.0);
    assert_eq!(body["total_savings"], 500.0);
    assert_eq!(body["total"], 1650.0);
    assert!(body.get("shipping").is_none());
}

#[tokio::test]
async fn test_portal_preview_applies_negotiated_discount_and_charges() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/pricing-preview",
        Some(json!({
            "token": "tok-acme",
            "items": [{ "product_code": "BLD-100", "quantity": 12 }],
            "charges": { "shipping": 10, "vat_amount": 40.4 }
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["lines"][0]["unit_price"], 16.0);
    assert_eq!(
        body["lines"][0]["discount_applied"],
        "15% off — 10+ units + 5% account discount"
    );
    assert_eq!(body["subtotal"], 192.0);
    assert_eq!(body["total"], 242.4);
}

#[tokio::test]
async fn test_portal_preview_merges_and_drops_zero_lines() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/pricing-preview",
        Some(json!({
            "token": "tok-acme",
            "items": [
                { "product_code": "DRL-500", "quantity": 1 },
                { "product_code": "CRS-200", "quantity": 0 },
                { "product_code": "DRL-500", "quantity": 2 }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    let lines = body["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["quantity"], 3);
    assert_eq!(lines[0]["unit_price"], 120.0);
}

#[tokio::test]
async fn test_portal_preview_unknown_token() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/pricing-preview",
        Some(json!({ "token": "nope", "items": [] })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);
}

#[tokio::test]
async fn test_portal_preview_unknown_product() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/pricing-preview",
        Some(json!({
            "token": "tok-acme",
            "items": [{ "product_code": "XYZ-1", "quantity": 1 }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 6001);
    assert_eq!(body["details"]["product_code"], "XYZ-1");
}

#[tokio::test]
async fn test_portal_preview_negative_quantity() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/pricing-preview",
        Some(json!({
            "token": "tok-acme",
            "items": [{ "product_code": "CRS-200", "quantity": -4 }]
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4002);
    assert_eq!(body["details"]["field"], "quantity");
    assert_eq!(body["details"]["product_code"], "CRS-200");
}

#[tokio::test]
async fn test_cart_too_large() {
    let app = test_app();
    let items: Vec<Value> = (0..11)
        .map(|_| json!({ "product_code": "CRS-200", "quantity": 1 }))
        .collect();
    let (status, body) = send(
        &app,
        Method::POST,
        "/pricing-preview",
        Some(json!({ "token": "tok-acme", "items": items })),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["code"], 4001);
}

#[tokio::test]
async fn test_quote_preview_uses_supplied_lines() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/quotes/preview",
        Some(json!({
            "lines": [
                { "product_code": "CUSTOM-1", "quantity": 2, "base_unit_price": 99.99,
                  "product_type": "tool" },
                { "product_code": "CUSTOM-2", "quantity": 1, "base_unit_price": 10,
                  "line_discount_percent": 10, "product_type": "consumable" },
                { "product_code": "CUSTOM-3", "quantity": 1, "base_unit_price": 5,
                  "product_type": "gadget" }
            ]
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{body}");
    // 99.99 × 0.9 = 89.991
    assert_eq!(body["lines"][0]["unit_price"], 89.99);
    assert_eq!(body["lines"][1]["unit_price"], 9.0);
    assert_eq!(body["lines"][1]["discount_applied"], "10% account discount");
    assert_eq!(body["lines"][2]["unit_price"], 5.0);
}

#[tokio::test]
async fn test_quote_preview_rejects_duplicates() {
    let app = test_app();
    let line = json!({ "product_code": "A", "quantity": 1, "base_unit_price": 1,
                       "product_type": "tool" });
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/quotes/preview",
        Some(json!({ "lines": [line.clone(), line] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4005);
}

#[tokio::test]
async fn test_quote_preview_rejects_out_of_range_discount() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/quotes/preview",
        Some(json!({ "lines": [{ "product_code": "A", "quantity": 1, "base_unit_price": 1,
                                 "line_discount_percent": 120, "product_type": "tool" }] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 4004);
}

#[tokio::test]
async fn test_tier_catalog_get_and_replace() {
    let app = test_app();
    let (status, current) = send(&app, Method::GET, "/api/tier-catalog", None).await;
    assert_eq!(status, StatusCode::OK);
    let version = current["version"].as_str().unwrap().to_string();
    assert_eq!(current["catalog"]["standard"].as_array().unwrap().len(), 3);

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/tier-catalog",
        Some(json!({
            "catalog": { "tool": [{ "min_quantity": 1, "discount_percent": 50 }] },
            "expected_version": version
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{updated}");
    assert_ne!(updated["version"], version.as_str());
    assert!(app.dir.path().join("pricing.json").exists());

    // New catalog is live for pricing
    let (_, body) = send(
        &app,
        Method::POST,
        "/pricing-preview",
        Some(json!({
            "token": "tok-acme",
            "items": [{ "product_code": "DRL-500", "quantity": 1 },
                      { "product_code": "CRS-200", "quantity": 60 }]
        })),
    )
    .await;
    assert_eq!(body["lines"][0]["unit_price"], 75.0);
    assert_eq!(body["lines"][1]["unit_price"], 40.0);

    // Stale version
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/tier-catalog",
        Some(json!({ "catalog": {}, "expected_version": version })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 7003);
}

#[tokio::test]
async fn test_tier_catalog_replace_rejects_invalid() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/tier-catalog",
        Some(json!({
            "catalog": { "premium": [
                { "min_quantity": 10, "discount_percent": 5 },
                { "min_quantity": 10, "discount_percent": 8 }
            ] }
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7002);
    assert!(!app.dir.path().join("pricing.json").exists());
}

#[tokio::test]
async fn test_tier_catalog_resolve() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/tier-catalog/resolve",
        Some(json!({ "tier": "standard", "quantity": 55 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["min_quantity"], 50);
    assert_eq!(body["unit_price"], 30.0);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/tier-catalog/resolve",
        Some(json!({ "tier": "tool", "quantity": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());
}

use std::collections::HashMap;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use urbanbrush_web::{app, config::Config, db::LeadStore, AppState};

fn test_app(overrides: HashMap<String, Vec<String>>) -> Router {
    let config = Config {
        availability_overrides: overrides.clone(),
        ..Config::default()
    };
    app(AppState::new(config, LeadStore::in_memory(overrides)))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = send(test_app(HashMap::new()), get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "memory");
}

#[tokio::test]
async fn test_estimate_matches_formula() {
    let request = post_json(
        "/api/quote/estimate",
        json!({
            "apartmentSize": "1BR",
            "roomCount": 1,
            "paintQuality": "Standard",
            "ecoFriendly": true,
            "neighborhood": "Bronx"
        }),
    );
    let (status, body) = send(test_app(HashMap::new()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["low"], 1223);
    assert_eq!(body["high"], 1480);
    assert_eq!(body["currency"], "USD");
    assert_eq!(body["breakdown"]["subtotal"], "1286.88");
}

#[tokio::test]
async fn test_estimate_tolerates_unknown_values() {
    let request = post_json(
        "/api/quote/estimate",
        json!({
            "apartmentSize": "Mansion",
            "roomCount": -4,
            "paintQuality": "Standard",
            "ecoFriendly": false,
            "neighborhood": "Atlantis"
        }),
    );
    let (status, body) = send(test_app(HashMap::new()), request).await;

    // 1BR base, no rooms, neutral multipliers: 999 -> 949.05 / 1148.85
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["low"], 949);
    assert_eq!(body["high"], 1149);
}

#[tokio::test]
async fn test_rates_and_packages() {
    let (status, body) = send(test_app(HashMap::new()), get("/api/rates")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["roomRate"], "150");
    assert_eq!(body["neighborhoodAdjustments"].as_array().unwrap().len(), 15);

    let (status, body) = send(test_app(HashMap::new()), get("/api/packages")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["packages"].as_array().unwrap().len(), 3);
    assert_eq!(body["addOns"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_availability_defaults_and_overrides() {
    let mut overrides = HashMap::new();
    overrides.insert("2025-11-27".to_string(), vec!["11:00".to_string()]);
    let app = test_app(overrides);

    let (status, body) = send(app.clone(), get("/api/availability?date=2025-11-26")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["slots"], json!(["09:00", "12:00", "15:00", "18:00"]));

    let (_, body) = send(app, get("/api/availability?date=2025-11-27")).await;
    assert_eq!(body["slots"], json!(["11:00"]));
}

#[tokio::test]
async fn test_checkout_flow() {
    let app = test_app(HashMap::new());

    let (status, body) = send(
        app.clone(),
        post_json(
            "/api/checkout",
            json!({ "date": "2025-06-14", "slot": "12:00", "deposit": 250 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["url"], "#");
    assert_eq!(body["deposit"], 250);
    assert!(body["qrCode"].as_str().unwrap().starts_with("data:image/png;base64,"));

    let (status, body) = send(
        app,
        post_json(
            "/api/checkout",
            json!({ "date": "2025-06-14", "slot": "12:00", "deposit": 10 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errorType"], "validation");
}

#[tokio::test]
async fn test_send_quote_forwards_computed_price() {
    let request = post_json(
        "/api/send-quote",
        json!({
            "name": "Jordan",
            "email": "jordan@example.com",
            "phone": "555-0101",
            "preferredWindow": "Weekdays PM",
            "quote": {
                "size": "3BR+",
                "rooms": 2,
                "paintQuality": "Designer",
                "ecoFriendly": true,
                "neighborhood": "Upper East Side"
            }
        }),
    );
    let (status, body) = send(test_app(HashMap::new()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["price"], json!({ "low": 3618, "high": 4380 }));
}

#[tokio::test]
async fn test_contact_validation() {
    let request = post_json(
        "/api/contact",
        json!({ "name": "Kim", "email": "not-an-email" }),
    );
    let (status, body) = send(test_app(HashMap::new()), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"], json!(["email: must contain '@'"]));
}

#[tokio::test]
async fn test_booked_slot_is_held() {
    let app = test_app(HashMap::new());
    let booking = || post_json("/api/checkout", json!({ "date": "2025-06-14", "slot": "12:00" }));

    let (status, _) = send(app.clone(), booking()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(app.clone(), booking()).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errorType"], "validation");

    let (_, body) = send(app, get("/api/availability?date=2025-06-14")).await;
    assert_eq!(body["slots"], json!(["09:00", "15:00", "18:00"]));
}

#[tokio::test]
async fn test_estimate_accepts_float_room_count() {
    let request = post_json(
        "/api/quote/estimate",
        json!({ "apartmentSize": "1BR", "roomCount": 1.0, "neighborhood": "Bronx" }),
    );
    let (status, body) = send(test_app(HashMap::new()), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["low"], 1223);
    assert_eq!(body["high"], 1480);
}

#[tokio::test]
async fn test_estimate_large_room_count_follows_formula() {
    let app = test_app(HashMap::new());
    let estimate = |rooms: i64| {
        post_json(
            "/api/quote/estimate",
            json!({ "apartmentSize": "1BR", "roomCount": rooms }),
        )
    };

    let (_, thousand) = send(app.clone(), estimate(1_000)).await;
    let (status, two_thousand) = send(app, estimate(2_000)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(two_thousand["low"].as_u64() > thousand["low"].as_u64());
    assert_eq!(two_thousand["low"], 368302);
}

#[tokio::test]
async fn test_malformed_body_gets_json_error() {
    let (status, body) = send(
        test_app(HashMap::new()),
        post_json("/api/send-quote", json!({ "email": "a@b.c" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errorType"], "validation");
    assert_eq!(body["message"], "Invalid request body");

    let request = Request::builder()
        .method("POST")
        .uri("/api/checkout")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(test_app(HashMap::new()), request).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["errorType"], "validation");
}

#[tokio::test]
async fn test_availability_requires_date() {
    let (status, body) = send(test_app(HashMap::new()), get("/api/availability")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Invalid query string");
}

#[tokio::test]
async fn test_unknown_api_path_is_json_not_found() {
    let (status, body) = send(test_app(HashMap::new()), get("/api/does-not-exist")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["errorType"], "not_found");
}

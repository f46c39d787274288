//! Integration tests for the HTTP API endpoints.
//!
//! Uses axum's oneshot pattern (via tower::ServiceExt) — no TCP binding
//! needed. Every test builds a fresh stateless router.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use gol::board::Board;
use gol::server::{create_router, MAX_BOARD_SIZE};

fn app() -> axum::Router {
    create_router("static")
}

/// Parse response body as JSON.
async fn body_json(body: Body) -> serde_json::Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn step_request(body: serde_json::Value) -> Request<Body> {
    Request::post("/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

// ── GET /health ──────────────────────────────────────────────────────

#[tokio::test]
async fn health_returns_200() {
    let resp = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["status"], "OK");
}

// ── GET /new/{size} ──────────────────────────────────────────────────

#[tokio::test]
async fn new_board_has_requested_dimensions() {
    let resp = app()
        .oneshot(Request::get("/new/7").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp.into_body()).await;
    let rows = json["states"].as_array().unwrap();
    assert_eq!(rows.len(), 7);
    for row in rows {
        let row = row.as_array().unwrap();
        assert_eq!(row.len(), 7);
        for cell in row {
            assert!(cell.is_boolean());
        }
    }
}

#[tokio::test]
async fn new_board_size_zero_is_empty() {
    let resp = app()
        .oneshot(Request::get("/new/0").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp.into_body()).await;
    assert_eq!(json["states"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn new_board_rejects_oversized_request() {
    let uri = format!("/new/{}", MAX_BOARD_SIZE + 1);
    let resp = app()
        .oneshot(Request::get(uri.as_str()).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp.into_body()).await;
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn new_board_rejects_non_numeric_size() {
    let resp = app()
        .oneshot(Request::get("/new/abc").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ── POST / ───────────────────────────────────────────────────────────

#[tokio::test]
async fn step_advances_blinker() {
    let before = Board::from_text(&["-----", "-----", "-xxx-", "-----", "-----"]).unwrap();
    let expected = Board::from_text(&["-----", "--x--", "--x--", "--x--", "-----"]).unwrap();

    let resp = app()
        .oneshot(step_request(serde_json::to_value(&before).unwrap()))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let after: Board = serde_json::from_value(body_json(resp.into_body()).await).unwrap();
    assert_eq!(after, expected);
}

#[tokio::test]
async fn step_is_deterministic_across_requests() {
    let board = serde_json::to_value(Board::random_square(6)).unwrap();

    let resp1 = app().oneshot(step_request(board.clone())).await.unwrap();
    let json1 = body_json(resp1.into_body()).await;

    let resp2 = app().oneshot(step_request(board)).await.unwrap();
    let json2 = body_json(resp2.into_body()).await;

    assert_eq!(json1, json2);
}

#[tokio::test]
async fn step_rejects_ragged_board() {
    // Valid JSON, invalid board: row 1 is shorter than row 0.
    let body = serde_json::json!({ "states": [[true, true], [true]] });
    let resp = app().oneshot(step_request(body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let json = body_json(resp.into_body()).await;
    assert!(json.get("error").is_some());

    // A row longer than row 0 is just as ragged; no cell may be dropped.
    let body = serde_json::json!({ "states": [[true], [true, true]] });
    let resp = app().oneshot(step_request(body)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn step_rejects_malformed_body() {
    let resp = app()
        .oneshot(
            Request::post("/")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// ── GET /info/ ───────────────────────────────────────────────────────

#[tokio::test]
async fn info_has_metadata_fields() {
    let resp = app()
        .oneshot(Request::get("/info/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp.into_body()).await;
    assert_eq!(json["language"], "Rust");
    assert!(json.get("author").is_some());
    assert_eq!(json["source"], "README.md");
    assert!(json["colors"].get("alive").is_some());
    assert!(json["colors"].get("dead").is_some());
}

// ── Static files ─────────────────────────────────────────────────────

#[tokio::test]
async fn root_serves_index_page() {
    let resp = app()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

//! Axum HTTP server: the Game of Life API.
//!
//! All endpoints are stateless; each request builds or receives its own board
//! and calls into the pure core, so nothing is shared across requests.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/new/{size}` | Fresh random `size`×`size` board |
//! | POST | `/` | Advance a posted board by one generation |
//! | GET | `/info/` | Static metadata about this implementation |
//! | GET | anything else | Static files (the board viewer) |

use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::board::Board;
use crate::stepper::step;

/// Largest board `/new/{size}` will build. One step is O(area); this keeps a
/// single request bounded at ~1M cells.
pub const MAX_BOARD_SIZE: usize = 1024;

pub fn create_router(static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let index = ServeFile::new(format!("{static_dir}/index.html"));

    Router::new()
        .route("/health", get(handle_health_check))
        .route("/new/{size}", get(handle_new_board))
        .route("/info/", get(handle_info))
        .route("/", post(handle_step).get_service(index))
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
}

fn error_response(status: StatusCode, msg: &str) -> (StatusCode, Json<serde_json::Value>) {
    (status, Json(serde_json::json!({ "error": msg })))
}

async fn handle_health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn handle_new_board(
    Path(size): Path<usize>,
) -> Result<Json<Board>, (StatusCode, Json<serde_json::Value>)> {
    if size > MAX_BOARD_SIZE {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Requested board size is too large",
        ));
    }
    Ok(Json(Board::random_square(size)))
}

async fn handle_step(
    Json(board): Json<Board>,
) -> Result<Json<Board>, (StatusCode, Json<serde_json::Value>)> {
    // The wire format accepts any [[bool]]; stepping indexes every row at
    // row 0's width, so ragged boards must be rejected here.
    if !board.is_rectangular() {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "Board rows must all have the same length",
        ));
    }
    Ok(Json(step(&board)))
}

async fn handle_info() -> impl IntoResponse {
    Json(serde_json::json!({
        "author": "gol contributors",
        "language": "Rust",
        "source": "README.md",
        "colors": {
            "alive": "#2e7d32",
            "dead": "#eceff1",
        },
    }))
}

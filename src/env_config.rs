//! Environment configuration for the server binary.

/// Read `GOL_PORT` (default 8080).
pub fn server_port() -> u16 {
    std::env::var("GOL_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080)
}

/// Read `GOL_STATIC_DIR` (default `"static"`): the directory served at `/`.
pub fn static_dir() -> String {
    std::env::var("GOL_STATIC_DIR").unwrap_or_else(|_| "static".to_string())
}

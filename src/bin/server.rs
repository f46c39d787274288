use gol::env_config;
use gol::server::create_router;

#[tokio::main]
async fn main() {
    let port = env_config::server_port();
    let static_dir = env_config::static_dir();
    println!("Starting Game of Life server (static dir: {static_dir})...");

    let app = create_router(&static_dir);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .expect("failed to bind server port");
    println!("Server is running on port {}. Press Ctrl+C to stop.", port);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");

    println!("\nStopping server...");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
}

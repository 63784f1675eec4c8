use std::net::SocketAddr;

mod adapters;
mod app;
mod assets;
pub mod config;
mod insights;
mod ports;
mod push;
mod state;
mod tasks;
mod templates;
mod types;

pub use app::app;
pub use push::vapid::{VapidCredentials, generate_vapid_credentials};

pub async fn serve(addr: SocketAddr, config: config::AppConfig) {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind address");
    axum::serve(listener, app(config)).await.expect("server error");
}

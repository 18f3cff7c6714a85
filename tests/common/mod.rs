//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::time::Duration;

use erp_api::config::{ApiConfig, Environment};
use erp_api::{ApiServer, Shutdown};

/// A server running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the API with the given environment mode on 127.0.0.1:0.
pub async fn start_server(environment: Environment) -> TestServer {
    let mut config = ApiConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.listener.port = 0;
    config.environment = environment;

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = ApiServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer { addr, shutdown }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}

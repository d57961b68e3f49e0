#![allow(dead_code)]

use hybrid_tester::{Console, HybridClient};
use serde_json::{Value, json};

pub fn client_for(server: &httpmock::MockServer) -> HybridClient {
    HybridClient::new(server.base_url())
}

/// A base URL nothing is listening on.
pub fn dead_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn console() -> Console<Vec<u8>> {
    Console::buffer()
}

pub fn hybrid_status() -> Value {
    json!({
        "success": true,
        "data": {
            "providers": {"aws": {"available": true}, "python": {"available": true}},
            "config": {"provider": "hybrid"}
        }
    })
}

pub fn config_echo(provider: &str) -> Value {
    json!({
        "success": true,
        "data": {
            "message": "Configuration updated successfully",
            "newConfig": {"provider": provider, "primaryProvider": "python", "fallbackEnabled": false}
        }
    })
}

#![allow(dead_code)]

use catalogo::configuration::{
    DatabaseSettings, JwtSettings, LoginSettings, Settings, StorageKind,
};
use catalogo::db::Store;
use serde_json::json;
use std::net::TcpListener;

pub const USERNAME: &str = "filipe";
pub const PASSWORD: &str = "123456";

pub struct TestApp {
    pub address: String,
    pub settings: Settings,
    pub client: reqwest::Client,
}

pub fn test_settings() -> Settings {
    Settings {
        app_port: 0,
        app_host: "127.0.0.1".to_string(),
        storage: StorageKind::Memory,
        database: DatabaseSettings {
            username: "postgres".to_string(),
            password: "postgres".to_string(),
            host: "localhost".to_string(),
            port: 5432,
            database_name: "catalogo".to_string(),
        },
        jwt: JwtSettings {
            key: "integration-test-signing-key".to_string(),
            issuer: "catalogo-test".to_string(),
            audience: "catalogo-test-clients".to_string(),
            expiration_minutes: 60,
        },
        login: LoginSettings {
            username: USERNAME.to_string(),
            password: PASSWORD.to_string(),
        },
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(Store::memory(), test_settings()).await
}

pub async fn spawn_app_with(store: Store, settings: Settings) -> TestApp {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = catalogo::startup::run(listener, store, settings.clone())
        .expect("Failed to bind address.");
    let _ = tokio::spawn(server);

    TestApp {
        address,
        settings,
        client: reqwest::Client::new(),
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    pub async fn login(&self) -> String {
        let response = self
            .client
            .post(self.url("/login"))
            .json(&json!({"username": USERNAME, "password": PASSWORD}))
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status().as_u16(), 200);

        let body: serde_json::Value = response.json().await.expect("token body");
        body["token"]
            .as_str()
            .expect("token should be a string")
            .to_string()
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> reqwest::Response {
        let mut request = self.client.get(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("Failed to execute request.")
    }

    pub async fn post(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn put(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .put(self.url(path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub fn tamper_signature(token: &str) -> String {
    let dot = token.rfind('.').expect("token has a signature segment");
    let mut bytes = token.as_bytes().to_vec();
    let idx = dot + 1;
    bytes[idx] = if bytes[idx] == b'A' { b'B' } else { b'A' };
    String::from_utf8(bytes).unwrap()
}

pub async fn error_message(response: reqwest::Response) -> String {
    let body: serde_json::Value = response.json().await.expect("error body is JSON");
    body["message"].as_str().unwrap_or_default().to_string()
}

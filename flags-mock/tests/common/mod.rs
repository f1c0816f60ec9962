#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::header::CONTENT_TYPE;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use flags_mock::server::serve;

pub fn random_string(prefix: &str, length: usize) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect();
    format!("{}_{}", prefix, suffix)
}

pub struct ServerHandle {
    pub addr: SocketAddr,
    shutdown: Arc<Notify>,
}

impl ServerHandle {
    /// Binds an ephemeral port and spawns a server with its own empty store.
    pub async fn start() -> ServerHandle {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let notify = Arc::new(Notify::new());
        let shutdown = notify.clone();

        tokio::spawn(
            async move { serve(listener, async move { notify.notified().await }).await },
        );
        ServerHandle { addr, shutdown }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn create_flag<T: Into<reqwest::Body>>(
        &self,
        project_key: &str,
        body: T,
    ) -> reqwest::Response {
        let client = reqwest::Client::new();
        client
            .post(self.url(&format!("/api/v2/flags/{}", project_key)))
            .body(body)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .expect("failed to send request")
    }

    pub async fn get_flag(&self, project_key: &str, flag_key: &str) -> reqwest::Response {
        let client = reqwest::Client::new();
        client
            .get(self.url(&format!("/api/v2/flags/{}/{}", project_key, flag_key)))
            .send()
            .await
            .expect("failed to send request")
    }

    pub async fn delete_flag(&self, project_key: &str, flag_key: &str) -> reqwest::Response {
        let client = reqwest::Client::new();
        client
            .delete(self.url(&format!("/api/v2/flags/{}/{}", project_key, flag_key)))
            .send()
            .await
            .expect("failed to send request")
    }

    pub async fn archive_flag(&self, project_key: &str, flag_key: &str) -> reqwest::Response {
        let client = reqwest::Client::new();
        client
            .post(self.url(&format!(
                "/api/v2/flags/{}/{}/archive",
                project_key, flag_key
            )))
            .send()
            .await
            .expect("failed to send request")
    }

    pub async fn options(&self, path: &str) -> reqwest::Response {
        let client = reqwest::Client::new();
        client
            .request(reqwest::Method::OPTIONS, self.url(path))
            .send()
            .await
            .expect("failed to send request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        let client = reqwest::Client::new();
        client
            .get(self.url(path))
            .send()
            .await
            .expect("failed to send request")
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        self.shutdown.notify_one()
    }
}

use chat_service::config::ChatConfig;
use chat_service::services::providers::TextProvider;
use chat_service::startup::Application;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    pub async fn spawn(provider: Arc<dyn TextProvider>) -> Self {
        std::env::set_var("GOOGLE_API_KEY", "test-api-key");

        let mut config = ChatConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing

        let app = Application::build_with_provider(config, provider)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/api/health/", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address }
    }
}

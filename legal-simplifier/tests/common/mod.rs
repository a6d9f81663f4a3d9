#![allow(dead_code)]

use legal_simplifier::config::{GeminiSettings, LoggingSettings, ServerSettings, Settings};
use legal_simplifier::startup::Application;
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_MODEL: &str = "gemini-2.5-flash";
pub const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

pub const THREE_SECTION_REPLY: &str = "### 1. One-Sentence Summary
The company may end your account at any time.

### 2. Key Risks & Obligations
* You must pay fees on time.
* Terms can change without notice.
* Disputes go to arbitration.

### 3. Simplified Version (8th Grade Level)
You can use the service if you follow the rules.
";

pub struct TestApp {
    pub address: String,
    pub backend: MockServer,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn the app against a fake Gemini backend with the API key set.
    pub async fn spawn() -> Self {
        Self::spawn_with_key(Some(TEST_API_KEY)).await
    }

    /// Spawn the app; `None` leaves the API key variable unset.
    pub async fn spawn_with_key(api_key: Option<&str>) -> Self {
        let backend = MockServer::start().await;

        // Each app gets its own variable so parallel tests don't interfere.
        let api_key_env = format!(
            "LEGAL_SIMPLIFIER_TEST_KEY_{}",
            uuid::Uuid::new_v4().simple()
        );
        if let Some(key) = api_key {
            std::env::set_var(&api_key_env, key);
        }

        let settings = Settings {
            server: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
                static_dir: "static".to_string(),
            },
            gemini: GeminiSettings {
                base_url: format!("{}/v1beta", backend.uri()),
                model: TEST_MODEL.to_string(),
                api_key_env,
            },
            logging: LoggingSettings::default(),
        };

        let app = Application::build(settings)
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        Self {
            address,
            backend,
            client,
        }
    }

    pub async fn post_api(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/simplify", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_form(&self, document_type: &str, text: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/simplify", self.address))
            .form(&[("document_type", document_type), ("text", text)])
            .send()
            .await
            .expect("Failed to execute request")
    }
}

#![allow(dead_code)]

use predict_service::config::{ModelConfig, PredictConfig};
use predict_service::model::{COMPANION_FILE, INDEX_FILE};
use predict_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Directory with a valid artifact pair, removed by `cleanup`.
pub async fn write_model_dir() -> PathBuf {
    let dir = PathBuf::from(format!("target/test-models-{}", Uuid::new_v4()));
    tokio::fs::create_dir_all(&dir)
        .await
        .expect("Failed to create model dir");
    tokio::fs::write(dir.join(INDEX_FILE), r#"{"documents": ["bp", "ecg"]}"#)
        .await
        .expect("Failed to write index");
    tokio::fs::write(dir.join(COMPANION_FILE), [7u8; 32])
        .await
        .expect("Failed to write companion");
    dir
}

pub fn test_config(model_dir: &Path) -> PredictConfig {
    PredictConfig {
        common: CoreConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0, // Random port for testing
        },
        model: ModelConfig {
            dir: model_dir.to_path_buf(),
        },
        otlp_endpoint: None,
    }
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub model_dir: PathBuf,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let model_dir = write_model_dir().await;

        let app = Application::build(test_config(&model_dir))
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until(std::future::pending()).await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            model_dir,
        }
    }

    pub async fn cleanup(&self) {
        let _ = tokio::fs::remove_dir_all(&self.model_dir).await;
    }
}

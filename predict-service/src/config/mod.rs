use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

/// Directory name holding the model artifacts, next to the executable.
const DEFAULT_MODEL_DIR_NAME: &str = "models";

#[derive(Debug, Clone)]
pub struct PredictConfig {
    pub common: core_config::Config,
    pub model: ModelConfig,
    /// OTLP collector for span export; logs stay on stdout when unset.
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Directory containing `index.json` and `index.faiss`.
    pub dir: PathBuf,
}

impl PredictConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        let dir = match env::var("MODEL_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => default_model_dir()?,
        };

        Ok(PredictConfig {
            common,
            model: ModelConfig { dir },
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
        })
    }
}

fn default_model_dir() -> Result<PathBuf, AppError> {
    let exe = env::current_exe().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!(
            "MODEL_DIR is not set and the executable location is unknown: {}",
            e
        ))
    })?;

    let base = exe.parent().map(PathBuf::from).unwrap_or_default();
    Ok(base.join(DEFAULT_MODEL_DIR_NAME))
}

pub mod predict;

pub use predict::{HealthResponse, PredictRequest, PredictResponse};

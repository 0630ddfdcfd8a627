use thiserror::Error;

/// Errors emitted by the generation engine and output layer.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("vehicle id pool must not be empty")]
    EmptyVehiclePool,
    #[error("unsupported output format '{requested}': use one of {supported}")]
    UnsupportedFormat { requested: String, supported: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

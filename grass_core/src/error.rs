//! Error types for graph operations and persistence.

/// Errors raised by the associative graph.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("node removal is not supported (requested for {node})")]
    NodeRemovalUnsupported { node: String },

    #[error("decay factor must remain nonzero: current {current}, factor {factor}")]
    ZeroDecayFactor { current: f64, factor: f64 },

    #[error("decay factor must remain finite: current {current}, factor {factor}")]
    NonFiniteDecayFactor { current: f64, factor: f64 },

    #[error("invalid snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    #[error("unsupported snapshot format for path {path}")]
    UnsupportedFormat { path: String },

    #[error("JSON snapshot error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary snapshot error: {0}")]
    Binary(#[from] bincode::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] grass_model::ConfigError),
}

pub type GraphResult<T> = Result<T, GraphError>;

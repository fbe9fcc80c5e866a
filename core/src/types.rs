use crate::{
    compression::CompressionError,
    config::ConfigError,
    dictionary::RegistryError,
};

/// Unified error covering configuration, the dictionary registry and frame coding.
/// - `From<T>` impls let `?` cross layers (e.g. loading configured dictionaries).
/// - Each layer's own error stays available for callers that match on it.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("compression error: {0}")]
    Compression(#[from] CompressionError),
}

pub type EngineResult<T> = Result<T, EngineError>;

use thiserror::Error;

/// Top-level error type used across the entire application.
///
/// None of these ever reach the emitted payload: callers log them and fall
/// back to a default value.
#[derive(Debug, Error)]
pub enum SysmonError {
    #[error("config error: {0}")]
    Config(String),

    #[error("telemetry unavailable: {0}")]
    Telemetry(String),

    #[error("history error: {0}")]
    History(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = SysmonError> = std::result::Result<T, E>;

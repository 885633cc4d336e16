use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggingError {
    #[error("unknown log format {0:?}, expected \"human\" or \"json\"")]
    UnknownFormat(String),

    #[error("tracing subscriber already installed: {0}")]
    AlreadyInitialized(String),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommuteError {
    #[error("invalid run configuration: {0}")]
    ConfigurationError(String),
    #[error("day of week must be in range [0,6] where 0 = Monday, found {0}")]
    InvalidWeekday(u8),
    #[error("unknown travel mode '{0}', expected one of driving, bicycling, transit, walking")]
    UnknownMode(String),
    #[error("invalid time window '{name}': {message}")]
    InvalidTimeWindow { name: String, message: String },
    #[error("unknown time zone '{0}'")]
    UnknownTimeZone(String),
    #[error("roster file is missing required column '{0}'")]
    MissingColumn(String),
    #[error("request to {url} failed with HTTP status {status}")]
    HttpStatus { url: String, status: u16 },
    #[error("request to {url} was rejected by the routing service with status {status}")]
    UpstreamStatus { url: String, status: String },
    #[error("failure sending request to {url}: {message}")]
    TransportError { url: String, message: String },
    #[error("unexpected response from {url}: {message}")]
    MalformedResponse { url: String, message: String },
    #[error("error creating a runtime to handle async code: {0}")]
    TokioError(String),
    #[error("failure reading or writing {path}: {source}")]
    CsvError { path: String, source: csv::Error },
    #[error("failure reading {path}: {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },
    #[error("{0}")]
    InternalError(String),
}

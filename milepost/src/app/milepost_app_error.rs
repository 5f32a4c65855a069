use milepost_core::algorithm::search::SearchError;
use milepost_core::model::network::NetworkError;

#[derive(thiserror::Error, Debug)]
pub enum MilepostAppError {
    #[error("failure building milepost app: {0}")]
    BuildFailure(String),
    #[error("invalid arguments: {0}")]
    ArgError(String),
    #[error(transparent)]
    ConfigFailure(#[from] config::ConfigError),
    #[error(transparent)]
    SearchFailure(#[from] SearchError),
    #[error("While loading the road network, an error occurred. Source: {source}")]
    NetworkFailure {
        #[from]
        source: NetworkError,
    },
    #[error("failure due to JSON: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure writing results: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

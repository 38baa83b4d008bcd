use super::graph::GraphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure constructing graph: {source}")]
    GraphError {
        #[from]
        source: GraphError,
    },
    #[error("failure reading configuration: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}

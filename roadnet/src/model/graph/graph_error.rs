use super::{ArcId, JunctionId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("failure opening dataset '{path}': {source}")]
    DatasetOpenError {
        path: String,
        source: shapefile::Error,
    },
    #[error("failure reading records from dataset '{path}': {source}")]
    DatasetReadError {
        path: String,
        source: shapefile::Error,
    },
    #[error("dataset '{path}' has shape type {found}, expected {expected}")]
    UnexpectedShapeType {
        path: String,
        found: String,
        expected: String,
    },
    #[error("malformed record {index} in dataset '{path}': {message}")]
    MalformedRecord {
        path: String,
        index: usize,
        message: String,
    },
    #[error("attempting to get junction '{0}' not in graph")]
    GraphMissingJunctionId(JunctionId),
    #[error("attempting to get arc '{0}' not in graph")]
    GraphMissingArcId(ArcId),
    #[error("invalid import configuration: {0}")]
    ConfigurationError(String),
    #[error("{0}")]
    InternalError(String),
}

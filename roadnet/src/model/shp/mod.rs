mod dataset;
mod graph_source;
pub mod import_ops;

pub use dataset::VectorDataset;
pub use graph_source::GraphSource;
pub use import_ops::ArcRecord;

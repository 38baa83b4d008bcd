use crate::model::graph::GraphError;
use shapefile::{Shape, ShapeReader, ShapeType};

/// one opened-and-consumed vector feature dataset.
///
/// `open` reads every record in file order and releases the underlying file
/// handle before returning, so no two dataset handles are ever held
/// concurrently during construction.
pub struct VectorDataset {
    path: String,
    shape_type: ShapeType,
    shapes: Vec<Shape>,
}

impl VectorDataset {
    /// opens the dataset at `path` and reads all of its records. open and
    /// read failures are fatal for the whole construction; there is no
    /// skip or retry policy.
    pub fn open(path: &str) -> Result<VectorDataset, GraphError> {
        let reader = ShapeReader::from_path(path).map_err(|e| GraphError::DatasetOpenError {
            path: String::from(path),
            source: e,
        })?;
        let shape_type = reader.header().shape_type;
        let shapes = reader.read().map_err(|e| GraphError::DatasetReadError {
            path: String::from(path),
            source: e,
        })?;
        log::info!(
            "read {}: {} entities, shape type {}",
            path,
            shapes.len(),
            shape_type
        );
        Ok(VectorDataset {
            path: String::from(path),
            shape_type,
            shapes,
        })
    }

    /// builds a dataset directly from shapes already in memory
    #[cfg(test)]
    pub(crate) fn from_shapes(
        path: &str,
        shape_type: ShapeType,
        shapes: Vec<Shape>,
    ) -> VectorDataset {
        VectorDataset {
            path: String::from(path),
            shape_type,
            shapes,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn entity_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// fails fast when a dataset of the wrong geometry kind is supplied
    /// for a stage. empty datasets are valid for every stage and skip the
    /// check, since some writers record a null shape type for them.
    pub fn expect_kind(&self, expected: &[ShapeType]) -> Result<(), GraphError> {
        if self.shapes.is_empty() || expected.contains(&self.shape_type) {
            return Ok(());
        }
        Err(GraphError::UnexpectedShapeType {
            path: self.path.clone(),
            found: self.shape_type.to_string(),
            expected: expected
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }
}

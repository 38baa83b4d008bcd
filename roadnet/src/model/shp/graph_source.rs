use super::{import_ops, VectorDataset};
use crate::config::ImportConfiguration;
use crate::model::graph::{GraphError, RoadGraph, VertexIndex};
use serde::{Deserialize, Serialize};
use shapefile::ShapeType;
use std::collections::HashMap;
use std::time::Instant;

/// source of the four vector datasets consumed by graph construction
#[derive(Serialize, Deserialize, Clone, Debug)]
pub enum GraphSource {
    Shapefile {
        barrier_file: String,
        junction_file: String,
        road_file: String,
        turn_file: String,
        configuration: ImportConfiguration,
    },
}

impl GraphSource {
    /// runs the four-stage construction pipeline: barriers, junctions,
    /// roads, turns, in that fixed order. each dataset is opened, fully
    /// consumed, and closed before the next is opened. any stage failure
    /// aborts the whole construction and the partial graph is discarded.
    pub fn import(&self) -> Result<RoadGraph, GraphError> {
        match self {
            GraphSource::Shapefile {
                barrier_file,
                junction_file,
                road_file,
                turn_file,
                configuration: conf,
            } => {
                let mut graph = RoadGraph::empty();

                log::info!("  (((1))) reading barrier polygons");
                let timer = Instant::now();
                let dataset = VectorDataset::open(barrier_file)?;
                dataset.expect_kind(&[
                    ShapeType::Polygon,
                    ShapeType::PolygonM,
                    ShapeType::PolygonZ,
                ])?;
                let barriers =
                    import_ops::read_barriers(&dataset, conf.coordinate_policy, conf.verbosity)?;
                for barrier in barriers {
                    graph.add_barrier(barrier);
                }
                log::info!(
                    "done {}: {:.4} sec",
                    barrier_file,
                    timer.elapsed().as_secs_f64()
                );

                log::info!("  (((2))) reading junction points");
                let timer = Instant::now();
                let dataset = VectorDataset::open(junction_file)?;
                dataset.expect_kind(&[ShapeType::Point, ShapeType::PointM, ShapeType::PointZ])?;
                let junctions =
                    import_ops::read_junctions(&dataset, conf.coordinate_policy, conf.verbosity)?;
                let mut index: VertexIndex = HashMap::new();
                for junction in junctions {
                    let key = junction.vertex.grid_key();
                    let id = graph.add_junction(junction);
                    if let Some(prev) = index.insert(key, id) {
                        log::warn!(
                            "junctions {} and {} share a coordinate; arcs ending there link to {}",
                            prev,
                            id,
                            id
                        );
                    }
                }
                log::info!(
                    "done {}: {:.4} sec",
                    junction_file,
                    timer.elapsed().as_secs_f64()
                );

                log::info!("  (((3))) reading road polylines");
                let timer = Instant::now();
                let dataset = VectorDataset::open(road_file)?;
                dataset.expect_kind(&[
                    ShapeType::Polyline,
                    ShapeType::PolylineM,
                    ShapeType::PolylineZ,
                ])?;
                let records =
                    import_ops::read_arcs(&dataset, conf.coordinate_policy, conf.verbosity)?;
                for record in records {
                    let arc_id = graph.add_arc(record.arc);
                    if !conf.connect_junctions {
                        continue;
                    }
                    // endpoint resolution is a coordinate match against the
                    // junction set; a miss is a data mismatch, not a read
                    // failure, so the arc is stored unlinked with a warning.
                    match record.endpoints {
                        None => log::warn!("road {} has no vertices; arc left unlinked", arc_id),
                        Some((first, last)) => {
                            match (index.get(&first.grid_key()), index.get(&last.grid_key())) {
                                (Some(src), Some(dst)) => graph.connect(*src, *dst, arc_id)?,
                                _ => log::warn!(
                                    "road {} endpoints {} and {} match no junction; arc left unlinked",
                                    arc_id,
                                    first,
                                    last
                                ),
                            }
                        }
                    }
                }
                log::info!(
                    "done {}: {:.4} sec",
                    road_file,
                    timer.elapsed().as_secs_f64()
                );

                // turn-restriction semantics are out of scope; this stage
                // only enumerates the dataset so input problems surface at
                // construction time rather than later.
                log::info!("  (((4))) reading turn records");
                let timer = Instant::now();
                let dataset = VectorDataset::open(turn_file)?;
                log::info!(
                    "turn dataset {} holds {} records of shape type {}; ingestion not implemented",
                    turn_file,
                    dataset.entity_count(),
                    dataset.shape_type()
                );
                log::info!(
                    "done {}: {:.4} sec",
                    turn_file,
                    timer.elapsed().as_secs_f64()
                );

                log::info!(
                    "loaded graph with {} junctions ({} connected), {} arcs, {} barriers",
                    graph.n_junctions(),
                    graph.n_connected_junctions(),
                    graph.n_arcs(),
                    graph.n_barriers()
                );
                Ok(graph)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GraphSource;
    use crate::config::{ImportConfiguration, Verbosity};
    use crate::model::graph::{CoordinatePolicy, GraphError, JunctionId, Vertex};
    use shapefile::{Point, Polygon, PolygonRing, Polyline, ShapeWriter};
    use std::path::{Path, PathBuf};

    /// lays down a four-dataset fixture in `dir` and returns the paths:
    /// one square barrier, junctions at the road's ends, one 3-4 L-shaped
    /// road, and a point dataset standing in for turn records.
    fn write_fixture(dir: &Path) -> (String, String, String, String) {
        let barrier_file = dir.join("barriers.shp");
        let junction_file = dir.join("junctions.shp");
        let road_file = dir.join("roads.shp");
        let turn_file = dir.join("turns.shp");

        // ring closed and wound clockwise so it round-trips unchanged
        let mut writer = ShapeWriter::from_path(&barrier_file).unwrap();
        writer
            .write_shapes(&vec![Polygon::new(PolygonRing::Outer(vec![
                Point::new(10.0, 10.0),
                Point::new(10.0, 14.0),
                Point::new(14.0, 14.0),
                Point::new(14.0, 10.0),
                Point::new(10.0, 10.0),
            ]))])
            .unwrap();

        let mut writer = ShapeWriter::from_path(&junction_file).unwrap();
        writer
            .write_shapes(&vec![Point::new(0.0, 0.0), Point::new(3.0, 4.0)])
            .unwrap();

        let mut writer = ShapeWriter::from_path(&road_file).unwrap();
        writer
            .write_shapes(&vec![Polyline::new(vec![
                Point::new(0.0, 0.0),
                Point::new(3.0, 0.0),
                Point::new(3.0, 4.0),
            ])])
            .unwrap();

        let mut writer = ShapeWriter::from_path(&turn_file).unwrap();
        writer
            .write_shapes(&vec![Point::new(0.0, 0.0)])
            .unwrap();

        (
            path_string(&barrier_file),
            path_string(&junction_file),
            path_string(&road_file),
            path_string(&turn_file),
        )
    }

    fn path_string(path: &PathBuf) -> String {
        String::from(path.to_str().unwrap())
    }

    fn source(
        files: &(String, String, String, String),
        configuration: ImportConfiguration,
    ) -> GraphSource {
        GraphSource::Shapefile {
            barrier_file: files.0.clone(),
            junction_file: files.1.clone(),
            road_file: files.2.clone(),
            turn_file: files.3.clone(),
            configuration,
        }
    }

    /// minimal header-only .shp file: file code, length in 16-bit words,
    /// version, shape type, zeroed bounding box
    fn write_empty_shp(path: &Path, shape_type: i32) {
        let mut bytes = Vec::with_capacity(100);
        bytes.extend_from_slice(&9994i32.to_be_bytes());
        bytes.extend_from_slice(&[0u8; 20]);
        bytes.extend_from_slice(&50i32.to_be_bytes());
        bytes.extend_from_slice(&1000i32.to_le_bytes());
        bytes.extend_from_slice(&shape_type.to_le_bytes());
        bytes.extend_from_slice(&[0u8; 64]);
        std::fs::write(path, bytes).unwrap();
    }

    #[test]
    fn test_import_builds_linked_graph() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_fixture(dir.path());
        let graph = source(&files, ImportConfiguration::default())
            .import()
            .unwrap();

        assert_eq!(graph.n_junctions(), 2);
        assert_eq!(graph.n_arcs(), 1);
        assert_eq!(graph.n_barriers(), 1);
        assert_eq!(graph.arcs()[0].length, 7);
        assert_eq!(graph.barriers()[0].vertex_count(), 5);

        // the road's endpoints coincide with the two junctions, so both
        // adjacency maps hold the pairing
        let a = JunctionId(0);
        let b = JunctionId(1);
        let arc_id = *graph.neighbors(&a).unwrap().get(&b).unwrap();
        assert_eq!(graph.neighbors(&b).unwrap().get(&a), Some(&arc_id));
        assert_eq!(graph.n_connected_junctions(), 2);
    }

    #[test]
    fn test_import_without_linking_leaves_adjacency_empty() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_fixture(dir.path());
        let conf = ImportConfiguration {
            connect_junctions: false,
            ..Default::default()
        };
        let graph = source(&files, conf).import().unwrap();
        assert_eq!(graph.n_arcs(), 1);
        assert_eq!(graph.n_connected_junctions(), 0);
    }

    #[test]
    fn test_import_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_fixture(dir.path());
        let src = source(&files, ImportConfiguration::default());
        let first = src.import().unwrap();
        let second = src.import().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_grid_policy_applies_to_junction_coordinates() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = write_fixture(dir.path());
        let junction_file = dir.path().join("grid_junctions.shp");
        let mut writer = ShapeWriter::from_path(&junction_file).unwrap();
        writer
            .write_shapes(&vec![Point::new(1.4, 2.6), Point::new(5.0, 5.0)])
            .unwrap();
        files.1 = path_string(&junction_file);

        let conf = ImportConfiguration {
            coordinate_policy: CoordinatePolicy::Grid,
            verbosity: Verbosity::Quiet,
            connect_junctions: true,
        };
        let graph = source(&files, conf).import().unwrap();
        assert_eq!(graph.junctions()[0].vertex, Vertex::new(1.0, 3.0));
        assert_eq!(graph.junctions()[1].vertex, Vertex::new(5.0, 5.0));
        // no junction coincides with the road's endpoints anymore
        assert_eq!(graph.n_connected_junctions(), 0);
    }

    #[test]
    fn test_wrong_dataset_kind_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let files = write_fixture(dir.path());
        // roads handed to the junction stage
        let swapped = (files.0.clone(), files.2.clone(), files.2.clone(), files.3);
        let result = source(&swapped, ImportConfiguration::default()).import();
        assert!(matches!(
            result,
            Err(GraphError::UnexpectedShapeType { .. })
        ));
    }

    #[test]
    fn test_missing_dataset_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = write_fixture(dir.path());
        files.0 = path_string(&dir.path().join("no_such.shp"));
        let result = source(&files, ImportConfiguration::default()).import();
        assert!(matches!(result, Err(GraphError::DatasetOpenError { .. })));
    }

    #[test]
    fn test_empty_datasets_yield_empty_collections() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = write_fixture(dir.path());
        let empty_junctions = dir.path().join("empty_junctions.shp");
        write_empty_shp(&empty_junctions, 1);
        files.1 = path_string(&empty_junctions);

        let graph = source(&files, ImportConfiguration::default())
            .import()
            .unwrap();
        assert_eq!(graph.n_junctions(), 0);
        assert_eq!(graph.n_arcs(), 1);
        assert_eq!(graph.n_connected_junctions(), 0);
    }
}

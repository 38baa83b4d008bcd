use super::VectorDataset;
use crate::config::Verbosity;
use crate::model::graph::{Arc, Barrier, CoordinatePolicy, GraphError, Junction, Vertex};
use itertools::Itertools;
use kdam::tqdm;
use shapefile::{PolygonRing, Shape};
use wkt::ToWkt;

/// one road record: the derived arc plus the raw first/last vertices of its
/// polyline chain, kept so the assembler can resolve junction adjacency.
/// `endpoints` is None for a record with no vertices at all.
#[derive(Debug, Clone, Copy)]
pub struct ArcRecord {
    pub arc: Arc,
    pub endpoints: Option<(Vertex, Vertex)>,
}

/// produces one junction per point record, preserving file order as the
/// graph index. the configured coordinate policy is applied to every
/// coordinate read. adjacency maps start empty and are populated during
/// the road stage.
pub fn read_junctions(
    dataset: &VectorDataset,
    policy: CoordinatePolicy,
    verbosity: Verbosity,
) -> Result<Vec<Junction>, GraphError> {
    let mut junctions = Vec::with_capacity(dataset.entity_count());
    for (index, shape) in tqdm!(
        dataset.shapes().iter().enumerate(),
        desc = "junctions",
        total = dataset.entity_count()
    ) {
        let (x, y) = match shape {
            Shape::Point(p) => (p.x, p.y),
            Shape::PointM(p) => (p.x, p.y),
            Shape::PointZ(p) => (p.x, p.y),
            other => {
                return Err(malformed(
                    dataset,
                    index,
                    format!("expected point geometry, found {}", other.shapetype()),
                ))
            }
        };
        let vertex = policy.apply(x, y);
        if verbosity == Verbosity::Verbose {
            log::debug!("junction {}: {}", index, vertex);
        }
        junctions.push(Junction::new(vertex));
    }
    Ok(junctions)
}

/// produces one arc per polyline record, preserving file order as the
/// graph index. length is the rounded sum of euclidean distances between
/// consecutive vertices of the record's coordinate chain; multi-part
/// records are summed per part with no bridge segment between parts.
pub fn read_arcs(
    dataset: &VectorDataset,
    policy: CoordinatePolicy,
    verbosity: Verbosity,
) -> Result<Vec<ArcRecord>, GraphError> {
    let mut records = Vec::with_capacity(dataset.entity_count());
    for (index, shape) in tqdm!(
        dataset.shapes().iter().enumerate(),
        desc = "roads",
        total = dataset.entity_count()
    ) {
        let parts: Vec<Vec<Vertex>> = match shape {
            Shape::Polyline(line) => collect_parts(line.parts()),
            Shape::PolylineM(line) => collect_parts_m(line.parts()),
            Shape::PolylineZ(line) => collect_parts_z(line.parts()),
            other => {
                return Err(malformed(
                    dataset,
                    index,
                    format!("expected polyline geometry, found {}", other.shapetype()),
                ))
            }
        };
        let length = chain_length(&parts);
        if verbosity == Verbosity::Verbose {
            let n_vertices: usize = parts.iter().map(|p| p.len()).sum();
            log::debug!("road {}: {} vertices, length {}", index, n_vertices, length);
        }
        records.push(ArcRecord {
            arc: Arc::new(length),
            endpoints: chain_endpoints(&parts, policy),
        });
    }
    Ok(records)
}

/// produces one barrier per polygon record, holding the outer ring's full
/// ordered vertex sequence. inner rings are out of scope.
pub fn read_barriers(
    dataset: &VectorDataset,
    policy: CoordinatePolicy,
    verbosity: Verbosity,
) -> Result<Vec<Barrier>, GraphError> {
    let mut barriers = Vec::with_capacity(dataset.entity_count());
    for (index, shape) in tqdm!(
        dataset.shapes().iter().enumerate(),
        desc = "barriers",
        total = dataset.entity_count()
    ) {
        let ring: Option<Vec<Vertex>> = match shape {
            Shape::Polygon(polygon) => polygon.rings().iter().find_map(|ring| match ring {
                PolygonRing::Outer(points) => {
                    Some(points.iter().map(|p| policy.apply(p.x, p.y)).collect())
                }
                PolygonRing::Inner(_) => None,
            }),
            Shape::PolygonM(polygon) => polygon.rings().iter().find_map(|ring| match ring {
                PolygonRing::Outer(points) => {
                    Some(points.iter().map(|p| policy.apply(p.x, p.y)).collect())
                }
                PolygonRing::Inner(_) => None,
            }),
            Shape::PolygonZ(polygon) => polygon.rings().iter().find_map(|ring| match ring {
                PolygonRing::Outer(points) => {
                    Some(points.iter().map(|p| policy.apply(p.x, p.y)).collect())
                }
                PolygonRing::Inner(_) => None,
            }),
            other => {
                return Err(malformed(
                    dataset,
                    index,
                    format!("expected polygon geometry, found {}", other.shapetype()),
                ))
            }
        };
        let ring = ring
            .ok_or_else(|| malformed(dataset, index, String::from("polygon has no outer ring")))?;
        let barrier = Barrier::new(ring);
        if verbosity == Verbosity::Verbose {
            log::debug!(
                "barrier {}: {} vertices, {}",
                index,
                barrier.vertex_count(),
                barrier.to_polygon().to_wkt()
            );
        }
        barriers.push(barrier);
    }
    Ok(barriers)
}

/// rounded sum of consecutive euclidean segment distances across the
/// chain. a chain with fewer than two vertices has length zero; duplicate
/// consecutive vertices contribute zero, which is correct, not an error.
pub fn chain_length(parts: &[Vec<Vertex>]) -> u64 {
    let total: f64 = parts
        .iter()
        .map(|part| {
            part.iter()
                .tuple_windows()
                .map(|(a, b)| a.distance(b))
                .sum::<f64>()
        })
        .sum();
    total.round() as u64
}

/// the first and last vertices of the chain, passed through the coordinate
/// policy so they live on the same scale as the junction set
fn chain_endpoints(parts: &[Vec<Vertex>], policy: CoordinatePolicy) -> Option<(Vertex, Vertex)> {
    let first = parts.iter().find(|p| !p.is_empty())?.first()?;
    let last = parts.iter().rev().find(|p| !p.is_empty())?.last()?;
    Some((
        policy.apply(first.x, first.y),
        policy.apply(last.x, last.y),
    ))
}

fn collect_parts(parts: &[Vec<shapefile::Point>]) -> Vec<Vec<Vertex>> {
    parts
        .iter()
        .map(|part| part.iter().map(|p| Vertex::new(p.x, p.y)).collect())
        .collect()
}

fn collect_parts_m(parts: &[Vec<shapefile::PointM>]) -> Vec<Vec<Vertex>> {
    parts
        .iter()
        .map(|part| part.iter().map(|p| Vertex::new(p.x, p.y)).collect())
        .collect()
}

fn collect_parts_z(parts: &[Vec<shapefile::PointZ>]) -> Vec<Vec<Vertex>> {
    parts
        .iter()
        .map(|part| part.iter().map(|p| Vertex::new(p.x, p.y)).collect())
        .collect()
}

fn malformed(dataset: &VectorDataset, index: usize, message: String) -> GraphError {
    GraphError::MalformedRecord {
        path: String::from(dataset.path()),
        index,
        message,
    }
}

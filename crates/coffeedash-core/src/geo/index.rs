use geo::algorithm::bounding_rect::BoundingRect;
use geo::{MultiPolygon, Point};
use rstar::{RTree, RTreeObject, AABB};

/// Envelope of one table row
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedRow {
    /// Row position in the owning table
    pub row: usize,

    envelope: AABB<[f64; 2]>,
}

impl IndexedRow {
    pub fn for_point(row: usize, point: Point<f64>) -> Self {
        Self { row, envelope: AABB::from_point([point.x(), point.y()]) }
    }

    /// Returns `None` for an empty boundary, which can never match a query
    pub fn for_boundary(row: usize, boundary: &MultiPolygon<f64>) -> Option<Self> {
        let rect = boundary.bounding_rect()?;
        let min = rect.min();
        let max = rect.max();
        Some(Self { row, envelope: AABB::from_corners([min.x, min.y], [max.x, max.y]) })
    }
}

impl RTreeObject for IndexedRow {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// Bounding-box index over table rows.
///
/// Queries return candidate rows in table order; callers apply the exact
/// geometric predicate afterwards.
#[derive(Debug)]
pub struct SpatialIndex {
    tree: RTree<IndexedRow>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    pub fn from_rows(rows: Vec<IndexedRow>) -> Self {
        Self { tree: RTree::bulk_load(rows) }
    }

    /// Index point locations, one per row
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = Point<f64>>,
    {
        let rows = points
            .into_iter()
            .enumerate()
            .map(|(row, point)| IndexedRow::for_point(row, point))
            .collect();
        Self::from_rows(rows)
    }

    /// Index polygon boundaries, one per row
    pub fn from_boundaries<'a, I>(boundaries: I) -> Self
    where
        I: IntoIterator<Item = &'a MultiPolygon<f64>>,
    {
        let rows = boundaries
            .into_iter()
            .enumerate()
            .filter_map(|(row, boundary)| IndexedRow::for_boundary(row, boundary))
            .collect();
        Self::from_rows(rows)
    }

    /// Rows whose envelope touches the point
    pub fn rows_at(&self, point: Point<f64>) -> Vec<usize> {
        let query = AABB::from_point([point.x(), point.y()]);
        self.sorted_rows(self.tree.locate_in_envelope_intersecting(&query))
    }

    /// Rows whose envelope touches the envelope of `boundary`
    pub fn rows_touching(&self, boundary: &MultiPolygon<f64>) -> Vec<usize> {
        match boundary.bounding_rect() {
            Some(rect) => {
                let min = rect.min();
                let max = rect.max();
                let query = AABB::from_corners([min.x, min.y], [max.x, max.y]);
                self.sorted_rows(self.tree.locate_in_envelope_intersecting(&query))
            }
            None => Vec::new(),
        }
    }

    fn sorted_rows<'a>(&self, hits: impl Iterator<Item = &'a IndexedRow>) -> Vec<usize> {
        let mut rows: Vec<usize> = hits.map(|indexed| indexed.row).collect();
        rows.sort_unstable();
        rows
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

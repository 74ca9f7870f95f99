//! Directed adjacency edges between checkerboard cells
//!
//! Every cell emits one edge per existing neighbor, with itself as source,
//! so each adjacent pair appears twice: once from each side, carrying
//! mutually reversed relation kinds.
//!
//! The relation kind records which bars touch across the shared border. A
//! vertical cell's first bar faces its left neighbor and its last bar faces
//! its right neighbor; a horizontal cell's first bar faces the cell above and
//! its last bar the cell below. Whenever the border runs along a strip
//! instead of across its end, all four bars of that cell touch it.

use std::fmt;

use crate::spatial::grid::{Direction, GridDimensions, Orientation};

/// Which bars of two adjacent tiles touch across their shared border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// All bars of the source touch the first bar of the target
    AllToFirst,
    /// The first bar of the source touches all bars of the target
    FirstToAll,
    /// All bars of the source touch the last bar of the target
    AllToLast,
    /// The last bar of the source touches all bars of the target
    LastToAll,
}

impl RelationKind {
    /// All kinds, in the order the constraint checker scans them
    pub const ALL: [Self; 4] = [
        Self::AllToFirst,
        Self::FirstToAll,
        Self::AllToLast,
        Self::LastToAll,
    ];

    /// Kind carried by the opposite endpoint's edge for the same pair
    pub const fn reverse(self) -> Self {
        match self {
            Self::AllToFirst => Self::FirstToAll,
            Self::FirstToAll => Self::AllToFirst,
            Self::AllToLast => Self::LastToAll,
            Self::LastToAll => Self::AllToLast,
        }
    }

    /// Position of this kind in [`RelationKind::ALL`]
    pub const fn bucket(self) -> usize {
        match self {
            Self::AllToFirst => 0,
            Self::FirstToAll => 1,
            Self::AllToLast => 2,
            Self::LastToAll => 3,
        }
    }

    /// Kind of the edge emitted from a cell of `orientation` toward `direction`
    pub const fn classify(orientation: Orientation, direction: Direction) -> Self {
        match (orientation, direction) {
            (Orientation::Vertical, Direction::Right)
            | (Orientation::Horizontal, Direction::Down) => Self::LastToAll,
            (Orientation::Vertical, Direction::Left)
            | (Orientation::Horizontal, Direction::Up) => Self::FirstToAll,
            (Orientation::Vertical, Direction::Up) | (Orientation::Horizontal, Direction::Left) => {
                Self::AllToLast
            }
            (Orientation::Vertical, Direction::Down)
            | (Orientation::Horizontal, Direction::Right) => Self::AllToFirst,
        }
    }

    /// Lowercase name used in diagnostics
    pub const fn name(self) -> &'static str {
        match self {
            Self::AllToFirst => "all_to_first",
            Self::FirstToAll => "first_to_all",
            Self::AllToLast => "all_to_last",
            Self::LastToAll => "last_to_all",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Directed edge from a cell to one of its neighbors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdjacencyEdge {
    /// Cell the edge is emitted from
    pub source: usize,
    /// Neighboring cell
    pub target: usize,
    /// Touching-bar relation seen from `source`
    pub kind: RelationKind,
}

impl AdjacencyEdge {
    /// Create an edge
    pub const fn new(source: usize, target: usize, kind: RelationKind) -> Self {
        Self {
            source,
            target,
            kind,
        }
    }

    /// The same pair seen from the target's side
    pub const fn reversed(self) -> Self {
        Self::new(self.target, self.source, self.kind.reverse())
    }

    /// `[source, target]` pair
    pub const fn pair(&self) -> [usize; 2] {
        [self.source, self.target]
    }
}

/// Complete, immutable edge set of one grid
///
/// Keeps the four per-kind lists in generation order, plus per-cell views of
/// outgoing and incoming edges so that checks touch at most four edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSet {
    buckets: [Vec<AdjacencyEdge>; 4],
    outgoing: Vec<Vec<AdjacencyEdge>>,
    incoming: Vec<Vec<AdjacencyEdge>>,
}

impl EdgeSet {
    /// Edges of one relation kind, in generation order
    pub fn edges(&self, kind: RelationKind) -> &[AdjacencyEdge] {
        self.buckets
            .get(kind.bucket())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// `[source, target]` pairs of one relation kind
    pub fn pairs(&self, kind: RelationKind) -> Vec<[usize; 2]> {
        self.edges(kind).iter().map(AdjacencyEdge::pair).collect()
    }

    /// Edges emitted by `cell`, ordered by relation kind
    pub fn outgoing(&self, cell: usize) -> &[AdjacencyEdge] {
        self.outgoing.get(cell).map(Vec::as_slice).unwrap_or_default()
    }

    /// Edges pointing at `cell`, ordered by relation kind
    pub fn incoming(&self, cell: usize) -> &[AdjacencyEdge] {
        self.incoming.get(cell).map(Vec::as_slice).unwrap_or_default()
    }

    /// Iterate over every edge, kind by kind
    pub fn iter(&self) -> impl Iterator<Item = &AdjacencyEdge> {
        self.buckets.iter().flatten()
    }

    /// Total number of directed edges
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// True when the grid has no internal adjacency
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generate the directed edge set of a grid
///
/// Cells are visited in row-major order and neighbors in the order right,
/// left, up, down. The result is identical for identical dimensions.
pub fn generate_edges(dimensions: GridDimensions) -> EdgeSet {
    let cell_count = dimensions.cell_count();
    let mut buckets: [Vec<AdjacencyEdge>; 4] = Default::default();
    let mut outgoing = vec![Vec::new(); cell_count];
    let mut incoming = vec![Vec::new(); cell_count];

    for cell in 0..cell_count {
        let orientation = dimensions.orientation(cell);
        for direction in Direction::ALL {
            let Some(neighbor) = dimensions.neighbor(cell, direction) else {
                continue;
            };
            let kind = RelationKind::classify(orientation, direction);
            let edge = AdjacencyEdge::new(cell, neighbor, kind);

            if let Some(bucket) = buckets.get_mut(kind.bucket()) {
                bucket.push(edge);
            }
            if let Some(edges) = outgoing.get_mut(cell) {
                edges.push(edge);
            }
            if let Some(edges) = incoming.get_mut(neighbor) {
                edges.push(edge);
            }
        }
    }

    for edges in outgoing.iter_mut().chain(incoming.iter_mut()) {
        edges.sort_by_key(|edge| edge.kind.bucket());
    }

    EdgeSet {
        buckets,
        outgoing,
        incoming,
    }
}

//! Direct-neighbor admissibility checks for a candidate tile
//!
//! Only neighbors that already hold a tile constrain a candidate. Because
//! every cell emits an edge toward each of its neighbors, scanning the
//! candidate cell's outgoing edges reaches every committed neighbor; the
//! bidirectional scan also walks incoming edges with the reversed relation and
//! must always reach the same verdict on a checkerboard grid.

use crate::algorithm::assignment::Assignment;
use crate::spatial::tiles::Tile;
use crate::spatial::topology::{AdjacencyEdge, EdgeSet, RelationKind};

/// Which edges the checker walks for a candidate cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckStrategy {
    /// Edges whose source is the candidate cell
    #[default]
    Outgoing,
    /// Outgoing edges, then incoming edges under the reversed relation
    Bidirectional,
}

/// First violated edge found for a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    /// Already assigned neighbor whose tile clashes
    pub neighbor: usize,
    /// Relation evaluated from the candidate cell toward `neighbor`
    pub kind: RelationKind,
    /// The neighbor's committed tile
    pub neighbor_tile: Tile,
}

/// Whether `source` and `target` tiles satisfy `kind`, seen from `source`
///
/// A touching bar pair must never share a color.
pub fn relation_holds(kind: RelationKind, source: &Tile, target: &Tile) -> bool {
    match kind {
        RelationKind::AllToFirst => !source.contains(target.first()),
        RelationKind::FirstToAll => !target.contains(source.first()),
        RelationKind::AllToLast => !source.contains(target.last()),
        RelationKind::LastToAll => !target.contains(source.last()),
    }
}

/// Whether the tiles at both ends of `edge` satisfy its relation
///
/// Returns `None` if either endpoint is still unassigned.
pub fn edge_satisfied(edge: &AdjacencyEdge, assignment: &Assignment) -> Option<bool> {
    let source = assignment.get(edge.source)?;
    let target = assignment.get(edge.target)?;
    Some(relation_holds(edge.kind, &source, &target))
}

/// Find the first edge that rules out `candidate` at `cell`
pub fn find_conflict(
    cell: usize,
    candidate: &Tile,
    edges: &EdgeSet,
    assignment: &Assignment,
    strategy: CheckStrategy,
) -> Option<Conflict> {
    let outgoing = edges.outgoing(cell).iter().copied();

    let conflict = first_violation(outgoing, candidate, assignment);
    if conflict.is_some() || strategy == CheckStrategy::Outgoing {
        return conflict;
    }

    let incoming = edges.incoming(cell).iter().map(|edge| edge.reversed());
    first_violation(incoming, candidate, assignment)
}

/// Whether `candidate` may be placed at `cell` given the committed neighbors
pub fn is_admissible(
    cell: usize,
    candidate: &Tile,
    edges: &EdgeSet,
    assignment: &Assignment,
) -> bool {
    find_conflict(cell, candidate, edges, assignment, CheckStrategy::Outgoing).is_none()
}

// Edges arrive oriented with the candidate cell as source
fn first_violation(
    mut edges: impl Iterator<Item = AdjacencyEdge>,
    candidate: &Tile,
    assignment: &Assignment,
) -> Option<Conflict> {
    edges.find_map(|edge| {
        let neighbor_tile = assignment.get(edge.target)?;
        (!relation_holds(edge.kind, candidate, &neighbor_tile)).then_some(Conflict {
            neighbor: edge.target,
            kind: edge.kind,
            neighbor_tile,
        })
    })
}

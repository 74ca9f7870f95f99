//! Tests for relation predicates and candidate admissibility

#[cfg(test)]
mod tests {
    use floortiles::algorithm::assignment::Assignment;
    use floortiles::algorithm::constraint::{
        CheckStrategy, edge_satisfied, find_conflict, is_admissible, relation_holds,
    };
    use floortiles::spatial::grid::GridDimensions;
    use floortiles::spatial::tiles::Tile;
    use floortiles::spatial::topology::{RelationKind, generate_edges};

    const A: Tile = Tile::new([1, 2, 3, 4]);
    const B: Tile = Tile::new([5, 6, 7, 8]);

    fn dims(rows: usize, cols: usize) -> GridDimensions {
        GridDimensions::new(rows, cols).expect("valid dimensions")
    }

    // Tests each predicate compares the right bar against the right side
    // Verified by comparing first bars where last bars are required
    #[test]
    fn test_relation_predicates() {
        let source = Tile::new([1, 2, 3, 4]);

        assert!(!relation_holds(RelationKind::AllToFirst, &source, &Tile::new([3, 9, 9, 9])));
        assert!(relation_holds(RelationKind::AllToFirst, &source, &Tile::new([9, 1, 2, 3])));

        assert!(!relation_holds(RelationKind::FirstToAll, &source, &Tile::new([9, 9, 9, 1])));
        assert!(relation_holds(RelationKind::FirstToAll, &source, &Tile::new([2, 3, 4, 9])));

        assert!(!relation_holds(RelationKind::AllToLast, &source, &Tile::new([9, 9, 9, 2])));
        assert!(relation_holds(RelationKind::AllToLast, &source, &Tile::new([1, 2, 3, 9])));

        assert!(!relation_holds(RelationKind::LastToAll, &source, &Tile::new([9, 4, 9, 9])));
        assert!(relation_holds(RelationKind::LastToAll, &source, &Tile::new([1, 2, 3, 9])));
    }

    // Tests a relation seen from either endpoint gives the same verdict
    #[test]
    fn test_reversed_relation_agrees() {
        let tiles = [
            Tile::new([0, 1, 2, 5]),
            Tile::new([5, 2, 1, 0]),
            Tile::new([3, 1, 4, 5]),
            Tile::new([2, 4, 1, 3]),
        ];
        for kind in RelationKind::ALL {
            for u in &tiles {
                for v in &tiles {
                    assert_eq!(
                        relation_holds(kind, u, v),
                        relation_holds(kind.reverse(), v, u),
                        "{kind} {u} {v}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_unassigned_neighbors_impose_nothing() {
        let edges = generate_edges(dims(2, 2));
        let assignment = Assignment::new(4);
        for cell in 0..4 {
            assert!(is_admissible(cell, &A, &edges, &assignment));
        }
    }

    // Tests the conflicts that shape the 2x2 walkthrough
    // Verified by skipping the last-bar check
    #[test]
    fn test_two_by_two_conflicts() {
        let edges = generate_edges(dims(2, 2));
        let mut assignment = Assignment::new(4);
        assignment.place(0, A);

        let conflict = find_conflict(1, &A, &edges, &assignment, CheckStrategy::Outgoing)
            .expect("A next to A must clash");
        assert_eq!(conflict.neighbor, 0);
        assert_eq!(conflict.kind, RelationKind::FirstToAll);
        assert_eq!(conflict.neighbor_tile, A);
        assert!(is_admissible(1, &B, &edges, &assignment));

        let below = find_conflict(2, &A, &edges, &assignment, CheckStrategy::Outgoing)
            .expect("A below A must clash");
        assert_eq!(below.neighbor, 0);
        assert_eq!(below.kind, RelationKind::AllToLast);

        assignment.place(1, B);
        assignment.place(2, B);
        assert!(is_admissible(3, &A, &edges, &assignment));
        assert!(!is_admissible(3, &B, &edges, &assignment));
    }

    // Tests both scan strategies reach the same verdict on every partial state
    // Verified by dropping the reversal of incoming edges
    #[test]
    fn test_bidirectional_agrees_with_outgoing() {
        let tiles = [
            Tile::new([2, 4, 1, 3]),
            Tile::new([3, 1, 4, 5]),
            Tile::new([5, 1, 0, 2]),
        ];
        let dimensions = dims(2, 3);
        let edges = generate_edges(dimensions);

        // Every assignment of the five other cells, each unassigned or one of three tiles
        for code in 0..4_usize.pow(5) {
            for cell in 0..6 {
                let mut assignment = Assignment::new(6);
                let mut digits = code;
                for other in (0..6).filter(|&c| c != cell) {
                    if let Some(&tile) = tiles.get(digits % 4) {
                        assignment.place(other, tile);
                    }
                    digits /= 4;
                }
                for candidate in &tiles {
                    let outgoing =
                        find_conflict(cell, candidate, &edges, &assignment, CheckStrategy::Outgoing);
                    let both = find_conflict(
                        cell,
                        candidate,
                        &edges,
                        &assignment,
                        CheckStrategy::Bidirectional,
                    );
                    assert_eq!(outgoing.is_some(), both.is_some());
                }
            }
        }
    }

    #[test]
    fn test_edge_satisfied_needs_both_endpoints() {
        let edges = generate_edges(dims(1, 2));
        let edge = edges
            .edges(RelationKind::AllToFirst)
            .first()
            .copied()
            .expect("edge from cell 0 to cell 1");

        let mut assignment = Assignment::new(2);
        assignment.place(0, A);
        assert_eq!(edge_satisfied(&edge, &assignment), None);

        assignment.place(1, B);
        assert_eq!(edge_satisfied(&edge, &assignment), Some(true));

        assignment.place(1, A);
        assert_eq!(edge_satisfied(&edge, &assignment), Some(false));
    }
}

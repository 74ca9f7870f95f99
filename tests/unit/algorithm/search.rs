//! Tests for the backtracking search driver

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;
    use std::time::Instant;

    use floortiles::TilingError;
    use floortiles::algorithm::constraint::{CheckStrategy, edge_satisfied};
    use floortiles::algorithm::observer::{OutcomeKind, SearchEvent};
    use floortiles::algorithm::search::{SearchOutcome, Solver, solve, solve_grid};
    use floortiles::algorithm::stop::StopSignal;
    use floortiles::io::configuration::SQUARE_TILE_POOL;
    use floortiles::spatial::grid::GridDimensions;
    use floortiles::spatial::tiles::{Tile, TilePool};

    const A: Tile = Tile::new([1, 2, 3, 4]);
    const B: Tile = Tile::new([5, 6, 7, 8]);

    fn dims(rows: usize, cols: usize) -> GridDimensions {
        GridDimensions::new(rows, cols).expect("valid dimensions")
    }

    // Tests the 2x2 walkthrough: A first, B twice after rejecting A, then A again
    // Verified by resuming cells from the start of the pool after a placement
    #[test]
    fn test_two_by_two_scenario() {
        let pool = TilePool::new(vec![A, B]).expect("pool");
        let mut solver = Solver::new(dims(2, 2), &pool);
        let outcome = solver.run();

        let solution = outcome.solution().expect("2x2 is solvable");
        assert_eq!(solution.tiles(), &[A, B, B, A]);

        let stats = solver.statistics();
        assert_eq!(stats.placements, 4);
        assert_eq!(stats.rejections, 2);
        assert_eq!(stats.backtracks, 0);
        assert_eq!(stats.deepest, 4);
    }

    // Tests a dead end forces the search back to earlier cells
    // Verified by not clearing the previous cell before it retries
    #[test]
    fn test_backtracking_recovers_from_dead_end() {
        let p0 = Tile::new([1, 4, 0, 2]);
        let p1 = Tile::new([0, 3, 3, 3]);
        let p2 = Tile::new([5, 3, 1, 0]);
        let pool = TilePool::new(vec![p0, p1, p2]).expect("pool");

        let mut solver = Solver::new(dims(2, 2), &pool);
        let outcome = solver.run();

        assert_eq!(
            outcome.into_solution().map(|s| s.into_tiles()),
            Some(vec![p1, p0, p0, p2])
        );
        let stats = solver.statistics();
        assert_eq!(stats.placements, 8);
        assert_eq!(stats.rejections, 11);
        assert_eq!(stats.backtracks, 4);
    }

    // Tests a lone tile can never sit next to a copy of itself
    #[test]
    fn test_single_tile_pool_has_no_solution() {
        let pool = TilePool::new(vec![A]).expect("pool");
        let mut solver = Solver::new(dims(1, 2), &pool);
        assert_eq!(solver.run(), SearchOutcome::NoSolution);

        let stats = solver.statistics();
        assert_eq!(stats.placements, 1);
        assert_eq!(stats.rejections, 1);
        assert_eq!(stats.backtracks, 2);

        assert_eq!(solve_grid(dims(3, 3), &pool), SearchOutcome::NoSolution);
    }

    #[test]
    fn test_single_cell_takes_first_tile() {
        let pool = TilePool::new(vec![B, A]).expect("pool");
        let outcome = solve_grid(dims(1, 1), &pool);
        assert_eq!(
            outcome.solution().map(|s| s.tiles().to_vec()),
            Some(vec![B])
        );

        let lone = TilePool::new(vec![A]).expect("pool");
        assert!(solve_grid(dims(1, 1), &lone).is_solved());
    }

    // Tests every edge of a larger solved grid holds
    // Verified by skipping incoming-edge neighbors in the checker
    #[test]
    fn test_solutions_satisfy_every_edge() {
        let pool = TilePool::try_from(SQUARE_TILE_POOL).expect("pool");
        let dimensions = dims(4, 4);
        let solution = solve_grid(dimensions, &pool)
            .into_solution()
            .expect("square pool solves 4x4");

        let mut assignment = floortiles::algorithm::assignment::Assignment::new(16);
        for (cell, &tile) in solution.tiles().iter().enumerate() {
            assignment.place(cell, tile);
        }
        let edges = floortiles::spatial::topology::generate_edges(dimensions);
        for edge in edges.iter() {
            assert_eq!(edge_satisfied(edge, &assignment), Some(true), "{edge:?}");
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let pool = TilePool::try_from(SQUARE_TILE_POOL).expect("pool");
        let first = solve_grid(dims(3, 4), &pool);
        let second = solve_grid(dims(3, 4), &pool);
        assert!(first.is_solved());
        assert_eq!(first, second);
    }

    // Tests the redundant bidirectional scan explores exactly the same tree
    #[test]
    fn test_strategies_explore_identically() {
        let pool = TilePool::try_from(SQUARE_TILE_POOL).expect("pool");

        let mut outgoing = Solver::new(dims(4, 4), &pool);
        let mut both = Solver::new(dims(4, 4), &pool).with_strategy(CheckStrategy::Bidirectional);

        assert_eq!(outgoing.run(), both.run());
        assert_eq!(outgoing.statistics(), both.statistics());
        assert_eq!(outgoing.statistics().backtracks, 537);
    }

    #[test]
    fn test_raised_flag_cancels_before_any_placement() {
        let pool = TilePool::new(vec![A, B]).expect("pool");
        let stop = StopSignal::never().with_flag(Arc::new(AtomicBool::new(true)));
        let mut solver = Solver::new(dims(2, 2), &pool).with_stop_signal(stop);

        assert_eq!(solver.run(), SearchOutcome::Cancelled);
        assert_eq!(solver.statistics().placements, 0);
    }

    #[test]
    fn test_elapsed_deadline_cancels() {
        let pool = TilePool::new(vec![A]).expect("pool");
        let stop = StopSignal::never().with_deadline(Instant::now());
        let outcome = Solver::new(dims(3, 3), &pool)
            .with_stop_signal(stop)
            .run();
        assert_eq!(outcome.kind(), OutcomeKind::Cancelled);
        assert!(outcome.solution().is_none());
    }

    // Tests observers see consistent events and cannot change the result
    // Verified by counting rejections as placements
    #[test]
    fn test_observer_does_not_change_outcome() {
        let pool = TilePool::try_from(SQUARE_TILE_POOL).expect("pool");
        let plain = solve_grid(dims(3, 3), &pool);

        let mut events = Vec::new();
        let mut record = |event: &SearchEvent| events.push(*event);
        let mut solver = Solver::new(dims(3, 3), &pool).with_observer(&mut record);
        let observed = solver.run();
        let stats = solver.statistics();

        assert_eq!(plain, observed);

        let placed = events
            .iter()
            .filter(|e| matches!(e, SearchEvent::Placed { .. }))
            .count() as u64;
        let rejected = events
            .iter()
            .filter(|e| matches!(e, SearchEvent::Rejected { .. }))
            .count() as u64;
        let backtracked = events
            .iter()
            .filter(|e| matches!(e, SearchEvent::Backtracked { .. }))
            .count() as u64;
        assert_eq!(placed, stats.placements);
        assert_eq!(rejected, stats.rejections);
        assert_eq!(backtracked, stats.backtracks);
        assert_eq!(
            events.last(),
            Some(&SearchEvent::Finished {
                outcome: OutcomeKind::Solved,
                statistics: stats,
            })
        );
    }

    #[test]
    fn test_solve_validates_before_searching() {
        assert!(matches!(
            solve(0, 3, &[A]),
            Err(TilingError::InvalidDimensions { .. })
        ));
        assert!(matches!(solve(2, 2, &[]), Err(TilingError::EmptyPool)));

        let outcome = solve(2, 2, &[A, B]).expect("valid configuration");
        assert_eq!(
            outcome.into_solution().map(|s| s.into_tiles()),
            Some(vec![A, B, B, A])
        );
    }
}

use seabattle::{
    render_board, Board, BoardConfig, BoardError, CellState, Segment, ShipStatus, ShotOutcome,
};

const CELL_AMOUNT: usize = 100;

fn states(board: &Board) -> Vec<CellState> {
    board.cells().map(|c| c.state()).collect()
}

#[test]
fn test_at_bounds() {
    let board = Board::new();
    assert_eq!(board.at(3, 7).map(|c| c.coords()), Some((3, 7)));
    assert!(board.at(-1, -1).is_none());
    assert!(board.at(10, 10).is_none());
    assert!(board.at(10, 0).is_none());
    assert!(board.at(0, 10).is_none());
}

#[test]
fn test_cells_are_row_major() {
    let board = Board::with_config(BoardConfig::new(4, 3));
    let coords: Vec<_> = board.cells().map(|c| c.coords()).collect();
    assert_eq!(coords.len(), 12);
    assert_eq!(&coords[..5], &[(0, 0), (1, 0), (2, 0), (3, 0), (0, 1)]);
    assert_eq!(coords[11], (3, 2));
    assert!(board.cells().all(|c| c.state() == CellState::Empty && !c.is_shot()));
    assert_eq!(board.free_cells_count(), 12);
}

#[test]
fn test_place_single_cell_ship() {
    let mut board = Board::new();
    let id = board.add_ship(Segment::new(0, 1, 1, false)).unwrap();
    assert_eq!(board.ships_count(), 1);
    let ship = board.ship(id).unwrap();
    assert_eq!(ship.size(), 1);
    assert_eq!(ship.segment(), Segment::new(0, 1, 1, false));
    assert_eq!(board.at(1, 0).unwrap().owner(), Some(id));
    assert_eq!(board.at(1, 0).unwrap().state(), CellState::Occupied);
}

#[test]
fn test_place_three_cell_ship() {
    let mut board = Board::new();
    let id = board.add_ship(Segment::new(5, 5, 7, false)).unwrap();
    let ship = board.ship(id).unwrap();
    let cells: Vec<_> = board.ship_cells(ship).map(|c| c.coords()).collect();
    assert_eq!(cells, vec![(5, 5), (6, 5), (7, 5)]);
    // 5x3 box around the ship minus the ship itself
    assert_eq!(ship.buffer_size(), 12);
    assert_eq!(board.free_cells_count(), CELL_AMOUNT - 3 - 12);
}

#[test]
fn test_out_of_bounds_placement_fails() {
    let mut board = Board::new();
    let err = board.add_ship(Segment::new(-1, -1, 1, false)).unwrap_err();
    assert_eq!(err, BoardError::InvalidCoordinates { x: -1, y: -1 });
    assert_eq!(board.ships_count(), 0);
    assert_eq!(board.free_cells_count(), CELL_AMOUNT);

    // Valid prefix, invalid tail.
    let err = board.add_ship(Segment::horizontal(9, 8, 10)).unwrap_err();
    assert_eq!(err, BoardError::InvalidCoordinates { x: 10, y: 9 });
    assert_eq!(board.ships_count(), 0);
    assert!(board.cells().all(|c| c.state() == CellState::Empty));
}

#[test]
fn test_adjacent_ship_rejected() {
    let mut board = Board::new();
    let id = board.add_ship(Segment::new(0, 1, 1, false)).unwrap();
    let before = states(&board);

    let err = board.add_ship(Segment::new(0, 2, 2, false)).unwrap_err();
    assert_eq!(err, BoardError::CellOccupied { x: 1, y: 0 });
    let ship = board.ship(id).unwrap();
    assert_eq!(
        board.free_cells_count(),
        CELL_AMOUNT - ship.segment().length() - ship.buffer_size()
    );
    assert_eq!(board.free_cells_count(), 94);
    assert_eq!(states(&board), before);

    // Diagonal contact is adjacency too.
    assert!(matches!(
        board.add_ship(Segment::vertical(2, 1, 3)),
        Err(BoardError::CellOccupied { .. })
    ));
    // Overlap.
    assert_eq!(
        board.add_ship(Segment::horizontal(0, 0, 2)).unwrap_err(),
        BoardError::CellOccupied { x: 1, y: 0 }
    );
    assert_eq!(board.ships_count(), 1);
    assert_eq!(states(&board), before);
}

#[test]
fn test_ship_removal_restores_board() {
    let mut board = Board::new();
    let id = board.add_ship(Segment::new(0, 1, 1, false)).unwrap();
    assert_eq!(board.remove_ship(id), Ok(true));
    assert_eq!(board.free_cells_count(), CELL_AMOUNT);
    assert_eq!(board.ships_count(), 0);
    assert!(board.cells().all(|c| c.state() == CellState::Empty));
    assert!(board.cells().all(|c| c.related_ships().next().is_none()));

    // Unknown id
    assert_eq!(board.remove_ship(id), Ok(false));
}

#[test]
fn test_shared_buffer_cells_survive_one_removal() {
    let mut board = Board::new();
    let a = board.add_ship(Segment::horizontal(0, 0, 0)).unwrap();
    let b = board.add_ship(Segment::horizontal(0, 2, 2)).unwrap();
    let shared = board.at(1, 0).unwrap();
    assert_eq!(shared.state(), CellState::Buffer);
    assert_eq!(shared.related_ships().collect::<Vec<_>>(), vec![a, b]);

    board.remove_ship(a).unwrap();
    assert_eq!(board.at(1, 0).unwrap().state(), CellState::Buffer);
    assert_eq!(board.at(1, 1).unwrap().state(), CellState::Buffer);
    assert_eq!(board.at(0, 1).unwrap().state(), CellState::Empty);
    assert_eq!(board.at(0, 0).unwrap().state(), CellState::Empty);

    board.remove_ship(b).unwrap();
    assert!(board.cells().all(|c| c.state() == CellState::Empty));
    assert_eq!(board.free_cells_count(), CELL_AMOUNT);
}

#[test]
fn test_ship_ids_are_not_reused() {
    let mut board = Board::new();
    let first = board.add_ship(Segment::horizontal(4, 4, 5)).unwrap();
    board.remove_ship(first).unwrap();
    let second = board.add_ship(Segment::horizontal(4, 4, 5)).unwrap();
    assert_ne!(first, second);
    assert!(board.ship(first).is_none());
    assert_eq!(board.remove_ship(first), Ok(false));
}

#[test]
fn test_ships_keep_insertion_order() {
    let mut board = Board::new();
    let ids = [
        board.add_ship(Segment::vertical(9, 0, 3)).unwrap(),
        board.add_ship(Segment::horizontal(0, 0, 2)).unwrap(),
        board.add_ship(Segment::horizontal(9, 0, 0)).unwrap(),
    ];
    let listed: Vec<_> = board.ships().map(|s| s.id()).collect();
    assert_eq!(listed, ids);
}

#[test]
fn test_cells_along_walks_and_fails() {
    let board = Board::new();
    let cells: Vec<_> = board
        .cells_along(&Segment::horizontal(2, 5, 3))
        .unwrap()
        .iter()
        .map(|c| c.coords())
        .collect();
    assert_eq!(cells, vec![(5, 2), (4, 2), (3, 2)]);

    let seg = Segment::vertical(0, 8, 11);
    assert_eq!(
        board.cells_along(&seg).unwrap_err(),
        BoardError::InvalidCoordinates { x: 0, y: 10 }
    );
    let prefix: Vec<_> = board
        .cells_along_lenient(&seg)
        .iter()
        .map(|c| c.coords())
        .collect();
    assert_eq!(prefix, vec![(0, 8), (0, 9)]);
    assert!(board
        .cells_along_lenient(&Segment::vertical(-3, 0, 2))
        .is_empty());
}

#[test]
fn test_cells_around_counts() {
    let board = Board::new();
    assert_eq!(board.cells_around(0, 0, None).len(), 3);
    assert_eq!(board.cells_around(9, 9, None).len(), 3);
    assert_eq!(board.cells_around(0, 5, None).len(), 5);
    assert_eq!(board.cells_around(5, 5, None).len(), 8);
    assert_eq!(board.cells_around(5, 5, Some((4, 5))).len(), 7);
    // Excluding a cell that is not a neighbour changes nothing.
    assert_eq!(board.cells_around(5, 5, Some((0, 0))).len(), 8);
    assert!(board
        .cells_around(5, 5, None)
        .iter()
        .all(|c| c.coords() != (5, 5)));
    assert_eq!(board.cells_around(-2, -2, None).len(), 0);
    assert_eq!(board.cells_around(-1, -1, None).len(), 1);
}

#[test]
fn test_directional_cells_around() {
    let board = Board::new();
    let mut around: Vec<_> = board
        .directional_cells_around(5, 5)
        .iter()
        .map(|c| c.coords())
        .collect();
    around.sort();
    assert_eq!(around, vec![(4, 5), (5, 4), (5, 6), (6, 5)]);
    assert_eq!(board.directional_cells_around(0, 0).len(), 2);
    assert_eq!(board.directional_cells_around(9, 4).len(), 3);
}

#[test]
fn test_candidate_directions_on_empty_board() {
    let board = Board::new();
    let dirs = board.candidate_directions(0, 0, 3);
    assert_eq!(
        dirs,
        vec![Segment::new(0, 1, 3, true), Segment::new(0, 1, 3, false)]
    );

    let dirs = board.candidate_directions(5, 5, 2);
    assert_eq!(
        dirs,
        vec![
            Segment::vertical(5, 6, 7),
            Segment::vertical(5, 4, 3),
            Segment::horizontal(5, 6, 7),
            Segment::horizontal(5, 4, 3),
        ]
    );

    // Runs are cut short by the grid edge.
    let dirs = board.candidate_directions(8, 9, 4);
    assert_eq!(
        dirs,
        vec![
            Segment::vertical(8, 8, 5),
            Segment::horizontal(9, 9, 9),
            Segment::horizontal(9, 7, 4),
        ]
    );
    assert!(board.candidate_directions(5, 5, 0).is_empty());
}

#[test]
fn test_candidate_directions_stop_at_buffer() {
    let mut board = Board::new();
    board.add_ship(Segment::horizontal(0, 3, 3)).unwrap();
    let dirs = board.candidate_directions(0, 0, 4);
    assert_eq!(
        dirs,
        vec![Segment::vertical(0, 1, 4), Segment::horizontal(0, 1, 1)]
    );
}

#[test]
fn test_shoot_is_idempotent() {
    let mut board = Board::new();
    assert!(board.shoot(4, 4).unwrap().is_shot());
    assert!(board.shoot(4, 4).unwrap().is_shot());
    assert!(board.shoot(-1, 4).is_none());
    assert!(board.shoot(4, 10).is_none());
    assert_eq!(board.cells().filter(|c| c.is_shot()).count(), 1);
    // Shooting does not change occupancy.
    assert_eq!(board.free_cells_count(), CELL_AMOUNT);
}

#[test]
fn test_ship_status_and_outcomes() {
    let mut board = Board::new();
    let id = board.add_ship(Segment::new(5, 5, 7, false)).unwrap();
    assert_eq!(board.ship(id).unwrap().status(&board), ShipStatus::Intact);
    assert!(!board.all_ships_destroyed());

    board.shoot(0, 0);
    assert_eq!(board.outcome_at(0, 0), Some(ShotOutcome::Miss));
    board.shoot(6, 5);
    assert_eq!(board.outcome_at(6, 5), Some(ShotOutcome::Hit(id)));
    assert_eq!(board.ship(id).unwrap().status(&board), ShipStatus::Damaged);
    board.shoot(5, 5);
    board.shoot(7, 5);
    assert_eq!(board.ship(id).unwrap().status(&board), ShipStatus::Destroyed);
    assert!(board.ship(id).unwrap().is_destroyed(&board));
    assert_eq!(board.outcome_at(7, 5), Some(ShotOutcome::Sunk(id)));
    assert!(board.all_ships_destroyed());
    assert_eq!(board.outcome_at(10, 10), None);
}

#[test]
fn test_empty_board_counts_as_destroyed() {
    assert!(Board::new().all_ships_destroyed());
}

#[test]
fn test_random_free_cell() {
    use rand::{rngs::SmallRng, SeedableRng};
    let mut rng = SmallRng::seed_from_u64(7);

    let mut board = Board::new();
    board.add_ship(Segment::vertical(4, 2, 5)).unwrap();
    for _ in 0..200 {
        let cell = board.random_free_cell(&mut rng).unwrap();
        assert_eq!(cell.state(), CellState::Empty);
    }

    let mut tiny = Board::with_config(BoardConfig::new(1, 1));
    assert_eq!(tiny.random_free_cell(&mut rng).map(|c| c.coords()), Some((0, 0)));
    tiny.add_ship(Segment::horizontal(0, 0, 0)).unwrap();
    assert_eq!(tiny.free_cells_count(), 0);
    assert!(tiny.random_free_cell(&mut rng).is_none());
}

#[test]
fn test_clear_ships_and_reset() {
    let mut board = Board::new();
    board.add_ship(Segment::vertical(0, 0, 3)).unwrap();
    board.add_ship(Segment::horizontal(9, 5, 9)).unwrap();
    board.shoot(0, 0);
    board.mark(5, 5);

    board.clear_ships().unwrap();
    assert_eq!(board.ships_count(), 0);
    assert_eq!(board.free_cells_count(), CELL_AMOUNT);
    // Shots survive clear_ships, not reset.
    assert!(board.at(0, 0).unwrap().is_shot());

    board.add_ship(Segment::horizontal(3, 3, 4)).unwrap();
    board.reset().unwrap();
    assert_eq!(board.ships_count(), 0);
    assert_eq!(board.free_cells_count(), CELL_AMOUNT);
    assert!(board.cells().all(|c| !c.is_shot() && !c.is_marked()));
}

#[test]
fn test_free_cells_match_empty_cells() {
    let mut board = Board::new();
    board.add_ship(Segment::vertical(0, 0, 3)).unwrap();
    board.add_ship(Segment::horizontal(5, 4, 6)).unwrap();
    let mut free: Vec<_> = board.free_cells().map(|c| c.coords()).collect();
    free.sort();
    let mut empty: Vec<_> = board
        .cells()
        .filter(|c| c.state() == CellState::Empty)
        .map(|c| c.coords())
        .collect();
    empty.sort();
    assert_eq!(free, empty);
}

#[test]
fn test_render_board() {
    let mut board = Board::with_config(BoardConfig::new(4, 3));
    board.add_ship(Segment::horizontal(0, 0, 0)).unwrap();
    assert_eq!(render_board(&board), "1+..\n++..\n....");

    board.shoot(0, 0);
    board.shoot(3, 2);
    board.shoot(1, 1);
    board.mark(2, 2);
    assert_eq!(render_board(&board), "x+..\n+o..\n..*o");
    assert_eq!(board.to_string(), render_board(&board));
}

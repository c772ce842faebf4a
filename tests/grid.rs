use ram_run::{Direction, Grid, Position};

#[test]
fn grid_links_only_neighbors_inside() {
    let grid = Grid::new(&[], 3, 2);

    assert_eq!(grid.len(), 6);
    assert_eq!(grid.neighbor(0, Direction::Up), None);
    assert_eq!(grid.neighbor(0, Direction::Left), None);
    assert_eq!(grid.neighbor(0, Direction::Right), Some(1));
    assert_eq!(grid.neighbor(0, Direction::Down), Some(3));
    assert_eq!(grid.cell_at(0).neighbors().count(), 2);
    assert_eq!(grid.cell_at(1).neighbors().count(), 3);
    assert_eq!(grid.cell_at(5).neighbors().count(), 2);
    assert_eq!(grid.neighbor(5, Direction::Right), None);
    assert_eq!(grid.neighbor(5, Direction::Down), None);
}

#[test]
fn grid_corners_are_source_and_target() {
    let grid = Grid::new(&[], 3, 2);

    assert_eq!(grid.cell_at(grid.source()).pos(), &Position::new(2, 1));
    assert_eq!(grid.cell_at(grid.target()).pos(), &Position::new(0, 0));
}

#[test]
fn grid_keeps_last_time_of_repeated_position() {
    let positions = [Position::new(1, 1), Position::new(0, 0), Position::new(1, 1)];
    let grid = Grid::new_square(&positions, 3);

    let cell = grid.cell(&Position::new(1, 1)).unwrap();
    assert_eq!(cell.corrupt_time(), Some(2));
    assert!(!cell.is_corrupted(2));
    assert!(cell.is_corrupted(3));
    assert_eq!(grid.cell(&Position::new(0, 0)).unwrap().corrupt_time(), Some(1));
    assert_eq!(grid.cell(&Position::new(2, 2)).unwrap().corrupt_time(), None);
    assert!(grid.cell(&Position::new(3, 0)).is_none());
}

#[test]
fn grid_reset_clears_search_state_only() {
    let positions = [Position::new(1, 0)];
    let mut grid = Grid::new_square(&positions, 3);
    assert_eq!(ram_run::shortest_path(&mut grid, 1), Some(4));
    assert!(grid.cells().any(|cell| cell.cost().is_some()));
    assert!(grid.cells().any(|cell| cell.prev().is_some()));

    grid.reset();

    assert!(grid.cells().all(|cell| cell.cost().is_none()));
    assert!(grid.cells().all(|cell| cell.prev().is_none()));
    assert_eq!(grid.cell(&Position::new(1, 0)).unwrap().corrupt_time(), Some(0));
}

#[test]
#[should_panic]
fn grid_panics_on_position_outside() {
    Grid::new_square(&[Position::new(3, 1)], 3);
}

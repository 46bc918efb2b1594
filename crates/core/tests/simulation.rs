use warehouse_core::{Direction, GridDimensions, ParseError, Position, apply_moves, run};

const GRID: GridDimensions = GridDimensions::new(10, 10);

#[test]
fn staircase_walk_reaches_four_four() {
    let finish = run(Position::ORIGIN, GRID, "N E N E N E N E").unwrap();
    assert_eq!(finish, Position::new(4, 4));
}

#[test]
fn each_step_cancels_the_previous() {
    let finish = run(Position::ORIGIN, GRID, "N E W S").unwrap();
    assert_eq!(finish, Position::ORIGIN);
}

#[test]
fn move_off_the_grid_is_skipped() {
    let finish = run(Position::ORIGIN, GRID, "S").unwrap();
    assert_eq!(finish, Position::ORIGIN);
}

#[test]
fn invalid_token_fails_the_whole_run() {
    let result = run(Position::ORIGIN, GRID, "N E W S B");
    assert_eq!(
        result,
        Err(ParseError::InvalidDirection {
            token: "B".to_owned()
        })
    );
}

#[test]
fn blank_input_leaves_robot_at_start() {
    let start = Position::new(7, 2);
    assert_eq!(run(start, GRID, "").unwrap(), start);
    assert_eq!(run(start, GRID, "   ").unwrap(), start);
}

#[test]
fn result_is_in_bounds_for_any_sequence() {
    // Hug every edge of a small grid; the final position must stay inside.
    let grid = GridDimensions::new(2, 2);
    let directions = [
        Direction::South,
        Direction::West,
        Direction::North,
        Direction::North,
        Direction::North,
        Direction::East,
        Direction::East,
        Direction::East,
        Direction::South,
    ];
    let finish = apply_moves(Position::ORIGIN, grid, &directions);
    assert!(grid.contains(finish));
}

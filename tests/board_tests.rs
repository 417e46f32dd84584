//! Board tests - movement rules over whole boards

use ghost_grid::core::{parse_layout, Board, GameConfig, MoveOutcome, StepResult, Terrain};
use ghost_grid::types::{
    Direction, DisplayAlias, Position, REFERENCE_COLS, REFERENCE_LAYOUT, REFERENCE_ROWS,
};

/// The reference layout with the start moved to `start`, if that tile is grass.
fn reference_with_start(start: Position) -> Option<Board> {
    let index = start.x * REFERENCE_ROWS + start.y;
    let mut codes: Vec<char> = REFERENCE_LAYOUT.replace('G', "g").chars().collect();
    if codes[index] != 'g' {
        return None;
    }
    codes[index] = 'G';
    let codes: String = codes.into_iter().collect();
    parse_layout(&codes, REFERENCE_COLS, REFERENCE_ROWS, &GameConfig::default()).ok()
}

/// All-grass board with the ghost at `start`.
fn open_board(cols: usize, rows: usize, start: Position) -> Board {
    let codes: String = (0..cols * rows)
        .map(|i| if i == start.x * rows + start.y { 'G' } else { 'g' })
        .collect();
    parse_layout(&codes, cols, rows, &GameConfig::default()).unwrap()
}

fn occupied_cells(board: &Board) -> Vec<Position> {
    board
        .iter()
        .filter(|(_, cell)| cell.is_occupied())
        .map(|(pos, _)| pos)
        .collect()
}

#[test]
fn test_walls_never_move_the_ghost() {
    let mut checked = 0;
    for x in 0..REFERENCE_COLS {
        for y in 0..REFERENCE_ROWS {
            let Some(board) = reference_with_start(Position::new(x, y)) else {
                continue;
            };
            for dir in Direction::ALL {
                let Some(target) = Position::new(x, y).step(dir) else {
                    continue;
                };
                if board.alias_at(target) != Some(DisplayAlias::Wall) {
                    continue;
                }

                let mut moved = board.clone();
                assert_eq!(moved.move_entity(dir), Ok(MoveOutcome::Blocked));
                assert_eq!(moved, board, "wall at {target} changed the board");
                assert_eq!(occupied_cells(&moved), vec![Position::new(x, y)]);
                checked += 1;
            }
        }
    }
    assert!(checked > 10, "expected many wall contacts, got {checked}");
}

#[test]
fn test_edges_are_no_ops() {
    let (cols, rows) = (4, 3);
    for x in 0..cols {
        for y in 0..rows {
            let board = open_board(cols, rows, Position::new(x, y));
            for dir in Direction::ALL {
                let leaves = match Position::new(x, y).step(dir) {
                    None => true,
                    Some(p) => p.x >= cols || p.y >= rows,
                };
                if !leaves {
                    continue;
                }

                let mut moved = board.clone();
                assert_eq!(moved.move_entity(dir), Ok(MoveOutcome::OutOfBounds));
                assert_eq!(moved, board);
            }
        }
    }
}

#[test]
fn test_walk_ends_at_sum_of_deltas() {
    let start = Position::new(2, 2);
    let mut board = open_board(5, 5, start);
    let walk = [
        Direction::Up,
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Down,
        Direction::Down,
        Direction::Left,
        Direction::Left,
        Direction::Left,
        Direction::Up,
    ];

    let (mut dx, mut dy) = (0isize, 0isize);
    for dir in walk {
        let outcome = board.move_entity(dir).unwrap();
        assert!(outcome.moved(), "{dir:?} should stay on a 5x5 board");
        let (ddx, ddy) = dir.delta();
        dx += ddx;
        dy += ddy;
    }

    let expected = Position::new(
        start.x.checked_add_signed(dx).unwrap(),
        start.y.checked_add_signed(dy).unwrap(),
    );
    assert_eq!(expected, Position::new(2, 0));
    assert_eq!(board.entity_position(), expected);
    assert_eq!(board.entity().unwrap().position(), expected);
    assert_eq!(occupied_cells(&board), vec![expected]);
}

#[test]
fn test_key_is_consumed_on_departure() {
    // x0: G K g
    let mut board = parse_layout("GKg", 1, 3, &GameConfig::default()).unwrap();
    let key = Position::new(0, 1);

    let outcome = board.move_right().unwrap();
    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            from: Position::new(0, 0),
            to: key,
            effect: StepResult::KeyCollected
        }
    );
    assert!(board.entity().unwrap().has_key());
    // Still a key underneath while the ghost stands on it.
    assert_eq!(board.cell(key).unwrap().terrain(), Terrain::Key);
    assert_eq!(board.alias_at(key), Some(DisplayAlias::Ghost));

    board.move_right().unwrap();
    assert_eq!(board.cell(key).unwrap().terrain(), Terrain::Grass);
    assert_eq!(board.alias_at(key), Some(DisplayAlias::Grass));

    // Walking back over it is plain grass now.
    assert_eq!(
        board.move_left().unwrap(),
        MoveOutcome::Moved {
            from: Position::new(0, 2),
            to: key,
            effect: StepResult::Ok
        }
    );
}

#[test]
fn test_door_requires_key() {
    // x0: g G D
    let mut board = parse_layout("gGD", 1, 3, &GameConfig::default()).unwrap();
    board.move_right().unwrap();
    assert!(!board.entity().unwrap().escaped());
    assert_eq!(board.cell(Position::new(0, 2)).unwrap().terrain(), Terrain::Door);

    // Leave and come back with a key from the other side.
    board.move_left().unwrap();
    board
        .cell_mut(Position::new(0, 0))
        .unwrap()
        .replace_terrain(Terrain::Key);
    board.move_left().unwrap();
    board.move_right().unwrap();
    let outcome = board.move_right().unwrap();

    assert_eq!(
        outcome,
        MoveOutcome::Moved {
            from: Position::new(0, 1),
            to: Position::new(0, 2),
            effect: StepResult::Escaped
        }
    );
    assert!(board.entity().unwrap().escaped());
}

#[test]
fn test_trap_damage_against_defence() {
    let cases = [
        // (health, defence, damage, expected health or None for death)
        (3, None, 1, Some(2)),
        (3, Some(1), 1, Some(3)),
        (3, Some(1), 2, Some(1)),
        (3, Some(2), 2, Some(3)),
        (2, None, 2, None),
        (2, Some(1), 5, None),
    ];

    for (health, defence, damage, expected) in cases {
        let mut config = GameConfig::default();
        config.ghost.health = health;
        config.ghost.defence = defence;
        config.trap_damage = damage;
        let mut board = parse_layout("GT", 1, 2, &config).unwrap();
        let before = board.clone();

        match expected {
            Some(left) => {
                board.move_right().unwrap();
                assert_eq!(
                    board.entity().unwrap().health(),
                    left,
                    "{health}/{defence:?}/{damage}"
                );
            }
            None => {
                let died = board.move_right().unwrap_err();
                assert_eq!(died.health, health);
                assert_eq!(died.damage, damage);
                assert_eq!(board, before);
            }
        }
    }
}

#[test]
fn test_traps_persist_after_use() {
    // x0: G T g
    let mut config = GameConfig::default();
    config.ghost.health = 10;
    let mut board = parse_layout("GTg", 1, 3, &config).unwrap();

    for _ in 0..3 {
        board.move_right().unwrap();
        board.move_right().unwrap();
        board.move_left().unwrap();
        board.move_left().unwrap();
    }

    assert_eq!(board.alias_at(Position::new(0, 1)), Some(DisplayAlias::Trap));
    assert_eq!(board.entity().unwrap().health(), 4);
}

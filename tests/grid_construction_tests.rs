// Grid construction tests
//
// Covers the bounds predicate, both dead-snake policies, body-write
// priority over threat marks within a single construction pass, food
// placement, and the typed failures on malformed input.

use pathsnake::config::DeadSnakePolicy;
use pathsnake::engine::DecisionError;
use pathsnake::types::{Battlesnake, Board, Coord};
use pathsnake::world::{build_grid, Cell, Grid};

fn snake(id: &str, health: i32, body: &[(i32, i32)]) -> Battlesnake {
    Battlesnake {
        id: id.to_string(),
        name: id.to_string(),
        health,
        body: body.iter().map(|&(x, y)| Coord { x, y }).collect(),
        length: body.len() as i32,
        latency: "0".to_string(),
        shout: None,
    }
}

fn board(width: i32, height: i32, food: &[(i32, i32)], snakes: Vec<Battlesnake>) -> Board {
    Board {
        width,
        height,
        food: food.iter().map(|&(x, y)| Coord { x, y }).collect(),
        snakes,
    }
}

#[test]
fn test_out_of_bounds_predicate() {
    let grid = Grid::new(3, 2).unwrap();

    assert!(grid.is_out_of_bounds(Coord { x: -1, y: 0 }));
    assert!(grid.is_out_of_bounds(Coord { x: 0, y: -1 }));
    assert!(grid.is_out_of_bounds(Coord { x: 3, y: 0 }));
    assert!(grid.is_out_of_bounds(Coord { x: 0, y: 2 }));

    assert!(!grid.is_out_of_bounds(Coord { x: 0, y: 0 }));
    assert!(!grid.is_out_of_bounds(Coord { x: 2, y: 1 }));
}

#[test]
fn test_non_positive_dimensions_rejected() {
    assert_eq!(
        Grid::new(0, 5).unwrap_err(),
        DecisionError::InvalidDimensions { width: 0, height: 5 }
    );
    assert_eq!(
        Grid::new(5, -1).unwrap_err(),
        DecisionError::InvalidDimensions { width: 5, height: -1 }
    );
}

#[test]
fn test_live_snake_bodies_are_written() {
    let you = snake("me", 100, &[(1, 1), (1, 2)]);
    let b = board(5, 5, &[], vec![you.clone()]);

    let grid = build_grid(&b, &you, DeadSnakePolicy::SkipSnake).unwrap();

    assert_eq!(
        grid.cell(Coord { x: 1, y: 1 }),
        Some(&Cell::SnakeBody {
            owner: "me".to_string()
        })
    );
    assert_eq!(
        grid.cell(Coord { x: 1, y: 2 }),
        Some(&Cell::SnakeBody {
            owner: "me".to_string()
        })
    );
    assert_eq!(grid.cell(Coord { x: 0, y: 0 }), Some(&Cell::Empty));
}

#[test]
fn test_dead_snake_contributes_no_body_cells() {
    let you = snake("me", 100, &[(0, 0)]);
    let dead = snake("dead", 0, &[(2, 2), (2, 3)]);
    let b = board(5, 5, &[], vec![you.clone(), dead]);

    let grid = build_grid(&b, &you, DeadSnakePolicy::SkipSnake).unwrap();

    assert_eq!(grid.cell(Coord { x: 2, y: 2 }), Some(&Cell::Empty));
    assert_eq!(grid.cell(Coord { x: 2, y: 3 }), Some(&Cell::Empty));
}

#[test]
fn test_abort_remaining_stops_at_first_dead_snake() {
    let you = snake("me", 100, &[(0, 0)]);
    let dead = snake("dead", 0, &[(2, 2)]);
    let later = snake("later", 100, &[(4, 4)]);
    let b = board(5, 5, &[], vec![you.clone(), dead, later]);

    let grid = build_grid(&b, &you, DeadSnakePolicy::AbortRemaining).unwrap();

    // The snake after the dead one never gets written
    assert_eq!(grid.cell(Coord { x: 4, y: 4 }), Some(&Cell::Empty));
}

#[test]
fn test_skip_snake_keeps_processing_after_dead_snake() {
    let you = snake("me", 100, &[(0, 0)]);
    let dead = snake("dead", 0, &[(2, 2)]);
    let later = snake("later", 100, &[(4, 4)]);
    let b = board(5, 5, &[], vec![you.clone(), dead, later]);

    let grid = build_grid(&b, &you, DeadSnakePolicy::SkipSnake).unwrap();

    assert_eq!(grid.cell(Coord { x: 2, y: 2 }), Some(&Cell::Empty));
    assert_eq!(
        grid.cell(Coord { x: 4, y: 4 }),
        Some(&Cell::SnakeBody {
            owner: "later".to_string()
        })
    );
}

#[test]
fn test_opponent_head_neighbors_are_threatened() {
    let you = snake("me", 100, &[(0, 0)]);
    // Opponent head at (2, 2), same length as us
    let opp = snake("a", 100, &[(2, 2)]);
    let b = board(5, 5, &[], vec![you.clone(), opp]);

    let grid = build_grid(&b, &you, DeadSnakePolicy::SkipSnake).unwrap();

    for &(x, y) in &[(2, 1), (1, 2), (2, 3), (3, 2)] {
        assert_eq!(
            grid.cell(Coord { x, y }),
            Some(&Cell::ThreatenedSpace {
                owner: "a".to_string(),
                dangerous: true
            }),
            "({}, {}) should be a dangerous threatened space",
            x,
            y
        );
    }
}

#[test]
fn test_shorter_opponent_marks_non_dangerous_threats() {
    let you = snake("me", 100, &[(0, 0), (0, 1)]);
    let opp = snake("a", 100, &[(2, 2)]);
    let b = board(5, 5, &[], vec![you.clone(), opp]);

    let grid = build_grid(&b, &you, DeadSnakePolicy::SkipSnake).unwrap();

    assert_eq!(
        grid.cell(Coord { x: 2, y: 1 }),
        Some(&Cell::ThreatenedSpace {
            owner: "a".to_string(),
            dangerous: false
        })
    );
}

#[test]
fn test_no_threats_marked_around_our_own_head() {
    let you = snake("me", 100, &[(2, 2)]);
    let b = board(5, 5, &[], vec![you.clone()]);

    let grid = build_grid(&b, &you, DeadSnakePolicy::SkipSnake).unwrap();

    for &(x, y) in &[(2, 1), (1, 2), (2, 3), (3, 2)] {
        assert_eq!(grid.cell(Coord { x, y }), Some(&Cell::Empty));
    }
}

#[test]
fn test_later_body_overwrites_earlier_threat_mark() {
    let you = snake("me", 100, &[(0, 0)]);
    // "a" threatens (2, 1) among others; "b" then claims it with a body segment
    let a = snake("a", 100, &[(2, 2)]);
    let b_snake = snake("b", 100, &[(2, 1), (3, 1)]);
    let b = board(5, 5, &[], vec![you.clone(), a, b_snake]);

    let grid = build_grid(&b, &you, DeadSnakePolicy::SkipSnake).unwrap();

    assert_eq!(
        grid.cell(Coord { x: 2, y: 1 }),
        Some(&Cell::SnakeBody {
            owner: "b".to_string()
        })
    );
    // An untouched neighbor of "a" keeps its threat mark
    assert_eq!(
        grid.cell(Coord { x: 1, y: 2 }),
        Some(&Cell::ThreatenedSpace {
            owner: "a".to_string(),
            dangerous: true
        })
    );
}

#[test]
fn test_threat_never_overwrites_a_body_cell() {
    // Our body sits right next to the opponent head
    let you = snake("me", 100, &[(1, 2), (0, 2)]);
    let opp = snake("a", 100, &[(2, 2), (3, 2)]);
    let b = board(5, 5, &[], vec![you.clone(), opp]);

    let grid = build_grid(&b, &you, DeadSnakePolicy::SkipSnake).unwrap();

    assert_eq!(
        grid.cell(Coord { x: 1, y: 2 }),
        Some(&Cell::SnakeBody {
            owner: "me".to_string()
        })
    );
}

#[test]
fn test_food_is_written_last() {
    let you = snake("me", 100, &[(0, 0)]);
    let opp = snake("a", 100, &[(2, 2)]);
    // (2, 1) is threatened by "a", but food lands there afterwards
    let b = board(5, 5, &[(2, 1), (4, 4)], vec![you.clone(), opp]);

    let grid = build_grid(&b, &you, DeadSnakePolicy::SkipSnake).unwrap();

    assert_eq!(grid.cell(Coord { x: 2, y: 1 }), Some(&Cell::Food));
    assert_eq!(grid.cell(Coord { x: 4, y: 4 }), Some(&Cell::Food));
}

#[test]
fn test_out_of_bounds_body_point_fails_fast() {
    let you = snake("me", 100, &[(0, 0)]);
    let stray = snake("a", 100, &[(5, 2)]);
    let b = board(5, 5, &[], vec![you.clone(), stray]);

    assert_eq!(
        build_grid(&b, &you, DeadSnakePolicy::SkipSnake).unwrap_err(),
        DecisionError::PointOutOfBounds {
            x: 5,
            y: 2,
            width: 5,
            height: 5
        }
    );
}

#[test]
fn test_out_of_bounds_food_point_fails_fast() {
    let you = snake("me", 100, &[(0, 0)]);
    let b = board(5, 5, &[(-1, 3)], vec![you.clone()]);

    assert_eq!(
        build_grid(&b, &you, DeadSnakePolicy::SkipSnake).unwrap_err(),
        DecisionError::PointOutOfBounds {
            x: -1,
            y: 3,
            width: 5,
            height: 5
        }
    );
}

#[test]
fn test_render_marks_every_cell_class() {
    let you = snake("me", 100, &[(0, 0)]);
    let opp = snake("a", 100, &[(2, 1)]);
    let b = board(3, 3, &[(0, 2)], vec![you.clone(), opp]);

    let grid = build_grid(&b, &you, DeadSnakePolicy::SkipSnake).unwrap();
    let rendered = grid.render();

    // y-down rows: head "m" top-left, "a" body mid-right with "?" marks,
    // food bottom-left
    assert_eq!(rendered, "m-?\n-?a\nf-?\n");
}

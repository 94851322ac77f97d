// Decision engine
//
// One synchronous pass per turn: build the grid, plan paths to food, score
// the four candidate directions, pick the best with a random tie-break.
// The only nondeterminism is the caller-supplied RNG; nothing survives the
// call.

use log::debug;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::config::{Config, ScoresConfig};
use crate::pathfind;
use crate::types::{Battlesnake, Board, Coord, Direction, GameState};
use crate::world::{self, Cell, Grid};

/// Failures the decision core reports to its caller. Unreachable food and
/// the all-moves-bad case are not errors; see the fallback in `select`.
#[derive(Debug, Error, PartialEq)]
pub enum DecisionError {
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("point ({x}, {y}) lies outside the {width}x{height} board")]
    PointOutOfBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
    #[error("snake '{id}' has an empty body")]
    EmptyBody { id: String },
}

/// The chosen move plus a status line for the arena
#[derive(Debug, Clone, PartialEq)]
pub struct Decision {
    pub direction: Direction,
    pub shout: String,
}

/// Score breakdown for one candidate direction
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MoveScore {
    pub direction: Direction,
    pub danger: f64,
    pub desirability: usize,
    pub score: f64,
}

/// Everything one turn's evaluation produced. The grid and the score
/// breakdown exist for observability (debug log, replay); the decision is
/// the answer.
#[derive(Debug)]
pub struct Evaluation {
    pub grid: Grid,
    pub scores: [MoveScore; 4],
    pub decision: Decision,
}

/// Computes the move for one snapshot. The API-facing entry point.
pub fn decide<R: Rng>(
    state: &GameState,
    config: &Config,
    rng: &mut R,
) -> Result<Decision, DecisionError> {
    evaluate(&state.board, &state.you, config, rng).map(|evaluation| evaluation.decision)
}

/// Full pipeline: grid, paths, per-direction scores, selection.
pub fn evaluate<R: Rng>(
    board: &Board,
    you: &Battlesnake,
    config: &Config,
    rng: &mut R,
) -> Result<Evaluation, DecisionError> {
    let head = you.head().ok_or_else(|| DecisionError::EmptyBody {
        id: you.id.clone(),
    })?;

    let grid = world::build_grid(board, you, config.grid.dead_snake_policy)?;
    let paths = pathfind::food_paths(&grid, head, &board.food);

    let scores = Direction::all().map(|direction| {
        let next = direction.apply(&head);
        let danger = danger(&grid, next, &config.scores);
        let desirability = desirability(&paths, next);
        let score = (1.0 - danger) * (desirability as f64 + 1.0);

        debug!(
            "candidate {}: danger {:.2}, desirability {}, score {:.2}",
            direction.as_str(),
            danger,
            desirability,
            score
        );

        MoveScore {
            direction,
            danger,
            desirability,
            score,
        }
    });

    let decision = select(&scores, rng);

    Ok(Evaluation {
        grid,
        scores,
        decision,
    })
}

/// Danger of stepping onto `point`, in [0, 1]
fn danger(grid: &Grid, point: Coord, scores: &ScoresConfig) -> f64 {
    match grid.cell(point) {
        None => scores.danger_out_of_bounds,
        Some(Cell::Food) => scores.danger_food,
        Some(Cell::SnakeBody { .. }) => scores.danger_snake_body,
        Some(Cell::ThreatenedSpace { dangerous: true, .. }) => scores.danger_major_threat,
        Some(Cell::ThreatenedSpace { dangerous: false, .. }) => scores.danger_minor_threat,
        Some(Cell::Empty) => scores.danger_empty,
    }
}

/// How many shortest food paths route through `point` as their next step.
/// Paths shorter than two points carry no directional signal.
fn desirability(paths: &[Vec<Coord>], point: Coord) -> usize {
    paths.iter().filter(|path| path.get(1) == Some(&point)).count()
}

/// Retains the directions achieving the maximum score (exact float
/// equality) and breaks ties uniformly at random.
fn select<R: Rng>(scores: &[MoveScore; 4], rng: &mut R) -> Decision {
    let best = scores
        .iter()
        .map(|entry| entry.score)
        .fold(f64::NEG_INFINITY, f64::max);

    let candidates: Vec<Direction> = scores
        .iter()
        .filter(|entry| entry.score == best)
        .map(|entry| entry.direction)
        .collect();

    match candidates.choose(rng) {
        Some(&direction) => Decision {
            direction,
            shout: format!("moving {} (score {:.2})", direction.as_str(), best),
        },
        // Unreachable: the +1 desirability floor keeps every score finite.
        None => Decision {
            direction: Direction::Up,
            shout: "no safe move".to_string(),
        },
    }
}

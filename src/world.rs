// World model construction
//
// Builds the per-turn grid: one pass over the snake list writing body
// cells and head-adjacent threat marks, then food. The grid is owned by a
// single turn's evaluation and never carried over.

use crate::config::DeadSnakePolicy;
use crate::engine::DecisionError;
use crate::types::{Battlesnake, Board, Coord, Direction};

/// Classification of a single board cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Food,
    /// Occupied by a snake body segment
    SnakeBody { owner: String },
    /// A cell an opposing snake's head could enter next turn.
    /// `dangerous` is set when that snake is at least our length, so a
    /// head-to-head there loses.
    ThreatenedSpace { owner: String, dangerous: bool },
}

impl Cell {
    /// Impassable for the path planner
    pub fn blocked(&self) -> bool {
        matches!(
            self,
            Cell::SnakeBody { .. } | Cell::ThreatenedSpace { dangerous: true, .. }
        )
    }

    /// Safe to annotate: nothing solid here yet
    pub fn is_safe(&self) -> bool {
        matches!(self, Cell::Empty | Cell::Food)
    }
}

/// Dense row-major grid of cells, rebuilt from scratch every turn
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Result<Self, DecisionError> {
        if width <= 0 || height <= 0 {
            return Err(DecisionError::InvalidDimensions { width, height });
        }

        Ok(Grid {
            width,
            height,
            cells: vec![Cell::Empty; (width * height) as usize],
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_out_of_bounds(&self, coord: Coord) -> bool {
        coord.x < 0 || coord.y < 0 || coord.x >= self.width || coord.y >= self.height
    }

    /// The cell at `coord`, or `None` when out of bounds
    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        if self.is_out_of_bounds(coord) {
            None
        } else {
            Some(&self.cells[self.index(coord)])
        }
    }

    /// In bounds and not yet occupied by anything solid
    pub fn is_safe(&self, coord: Coord) -> bool {
        self.cell(coord).map_or(false, Cell::is_safe)
    }

    /// Impassable for the path planner; out of bounds counts as blocked
    pub fn is_blocked(&self, coord: Coord) -> bool {
        self.cell(coord).map_or(true, Cell::blocked)
    }

    fn index(&self, coord: Coord) -> usize {
        (coord.y * self.width + coord.x) as usize
    }

    fn set(&mut self, coord: Coord, cell: Cell) {
        debug_assert!(!self.is_out_of_bounds(coord));
        let idx = self.index(coord);
        self.cells[idx] = cell;
    }

    /// Human-readable map of the grid, one row per line, y-down:
    /// `-` empty, `f` food, `?` threatened, snake-id initial for bodies.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                let ch = match &self.cells[(y * self.width + x) as usize] {
                    Cell::Empty => '-',
                    Cell::Food => 'f',
                    Cell::SnakeBody { owner } => owner.chars().next().unwrap_or('s'),
                    Cell::ThreatenedSpace { .. } => '?',
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

/// Builds the annotated grid for one turn.
///
/// Snakes are processed in the order given: body segments first, then
/// threat marks around the head for every snake that is not ours. A later
/// snake's body overwrites an earlier snake's threat mark. Food is written
/// last, unconditionally.
pub fn build_grid(
    board: &Board,
    you: &Battlesnake,
    policy: DeadSnakePolicy,
) -> Result<Grid, DecisionError> {
    let mut grid = Grid::new(board.width, board.height)?;

    for snake in &board.snakes {
        if snake.health == 0 {
            match policy {
                DeadSnakePolicy::AbortRemaining => break,
                DeadSnakePolicy::SkipSnake => continue,
            }
        }

        for &point in &snake.body {
            if grid.is_out_of_bounds(point) {
                return Err(DecisionError::PointOutOfBounds {
                    x: point.x,
                    y: point.y,
                    width: board.width,
                    height: board.height,
                });
            }
            grid.set(
                point,
                Cell::SnakeBody {
                    owner: snake.id.clone(),
                },
            );
        }

        if snake.id != you.id {
            mark_threats(&mut grid, snake, you);
        }
    }

    for &food in &board.food {
        if grid.is_out_of_bounds(food) {
            return Err(DecisionError::PointOutOfBounds {
                x: food.x,
                y: food.y,
                width: board.width,
                height: board.height,
            });
        }
        grid.set(food, Cell::Food);
    }

    Ok(grid)
}

/// Marks the four cells adjacent to an opposing snake's head as threatened,
/// skipping cells already occupied by a body. A snake our length or longer
/// produces dangerous marks.
fn mark_threats(grid: &mut Grid, snake: &Battlesnake, you: &Battlesnake) {
    let head = match snake.head() {
        Some(head) => head,
        None => return,
    };

    let dangerous = snake.length >= you.length;
    for direction in Direction::all() {
        let point = direction.apply(&head);
        if grid.is_safe(point) {
            grid.set(
                point,
                Cell::ThreatenedSpace {
                    owner: snake.id.clone(),
                    dangerous,
                },
            );
        }
    }
}

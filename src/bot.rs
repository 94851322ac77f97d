// Bot facade
//
// Owns the loaded configuration and the debug logger, and maps the four
// API endpoints onto the decision core. The core itself has no clock and
// no fallback; both live here. A turn that errors, panics, or blows the
// time budget still answers with a safe default.

use log::{info, warn};
use serde_json::{json, Value};
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::debug_logger::DebugLogger;
use crate::engine;
use crate::types::{Battlesnake, Board, Game};

pub struct Bot {
    config: Config,
    debug_logger: DebugLogger,
}

impl Bot {
    /// Creates a new Bot with the given configuration and no debug logging
    pub fn new(config: Config) -> Self {
        Bot {
            config,
            debug_logger: DebugLogger::disabled(),
        }
    }

    /// Creates a new Bot that records every decision through `debug_logger`
    pub fn with_debug_logger(config: Config, debug_logger: DebugLogger) -> Self {
        Bot {
            config,
            debug_logger,
        }
    }

    /// Returns bot metadata and appearance
    /// Corresponds to GET / endpoint
    pub fn info(&self) -> Value {
        info!("INFO");

        json!({
            "apiversion": "1",
            "author": "pathsnake",
            "color": "#E77431",
            "head": "tongue",
            "tail": "freckled",
        })
    }

    /// Called when a game starts
    /// Corresponds to POST /start endpoint
    pub fn start(&self, game: &Game, _turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("GAME START: {}", game.id);
    }

    /// Called when a game ends
    /// Corresponds to POST /end endpoint
    pub fn end(&self, game: &Game, _turn: &i32, _board: &Board, _you: &Battlesnake) {
        info!("GAME OVER: {}", game.id);
    }

    /// Computes and returns the next move
    /// Corresponds to POST /move endpoint
    ///
    /// The evaluation runs on a blocking worker under the configured time
    /// budget. Whatever goes wrong, the arena gets an answer.
    pub async fn get_move(
        &self,
        _game: &Game,
        turn: &i32,
        board: &Board,
        you: &Battlesnake,
    ) -> Value {
        let start_time = Instant::now();

        let board_clone = board.clone();
        let you_clone = you.clone();
        let config = self.config.clone();

        let task = tokio::task::spawn_blocking(move || {
            engine::evaluate(&board_clone, &you_clone, &config, &mut rand::rng())
        });

        let budget = Duration::from_millis(self.config.timing.effective_budget_ms());

        match tokio::time::timeout(budget, task).await {
            Ok(Ok(Ok(evaluation))) => {
                info!(
                    "Turn {}: chose {} ({}, time: {}ms)",
                    turn,
                    evaluation.decision.direction.as_str(),
                    evaluation.decision.shout,
                    start_time.elapsed().as_millis()
                );

                self.debug_logger
                    .log_decision(*turn, board.clone(), you.id.clone(), &evaluation);

                json!({
                    "move": evaluation.decision.direction.as_str(),
                    "shout": evaluation.decision.shout,
                })
            }
            Ok(Ok(Err(e))) => {
                warn!("Turn {}: decision failed: {}", turn, e);
                Self::fallback_response()
            }
            Ok(Err(e)) => {
                warn!("Turn {}: decision task panicked: {}", turn, e);
                Self::fallback_response()
            }
            Err(_) => {
                warn!(
                    "Turn {}: decision exceeded {}ms budget",
                    turn,
                    budget.as_millis()
                );
                Self::fallback_response()
            }
        }
    }

    /// Hardcoded safe answer used whenever the core cannot deliver one
    fn fallback_response() -> Value {
        json!({
            "move": "up",
            "shout": "taking a gamble",
        })
    }
}

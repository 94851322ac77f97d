// Bot facade tests
//
// The /move contract: the arena always gets an answer. A clean evaluation
// returns the scored move; malformed input degrades to the hardcoded
// fallback instead of an error.

use std::collections::HashMap;

use pathsnake::bot::Bot;
use pathsnake::config::Config;
use pathsnake::types::{Battlesnake, Board, Coord, Game};

fn game() -> Game {
    Game {
        id: "test-game".to_string(),
        ruleset: HashMap::new(),
        timeout: 500,
    }
}

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

#[tokio::test]
async fn test_get_move_answers_with_the_scored_move() {
    let bot = Bot::new(Config::default_hardcoded());

    let you = snake("me", 90, &[(2, 2)]);
    let board = Board {
        width: 5,
        height: 5,
        food: vec![Coord { x: 3, y: 2 }],
        snakes: vec![you.clone()],
    };

    let response = bot.get_move(&game(), &0, &board, &you).await;

    assert_eq!(response["move"], "right");
    assert!(response["shout"].as_str().unwrap().contains("right"));
}

#[tokio::test]
async fn test_get_move_falls_back_on_malformed_input() {
    let bot = Bot::new(Config::default_hardcoded());

    // Empty body makes the core fail with a typed error; the facade must
    // still answer with the safe default
    let you = snake("me", 90, &[]);
    let board = Board {
        width: 5,
        height: 5,
        food: vec![],
        snakes: vec![you.clone()],
    };

    let response = bot.get_move(&game(), &0, &board, &you).await;

    assert_eq!(response["move"], "up");
    assert_eq!(response["shout"], "taking a gamble");
}

#[tokio::test]
async fn test_get_move_falls_back_on_invalid_dimensions() {
    let bot = Bot::new(Config::default_hardcoded());

    let you = snake("me", 90, &[(0, 0)]);
    let board = Board {
        width: -3,
        height: 5,
        food: vec![],
        snakes: vec![you.clone()],
    };

    let response = bot.get_move(&game(), &0, &board, &you).await;

    assert_eq!(response["move"], "up");
}

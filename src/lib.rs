// Library exports for the pathsnake bot
// This allows the replay tool and the test suites to use the core logic

pub mod bot;
pub mod config;
pub mod debug_logger;
pub mod engine;
pub mod pathfind;
pub mod replay;
pub mod types;
pub mod world;

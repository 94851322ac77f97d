// Configuration module for reading Snake.toml
//
// Every behavioral constant lives here with a hardcoded default that must
// match the checked-in Snake.toml; the in-module tests enforce that.

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main configuration structure containing all tunable parameters
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub timing: TimingConfig,
    pub scores: ScoresConfig,
    pub grid: GridConfig,
    pub debug: DebugConfig,
}

/// Timing constants for the per-turn response budget
#[derive(Debug, Deserialize, Clone)]
pub struct TimingConfig {
    pub response_time_budget_ms: u64,
    pub network_overhead_ms: u64,
}

impl TimingConfig {
    /// Computes the effective computation budget
    pub fn effective_budget_ms(&self) -> u64 {
        self.response_time_budget_ms.saturating_sub(self.network_overhead_ms)
    }
}

/// Danger weights per cell class, all in [0, 1]
#[derive(Debug, Deserialize, Clone)]
pub struct ScoresConfig {
    pub danger_out_of_bounds: f64,
    pub danger_snake_body: f64,
    pub danger_major_threat: f64,
    pub danger_minor_threat: f64,
    pub danger_food: f64,
    pub danger_empty: f64,
}

/// How the grid builder treats a dead snake (health 0) in the snake list
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DeadSnakePolicy {
    /// Stop processing the entire remaining snake list. This is what the
    /// reference server observably does; kept as the default so replays
    /// line up.
    AbortRemaining,
    /// Skip only the dead snake and keep going
    SkipSnake,
}

/// Grid construction constants
#[derive(Debug, Deserialize, Clone)]
pub struct GridConfig {
    pub dead_snake_policy: DeadSnakePolicy,
}

/// Debug configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DebugConfig {
    pub enabled: bool,
    pub log_file_path: String,
}

impl Config {
    /// Loads configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Loads default configuration from Snake.toml in the project root
    pub fn load_default() -> Result<Self, String> {
        Self::from_file("Snake.toml")
    }

    /// Creates a configuration with hardcoded default values as fallback
    /// This should match the constants defined in Snake.toml
    pub fn default_hardcoded() -> Self {
        Config {
            timing: TimingConfig {
                response_time_budget_ms: 400,
                network_overhead_ms: 50,
            },
            scores: ScoresConfig {
                danger_out_of_bounds: 1.0,
                danger_snake_body: 1.0,
                danger_major_threat: 0.9,
                danger_minor_threat: 0.1,
                danger_food: 0.0,
                danger_empty: 0.0,
            },
            grid: GridConfig {
                dead_snake_policy: DeadSnakePolicy::AbortRemaining,
            },
            debug: DebugConfig {
                enabled: false,
                log_file_path: "pathsnake_debug.jsonl".to_string(),
            },
        }
    }

    /// Attempts to load from file, falls back to hardcoded defaults on error
    pub fn load_or_default() -> Self {
        Self::load_default().unwrap_or_else(|e| {
            eprintln!(
                "Warning: Could not load Snake.toml ({}), using hardcoded defaults",
                e
            );
            Self::default_hardcoded()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_budget_calculation() {
        let config = Config::default_hardcoded();
        assert_eq!(config.timing.effective_budget_ms(), 350);
    }

    #[test]
    fn test_budget_never_underflows() {
        let timing = TimingConfig {
            response_time_budget_ms: 30,
            network_overhead_ms: 50,
        };
        assert_eq!(timing.effective_budget_ms(), 0);
    }

    #[test]
    fn test_snake_toml_can_be_parsed() {
        let result = Config::from_file("Snake.toml");
        assert!(
            result.is_ok(),
            "Failed to parse Snake.toml: {:?}",
            result.err()
        );
    }

    #[test]
    fn test_all_config_values_match_hardcoded_defaults() {
        let file_config = Config::from_file("Snake.toml").expect("Snake.toml should be parseable");
        let hardcoded_config = Config::default_hardcoded();

        assert_eq!(
            file_config.timing.response_time_budget_ms,
            hardcoded_config.timing.response_time_budget_ms
        );
        assert_eq!(
            file_config.timing.network_overhead_ms,
            hardcoded_config.timing.network_overhead_ms
        );

        assert_eq!(
            file_config.scores.danger_out_of_bounds,
            hardcoded_config.scores.danger_out_of_bounds
        );
        assert_eq!(
            file_config.scores.danger_snake_body,
            hardcoded_config.scores.danger_snake_body
        );
        assert_eq!(
            file_config.scores.danger_major_threat,
            hardcoded_config.scores.danger_major_threat
        );
        assert_eq!(
            file_config.scores.danger_minor_threat,
            hardcoded_config.scores.danger_minor_threat
        );
        assert_eq!(
            file_config.scores.danger_food,
            hardcoded_config.scores.danger_food
        );
        assert_eq!(
            file_config.scores.danger_empty,
            hardcoded_config.scores.danger_empty
        );

        assert_eq!(
            file_config.grid.dead_snake_policy,
            hardcoded_config.grid.dead_snake_policy
        );

        assert_eq!(file_config.debug.enabled, hardcoded_config.debug.enabled);
        assert_eq!(
            file_config.debug.log_file_path,
            hardcoded_config.debug.log_file_path
        );
    }

    #[test]
    fn test_dead_snake_policy_parses_kebab_case() {
        let toml = r#"
            [timing]
            response_time_budget_ms = 400
            network_overhead_ms = 50

            [scores]
            danger_out_of_bounds = 1.0
            danger_snake_body = 1.0
            danger_major_threat = 0.9
            danger_minor_threat = 0.1
            danger_food = 0.0
            danger_empty = 0.0

            [grid]
            dead_snake_policy = "skip-snake"

            [debug]
            enabled = false
            log_file_path = "pathsnake_debug.jsonl"
        "#;

        let config: Config = toml::from_str(toml).expect("inline config should parse");
        assert_eq!(config.grid.dead_snake_policy, DeadSnakePolicy::SkipSnake);
    }

    #[test]
    fn test_invalid_toml_returns_error() {
        let result = Config::from_file("nonexistent.toml");
        assert!(result.is_err());
    }
}

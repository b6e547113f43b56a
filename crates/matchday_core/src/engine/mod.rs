//! # Match engine
//!
//! Match state machine plus its configuration.
//!
//! ```rust
//! use matchday_core::engine::{FootballMatch, MatchStatus};
//! use matchday_core::models::TeamSide;
//!
//! let mut game = FootballMatch::new("Team A", "Team B", None);
//! game.start_match().unwrap();
//! game.goal(TeamSide::Home, "P1", 18, None).unwrap();
//! game.finish_match().unwrap();
//!
//! assert_eq!(game.status(), MatchStatus::Finished);
//! assert_eq!(game.winner().to_string(), "Team A");
//! ```

pub mod config;
mod football_match;

pub use config::{ConfigError, MatchConfig, TransitionPolicy, CONFIG_PATH_ENV};
pub use football_match::{FootballMatch, MatchStatus};

#[cfg(test)]
mod match_scenario_test;

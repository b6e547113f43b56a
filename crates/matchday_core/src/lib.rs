//! # matchday_core - Match Event Notification and Player Decoration
//!
//! A synchronous, in-process football match simulation:
//! - A [`FootballMatch`] state machine that logs every mutation and
//!   broadcasts it to attached observers in attachment order
//! - Stackable player decorators ([`Captain`], [`Injured`], [`YoungTalent`])
//!   over the base [`Player`] built by [`PlayerFactory`]
//! - Built-in observers for commentary, statistics and media headlines
//! - JSON export of the match snapshot and event log

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod observers;
pub mod player;

pub use api::{match_report_json, MatchReport};
pub use engine::{FootballMatch, MatchConfig, MatchStatus, TransitionPolicy};
pub use error::{MatchError, ObserverError, Result};
pub use models::{EventPayload, MatchEventKind, MatchInfo, MatchStatistics, Position, TeamSide};

// Re-export player system types
pub use player::{
    Captain, Developable, Footballer, Injured, Motivatable, Player, PlayerFactory, Recoverable,
    RecoveryStatus, YoungTalent,
};

// Re-export observers
pub use observers::{
    shared, Commentator, DeliveryReport, MatchObserver, MediaReporter, ObserverHandle,
    RecordingObserver, StatisticsTracker,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use serde::{Deserialize, Serialize};

use super::events::{Score, Winner};

/// Point-in-time snapshot of a match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchInfo {
    pub home_team: String,
    pub away_team: String,
    pub score: Score,
    pub minute: u8,
    pub is_finished: bool,
    /// Only filled once the match is finished.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Winner>,
    pub total_events: usize,
}

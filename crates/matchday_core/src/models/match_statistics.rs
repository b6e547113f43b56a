use serde::{Deserialize, Serialize};

use super::events::{CardRecord, GoalRecord};

/// Aggregated statistics derived from the events an observer has seen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MatchStatistics {
    pub total_goals: usize,
    pub home_goals: usize,
    pub away_goals: usize,
    /// Scorer of every goal, in the order scored.
    pub goal_scorers: Vec<String>,
    pub yellow_cards: usize,
    pub red_cards: usize,
    /// Booked players, in the order booked.
    pub card_recipients: Vec<String>,
    pub substitutions: usize,
    pub total_events: usize,
    pub goals: Vec<GoalRecord>,
    pub cards: Vec<CardRecord>,
}

impl MatchStatistics {
    /// Goal records credited to `scorer`.
    pub fn goals_by<'a>(&'a self, scorer: &'a str) -> impl Iterator<Item = &'a GoalRecord> + 'a {
        self.goals.iter().filter(move |goal| goal.scorer == scorer)
    }
}

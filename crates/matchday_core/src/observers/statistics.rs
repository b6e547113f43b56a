use super::MatchObserver;
use crate::error::ObserverError;
use crate::models::{
    CardRecord, EventPayload, GoalRecord, MatchEventKind, MatchStatistics, SubstitutionRecord,
    TeamSide,
};

/// Accumulates every payload it sees, grouped by kind and in arrival order.
#[derive(Debug, Default, Clone)]
pub struct StatisticsTracker {
    goals: Vec<GoalRecord>,
    yellow_cards: Vec<CardRecord>,
    red_cards: Vec<CardRecord>,
    substitutions: Vec<SubstitutionRecord>,
    events: Vec<(MatchEventKind, EventPayload)>,
}

impl StatisticsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn goals(&self) -> &[GoalRecord] {
        &self.goals
    }

    /// Yellow cards only; red cards are counted in [`MatchStatistics::red_cards`].
    pub fn cards(&self) -> &[CardRecord] {
        &self.yellow_cards
    }

    pub fn substitutions(&self) -> &[SubstitutionRecord] {
        &self.substitutions
    }

    /// Every event seen, in chronological order.
    pub fn events(&self) -> &[(MatchEventKind, EventPayload)] {
        &self.events
    }

    /// Derived from the accumulated records on every call.
    pub fn match_statistics(&self) -> MatchStatistics {
        let goals_for = |side: TeamSide| self.goals.iter().filter(|g| g.team == side).count();

        MatchStatistics {
            total_goals: self.goals.len(),
            home_goals: goals_for(TeamSide::Home),
            away_goals: goals_for(TeamSide::Away),
            goal_scorers: self.goals.iter().map(|g| g.scorer.clone()).collect(),
            yellow_cards: self.yellow_cards.len(),
            red_cards: self.red_cards.len(),
            card_recipients: self.yellow_cards.iter().map(|c| c.player.clone()).collect(),
            substitutions: self.substitutions.len(),
            total_events: self.events.len(),
            goals: self.goals.clone(),
            cards: self.yellow_cards.clone(),
        }
    }
}

impl MatchObserver for StatisticsTracker {
    fn update(&mut self, kind: MatchEventKind, payload: &EventPayload) -> Result<(), ObserverError> {
        self.events.push((kind, payload.clone()));

        match payload {
            EventPayload::Goal(goal) => self.goals.push(goal.clone()),
            EventPayload::YellowCard(card) => self.yellow_cards.push(card.clone()),
            EventPayload::RedCard(card) => self.red_cards.push(card.clone()),
            EventPayload::Substitution(sub) => self.substitutions.push(sub.clone()),
            EventPayload::MatchStart(_) | EventPayload::MatchEnd(_) => {}
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "statistics"
    }
}

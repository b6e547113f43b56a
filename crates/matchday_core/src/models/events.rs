use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MatchError;

/// Closed set of event kinds a match can broadcast.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum MatchEventKind {
    MatchStart,
    Goal,
    YellowCard,
    /// Part of the event contract; no match operation emits it yet.
    RedCard,
    Substitution,
    MatchEnd,
}

impl MatchEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchEventKind::MatchStart => "match_start",
            MatchEventKind::Goal => "goal",
            MatchEventKind::YellowCard => "yellow_card",
            MatchEventKind::RedCard => "red_card",
            MatchEventKind::Substitution => "substitution",
            MatchEventKind::MatchEnd => "match_end",
        }
    }
}

impl fmt::Display for MatchEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamSide::Home => f.write_str("home"),
            TeamSide::Away => f.write_str("away"),
        }
    }
}

impl FromStr for TeamSide {
    type Err = MatchError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "home" => Ok(TeamSide::Home),
            "away" => Ok(TeamSide::Away),
            _ => Err(MatchError::UnknownTeamSide(tag.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn for_side(&self, side: TeamSide) -> u32 {
        match side {
            TeamSide::Home => self.home,
            TeamSide::Away => self.away,
        }
    }

    pub(crate) fn increment(&mut self, side: TeamSide) {
        match side {
            TeamSide::Home => self.home = self.home.saturating_add(1),
            TeamSide::Away => self.away = self.away.saturating_add(1),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}

/// Result of comparing the two score components.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    Team(String),
    Draw,
}

impl Winner {
    /// Winning team name, `None` on a draw.
    pub fn team_name(&self) -> Option<&str> {
        match self {
            Winner::Team(name) => Some(name),
            Winner::Draw => None,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, Winner::Draw)
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Team(name) => f.write_str(name),
            Winner::Draw => f.write_str("draw"),
        }
    }
}

impl PartialEq<&str> for Winner {
    fn eq(&self, other: &&str) -> bool {
        self.team_name() == Some(*other)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalRecord {
    pub team: TeamSide,
    pub team_name: String,
    pub scorer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assist: Option<String>,
    pub minute: u8,
    /// Score right after this goal.
    pub score: Score,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardRecord {
    pub player: String,
    pub minute: u8,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubstitutionRecord {
    pub player_out: String,
    pub player_in: String,
    pub minute: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchStartRecord {
    pub home_team: String,
    pub away_team: String,
    pub stadium: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchEndRecord {
    pub final_score: Score,
    pub winner: Winner,
    pub home_team: String,
    pub away_team: String,
}

/// Data carried by a broadcast event. The variant always agrees with the
/// event kind it is delivered with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventPayload {
    MatchStart(MatchStartRecord),
    Goal(GoalRecord),
    YellowCard(CardRecord),
    RedCard(CardRecord),
    Substitution(SubstitutionRecord),
    MatchEnd(MatchEndRecord),
}

impl EventPayload {
    pub fn kind(&self) -> MatchEventKind {
        match self {
            EventPayload::MatchStart(_) => MatchEventKind::MatchStart,
            EventPayload::Goal(_) => MatchEventKind::Goal,
            EventPayload::YellowCard(_) => MatchEventKind::YellowCard,
            EventPayload::RedCard(_) => MatchEventKind::RedCard,
            EventPayload::Substitution(_) => MatchEventKind::Substitution,
            EventPayload::MatchEnd(_) => MatchEventKind::MatchEnd,
        }
    }

    /// Minute the event happened at, when it carries one.
    pub fn minute(&self) -> Option<u8> {
        match self {
            EventPayload::Goal(goal) => Some(goal.minute),
            EventPayload::YellowCard(card) | EventPayload::RedCard(card) => Some(card.minute),
            EventPayload::Substitution(sub) => Some(sub.minute),
            EventPayload::MatchStart(_) | EventPayload::MatchEnd(_) => None,
        }
    }
}

/// One entry of the append-only match event log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggedEvent {
    pub kind: MatchEventKind,
    pub payload: EventPayload,
}

impl LoggedEvent {
    pub fn new(payload: EventPayload) -> Self {
        Self { kind: payload.kind(), payload }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_kind_labels_are_unique() {
        let mut labels: Vec<_> = MatchEventKind::iter().map(|k| k.as_str()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 6);
    }

    #[test]
    fn test_team_side_parsing() {
        assert_eq!("home".parse::<TeamSide>().unwrap(), TeamSide::Home);
        assert_eq!("AWAY".parse::<TeamSide>().unwrap(), TeamSide::Away);
        assert_eq!(
            "centre".parse::<TeamSide>().unwrap_err(),
            MatchError::UnknownTeamSide("centre".to_string())
        );
    }

    #[test]
    fn test_payload_serializes_with_type_tag() {
        let payload = EventPayload::YellowCard(CardRecord {
            player: "P2".to_string(),
            minute: 34,
            reason: "rule violation".to_string(),
        });
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["type"], "yellow_card");
        assert_eq!(json["player"], "P2");
        assert_eq!(payload.kind(), MatchEventKind::YellowCard);
        assert_eq!(payload.minute(), Some(34));
    }

    #[test]
    fn test_winner_display() {
        assert_eq!(Winner::Team("Team A".to_string()).to_string(), "Team A");
        assert_eq!(Winner::Draw.to_string(), "draw");
        assert!(Winner::Team("Team A".to_string()) == "Team A");
        assert!(Winner::Draw != "draw");
    }
}

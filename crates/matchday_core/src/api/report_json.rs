use serde::{Deserialize, Serialize};

use crate::engine::FootballMatch;
use crate::error::{MatchError, Result};
use crate::models::{LoggedEvent, MatchInfo};

pub const REPORT_SCHEMA_VERSION: u8 = 1;

/// Snapshot plus full event log, as exported to JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchReport {
    pub schema_version: u8,
    pub stadium: String,
    pub info: MatchInfo,
    pub events: Vec<LoggedEvent>,
}

impl MatchReport {
    pub fn from_match(game: &FootballMatch) -> Self {
        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            stadium: game.stadium().to_string(),
            info: game.match_info(),
            events: game.event_log().to_vec(),
        }
    }
}

/// Serialize the current state of a match and its event log.
pub fn match_report_json(game: &FootballMatch) -> Result<String> {
    let report = MatchReport::from_match(game);
    Ok(serde_json::to_string_pretty(&report)?)
}

pub fn parse_match_report(json: &str) -> Result<MatchReport> {
    let report: MatchReport = serde_json::from_str(json)?;
    if report.schema_version != REPORT_SCHEMA_VERSION {
        return Err(MatchError::Serialization(format!(
            "Unsupported schema version: {}",
            report.schema_version
        )));
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventPayload, MatchEventKind, TeamSide};

    fn finished_match() -> FootballMatch {
        let mut game = FootballMatch::new("Team A", "Team B", Some("Central Park"));
        game.start_match().unwrap();
        game.goal(TeamSide::Away, "P5", 78, Some("P6")).unwrap();
        game.yellow_card("P2", 80, None).unwrap();
        game.finish_match().unwrap();
        game
    }

    #[test]
    fn test_report_contains_log_and_winner() {
        let json = match_report_json(&finished_match()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["schema_version"], 1);
        assert_eq!(value["stadium"], "Central Park");
        assert_eq!(value["info"]["score"]["away"], 1);
        assert_eq!(value["info"]["winner"]["team"], "Team B");
        assert_eq!(value["events"].as_array().unwrap().len(), 4);
        assert_eq!(value["events"][1]["payload"]["type"], "goal");
        assert_eq!(value["events"][1]["payload"]["assist"], "P6");
    }

    #[test]
    fn test_report_parses_back() {
        let game = finished_match();
        let report = parse_match_report(&match_report_json(&game).unwrap()).unwrap();

        assert_eq!(report.info, game.match_info());
        assert_eq!(report.events.last().map(|e| e.kind), Some(MatchEventKind::MatchEnd));
        assert!(matches!(report.events[2].payload, EventPayload::YellowCard(_)));
    }

    #[test]
    fn test_unfinished_match_omits_winner() {
        let game = FootballMatch::new("Team A", "Team B", None);
        let value: serde_json::Value =
            serde_json::from_str(&match_report_json(&game).unwrap()).unwrap();
        assert!(value["info"].get("winner").is_none());
        assert_eq!(value["events"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_rejects_other_schema_versions() {
        let mut value = serde_json::to_value(MatchReport::from_match(&finished_match())).unwrap();
        value["schema_version"] = serde_json::json!(7);

        let err = parse_match_report(&value.to_string()).unwrap_err();
        assert!(matches!(err, MatchError::Serialization(msg) if msg.contains('7')));
        assert!(parse_match_report("{not json").is_err());
    }
}

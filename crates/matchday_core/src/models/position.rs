use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MatchError;

/// Playing position, fixed when a player is created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

const GOALKEEPER_SKILLS: [&str; 4] =
    ["reflexes", "handling", "commanding the defence", "rushing out"];
const DEFENDER_SKILLS: [&str; 4] = ["tackling", "heading", "positioning", "physical duels"];
const MIDFIELDER_SKILLS: [&str; 4] = ["passing", "dribbling", "vision", "long balls"];
const FORWARD_SKILLS: [&str; 4] = ["shooting", "goal instinct", "pace", "box presence"];

impl Position {
    /// Canonical lowercase label (e.g., "goalkeeper").
    pub fn label(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "goalkeeper",
            Position::Defender => "defender",
            Position::Midfielder => "midfielder",
            Position::Forward => "forward",
        }
    }

    /// Base skill tags. One static entry per position.
    pub fn skills(&self) -> &'static [&'static str; 4] {
        match self {
            Position::Goalkeeper => &GOALKEEPER_SKILLS,
            Position::Defender => &DEFENDER_SKILLS,
            Position::Midfielder => &MIDFIELDER_SKILLS,
            Position::Forward => &FORWARD_SKILLS,
        }
    }

    /// What a training session for this position works on.
    pub fn training_focus(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "practises shot-stopping and one-on-one saves",
            Position::Defender => "works on tackling and defensive shape",
            Position::Midfielder => "sharpens passing and ball control",
            Position::Forward => "drills finishing and goal-scoring chances",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Position {
    type Err = MatchError;

    /// Accepts full labels and the usual short codes, case-insensitively.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "goalkeeper" | "gk" => Ok(Position::Goalkeeper),
            "defender" | "df" => Ok(Position::Defender),
            "midfielder" | "mf" => Ok(Position::Midfielder),
            "forward" | "fw" => Ok(Position::Forward),
            _ => Err(MatchError::InvalidPosition(tag.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_position_has_four_distinct_skills() {
        for position in Position::iter() {
            let skills = position.skills();
            let mut unique: Vec<_> = skills.to_vec();
            unique.sort_unstable();
            unique.dedup();
            assert_eq!(unique.len(), 4, "{position} has duplicate skills");
        }
    }

    #[test]
    fn test_parse_round_trips_label() {
        for position in Position::iter() {
            assert_eq!(position.label().parse::<Position>().unwrap(), position);
        }
        assert_eq!("GK".parse::<Position>().unwrap(), Position::Goalkeeper);
        assert_eq!(" Forward ".parse::<Position>().unwrap(), Position::Forward);
    }

    #[test]
    fn test_parse_rejects_unknown_tag() {
        let err = "libero".parse::<Position>().unwrap_err();
        assert_eq!(err, MatchError::InvalidPosition("libero".to_string()));
    }
}

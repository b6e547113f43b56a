use tracing::debug;

use super::types::Player;
use crate::error::Result;
use crate::models::Position;

type RosterEntry = (&'static str, u8, Position);

const SPARTAK_SQUAD: [RosterEntry; 3] = [
    ("Aleksandr Selikhov", 1, Position::Goalkeeper),
    ("Georgi Dzhikiya", 14, Position::Defender),
    ("Quincy Promes", 10, Position::Forward),
];

const ZENIT_SQUAD: [RosterEntry; 3] = [
    ("Mikhail Kerzhakov", 41, Position::Goalkeeper),
    ("Yaroslav Rakitskiy", 44, Position::Defender),
    ("Malcom", 10, Position::Forward),
];

const NATIONAL_SQUAD: [RosterEntry; 6] = [
    ("Igor Akinfeev", 1, Position::Goalkeeper),
    ("Mario Fernandes", 2, Position::Defender),
    ("Georgi Dzhikiya", 14, Position::Defender),
    ("Denis Cheryshev", 6, Position::Midfielder),
    ("Aleksandr Golovin", 17, Position::Midfielder),
    ("Artem Dzyuba", 22, Position::Forward),
];

/// Builds fresh, independent players. Holds no state.
pub struct PlayerFactory;

impl PlayerFactory {
    /// Create a player from a position tag such as `"forward"` or `"GK"`.
    pub fn create_player(position: &str, name: impl Into<String>, number: u8) -> Result<Player> {
        let position = position.parse::<Position>()?;
        Ok(Self::create(position, name, number))
    }

    pub fn create(position: Position, name: impl Into<String>, number: u8) -> Player {
        Player::new(position, name, number)
    }

    /// Recognised club names return their fixed roster; anything else returns
    /// an empty squad.
    pub fn create_team_squad(team_name: &str) -> Vec<Player> {
        let roster: &[RosterEntry] = match team_name {
            "Spartak" => &SPARTAK_SQUAD,
            "Zenit" => &ZENIT_SQUAD,
            _ => {
                debug!(team = team_name, "no roster for team");
                &[]
            }
        };
        Self::build_roster(roster)
    }

    /// Six players spanning all four positions.
    pub fn create_national_squad() -> Vec<Player> {
        Self::build_roster(&NATIONAL_SQUAD)
    }

    pub fn known_teams() -> &'static [&'static str] {
        &["Spartak", "Zenit"]
    }

    fn build_roster(roster: &[RosterEntry]) -> Vec<Player> {
        roster
            .iter()
            .map(|&(name, number, position)| Self::create(position, name, number))
            .collect()
    }
}

use std::fmt;
use std::io::Write;

use tracing::info;

use super::MatchObserver;
use crate::error::ObserverError;
use crate::models::{EventPayload, MatchEventKind};

/// Turns each event into commentary lines. Keeps no record of past events.
///
/// Lines go to the writer given at construction, or to the
/// `matchday::commentary` log target when there is none.
pub struct Commentator {
    name: String,
    writer: Option<Box<dyn Write>>,
}

impl Commentator {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), writer: None }
    }

    pub fn with_writer(name: impl Into<String>, writer: impl Write + 'static) -> Self {
        Self { name: name.into(), writer: Some(Box::new(writer)) }
    }

    /// Commentary for one event. A goal with an assist yields a second line.
    pub fn commentary(&self, payload: &EventPayload) -> Vec<String> {
        let name = &self.name;
        match payload {
            EventPayload::MatchStart(start) => vec![format!(
                "{name}: Kick-off! {} take on {} at {}",
                start.home_team, start.away_team, start.stadium
            )],
            EventPayload::Goal(goal) => {
                let mut lines = vec![format!(
                    "{name}: GOAL! {} scores in minute {}! It's {} after that one for {}",
                    goal.scorer, goal.minute, goal.score, goal.team_name
                )];
                if let Some(assist) = &goal.assist {
                    lines.push(format!("{name}: The assist comes from {assist}!"));
                }
                lines
            }
            EventPayload::YellowCard(card) => vec![format!(
                "{name}: Yellow card! {} is booked in minute {}. Reason: {}",
                card.player, card.minute, card.reason
            )],
            EventPayload::RedCard(card) => vec![format!(
                "{name}: Red card! {} is sent off in minute {}. Reason: {}",
                card.player, card.minute, card.reason
            )],
            EventPayload::Substitution(sub) => vec![format!(
                "{name}: Substitution! {} makes way for {} in minute {}",
                sub.player_out, sub.player_in, sub.minute
            )],
            EventPayload::MatchEnd(end) => vec![format!(
                "{name}: Full time! Final score {}. Winner: {}!",
                end.final_score, end.winner
            )],
        }
    }
}

impl MatchObserver for Commentator {
    fn update(&mut self, kind: MatchEventKind, payload: &EventPayload) -> Result<(), ObserverError> {
        if payload.kind() != kind {
            return Err(ObserverError::Rejected(format!(
                "{kind} event carried a {} payload",
                payload.kind()
            )));
        }

        for line in self.commentary(payload) {
            match self.writer.as_mut() {
                Some(writer) => writeln!(writer, "{line}")?,
                None => info!(target: "matchday::commentary", "{line}"),
            }
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Commentator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Commentator")
            .field("name", &self.name)
            .field("has_writer", &self.writer.is_some())
            .finish()
    }
}

//! Player capability surface and the undecorated base player.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Position;

/// Who a player is. Shared unchanged by every decoration layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PlayerIdentity {
    pub name: String,
    pub number: u8,
}

/// Capability surface shared by base players and every decorator.
///
/// Decorators hold the value they wrap through [`Footballer::inner`]; the
/// optional capability lookups (`as_*`) walk that chain until a layer
/// answers, so extra attributes stay reachable however deep they are wrapped.
pub trait Footballer: fmt::Debug {
    fn identity(&self) -> &PlayerIdentity;

    fn position(&self) -> Position;

    /// Base skills first, then each layer's additions from innermost to outermost.
    fn skills(&self) -> Vec<String>;

    fn train(&self) -> String;

    fn play(&self) -> String;

    /// Human-readable one-line description.
    fn describe(&self) -> String;

    fn name(&self) -> &str {
        &self.identity().name
    }

    fn number(&self) -> u8 {
        self.identity().number
    }

    /// The value this layer wraps, `None` for a base player.
    fn inner(&self) -> Option<&(dyn Footballer + 'static)> {
        None
    }

    fn inner_mut(&mut self) -> Option<&mut (dyn Footballer + 'static)> {
        None
    }

    fn as_motivatable(&self) -> Option<&dyn Motivatable> {
        self.inner()?.as_motivatable()
    }

    fn as_recoverable(&self) -> Option<&dyn Recoverable> {
        self.inner()?.as_recoverable()
    }

    fn as_recoverable_mut(&mut self) -> Option<&mut dyn Recoverable> {
        self.inner_mut()?.as_recoverable_mut()
    }

    fn as_developable(&self) -> Option<&dyn Developable> {
        self.inner()?.as_developable()
    }

    /// Number of layers including the base player.
    fn depth(&self) -> usize {
        1 + self.inner().map_or(0, |inner| inner.depth())
    }
}

/// Leadership actions, only offered by captains.
pub trait Motivatable {
    fn is_captain(&self) -> bool {
        true
    }

    /// Informational multiplier; nothing applies it.
    fn leadership_bonus(&self) -> f64;

    fn captain_since(&self) -> Option<&str>;

    fn motivate_team(&self) -> String;

    fn address_referee(&self) -> String;
}

/// Injury bookkeeping, only offered by injured players.
pub trait Recoverable {
    fn injury_type(&self) -> &str;

    fn recovery_days(&self) -> u32;

    fn can_play(&self) -> bool;

    /// Informational multiplier; nothing applies it.
    fn performance_penalty(&self) -> f64;

    /// Advances recovery by one day.
    fn recover(&mut self) -> RecoveryStatus;
}

/// Development attributes, only offered by young talents.
pub trait Developable {
    fn potential(&self) -> f64;

    fn age(&self) -> u8;

    fn is_promising(&self) -> bool;

    fn learning_rate(&self) -> f64;

    /// Does not change `potential`.
    fn develop(&self) -> String;
}

/// Outcome of a single [`Recoverable::recover`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryStatus {
    Recovering { days_left: u32 },
    /// Returned once, on the call that clears the injury.
    Recovered,
    AlreadyFit,
}

impl RecoveryStatus {
    pub fn is_recovered(&self) -> bool {
        matches!(self, RecoveryStatus::Recovered)
    }
}

/// Undecorated player. Position and base skills never change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Player {
    identity: PlayerIdentity,
    position: Position,
}

impl Player {
    pub fn new(position: Position, name: impl Into<String>, number: u8) -> Self {
        Self { identity: PlayerIdentity { name: name.into(), number }, position }
    }

    pub fn goalkeeper(name: impl Into<String>, number: u8) -> Self {
        Self::new(Position::Goalkeeper, name, number)
    }

    pub fn defender(name: impl Into<String>, number: u8) -> Self {
        Self::new(Position::Defender, name, number)
    }

    pub fn midfielder(name: impl Into<String>, number: u8) -> Self {
        Self::new(Position::Midfielder, name, number)
    }

    pub fn forward(name: impl Into<String>, number: u8) -> Self {
        Self::new(Position::Forward, name, number)
    }
}

impl Footballer for Player {
    fn identity(&self) -> &PlayerIdentity {
        &self.identity
    }

    fn position(&self) -> Position {
        self.position
    }

    fn skills(&self) -> Vec<String> {
        self.position.skills().iter().map(|skill| (*skill).to_string()).collect()
    }

    fn train(&self) -> String {
        format!("{} {}", self.identity.name, self.position.training_focus())
    }

    fn play(&self) -> String {
        format!("{} (#{}) plays as {}", self.identity.name, self.identity.number, self.position)
    }

    fn describe(&self) -> String {
        format!("{} (#{}) - {}", self.identity.name, self.identity.number, self.position)
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

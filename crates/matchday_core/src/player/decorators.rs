//! Decorators layering extra behaviour over a [`Footballer`].
//!
//! Each decorator owns exactly one wrapped value, so a chain is always a
//! simple list ending in a base [`Player`](super::Player) and can never
//! wrap itself.

use tracing::debug;

use super::types::{
    Developable, Footballer, Motivatable, PlayerIdentity, Recoverable, RecoveryStatus,
};
use crate::error::{MatchError, Result};
use crate::models::Position;

pub const LEADERSHIP_BONUS: f64 = 1.15;
pub const PERFORMANCE_PENALTY: f64 = 0.6;
pub const LEARNING_RATE: f64 = 1.3;
/// Potential above which a talent counts as promising.
pub const PROMISING_THRESHOLD: f64 = 0.7;
/// Potential above which a talent gets the extra "future star" tag.
pub const STAR_THRESHOLD: f64 = 0.8;

const CAPTAIN_SKILLS: [&str; 3] = ["leadership", "motivation", "responsibility"];
const TALENT_SKILLS: [&str; 3] = ["potential", "learnability", "energy"];
const STAR_SKILL: &str = "future star";

fn extend_skills(mut skills: Vec<String>, extra: &[&str]) -> Vec<String> {
    skills.extend(extra.iter().map(|skill| (*skill).to_string()));
    skills
}

// ---------------------------------------------------------------------------
// Captain
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Captain {
    inner: Box<dyn Footballer>,
    captain_since: Option<String>,
}

impl Captain {
    pub fn new(player: impl Footballer + 'static) -> Self {
        Self::wrap(Box::new(player))
    }

    pub fn wrap(player: Box<dyn Footballer>) -> Self {
        debug!(player = player.name(), "captain armband assigned");
        Self { inner: player, captain_since: None }
    }

    pub fn with_captain_since(mut self, since: impl Into<String>) -> Self {
        self.captain_since = Some(since.into());
        self
    }
}

impl Footballer for Captain {
    fn identity(&self) -> &PlayerIdentity {
        self.inner.identity()
    }

    fn position(&self) -> Position {
        self.inner.position()
    }

    fn skills(&self) -> Vec<String> {
        extend_skills(self.inner.skills(), &CAPTAIN_SKILLS)
    }

    fn train(&self) -> String {
        self.inner.train()
    }

    fn play(&self) -> String {
        self.inner.play()
    }

    fn describe(&self) -> String {
        format!("{} (Captain)", self.inner.describe())
    }

    fn inner(&self) -> Option<&(dyn Footballer + 'static)> {
        Some(self.inner.as_ref())
    }

    fn inner_mut(&mut self) -> Option<&mut (dyn Footballer + 'static)> {
        Some(self.inner.as_mut())
    }

    fn as_motivatable(&self) -> Option<&dyn Motivatable> {
        Some(self)
    }
}

impl Motivatable for Captain {
    fn leadership_bonus(&self) -> f64 {
        LEADERSHIP_BONUS
    }

    fn captain_since(&self) -> Option<&str> {
        self.captain_since.as_deref()
    }

    fn motivate_team(&self) -> String {
        format!("{} rallies the team before kick-off!", self.name())
    }

    fn address_referee(&self) -> String {
        format!("{} speaks to the referee on behalf of the team", self.name())
    }
}

// ---------------------------------------------------------------------------
// Injured
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct Injured {
    inner: Box<dyn Footballer>,
    injury_type: String,
    recovery_days: u32,
    can_play: bool,
}

impl Injured {
    pub fn new(
        player: impl Footballer + 'static,
        injury_type: impl Into<String>,
        recovery_days: u32,
    ) -> Result<Self> {
        Self::wrap(Box::new(player), injury_type, recovery_days)
    }

    /// A player starts unable to play even with zero recovery days left.
    pub fn wrap(
        player: Box<dyn Footballer>,
        injury_type: impl Into<String>,
        recovery_days: u32,
    ) -> Result<Self> {
        let injury_type = injury_type.into();
        if injury_type.trim().is_empty() {
            return Err(MatchError::invalid_parameter("injury_type", "must not be blank"));
        }

        debug!(player = player.name(), injury = %injury_type, recovery_days, "player injured");
        Ok(Self { inner: player, injury_type, recovery_days, can_play: false })
    }
}

impl Footballer for Injured {
    fn identity(&self) -> &PlayerIdentity {
        self.inner.identity()
    }

    fn position(&self) -> Position {
        self.inner.position()
    }

    fn skills(&self) -> Vec<String> {
        let mut skills = self.inner.skills();
        skills.push(format!("injury: {}", self.injury_type));
        skills
    }

    fn train(&self) -> String {
        format!("{} is in rehabilitation after injury ({})", self.name(), self.injury_type)
    }

    fn play(&self) -> String {
        if !self.can_play {
            return format!("{} cannot play due to injury ({})", self.name(), self.injury_type);
        }
        self.inner.play()
    }

    fn describe(&self) -> String {
        format!("{} - Injured ({})", self.inner.describe(), self.injury_type)
    }

    fn inner(&self) -> Option<&(dyn Footballer + 'static)> {
        Some(self.inner.as_ref())
    }

    fn inner_mut(&mut self) -> Option<&mut (dyn Footballer + 'static)> {
        Some(self.inner.as_mut())
    }

    fn as_recoverable(&self) -> Option<&dyn Recoverable> {
        Some(self)
    }

    fn as_recoverable_mut(&mut self) -> Option<&mut dyn Recoverable> {
        Some(self)
    }
}

impl Recoverable for Injured {
    fn injury_type(&self) -> &str {
        &self.injury_type
    }

    fn recovery_days(&self) -> u32 {
        self.recovery_days
    }

    fn can_play(&self) -> bool {
        self.can_play
    }

    fn performance_penalty(&self) -> f64 {
        PERFORMANCE_PENALTY
    }

    fn recover(&mut self) -> RecoveryStatus {
        if self.can_play {
            return RecoveryStatus::AlreadyFit;
        }

        self.recovery_days = self.recovery_days.saturating_sub(1);
        if self.recovery_days == 0 {
            self.can_play = true;
            debug!(player = self.name(), injury = %self.injury_type, "fully recovered");
            return RecoveryStatus::Recovered;
        }

        RecoveryStatus::Recovering { days_left: self.recovery_days }
    }
}

// ---------------------------------------------------------------------------
// YoungTalent
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct YoungTalent {
    inner: Box<dyn Footballer>,
    potential: f64,
    age: u8,
    is_promising: bool,
}

impl YoungTalent {
    pub fn new(player: impl Footballer + 'static, potential: f64, age: u8) -> Result<Self> {
        Self::wrap(Box::new(player), potential, age)
    }

    pub fn wrap(player: Box<dyn Footballer>, potential: f64, age: u8) -> Result<Self> {
        if !potential.is_finite() || !(0.0..=1.0).contains(&potential) {
            return Err(MatchError::invalid_parameter(
                "potential",
                format!("{potential} is outside [0, 1]"),
            ));
        }

        Ok(Self { inner: player, potential, age, is_promising: potential > PROMISING_THRESHOLD })
    }
}

impl Footballer for YoungTalent {
    fn identity(&self) -> &PlayerIdentity {
        self.inner.identity()
    }

    fn position(&self) -> Position {
        self.inner.position()
    }

    fn skills(&self) -> Vec<String> {
        let mut skills = extend_skills(self.inner.skills(), &TALENT_SKILLS);
        if self.potential > STAR_THRESHOLD {
            skills.push(STAR_SKILL.to_string());
        }
        skills
    }

    fn train(&self) -> String {
        format!("{} and shows excellent results thanks to raw talent!", self.inner.train())
    }

    fn play(&self) -> String {
        self.inner.play()
    }

    fn describe(&self) -> String {
        let level = if self.is_promising { "high" } else { "average" };
        format!("{} - Young talent ({level} potential)", self.inner.describe())
    }

    fn inner(&self) -> Option<&(dyn Footballer + 'static)> {
        Some(self.inner.as_ref())
    }

    fn inner_mut(&mut self) -> Option<&mut (dyn Footballer + 'static)> {
        Some(self.inner.as_mut())
    }

    fn as_developable(&self) -> Option<&dyn Developable> {
        Some(self)
    }
}

impl Developable for YoungTalent {
    fn potential(&self) -> f64 {
        self.potential
    }

    fn age(&self) -> u8 {
        self.age
    }

    fn is_promising(&self) -> bool {
        self.is_promising
    }

    fn learning_rate(&self) -> f64 {
        LEARNING_RATE
    }

    fn develop(&self) -> String {
        format!("{} is developing! Potential keeps growing", self.name())
    }
}

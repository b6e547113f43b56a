use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use super::config::{MatchConfig, TransitionPolicy};
use crate::error::{MatchError, Result};
use crate::models::{
    CardRecord, EventPayload, GoalRecord, LoggedEvent, MatchEndRecord, MatchInfo,
    MatchStartRecord, Score, SubstitutionRecord, TeamSide, Winner,
};
use crate::observers::{DeliveryReport, MatchObserver, ObserverHandle, ObserverRegistry};

/// `NotStarted -> InProgress -> Finished`. Ordered so status can only advance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    NotStarted,
    InProgress,
    Finished,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStatus::NotStarted => f.write_str("not started"),
            MatchStatus::InProgress => f.write_str("in progress"),
            MatchStatus::Finished => f.write_str("finished"),
        }
    }
}

/// A single simulated match.
///
/// Every mutator updates state, appends to the event log, then broadcasts
/// the new entry once to all attached observers, in attachment order.
/// Observers never receive a handle to the match, so they cannot mutate it
/// while a broadcast is in flight.
#[derive(Debug)]
pub struct FootballMatch {
    home_team: String,
    away_team: String,
    stadium: String,
    score: Score,
    minute: u8,
    status: MatchStatus,
    events_log: Vec<LoggedEvent>,
    observers: ObserverRegistry,
    config: MatchConfig,
}

impl FootballMatch {
    pub fn new(home_team: impl Into<String>, away_team: impl Into<String>, stadium: Option<&str>) -> Self {
        Self::with_config(home_team, away_team, stadium, MatchConfig::default())
    }

    pub fn with_config(
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        stadium: Option<&str>,
        config: MatchConfig,
    ) -> Self {
        let home_team = home_team.into();
        let stadium = match stadium.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("{home_team} {}", config.stadium_suffix),
        };

        Self {
            home_team,
            away_team: away_team.into(),
            stadium,
            score: Score::default(),
            minute: 0,
            status: MatchStatus::NotStarted,
            events_log: Vec::new(),
            observers: ObserverRegistry::new(),
            config,
        }
    }

    // ========== Accessors ==========

    pub fn home_team(&self) -> &str {
        &self.home_team
    }

    pub fn away_team(&self) -> &str {
        &self.away_team
    }

    pub fn stadium(&self) -> &str {
        &self.stadium
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Chronological, append-only record of every mutation.
    pub fn event_log(&self) -> &[LoggedEvent] {
        &self.events_log
    }

    pub fn team_name(&self, side: TeamSide) -> &str {
        match side {
            TeamSide::Home => &self.home_team,
            TeamSide::Away => &self.away_team,
        }
    }

    // ========== Observers ==========

    pub fn attach(&mut self, observer: ObserverHandle) -> bool {
        self.observers.attach(observer)
    }

    pub fn detach<O: MatchObserver + ?Sized>(&mut self, observer: &Rc<RefCell<O>>) -> bool {
        self.observers.detach(observer)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // ========== State machine ==========

    pub fn start_match(&mut self) -> Result<DeliveryReport> {
        self.guard("start the match", MatchStatus::NotStarted)?;

        self.minute = 0;
        self.advance(MatchStatus::InProgress);
        debug!(home = %self.home_team, away = %self.away_team, stadium = %self.stadium, "match started");

        let payload = EventPayload::MatchStart(MatchStartRecord {
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            stadium: self.stadium.clone(),
        });
        Ok(self.record(payload))
    }

    pub fn goal(
        &mut self,
        team: TeamSide,
        scorer: &str,
        minute: u8,
        assist: Option<&str>,
    ) -> Result<DeliveryReport> {
        self.guard("record a goal", MatchStatus::InProgress)?;

        self.score.increment(team);
        self.minute = minute;
        debug!(%team, scorer, minute, score = %self.score, "goal");

        let payload = EventPayload::Goal(GoalRecord {
            team,
            team_name: self.team_name(team).to_string(),
            scorer: scorer.to_string(),
            assist: assist.map(str::to_string),
            minute,
            score: self.score,
        });
        Ok(self.record(payload))
    }

    pub fn yellow_card(
        &mut self,
        player: &str,
        minute: u8,
        reason: Option<&str>,
    ) -> Result<DeliveryReport> {
        self.guard("show a yellow card", MatchStatus::InProgress)?;

        self.minute = minute;
        let reason = reason.unwrap_or(&self.config.default_card_reason).to_string();
        debug!(player, minute, reason = %reason, "yellow card");

        let payload =
            EventPayload::YellowCard(CardRecord { player: player.to_string(), minute, reason });
        Ok(self.record(payload))
    }

    pub fn substitution(
        &mut self,
        player_out: &str,
        player_in: &str,
        minute: u8,
    ) -> Result<DeliveryReport> {
        self.guard("make a substitution", MatchStatus::InProgress)?;

        self.minute = minute;
        debug!(player_out, player_in, minute, "substitution");

        let payload = EventPayload::Substitution(SubstitutionRecord {
            player_out: player_out.to_string(),
            player_in: player_in.to_string(),
            minute,
        });
        Ok(self.record(payload))
    }

    pub fn finish_match(&mut self) -> Result<DeliveryReport> {
        self.guard("finish the match", MatchStatus::InProgress)?;

        self.advance(MatchStatus::Finished);
        self.minute = self.config.full_time_minute;
        let winner = self.winner();
        debug!(score = %self.score, %winner, "match finished");

        let payload = EventPayload::MatchEnd(MatchEndRecord {
            final_score: self.score,
            winner,
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
        });
        Ok(self.record(payload))
    }

    /// Depends only on the current score; callable in any state.
    pub fn winner(&self) -> Winner {
        use std::cmp::Ordering;

        match self.score.home.cmp(&self.score.away) {
            Ordering::Greater => Winner::Team(self.home_team.clone()),
            Ordering::Less => Winner::Team(self.away_team.clone()),
            Ordering::Equal => Winner::Draw,
        }
    }

    pub fn match_info(&self) -> MatchInfo {
        let is_finished = self.is_finished();
        MatchInfo {
            home_team: self.home_team.clone(),
            away_team: self.away_team.clone(),
            score: self.score,
            minute: self.minute,
            is_finished,
            winner: is_finished.then(|| self.winner()),
            total_events: self.events_log.len(),
        }
    }

    // ========== Internals ==========

    fn guard(&self, operation: &'static str, required: MatchStatus) -> Result<()> {
        if self.status == required {
            return Ok(());
        }

        match self.config.transition_policy {
            TransitionPolicy::Strict => {
                Err(MatchError::InvalidTransition { operation, status: self.status })
            }
            TransitionPolicy::Permissive => {
                warn!(operation, status = %self.status, "applying out-of-state operation");
                Ok(())
            }
        }
    }

    fn advance(&mut self, to: MatchStatus) {
        if to > self.status {
            self.status = to;
        }
    }

    fn record(&mut self, payload: EventPayload) -> DeliveryReport {
        self.events_log.push(LoggedEvent::new(payload));
        match self.events_log.last() {
            Some(entry) => self.observers.notify(entry.kind, &entry.payload),
            None => DeliveryReport::default(),
        }
    }
}

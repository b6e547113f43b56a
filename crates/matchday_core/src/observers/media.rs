use tracing::info;

use super::MatchObserver;
use crate::error::ObserverError;
use crate::models::{EventPayload, MatchEventKind};

/// Publishes breaking news for goals and the final whistle only.
#[derive(Debug, Clone)]
pub struct MediaReporter {
    outlet: String,
    breaking_news: Vec<String>,
}

impl MediaReporter {
    pub fn new(outlet: impl Into<String>) -> Self {
        Self { outlet: outlet.into(), breaking_news: Vec::new() }
    }

    pub fn outlet(&self) -> &str {
        &self.outlet
    }

    pub fn breaking_news(&self) -> &[String] {
        &self.breaking_news
    }

    fn headline(payload: &EventPayload) -> Option<String> {
        match payload {
            EventPayload::Goal(goal) => {
                Some(format!("SENSATION! {} scores in minute {}!", goal.scorer, goal.minute))
            }
            EventPayload::MatchEnd(end) => Some(format!(
                "Full time! {} {} {}. Winner: {}",
                end.home_team, end.final_score, end.away_team, end.winner
            )),
            _ => None,
        }
    }
}

impl MatchObserver for MediaReporter {
    fn update(&mut self, _kind: MatchEventKind, payload: &EventPayload) -> Result<(), ObserverError> {
        if let Some(news) = Self::headline(payload) {
            info!(target: "matchday::media", outlet = %self.outlet, "{news}");
            self.breaking_news.push(news);
        }
        Ok(())
    }

    fn name(&self) -> &str {
        &self.outlet
    }
}

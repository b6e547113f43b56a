use super::MatchObserver;
use crate::error::ObserverError;
use crate::models::{EventPayload, MatchEventKind};

/// Keeps every delivered `(kind, payload)` pair in delivery order.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    label: String,
    received: Vec<(MatchEventKind, EventPayload)>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::named("recorder")
    }

    pub fn named(label: impl Into<String>) -> Self {
        Self { label: label.into(), received: Vec::new() }
    }

    pub fn received(&self) -> &[(MatchEventKind, EventPayload)] {
        &self.received
    }

    pub fn kinds(&self) -> Vec<MatchEventKind> {
        self.received.iter().map(|(kind, _)| *kind).collect()
    }

    pub fn len(&self) -> usize {
        self.received.len()
    }

    pub fn is_empty(&self) -> bool {
        self.received.is_empty()
    }
}

impl MatchObserver for RecordingObserver {
    fn update(&mut self, kind: MatchEventKind, payload: &EventPayload) -> Result<(), ObserverError> {
        self.received.push((kind, payload.clone()));
        Ok(())
    }

    fn name(&self) -> &str {
        &self.label
    }
}

//! Match observers and the registry that delivers events to them.
//!
//! Observers are shared, single-threaded handles (`Rc<RefCell<_>>`): the
//! match keeps one clone in its registry while the caller keeps another to
//! read results afterwards.

pub mod commentator;
pub mod media;
pub mod recording;
pub mod registry;
pub mod statistics;

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::ObserverError;
use crate::models::{EventPayload, MatchEventKind};

pub use commentator::Commentator;
pub use media::MediaReporter;
pub use recording::RecordingObserver;
pub use registry::{DeliveryFailure, DeliveryReport, ObserverRegistry};
pub use statistics::StatisticsTracker;

/// A subscriber to match events.
///
/// Observers only read the payload; they never get access to the match.
pub trait MatchObserver {
    fn update(&mut self, kind: MatchEventKind, payload: &EventPayload)
        -> Result<(), ObserverError>;

    /// Label used in logs and delivery reports.
    fn name(&self) -> &str {
        "observer"
    }
}

pub type ObserverHandle = Rc<RefCell<dyn MatchObserver>>;

/// Wrap an observer into a shareable handle, keeping its concrete type.
pub fn shared<O: MatchObserver>(observer: O) -> Rc<RefCell<O>> {
    Rc::new(RefCell::new(observer))
}

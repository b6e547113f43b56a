use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, warn};

use super::{MatchObserver, ObserverHandle};
use crate::error::ObserverError;
use crate::models::{EventPayload, MatchEventKind};

/// Ordered, duplicate-free set of observers.
#[derive(Default)]
pub struct ObserverRegistry {
    observers: Vec<ObserverHandle>,
}

#[derive(Debug)]
pub struct DeliveryFailure {
    /// Position of the observer in the delivery snapshot.
    pub index: usize,
    pub observer: String,
    pub error: ObserverError,
}

/// What happened during one broadcast.
#[derive(Debug, Default)]
pub struct DeliveryReport {
    pub delivered: usize,
    pub failures: Vec<DeliveryFailure>,
}

impl DeliveryReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.delivered + self.failures.len()
    }
}

fn address<O: MatchObserver + ?Sized>(observer: &Rc<RefCell<O>>) -> *const () {
    Rc::as_ptr(observer) as *const ()
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` (and changes nothing) if the observer is already attached.
    pub fn attach(&mut self, observer: ObserverHandle) -> bool {
        if self.contains(&observer) {
            debug!("observer already attached");
            return false;
        }
        self.observers.push(observer);
        debug!(observers = self.observers.len(), "observer attached");
        true
    }

    /// Returns `false` (and changes nothing) if the observer was not attached.
    pub fn detach<O: MatchObserver + ?Sized>(&mut self, observer: &Rc<RefCell<O>>) -> bool {
        let target = address(observer);
        let before = self.observers.len();
        self.observers.retain(|attached| address(attached) != target);

        let removed = self.observers.len() != before;
        if removed {
            debug!(observers = self.observers.len(), "observer detached");
        }
        removed
    }

    pub fn contains<O: MatchObserver + ?Sized>(&self, observer: &Rc<RefCell<O>>) -> bool {
        let target = address(observer);
        self.observers.iter().any(|attached| address(attached) == target)
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Deliver one event to every attached observer in attachment order.
    ///
    /// Iterates over a snapshot taken on entry. A failing or already-borrowed
    /// observer is logged and skipped; later observers still get the event.
    pub fn notify(&self, kind: MatchEventKind, payload: &EventPayload) -> DeliveryReport {
        let snapshot = self.observers.clone();
        let mut report = DeliveryReport::default();

        for (index, observer) in snapshot.iter().enumerate() {
            let outcome = match observer.try_borrow_mut() {
                Ok(mut guard) => {
                    let result = guard.update(kind, payload);
                    result.map_err(|error| DeliveryFailure {
                        index,
                        observer: guard.name().to_string(),
                        error,
                    })
                }
                Err(_) => Err(DeliveryFailure {
                    index,
                    observer: "unknown".to_string(),
                    error: ObserverError::Busy,
                }),
            };

            match outcome {
                Ok(()) => report.delivered += 1,
                Err(failure) => {
                    warn!(
                        observer = %failure.observer,
                        index = failure.index,
                        %kind,
                        error = %failure.error,
                        "observer failed to handle event"
                    );
                    report.failures.push(failure);
                }
            }
        }

        report
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self
            .observers
            .iter()
            .map(|observer| match observer.try_borrow() {
                Ok(observer) => observer.name().to_string(),
                Err(_) => "<busy>".to_string(),
            })
            .collect();
        f.debug_struct("ObserverRegistry").field("observers", &names).finish()
    }
}

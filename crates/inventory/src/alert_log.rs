//! Fixed-capacity, deduplicating log of pending low-stock alerts.

use serde::{Deserialize, Serialize};

use wms_core::{DomainError, DomainResult};

use crate::sku::Sku;

/// Slot count used when nothing else is configured.
pub const DEFAULT_ALERT_CAPACITY: usize = 3;

/// A pending low-stock notice bound to one SKU.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub sku: Sku,
    pub message: String,
}

impl Alert {
    /// The canonical alert for `sku`. Every raise for the same SKU produces
    /// the same message, which is what deduplication keys on.
    pub fn low_stock(sku: &Sku) -> Self {
        Self {
            sku: sku.clone(),
            message: format!("{sku} (low stock)"),
        }
    }
}

/// What happened to a raised alert.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RaiseOutcome {
    /// Stored in a previously free slot.
    Raised { slot: usize },
    /// An identical alert already occupies `slot`; nothing changed.
    Duplicate { slot: usize },
    /// Log full with no matching entry; the alert was discarded.
    Dropped,
}

impl RaiseOutcome {
    pub fn is_dropped(&self) -> bool {
        matches!(self, RaiseOutcome::Dropped)
    }
}

/// Bounded alert buffer.
///
/// - capacity never changes after construction
/// - at most one occupied slot per SKU
/// - slots are freed only by [`AlertLog::drain`]
#[derive(Debug, Clone)]
pub struct AlertLog {
    slots: Box<[Option<Alert>]>,
}

impl AlertLog {
    pub fn new(capacity: usize) -> DomainResult<Self> {
        if capacity == 0 {
            return Err(DomainError::validation("alert log capacity must be at least 1"));
        }
        Ok(Self {
            slots: vec![None; capacity].into_boxed_slice(),
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn raise(&mut self, sku: &Sku) -> RaiseOutcome {
        let alert = Alert::low_stock(sku);

        if let Some(slot) = self.slots.iter().position(|s| s.as_ref() == Some(&alert)) {
            return RaiseOutcome::Duplicate { slot };
        }

        match self.slots.iter().position(Option::is_none) {
            Some(slot) => {
                tracing::info!(sku = %sku, slot, "low-stock alert raised");
                self.slots[slot] = Some(alert);
                RaiseOutcome::Raised { slot }
            }
            None => {
                tracing::warn!(sku = %sku, capacity = self.capacity(), "alert log full; signal ignored");
                RaiseOutcome::Dropped
            }
        }
    }

    /// Report every occupied slot in index order and free it.
    pub fn drain(&mut self) -> Vec<(usize, Alert)> {
        let drained: Vec<_> = self
            .slots
            .iter_mut()
            .enumerate()
            .filter_map(|(i, slot)| slot.take().map(|alert| (i, alert)))
            .collect();
        if !drained.is_empty() {
            tracing::info!(acknowledged = drained.len(), "alerts acknowledged");
        }
        drained
    }

    /// Occupied slots in index order, without freeing them.
    pub fn pending(&self) -> Vec<(usize, &Alert)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|alert| (i, alert)))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

impl Default for AlertLog {
    fn default() -> Self {
        Self {
            slots: vec![None; DEFAULT_ALERT_CAPACITY].into_boxed_slice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sku(s: &str) -> Sku {
        Sku::new(s).unwrap()
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(matches!(AlertLog::new(0), Err(DomainError::Validation(_))));
    }

    #[test]
    fn raise_takes_lowest_free_slot() {
        let mut log = AlertLog::default();
        assert_eq!(log.raise(&sku("A1")), RaiseOutcome::Raised { slot: 0 });
        assert_eq!(log.raise(&sku("B3")), RaiseOutcome::Raised { slot: 1 });

        log.drain();
        assert_eq!(log.raise(&sku("C4")), RaiseOutcome::Raised { slot: 0 });
    }

    #[test]
    fn duplicate_raise_is_a_no_op() {
        let mut log = AlertLog::default();
        log.raise(&sku("A1"));
        assert_eq!(log.raise(&sku("A1")), RaiseOutcome::Duplicate { slot: 0 });

        let pending = log.pending();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].1.message, "A1 (low stock)");
    }

    #[test]
    fn full_log_drops_new_sku_but_still_dedups() {
        let mut log = AlertLog::default();
        for s in ["A1", "B3", "C4"] {
            assert!(!log.raise(&sku(s)).is_dropped());
        }
        assert!(log.is_full());

        assert_eq!(log.raise(&sku("D7")), RaiseOutcome::Dropped);
        assert_eq!(log.raise(&sku("B3")), RaiseOutcome::Duplicate { slot: 1 });

        let skus: Vec<_> = log.pending().into_iter().map(|(_, a)| a.sku.to_string()).collect();
        assert_eq!(skus, vec!["A1", "B3", "C4"]);
    }

    #[test]
    fn drain_reports_in_slot_order_and_frees_everything() {
        let mut log = AlertLog::new(4).unwrap();
        log.raise(&sku("A1"));
        log.raise(&sku("B3"));
        log.raise(&sku("C4"));
        log.drain();
        log.raise(&sku("C4"));
        log.raise(&sku("A1"));

        let drained = log.drain();
        let got: Vec<_> = drained.iter().map(|(i, a)| (*i, a.sku.as_str())).collect();
        assert_eq!(got, vec![(0, "C4"), (1, "A1")]);
        assert!(log.pending().is_empty());
        assert!(log.drain().is_empty());
    }
}

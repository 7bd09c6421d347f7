use crate::alert_log::{AlertLog, RaiseOutcome};
use crate::ledger::StockLedger;
use crate::sku::Sku;

/// Raises an alert when a SKU's on-hand count falls below `minimum`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ThresholdMonitor {
    minimum: usize,
}

impl ThresholdMonitor {
    pub fn new(minimum: usize) -> Self {
        Self { minimum }
    }

    pub fn minimum(&self) -> usize {
        self.minimum
    }

    /// `None` when the SKU is at or above the minimum.
    pub fn check(&self, ledger: &StockLedger, alerts: &mut AlertLog, sku: &Sku) -> Option<RaiseOutcome> {
        let count = ledger.count(sku);
        if count >= self.minimum {
            return None;
        }
        tracing::debug!(sku = %sku, count, minimum = self.minimum, "stock below minimum");
        Some(alerts.raise(sku))
    }
}

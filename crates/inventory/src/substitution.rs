//! Shortfall fallback: next size up in the same family, else backorder.

use serde::{Deserialize, Serialize};

use wms_core::Entity;

use crate::alert_log::{AlertLog, RaiseOutcome};
use crate::ledger::StockLedger;
use crate::sku::Sku;
use crate::unit::StockUnit;

/// Outcome of resolving a shortfall.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Resolution {
    Substituted { unit: StockUnit, substitute: Sku },
    /// No substitute available; an alert was raised for the requested SKU.
    Backordered { alert: RaiseOutcome },
}

/// Single-step substitution: only `size + 1` of the same family is tried.
#[derive(Debug, Default, Copy, Clone)]
pub struct SubstitutionResolver;

impl SubstitutionResolver {
    /// The SKU that would stand in for `sku`, if it has one.
    ///
    /// Non-standard SKUs have no substitute.
    pub fn candidate(&self, sku: &Sku) -> Option<Sku> {
        sku.standard().map(|s| Sku::from(s.next_size()))
    }

    /// Try to take one unit of the substitute. On failure the shortfall is a
    /// backorder and an alert is raised for the *requested* SKU.
    ///
    /// The substitute's own threshold is not checked here.
    pub fn resolve(&self, ledger: &mut StockLedger, alerts: &mut AlertLog, sku: &Sku) -> Resolution {
        if let Some(substitute) = self.candidate(sku) {
            if let Some(unit) = ledger.withdraw_oldest(&substitute) {
                tracing::info!(sku = %sku, substitute = %substitute, unit = %unit.id(), "shortfall covered by substitution");
                return Resolution::Substituted { unit, substitute };
            }
        }

        tracing::warn!(sku = %sku, "shortfall backordered");
        Resolution::Backordered {
            alert: alerts.raise(sku),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sku(s: &str) -> Sku {
        Sku::new(s).unwrap()
    }

    #[test]
    fn candidate_is_next_size_same_family() {
        let r = SubstitutionResolver;
        assert_eq!(r.candidate(&sku("C4")), Some(sku("C5")));
        assert_eq!(r.candidate(&sku("PALLET")), None);
    }

    #[test]
    fn substitutes_from_next_size() {
        let mut ledger = StockLedger::new();
        let mut alerts = AlertLog::default();
        let eight = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        ledger.track(sku("C4"));
        ledger.receive(sku("C5"), eight);

        match SubstitutionResolver.resolve(&mut ledger, &mut alerts, &sku("C4")) {
            Resolution::Substituted { unit, substitute } => {
                assert_eq!(substitute, sku("C5"));
                assert_eq!(unit.arrival_time, eight);
            }
            other => panic!("expected substitution, got {other:?}"),
        }
        assert_eq!(ledger.count(&sku("C5")), 0);
        assert!(alerts.pending().is_empty());
    }

    #[test]
    fn does_not_chain_past_next_size() {
        let mut ledger = StockLedger::new();
        let mut alerts = AlertLog::default();
        ledger.receive(sku("C6"), Utc::now());

        let res = SubstitutionResolver.resolve(&mut ledger, &mut alerts, &sku("C4"));
        assert_eq!(res, Resolution::Backordered { alert: RaiseOutcome::Raised { slot: 0 } });
        assert_eq!(ledger.count(&sku("C6")), 1);
        assert_eq!(alerts.pending()[0].1.sku, sku("C4"));
    }

    #[test]
    fn non_standard_sku_is_backordered() {
        let mut ledger = StockLedger::new();
        let mut alerts = AlertLog::default();

        let res = SubstitutionResolver.resolve(&mut ledger, &mut alerts, &sku("PALLET"));
        assert!(matches!(res, Resolution::Backordered { .. }));
        assert_eq!(alerts.pending()[0].1.sku, sku("PALLET"));
    }
}

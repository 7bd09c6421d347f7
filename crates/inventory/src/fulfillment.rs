//! Order fulfillment: size-descending processing, FIFO withdrawal, then
//! substitution or backorder for shortfalls.

use serde::{Deserialize, Serialize};

use wms_core::{DomainResult, Entity};

use crate::alert_log::{AlertLog, RaiseOutcome};
use crate::ledger::StockLedger;
use crate::order::Order;
use crate::sku::Sku;
use crate::substitution::{Resolution, SubstitutionResolver};
use crate::threshold::ThresholdMonitor;
use crate::unit::StockUnit;

/// Outcome for a single requested unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FulfillmentResult {
    Fulfilled {
        unit: StockUnit,
    },
    Substituted {
        unit: StockUnit,
        original_sku: Sku,
        substitute_sku: Sku,
    },
    Backordered {
        sku: Sku,
    },
}

impl FulfillmentResult {
    /// The SKU that was asked for.
    pub fn requested_sku(&self) -> &Sku {
        match self {
            FulfillmentResult::Fulfilled { unit } => &unit.sku,
            FulfillmentResult::Substituted { original_sku, .. } => original_sku,
            FulfillmentResult::Backordered { sku } => sku,
        }
    }

    /// The unit that leaves the warehouse, if any.
    pub fn unit(&self) -> Option<&StockUnit> {
        match self {
            FulfillmentResult::Fulfilled { unit } | FulfillmentResult::Substituted { unit, .. } => Some(unit),
            FulfillmentResult::Backordered { .. } => None,
        }
    }
}

/// Everything a fulfillment call produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentReport {
    /// One entry per request, in processing order.
    pub results: Vec<FulfillmentResult>,
    /// SKUs whose alert was discarded because the alert log was full.
    pub ignored_alerts: Vec<Sku>,
}

impl FulfillmentReport {
    pub fn backordered(&self) -> impl Iterator<Item = &Sku> {
        self.results.iter().filter_map(|r| match r {
            FulfillmentResult::Backordered { sku } => Some(sku),
            _ => None,
        })
    }
}

/// Runs one order against borrowed ledger and alert state.
///
/// Not synchronised: concurrent callers must serialise whole `fulfill` calls.
#[derive(Debug)]
pub struct OrderFulfillment<'a> {
    ledger: &'a mut StockLedger,
    alerts: &'a mut AlertLog,
    monitor: ThresholdMonitor,
    resolver: SubstitutionResolver,
}

impl<'a> OrderFulfillment<'a> {
    pub fn new(ledger: &'a mut StockLedger, alerts: &'a mut AlertLog, monitor: ThresholdMonitor) -> Self {
        Self {
            ledger,
            alerts,
            monitor,
            resolver: SubstitutionResolver,
        }
    }

    /// Fulfil `order`. A malformed entry fails the call before any stock moves.
    pub fn fulfill(&mut self, order: &Order) -> DomainResult<FulfillmentReport> {
        let skus = order.processing_order()?;
        let mut report = FulfillmentReport::default();

        for sku in skus {
            let result = self.fulfill_one(sku, &mut report.ignored_alerts);
            report.results.push(result);
        }

        tracing::info!(
            requested = order.len(),
            backordered = report.backordered().count(),
            ignored_alerts = report.ignored_alerts.len(),
            "order processed"
        );
        Ok(report)
    }

    fn fulfill_one(&mut self, sku: Sku, ignored: &mut Vec<Sku>) -> FulfillmentResult {
        if let Some(unit) = self.ledger.withdraw_oldest(&sku) {
            tracing::info!(sku = %sku, unit = %unit.id(), arrival = %unit.arrival_label(), "unit withdrawn");
            if let Some(RaiseOutcome::Dropped) = self.monitor.check(self.ledger, self.alerts, &sku) {
                ignored.push(sku);
            }
            return FulfillmentResult::Fulfilled { unit };
        }

        match self.resolver.resolve(self.ledger, self.alerts, &sku) {
            Resolution::Substituted { unit, substitute } => FulfillmentResult::Substituted {
                unit,
                original_sku: sku,
                substitute_sku: substitute,
            },
            Resolution::Backordered { alert } => {
                if alert.is_dropped() {
                    ignored.push(sku.clone());
                }
                FulfillmentResult::Backordered { sku }
            }
        }
    }
}

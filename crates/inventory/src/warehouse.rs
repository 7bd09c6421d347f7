//! Entry points used by the shell: receive, fulfil, acknowledge, inspect.

use chrono::{DateTime, Utc};

use wms_core::{Clock, DomainResult, SystemClock};

use crate::alert_log::{Alert, AlertLog};
use crate::config::WarehouseConfig;
use crate::fulfillment::{FulfillmentReport, OrderFulfillment};
use crate::ledger::{StockLedger, StockSnapshot};
use crate::order::Order;
use crate::sku::Sku;
use crate::threshold::ThresholdMonitor;
use crate::unit::StockUnit;

/// Owns the ledger and alert log for one process.
///
/// All state is in memory. Methods take `&mut self`, so sharing a warehouse
/// across threads needs an outer lock around each call.
#[derive(Debug)]
pub struct Warehouse<C: Clock = SystemClock> {
    ledger: StockLedger,
    alerts: AlertLog,
    monitor: ThresholdMonitor,
    clock: C,
}

impl Warehouse<SystemClock> {
    pub fn new(config: WarehouseConfig) -> DomainResult<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Warehouse<C> {
    pub fn with_clock(config: WarehouseConfig, clock: C) -> DomainResult<Self> {
        config.validate()?;
        Ok(Self {
            ledger: StockLedger::new(),
            alerts: AlertLog::new(config.alert_capacity)?,
            monitor: ThresholdMonitor::new(config.minimum_stock),
            clock,
        })
    }

    /// Receive one unit stamped with the current time.
    pub fn receive_stock(&mut self, sku: &str) -> DomainResult<StockUnit> {
        let sku = Sku::new(sku)?;
        let now = self.clock.now();
        Ok(self.ledger.receive(sku, now).clone())
    }

    /// Receive one unit per comma-separated entry. Blank entries reject the
    /// whole batch before anything is received.
    pub fn receive_stock_batch(&mut self, raw: &str) -> DomainResult<Vec<StockUnit>> {
        let skus = raw.split(',').map(Sku::new).collect::<DomainResult<Vec<_>>>()?;
        let now = self.clock.now();
        Ok(skus
            .into_iter()
            .map(|sku| self.ledger.receive(sku, now).clone())
            .collect())
    }

    /// Register a SKU line with no stock.
    pub fn track_sku(&mut self, sku: &str) -> DomainResult<()> {
        self.ledger.track(Sku::new(sku)?);
        Ok(())
    }

    /// Fulfil comma-separated order text.
    pub fn fulfill_order(&mut self, raw_order: &str) -> DomainResult<FulfillmentReport> {
        let order = Order::parse(raw_order);
        OrderFulfillment::new(&mut self.ledger, &mut self.alerts, self.monitor).fulfill(&order)
    }

    /// Read and clear every pending alert.
    pub fn acknowledge_alerts(&mut self) -> Vec<(usize, Alert)> {
        self.alerts.drain()
    }

    pub fn pending_alerts(&self) -> Vec<(usize, &Alert)> {
        self.alerts.pending()
    }

    pub fn inspect_stock(&self) -> StockSnapshot {
        self.ledger.snapshot()
    }

    pub fn ledger(&self) -> &StockLedger {
        &self.ledger
    }

    /// Receive a unit with an explicit arrival time (seeding, replays).
    pub fn receive_at(&mut self, sku: &str, arrival_time: DateTime<Utc>) -> DomainResult<StockUnit> {
        let sku = Sku::new(sku)?;
        Ok(self.ledger.receive(sku, arrival_time).clone())
    }
}

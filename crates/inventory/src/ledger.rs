//! Per-SKU FIFO stock lines.

use std::collections::{BTreeMap, VecDeque};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wms_core::Entity;

use crate::sku::Sku;
use crate::unit::StockUnit;

/// Read-only view of one SKU line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLine {
    pub sku: Sku,
    pub count: usize,
    /// Oldest first.
    pub arrivals: Vec<DateTime<Utc>>,
}

/// Read-only view of the whole ledger, lines in SKU order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockSnapshot {
    pub lines: Vec<StockLine>,
}

impl StockSnapshot {
    pub fn line(&self, sku: &Sku) -> Option<&StockLine> {
        self.lines.iter().find(|l| &l.sku == sku)
    }
}

/// Mapping from SKU to its units, oldest arrival at the front.
///
/// A SKU without a line is the same as a SKU with an empty line.
#[derive(Debug, Clone, Default)]
pub struct StockLedger {
    lines: BTreeMap<Sku, VecDeque<StockUnit>>,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a SKU line without stock so it shows up in snapshots.
    pub fn track(&mut self, sku: Sku) {
        self.lines.entry(sku).or_default();
    }

    /// Add one unit that arrived at `arrival_time`.
    ///
    /// The unit goes behind every unit that arrived at or before it, so the
    /// line stays sorted by arrival even if timestamps come in late.
    pub fn receive(&mut self, sku: Sku, arrival_time: DateTime<Utc>) -> &StockUnit {
        let line = self.lines.entry(sku.clone()).or_default();
        let at = line.partition_point(|u| u.arrival_time <= arrival_time);
        line.insert(at, StockUnit::new(sku, arrival_time));
        tracing::debug!(sku = %line[at].sku, unit = %line[at].id(), arrival = %arrival_time, count = line.len(), "stock received");
        &line[at]
    }

    /// Remove and return the oldest unit, or `None` when the line is empty.
    pub fn withdraw_oldest(&mut self, sku: &Sku) -> Option<StockUnit> {
        self.lines.get_mut(sku).and_then(VecDeque::pop_front)
    }

    pub fn count(&self, sku: &Sku) -> usize {
        self.lines.get(sku).map_or(0, VecDeque::len)
    }

    /// Units of `sku`, oldest first.
    pub fn units(&self, sku: &Sku) -> impl Iterator<Item = &StockUnit> {
        self.lines.get(sku).into_iter().flatten()
    }

    pub fn snapshot(&self) -> StockSnapshot {
        StockSnapshot {
            lines: self
                .lines
                .iter()
                .map(|(sku, units)| StockLine {
                    sku: sku.clone(),
                    count: units.len(),
                    arrivals: units.iter().map(|u| u.arrival_time).collect(),
                })
                .collect(),
        }
    }
}

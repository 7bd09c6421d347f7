use serde::{Deserialize, Serialize};

use wms_core::{DomainError, DomainResult};

use crate::alert_log::DEFAULT_ALERT_CAPACITY;

/// Minimum on-hand count before a low-stock alert, when not configured.
pub const DEFAULT_MINIMUM_STOCK: usize = 2;

/// Engine tuning fixed for the lifetime of a [`crate::Warehouse`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarehouseConfig {
    /// Alert when a SKU's count drops below this after a withdrawal.
    pub minimum_stock: usize,
    /// Number of alert slots.
    pub alert_capacity: usize,
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            minimum_stock: DEFAULT_MINIMUM_STOCK,
            alert_capacity: DEFAULT_ALERT_CAPACITY,
        }
    }
}

impl WarehouseConfig {
    pub fn with_minimum_stock(mut self, minimum_stock: usize) -> Self {
        self.minimum_stock = minimum_stock;
        self
    }

    pub fn with_alert_capacity(mut self, alert_capacity: usize) -> Self {
        self.alert_capacity = alert_capacity;
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.alert_capacity == 0 {
            return Err(DomainError::validation("alert_capacity must be at least 1"));
        }
        Ok(())
    }
}

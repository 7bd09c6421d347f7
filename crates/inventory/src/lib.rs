//! Warehouse stock-rotation and order-fulfillment engine.
//!
//! Pure, synchronous domain logic (no IO). Units leave each SKU line oldest
//! first, orders are processed largest size first, shortfalls fall back to
//! the next size up in the same family or are backordered, and low-stock
//! alerts collect in a small fixed-size log until acknowledged.

pub mod alert_log;
pub mod config;
pub mod fulfillment;
pub mod ledger;
pub mod order;
pub mod sku;
pub mod substitution;
pub mod threshold;
pub mod unit;
pub mod warehouse;

pub use alert_log::{Alert, AlertLog, RaiseOutcome, DEFAULT_ALERT_CAPACITY};
pub use config::{WarehouseConfig, DEFAULT_MINIMUM_STOCK};
pub use fulfillment::{FulfillmentReport, FulfillmentResult, OrderFulfillment};
pub use ledger::{StockLedger, StockLine, StockSnapshot};
pub use order::Order;
pub use sku::{Sku, SkuSize, StandardSku};
pub use substitution::{Resolution, SubstitutionResolver};
pub use threshold::ThresholdMonitor;
pub use unit::StockUnit;
pub use warehouse::Warehouse;

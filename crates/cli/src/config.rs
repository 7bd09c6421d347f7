//! Settings read from the environment.
//!
//! | variable          | default  |
//! |-------------------|----------|
//! | `WMS_MIN_STOCK`   | `2`      |
//! | `WMS_ALERT_SLOTS` | `3`      |
//! | `WMS_SEED_DEMO`   | `true`   |
//! | `WMS_LOG_FORMAT`  | `compact` |

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use wms_inventory::WarehouseConfig;
use wms_observability::LogFormat;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliConfig {
    pub warehouse: WarehouseConfig,
    pub seed_demo: bool,
    pub log_format: LogFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            warehouse: WarehouseConfig::default(),
            seed_demo: true,
            log_format: LogFormat::default(),
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            warehouse: WarehouseConfig {
                minimum_stock: read(&lookup, "WMS_MIN_STOCK", defaults.warehouse.minimum_stock),
                alert_capacity: read(&lookup, "WMS_ALERT_SLOTS", defaults.warehouse.alert_capacity),
            },
            seed_demo: lookup("WMS_SEED_DEMO").map_or(defaults.seed_demo, |v| parse_flag(&v, defaults.seed_demo)),
            log_format: read(&lookup, "WMS_LOG_FORMAT", defaults.log_format),
        }
    }
}

fn read<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "unparseable setting; using default");
            default
        }),
    }
}

fn parse_flag(raw: &str, default: bool) -> bool {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!(value = %raw, "unparseable flag; using default");
            default
        }
    }
}

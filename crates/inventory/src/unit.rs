use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use wms_core::{Entity, UnitId};

use crate::sku::Sku;

/// One physical unit on hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUnit {
    pub id: UnitId,
    pub sku: Sku,
    pub arrival_time: DateTime<Utc>,
}

impl StockUnit {
    pub fn new(sku: Sku, arrival_time: DateTime<Utc>) -> Self {
        Self {
            id: UnitId::new(),
            sku,
            arrival_time,
        }
    }

    /// Arrival time as shown to operators (`HH:MM:SS`).
    pub fn arrival_label(&self) -> String {
        self.arrival_time.format("%H:%M:%S").to_string()
    }
}

impl Entity for StockUnit {
    type Id = UnitId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

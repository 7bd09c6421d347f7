use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use wms_core::{DomainError, DomainResult};
use wms_inventory::Warehouse;

/// Demo stock: two A1, one B3, an empty C4 line and one C5.
const DEMO_STOCK: &[(&str, Option<(u32, u32)>)] = &[
    ("A1", Some((10, 0))),
    ("A1", Some((10, 5))),
    ("B3", Some((9, 30))),
    ("C4", None),
    ("C5", Some((8, 0))),
];

/// Load the demo stock, stamping arrivals on `day` (UTC).
pub fn seed_demo<C: wms_core::Clock>(warehouse: &mut Warehouse<C>, day: NaiveDate) -> DomainResult<()> {
    for (sku, arrival) in DEMO_STOCK {
        match arrival {
            None => warehouse.track_sku(sku)?,
            Some((h, m)) => {
                let time = NaiveTime::from_hms_opt(*h, *m, 0)
                    .ok_or_else(|| DomainError::invariant("demo arrival time out of range"))?;
                warehouse.receive_at(sku, Utc.from_utc_datetime(&day.and_time(time)))?;
            }
        }
    }
    tracing::debug!(lines = warehouse.inspect_stock().lines.len(), "demo stock seeded");
    Ok(())
}

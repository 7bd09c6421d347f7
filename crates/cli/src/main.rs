use std::io;

use anyhow::Context;
use wms_cli::{CliConfig, Shell};
use wms_inventory::Warehouse;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::from_env();
    wms_observability::init(config.log_format);

    let mut warehouse = Warehouse::new(config.warehouse).context("invalid warehouse configuration")?;
    if config.seed_demo {
        wms_cli::seed::seed_demo(&mut warehouse, chrono::Utc::now().date_naive())?;
    }

    tracing::info!(
        minimum_stock = config.warehouse.minimum_stock,
        alert_slots = config.warehouse.alert_capacity,
        seeded = config.seed_demo,
        "warehouse ready"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut warehouse, stdin.lock(), stdout.lock()).run()
}

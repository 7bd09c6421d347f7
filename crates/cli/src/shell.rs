//! Menu loop: `1.Receive 2.Order 3.Alerts 4.Stock 5.Quit`.

use std::io::{BufRead, Write};

use anyhow::Context;
use wms_core::{Clock, DomainError};
use wms_inventory::{FulfillmentReport, FulfillmentResult, Warehouse};

const MENU: &str = "\n1.Receive 2.Order 3.Alerts 4.Stock 5.Quit : ";

pub struct Shell<'a, C: Clock, R, W> {
    warehouse: &'a mut Warehouse<C>,
    input: R,
    output: W,
}

impl<'a, C: Clock, R: BufRead, W: Write> Shell<'a, C, R, W> {
    pub fn new(warehouse: &'a mut Warehouse<C>, input: R, output: W) -> Self {
        Self {
            warehouse,
            input,
            output,
        }
    }

    /// Run until `5` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let Some(choice) = self.prompt(MENU)? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.receive()?,
                "2" => self.order()?,
                "3" => self.alerts()?,
                "4" => self.stock()?,
                "5" => return Ok(()),
                other => writeln!(self.output, "Unknown choice: {other}")?,
            }
        }
    }

    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn receive(&mut self) -> anyhow::Result<()> {
        let Some(raw) = self.prompt("Products (e.g. A1, B3) : ")? else {
            return Ok(());
        };
        match self.warehouse.receive_stock_batch(&raw) {
            Ok(units) => {
                for unit in units {
                    writeln!(self.output, "Stock in : {} at {}", unit.sku, unit.arrival_label())?;
                }
            }
            Err(err) => self.invalid_input(&err)?,
        }
        Ok(())
    }

    fn order(&mut self) -> anyhow::Result<()> {
        let Some(raw) = self.prompt("Order : ")? else {
            return Ok(());
        };
        match self.warehouse.fulfill_order(&raw) {
            Ok(report) => self.print_report(&report)?,
            Err(err) => self.invalid_input(&err)?,
        }
        Ok(())
    }

    fn print_report(&mut self, report: &FulfillmentReport) -> anyhow::Result<()> {
        writeln!(self.output, "\n--- PACKING ---")?;
        for result in &report.results {
            match result {
                FulfillmentResult::Fulfilled { unit } => {
                    writeln!(self.output, "Out : {} (arrived {})", unit.sku, unit.arrival_label())?
                }
                FulfillmentResult::Substituted {
                    original_sku,
                    substitute_sku,
                    ..
                } => writeln!(self.output, "SUBSTITUTION : {original_sku} replaced by {substitute_sku}")?,
                FulfillmentResult::Backordered { sku } => {
                    writeln!(self.output, "SHORTAGE : {sku} missing (backorder recorded)")?
                }
            }
        }
        for sku in &report.ignored_alerts {
            writeln!(self.output, "ALERT : LOG FULL - signal on {sku} ignored")?;
        }
        Ok(())
    }

    fn alerts(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "\n--- ALERT LOG ---")?;
        for (slot, alert) in self.warehouse.acknowledge_alerts() {
            writeln!(self.output, "Slot {}: {}", slot + 1, alert.message)?;
        }
        Ok(())
    }

    fn stock(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "\n--- STOCK ---")?;
        for line in self.warehouse.inspect_stock().lines {
            let arrivals: Vec<String> = line.arrivals.iter().map(|t| t.format("%H:%M:%S").to_string()).collect();
            writeln!(self.output, "{} : [{}]", line.sku, arrivals.join(", "))?;
        }
        Ok(())
    }

    fn invalid_input(&mut self, err: &DomainError) -> anyhow::Result<()> {
        tracing::warn!(error = %err, "rejected input");
        writeln!(self.output, "Invalid input: {err}")?;
        Ok(())
    }
}

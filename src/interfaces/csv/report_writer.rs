use crate::domain::ledger::FuelStats;
use crate::domain::report::StationReport;
use crate::error::Result;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    fuel: &'a str,
    price: Option<Decimal>,
    volume_sold: Decimal,
    revenue: Decimal,
    sales: u64,
    cancelled_no_supply: u64,
    cancelled_too_expensive: u64,
}

impl<'a> ReportRow<'a> {
    fn new(fuel: &'a str, price: Option<Decimal>, stats: &FuelStats) -> Self {
        Self {
            fuel,
            price,
            volume_sold: stats.volume_sold,
            revenue: stats.revenue,
            sales: stats.sales,
            cancelled_no_supply: stats.cancelled_no_supply,
            cancelled_too_expensive: stats.cancelled_too_expensive,
        }
    }
}

/// Writes a station report as CSV: one row per fuel, then a `total` row.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_report(&mut self, report: &StationReport) -> Result<()> {
        for fuel in &report.fuels {
            self.writer
                .serialize(ReportRow::new(fuel.fuel.as_str(), fuel.price, &fuel.stats))?;
        }
        self.writer
            .serialize(ReportRow::new("total", None, &report.totals))?;
        self.writer.flush()?;
        Ok(())
    }
}

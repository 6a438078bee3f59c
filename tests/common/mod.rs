use std::fs::File;
use std::io::Error;
use std::path::Path;

const FUELS: [&str; 3] = ["diesel", "regular", "super"];

/// Writes `rows` customers cycling through the fuel types, each wanting one
/// liter at up to 2.0 per liter.
pub fn generate_customers(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["customer", "fuel", "liters", "max_price"])?;

    for i in 0..rows {
        wtr.write_record([
            format!("customer-{i}").as_str(),
            FUELS[i % FUELS.len()],
            "1",
            "2.0",
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

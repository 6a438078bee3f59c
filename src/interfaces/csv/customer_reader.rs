use crate::domain::customer::Customer;
use crate::error::{Result, StationError};
use std::io::Read;

/// Reads customers from a CSV source with a `customer,fuel,liters,max_price`
/// header.
///
/// Whitespace around fields is trimmed, so hand-written files with
/// `Ralph, diesel, 30, 1.4` style rows work as-is.
pub struct CustomerReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CustomerReader<R> {
    /// Creates a new `CustomerReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes customers. A malformed row yields an error for
    /// that row only; reading carries on with the next one.
    pub fn customers(self) -> impl Iterator<Item = Result<Customer>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(StationError::from))
    }
}

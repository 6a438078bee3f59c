use super::fuel::FuelType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer pulling over to fill up.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Customer {
    #[serde(rename = "customer")]
    pub name: String,
    pub fuel: FuelType,
    pub liters: Decimal,
    pub max_price: Decimal,
}

/// How a customer's visit ended.
#[derive(Debug, Serialize, PartialEq, Clone)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Served { cost: Decimal },
    TooExpensive,
    NoSupply,
    Refused { reason: String },
}

impl Outcome {
    pub fn is_served(&self) -> bool {
        matches!(self, Outcome::Served { .. })
    }
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Visit {
    pub customer: Customer,
    pub outcome: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_customer_deserialization() {
        let csv = "customer, fuel, liters, max_price\nRalph, diesel, 30, 1.4";
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(csv.as_bytes());
        let mut iter = reader.deserialize();

        let customer: Customer = iter
            .next()
            .unwrap()
            .expect("Failed to deserialize customer");
        assert_eq!(customer.name, "Ralph");
        assert_eq!(customer.fuel, FuelType::Diesel);
        assert_eq!(customer.liters, dec!(30));
        assert_eq!(customer.max_price, dec!(1.4));
    }

    #[test]
    fn test_outcome_serialization() {
        let json = serde_json::to_string(&Outcome::NoSupply).unwrap();
        assert_eq!(json, r#"{"outcome":"no_supply"}"#);
        assert!(Outcome::Served { cost: dec!(30) }.is_served());
        assert!(!Outcome::TooExpensive.is_served());
    }
}

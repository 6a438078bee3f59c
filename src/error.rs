use crate::domain::fuel::FuelType;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StationError {
    #[error("{fuel} costs {price} per liter, above the ceiling of {ceiling}")]
    PriceTooHigh {
        fuel: FuelType,
        price: Decimal,
        ceiling: Decimal,
    },
    #[error("no {fuel} pump holds {requested} liters")]
    InsufficientSupply { fuel: FuelType, requested: Decimal },
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("no price set for {0}")]
    UnpricedFuel(FuelType),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Config error: {0}")]
    ConfigError(String),
}

impl StationError {
    /// `true` for the two business outcomes a customer can be turned away with.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            StationError::PriceTooHigh { .. } | StationError::InsufficientSupply { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, StationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rejections_are_told_apart_from_usage_errors() {
        let too_expensive = StationError::PriceTooHigh {
            fuel: FuelType::Super,
            price: dec!(1.6),
            ceiling: dec!(1.5),
        };
        let no_supply = StationError::InsufficientSupply {
            fuel: FuelType::Diesel,
            requested: dec!(10),
        };

        assert!(too_expensive.is_rejection());
        assert!(no_supply.is_rejection());
        assert!(!StationError::ValidationError("bad".to_string()).is_rejection());
        assert!(!StationError::UnpricedFuel(FuelType::Regular).is_rejection());
    }

    #[test]
    fn test_error_messages() {
        let err = StationError::PriceTooHigh {
            fuel: FuelType::Super,
            price: dec!(1.6),
            ceiling: dec!(1.5),
        };
        assert_eq!(
            err.to_string(),
            "super costs 1.6 per liter, above the ceiling of 1.5"
        );
        assert_eq!(
            StationError::UnpricedFuel(FuelType::Diesel).to_string(),
            "no price set for diesel"
        );
    }
}

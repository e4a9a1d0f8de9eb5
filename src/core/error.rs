//! Inventory errors
//!
//! Core operations never fail. These errors only arise when a caller opts
//! into strict validation through [`ValidationPolicy`](crate::core::config::ValidationPolicy).

use miette::Diagnostic;
use thiserror::Error;

use crate::entities::part::PartNo;

/// Rejections raised by strict validation
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum InventoryError {
    #[error("part {partno} is already installed in '{machine}'")]
    #[diagnostic(
        code(mechworks::inventory::duplicate_partno),
        help("disable `strict.reject_duplicate_partno` to allow repeated part numbers")
    )]
    DuplicatePartNo { partno: PartNo, machine: String },

    #[error("part {partno} has a negative price: {price}")]
    #[diagnostic(code(mechworks::inventory::negative_price))]
    NegativePrice { partno: PartNo, price: f64 },

    #[error("{0} name must not be empty")]
    #[diagnostic(code(mechworks::inventory::empty_name))]
    EmptyName(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = InventoryError::DuplicatePartNo {
            partno: 111,
            machine: "MTX".to_string(),
        };
        assert_eq!(err.to_string(), "part 111 is already installed in 'MTX'");

        let err = InventoryError::NegativePrice {
            partno: 7,
            price: -1.5,
        };
        assert_eq!(err.to_string(), "part 7 has a negative price: -1.5");

        assert_eq!(
            InventoryError::EmptyName("machine").to_string(),
            "machine name must not be empty"
        );
    }
}

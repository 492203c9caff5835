//! Fuel price adjustment
//!
//! Contractor rates are negotiated against a reference fuel price. Each
//! billing period, every leg cost is scaled by a single multiplicative factor
//! reflecting how far the period's fuel price has drifted from that
//! reference.

use thiserror::Error;

/// Errors that can occur during fuel adjustment
#[derive(Debug, Error, PartialEq)]
pub enum FuelError {
    #[error("base fuel price must be positive, got {base_fuel_price}")]
    InvalidFuelPrice { base_fuel_price: f64 },
}

/// Compute the fuel adjustment factor for a current/base price pair
///
/// The factor is `1 + (current - base) / base`: fuel 20% above the reference
/// scales costs up 20%, fuel 20% below scales them down 20%, and
/// `current == base` yields exactly `1.0`.
///
/// `current_fuel_price` is accepted as-is, including zero or negative values;
/// plausibility of the current price is the caller's concern. A base price of
/// zero or below makes the formula undefined and fails.
///
/// # Example
/// ```
/// use transport_settlement_core_rs::fuel::calculate_fuel_factor;
///
/// let factor = calculate_fuel_factor(1200.0, 1000.0).unwrap();
/// assert_eq!(factor, 1.2);
///
/// assert!(calculate_fuel_factor(1200.0, 0.0).is_err());
/// ```
pub fn calculate_fuel_factor(
    current_fuel_price: f64,
    base_fuel_price: f64,
) -> Result<f64, FuelError> {
    if base_fuel_price <= 0.0 {
        return Err(FuelError::InvalidFuelPrice { base_fuel_price });
    }

    Ok(1.0 + (current_fuel_price - base_fuel_price) / base_fuel_price)
}

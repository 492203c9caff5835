//! Contractor tariff rule model
//!
//! A `TariffRule` is a contractor's pricing agreement for one vehicle
//! configuration:
//! - Base rate per ton-kilometer (UF)
//! - Guaranteed minimum billable weight (tons)
//! - Reference fuel price the rate was negotiated against
//!
//! Rules are created by configuration import and read-only to the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Vehicle configuration a tariff rule applies to
///
/// Closed set: an unrecognized vehicle type is a deserialization error, not a
/// pass-through value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VehicleType {
    /// Open-top semi-trailer
    Batea,

    /// Hook-lift truck, single container
    AmplirollSimple,

    /// Hook-lift truck with trailer
    AmplirollCarro,
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VehicleType::Batea => "BATEA",
            VehicleType::AmplirollSimple => "AMPLIROLL_SIMPLE",
            VehicleType::AmplirollCarro => "AMPLIROLL_CARRO",
        };
        f.write_str(name)
    }
}

/// Errors that can occur when constructing a tariff rule
#[derive(Debug, Error, PartialEq)]
pub enum TariffError {
    #[error("base rate per ton-km must be positive, got {rate}")]
    NonPositiveRate { rate: f64 },

    #[error("guaranteed minimum weight cannot be negative, got {min_weight_tons}")]
    NegativeMinWeight { min_weight_tons: f64 },

    #[error("base fuel price must be positive, got {base_fuel_price}")]
    NonPositiveBaseFuelPrice { base_fuel_price: f64 },
}

/// A contractor's pricing rule for one vehicle configuration
///
/// # Example
/// ```
/// use transport_settlement_core_rs::{TariffRule, VehicleType};
///
/// let rule = TariffRule::new(0.027, 15.0, VehicleType::Batea, 1000.0).unwrap();
/// assert_eq!(rule.min_weight_tons(), 15.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TariffRule {
    /// Rate in UF per ton per kilometer
    base_rate_per_ton_km: f64,

    /// Guaranteed minimum billable weight (tons)
    min_weight_tons: f64,

    /// Vehicle configuration this rule prices
    vehicle_type: VehicleType,

    /// Fuel price the base rate was negotiated against
    base_fuel_price: f64,
}

impl TariffRule {
    /// Create a new tariff rule
    ///
    /// # Arguments
    /// * `base_rate_per_ton_km` - Rate in UF per ton-km (must be positive)
    /// * `min_weight_tons` - Guaranteed minimum billable weight (non-negative)
    /// * `vehicle_type` - Vehicle configuration the rule applies to
    /// * `base_fuel_price` - Contractual reference fuel price (must be positive)
    pub fn new(
        base_rate_per_ton_km: f64,
        min_weight_tons: f64,
        vehicle_type: VehicleType,
        base_fuel_price: f64,
    ) -> Result<Self, TariffError> {
        if base_rate_per_ton_km <= 0.0 {
            return Err(TariffError::NonPositiveRate {
                rate: base_rate_per_ton_km,
            });
        }
        if min_weight_tons < 0.0 {
            return Err(TariffError::NegativeMinWeight { min_weight_tons });
        }
        if base_fuel_price <= 0.0 {
            return Err(TariffError::NonPositiveBaseFuelPrice { base_fuel_price });
        }

        Ok(Self {
            base_rate_per_ton_km,
            min_weight_tons,
            vehicle_type,
            base_fuel_price,
        })
    }

    /// Rate in UF per ton per kilometer
    pub fn base_rate_per_ton_km(&self) -> f64 {
        self.base_rate_per_ton_km
    }

    /// Guaranteed minimum billable weight (tons)
    pub fn min_weight_tons(&self) -> f64 {
        self.min_weight_tons
    }

    /// Vehicle configuration this rule prices
    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    /// Contractual reference fuel price
    pub fn base_fuel_price(&self) -> f64 {
        self.base_fuel_price
    }
}

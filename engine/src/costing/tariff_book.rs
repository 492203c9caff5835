//! Tariff rule lookup by vehicle type
//!
//! The orchestrator selects the contractor rule for a trip by the vehicle
//! configuration that ran it. `TariffBook` indexes the configured rules so
//! that selection is a typed lookup with duplicates rejected at build time.

use std::collections::HashMap;
use thiserror::Error;

use crate::models::{EconomicCycle, Load, RouteMap, TariffRule, VehicleType};

use super::trip::{calculate_trip_cost, CostError, TripCostResult};

/// Errors that can occur when building a tariff book
#[derive(Debug, Error, PartialEq)]
pub enum TariffBookError {
    #[error("duplicate tariff rule for vehicle type {vehicle_type}")]
    DuplicateRule { vehicle_type: VehicleType },
}

/// The contractor's configured rules, indexed by vehicle type
///
/// # Example
/// ```
/// use transport_settlement_core_rs::{TariffBook, TariffRule, VehicleType};
///
/// let book = TariffBook::from_rules(vec![
///     TariffRule::new(0.027, 15.0, VehicleType::Batea, 1000.0).unwrap(),
///     TariffRule::new(0.031, 10.0, VehicleType::AmplirollSimple, 1000.0).unwrap(),
/// ])
/// .unwrap();
///
/// assert!(book.rule_for(VehicleType::Batea).is_some());
/// assert!(book.rule_for(VehicleType::AmplirollCarro).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TariffBook {
    rules: HashMap<VehicleType, TariffRule>,
}

impl TariffBook {
    /// Build a tariff book from a list of rules
    ///
    /// Fails if two rules price the same vehicle type; which of the two the
    /// contractor meant cannot be decided here.
    pub fn from_rules(rules: Vec<TariffRule>) -> Result<Self, TariffBookError> {
        let mut map = HashMap::with_capacity(rules.len());
        for rule in rules {
            let vehicle_type = rule.vehicle_type();
            if map.insert(vehicle_type, rule).is_some() {
                return Err(TariffBookError::DuplicateRule { vehicle_type });
            }
        }
        Ok(Self { rules: map })
    }

    /// Look up the rule for a vehicle type
    pub fn rule_for(&self, vehicle_type: VehicleType) -> Option<&TariffRule> {
        self.rules.get(&vehicle_type)
    }

    /// Number of configured rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the book has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Cost a trip, selecting the tariff rule by the vehicle type that ran it
///
/// A vehicle type without a configured rule fails with the missing type
/// named, so the error message points straight at the configuration gap.
pub fn calculate_trip_cost_with_book(
    loads: &[Load],
    routes: &RouteMap,
    book: &TariffBook,
    vehicle_type: VehicleType,
    cycle: &EconomicCycle,
) -> Result<TripCostResult, CostError> {
    let rule = book
        .rule_for(vehicle_type)
        .ok_or(CostError::MissingTariff {
            vehicle_type: Some(vehicle_type),
        })?;
    calculate_trip_cost(loads, routes, Some(rule), cycle)
}

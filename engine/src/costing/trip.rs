//! Trip cost calculator
//!
//! # Trip shapes
//!
//! ```text
//! Single:        origin ──────────────────────> destination
//!                          (terminal edge)
//!
//! Consolidated:  origin A ──pickup──> origin B ──main haul──> destination
//!                 (first load only)    (all loads together)
//! ```
//!
//! A consolidated trip models one truck collecting a second load at an
//! intermediate origin instead of running two independent trips. The pickup
//! leg bills only the first load's weight; the main haul bills the combined
//! weight. Both legs use the trip's single fuel adjustment factor and the
//! tariff's guaranteed minimum weight.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::fuel::{calculate_fuel_factor, FuelError};
use crate::models::{DistanceRoute, EconomicCycle, Load, NodeId, RouteMap, TariffRule, VehicleType};

/// Errors that can occur during trip cost calculation
#[derive(Debug, Error, PartialEq)]
pub enum CostError {
    #[error("cannot cost a trip with no loads")]
    EmptyLoadList,

    #[error("no tariff rule available{}", match .vehicle_type {
        Some(vt) => format!(" for vehicle type {vt}"),
        None => String::new(),
    })]
    MissingTariff { vehicle_type: Option<VehicleType> },

    #[error(
        "no route from origin {origin_id} to destination {destination_id} \
         (segment_link={segment_link})"
    )]
    InvalidRoute {
        origin_id: NodeId,
        destination_id: NodeId,
        segment_link: bool,
    },

    #[error(transparent)]
    InvalidFuelPrice(#[from] FuelError),

    #[error("UF conversion value must be positive, got {uf_value}")]
    InvalidConversionRate { uf_value: f64 },

    #[error("consolidated trips support exactly 2 loads, got {load_count}")]
    UnsupportedConsolidation { load_count: usize },
}

/// Kind of leg a segment charge covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SegmentLabel {
    /// Only leg of a single-load trip
    Direct,

    /// Intermediate collection leg of a consolidated trip
    Pickup,

    /// Terminal leg of a consolidated trip, carrying all loads
    MainHaul,
}

impl fmt::Display for SegmentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SegmentLabel::Direct => "DIRECT",
            SegmentLabel::Pickup => "PICKUP",
            SegmentLabel::MainHaul => "MAIN_HAUL",
        };
        f.write_str(name)
    }
}

/// One leg's contribution to a trip cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentCharge {
    /// Which leg of the trip this charge covers
    pub label: SegmentLabel,

    /// Leg distance in kilometers
    pub distance_km: f64,

    /// Billable weight for the leg (after the minimum-weight floor)
    pub weight_tons: f64,

    /// Leg amount in UF
    pub amount_uf: f64,
}

/// Cost owed to the contractor for one trip
///
/// Constructed only by [`calculate_trip_cost`]; read-only to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripCostResult {
    /// Total owed in UF, the exact sum of the segment amounts
    total_cost_uf: f64,

    /// Fuel adjustment factor applied to every leg
    adjustment_factor: f64,

    /// Billable weight of the heaviest leg (the main haul on consolidated trips)
    applied_weight_tons: f64,

    /// Distance across all legs in kilometers
    total_distance_km: f64,

    /// Combined net weight of the loads, before the minimum-weight floor
    consolidated_weight_tons: f64,

    /// Per-leg amounts in leg order
    segments: Vec<SegmentCharge>,
}

impl TripCostResult {
    /// Total owed in UF
    pub fn total_cost_uf(&self) -> f64 {
        self.total_cost_uf
    }

    /// Fuel adjustment factor applied to every leg
    pub fn adjustment_factor(&self) -> f64 {
        self.adjustment_factor
    }

    /// Billable weight of the heaviest leg
    pub fn applied_weight_tons(&self) -> f64 {
        self.applied_weight_tons
    }

    /// Distance across all legs in kilometers
    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    /// Combined net weight of the loads, before the minimum-weight floor
    pub fn consolidated_weight_tons(&self) -> f64 {
        self.consolidated_weight_tons
    }

    /// Per-leg amounts in leg order
    pub fn segments(&self) -> &[SegmentCharge] {
        &self.segments
    }

    /// Convert the total to CLP at the given UF value
    ///
    /// # Example
    /// ```
    /// # use transport_settlement_core_rs::{
    /// #     calculate_trip_cost, DistanceRoute, EconomicCycle, Load, RouteMap, TariffRule,
    /// #     VehicleType,
    /// # };
    /// # use chrono::NaiveDate;
    /// # let routes = RouteMap::from_routes(vec![
    /// #     DistanceRoute::new(1, 2, 50.0, false).unwrap(),
    /// # ]).unwrap();
    /// # let tariff = TariffRule::new(0.027, 15.0, VehicleType::Batea, 1000.0).unwrap();
    /// # let cycle = EconomicCycle::new(
    /// #     37000.0, 1000.0, false,
    /// #     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
    /// #     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
    /// # ).unwrap();
    /// # let loads = [Load::new(20.0, 1, 2, false)];
    /// let result = calculate_trip_cost(&loads, &routes, Some(&tariff), &cycle).unwrap();
    /// let clp = result.to_clp(37000.0).unwrap();
    /// assert!(clp > 0.0);
    /// assert!(result.to_clp(0.0).is_err());
    /// ```
    pub fn to_clp(&self, uf_value: f64) -> Result<f64, CostError> {
        if uf_value <= 0.0 {
            return Err(CostError::InvalidConversionRate { uf_value });
        }
        Ok(self.total_cost_uf * uf_value)
    }
}

/// Compute the cost owed to the contractor for one trip
///
/// One load is priced over its direct terminal route. Two loads form a
/// consolidated trip: a pickup leg from the first load's origin to the second
/// load's origin, then a main haul from there to the final destination. More
/// than two loads is rejected: chained pickups have no agreed pricing.
///
/// Every leg bills `rate × distance × billable_weight × fuel_factor`, where
/// the billable weight is floored at the tariff's guaranteed minimum and the
/// fuel factor is computed once per trip from the cycle's fuel price against
/// the tariff's reference price.
///
/// `tariff` is the rule already selected for the trip's vehicle; passing
/// `None` reports the missing configuration rather than panicking.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use transport_settlement_core_rs::{
///     calculate_trip_cost, DistanceRoute, EconomicCycle, Load, RouteMap, TariffRule, VehicleType,
/// };
///
/// let routes = RouteMap::from_routes(vec![
///     DistanceRoute::new(1, 2, 50.0, false).unwrap(),
/// ])
/// .unwrap();
/// let tariff = TariffRule::new(0.027, 15.0, VehicleType::Batea, 1000.0).unwrap();
/// let cycle = EconomicCycle::new(
///     37000.0,
///     1200.0,
///     false,
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
/// )
/// .unwrap();
///
/// let loads = [Load::new(20.0, 1, 2, false)];
/// let result = calculate_trip_cost(&loads, &routes, Some(&tariff), &cycle).unwrap();
///
/// // 0.027 UF/ton-km × 50 km × 20 t × 1.2
/// assert!((result.total_cost_uf() - 32.4).abs() < 1e-9);
/// ```
pub fn calculate_trip_cost(
    loads: &[Load],
    routes: &RouteMap,
    tariff: Option<&TariffRule>,
    cycle: &EconomicCycle,
) -> Result<TripCostResult, CostError> {
    if loads.is_empty() {
        return Err(CostError::EmptyLoadList);
    }
    let tariff = tariff.ok_or(CostError::MissingTariff { vehicle_type: None })?;

    let fuel_factor = calculate_fuel_factor(cycle.fuel_price(), tariff.base_fuel_price())?;

    match loads {
        [load] => cost_single(load, routes, tariff, fuel_factor),
        [first, second] => cost_consolidated(first, second, routes, tariff, fuel_factor),
        _ => Err(CostError::UnsupportedConsolidation {
            load_count: loads.len(),
        }),
    }
}

fn leg_amount(tariff: &TariffRule, distance_km: f64, weight_tons: f64, fuel_factor: f64) -> f64 {
    tariff.base_rate_per_ton_km() * distance_km * weight_tons * fuel_factor
}

fn lookup_route<'a>(
    routes: &'a RouteMap,
    origin_id: NodeId,
    destination_id: NodeId,
    segment_link: bool,
) -> Result<&'a DistanceRoute, CostError> {
    routes
        .get(origin_id, destination_id, segment_link)
        .ok_or(CostError::InvalidRoute {
            origin_id,
            destination_id,
            segment_link,
        })
}

fn cost_single(
    load: &Load,
    routes: &RouteMap,
    tariff: &TariffRule,
    fuel_factor: f64,
) -> Result<TripCostResult, CostError> {
    let route = lookup_route(routes, load.origin_id, load.destination_id, false)?;

    let weight = load.net_weight_tons.max(tariff.min_weight_tons());
    let amount = leg_amount(tariff, route.distance_km(), weight, fuel_factor);

    Ok(TripCostResult {
        total_cost_uf: amount,
        adjustment_factor: fuel_factor,
        applied_weight_tons: weight,
        total_distance_km: route.distance_km(),
        consolidated_weight_tons: load.net_weight_tons,
        segments: vec![SegmentCharge {
            label: SegmentLabel::Direct,
            distance_km: route.distance_km(),
            weight_tons: weight,
            amount_uf: amount,
        }],
    })
}

fn cost_consolidated(
    first: &Load,
    second: &Load,
    routes: &RouteMap,
    tariff: &TariffRule,
    fuel_factor: f64,
) -> Result<TripCostResult, CostError> {
    // Pickup: first load rides from its origin to the second load's origin
    let pickup_route = lookup_route(routes, first.origin_id, second.origin_id, true)?;
    // Main haul: everything rides from the second origin to the final destination
    let haul_route = lookup_route(routes, second.origin_id, second.destination_id, false)?;

    let min = tariff.min_weight_tons();
    let consolidated = first.net_weight_tons + second.net_weight_tons;

    let pickup_weight = first.net_weight_tons.max(min);
    let haul_weight = consolidated.max(min);

    let pickup_amount = leg_amount(tariff, pickup_route.distance_km(), pickup_weight, fuel_factor);
    let haul_amount = leg_amount(tariff, haul_route.distance_km(), haul_weight, fuel_factor);

    Ok(TripCostResult {
        total_cost_uf: pickup_amount + haul_amount,
        adjustment_factor: fuel_factor,
        applied_weight_tons: haul_weight,
        total_distance_km: pickup_route.distance_km() + haul_route.distance_km(),
        consolidated_weight_tons: consolidated,
        segments: vec![
            SegmentCharge {
                label: SegmentLabel::Pickup,
                distance_km: pickup_route.distance_km(),
                weight_tons: pickup_weight,
                amount_uf: pickup_amount,
            },
            SegmentCharge {
                label: SegmentLabel::MainHaul,
                distance_km: haul_route.distance_km(),
                weight_tons: haul_weight,
                amount_uf: haul_amount,
            },
        ],
    })
}

//! Domain Model Tests
//!
//! Construction-time invariant checks on the value types, typed lookups, and
//! the serde shapes the orchestrator's configuration import relies on.

use chrono::NaiveDate;
use transport_settlement_core_rs::{
    BillingConcept, ClientTariff, ClientTariffError, CycleError, DistanceRoute, EconomicCycle,
    RouteError, RouteMap, TariffError, TariffRule, VehicleType,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Test Group 1: Construction invariants
// ============================================================================

#[test]
fn test_tariff_rule_rejects_non_positive_rate() {
    assert_eq!(
        TariffRule::new(-0.01, 15.0, VehicleType::Batea, 1000.0).unwrap_err(),
        TariffError::NonPositiveRate { rate: -0.01 }
    );
}

#[test]
fn test_tariff_rule_rejects_non_positive_base_fuel_price() {
    assert_eq!(
        TariffRule::new(0.027, 15.0, VehicleType::Batea, 0.0).unwrap_err(),
        TariffError::NonPositiveBaseFuelPrice {
            base_fuel_price: 0.0
        }
    );
}

#[test]
fn test_cycle_rejects_non_positive_uf_value() {
    let result = EconomicCycle::new(0.0, 1200.0, false, date(2024, 3, 1), date(2024, 3, 31));
    assert_eq!(
        result.unwrap_err(),
        CycleError::NonPositiveUfValue { uf_value: 0.0 }
    );
}

#[test]
fn test_cycle_rejects_non_positive_fuel_price() {
    let result = EconomicCycle::new(37000.0, -10.0, false, date(2024, 3, 1), date(2024, 3, 31));
    assert_eq!(
        result.unwrap_err(),
        CycleError::NonPositiveFuelPrice { fuel_price: -10.0 }
    );
}

#[test]
fn test_route_rejects_negative_distance() {
    assert_eq!(
        DistanceRoute::new(1, 2, -5.0, false).unwrap_err(),
        RouteError::NonPositiveDistance { distance_km: -5.0 }
    );
}

#[test]
fn test_client_tariff_rejects_non_positive_rate() {
    let result = ClientTariff::new(1, BillingConcept::Transporte, 0.0, 0.0, date(2024, 1, 1), None);
    assert_eq!(
        result.unwrap_err(),
        ClientTariffError::NonPositiveRate { rate_per_ton: 0.0 }
    );
}

// ============================================================================
// Test Group 2: Route map lookups
// ============================================================================

#[test]
fn test_route_map_lookup_is_directional() {
    let map = RouteMap::from_routes(vec![DistanceRoute::new(1, 2, 50.0, false).unwrap()]).unwrap();

    assert!(map.get(1, 2, false).is_some());
    assert!(map.get(2, 1, false).is_none()); // reverse direction is a different edge
}

#[test]
fn test_route_map_duplicate_detection_considers_segment_flag() {
    // Same pair twice with the same flag: duplicate
    let duplicate = RouteMap::from_routes(vec![
        DistanceRoute::new(1, 2, 50.0, true).unwrap(),
        DistanceRoute::new(1, 2, 60.0, true).unwrap(),
    ]);
    assert_eq!(
        duplicate.unwrap_err(),
        RouteError::DuplicateRoute {
            origin_id: 1,
            destination_id: 2,
            segment_link: true,
        }
    );

    // Same pair with different flags: two distinct edges
    let distinct = RouteMap::from_routes(vec![
        DistanceRoute::new(1, 2, 50.0, false).unwrap(),
        DistanceRoute::new(1, 2, 12.0, true).unwrap(),
    ])
    .unwrap();
    assert_eq!(distinct.len(), 2);
}

// ============================================================================
// Test Group 3: Configuration import shapes
// ============================================================================

#[test]
fn test_tariff_rule_deserializes_from_config_json() {
    let json = r#"{
        "base_rate_per_ton_km": 0.027,
        "min_weight_tons": 15.0,
        "vehicle_type": "AMPLIROLL_SIMPLE",
        "base_fuel_price": 1000.0
    }"#;
    let rule: TariffRule = serde_json::from_str(json).unwrap();

    assert_eq!(rule.vehicle_type(), VehicleType::AmplirollSimple);
    assert_eq!(rule.base_rate_per_ton_km(), 0.027);
}

#[test]
fn test_unknown_vehicle_type_fails_deserialization() {
    let json = r#"{
        "base_rate_per_ton_km": 0.027,
        "min_weight_tons": 15.0,
        "vehicle_type": "CAMION_TOLVA",
        "base_fuel_price": 1000.0
    }"#;
    assert!(serde_json::from_str::<TariffRule>(json).is_err());
}

#[test]
fn test_client_tariff_deserializes_open_ended_window() {
    let json = r#"{
        "client_id": 7,
        "concept": "DISPOSICION",
        "rate_per_ton": 0.3,
        "min_weight_tons": 0.0,
        "valid_from": "2024-01-01",
        "valid_to": null
    }"#;
    let tariff: ClientTariff = serde_json::from_str(json).unwrap();

    assert_eq!(tariff.concept(), BillingConcept::Disposicion);
    assert!(tariff.valid_to().is_none());
    assert!(tariff.is_valid_on(date(2031, 1, 1)));
}

#[test]
fn test_cycle_serializes_and_restores() {
    let cycle = EconomicCycle::new(
        37421.5,
        1187.0,
        true,
        date(2024, 2, 1),
        date(2024, 2, 29),
    )
    .unwrap();

    let json = serde_json::to_string(&cycle).unwrap();
    let restored: EconomicCycle = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.uf_value(), cycle.uf_value());
    assert_eq!(restored.fuel_price(), cycle.fuel_price());
    assert_eq!(restored.is_closed(), cycle.is_closed());
    assert_eq!(restored.start_date(), cycle.start_date());
    assert_eq!(restored.end_date(), cycle.end_date());
}

//! Fuel Adjustment Tests
//!
//! The factor scales contractor costs for fuel-price drift from the
//! contractual reference price:
//! - factor = 1 + (current - base) / base
//! - factor == 1.0 exactly at the reference price
//! - base <= 0 is rejected (formula undefined)

use transport_settlement_core_rs::{calculate_fuel_factor, FuelError};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Nominal factors
// ============================================================================

#[test]
fn test_fuel_rose_twenty_percent() {
    // Scenario: base 1000, current 1200 -> costs scale up 20%
    let factor = calculate_fuel_factor(1200.0, 1000.0).unwrap();
    assert_close(factor, 1.2);
}

#[test]
fn test_fuel_dropped_twenty_percent() {
    let factor = calculate_fuel_factor(800.0, 1000.0).unwrap();
    assert_close(factor, 0.8);
}

#[test]
fn test_factor_is_exactly_one_at_reference_price() {
    assert_eq!(calculate_fuel_factor(1000.0, 1000.0).unwrap(), 1.0);
    assert_eq!(calculate_fuel_factor(743.25, 743.25).unwrap(), 1.0);
}

#[test]
fn test_factor_increases_with_current_price() {
    let mut previous = calculate_fuel_factor(500.0, 1000.0).unwrap();
    for current in [750.0, 1000.0, 1250.0, 1500.0, 2000.0] {
        let factor = calculate_fuel_factor(current, 1000.0).unwrap();
        assert!(
            factor > previous,
            "factor must rise with current price, got {factor} after {previous}"
        );
        previous = factor;
    }
}

// ============================================================================
// Degenerate current prices (accepted numerically)
// ============================================================================

#[test]
fn test_zero_current_price_yields_zero_factor() {
    let factor = calculate_fuel_factor(0.0, 1000.0).unwrap();
    assert_close(factor, 0.0);
}

#[test]
fn test_negative_current_price_is_accepted() {
    // Plausibility of the current price is the caller's responsibility
    let factor = calculate_fuel_factor(-1000.0, 1000.0).unwrap();
    assert_close(factor, -1.0);
}

// ============================================================================
// Base price guard
// ============================================================================

#[test]
fn test_zero_base_price_is_rejected() {
    let err = calculate_fuel_factor(1200.0, 0.0).unwrap_err();
    assert_eq!(
        err,
        FuelError::InvalidFuelPrice {
            base_fuel_price: 0.0
        }
    );
}

#[test]
fn test_negative_base_price_is_rejected() {
    let err = calculate_fuel_factor(1200.0, -250.0).unwrap_err();
    assert_eq!(
        err,
        FuelError::InvalidFuelPrice {
            base_fuel_price: -250.0
        }
    );
}

#[test]
fn test_error_message_names_the_offending_value() {
    let err = calculate_fuel_factor(1200.0, -250.0).unwrap_err();
    assert!(err.to_string().contains("-250"));
}

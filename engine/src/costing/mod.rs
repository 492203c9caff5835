//! Transport cost calculation
//!
//! Computes the UF amount owed to the contractor operating a trip: one
//! vehicle movement carrying one load directly, or two loads consolidated
//! into a pickup leg plus a main-haul leg.
//!
//! # Critical Invariants
//!
//! 1. **Minimum-weight floor**: no leg ever bills below the tariff's
//!    guaranteed minimum weight
//! 2. **One factor per trip**: the same fuel adjustment factor scales every
//!    leg
//! 3. **Additivity**: a consolidated trip's total is exactly the sum of its
//!    leg amounts

pub mod tariff_book;
pub mod trip;

// Re-export public API
pub use tariff_book::{calculate_trip_cost_with_book, TariffBook, TariffBookError};
pub use trip::{calculate_trip_cost, CostError, SegmentCharge, SegmentLabel, TripCostResult};

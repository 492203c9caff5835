//! Economic cycle model
//!
//! The monthly billing period snapshot. Supplies the two economic inputs the
//! calculators need: the UF-to-CLP conversion value and the current fuel
//! price. Produced and closed by the external billing-cycle manager; one
//! cycle is current at a time.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when constructing an economic cycle
#[derive(Debug, Error, PartialEq)]
pub enum CycleError {
    #[error("UF value must be positive, got {uf_value}")]
    NonPositiveUfValue { uf_value: f64 },

    #[error("fuel price must be positive, got {fuel_price}")]
    NonPositiveFuelPrice { fuel_price: f64 },

    #[error("cycle end date {end_date} is before start date {start_date}")]
    EndBeforeStart {
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
}

/// The active billing period's economic snapshot
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use transport_settlement_core_rs::EconomicCycle;
///
/// let cycle = EconomicCycle::new(
///     37000.0,
///     1200.0,
///     false,
///     NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(cycle.fuel_price(), 1200.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EconomicCycle {
    /// UF-to-CLP conversion value for the period
    uf_value: f64,

    /// Current period fuel price
    fuel_price: f64,

    /// Whether the billing period has been closed (informational to the engine)
    is_closed: bool,

    /// First calendar day of the period
    start_date: NaiveDate,

    /// Last calendar day of the period
    end_date: NaiveDate,
}

impl EconomicCycle {
    /// Create a new economic cycle
    ///
    /// # Arguments
    /// * `uf_value` - UF-to-CLP conversion value (must be positive)
    /// * `fuel_price` - Current period fuel price (must be positive)
    /// * `is_closed` - Whether the period has been closed
    /// * `start_date` - First day of the period
    /// * `end_date` - Last day of the period (must not precede `start_date`)
    pub fn new(
        uf_value: f64,
        fuel_price: f64,
        is_closed: bool,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, CycleError> {
        if uf_value <= 0.0 {
            return Err(CycleError::NonPositiveUfValue { uf_value });
        }
        if fuel_price <= 0.0 {
            return Err(CycleError::NonPositiveFuelPrice { fuel_price });
        }
        if end_date < start_date {
            return Err(CycleError::EndBeforeStart {
                start_date,
                end_date,
            });
        }

        Ok(Self {
            uf_value,
            fuel_price,
            is_closed,
            start_date,
            end_date,
        })
    }

    /// UF-to-CLP conversion value for the period
    pub fn uf_value(&self) -> f64 {
        self.uf_value
    }

    /// Current period fuel price
    pub fn fuel_price(&self) -> f64 {
        self.fuel_price
    }

    /// Whether the billing period has been closed
    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    /// First calendar day of the period
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Last calendar day of the period
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Check whether a calendar date falls inside the period (inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
